//! Shared test helpers: a scripted version checker.

use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::constants::CHECK_TIMEOUT;
use crate::network::client::parse_server_version;
use crate::network::{CheckError, VersionChecker};

/// What the stubbed network answers
pub enum StubReply {
    /// A body handed to the real decoder
    Body(String),
    /// Connection refused before any response
    Refused,
    /// No answer within the request timeout
    TimedOut,
}

/// Version checker answering every call with the same scripted reply
pub struct StubChecker {
    reply: StubReply,
    calls: AtomicUsize,
    last_host: std::sync::Mutex<Option<String>>,
}

impl StubChecker {
    pub fn new(reply: StubReply) -> Self {
        StubChecker {
            reply,
            calls: AtomicUsize::new(0),
            last_host: std::sync::Mutex::new(None),
        }
    }

    pub fn version(version: &str) -> Self {
        Self::new(StubReply::Body(format!(r#"{{"server_version":"{version}"}}"#)))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_host(&self) -> Option<String> {
        self.last_host.lock().unwrap().clone()
    }
}

#[async_trait]
impl VersionChecker for StubChecker {
    async fn check(&self, hostname: &str) -> Result<String, CheckError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_host.lock().unwrap() = Some(hostname.to_string());
        match &self.reply {
            StubReply::Body(body) => parse_server_version(body),
            StubReply::Refused => Err(CheckError::Connect {
                url: version_url(hostname),
                source: Box::new(io::Error::new(
                    io::ErrorKind::ConnectionRefused,
                    "Connection refused (os error 111)",
                )),
            }),
            StubReply::TimedOut => Err(CheckError::Timeout {
                url: version_url(hostname),
                after: CHECK_TIMEOUT,
            }),
        }
    }
}

fn version_url(hostname: &str) -> String {
    format!("https://{hostname}/_synapse/admin/v1/server_version")
}
