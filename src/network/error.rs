//! Errors produced by a version check

use std::error::Error as StdError;
use std::time::Duration;

use thiserror::Error;

type BoxError = Box<dyn StdError + Send + Sync>;

/// Failure of a single version check. Every kind is shown in the menu and never retried.
///
/// Messages stay short enough for one terminal line; the URL is kept for logs only.
#[derive(Debug, Error)]
pub enum CheckError {
    /// No complete response within the request timeout
    #[error("Request timed out after {after:?}")]
    Timeout { url: String, after: Duration },

    /// DNS lookup, refused connection or TLS handshake failure
    #[error("Connection failed: {}", root_cause(.source.as_ref()))]
    Connect {
        url: String,
        #[source]
        source: BoxError,
    },

    /// Any other transport failure, e.g. a body stream cut short
    #[error("Request failed: {}", root_cause(.source.as_ref()))]
    Request {
        url: String,
        #[source]
        source: BoxError,
    },

    /// The body was not the expected JSON document
    #[error("Invalid server response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl CheckError {
    /// Classify a reqwest failure the way the menu reports it
    pub fn from_reqwest(url: impl Into<String>, err: reqwest::Error, timeout: Duration) -> Self {
        let url = url.into();
        if err.is_timeout() {
            CheckError::Timeout { url, after: timeout }
        } else if err.is_connect() {
            CheckError::Connect {
                url,
                source: err.into(),
            }
        } else {
            CheckError::Request {
                url,
                source: err.into(),
            }
        }
    }

    /// Any transport failure, as opposed to a bad body
    pub fn is_network(&self) -> bool {
        !self.is_decode()
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, CheckError::Decode(_))
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            CheckError::Timeout { url, .. }
            | CheckError::Connect { url, .. }
            | CheckError::Request { url, .. } => Some(url),
            CheckError::Decode(_) => None,
        }
    }
}

/// Message of the innermost error in the source chain
fn root_cause(err: &(dyn StdError + Send + Sync + 'static)) -> String {
    let mut current: &(dyn StdError + 'static) = err;
    while let Some(next) = current.source() {
        current = next;
    }
    current.to_string()
}
