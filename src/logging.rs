//! Optional debug log, appended to a file in the working directory

use std::path::Path;

use anyhow::Context;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};

use crate::config::Config;
use crate::constants::DEBUG_LOG_FILE;

/// Install the file logger when debugging is on.
///
/// The returned guard flushes pending lines on drop and must outlive the session.
pub fn init(config: &Config) -> anyhow::Result<Option<WorkerGuard>> {
    if !config.debug {
        return Ok(None);
    }

    let (writer, guard) = open_log_writer(&config.log_dir)?;
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();
    Ok(Some(guard))
}

/// Open `debug.log` in `dir` for appending, never rotated
pub fn open_log_writer(dir: &Path) -> anyhow::Result<(NonBlocking, WorkerGuard)> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(DEBUG_LOG_FILE)
        .build(dir)
        .with_context(|| format!("cannot open {} in {}", DEBUG_LOG_FILE, dir.display()))?;
    Ok(tracing_appender::non_blocking(appender))
}
