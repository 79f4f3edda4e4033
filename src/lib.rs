//! # synapse-check
//!
//! A small terminal session that asks for a Synapse homeserver hostname
//! and reports the version the server advertises.
//!
//! ## Flow
//! - Hostname entry: single-line field, Enter confirms, Esc quits
//! - Action menu: "Version" queries the server and ends the session,
//!   "Help" prints a hint and stays
//!
//! ## Architecture
//! - UI Layer (Ratatui) - key mapping and drawing
//! - App Layer - screens and the session state machine
//! - Network Layer (reqwest) - the version request

pub mod app;
pub mod config;
pub mod constants;
pub mod input;
pub mod logging;
pub mod messages;
pub mod models;
pub mod network;
pub mod ui;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use app::{ActionMenu, HostnameEntry, Screen, Session};
pub use config::Config;
pub use input::TextInput;
pub use messages::{EditCommand, ScreenKind, Signal, UiEvent};
pub use models::{CheckResult, MenuAction};
pub use network::{CheckError, HttpVersionChecker, VersionChecker};
