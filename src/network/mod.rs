//! Network layer - homeserver version lookup
//!
//! The menu talks to a [`VersionChecker`]; the real one issues a single
//! HTTPS request through reqwest.

pub mod checker;
pub mod client;
pub mod error;

pub use checker::VersionChecker;
pub use client::HttpVersionChecker;
pub use error::CheckError;
