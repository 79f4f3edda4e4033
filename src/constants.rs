//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

use std::time::Duration;

/// Scheme prepended to the hostname typed by the user
pub const DEFAULT_SCHEME: &str = "https";

/// Admin API path answering with the homeserver version
pub const SERVER_VERSION_PATH: &str = "/_synapse/admin/v1/server_version";

/// Timeout for the whole version request, body included
pub const CHECK_TIMEOUT: Duration = Duration::from_secs(10);

/// Maximum number of characters accepted by the hostname field
pub const HOSTNAME_CHAR_LIMIT: usize = 156;

/// Visible columns of the hostname field before it scrolls
pub const HOSTNAME_FIELD_WIDTH: usize = 20;

/// Hint shown while the hostname field is empty
pub const HOSTNAME_PLACEHOLDER: &str = "my-chat.server.com";

/// Cursor blink period of the text field
pub const BLINK_INTERVAL: Duration = Duration::from_millis(530);

/// Height of the inline terminal viewport
pub const VIEWPORT_HEIGHT: u16 = 12;

/// Environment variable enabling the debug log
pub const DEBUG_ENV_VAR: &str = "DEBUG";

/// File the debug log is appended to
pub const DEBUG_LOG_FILE: &str = "debug.log";

/// Result line shown after picking "Help"
pub const HELP_MESSAGE: &str = "Choose one option";

/// Application name
pub const APP_NAME: &str = "synapse-check";
