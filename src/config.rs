//! Runtime configuration resolved from the environment

use std::ffi::OsString;
use std::path::PathBuf;

use crate::constants::DEBUG_ENV_VAR;

/// Settings that are not compiled in
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Append diagnostics to the debug log
    pub debug: bool,
    /// Directory holding the debug log
    pub log_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            debug: false,
            log_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_debug_var(std::env::var_os(DEBUG_ENV_VAR))
    }

    /// Any non-empty value turns debugging on, whatever it says
    pub fn from_debug_var(value: Option<OsString>) -> Self {
        Config {
            debug: value.is_some_and(|v| !v.is_empty()),
            ..Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_flag_from_env_value() {
        assert!(!Config::from_debug_var(None).debug);
        assert!(!Config::from_debug_var(Some(OsString::new())).debug);
        assert!(Config::from_debug_var(Some("1".into())).debug);
        assert!(Config::from_debug_var(Some("false".into())).debug);
    }

    #[test]
    fn test_log_dir_defaults_to_cwd() {
        assert_eq!(Config::from_debug_var(None).log_dir, PathBuf::from("."));
    }
}
