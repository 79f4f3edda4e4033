use serde::Deserialize;

use crate::network::CheckError;

/// Entries of the action menu, in display order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Version,
    Help,
}

impl MenuAction {
    /// The fixed action list
    pub const ALL: [MenuAction; 2] = [MenuAction::Version, MenuAction::Help];

    pub fn as_str(&self) -> &'static str {
        match self {
            MenuAction::Version => "Version",
            MenuAction::Help => "Help",
        }
    }
}

/// Outcome held by the menu: nothing yet, a line to show, or the last check failure.
///
/// Holding either a message or an error, never both, is what keeps the
/// result and error lines mutually exclusive.
#[derive(Debug, Default)]
pub enum CheckResult {
    #[default]
    Unset,
    Output(String),
    Failed(CheckError),
}

impl CheckResult {
    /// Text of the "Result:" line, empty unless an output is held
    pub fn output(&self) -> &str {
        match self {
            CheckResult::Output(text) => text,
            CheckResult::Unset | CheckResult::Failed(_) => "",
        }
    }

    pub fn error(&self) -> Option<&CheckError> {
        match self {
            CheckResult::Failed(err) => Some(err),
            CheckResult::Unset | CheckResult::Output(_) => None,
        }
    }
}

/// Body of `GET /_synapse/admin/v1/server_version`
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ServerVersionResponse {
    #[serde(default)]
    pub server_version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_labels_in_order() {
        let labels: Vec<&str> = MenuAction::ALL.iter().map(|a| a.as_str()).collect();
        assert_eq!(labels, vec!["Version", "Help"]);
    }

    #[test]
    fn test_missing_server_version_defaults_to_empty() {
        let parsed: ServerVersionResponse =
            serde_json::from_str(r#"{"python_version":"3.11"}"#).unwrap();
        assert_eq!(parsed.server_version, "");
    }

    #[test]
    fn test_check_result_accessors() {
        let result = CheckResult::Output("1.2.3".to_string());
        assert_eq!(result.output(), "1.2.3");
        assert!(result.error().is_none());

        let decode = serde_json::from_str::<ServerVersionResponse>("not json").unwrap_err();
        let result = CheckResult::Failed(CheckError::Decode(decode));
        assert_eq!(result.output(), "");
        assert!(result.error().is_some());
        assert!(matches!(CheckResult::default(), CheckResult::Unset));
    }
}
