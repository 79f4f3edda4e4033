//! Signals - what a screen asks the session to do after an event

/// Result of a screen handling one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    /// Stay on the current screen and redraw
    Continue,
    /// Hostname confirmed; hand it over to the menu
    ProceedToMenu(String),
    /// End the session
    Quit,
}
