//! Message types flowing between the terminal loop, the screens and the session.

pub mod ui_events;
pub mod signal;

pub use ui_events::{EditCommand, ScreenKind, UiEvent};
pub use signal::Signal;
