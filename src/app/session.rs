//! Session - drives hostname entry, then the action menu

use crate::app::{ActionMenu, HostnameEntry};
use crate::messages::{ScreenKind, Signal, UiEvent};
use crate::network::VersionChecker;

/// The screen currently receiving input
#[derive(Debug)]
pub enum Screen {
    EnteringHostname(HostnameEntry),
    SelectingAction(ActionMenu),
}

impl Screen {
    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::EnteringHostname(_) => ScreenKind::EnteringHostname,
            Screen::SelectingAction(_) => ScreenKind::SelectingAction,
        }
    }
}

/// Runs the two screens in order; once finished it ignores further events
pub struct Session<C> {
    screen: Screen,
    checker: C,
    finished: bool,
}

impl<C: VersionChecker> Session<C> {
    pub fn new(checker: C) -> Self {
        Session {
            screen: Screen::EnteringHostname(HostnameEntry::new()),
            checker,
            finished: false,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn kind(&self) -> ScreenKind {
        self.screen.kind()
    }

    /// Handle a UI event, returns true if the session is over
    pub async fn handle_event(&mut self, event: UiEvent) -> bool {
        if self.finished {
            return true;
        }

        let signal = match &mut self.screen {
            Screen::EnteringHostname(entry) => entry.update(event),
            Screen::SelectingAction(menu) => menu.update(event, &self.checker).await,
        };

        match signal {
            Signal::Continue => {}
            Signal::ProceedToMenu(hostname) if hostname.is_empty() => {
                tracing::info!("Empty hostname confirmed, ending session");
                self.finished = true;
            }
            Signal::ProceedToMenu(hostname) => {
                tracing::info!(hostname = %hostname, "Hostname confirmed, opening menu");
                self.screen = Screen::SelectingAction(ActionMenu::new(hostname));
            }
            Signal::Quit => {
                tracing::info!(screen = ?self.kind(), "Session quit");
                self.finished = true;
            }
        }

        self.finished
    }
}
