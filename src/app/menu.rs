//! Action menu screen - runs the check against the confirmed hostname

use ratatui::prelude::*;

use crate::constants::HELP_MESSAGE;
use crate::messages::{Signal, UiEvent};
use crate::models::{CheckResult, MenuAction};
use crate::network::VersionChecker;
use crate::ui::lines_to_string;

/// Menu bound to a hostname that never changes
#[derive(Debug)]
pub struct ActionMenu {
    hostname: String,
    cursor: usize,
    result: CheckResult,
}

impl ActionMenu {
    pub fn new(hostname: String) -> Self {
        ActionMenu {
            hostname,
            cursor: 0,
            result: CheckResult::Unset,
        }
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn selected(&self) -> MenuAction {
        MenuAction::ALL[self.cursor]
    }

    pub fn result(&self) -> &CheckResult {
        &self.result
    }

    pub fn move_up(&mut self) {
        let len = MenuAction::ALL.len();
        self.cursor = (self.cursor + len - 1) % len;
    }

    pub fn move_down(&mut self) {
        self.cursor = (self.cursor + 1) % MenuAction::ALL.len();
    }

    /// Handle one event.
    ///
    /// Confirming "Version" awaits the checker inline: nothing else is
    /// processed until the request finishes or times out.
    pub async fn update<C>(&mut self, event: UiEvent, checker: &C) -> Signal
    where
        C: VersionChecker + ?Sized,
    {
        match event {
            UiEvent::MoveUp => self.move_up(),
            UiEvent::MoveDown => self.move_down(),
            UiEvent::Confirm => return self.run_selected(checker).await,
            UiEvent::Quit => return Signal::Quit,
            UiEvent::Edit(_) | UiEvent::Paste(_) | UiEvent::Tick => {}
        }
        Signal::Continue
    }

    async fn run_selected<C>(&mut self, checker: &C) -> Signal
    where
        C: VersionChecker + ?Sized,
    {
        match self.selected() {
            MenuAction::Version => {
                self.result = CheckResult::Unset;
                self.result = match checker.check(&self.hostname).await {
                    Ok(version) => CheckResult::Output(version),
                    Err(err) => CheckResult::Failed(err),
                };
                tracing::info!(hostname = %self.hostname, result = ?self.result, "Version check finished");
                Signal::Quit
            }
            MenuAction::Help => {
                self.result = CheckResult::Output(String::from(HELP_MESSAGE));
                Signal::Continue
            }
        }
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(vec![
                Span::raw("Synapse homeserver: "),
                Span::styled(self.hostname.clone(), Style::default().fg(Color::Cyan).bold()),
            ]),
            Line::default(),
        ];

        for (i, action) in MenuAction::ALL.iter().enumerate() {
            let line = if i == self.cursor {
                Line::from(Span::styled(
                    format!("(•) {}", action.as_str()),
                    Style::default().fg(Color::Yellow).bold(),
                ))
            } else {
                Line::from(format!("( ) {}", action.as_str()))
            };
            lines.push(line);
        }

        lines.push(Line::default());
        lines.push(Line::from(format!("Result: {}", self.result.output())));
        if let Some(err) = self.result.error() {
            lines.push(Line::from(Span::styled(
                format!("Error: {}", err),
                Style::default().fg(Color::Red),
            )));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "(press q to quit)",
            Style::default().fg(Color::DarkGray),
        )));
        lines
    }

    pub fn view(&self) -> String {
        lines_to_string(&self.lines())
    }
}
