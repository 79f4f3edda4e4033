//! Hostname entry screen - first screen of the session

use ratatui::prelude::*;

use crate::constants::{HOSTNAME_CHAR_LIMIT, HOSTNAME_FIELD_WIDTH, HOSTNAME_PLACEHOLDER};
use crate::input::TextInput;
use crate::messages::{Signal, UiEvent};
use crate::ui::lines_to_string;

const TITLE: &str = "Provide Synapse Homeserver URL";
const FOOTER: &str = "(press esc to quit)";

/// Asks for the homeserver hostname
#[derive(Clone, Debug)]
pub struct HostnameEntry {
    input: TextInput,
}

impl Default for HostnameEntry {
    fn default() -> Self {
        Self::new()
    }
}

impl HostnameEntry {
    /// Row of the text field inside the rendered screen
    pub const FIELD_ROW: u16 = 2;

    pub fn new() -> Self {
        HostnameEntry {
            input: TextInput::new(HOSTNAME_CHAR_LIMIT, HOSTNAME_FIELD_WIDTH)
                .with_placeholder(HOSTNAME_PLACEHOLDER),
        }
    }

    pub fn input(&self) -> &TextInput {
        &self.input
    }

    /// Handle one event. The value is handed over exactly as typed.
    pub fn update(&mut self, event: UiEvent) -> Signal {
        match event {
            UiEvent::Edit(command) => {
                self.input.apply(command);
                Signal::Continue
            }
            UiEvent::Paste(text) => {
                self.input.insert_str(&text);
                Signal::Continue
            }
            UiEvent::Tick => {
                self.input.tick();
                Signal::Continue
            }
            UiEvent::Confirm => Signal::ProceedToMenu(self.input.value()),
            UiEvent::Quit => Signal::Quit,
            UiEvent::MoveUp | UiEvent::MoveDown => Signal::Continue,
        }
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        let text_style = if self.input.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };
        let field = Line::from(vec![
            Span::styled(self.input.prompt().to_string(), Style::default().fg(Color::Cyan)),
            Span::styled(self.input.visible_text(), text_style),
        ]);

        vec![
            Line::from(Span::styled(TITLE, Style::default().bold())),
            Line::default(),
            field,
            Line::from(Span::styled(FOOTER, Style::default().fg(Color::DarkGray))),
        ]
    }

    pub fn view(&self) -> String {
        lines_to_string(&self.lines())
    }
}
