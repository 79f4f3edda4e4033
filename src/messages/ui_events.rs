//! UI events - messages from the terminal to the active screen

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Which screen currently receives input (needed for context-aware event mapping)
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ScreenKind {
    EnteringHostname,
    SelectingAction,
}

/// Editing operations understood by the text field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditCommand {
    Insert(char),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    WordLeft,
    WordRight,
    Home,
    End,
    DeleteToStart,
    DeleteToEnd,
    DeleteWordBackward,
}

/// Events generated from user input or the blink timer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    // Text field
    Edit(EditCommand),
    Paste(String),

    // Menu navigation
    MoveUp,
    MoveDown,

    // Enter on either screen
    Confirm,

    // Cursor blink timer
    Tick,

    // System
    Quit,
}

/// Convert a key event to a UiEvent based on the active screen
pub fn key_to_ui_event(key: KeyEvent, screen: ScreenKind) -> Option<UiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Global shortcuts
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }
    match key.code {
        KeyCode::Esc => return Some(UiEvent::Quit),
        KeyCode::Enter => return Some(UiEvent::Confirm),
        _ => {}
    }

    match screen {
        ScreenKind::EnteringHostname => handle_hostname_keys(key).map(UiEvent::Edit),
        ScreenKind::SelectingAction => handle_menu_keys(key),
    }
}

/// Convert a bracketed paste to a UiEvent; only the text field accepts pastes
pub fn paste_to_ui_event(text: String, screen: ScreenKind) -> Option<UiEvent> {
    match screen {
        ScreenKind::EnteringHostname => Some(UiEvent::Paste(text)),
        ScreenKind::SelectingAction => None,
    }
}

/// Handle keys for the hostname field
fn handle_hostname_keys(key: KeyEvent) -> Option<EditCommand> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    if ctrl {
        return match key.code {
            KeyCode::Char('a') => Some(EditCommand::Home),
            KeyCode::Char('e') => Some(EditCommand::End),
            KeyCode::Char('b') => Some(EditCommand::CursorLeft),
            KeyCode::Char('f') => Some(EditCommand::CursorRight),
            KeyCode::Char('d') => Some(EditCommand::Delete),
            KeyCode::Char('h') => Some(EditCommand::Backspace),
            KeyCode::Char('u') => Some(EditCommand::DeleteToStart),
            KeyCode::Char('k') => Some(EditCommand::DeleteToEnd),
            KeyCode::Char('w') => Some(EditCommand::DeleteWordBackward),
            KeyCode::Left => Some(EditCommand::WordLeft),
            KeyCode::Right => Some(EditCommand::WordRight),
            _ => None,
        };
    }

    if alt {
        return match key.code {
            KeyCode::Backspace => Some(EditCommand::DeleteWordBackward),
            KeyCode::Left | KeyCode::Char('b') => Some(EditCommand::WordLeft),
            KeyCode::Right | KeyCode::Char('f') => Some(EditCommand::WordRight),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(c) => Some(EditCommand::Insert(c)),
        KeyCode::Backspace => Some(EditCommand::Backspace),
        KeyCode::Delete => Some(EditCommand::Delete),
        KeyCode::Left => Some(EditCommand::CursorLeft),
        KeyCode::Right => Some(EditCommand::CursorRight),
        KeyCode::Home => Some(EditCommand::Home),
        KeyCode::End => Some(EditCommand::End),
        _ => None,
    }
}

/// Handle keys for the action menu
fn handle_menu_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Char('q') => Some(UiEvent::Quit),
        KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::MoveDown),
        _ => None,
    }
}
