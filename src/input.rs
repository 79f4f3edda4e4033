//! Single-line text field with a length cap and a scrolling window.
//!
//! The value and cursor are tracked in chars; the window is measured in
//! terminal columns, so wide characters take two cells.

use std::ops::Range;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::messages::EditCommand;

/// Editable single-line text field
#[derive(Clone, Debug)]
pub struct TextInput {
    value: Vec<char>,
    /// Cursor position as char index (0..=value.len())
    pos: usize,
    /// First visible char when the value is wider than the field
    offset: usize,
    char_limit: usize,
    /// Field width in columns
    width: usize,
    placeholder: String,
    prompt: String,
    cursor_visible: bool,
}

impl TextInput {
    pub fn new(char_limit: usize, width: usize) -> Self {
        TextInput {
            value: Vec::new(),
            pos: 0,
            offset: 0,
            char_limit,
            width: width.max(1),
            placeholder: String::new(),
            prompt: String::from("> "),
            cursor_visible: true,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// Column of the cursor inside the rendered line, prompt included
    pub fn cursor_column(&self) -> usize {
        self.prompt.width() + self.columns(self.offset..self.pos)
    }

    /// Apply one editing command
    pub fn apply(&mut self, command: EditCommand) {
        match command {
            EditCommand::Insert(c) => self.insert_char(c),
            EditCommand::Backspace => self.delete_char_before(),
            EditCommand::Delete => self.delete_char_after(),
            EditCommand::CursorLeft => self.pos = self.pos.saturating_sub(1),
            EditCommand::CursorRight => self.pos = (self.pos + 1).min(self.value.len()),
            EditCommand::WordLeft => self.pos = self.word_start_before(self.pos),
            EditCommand::WordRight => self.pos = self.word_end_after(self.pos),
            EditCommand::Home => self.pos = 0,
            EditCommand::End => self.pos = self.value.len(),
            EditCommand::DeleteToStart => {
                self.value.drain(..self.pos);
                self.pos = 0;
            }
            EditCommand::DeleteToEnd => self.value.truncate(self.pos),
            EditCommand::DeleteWordBackward => {
                let start = self.word_start_before(self.pos);
                self.value.drain(start..self.pos);
                self.pos = start;
            }
        }
        self.cursor_visible = true;
        self.update_offset();
    }

    /// Insert pasted text at the cursor. Control characters are dropped and
    /// whatever does not fit under the limit is cut off.
    pub fn insert_str(&mut self, text: &str) {
        let room = self.char_limit.saturating_sub(self.value.len());
        let incoming: Vec<char> = text.chars().filter(|c| !c.is_control()).take(room).collect();
        let count = incoming.len();
        self.value.splice(self.pos..self.pos, incoming);
        self.pos += count;
        self.cursor_visible = true;
        self.update_offset();
    }

    /// Blink timer tick; only cursor visibility changes
    pub fn tick(&mut self) {
        self.cursor_visible = !self.cursor_visible;
    }

    /// Visible part of the value, or the placeholder while empty
    pub fn visible_text(&self) -> String {
        if self.value.is_empty() {
            fit_columns(self.placeholder.chars(), self.width)
        } else {
            fit_columns(self.value[self.offset..].iter().copied(), self.width)
        }
    }

    /// The rendered line: prompt followed by the visible text
    pub fn view(&self) -> String {
        format!("{}{}", self.prompt, self.visible_text())
    }

    fn insert_char(&mut self, c: char) {
        if c.is_control() || self.value.len() >= self.char_limit {
            return;
        }
        self.value.insert(self.pos, c);
        self.pos += 1;
    }

    fn delete_char_before(&mut self) {
        if self.pos > 0 {
            self.value.remove(self.pos - 1);
            self.pos -= 1;
        }
    }

    fn delete_char_after(&mut self) {
        if self.pos < self.value.len() {
            self.value.remove(self.pos);
        }
    }

    fn word_start_before(&self, from: usize) -> usize {
        let mut i = from;
        while i > 0 && self.value[i - 1].is_whitespace() {
            i -= 1;
        }
        while i > 0 && !self.value[i - 1].is_whitespace() {
            i -= 1;
        }
        i
    }

    fn word_end_after(&self, from: usize) -> usize {
        let len = self.value.len();
        let mut i = from;
        while i < len && self.value[i].is_whitespace() {
            i += 1;
        }
        while i < len && !self.value[i].is_whitespace() {
            i += 1;
        }
        i
    }

    fn columns(&self, range: Range<usize>) -> usize {
        self.value[range].iter().map(|&c| char_width(c)).sum()
    }

    /// Keep the cursor inside the visible window
    fn update_offset(&mut self) {
        let len = self.value.len();
        if self.columns(0..len) <= self.width {
            self.offset = 0;
            return;
        }
        if self.pos < self.offset {
            self.offset = self.pos;
        }
        while self.columns(self.offset..self.pos) > self.width {
            self.offset += 1;
        }
        // No blank tail while there is hidden text on the left
        while self.offset > 0 && self.columns(self.offset - 1..len) <= self.width {
            self.offset -= 1;
        }
    }
}

fn char_width(c: char) -> usize {
    UnicodeWidthChar::width(c).unwrap_or(0)
}

/// Longest prefix of `chars` that fits in `width` columns
fn fit_columns(chars: impl Iterator<Item = char>, width: usize) -> String {
    let mut used = 0;
    chars
        .take_while(|&c| {
            used += char_width(c);
            used <= width
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{HOSTNAME_CHAR_LIMIT, HOSTNAME_FIELD_WIDTH};

    fn field() -> TextInput {
        TextInput::new(HOSTNAME_CHAR_LIMIT, HOSTNAME_FIELD_WIDTH).with_placeholder("my-chat.server.com")
    }

    fn type_str(input: &mut TextInput, text: &str) {
        for c in text.chars() {
            input.apply(EditCommand::Insert(c));
        }
    }

    #[test]
    fn test_insert_and_backspace() {
        let mut input = field();
        type_str(&mut input, "matrix.org");
        assert_eq!(input.value(), "matrix.org");
        assert_eq!(input.pos, 10);

        input.apply(EditCommand::Backspace);
        assert_eq!(input.value(), "matrix.or");
        assert_eq!(input.pos, 9);
    }

    #[test]
    fn test_insert_in_the_middle() {
        let mut input = field();
        type_str(&mut input, "matrx.org");
        for _ in 0..5 {
            input.apply(EditCommand::CursorLeft);
        }
        input.apply(EditCommand::Insert('i'));
        assert_eq!(input.value(), "matrix.org");
        assert_eq!(input.pos, 5);
    }

    #[test]
    fn test_char_limit_accepts_156_rejects_157th() {
        let mut input = field();
        let full = "a".repeat(HOSTNAME_CHAR_LIMIT);
        type_str(&mut input, &full);
        assert_eq!(input.value(), full);

        input.apply(EditCommand::Insert('b'));
        assert_eq!(input.value.len(), HOSTNAME_CHAR_LIMIT);
        assert_eq!(input.value(), full);
    }

    #[test]
    fn test_paste_is_truncated_at_limit() {
        let mut input = TextInput::new(5, 20);
        input.insert_str("ab\ncdefgh");
        assert_eq!(input.value(), "abcde");
        assert_eq!(input.pos, 5);
    }

    #[test]
    fn test_cursor_bounds() {
        let mut input = field();
        input.apply(EditCommand::CursorLeft);
        input.apply(EditCommand::Backspace);
        input.apply(EditCommand::Delete);
        assert_eq!(input.pos, 0);
        assert!(input.is_empty());

        type_str(&mut input, "abc");
        input.apply(EditCommand::CursorRight);
        assert_eq!(input.pos, 3);
        input.apply(EditCommand::Home);
        assert_eq!(input.pos, 0);
        input.apply(EditCommand::Delete);
        assert_eq!(input.value(), "bc");
        input.apply(EditCommand::End);
        assert_eq!(input.pos, 2);
    }

    #[test]
    fn test_kill_commands() {
        let mut input = field();
        type_str(&mut input, "chat.example.org");
        for _ in 0..4 {
            input.apply(EditCommand::CursorLeft);
        }
        input.apply(EditCommand::DeleteToEnd);
        assert_eq!(input.value(), "chat.example");

        input.apply(EditCommand::CursorLeft);
        input.apply(EditCommand::DeleteToStart);
        assert_eq!(input.value(), "e");
        assert_eq!(input.pos, 0);
    }

    #[test]
    fn test_word_movement_and_deletion() {
        let mut input = field();
        type_str(&mut input, "one two  three");
        input.apply(EditCommand::DeleteWordBackward);
        assert_eq!(input.value(), "one two  ");

        input.apply(EditCommand::DeleteWordBackward);
        assert_eq!(input.value(), "one ");

        input.apply(EditCommand::WordLeft);
        assert_eq!(input.pos, 0);
        input.apply(EditCommand::WordRight);
        assert_eq!(input.pos, 3);
    }

    #[test]
    fn test_view_shows_placeholder_when_empty() {
        let input = field();
        assert_eq!(input.view(), "> my-chat.server.com");
    }

    #[test]
    fn test_view_scrolls_with_cursor() {
        let mut input = TextInput::new(156, 5);
        type_str(&mut input, "abcdefgh");
        assert_eq!(input.view(), "> defgh");
        assert_eq!(input.cursor_column(), 2 + 5);

        input.apply(EditCommand::Home);
        assert_eq!(input.view(), "> abcde");
        assert_eq!(input.cursor_column(), 2);

        input.apply(EditCommand::End);
        assert_eq!(input.view(), "> defgh");
    }

    #[test]
    fn test_window_has_no_blank_tail_after_deleting() {
        let mut input = TextInput::new(156, 5);
        type_str(&mut input, "abcdefgh");
        input.apply(EditCommand::Backspace);
        input.apply(EditCommand::Backspace);
        assert_eq!(input.view(), "> bcdef");
    }

    #[test]
    fn test_wide_chars_scroll_by_columns() {
        let mut input = TextInput::new(156, 10);
        type_str(&mut input, "例え例え例え");
        assert_eq!(input.view(), "> え例え例え");
        assert_eq!(input.cursor_column(), 2 + 10);

        input.apply(EditCommand::Home);
        assert_eq!(input.view(), "> 例え例え例");
        assert_eq!(input.cursor_column(), 2);

        input.apply(EditCommand::CursorRight);
        input.apply(EditCommand::CursorRight);
        assert_eq!(input.cursor_column(), 2 + 4);
    }

    #[test]
    fn test_wide_chars_never_overflow_the_field() {
        let mut input = TextInput::new(156, 5);
        type_str(&mut input, "例え例");
        assert_eq!(input.view(), "> え例");
        assert_eq!(input.cursor_column(), 2 + 4);

        input.apply(EditCommand::Home);
        assert_eq!(input.view(), "> 例え");
        assert_eq!(input.value(), "例え例");
    }

    #[test]
    fn test_tick_toggles_only_visibility() {
        let mut input = field();
        type_str(&mut input, "host");
        assert!(input.cursor_visible());
        input.tick();
        assert!(!input.cursor_visible());
        assert_eq!(input.value(), "host");
        assert_eq!(input.pos, 4);

        input.apply(EditCommand::CursorLeft);
        assert!(input.cursor_visible());
    }
}
