use ratatui::{prelude::*, widgets::*};

use crate::app::{HostnameEntry, Screen};

/// Draw the active screen into the frame
pub fn draw_screen(f: &mut Frame, screen: &Screen) {
    let area = f.area();

    match screen {
        Screen::EnteringHostname(entry) => {
            f.render_widget(Paragraph::new(entry.lines()), area);

            // Cursor blinks with the field's tick
            let input = entry.input();
            if input.cursor_visible() {
                let max_x = area.x + area.width.saturating_sub(1);
                let cursor_x = (area.x + input.cursor_column() as u16).min(max_x);
                let cursor_y = area.y + HostnameEntry::FIELD_ROW;
                if cursor_y < area.bottom() {
                    f.set_cursor_position(Position::new(cursor_x, cursor_y));
                }
            }
        }
        Screen::SelectingAction(menu) => {
            // Long error messages continue on the next row instead of being cut
            f.render_widget(
                Paragraph::new(menu.lines()).wrap(Wrap { trim: false }),
                area,
            );
        }
    }
}

/// Plain text of rendered lines, without styling
pub fn lines_to_string(lines: &[Line<'_>]) -> String {
    lines
        .iter()
        .map(|line| line.spans.iter().map(|span| span.content.as_ref()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
