//! synapse-check - ask for a homeserver, report its version
//!
//! Architecture:
//! - UI Layer (Ratatui) - inline terminal rendering, key mapping
//! - App Layer - session state machine over the two screens
//! - Network Layer (reqwest) - awaited inline while the menu waits

use std::io;
use std::time::Instant;

use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode},
};
use ratatui::{prelude::*, TerminalOptions, Viewport};

use synapse_check::constants::{APP_NAME, BLINK_INTERVAL, VIEWPORT_HEIGHT};
use synapse_check::messages::ui_events::{key_to_ui_event, paste_to_ui_event};
use synapse_check::{logging, ui, Config, HttpVersionChecker, Session, UiEvent, VersionChecker};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), DisableBracketedPaste);
        let _ = disable_raw_mode();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    let _log_guard = logging::init(&config)?;
    tracing::info!(app = APP_NAME, version = env!("CARGO_PKG_VERSION"), "Starting");

    // Terminal setup
    enable_raw_mode()?;
    let terminal_guard = TerminalGuard;
    let mut stdout = io::stdout();
    execute!(stdout, EnableBracketedPaste)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::with_options(
        backend,
        TerminalOptions {
            viewport: Viewport::Inline(VIEWPORT_HEIGHT),
        },
    )?;

    let mut session = Session::new(HttpVersionChecker::new());
    run_session(&mut terminal, &mut session).await?;

    // Keep the last frame visible and continue below it
    let area = terminal.get_frame().area();
    terminal.set_cursor_position(Position::new(0, area.bottom().saturating_sub(1)))?;
    terminal.show_cursor()?;
    drop(terminal_guard);
    println!();

    tracing::info!("Exiting");
    Ok(())
}

/// Run the event loop until the session ends
async fn run_session<C: VersionChecker>(
    terminal: &mut Terminal<impl Backend>,
    session: &mut Session<C>,
) -> anyhow::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw_screen(f, session.screen()))?;

        // Poll for events until the next blink is due
        let timeout = BLINK_INTERVAL.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            let ui_event = match event::read()? {
                Event::Key(key) => key_to_ui_event(key, session.kind()),
                Event::Paste(text) => paste_to_ui_event(text, session.kind()),
                _ => None,
            };
            if let Some(ui_event) = ui_event {
                tracing::debug!(event = ?ui_event, screen = ?session.kind(), "UI event");
                if session.handle_event(ui_event).await {
                    break;
                }
            }
        }

        if last_tick.elapsed() >= BLINK_INTERVAL {
            last_tick = Instant::now();
            session.handle_event(UiEvent::Tick).await;
        }
    }

    // Show the outcome before handing the terminal back
    terminal.draw(|f| ui::draw_screen(f, session.screen()))?;
    Ok(())
}
