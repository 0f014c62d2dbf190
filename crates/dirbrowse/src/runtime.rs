use std::io;

use crossterm::event::Event;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::app::App;
use crate::ui::{self, style::Theme};

mod event;
mod key_handler;
mod terminal;

pub(crate) type TuiTerminal = Terminal<CrosstermBackend<io::Stdout>>;

pub(crate) enum EventResult {
    Continue,
    Quit,
}

/// Runs the TUI event/render loop until the user quits.
///
/// Events are read and processed one at a time on the calling thread; a
/// directory read or editor session blocks the loop until it finishes.
///
/// # Errors
/// Returns an error if terminal setup, rendering, or event reading fails.
pub fn run(app: &mut App, theme: &Theme) -> io::Result<()> {
    let _terminal_guard = terminal::TerminalGuard;
    let mut terminal = terminal::setup_terminal()?;

    loop {
        render_frame(app, theme, &mut terminal)?;

        let Event::Key(key) = crossterm::event::read()? else {
            continue;
        };

        if matches!(
            event::process_key(app, &mut terminal, key)?,
            EventResult::Quit
        ) {
            break;
        }
    }

    terminal.show_cursor()?;

    Ok(())
}

fn render_frame(app: &App, theme: &Theme, terminal: &mut TuiTerminal) -> io::Result<()> {
    terminal.draw(|frame| {
        ui::render(
            frame,
            ui::RenderContext {
                notice: app.notice(),
                state: app.state(),
                theme,
            },
        );
    })?;

    Ok(())
}
