use std::io;

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::app::{App, AppAction, OpenFileIntent};
use crate::runtime::terminal::TerminalSession;
use crate::runtime::{EventResult, key_handler};

/// Processes one key press to completion, including any editor session it
/// triggers.
///
/// Every press clears the previous notice, bound or not. Releases are ignored.
pub(crate) fn process_key<T: TerminalSession>(
    app: &mut App,
    terminal: &mut T,
    key: KeyEvent,
) -> io::Result<EventResult> {
    if key.kind == KeyEventKind::Release {
        return Ok(EventResult::Continue);
    }

    let Some(event) = key_handler::nav_event(key) else {
        app.clear_notice();

        return Ok(EventResult::Continue);
    };

    match app.dispatch(event) {
        AppAction::Continue => {}
        AppAction::OpenFile(intent) => open_in_editor(app, terminal, &intent)?,
        AppAction::Quit => return Ok(EventResult::Quit),
    }

    Ok(EventResult::Continue)
}

/// Runs the editor with the terminal released. A missing editor never
/// releases the terminal.
fn open_in_editor<T: TerminalSession>(
    app: &mut App,
    terminal: &mut T,
    intent: &OpenFileIntent,
) -> io::Result<()> {
    if !app.ensure_editor_configured() {
        return Ok(());
    }

    terminal.suspend()?;
    app.open_file(intent);

    terminal.resume()
}
