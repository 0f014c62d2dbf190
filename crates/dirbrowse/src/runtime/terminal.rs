use std::io;

use crossterm::cursor::Show;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::runtime::TuiTerminal;

/// Restores terminal state on all exit paths after raw mode is enabled.
///
/// Cleanup lives in `Drop` so it runs on normal exit, on early `?` returns
/// from the event loop, and while unwinding a panic.
pub(crate) struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = disable_raw_mode();
        let _ = execute!(stdout, LeaveAlternateScreen, Show);
    }
}

/// Enables raw mode and enters the alternate screen.
pub(crate) fn setup_terminal() -> io::Result<TuiTerminal> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);

    Terminal::new(backend)
}

/// Hands the terminal to a child process and takes it back afterwards.
pub(crate) trait TerminalSession {
    /// Leaves raw mode and the alternate screen.
    fn suspend(&mut self) -> io::Result<()>;

    /// Re-enters raw mode and the alternate screen and forces a full redraw.
    fn resume(&mut self) -> io::Result<()>;
}

impl TerminalSession for TuiTerminal {
    fn suspend(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(self.backend_mut(), LeaveAlternateScreen, Show)?;

        Ok(())
    }

    fn resume(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        execute!(self.backend_mut(), EnterAlternateScreen)?;
        self.clear()
    }
}
