//! Terminal setup and teardown for the full-screen interface

use std::io;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

pub type Tui = Terminal<CrosstermBackend<io::Stdout>>;

/// Raw mode plus alternate screen. If any step fails the terminal is put
/// back the way it was before the error is returned.
pub fn enter() -> io::Result<Tui> {
    enable_raw_mode()?;
    undo_on_error(open_screen, restore_screen)
}

/// Undo [`enter`]
pub fn leave(terminal: &mut Tui) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

fn open_screen() -> io::Result<Tui> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Best effort; the setup error is the one worth reporting.
fn restore_screen() {
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

/// Run `step`; if it fails, run `undo` before handing the error back.
pub(crate) fn undo_on_error<T>(
    step: impl FnOnce() -> io::Result<T>,
    undo: impl FnOnce(),
) -> io::Result<T> {
    step().inspect_err(|_| undo())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_failed_setup_is_undone() {
        let undone = Cell::new(false);
        let result: io::Result<()> = undo_on_error(
            || Err(io::Error::other("no tty")),
            || undone.set(true),
        );
        assert_eq!(result.unwrap_err().to_string(), "no tty");
        assert!(undone.get());
    }

    #[test]
    fn test_successful_setup_is_kept() {
        let undone = Cell::new(false);
        let value = undo_on_error(|| Ok(7), || undone.set(true)).unwrap();
        assert_eq!(value, 7);
        assert!(!undone.get());
    }
}
