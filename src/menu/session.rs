use std::io;

use console::Term;
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

use super::Input;
use crate::error::ConfigError;

// ── Terminal session ──────────────────────────────────────────────────────────

/// Owns the terminal while the checklist is on screen.
///
/// Opening enables raw mode, switches to the alternate screen and hides the
/// cursor; dropping undoes all three. Raw mode is held for the whole session,
/// so Ctrl-C is read as a key (even mid-redraw) instead of raising SIGINT.
pub struct TerminalSession {
    term: Term,
}

impl TerminalSession {
    pub fn open() -> Result<Self, ConfigError> {
        let term = Term::buffered_stdout();
        if !term.is_term() {
            return Err(ConfigError::Terminal(io::Error::new(
                io::ErrorKind::Unsupported,
                "stdout is not a terminal",
            )));
        }

        enable_raw_mode().map_err(ConfigError::Terminal)?;
        // From here on `Drop` restores whatever was entered.
        let session = Self { term };
        execute!(io::stdout(), EnterAlternateScreen, Hide).map_err(ConfigError::Terminal)?;
        Ok(session)
    }

    /// `(rows, cols)` of the terminal.
    pub fn size(&self) -> (usize, usize) {
        let (rows, cols) = self.term.size();
        (rows as usize, cols as usize)
    }

    /// Repaints the whole screen.
    pub fn draw(&self, frame: &[String]) -> Result<(), ConfigError> {
        self.paint(frame).map_err(ConfigError::Terminal)
    }

    // Raw mode turns off `\n` → `\r\n`, so every row is addressed directly.
    fn paint(&self, frame: &[String]) -> io::Result<()> {
        self.term.clear_screen()?;
        for (y, line) in frame.iter().enumerate() {
            self.term.move_cursor_to(0, y)?;
            self.term.write_str(line)?;
        }
        self.term.flush()
    }

    /// Blocks for one keypress.
    pub fn read_input(&self) -> Result<Input, ConfigError> {
        match self.term.read_key() {
            Ok(key) => Ok(Input::from_key(key)),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => Ok(Input::Interrupt),
            Err(e) => Err(ConfigError::Terminal(e)),
        }
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.term.flush();
        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}
