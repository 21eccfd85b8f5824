//! Terminal backends.

use std::io::{self, Write};

use crossterm::{cursor, execute, terminal};

use crate::error::{Result, WarrenError};

/// Abstraction over the terminal control library.
///
/// Implemented by [`CrosstermScreen`] for real terminals and by
/// [`crate::term::MockScreen`] in tests.
pub trait ScreenBackend {
    /// Switch the terminal into full-screen game mode: raw input (no line
    /// buffering, no echo, no newline translation, special keys decoded),
    /// alternate screen, cursor hidden.
    fn acquire(&mut self) -> Result<()>;

    /// Restore the terminal to its normal cooked state.
    fn release(&mut self) -> Result<()>;

    /// Current dimensions as `(rows, cols)`.
    fn dimensions(&self) -> Result<(u16, u16)>;

    /// Whether the attached terminal reports color support.
    fn supports_color(&self) -> bool;
}

/// Real terminal backend over crossterm.
#[derive(Debug, Default)]
pub struct CrosstermScreen;

impl CrosstermScreen {
    pub fn new() -> Self {
        Self
    }
}

impl ScreenBackend for CrosstermScreen {
    fn acquire(&mut self) -> Result<()> {
        terminal::enable_raw_mode().map_err(|err| WarrenError::Terminal {
            message: format!("enable raw mode: {err}"),
        })?;
        execute!(
            io::stdout(),
            terminal::EnterAlternateScreen,
            cursor::Hide
        )
        .map_err(|err| WarrenError::Terminal {
            message: format!("enter alternate screen: {err}"),
        })?;
        Ok(())
    }

    fn release(&mut self) -> Result<()> {
        let mut stdout = io::stdout();
        execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen).map_err(|err| {
            WarrenError::Terminal {
                message: format!("leave alternate screen: {err}"),
            }
        })?;
        terminal::disable_raw_mode().map_err(|err| WarrenError::Terminal {
            message: format!("disable raw mode: {err}"),
        })?;
        stdout.flush().map_err(|err| WarrenError::Terminal {
            message: format!("flush terminal: {err}"),
        })?;
        Ok(())
    }

    fn dimensions(&self) -> Result<(u16, u16)> {
        let (cols, rows) = terminal::size().map_err(|err| WarrenError::Terminal {
            message: format!("query terminal size: {err}"),
        })?;
        Ok((rows, cols))
    }

    fn supports_color(&self) -> bool {
        console::colors_enabled()
    }
}
