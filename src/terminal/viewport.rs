//! Terminal size queries.

use std::io;

use crate::scene::Viewport;

/// Source of the current viewport size.
pub trait ViewportProvider {
    /// Current size in character cells.
    fn size(&mut self) -> io::Result<Viewport>;
}

/// Reads the size of the controlling terminal through crossterm.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalViewport;

impl TerminalViewport {
    /// Query the terminal frames are drawn to.
    pub fn stdout() -> Self {
        Self
    }
}

impl ViewportProvider for TerminalViewport {
    fn size(&mut self) -> io::Result<Viewport> {
        let (cols, rows) = crossterm::terminal::size()?;
        if cols == 0 || rows == 0 {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                format!("terminal reported an empty size ({}x{})", cols, rows),
            ));
        }
        Ok(Viewport::new(cols, rows))
    }
}
