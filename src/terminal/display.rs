//! Frame output using ANSI escape codes.

use std::io::{self, Write};

use crate::render::{CellColor, Frame};

/// Move the cursor to the top-left cell.
pub const CURSOR_HOME: &str = "\x1b[H";
/// Reset all attributes.
const RESET: &str = "\x1b[0m";

/// Append the ANSI text for `frame` to `output`.
///
/// Rows are separated by `\r\n` with nothing after the last row, so a frame
/// as tall as the terminal never scrolls it. Coloured cells use 24-bit
/// foreground sequences and the colour is reset before every line break.
pub fn encode_frame(frame: &Frame, output: &mut String) {
    if frame.width() == 0 || frame.height() == 0 {
        return;
    }

    for (row, (chars, colors)) in frame.rows().enumerate() {
        if row > 0 {
            output.push_str("\r\n");
        }

        let mut current: Option<CellColor> = None;
        for (&c, &color) in chars.iter().zip(colors) {
            if color != current {
                match color {
                    // ANSI true color (24-bit): ESC[38;2;R;G;Bm for foreground
                    Some(CellColor { r, g, b }) => {
                        output.push_str(&format!("\x1b[38;2;{};{};{}m", r, g, b));
                    }
                    None => output.push_str(RESET),
                }
                current = color;
            }
            output.push(c);
        }
        if current.is_some() {
            output.push_str(RESET);
        }
    }
}

/// Writes whole frames to a terminal-like stream.
///
/// The frame is assembled into one buffer (reused between frames) and
/// written with a single call, then flushed.
pub struct TerminalDisplay<W: Write> {
    out: W,
    buffer: String,
    frames: u64,
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            buffer: String::new(),
            frames: 0,
        }
    }

    /// Home the cursor and draw `frame`.
    pub fn show(&mut self, frame: &Frame) -> io::Result<()> {
        self.buffer.clear();
        self.buffer.push_str(CURSOR_HOME);
        encode_frame(frame, &mut self.buffer);

        self.out.write_all(self.buffer.as_bytes())?;
        self.out.flush()?;
        self.frames += 1;
        Ok(())
    }

    /// Number of frames written so far.
    pub fn frames_shown(&self) -> u64 {
        self.frames
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
