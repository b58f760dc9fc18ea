//! Terminal plumbing: size queries, cursor visibility and frame output.
//!
//! # Structure
//!
//! - [`viewport`] - Terminal size provider
//! - [`display`] - ANSI frame writer
//! - [`cursor`] - Cursor hide/show guard

mod cursor;
mod display;
mod viewport;

pub use cursor::CursorGuard;
pub use display::{encode_frame, TerminalDisplay, CURSOR_HOME};
pub use viewport::{TerminalViewport, ViewportProvider};
