//! Cursor visibility with panic-safe restore.

use std::io::{self, Write};
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::cursor::{Hide, Show};

/// Set while some guard has the cursor hidden (read by the panic hook).
pub(crate) static CURSOR_HIDDEN: AtomicBool = AtomicBool::new(false);

/// Hides the cursor on creation and shows it again on drop.
///
/// `std::process::exit` skips destructors, so callers that exit explicitly
/// must call [`CursorGuard::restore`] first.
pub struct CursorGuard<W: Write> {
    out: W,
    /// Whether this guard is responsible for cleanup
    active: bool,
}

impl<W: Write> CursorGuard<W> {
    /// Hide the cursor on `out` and return a guard that restores it.
    pub fn hide(mut out: W) -> io::Result<Self> {
        install_panic_hook();

        crossterm::execute!(out, Hide)?;
        CURSOR_HIDDEN.store(true, Ordering::SeqCst);

        Ok(Self { out, active: true })
    }

    /// Show the cursor now. After this the drop is a no-op.
    pub fn restore(&mut self) -> io::Result<()> {
        if self.active {
            self.active = false;
            CURSOR_HIDDEN.store(false, Ordering::SeqCst);
            crossterm::execute!(self.out, Show)?;
        }
        Ok(())
    }

    /// The wrapped writer, for drawing while the cursor is hidden.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }
}

impl<W: Write> Drop for CursorGuard<W> {
    fn drop(&mut self) {
        // Best-effort cleanup - ignore errors during drop
        let _ = self.restore();
    }
}

/// Install a panic hook that shows the cursor before the panic message.
pub(crate) fn install_panic_hook() {
    static HOOK_INSTALLED: AtomicBool = AtomicBool::new(false);

    if HOOK_INSTALLED.swap(true, Ordering::SeqCst) {
        return;
    }

    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        if CURSOR_HIDDEN.swap(false, Ordering::SeqCst) {
            let _ = crossterm::execute!(io::stdout(), Show);
        }

        original_hook(panic_info);
    }));
}
