//! One animation session from hidden cursor to exit code.

use std::io::Write;

use crate::config::Settings;
use crate::error::{EXIT_OUTPUT, EXIT_TERMINATED};
use crate::pacer::{FramePacer, Stop};
use crate::signal::TerminationSignal;
use crate::terminal::{CursorGuard, ViewportProvider};

/// Hide the cursor, run the pacer until it stops, show the cursor again and
/// return the process exit code.
///
/// The cursor is restored before anything is reported, on every path.
pub fn run_session<V, S, W>(settings: Settings, viewport: V, signal: S, out: W) -> i32
where
    V: ViewportProvider,
    S: TerminationSignal,
    W: Write,
{
    let mut cursor = match CursorGuard::hide(out) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: failed to write to terminal: {}", e);
            return EXIT_OUTPUT;
        }
    };

    let result =
        FramePacer::new(settings.scene, settings.pacer, viewport, signal, cursor.get_mut()).run();

    let _ = cursor.restore();
    // leave the last frame intact and start any message on a new line
    let _ = writeln!(cursor.get_mut());
    let _ = cursor.get_mut().flush();

    match result {
        Ok(Stop::Terminated) => {
            eprintln!("terminated");
            EXIT_TERMINATED
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}
