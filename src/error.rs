//! Error types and process exit codes.

use std::io;

/// Exit code when the render loop stops on a termination signal.
pub const EXIT_TERMINATED: i32 = 1;
/// Exit code when the terminal size cannot be determined.
pub const EXIT_VIEWPORT: i32 = 2;
/// Exit code when writing to the terminal fails.
pub const EXIT_OUTPUT: i32 = 3;
/// Exit code for configuration and startup failures.
pub const EXIT_CONFIG: i32 = 4;

/// Fatal errors of the render loop.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("failed to query terminal size: {0}")]
    Viewport(#[source] io::Error),

    #[error("failed to write to terminal: {0}")]
    Display(#[source] io::Error),
}

impl RunError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            RunError::Viewport(_) => EXIT_VIEWPORT,
            RunError::Display(_) => EXIT_OUTPUT,
        }
    }
}
