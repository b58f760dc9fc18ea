//! Termination requests (Ctrl+C, SIGTERM, SIGHUP).

use std::sync::atomic::{AtomicBool, Ordering};

/// Non-blocking check for a pending termination request.
pub trait TerminationSignal {
    fn poll(&self) -> bool;
}

/// Set by the signal handler on SIGINT, SIGTERM or SIGHUP
static TERMINATION_REQUESTED: AtomicBool = AtomicBool::new(false);

/// Check if a termination signal has been received.
pub fn termination_requested() -> bool {
    TERMINATION_REQUESTED.load(Ordering::SeqCst)
}

/// Set up the termination handler.
///
/// This should be called once at program startup. With the `termination`
/// feature of `ctrlc` the handler also fires on SIGTERM and SIGHUP.
pub fn setup_termination_handler() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(move || {
        TERMINATION_REQUESTED.store(true, Ordering::SeqCst);
    })
}

/// Reads the process-wide flag set by the `ctrlc` handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct CtrlcSignal;

impl TerminationSignal for CtrlcSignal {
    fn poll(&self) -> bool {
        termination_requested()
    }
}

/// A termination flag owned by the caller.
///
/// Useful for embedding the pacer in something other than the binary.
#[derive(Debug, Default)]
pub struct ManualSignal {
    requested: AtomicBool,
}

impl ManualSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) {
        self.requested.store(true, Ordering::SeqCst);
    }
}

impl TerminationSignal for ManualSignal {
    fn poll(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }
}

impl<T: TerminationSignal + ?Sized> TerminationSignal for &T {
    fn poll(&self) -> bool {
        (**self).poll()
    }
}
