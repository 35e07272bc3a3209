//! External cancellation handle (spec.md §5 "Cancellation & timeouts").

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A cheaply cloneable flag the Scanner polls at chunk boundaries.
///
/// The core never installs its own signal handler — wiring this to, say,
/// Ctrl-C is the CLI collaborator's job (spec.md §6), mirroring the
/// teacher's separation between `domain`/`application` and `presentation`.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
