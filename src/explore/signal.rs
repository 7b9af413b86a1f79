//! Shared exit-found flag.

use std::sync::atomic::{AtomicBool, Ordering};

/// Cooperative termination signal shared by every exploration branch.
///
/// Transitions `false -> true` exactly once logically; concurrent `set`
/// calls race harmlessly since the value is idempotent. Reads never block.
/// Visibility to other branches is eventual, not instant: a branch may do
/// one more step's worth of work after the flag goes up.
#[derive(Debug, Default)]
pub struct ExitSignal {
    found: AtomicBool,
}

impl ExitSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether some branch has found the exit.
    pub fn is_set(&self) -> bool {
        self.found.load(Ordering::SeqCst)
    }

    /// Record that the exit was found.
    pub fn set(&self) {
        self.found.store(true, Ordering::SeqCst);
    }
}
