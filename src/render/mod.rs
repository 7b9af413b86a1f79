//! Visualization hook for the exploration.
//!
//! The explorer calls [`Observer::on_cell_visited`] after each cell it
//! claims; what happens then is entirely the observer's business. The
//! console observer re-renders the whole grid per visit, which makes the
//! parallel walk watchable but also throttles it — correctness never
//! depends on the observer.

use std::io::{self, Write};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::maze::Grid;

/// Called by the explorer after each cell transition to `Visited`.
/// Implementations must not mutate the grid and should serialize their own
/// output; they may block briefly but must not stall indefinitely.
pub trait Observer: Send + Sync {
    fn on_cell_visited(&self);
}

/// Renders the grid to stdout after every visited cell, then pauses so the
/// exploration is observable at human speed.
pub struct ConsoleObserver {
    grid: Arc<Grid>,
    delay: Option<Duration>,
}

impl ConsoleObserver {
    /// Reference pacing between frames.
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(50);

    pub fn new(grid: Arc<Grid>) -> Self {
        Self {
            grid,
            delay: Some(Self::DEFAULT_DELAY),
        }
    }

    /// Set the pause after each frame; `Duration::ZERO` disables it.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = (!delay.is_zero()).then_some(delay);
        self
    }
}

impl Observer for ConsoleObserver {
    fn on_cell_visited(&self) {
        // One write while holding the stdout lock, so frames from
        // concurrent branches never interleave.
        let frame = self.grid.to_string();
        let mut out = io::stdout().lock();
        let _ = writeln!(out, "{}", frame);
        let _ = out.flush();
        drop(out);

        if let Some(delay) = self.delay {
            thread::sleep(delay);
        }
    }
}

/// No-op observer for `--quiet` runs and tests.
pub struct SilentObserver;

impl Observer for SilentObserver {
    fn on_cell_visited(&self) {}
}
