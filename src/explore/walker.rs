//! The fork/join maze walker.

use std::sync::Arc;
use std::thread;

use crate::explore::signal::ExitSignal;
use crate::maze::{Direction, Entered, Grid, Position};
use crate::render::Observer;

/// One shared handle on an exploration in progress.
///
/// Cloning is cheap (three `Arc`s); every spawned branch carries its own
/// clone, so the grid, the signal, and the observer live until the
/// outermost invocation returns.
#[derive(Clone)]
pub struct Explorer {
    grid: Arc<Grid>,
    signal: Arc<ExitSignal>,
    observer: Arc<dyn Observer>,
}

impl Explorer {
    pub fn new(grid: Arc<Grid>, observer: Arc<dyn Observer>) -> Self {
        Self {
            grid,
            signal: Arc::new(ExitSignal::new()),
            observer,
        }
    }

    /// Explore from `start` until the exit is found or every branch dead
    /// ends. Returns whether the exit was reached. The start position comes
    /// from the loader, which only ever hands back the coordinate of the
    /// `Start` cell it found, so it is in bounds.
    pub fn run(&self, start: Position) -> bool {
        self.explore(start);
        self.signal.is_set()
    }

    /// One branch step: claim the cell, report it, fan out.
    fn explore(&self, pos: Position) {
        // Another branch already found the exit; do no further work.
        if self.signal.is_set() {
            return;
        }

        // Exit detection and marking share one critical section, so a cell
        // is claimed by at most one branch and the exit keeps its marker.
        match self.grid.enter(pos) {
            Entered::Exit => {
                self.signal.set();
                return;
            }
            Entered::Blocked => return,
            Entered::Marked => {}
        }

        self.observer.on_cell_visited();

        let mut candidates: Vec<Position> = Vec::new();
        for dir in Direction::ALL {
            if let Some(next) = pos.step(dir) {
                if self.grid.is_enterable(next) {
                    candidates.push(next);
                }
            }
        }

        // Dead end.
        let Some(continuation) = candidates.pop() else {
            return;
        };

        // One thread per extra branch; the last candidate stays on this
        // thread. Unbounded fan-out, proportional to branch points.
        let children: Vec<thread::JoinHandle<()>> = candidates
            .into_iter()
            .map(|branch| {
                let walker = self.clone();
                thread::spawn(move || walker.explore(branch))
            })
            .collect();

        self.explore(continuation);

        for child in children {
            let _ = child.join();
        }
    }
}
