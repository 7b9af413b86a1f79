//! The shared maze grid and its locking discipline.

#![allow(dead_code)]

use std::fmt;
use std::sync::Mutex;

use crate::maze::marker::Marker;
use crate::maze::position::Position;

/// Outcome of an attempt to move into a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entered {
    /// The cell was the exit. It keeps its `Exit` marker; detection happens
    /// before any marking.
    Exit,
    /// The cell was open (or the start cell) and is now marked `Visited`.
    Marked,
    /// The cell cannot be entered: wall, already visited, or out of bounds.
    /// Two branches racing for the same open cell leave exactly one of them
    /// here.
    Blocked,
}

/// Fixed-size row-major cell storage shared by every exploration branch.
///
/// Dimensions are fixed at load time. All cell access goes through this
/// type, which holds the single mutex guarding the cells; callers cannot
/// reach the storage directly, so the check-and-mark step in [`Grid::enter`]
/// is atomic with respect to every other branch.
#[derive(Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Mutex<Vec<Marker>>,
}

impl Grid {
    /// Build a grid from row-major cells. `cells.len()` must equal
    /// `rows * cols`; the loader upholds this.
    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<Marker>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self {
            rows,
            cols,
            cells: Mutex::new(cells),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, pos: Position) -> Option<usize> {
        (pos.row < self.rows && pos.col < self.cols).then(|| pos.row * self.cols + pos.col)
    }

    /// The marker at `pos`, or `None` out of bounds.
    pub fn marker_at(&self, pos: Position) -> Option<Marker> {
        let idx = self.index(pos)?;
        let cells = self.cells.lock().unwrap();
        Some(cells[idx])
    }

    /// Whether a branch may move into `pos`: in bounds and currently `Open`
    /// or `Exit`. `Wall`, `Visited`, `Start`, and out-of-bounds positions
    /// are not enterable. Advisory only; the authoritative claim is
    /// [`Grid::enter`].
    pub fn is_enterable(&self, pos: Position) -> bool {
        matches!(self.marker_at(pos), Some(Marker::Open | Marker::Exit))
    }

    /// Mark the cell at `pos` as `Visited`. Out-of-bounds positions are
    /// ignored.
    pub fn mark_visited(&self, pos: Position) {
        if let Some(idx) = self.index(pos) {
            let mut cells = self.cells.lock().unwrap();
            cells[idx] = Marker::Visited;
        }
    }

    /// Atomically check-and-claim the cell at `pos` under one lock
    /// acquisition: the exit is detected (and left unmarked), an open or
    /// start cell transitions to `Visited`, anything else is refused. This
    /// is the only path by which a branch moves into a cell, so no cell is
    /// ever claimed twice.
    pub fn enter(&self, pos: Position) -> Entered {
        let Some(idx) = self.index(pos) else {
            return Entered::Blocked;
        };
        let mut cells = self.cells.lock().unwrap();
        match cells[idx] {
            Marker::Exit => Entered::Exit,
            Marker::Open | Marker::Start => {
                cells[idx] = Marker::Visited;
                Entered::Marked
            }
            Marker::Wall | Marker::Visited => Entered::Blocked,
        }
    }

    /// Row-major snapshot of the current cell state.
    pub fn snapshot(&self) -> Vec<Marker> {
        self.cells.lock().unwrap().clone()
    }
}

/// Renders one row per line in the output alphabet. Takes the cell lock
/// once for a consistent frame.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells = self.snapshot();
        for row in cells.chunks(self.cols) {
            for marker in row {
                write!(f, "{}", marker.as_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_3x3() -> Grid {
        // #e#
        // #x#
        // #s#
        let cells = "#e##x##s#".chars().map(Marker::from_char).collect();
        Grid::from_cells(3, 3, cells)
    }

    #[test]
    fn test_marker_at_and_bounds() {
        let g = grid_3x3();
        assert_eq!(g.marker_at(Position::new(0, 1)), Some(Marker::Start));
        assert_eq!(g.marker_at(Position::new(1, 1)), Some(Marker::Open));
        assert_eq!(g.marker_at(Position::new(2, 1)), Some(Marker::Exit));
        assert_eq!(g.marker_at(Position::new(3, 0)), None);
        assert_eq!(g.marker_at(Position::new(0, 3)), None);
    }

    #[test]
    fn test_is_enterable() {
        let g = grid_3x3();
        assert!(g.is_enterable(Position::new(1, 1))); // open
        assert!(g.is_enterable(Position::new(2, 1))); // exit
        assert!(!g.is_enterable(Position::new(0, 0))); // wall
        assert!(!g.is_enterable(Position::new(0, 1))); // start
        assert!(!g.is_enterable(Position::new(9, 9))); // out of bounds
    }

    #[test]
    fn test_enter_claims_open_cell_once() {
        let g = grid_3x3();
        let p = Position::new(1, 1);
        assert_eq!(g.enter(p), Entered::Marked);
        assert_eq!(g.marker_at(p), Some(Marker::Visited));
        // A second branch arriving at the same cell is refused.
        assert_eq!(g.enter(p), Entered::Blocked);
    }

    #[test]
    fn test_enter_detects_exit_without_marking() {
        let g = grid_3x3();
        let exit = Position::new(2, 1);
        assert_eq!(g.enter(exit), Entered::Exit);
        assert_eq!(g.marker_at(exit), Some(Marker::Exit));
    }

    #[test]
    fn test_enter_refuses_walls_and_out_of_bounds() {
        let g = grid_3x3();
        assert_eq!(g.enter(Position::new(0, 0)), Entered::Blocked);
        assert_eq!(g.marker_at(Position::new(0, 0)), Some(Marker::Wall));
        assert_eq!(g.enter(Position::new(5, 5)), Entered::Blocked);
    }

    #[test]
    fn test_enter_consumes_start() {
        let g = grid_3x3();
        let start = Position::new(0, 1);
        assert_eq!(g.enter(start), Entered::Marked);
        assert_eq!(g.marker_at(start), Some(Marker::Visited));
    }

    #[test]
    fn test_display_renders_rows() {
        let g = grid_3x3();
        assert_eq!(g.to_string(), "#e#\n#x#\n#s#\n");
        g.mark_visited(Position::new(1, 1));
        assert_eq!(g.to_string(), "#e#\n#.#\n#s#\n");
    }

    #[test]
    fn test_concurrent_enter_claims_exactly_once() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let g = Arc::new(Grid::from_cells(1, 1, vec![Marker::Open]));
        let wins = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let g = Arc::clone(&g);
                let wins = Arc::clone(&wins);
                std::thread::spawn(move || {
                    if g.enter(Position::new(0, 0)) == Entered::Marked {
                        wins.fetch_add(1, Ordering::SeqCst);
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(wins.load(Ordering::SeqCst), 1);
    }
}
