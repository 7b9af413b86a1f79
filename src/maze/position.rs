//! Grid coordinates and the 4-connected cardinal neighbourhood.

/// A `(row, col)` cell coordinate. Plain value type; validity against a
/// particular grid's bounds is the grid's business, not the position's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The neighbouring position one step in `dir`, or `None` when the step
    /// would leave the grid through the zero edge. Steps past the far edge
    /// are representable and rejected later by the grid's bounds check.
    pub fn step(&self, dir: Direction) -> Option<Position> {
        match dir {
            Direction::East => Some(Position::new(self.row, self.col + 1)),
            Direction::West => self.col.checked_sub(1).map(|c| Position::new(self.row, c)),
            Direction::North => self.row.checked_sub(1).map(|r| Position::new(r, self.col)),
            Direction::South => Some(Position::new(self.row + 1, self.col)),
        }
    }
}

/// Cardinal step directions.
///
/// `ALL` lists them in the order neighbours are evaluated. The explorer
/// continues in the current thread on the *last* enterable candidate, so
/// this order is also the branch tie-break (south wins over north over west
/// over east) and is kept stable for fixture reproducibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    East,
    West,
    North,
    South,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::West,
        Direction::North,
        Direction::South,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_interior_cell() {
        let p = Position::new(2, 3);
        assert_eq!(p.step(Direction::East), Some(Position::new(2, 4)));
        assert_eq!(p.step(Direction::West), Some(Position::new(2, 2)));
        assert_eq!(p.step(Direction::North), Some(Position::new(1, 3)));
        assert_eq!(p.step(Direction::South), Some(Position::new(3, 3)));
    }

    #[test]
    fn test_step_off_zero_edges() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.step(Direction::West), None);
        assert_eq!(origin.step(Direction::North), None);
        // The far edges are the grid's problem, not the position's.
        assert_eq!(origin.step(Direction::East), Some(Position::new(0, 1)));
        assert_eq!(origin.step(Direction::South), Some(Position::new(1, 0)));
    }

    #[test]
    fn test_evaluation_order_is_fixed() {
        assert_eq!(
            Direction::ALL,
            [
                Direction::East,
                Direction::West,
                Direction::North,
                Direction::South
            ]
        );
    }
}
