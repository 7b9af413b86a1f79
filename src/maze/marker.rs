//! Cell markers and their character alphabet.

use std::fmt;

/// Semantic state of a single maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Impassable cell (`#`).
    Wall,
    /// Passable, not yet visited (`x`, space, `.`, or any other character).
    Open,
    /// The single entry cell (`e`).
    Start,
    /// The exit cell (`s`).
    Exit,
    /// A cell some branch has already claimed (rendered `.`).
    Visited,
}

impl Marker {
    /// Map an input character onto a marker. Anything that is not one of
    /// the three special characters counts as an open cell.
    pub fn from_char(c: char) -> Self {
        match c {
            '#' => Marker::Wall,
            'e' => Marker::Start,
            's' => Marker::Exit,
            _ => Marker::Open,
        }
    }

    /// Output character for this marker. `Visited` renders as `.` so it is
    /// distinguishable from `Open` in the per-step frames.
    pub fn as_char(&self) -> char {
        match self {
            Marker::Wall => '#',
            Marker::Open => 'x',
            Marker::Start => 'e',
            Marker::Exit => 's',
            Marker::Visited => '.',
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_characters_map_to_their_markers() {
        assert_eq!(Marker::from_char('#'), Marker::Wall);
        assert_eq!(Marker::from_char('e'), Marker::Start);
        assert_eq!(Marker::from_char('s'), Marker::Exit);
    }

    #[test]
    fn test_everything_else_is_open() {
        for c in ['x', ' ', '.', 'o', '0', '?'] {
            assert_eq!(Marker::from_char(c), Marker::Open, "char {:?}", c);
        }
    }

    #[test]
    fn test_visited_renders_distinct_from_open() {
        assert_ne!(Marker::Visited.as_char(), Marker::Open.as_char());
        assert_eq!(Marker::Visited.as_char(), '.');
    }

    #[test]
    fn test_display_matches_as_char() {
        for m in [
            Marker::Wall,
            Marker::Open,
            Marker::Start,
            Marker::Exit,
            Marker::Visited,
        ] {
            assert_eq!(m.to_string(), m.as_char().to_string());
        }
    }
}
