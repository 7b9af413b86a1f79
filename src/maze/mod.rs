//! Maze representation: cell markers, coordinates, and the shared grid.
//!
//! The [`Grid`] owns the cell storage and the mutual-exclusion discipline
//! around it; exploration threads share it through an `Arc` and can only
//! observe or mutate cells through its methods.

pub mod grid;
pub mod marker;
pub mod position;

pub use grid::{Entered, Grid};
pub use marker::Marker;
pub use position::{Direction, Position};
