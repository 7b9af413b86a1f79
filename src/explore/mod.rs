//! Parallel depth-first exploration.
//!
//! The explorer walks the grid recursively; every branch point spawns one
//! new thread per extra candidate neighbour and continues on the last one
//! in the current thread, then joins its children before returning
//! (fork/join). A shared [`ExitSignal`] stops new work cooperatively once
//! any branch reaches the exit; branches already past their entry check
//! finish their current step, which is accepted behaviour.

pub mod signal;
pub mod walker;

pub use signal::ExitSignal;
pub use walker::Explorer;
