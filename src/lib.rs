//! Exhaustive enumerator for pentomino tilings of rectangular boards
//!
//! The system places each of the twelve free pentominoes exactly once onto a
//! board of 60 playable cells (6x10, 5x12, 4x15, 3x20) or an 8x8 board with a
//! blocked central 2x2 hole, reporting every distinct complete tiling and the
//! running solution count until the search space is exhausted.

#![forbid(unsafe_code)]

/// Backtracking search and the index-stable piece inventory
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Piece definitions, orientation sets, and the symmetry anchor rule
pub mod shapes;
/// Board grid and coordinate primitives
pub mod spatial;

pub use io::error::{Result, SolverError};
