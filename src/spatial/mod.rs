//! Spatial data structures for the board and piece geometry
//!
//! This module contains geometry-related functionality including:
//! - Integer grid coordinates with row-major ordering
//! - Canonical placement figures under the dihedral symmetry group
//! - The board occupancy grid with uniform boundary semantics

/// Board occupancy grid and cell marks
pub mod board;
/// Canonical figures and dihedral orientation generation
pub mod figure;
/// Integer grid coordinates
pub mod point;

pub use board::{Board, Cell};
pub use point::Point;
