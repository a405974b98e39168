//! Core search implementation
//!
//! This module contains the algorithmically hard part of the solver:
//! - The index-stable inventory of not-yet-placed pieces
//! - The recursive backtracking enumeration of complete tilings

/// Index-stable piece inventory for backtracking
pub mod inventory;
/// Recursive backtracking search driver
pub mod search;

pub use search::Enumerator;
