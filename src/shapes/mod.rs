//! Piece definitions and orientation sets
//!
//! This module contains the fixed input side of the solver:
//! - The drawn shape table and its extraction into base coordinates
//! - Piece construction and the symmetry-breaking anchor rule

/// The drawn shape table and coordinate extraction
pub mod definitions;
/// Piece construction from base shapes
pub mod pieces;

pub use pieces::Piece;
