//! Piece construction and the symmetry-breaking anchor rule

use crate::io::configuration::{RECTANGULAR_ANCHOR_ORIENTATIONS, SQUARE_ANCHOR_ORIENTATIONS};
use crate::shapes::definitions::BaseShape;
use crate::spatial::figure::{Figure, orientation_set};

/// A piece identifier with its canonical orientation set
///
/// Created once at startup from the shape table; the orientation set is
/// immutable for the lifetime of a search. Between one and eight figures,
/// depending on the symmetry group order of the base shape.
#[derive(Debug, Clone)]
pub struct Piece {
    /// Identifier letter written into board cells
    pub id: char,
    /// Deduplicated canonical orientations, in generation order
    pub figures: Vec<Figure>,
}

impl Piece {
    /// Build a piece by generating the orientation set of its base shape
    #[must_use]
    pub fn from_shape(shape: &BaseShape) -> Self {
        Self {
            id: shape.id,
            figures: orientation_set(&shape.cells),
        }
    }

    /// Human-readable dump of the orientation set
    ///
    /// One header line with the identifier and orientation count, then one
    /// line of cell offsets per orientation.
    #[must_use]
    pub fn describe(&self) -> String {
        let mut text = format!("{}:({})\n", self.id, self.figures.len());
        for figure in &self.figures {
            text.push_str(&format!("{:?}\n", figure.points()));
        }
        text
    }
}

/// Build all twelve pieces in search order, applying the anchor rule
///
/// The F piece leads the search order and has the lowest inherent symmetry,
/// so restricting its allowed orientations removes whole-board duplicate
/// solutions: one orientation survives on square boards, which admit
/// quarter-turn symmetry of the full solution set, and two on rectangular
/// boards, which admit mirror symmetry only.
#[must_use]
pub fn piece_set(table: &[BaseShape], square_board: bool) -> Vec<Piece> {
    let mut pieces: Vec<Piece> = table.iter().map(Piece::from_shape).collect();
    let keep = if square_board {
        SQUARE_ANCHOR_ORIENTATIONS
    } else {
        RECTANGULAR_ANCHOR_ORIENTATIONS
    };
    if let Some(anchor) = pieces.first_mut() {
        anchor.figures.truncate(keep);
    }
    pieces
}
