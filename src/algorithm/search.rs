//! Recursive backtracking enumeration of complete tilings

use crate::algorithm::inventory::Inventory;
use crate::shapes::pieces::Piece;
use crate::spatial::board::{Board, Cell};
use crate::spatial::point::Point;

/// Exhaustive backtracking search over one board
///
/// Each recursion level finds the first empty cell in row-major order and
/// tries every remaining piece orientation whose anchor covers it, committing
/// a placement, descending, and undoing it on return. The combined piece area
/// equals the playable cell count, so an empty inventory implies a fully
/// covered board. The search never stops early; every complete tiling is
/// reported to the observer exactly once, in a deterministic order. Maximum
/// recursion depth equals the piece count.
pub struct Enumerator {
    board: Board,
    pieces: Vec<Piece>,
    inventory: Inventory,
    solutions: u64,
}

impl Enumerator {
    /// Create a search over a fresh board with the given piece set
    #[must_use]
    pub fn new(board: Board, pieces: Vec<Piece>) -> Self {
        let inventory = Inventory::full(pieces.len());
        Self {
            board,
            pieces,
            inventory,
            solutions: 0,
        }
    }

    /// Run the search to exhaustion and return the solution total
    ///
    /// The observer receives a read-only view of the fully covered board and
    /// the running solution count. The view is only valid for the duration of
    /// the call: backtracking mutates the board again immediately afterwards.
    pub fn run<F>(&mut self, observer: &mut F) -> u64
    where
        F: FnMut(&Board, u64),
    {
        self.solutions = 0;
        self.descend(Point::new(0, 0), observer);
        self.solutions
    }

    fn descend<F>(&mut self, from: Point, observer: &mut F)
    where
        F: FnMut(&Board, u64),
    {
        if self.inventory.is_empty() {
            self.solutions += 1;
            observer(&self.board, self.solutions);
            return;
        }

        let Some(anchor) = self.board.first_empty_from(from) else {
            return;
        };

        for index in 0..self.pieces.len() {
            if !self.inventory.contains(index) {
                continue;
            }
            let Some((id, figure_count)) = self
                .pieces
                .get(index)
                .map(|piece| (piece.id, piece.figures.len()))
            else {
                continue;
            };

            self.inventory.remove(index);
            for figure_index in 0..figure_count {
                let Some(figure) = self
                    .pieces
                    .get(index)
                    .and_then(|piece| piece.figures.get(figure_index))
                    .copied()
                else {
                    break;
                };
                if self.board.check(anchor, &figure) {
                    self.board.place(anchor, &figure, Cell::Piece(id));
                    self.descend(anchor, observer);
                    self.board.place(anchor, &figure, Cell::Empty);
                }
            }
            self.inventory.restore(index);
        }
    }

    /// Board being tiled
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Solutions found so far
    #[must_use]
    pub const fn solutions(&self) -> u64 {
        self.solutions
    }
}
