//! Index-stable inventory of not-yet-placed pieces

use bitvec::prelude::{BitVec, bitvec};
use std::fmt;

/// Tracks which pieces remain available during backtracking
///
/// Pieces keep their creation index for the lifetime of the search, so a
/// remove/restore pair leaves iteration order exactly as it found it and
/// sibling trials at one recursion depth see identical candidate sets minus
/// only the piece committed deeper in the recursion. Removal and restoration
/// are O(1) bit flips.
#[derive(Clone, Debug)]
pub struct Inventory {
    available: BitVec,
}

impl Inventory {
    /// Create an inventory with all `count` pieces available
    #[must_use]
    pub fn full(count: usize) -> Self {
        Self {
            available: bitvec![1; count],
        }
    }

    /// Test whether a piece is still available
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.available.get(index).as_deref() == Some(&true)
    }

    /// Remove a piece while it is tried deeper in the recursion
    pub fn remove(&mut self, index: usize) {
        if index < self.available.len() {
            self.available.set(index, false);
        }
    }

    /// Restore a piece to its exact original position
    pub fn restore(&mut self, index: usize) {
        if index < self.available.len() {
            self.available.set(index, true);
        }
    }

    /// True once every piece has been placed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.available.not_any()
    }

    /// Number of pieces still available
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.available.count_ones()
    }

    /// Indices of available pieces in creation order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.available.iter_ones()
    }
}

impl fmt::Display for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Inventory({} available: {:?})",
            self.remaining(),
            self.iter().collect::<Vec<_>>()
        )
    }
}
