//! Integer grid coordinates with row-major ordering

use std::cmp::Ordering;
use std::fmt;

/// A position on the board or a cell offset within a figure
///
/// Plain value type with no identity. Ordering is row-major: points compare
/// by `y` first, then `x`, so sorting a figure's cells yields the reading
/// order used for canonicalization and anchor scanning.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    /// Column coordinate
    pub x: i32,
    /// Row coordinate
    pub y: i32,
}

impl Point {
    /// Create a point from column and row coordinates
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by the coordinates of another point
    #[must_use]
    pub const fn offset(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        [self.y, self.x].cmp(&[other.y, other.x])
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
