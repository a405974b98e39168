//! Canonical placement figures under the dihedral symmetry group
//!
//! A placement shape is normalized to a fixed representative so that two
//! orientations reachable from each other by translation compare equal.
//! Walking all eight elements of D4 over a base shape and deduplicating the
//! canonical results yields a piece's complete orientation set.

use crate::io::configuration::CELLS_PER_PIECE;
use crate::spatial::point::Point;

/// One placement shape in canonical form
///
/// Invariant: the five points are sorted ascending by `(y, x)` and translated
/// so the first point sits at the origin. Two figures describe the same
/// orientation iff their point sequences are identical.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Figure {
    points: [Point; CELLS_PER_PIECE],
}

impl Figure {
    /// Canonicalize five cell offsets into a figure
    ///
    /// Sorts the points in row-major order and anchors the lexicographically
    /// smallest one at `(0, 0)`.
    #[must_use]
    pub fn canonical(mut points: [Point; CELLS_PER_PIECE]) -> Self {
        points.sort_unstable();
        let anchor = points.first().copied().unwrap_or(Point::new(0, 0));
        for point in &mut points {
            point.x -= anchor.x;
            point.y -= anchor.y;
        }
        Self { points }
    }

    /// The five cell offsets in canonical order
    #[must_use]
    pub const fn points(&self) -> &[Point; CELLS_PER_PIECE] {
        &self.points
    }
}

/// Apply a D4 element to a point
///
/// A single quarter turn maps `(x, y)` to `(-y, x)`; the mirror is applied
/// after rotating and maps `(x, y)` to `(-x, y)`.
const fn transform(point: Point, quarter_turns: usize, mirrored: bool) -> Point {
    let mut x = point.x;
    let mut y = point.y;
    let mut turn = 0;
    while turn < quarter_turns {
        let rotated = -y;
        y = x;
        x = rotated;
        turn += 1;
    }
    if mirrored {
        x = -x;
    }
    Point::new(x, y)
}

/// Generate the deduplicated canonical orientation set of a base shape
///
/// Walks the eight elements of the dihedral group D4 in a fixed order (four
/// rotations, then the same four mirrored) and keeps the first occurrence of
/// each distinct canonical figure. A fully symmetric shape collapses to one
/// orientation; a fully asymmetric shape keeps all eight. The result size is
/// always 8 divided by the order of the shape's stabilizer subgroup.
#[must_use]
pub fn orientation_set(base: &[Point; CELLS_PER_PIECE]) -> Vec<Figure> {
    let mut figures = Vec::with_capacity(8);
    for element in 0..8 {
        let mut points = [Point::new(0, 0); CELLS_PER_PIECE];
        for (slot, point) in points.iter_mut().zip(base.iter()) {
            *slot = transform(*point, element % 4, element >= 4);
        }
        let figure = Figure::canonical(points);
        if !figures.contains(&figure) {
            figures.push(figure);
        }
    }
    figures
}
