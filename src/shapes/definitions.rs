//! The twelve pentomino definitions extracted from a drawn layout

use crate::io::configuration::{CELLS_PER_PIECE, PIECE_IDS};
use crate::io::error::{Result, SolverError};
use crate::spatial::point::Point;

/// The twelve pentominoes drawn in place
///
/// Each cell is two columns wide so the shapes read at roughly square
/// proportions; cell coordinates are recovered by halving the column index.
/// The absolute offsets within the layout are irrelevant because every
/// orientation is translated to the origin during canonicalization.
const PIECE_LAYOUT: &str = r"
+-------+-------+-------+-------+-------+-------+
|       |   I   |  L    |  N    |       |       |
|   F F |   I   |  L    |  N    |  P P  | T T T |
| F F   |   I   |  L    |  N N  |  P P  |   T   |
|   F   |   I   |  L L  |    N  |  P    |   T   |
|       |   I   |       |       |       |       |
+-------+-------+-------+-------+-------+-------+
|       | V     | W     |   X   |    Y  | Z Z   |
| U   U | V     | W W   | X X X |  Y Y  |   Z   |
| U U U | V V V |   W W |   X   |    Y  |   Z Z |
|       |       |       |       |    Y  |       |
+-------+-------+-------+-------+-------+-------+
";

/// A piece identifier with its five relative cells as drawn
#[derive(Debug, Clone)]
pub struct BaseShape {
    /// Identifier letter, one of "FLINPTUVWXYZ"
    pub id: char,
    /// Cell offsets as they appear in the layout
    pub cells: [Point; CELLS_PER_PIECE],
}

/// Collect the cells drawn with `id` in the layout
fn layout_cells(id: char) -> Vec<Point> {
    let mut x = 0;
    let mut y = 0;
    let mut cells = Vec::new();
    for ch in PIECE_LAYOUT.chars() {
        if ch == id {
            cells.push(Point::new(x / 2, y));
        }
        if ch == '\n' {
            y += 1;
            x = 0;
        } else {
            x += 1;
        }
    }
    cells
}

/// Build the shape table for all twelve pieces in search order
///
/// The order follows [`PIECE_IDS`], with F first so the symmetry anchor rule
/// can act on the leading piece.
///
/// # Errors
///
/// Returns [`SolverError::MalformedShape`] if any identifier does not resolve
/// to exactly five cells in the layout.
pub fn shape_table() -> Result<Vec<BaseShape>> {
    PIECE_IDS
        .chars()
        .map(|id| {
            let found = layout_cells(id);
            if found.len() != CELLS_PER_PIECE {
                return Err(SolverError::MalformedShape {
                    id,
                    cell_count: found.len(),
                });
            }
            let mut cells = [Point::new(0, 0); CELLS_PER_PIECE];
            for (slot, cell) in cells.iter_mut().zip(found.iter()) {
                *slot = *cell;
            }
            Ok(BaseShape { id, cells })
        })
        .collect()
}
