//! Board occupancy grid with uniform boundary semantics

use crate::io::configuration::HOLED_BOARD_CELLS;
use crate::spatial::figure::Figure;
use crate::spatial::point::Point;
use ndarray::Array2;

/// Contents of a single board cell
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    /// Playable and currently unoccupied
    Empty,
    /// Permanently blocked (the central hole on 64-cell boards)
    Blocked,
    /// Outside the playable area; never equal to any playable mark
    Border,
    /// Occupied by the piece with this identifier
    Piece(char),
}

/// Fixed-size occupancy grid
///
/// Reads outside `[0, width) x [0, height)` yield [`Cell::Border`], which is
/// never equal to [`Cell::Empty`] or any piece mark. Placement checks can
/// therefore treat the border uniformly and reject out-of-bounds figures
/// without separate bounds tests.
#[derive(Debug, Clone)]
pub struct Board {
    cells: Array2<Cell>,
    width: i32,
    height: i32,
}

impl Board {
    /// Create an empty board with fixed dimensions
    ///
    /// A 64-cell board gets its central 2x2 hole pre-marked as blocked,
    /// leaving exactly 60 playable cells to match the combined piece area.
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        let rows = height.max(0) as usize;
        let cols = width.max(0) as usize;
        let mut cells = Array2::from_elem((rows, cols), Cell::Empty);

        if width * height == HOLED_BOARD_CELLS {
            let cx = (width / 2).max(1) as usize;
            let cy = (height / 2).max(1) as usize;
            for (row, col) in [(cy - 1, cx - 1), (cy - 1, cx), (cy, cx - 1), (cy, cx)] {
                if let Some(cell) = cells.get_mut((row, col)) {
                    *cell = Cell::Blocked;
                }
            }
        }

        Self {
            cells,
            width,
            height,
        }
    }

    /// Board width in cells
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Board height in cells
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Read the mark at a coordinate
    ///
    /// Returns [`Cell::Border`] for any coordinate outside the board.
    #[must_use]
    pub fn at(&self, x: i32, y: i32) -> Cell {
        if x < 0 || y < 0 {
            return Cell::Border;
        }
        self.cells
            .get((y as usize, x as usize))
            .copied()
            .unwrap_or(Cell::Border)
    }

    /// Test whether a figure fits with its anchor at the given cell
    ///
    /// True iff every cell of the figure lands on [`Cell::Empty`]. The border
    /// sentinel makes out-of-bounds placements fail this test automatically.
    #[must_use]
    pub fn check(&self, anchor: Point, figure: &Figure) -> bool {
        figure
            .points()
            .iter()
            .all(|point| self.at(anchor.x + point.x, anchor.y + point.y) == Cell::Empty)
    }

    /// Write a mark into the five cells of a figure
    ///
    /// Performs no validation; callers must have passed [`Board::check`]
    /// first. Placing [`Cell::Empty`] undoes a prior placement.
    pub fn place(&mut self, anchor: Point, figure: &Figure, mark: Cell) {
        for point in figure.points() {
            let x = anchor.x + point.x;
            let y = anchor.y + point.y;
            if x >= 0 && y >= 0 {
                if let Some(cell) = self.cells.get_mut((y as usize, x as usize)) {
                    *cell = mark;
                }
            }
        }
    }

    /// First empty cell at or after `from` in row-major order
    ///
    /// Placing a piece always covers its anchor, so successive anchors along
    /// one search path form a non-decreasing row-major sequence and the scan
    /// never needs to restart from the origin.
    #[must_use]
    pub fn first_empty_from(&self, from: Point) -> Option<Point> {
        let start = (from.y.max(0) * self.width + from.x.max(0)).max(0);
        (start..self.width * self.height)
            .map(|index| Point::new(index % self.width, index / self.width))
            .find(|&point| self.at(point.x, point.y) == Cell::Empty)
    }

    /// Number of cells currently holding the empty mark
    #[must_use]
    pub fn empty_cells(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell == Cell::Empty)
            .count()
    }
}
