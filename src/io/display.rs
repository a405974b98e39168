//! Terminal output of rendered solutions and debug dumps

use crate::io::error::Result;
use crate::io::render::{render, rendered_lines};
use crate::shapes::pieces::Piece;
use crate::spatial::board::Board;
use std::io::Write;

/// Prints each solution, redrawing over the previous one by default
///
/// In-place mode moves the cursor back up over the previously printed board
/// before writing the next one, so the terminal shows a live view of the
/// latest solution and its count. Stream mode appends each solution instead,
/// which suits piped or logged output.
pub struct SolutionDisplay {
    board_height: i32,
    stream: bool,
    emitted: u64,
}

impl SolutionDisplay {
    /// Create a display for boards of the given height
    #[must_use]
    pub const fn new(board_height: i32, stream: bool) -> Self {
        Self {
            board_height,
            stream,
            emitted: 0,
        }
    }

    /// Print one rendered solution with its running count
    ///
    /// The count shares the final rendered line, matching the layout the
    /// cursor-up sequence steps back over.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SolverError::Terminal`] if writing to stdout fails.
    pub fn show(&mut self, board: &Board, solutions: u64) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        if !self.stream && self.emitted > 0 {
            write!(stdout, "\x1b[{}A", rendered_lines(self.board_height))?;
        }
        writeln!(stdout, "{}{solutions}", render(board))?;
        self.emitted += 1;
        Ok(())
    }

    /// Print the total when no boards were shown
    ///
    /// # Errors
    ///
    /// Returns [`crate::SolverError::Terminal`] if writing to stdout fails.
    pub fn finish(&mut self, solutions: u64) -> Result<()> {
        if self.emitted == 0 {
            writeln!(std::io::stdout().lock(), "{solutions} solutions")?;
        }
        Ok(())
    }

    /// Number of solutions printed so far
    #[must_use]
    pub const fn emitted(&self) -> u64 {
        self.emitted
    }
}

/// Print every piece's identifier, orientation count, and coordinate lists
///
/// # Errors
///
/// Returns [`crate::SolverError::Terminal`] if writing to stdout fails.
pub fn print_orientation_sets(pieces: &[Piece]) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    for piece in pieces {
        write!(stdout, "{}", piece.describe())?;
    }
    Ok(())
}
