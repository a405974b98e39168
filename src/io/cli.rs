//! Command-line interface for the tiling enumerator

use crate::algorithm::search::Enumerator;
use crate::io::configuration::{
    DEFAULT_HEIGHT, DEFAULT_WIDTH, HOLED_BOARD_CELLS, MIN_BOARD_SIDE, PLAYABLE_CELLS,
};
use crate::io::display::{SolutionDisplay, print_orientation_sets};
use crate::io::error::Result;
use crate::io::progress::SearchProgress;
use crate::shapes::definitions::shape_table;
use crate::shapes::pieces::piece_set;
use crate::spatial::board::Board;
use clap::Parser;

#[derive(Parser)]
#[command(name = "pentile")]
#[command(
    author,
    version,
    about = "Enumerate pentomino tilings of a rectangular board"
)]
/// Command-line arguments for the enumerator
pub struct Cli {
    /// Board size as WIDTHxHEIGHT (e.g. 6x10, 3x20, 8x8)
    #[arg(value_name = "SIZE")]
    pub size: Option<String>,

    /// Print each piece's orientation set before searching
    #[arg(short, long)]
    pub debug: bool,

    /// Print every solution on its own lines instead of redrawing in place
    #[arg(short, long)]
    pub stream: bool,

    /// Suppress per-solution boards, showing only a live counter
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Board dimensions after validation
    ///
    /// Unrecognized or unsupported sizes silently select the 6x10 default: a
    /// valid size has both sides at least three and either 60 cells or the
    /// 64-cell holed variant.
    #[must_use]
    pub fn board_dimensions(&self) -> (i32, i32) {
        self.size
            .as_deref()
            .and_then(parse_size)
            .unwrap_or((DEFAULT_WIDTH, DEFAULT_HEIGHT))
    }
}

/// Parse `WIDTHxHEIGHT`, returning `None` for unsupported boards
fn parse_size(text: &str) -> Option<(i32, i32)> {
    let (first, second) = text.split_once('x')?;
    let width = first.trim().parse::<i32>().ok()?;
    let height = second.trim().parse::<i32>().ok()?;
    let cells = width * height;
    (width >= MIN_BOARD_SIDE
        && height >= MIN_BOARD_SIDE
        && (cells == PLAYABLE_CELLS || cells == HOLED_BOARD_CELLS))
        .then_some((width, height))
}

/// Orchestrates one enumeration run from parsed arguments
pub struct SolverRunner {
    cli: Cli,
}

impl SolverRunner {
    /// Create a runner with the given CLI arguments
    #[must_use]
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Build the piece set and board, run the search, and report the total
    ///
    /// # Errors
    ///
    /// Returns an error if the shape table is malformed or terminal output
    /// fails.
    pub fn run(&mut self) -> Result<()> {
        let (width, height) = self.cli.board_dimensions();
        let table = shape_table()?;
        let pieces = piece_set(&table, width == height);

        if self.cli.debug {
            print_orientation_sets(&pieces)?;
        }

        let mut enumerator = Enumerator::new(Board::new(width, height), pieces);

        if self.cli.quiet {
            let progress = SearchProgress::new();
            let total = enumerator.run(&mut |_, solutions| progress.record(solutions));
            progress.finish(total);
            return Ok(());
        }

        let mut display = SolutionDisplay::new(height, self.cli.stream);
        let mut failure = None;
        let total = enumerator.run(&mut |board, solutions| {
            if failure.is_none() {
                if let Err(error) = display.show(board, solutions) {
                    failure = Some(error);
                }
            }
        });
        if let Some(error) = failure {
            return Err(error);
        }
        display.finish(total)
    }
}
