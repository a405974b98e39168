//! CLI entry point for the pentomino tiling enumerator

use clap::Parser;
use pentile::io::cli::{Cli, SolverRunner};

fn main() -> pentile::Result<()> {
    let cli = Cli::parse();
    let mut runner = SolverRunner::new(cli);
    runner.run()
}
