//! Error types for solver construction and output

use std::fmt;

/// Main error type for all solver operations
///
/// The search itself cannot fail: a dead-end branch simply returns without
/// emitting a solution. Errors arise only while building the piece set from
/// the drawn layout and while writing output to the terminal.
#[derive(Debug)]
pub enum SolverError {
    /// A piece identifier did not resolve to exactly five layout cells
    MalformedShape {
        /// Piece identifier being extracted
        id: char,
        /// Number of cells actually found
        cell_count: usize,
    },

    /// Writing rendered output to the terminal failed
    Terminal {
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedShape { id, cell_count } => {
                write!(
                    f,
                    "Piece '{id}' resolves to {cell_count} cells in the shape layout (expected 5)"
                )
            }
            Self::Terminal { source } => {
                write!(f, "Failed to write to the terminal: {source}")
            }
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Terminal { source } => Some(source),
            Self::MalformedShape { .. } => None,
        }
    }
}

impl From<std::io::Error> for SolverError {
    fn from(err: std::io::Error) -> Self {
        Self::Terminal { source: err }
    }
}

/// Convenience type alias for solver results
pub type Result<T> = std::result::Result<T, SolverError>;
