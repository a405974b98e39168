//! Input/output operations and error handling

/// Command-line interface and run orchestration
pub mod cli;
/// Board and piece constants plus runtime defaults
pub mod configuration;
/// Terminal output of rendered solutions and debug dumps
pub mod display;
/// Error types for solver construction and output
pub mod error;
/// Live solution counter for quiet runs
pub mod progress;
/// Box-drawing renderer for boards
pub mod render;
