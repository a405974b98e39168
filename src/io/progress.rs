//! Live solution counter for quiet runs

use crate::io::configuration::PROGRESS_TICK_MS;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner} [{elapsed_precise}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Spinner reporting solutions found while per-solution boards are suppressed
pub struct SearchProgress {
    bar: ProgressBar,
}

impl Default for SearchProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchProgress {
    /// Create and start the spinner
    #[must_use]
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(SPINNER_STYLE.clone());
        bar.enable_steady_tick(Duration::from_millis(PROGRESS_TICK_MS));
        Self { bar }
    }

    /// Update the live counter
    pub fn record(&self, solutions: u64) {
        self.bar.set_message(format!("{solutions} solutions"));
    }

    /// Stop the spinner, leaving the final total on screen
    pub fn finish(&self, solutions: u64) {
        self.bar.finish_with_message(format!("{solutions} solutions"));
    }
}
