//! Tests for the quiet-mode solution spinner

#[cfg(test)]
mod tests {
    use pentile::io::progress::SearchProgress;

    // Tests the spinner lifecycle; off-terminal the bar is hidden but the
    // calls must still be safe
    #[test]
    fn test_spinner_lifecycle() {
        let progress = SearchProgress::new();
        progress.record(1);
        progress.record(2339);
        progress.finish(2339);
    }

    // Tests the Default construction used by callers that take no arguments
    #[test]
    fn test_default_matches_new() {
        let progress = SearchProgress::default();
        progress.finish(0);
    }
}
