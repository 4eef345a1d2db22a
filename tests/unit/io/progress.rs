//! Tests for batch import progress tracking

#[cfg(test)]
mod tests {
    use lifecat::io::progress::ProgressManager;
    use std::path::Path;

    // Tests imported and skipped files are counted separately
    // Verified by counting skipped files as imported
    #[test]
    fn test_progress_counts() {
        let mut progress = ProgressManager::hidden(3);

        progress.imported(Path::new("glider.cells"));
        progress.skipped(Path::new("broken.cells"));
        progress.imported(Path::new("blinker.cells"));
        progress.finish();

        assert_eq!(progress.imported_count(), 2);
        assert_eq!(progress.skipped_count(), 1);
    }

    // Tests a fresh manager starts at zero
    // Verified by initialising counters to the file count
    #[test]
    fn test_progress_starts_empty() {
        let progress = ProgressManager::new(10);

        assert_eq!(progress.imported_count(), 0);
        assert_eq!(progress.skipped_count(), 0);
        progress.finish();
    }
}
