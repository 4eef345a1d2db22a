//! Progress display for batch pattern imports

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static IMPORT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Patterns: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks files processed during a directory import
///
/// A hidden manager keeps the counters without drawing anything, for quiet
/// runs and tests.
pub struct ProgressManager {
    bar: ProgressBar,
    imported: usize,
    skipped: usize,
}

impl ProgressManager {
    /// Create a progress bar for `file_count` files
    pub fn new(file_count: usize) -> Self {
        let bar = ProgressBar::new(file_count as u64);
        bar.set_style(IMPORT_STYLE.clone());
        Self {
            bar,
            imported: 0,
            skipped: 0,
        }
    }

    /// Create a manager that counts but never draws
    pub fn hidden(file_count: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(file_count as u64);
        Self {
            bar,
            imported: 0,
            skipped: 0,
        }
    }

    /// Record a successfully imported file
    pub fn imported(&mut self, path: &Path) {
        self.imported += 1;
        self.advance(path);
    }

    /// Record a file that could not be imported
    pub fn skipped(&mut self, path: &Path) {
        self.skipped += 1;
        self.advance(path);
    }

    /// Number of files imported so far
    pub const fn imported_count(&self) -> usize {
        self.imported
    }

    /// Number of files skipped so far
    pub const fn skipped_count(&self) -> usize {
        self.skipped
    }

    /// Clear the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    fn advance(&self, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.bar.set_message(display_name);
        self.bar.inc(1);
    }
}
