//! Progress display across a batch of generated seeds

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Patterns: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar advanced once per written bundle
pub struct ProgressManager {
    bar: ProgressBar,
    completed: u64,
    skipped: u64,
}

impl ProgressManager {
    /// Create a progress bar for `total` patterns
    pub fn new(total: u64) -> Self {
        let bar = ProgressBar::new(total);
        bar.set_style(BATCH_STYLE.clone());
        Self {
            bar,
            completed: 0,
            skipped: 0,
        }
    }

    /// Show the pattern currently being generated
    pub fn start_pattern(&self, label: &str) {
        self.bar.set_message(label.to_string());
    }

    /// Mark a pattern as written
    pub fn complete_pattern(&mut self) {
        self.completed += 1;
        self.bar.inc(1);
    }

    /// Mark a pattern as skipped because its bundle already exists
    pub fn skip_pattern(&mut self) {
        self.skipped += 1;
        self.bar.inc(1);
    }

    /// Patterns written so far
    pub const fn completed(&self) -> u64 {
        self.completed
    }

    /// Patterns skipped so far
    pub const fn skipped(&self) -> u64 {
        self.skipped
    }

    /// Whether the display has been finished
    pub fn is_finished(&self) -> bool {
        self.bar.is_finished()
    }

    /// Clear the progress display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
