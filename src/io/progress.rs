//! Batch progress tracking over multiple map files

use crate::io::configuration::{MIN_FILES_FOR_PROGRESS, PROGRESS_BAR_WIDTH};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

/// Tally of run endings across a batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Runs that reached the goal
    pub arrived: usize,
    /// Runs that ended as looping
    pub looping: usize,
    /// Runs that aborted on a broken map
    pub failed: usize,
}

impl BatchSummary {
    /// Total number of completed runs
    pub const fn total(&self) -> usize {
        self.arrived + self.looping + self.failed
    }
}

/// Category of a completed run for the batch tally
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// The goal was reached
    Arrived,
    /// The run ended as looping
    Looping,
    /// The map was broken
    Failed,
}

/// Coordinates progress display for batch operations
///
/// Single files run without a bar; larger batches show one bar over files.
pub struct ProgressManager {
    batch_bar: Option<ProgressBar>,
    summary: BatchSummary,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] Maps: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

impl ProgressManager {
    /// Create a new progress manager
    pub const fn new() -> Self {
        Self {
            batch_bar: None,
            summary: BatchSummary {
                arrived: 0,
                looping: 0,
                failed: 0,
            },
        }
    }

    /// Initialize the progress bar based on file count
    pub fn initialize(&mut self, file_count: usize) {
        self.summary = BatchSummary::default();

        if file_count >= MIN_FILES_FOR_PROGRESS {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(batch_bar);
        }
    }

    /// Show the file currently being simulated
    pub fn start_file(&self, path: &Path) {
        if let Some(ref batch_bar) = self.batch_bar {
            let display_name = path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();
            batch_bar.set_message(display_name);
        }
    }

    /// Record a finished run and advance the bar
    pub fn complete_file(&mut self, status: RunStatus) {
        match status {
            RunStatus::Arrived => self.summary.arrived += 1,
            RunStatus::Looping => self.summary.looping += 1,
            RunStatus::Failed => self.summary.failed += 1,
        }

        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
    }

    /// Tally of the runs completed so far
    pub const fn summary(&self) -> BatchSummary {
        self.summary
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            let BatchSummary {
                arrived,
                looping,
                failed,
            } = self.summary;
            batch_bar.finish_with_message(format!(
                "{arrived} arrived, {looping} looping, {failed} corrupted"
            ));
        }
    }
}
