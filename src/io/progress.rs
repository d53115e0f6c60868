//! Multi-file progress tracking with automatic batching for large sets

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

/// Point a dataset file has reached in its analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStage {
    /// Reading and parsing the CSV
    Loading,
    /// Counting and ranking patterns
    Counting,
    /// Report written
    Done,
}

impl FileStage {
    const fn position(self) -> u64 {
        match self {
            Self::Loading => 0,
            Self::Counting => 1,
            Self::Done => 2,
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Counting => "counting",
            Self::Done => "done",
        }
    }
}

const STAGE_COUNT: u64 = 2;

#[derive(Debug, Clone)]
struct FileState {
    name: String,
    stage: FileStage,
    detail: String,
}

/// Coordinates progress display for batch analysis
///
/// Automatically switches between individual progress bars (for small batches)
/// and an additional batch progress bar (for large batches) based on file count
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
    file_states: Vec<Option<FileState>>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg:>10} [{bar:20.cyan/blue}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Files: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bars: Vec::new(),
            file_states: Vec::new(),
        }
    }

    /// Initialize progress bars based on file count
    pub fn initialize(&mut self, file_count: usize) {
        // Switch to batch mode for large file sets to avoid terminal spam
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        let bars_to_create = file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS);
        for _ in 0..bars_to_create {
            let pb = ProgressBar::new(STAGE_COUNT);
            pb.set_style(PROGRESS_STYLE.clone());
            self.file_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Register a file as loading
    pub fn start_file(&mut self, index: usize, path: &Path) {
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        if index >= self.file_states.len() {
            self.file_states.resize(index + 1, None);
        }
        if let Some(state) = self.file_states.get_mut(index) {
            *state = Some(FileState {
                name,
                stage: FileStage::Loading,
                detail: String::new(),
            });
        }
        self.update_bars();
    }

    /// Move a file to a later stage
    pub fn advance(&mut self, index: usize, stage: FileStage) {
        if let Some(Some(state)) = self.file_states.get_mut(index) {
            state.stage = stage;
        }
        self.update_bars();
    }

    /// Mark file as completed and update batch progress
    pub fn complete_file(&mut self, index: usize, pattern_count: usize, elapsed: Duration) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(Some(state)) = self.file_states.get_mut(index) {
            state.stage = FileStage::Done;
            state.name = format!("✓ {}", state.name);
            state.detail = format!("{pattern_count} patterns in {}ms", elapsed.as_millis());
        }
        self.update_bars();
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All files processed");
        }
        let _ = self.multi_progress.clear();
    }

    /// Update all progress bars to show the last N active files
    fn update_bars(&self) {
        let active_files: Vec<&FileState> = self.file_states.iter().flatten().collect();

        let start_idx = active_files
            .len()
            .saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible_files = active_files.get(start_idx..).unwrap_or(&[]);

        for (bar_idx, state) in visible_files.iter().enumerate() {
            if let Some(bar) = self.file_bars.get(bar_idx) {
                bar.set_position(state.stage.position());
                bar.set_message(state.stage.label());
                if state.detail.is_empty() {
                    bar.set_prefix(state.name.clone());
                } else {
                    bar.set_prefix(format!("{} ({})", state.name, state.detail));
                }
            }
        }

        for bar_idx in visible_files.len()..self.file_bars.len() {
            if let Some(bar) = self.file_bars.get(bar_idx) {
                bar.set_position(0);
                bar.set_message(String::new());
                bar.set_prefix(String::new());
            }
        }
    }
}
