//! Command-line interface for analysing one CSV file or a directory of them

use crate::analysis::patterns::{SortOrder, count_patterns, window_count};
use crate::io::configuration::{
    ALLOWED_PATTERN_LENGTHS, DATASET_EXTENSION, DEFAULT_PATTERN_LENGTH,
    DEFAULT_RELOAD_INTERVAL_SECS, DEFAULT_RELOADS, DEFAULT_SORT_ORDER,
};
use crate::io::dataset::Dataset;
use crate::io::error::{PatternError, Result, dataset_error, invalid_argument};
use crate::io::progress::{FileStage, ProgressManager};
use crate::io::report;
use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "patternrank")]
#[command(
    author,
    version,
    about = "Rank recurring fixed-length value patterns in a CSV column"
)]
/// Command-line arguments for the pattern ranking tool
pub struct Cli {
    /// Input CSV file or directory to analyse
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Column whose values are scanned; without it only the summary is shown
    #[arg(short, long)]
    pub column: Option<String>,

    /// Number of consecutive values per pattern (3, 4 or 5)
    #[arg(short, long, default_value_t = DEFAULT_PATTERN_LENGTH, value_parser = parse_pattern_length)]
    pub length: usize,

    /// Ranking direction by occurrence count
    #[arg(short, long, default_value = DEFAULT_SORT_ORDER)]
    pub order: SortOrder,

    /// Show a placeholder instead of the dataset path in summaries
    #[arg(long)]
    pub hide_path: bool,

    /// Number of times to reload and re-analyse after the first pass
    #[arg(short, long, default_value_t = DEFAULT_RELOADS)]
    pub reloads: usize,

    /// Seconds to wait between reloads
    #[arg(short, long, default_value_t = DEFAULT_RELOAD_INTERVAL_SECS)]
    pub interval: u64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Pause between consecutive reload passes
    pub const fn reload_interval(&self) -> Duration {
        Duration::from_secs(self.interval)
    }
}

/// Parse a pattern length, rejecting non-positive and unsupported values
///
/// # Errors
///
/// Returns [`PatternError::InvalidArgument`] if the text isn't an integer, is not
/// positive, or is not one of the supported lengths
pub fn parse_pattern_length(value: &str) -> Result<usize> {
    let parsed: i64 = value
        .trim()
        .parse()
        .map_err(|e| invalid_argument("length", &value, &e))?;
    if parsed <= 0 {
        return Err(invalid_argument(
            "length",
            &parsed,
            &"pattern length must be positive",
        ));
    }

    let length = usize::try_from(parsed).map_err(|e| invalid_argument("length", &parsed, &e))?;
    if !ALLOWED_PATTERN_LENGTHS.contains(&length) {
        return Err(invalid_argument(
            "length",
            &length,
            &format!("supported lengths are {ALLOWED_PATTERN_LENGTHS:?}"),
        ));
    }
    Ok(length)
}

/// Orchestrates loading, analysis and reporting over every target dataset
pub struct FileProcessor {
    cli: Cli,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Analyse the target, then reload and re-analyse it as many times as requested
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, dataset loading, column lookup
    /// or writing the report fails
    pub fn process<W: Write>(&self, writer: &mut W) -> Result<()> {
        for pass in 0..=self.cli.reloads {
            if pass > 0 {
                tracing::debug!(pass, interval_secs = self.cli.interval, "waiting to reload");
                std::thread::sleep(self.cli.reload_interval());
            }

            let files = self.collect_files()?;
            if files.is_empty() {
                tracing::warn!(path = %self.cli.target.display(), "no CSV files found");
                continue;
            }
            self.process_pass(&files, writer)?;
        }

        Ok(())
    }

    fn process_pass<W: Write>(&self, files: &[PathBuf], writer: &mut W) -> Result<()> {
        let mut progress = self.cli.should_show_progress().then(ProgressManager::new);
        if let Some(ref mut pm) = progress {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            if index > 0 {
                report::write_separator(writer)?;
            }
            self.process_file(file, index, progress.as_mut(), writer)?;
        }

        if let Some(ref pm) = progress {
            pm.finish();
        }
        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if is_dataset_file(target) {
                Ok(vec![target.clone()])
            } else {
                Err(dataset_error(
                    target.as_path(),
                    &"target file must have a .csv extension",
                ))
            }
        } else if target.is_dir() {
            let entries = std::fs::read_dir(target).map_err(|e| PatternError::FileSystem {
                path: target.clone(),
                operation: "read directory",
                source: e,
            })?;

            let mut files = Vec::new();
            for entry in entries {
                let path = entry?.path();
                if path.is_file() && is_dataset_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(PatternError::FileSystem {
                path: target.clone(),
                operation: "locate target",
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "target is neither a CSV file nor a directory",
                ),
            })
        }
    }

    fn process_file<W: Write>(
        &self,
        path: &Path,
        index: usize,
        mut progress: Option<&mut ProgressManager>,
        writer: &mut W,
    ) -> Result<()> {
        let start_time = Instant::now();
        if let Some(pm) = progress.as_deref_mut() {
            pm.start_file(index, path);
        }

        let dataset = Dataset::from_csv_path(path)?;
        let (rows, columns) = dataset.shape();
        tracing::info!(path = %path.display(), rows, columns, "dataset loaded");
        report::write_summary(writer, &dataset, self.cli.hide_path)?;

        let Some(column_name) = self.cli.column.as_deref() else {
            report::write_columns(writer, &dataset)?;
            if let Some(pm) = progress {
                pm.complete_file(index, 0, start_time.elapsed());
            }
            return Ok(());
        };

        if let Some(pm) = progress.as_deref_mut() {
            pm.advance(index, FileStage::Counting);
        }
        let column = dataset.column(column_name)?;
        let ranked = count_patterns(column, self.cli.length, self.cli.order)?;
        tracing::info!(
            column = column_name,
            length = self.cli.length,
            order = %self.cli.order,
            windows = window_count(column.len(), self.cli.length),
            distinct = ranked.len(),
            "patterns counted"
        );
        report::write_patterns(writer, &ranked)?;

        if let Some(pm) = progress {
            pm.complete_file(index, ranked.len(), start_time.elapsed());
        }
        Ok(())
    }
}

fn is_dataset_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(DATASET_EXTENSION))
}
