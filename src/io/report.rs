//! Text rendering of dataset summaries and ranked patterns

use crate::analysis::patterns::RankedPattern;
use crate::io::configuration::HIDDEN_PATH_LABEL;
use crate::io::dataset::Dataset;
use crate::io::error::{PatternError, Result};
use std::fmt::Display;
use std::io::Write;
use std::path::PathBuf;

fn output_error(source: std::io::Error) -> PatternError {
    PatternError::FileSystem {
        path: PathBuf::from("<output>"),
        operation: "write report",
        source,
    }
}

/// Write the dataset path (or a placeholder when hidden) and its dimensions
///
/// # Errors
///
/// Returns an error if the writer fails
pub fn write_summary<W: Write>(writer: &mut W, dataset: &Dataset, hide_path: bool) -> Result<()> {
    let location = match dataset.path() {
        Some(path) if !hide_path => path.display().to_string(),
        _ => HIDDEN_PATH_LABEL.to_string(),
    };
    let (rows, columns) = dataset.shape();

    writeln!(writer, "Loaded CSV: {location}").map_err(output_error)?;
    writeln!(writer, "Total Rows: {rows}").map_err(output_error)?;
    writeln!(writer, "Total Columns: {columns}").map_err(output_error)?;
    Ok(())
}

/// Write the selectable column names, one per line
///
/// # Errors
///
/// Returns an error if the writer fails
pub fn write_columns<W: Write>(writer: &mut W, dataset: &Dataset) -> Result<()> {
    writeln!(writer, "Available columns:").map_err(output_error)?;
    for name in dataset.column_names() {
        writeln!(writer, "  {name}").map_err(output_error)?;
    }
    Ok(())
}

/// Write one `Pattern: v1 v2 … | Occurrences: n` line per ranked pattern
///
/// # Errors
///
/// Returns an error if the writer fails
pub fn write_patterns<W: Write, T: Display>(
    writer: &mut W,
    patterns: &[RankedPattern<T>],
) -> Result<()> {
    for pattern in patterns {
        writeln!(writer, "{pattern}").map_err(output_error)?;
    }
    Ok(())
}

/// Write the blank line that separates consecutive dataset reports
///
/// # Errors
///
/// Returns an error if the writer fails
pub fn write_separator<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer).map_err(output_error)
}
