//! Frequency ranking of fixed-length value sequences in a tabular column
//!
//! A column is scanned with an overlapping window, each distinct window is counted,
//! and the resulting table is ranked by occurrence count with a first-occurrence tie-break.

#![forbid(unsafe_code)]

/// Pattern extraction, counting and ranking
pub mod analysis;
/// Dataset loading, command-line handling, rendering and error types
pub mod io;

pub use analysis::patterns::{RankedPattern, SortOrder, count_patterns};
pub use io::error::{PatternError, Result};
