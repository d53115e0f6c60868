//! Input/output operations and error handling

/// Command-line interface and batch processing of dataset files
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// CSV dataset loading and column lookup
pub mod dataset;
/// Error types for all crate operations
pub mod error;
/// Progress display for multi-file runs
pub mod progress;
/// Text rendering of summaries and ranked patterns
pub mod report;
