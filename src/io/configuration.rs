//! Analysis constants and runtime configuration defaults

// Pattern lengths offered to users; the counter itself accepts any positive length
/// Pattern lengths accepted on the command line
pub const ALLOWED_PATTERN_LENGTHS: [usize; 3] = [3, 4, 5];

/// Pattern length used when none is given
pub const DEFAULT_PATTERN_LENGTH: usize = 4;

/// Sort direction used when none is given
pub const DEFAULT_SORT_ORDER: &str = "descending";

// Dataset discovery
/// File extension of loadable datasets
pub const DATASET_EXTENSION: &str = "csv";

/// Field separator for dataset files
pub const FIELD_DELIMITER: char = ',';

// Reload settings
/// Seconds between dataset reloads
pub const DEFAULT_RELOAD_INTERVAL_SECS: u64 = 5;

/// Additional reload cycles after the first analysis
pub const DEFAULT_RELOADS: usize = 0;

// Summary and rendering
/// Label shown instead of the dataset path when the path is hidden
pub const HIDDEN_PATH_LABEL: &str = "CSV Loaded";

/// Rendering of a missing cell
pub const MISSING_VALUE_LABEL: &str = "nan";

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
