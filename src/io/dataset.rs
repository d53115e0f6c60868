//! CSV dataset loading with scalar type inference and named-column lookup

use crate::io::configuration::{FIELD_DELIMITER, MISSING_VALUE_LABEL};
use crate::io::error::{PatternError, Result, dataset_error};
use ndarray::{Array2, ShapeBuilder};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

// Field spellings read as missing values
const MISSING_MARKERS: [&str; 6] = ["", "NA", "N/A", "NaN", "nan", "null"];

// Written by spreadsheet exports ahead of the header
const BYTE_ORDER_MARK: char = '\u{feff}';

/// A single scalar value from a dataset
///
/// Fields are typed the way a dataframe loader infers them: integers first,
/// then floats, then text. Floats compare by value with `-0.0 == 0.0` and
/// every NaN equal to every other NaN, so that cells can be counted.
#[derive(Debug, Clone)]
pub enum Cell {
    /// Whole number
    Integer(i64),
    /// Floating point number
    Float(f64),
    /// Any other non-empty field
    Text(String),
    /// Empty or explicitly missing field
    Missing,
}

impl Cell {
    /// Infer a cell from a raw CSV field
    pub fn parse(field: &str) -> Self {
        if MISSING_MARKERS.contains(&field) {
            return Self::Missing;
        }

        let trimmed = field.trim();
        if let Ok(value) = trimmed.parse::<i64>() {
            Self::Integer(value)
        } else if let Ok(value) = trimmed.parse::<f64>() {
            Self::Float(value)
        } else {
            Self::Text(field.to_string())
        }
    }

    fn float_key(value: f64) -> u64 {
        if value.is_nan() {
            f64::NAN.to_bits()
        } else if value == 0.0 {
            0.0_f64.to_bits()
        } else {
            value.to_bits()
        }
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => Self::float_key(*a) == Self::float_key(*b),
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Missing, Self::Missing) => true,
            _ => false,
        }
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Integer(value) => value.hash(state),
            Self::Float(value) => Self::float_key(*value).hash(state),
            Self::Text(value) => value.hash(state),
            Self::Missing => {}
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value:?}"),
            Self::Text(value) => f.write_str(value),
            Self::Missing => f.write_str(MISSING_VALUE_LABEL),
        }
    }
}

/// Table of typed cells with a header row
///
/// Cells are stored column-major so that each column is a contiguous slice.
#[derive(Debug, Clone)]
pub struct Dataset {
    path: Option<PathBuf>,
    columns: Vec<String>,
    cells: Array2<Cell>,
}

impl Dataset {
    /// Load a dataset from a CSV file with a header row
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read or is not valid UTF-8
    /// - The file contains no header row
    /// - A quoted field is never closed
    /// - A record has more fields than the header
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_buf = path.as_ref().to_path_buf();
        let text = std::fs::read_to_string(&path_buf).map_err(|e| PatternError::FileSystem {
            path: path_buf.clone(),
            operation: "read dataset",
            source: e,
        })?;

        let mut dataset = Self::parse(&text, &path_buf)?;
        dataset.path = Some(path_buf);
        Ok(dataset)
    }

    /// Parse a dataset from in-memory CSV text
    ///
    /// # Errors
    ///
    /// Returns an error if the text has no header row, contains an unterminated
    /// quoted field, or has a record with more fields than the header
    pub fn from_csv_str(text: &str) -> Result<Self> {
        Self::parse(text, Path::new("<memory>"))
    }

    fn parse(text: &str, path: &Path) -> Result<Self> {
        let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
        let mut records = split_records(text, path)?.into_iter();
        let (_, columns) = records
            .next()
            .ok_or_else(|| dataset_error(path, &"no columns to parse from file"))?;

        let width = columns.len();
        let mut column_cells: Vec<Vec<Cell>> =
            std::iter::repeat_with(Vec::new).take(width).collect();
        let mut height = 0;
        for (line, fields) in records {
            if fields.len() > width {
                return Err(PatternError::MalformedRecord {
                    path: path.to_path_buf(),
                    line,
                    expected: width,
                    found: fields.len(),
                });
            }
            let mut fields = fields.into_iter();
            for cells in &mut column_cells {
                cells.push(fields.next().map_or(Cell::Missing, |field| Cell::parse(&field)));
            }
            height += 1;
        }

        // Columns are moved end to end into one column-major buffer
        let mut column_major = Vec::with_capacity(height * width);
        for cells in column_cells {
            column_major.extend(cells);
        }

        let cells = Array2::from_shape_vec((height, width).f(), column_major)
            .map_err(|e| dataset_error(path, &e))?;

        Ok(Self {
            path: None,
            columns,
            cells,
        })
    }

    /// Source file, if the dataset was loaded from disk
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Header names in file order
    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    /// Number of rows and columns, excluding the header
    pub fn shape(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Values of the named column in row order
    ///
    /// With duplicate header names the first matching column is used.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::ColumnNotFound`] if no header matches `name`
    pub fn column(&self, name: &str) -> Result<&[Cell]> {
        let index = self
            .columns
            .iter()
            .position(|column| column == name)
            .ok_or_else(|| PatternError::ColumnNotFound {
                column: name.to_string(),
                available: self.columns.clone(),
            })?;

        self.cells.column(index).to_slice().ok_or_else(|| {
            dataset_error(
                self.path.as_deref().unwrap_or_else(|| Path::new("<memory>")),
                &"column storage is not contiguous",
            )
        })
    }
}

// Splits CSV text into records tagged with their starting line; blank lines are skipped
fn split_records(text: &str, path: &Path) -> Result<Vec<(usize, Vec<String>)>> {
    let mut records = Vec::new();
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut quoted = false;
    let mut line = 1;
    let mut record_line = 1;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    field.push(ch);
                }
                _ => field.push(ch),
            }
            continue;
        }

        match ch {
            '"' => {
                in_quotes = true;
                quoted = true;
            }
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                fields.push(std::mem::take(&mut field));
                push_record(&mut records, record_line, std::mem::take(&mut fields), quoted);
                quoted = false;
                line += 1;
                record_line = line;
            }
            c if c == FIELD_DELIMITER => fields.push(std::mem::take(&mut field)),
            _ => field.push(ch),
        }
    }

    if in_quotes {
        return Err(dataset_error(
            path,
            &format!("unterminated quoted field starting on line {record_line}"),
        ));
    }

    if quoted || !field.is_empty() || !fields.is_empty() {
        fields.push(field);
        push_record(&mut records, record_line, fields, quoted);
    }

    Ok(records)
}

// A lone `""` is an empty field, not a blank line
fn push_record(
    records: &mut Vec<(usize, Vec<String>)>,
    line: usize,
    fields: Vec<String>,
    quoted: bool,
) {
    let blank = !quoted && matches!(fields.as_slice(), [only] if only.is_empty());
    if !blank {
        records.push((line, fields));
    }
}
