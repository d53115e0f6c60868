//! Sliding-window pattern extraction, counting and ranking
//!
//! A pattern is the tuple of `length` consecutive values starting at some offset of a
//! column. Windows overlap: offsets `i` and `i + 1` share `length - 1` values.
//! Ranking is count-major in the requested direction; patterns with equal counts keep
//! the order in which they first occur in the column, in both directions.

use crate::io::error::{PatternError, Result, invalid_argument};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

/// Ranking direction for counted patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Least frequent patterns first
    Ascending,
    /// Most frequent patterns first
    #[default]
    Descending,
}

impl SortOrder {
    /// Lowercase name accepted by [`SortOrder::from_str`]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ascending" | "asc" => Ok(Self::Ascending),
            "descending" | "desc" => Ok(Self::Descending),
            _ => Err(invalid_argument(
                "order",
                &s,
                &"expected 'ascending' or 'descending'",
            )),
        }
    }
}

/// A distinct pattern together with its occurrence count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedPattern<T> {
    /// Window values in column order
    pub values: Vec<T>,
    /// Number of offsets at which the window occurs
    pub count: usize,
}

impl<T: fmt::Display> fmt::Display for RankedPattern<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Pattern:")?;
        for value in &self.values {
            write!(f, " {value}")?;
        }
        write!(f, " | Occurrences: {}", self.count)
    }
}

/// Number of windows of `length` values in a column of `column_len` values
pub const fn window_count(column_len: usize, length: usize) -> usize {
    if length == 0 || length > column_len {
        0
    } else {
        column_len - length + 1
    }
}

/// Occurrence counts of distinct patterns, kept in order of first occurrence
///
/// Keys borrow from the column, so counting never copies values.
#[derive(Debug, Clone)]
pub struct FrequencyTable<'a, T> {
    slots: HashMap<&'a [T], usize>,
    entries: Vec<(&'a [T], usize)>,
}

impl<'a, T: Eq + Hash> FrequencyTable<'a, T> {
    /// Count every window of `length` consecutive values in `column`
    ///
    /// A column shorter than `length` produces an empty table.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::InvalidArgument`] if `length` is zero
    pub fn from_windows(column: &'a [T], length: usize) -> Result<Self> {
        if length == 0 {
            return Err(invalid_argument(
                "length",
                &length,
                &"pattern length must be positive",
            ));
        }

        let mut table = Self {
            slots: HashMap::new(),
            entries: Vec::new(),
        };
        for window in column.windows(length) {
            table.record(window);
        }
        Ok(table)
    }

    fn record(&mut self, window: &'a [T]) {
        match self.slots.entry(window) {
            Entry::Occupied(slot) => {
                if let Some(entry) = self.entries.get_mut(*slot.get()) {
                    entry.1 += 1;
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(self.entries.len());
                self.entries.push((window, 1));
            }
        }
    }

    /// Occurrence count of `pattern`, zero if it never occurs
    pub fn count(&self, pattern: &[T]) -> usize {
        self.slots
            .get(pattern)
            .and_then(|&index| self.entries.get(index))
            .map_or(0, |entry| entry.1)
    }

    /// Number of distinct patterns
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no window was counted
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of counted windows
    pub fn total(&self) -> usize {
        self.entries.iter().map(|entry| entry.1).sum()
    }

    /// Patterns and counts in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = (&'a [T], usize)> + '_ {
        self.entries.iter().copied()
    }

    /// Rank the table by count in the given direction
    ///
    /// The sort is stable over first-occurrence order, which is the tie-break.
    pub fn into_ranked(self, order: SortOrder) -> Vec<RankedPattern<T>>
    where
        T: Clone,
    {
        let mut entries = self.entries;
        match order {
            SortOrder::Ascending => entries.sort_by_key(|entry| entry.1),
            SortOrder::Descending => entries.sort_by(|a, b| b.1.cmp(&a.1)),
        }

        entries
            .into_iter()
            .map(|(values, count)| RankedPattern {
                values: values.to_vec(),
                count,
            })
            .collect()
    }
}

/// Count every pattern of `length` consecutive values and rank them by frequency
///
/// An empty column, or one shorter than `length`, yields an empty result.
///
/// # Errors
///
/// Returns [`PatternError::InvalidArgument`] if `length` is zero
pub fn count_patterns<T>(
    column: &[T],
    length: usize,
    order: SortOrder,
) -> Result<Vec<RankedPattern<T>>>
where
    T: Eq + Hash + Clone,
{
    let table = FrequencyTable::from_windows(column, length)?;
    Ok(table.into_ranked(order))
}
