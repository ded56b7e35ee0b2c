use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// NumberList – the loaded sequence
// ---------------------------------------------------------------------------

/// An ordered list of integers read from a single source.
///
/// No ordering or uniqueness is imposed; values keep the order they had in
/// the file. Consumers borrow the values and never mutate them in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberList {
    values: Vec<i64>,
    source: PathBuf,
}

impl NumberList {
    pub fn new(values: Vec<i64>, source: impl Into<PathBuf>) -> Self {
        NumberList {
            values,
            source: source.into(),
        }
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no values were loaded.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Parsed values, in file order.
    pub fn as_slice(&self) -> &[i64] {
        &self.values
    }

    /// Where the values were read from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Smallest and largest value, or `None` for an empty list.
    pub fn bounds(&self) -> Option<(i64, i64)> {
        let first = *self.values.first()?;
        Some(
            self.values
                .iter()
                .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
        )
    }
}
