use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::data::model::NumberList;
use crate::error::Result;
use crate::stats::average;

// ---------------------------------------------------------------------------
// Report – summary of a loaded number list
// ---------------------------------------------------------------------------

/// Everything the CLI prints about a number list.
///
/// Built in one step so a failure (e.g. an empty list) produces no partial
/// output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub source: PathBuf,
    pub count: usize,
    pub average: f64,
    pub min: i64,
    pub max: i64,
}

impl Report {
    pub fn from_list(list: &NumberList) -> Result<Self> {
        let average = average(list.as_slice())?;
        // A non-empty list always has bounds; `average` already rejected empty input.
        let (min, max) = list.bounds().unwrap_or_default();
        Ok(Report {
            source: list.source().to_path_buf(),
            count: list.len(),
            average,
            min,
            max,
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Loaded {} numbers", self.count)?;
        write!(f, "Average: {:?}", self.average)
    }
}
