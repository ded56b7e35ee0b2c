use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the number pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// The input file does not exist.
    #[error("input file '{}' does not exist", path.display())]
    NotFound { path: PathBuf },

    /// A non-blank line (or CSV field) is not an integer.
    #[error("line {line}: '{value}' is not an integer")]
    Parse {
        line: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// An integer too large (or too small) to fit in an `i64`.
    #[error("line {line}: '{value}' is out of range for a 64-bit integer")]
    OutOfRange { line: usize, value: String },

    /// Averaging an empty list.
    #[error("cannot average an empty list of numbers")]
    DivisionByZero,

    /// Any other I/O failure while reading the input.
    #[error("reading '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing CSV input")]
    Csv(#[from] csv::Error),

    #[error("parsing JSON input")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
