use std::fs::File;
use std::io;
use std::num::IntErrorKind;
use std::path::Path;

use log::debug;

use super::model::NumberList;
use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a list of integers from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json` – a top-level array of integers: `[1, 2, 3]`
/// * `.csv`  – every non-blank field is an integer, no header row
/// * anything else – plain text, one integer per line, blank lines ignored
pub fn load_file(path: &Path) -> Result<NumberList> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let values = match ext.as_str() {
        "json" => load_json(path)?,
        "csv" => load_csv(path)?,
        _ => load_text(path)?,
    };

    debug!("loaded {} numbers from {}", values.len(), path.display());
    Ok(NumberList::new(values, path))
}

/// Parse the line-oriented text format.
///
/// Each line is trimmed; empty lines are skipped and every other line must
/// be an integer. Line numbers in errors are 1-based.
pub fn parse_numbers(text: &str) -> Result<Vec<i64>> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(line_no, line)| parse_integer(line, line_no))
        .collect()
}

fn parse_integer(token: &str, line: usize) -> Result<i64> {
    token.parse::<i64>().map_err(|source| match source.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Error::OutOfRange {
            line,
            value: token.to_string(),
        },
        _ => Error::Parse {
            line,
            value: token.to_string(),
            source,
        },
    })
}

fn io_error(path: &Path, err: io::Error) -> Error {
    if err.kind() == io::ErrorKind::NotFound {
        Error::NotFound {
            path: path.to_path_buf(),
        }
    } else {
        Error::Io {
            path: path.to_path_buf(),
            source: err,
        }
    }
}

// ---------------------------------------------------------------------------
// Text loader
// ---------------------------------------------------------------------------

fn load_text(path: &Path) -> Result<Vec<i64>> {
    let text = std::fs::read_to_string(path).map_err(|e| io_error(path, e))?;
    parse_numbers(&text)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

fn load_json(path: &Path) -> Result<Vec<i64>> {
    let text = std::fs::read_to_string(path).map_err(|e| io_error(path, e))?;
    Ok(serde_json::from_str(&text)?)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: no header, any number of fields per record.
/// `"1,2,3\n4,,5"` yields `[1, 2, 3, 4, 5]`.
fn load_csv(path: &Path) -> Result<Vec<i64>> {
    let file = File::open(path).map_err(|e| io_error(path, e))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut values = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line() as usize);
        for field in record.iter().filter(|f| !f.is_empty()) {
            values.push(parse_integer(field, line)?);
        }
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::TempDir;

    use super::*;

    fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn skips_blank_lines() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "numbers.txt", "1\n\n2\n3");
        let list = load_file(&path).unwrap();
        assert_eq!(list.as_slice(), &[1, 2, 3]);
        assert_eq!(list.source(), path.as_path());
    }

    #[test]
    fn trims_whitespace_and_accepts_negatives() {
        assert_eq!(parse_numbers("  7 \n\t\n-4\r\n   \n+2").unwrap(), vec![7, -4, 2]);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.txt");
        match load_file(&path) {
            Err(Error::NotFound { path: reported }) => assert_eq!(reported, path),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_line_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "bad.txt", "abc");
        match load_file(&path) {
            Err(Error::Parse { line, value, .. }) => {
                assert_eq!(line, 1);
                assert_eq!(value, "abc");
            }
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn parse_error_reports_original_line_number() {
        let err = parse_numbers("1\n\n2.5\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 3, .. }));
    }

    #[test]
    fn oversized_integer_is_out_of_range() {
        let err = parse_numbers("1\n99999999999999999999\n").unwrap_err();
        assert!(matches!(err, Error::OutOfRange { line: 2, .. }));
        assert_eq!(
            err.to_string(),
            "line 2: '99999999999999999999' is out of range for a 64-bit integer"
        );

        let err = parse_numbers("-99999999999999999999").unwrap_err();
        assert!(matches!(err, Error::OutOfRange { line: 1, .. }));
    }

    #[test]
    fn extreme_i64_values_still_parse() {
        assert_eq!(
            parse_numbers("9223372036854775807\n-9223372036854775808").unwrap(),
            vec![i64::MAX, i64::MIN]
        );
    }

    #[test]
    fn empty_file_loads_empty_list() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "empty.txt", "\n  \n");
        assert!(load_file(&path).unwrap().is_empty());
    }

    #[test]
    fn loads_json_array() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "numbers.json", "[10, -3, 7]");
        assert_eq!(load_file(&path).unwrap().as_slice(), &[10, -3, 7]);
    }

    #[test]
    fn malformed_json_is_json_error() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "numbers.json", "[1, \"two\"]");
        assert!(matches!(load_file(&path), Err(Error::Json(_))));
    }

    #[test]
    fn loads_ragged_csv_and_skips_empty_fields() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "numbers.csv", "1, 2,3\n4,,5\n\n6\n");
        assert_eq!(load_file(&path).unwrap().as_slice(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn csv_parse_error_carries_record_line() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "numbers.CSV", "1,2\n3,x\n");
        match load_file(&path) {
            Err(Error::Parse { line, value, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(value, "x");
            }
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn missing_csv_is_not_found() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gone.csv");
        assert!(matches!(load_file(&path), Err(Error::NotFound { .. })));
    }
}
