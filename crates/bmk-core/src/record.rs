//! Bookmark table input: CSV rows with `name` and `url` columns.

use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// Columns every bookmark table must carry. Extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 2] = ["name", "url"];

/// One bookmark row from the input table. Identity is positional; duplicate
/// rows stay separate entries.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BookmarkRecord {
    pub name: String,
    pub url: String,
}

/// Error reading the bookmark table. `MissingField` is raised before any row
/// is deserialized so callers can abort without touching the output file.
#[derive(Debug)]
pub enum ReadError {
    /// Header row lacks a required column.
    MissingField { column: &'static str },
    /// CSV-level failure: I/O, ragged row, bad field shape.
    Csv(csv::Error),
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::MissingField { column } => {
                write!(f, "input header is missing required column `{}`", column)
            }
            ReadError::Csv(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReadError::Csv(e) => Some(e),
            ReadError::MissingField { .. } => None,
        }
    }
}

/// Reads all bookmark rows from `path`.
///
/// The header must contain `name` and `url` (any order); other columns are
/// ignored. Row order and duplicates are preserved.
pub fn read_records(path: &Path) -> Result<Vec<BookmarkRecord>, ReadError> {
    let mut reader = csv::Reader::from_path(path).map_err(ReadError::Csv)?;

    let headers = reader.headers().map_err(ReadError::Csv)?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(ReadError::MissingField { column });
        }
    }

    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row.map_err(ReadError::Csv)?);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn table(contents: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn reads_rows_in_order() {
        let f = table("name,url\nExample,http://example.com\nHidden,http://abc123.onion/page\n");
        let records = read_records(f.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Example");
        assert_eq!(records[0].url, "http://example.com");
        assert_eq!(records[1].name, "Hidden");
        assert_eq!(records[1].url, "http://abc123.onion/page");
    }

    #[test]
    fn extra_columns_ignored_any_order() {
        let f = table("tag,url,name\nmisc,http://a.example,A\n");
        let records = read_records(f.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "A");
        assert_eq!(records[0].url, "http://a.example");
    }

    #[test]
    fn duplicate_rows_preserved() {
        let f = table("name,url\nSame,http://same.example\nSame,http://same.example\n");
        let records = read_records(f.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], records[1]);
    }

    #[test]
    fn header_only_yields_no_rows() {
        let f = table("name,url\n");
        assert!(read_records(f.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_url_column_is_fatal() {
        let f = table("name,link\nExample,http://example.com\n");
        match read_records(f.path()) {
            Err(ReadError::MissingField { column }) => assert_eq!(column, "url"),
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn missing_name_column_is_fatal() {
        let f = table("title,url\nExample,http://example.com\n");
        match read_records(f.path()) {
            Err(ReadError::MissingField { column }) => assert_eq!(column, "name"),
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn quoted_fields_parse() {
        let f = table("name,url\n\"Comma, Inc\",http://comma.example\n");
        let records = read_records(f.path()).unwrap();
        assert_eq!(records[0].name, "Comma, Inc");
    }
}
