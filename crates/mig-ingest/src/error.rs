//! Error types for migration data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the migration CSV.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read the file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// The CSV reader rejected a record.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A selected row is too short to contain a required column.
    #[error("line {line} of {path} has no '{column}' field (index {index})")]
    MissingField {
        path: PathBuf,
        line: u64,
        column: &'static str,
        index: usize,
    },

    // === Value Errors ===
    /// The value column of a selected row is not an integer.
    #[error("invalid value '{value}' on line {line} of {path}")]
    InvalidValue {
        path: PathBuf,
        line: u64,
        value: String,
    },

    /// The cleaned date label of a selected row is not a year.
    #[error("invalid year label '{label}' on line {line} of {path}")]
    InvalidYear {
        path: PathBuf,
        line: u64,
        label: String,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_line() {
        let err = IngestError::InvalidValue {
            path: PathBuf::from("data.csv"),
            line: 7,
            value: "..".to_string(),
        };
        assert_eq!(err.to_string(), "invalid value '..' on line 7 of data.csv");

        let err = IngestError::MissingField {
            path: PathBuf::from("data.csv"),
            line: 3,
            column: "VALUE",
            index: 10,
        };
        assert_eq!(
            err.to_string(),
            "line 3 of data.csv has no 'VALUE' field (index 10)"
        );
    }
}
