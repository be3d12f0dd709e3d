use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the bikeshare explorer.
#[derive(Error, Debug)]
pub enum BikeshareError {
    /// A city's backing file is missing or could not be opened.
    #[error("Failed to open data source {path}: {source}")]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row's start-time cell could not be parsed.
    #[error("Malformed timestamp on row {row}: {value:?}")]
    MalformedTimestamp { row: usize, value: String },

    /// A required numeric cell could not be parsed.
    #[error("Malformed {column} on row {row}: {value:?}")]
    MalformedField {
        row: usize,
        column: String,
        value: String,
    },

    /// The source header lacks a column every row depends on.
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A city key outside the enumerated set was requested.
    #[error("Unknown city: {0}")]
    InvalidKey(String),

    /// User input did not match any of the enumerated choices.
    #[error("Invalid {kind}: {value:?}")]
    InvalidChoice { kind: &'static str, value: String },

    /// The CSV reader rejected the file's structure.
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the bikeshare crates.
pub type Result<T> = std::result::Result<T, BikeshareError>;
