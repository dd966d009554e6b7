// src/error.rs
use thiserror::Error;

/// Everything that can stop a scrape/export run.
/// Malformed coordinate text is not in here: it normalizes to garbage, not to an error.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Unreachable host, transport failure or non-success status.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("no <table> element found in document")]
    NoTable,

    /// `row` is 1-based and counts data rows only (the header row is not counted).
    #[error("table row {row} has {cells} cells, expected at least 5")]
    ShortRow { row: usize, cells: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("bad {column} coordinate for {state}: {value:?}")]
    BadCoordinate {
        state: String,
        column: &'static str,
        value: String,
    },
}

pub type Result<T, E = ScrapeError> = std::result::Result<T, E>;
