use std::path::PathBuf;

/// Failure kinds of a codebook extraction.
///
/// These are carried inside [anyhow::Error] with added context, tests and callers can recover
/// the kind with [anyhow::Error::downcast_ref].
#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum ExtractError {
    #[error("source PDF {path:?} does not exist or is not a file")]
    SourceNotFound { path: PathBuf },

    #[error("no table found on page {page}")]
    NoTables { page: i32 },

    #[error("expected exactly one table on page {page}, found {count}")]
    MultipleTables { page: i32, count: usize },

    #[error("column {label:?} not found in extracted table, available columns: {available:?}")]
    MissingColumn {
        label: String,
        available: Vec<String>,
    },

    #[error("got {actual} column names for a table with {expected} columns")]
    ColumnCountMismatch { expected: usize, actual: usize },

    #[error("extracted table has {actual} rows, at least {needed} are required")]
    TooFewRows { needed: usize, actual: usize },

    #[error("invalid layout: {0}")]
    InvalidLayout(String),

    #[error("failed to write output CSV to {path:?}")]
    SinkWrite { path: PathBuf },
}
