//! Error type shared by the loader, the cache and the append writer.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReviewError>;

#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("required column `{0}` is missing from the header")]
    MissingColumn(&'static str),

    #[error("line {line}: cannot parse `{value}` as a date")]
    InvalidDate { line: u64, value: String },

    #[error("line {line}: column `{column}` holds `{value}`, expected a number")]
    InvalidNumber {
        line: u64,
        column: &'static str,
        value: String,
    },

    #[error("rating must be a whole number between 1 and 5 (got {0})")]
    InvalidRating(i64),

    #[error("playtime must be a finite, non-negative number of hours (got {0})")]
    InvalidPlaytime(f64),
}

impl ReviewError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
