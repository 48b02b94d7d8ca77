//! Failure taxonomy for averaging a CSV column.
//!
//! Variants are ordered from most to least specific; the entry point matches
//! them in that order when rendering a message.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AverageError {
    /// The input path does not exist.
    #[error("The file '{}' was not found.", path.display())]
    NotFound { path: PathBuf },
    /// The data itself cannot produce a mean.
    #[error(transparent)]
    Value(#[from] ValueProblem),
    /// Anything else: permissions, I/O failures mid-read, malformed CSV, bad encoding.
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValueProblem {
    #[error("Column '{column}' not found in CSV header")]
    MissingColumn { column: String },
    /// `line` is the 1-based file line where the offending record starts.
    #[error("Line {line}: could not convert '{value}' in column '{column}' to a number")]
    InvalidNumber {
        line: u64,
        column: String,
        value: String,
    },
    #[error("No data rows found for column '{column}'")]
    NoRows { column: String },
}

pub type Result<T> = std::result::Result<T, AverageError>;
