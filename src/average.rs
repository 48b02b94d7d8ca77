//! Single-pass mean of one named CSV column.

use std::path::Path;

use anyhow::{Context, anyhow};
use encoding_rs::UTF_8;
use log::debug;

use crate::{
    error::{AverageError, Result, ValueProblem},
    io_utils,
};

/// Running `(sum, count)` pair fed once per data row.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Accumulator {
    sum: f64,
    count: u64,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    pub fn sum(&self) -> f64 {
        self.sum
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// `None` until at least one value has been added.
    pub fn mean(&self) -> Option<f64> {
        if self.count > 0 {
            Some(self.sum / self.count as f64)
        } else {
            None
        }
    }
}

/// Computes the arithmetic mean of `column` over every data row in the CSV at `path`.
///
/// The file is read once, one record at a time, and closed before returning on
/// every path. Any cell that does not parse as a number aborts the whole pass.
pub fn compute_average(path: &Path, column: &str) -> Result<f64> {
    debug!("Opening {path:?} to average column '{column}'");
    let mut reader = io_utils::open_csv_reader_from_path(path)?;
    let headers = io_utils::reader_headers(&mut reader)
        .with_context(|| format!("Reading headers from {path:?}"))?;
    // Later duplicates shadow earlier ones, as when a row is read as a name-to-value map.
    let column_idx = headers
        .iter()
        .rposition(|name| name == column)
        .ok_or_else(|| ValueProblem::MissingColumn {
            column: column.to_string(),
        })?;
    debug!("Column '{column}' resolved to index {column_idx}");

    let mut acc = Accumulator::new();
    let mut last_line = 1;
    for (row_idx, record) in reader.byte_records().enumerate() {
        let record = record
            .with_context(|| format!("Reading record after line {last_line} in {path:?}"))?;
        let line = record
            .position()
            .map_or(row_idx as u64 + 2, |pos| pos.line());
        last_line = line;
        let raw = record.get(column_idx).ok_or_else(|| {
            anyhow!(
                "Line {line} in {path:?} has {} field(s) and no value for column '{column}'",
                record.len()
            )
        })?;
        let text = io_utils::decode_bytes(raw, UTF_8)
            .with_context(|| format!("Line {line} column '{column}'"))?;
        let value = parse_number(&text).ok_or_else(|| ValueProblem::InvalidNumber {
            line,
            column: column.to_string(),
            value: text,
        })?;
        acc.add(value);
    }

    debug!(
        "Read {} row(s) from {path:?} with sum {}",
        acc.count(),
        acc.sum()
    );
    acc.mean().ok_or_else(|| {
        AverageError::from(ValueProblem::NoRows {
            column: column.to_string(),
        })
    })
}

fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok()
}
