//! Reader construction and text decoding for the input CSV.
//!
//! The input file is opened here and handed to the `csv` reader, which owns the
//! handle for the rest of the pass. Fields are kept as raw bytes until they are
//! needed and decoded as UTF-8 through `encoding_rs`.

use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::Path,
};

use anyhow::{Context, anyhow};
use encoding_rs::{Encoding, UTF_8};

use crate::error::{AverageError, Result};

pub const DEFAULT_CSV_DELIMITER: u8 = b',';

/// Rows may carry more or fewer fields than the header; only the averaged
/// column is checked.
pub fn open_csv_reader<R>(reader: R, delimiter: u8) -> csv::Reader<R>
where
    R: Read,
{
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(true)
        .delimiter(delimiter)
        .double_quote(true)
        .flexible(true);
    builder.from_reader(reader)
}

/// Opens `path` for a single streaming pass, separating a missing file from
/// every other reason the open can fail.
pub fn open_csv_reader_from_path(path: &Path) -> Result<csv::Reader<BufReader<File>>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(AverageError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Err(err) => {
            return Err(anyhow::Error::new(err)
                .context(format!("Opening input file {path:?}"))
                .into());
        }
    };
    Ok(open_csv_reader(BufReader::new(file), DEFAULT_CSV_DELIMITER))
}

pub fn decode_bytes(bytes: &[u8], encoding: &'static Encoding) -> anyhow::Result<String> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
        .ok_or_else(|| anyhow!("Failed to decode text with encoding {}", encoding.name()))
}

pub fn reader_headers<R>(reader: &mut csv::Reader<R>) -> anyhow::Result<Vec<String>>
where
    R: Read,
{
    let headers = reader.byte_headers().context("Reading header row")?.clone();
    let mut decoded = headers
        .iter()
        .map(|field| decode_bytes(field, UTF_8))
        .collect::<anyhow::Result<Vec<_>>>()?;
    if let Some(first) = decoded.first_mut()
        && let Some(stripped) = first.strip_prefix('\u{feff}')
    {
        *first = stripped.to_string();
    }
    Ok(decoded)
}
