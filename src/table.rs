//! # Raw Table Ingestion
//!
//! Reads the semicolon-delimited export into a header row plus data rows
//! of plain string cells. Tokenization is delegated to the `csv` crate in
//! flexible mode, so ragged rows survive ingestion and missing cells are
//! treated as absent downstream.
//!
//! Only two failures are terminal here: a structurally malformed file
//! (tokenizer error) and an empty input (no header, or a header with no
//! data rows). Everything at cell granularity is handled later as absent
//! data, never as an error.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Errors that can occur while ingesting a raw log export.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// I/O error reading the input file
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Structurally malformed delimited text
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Input contains no header row at all
    #[error("Input has no header row")]
    MissingHeader,

    /// Input contains a header row but no data rows
    #[error("Input has no data rows")]
    NoDataRows,
}

/// A fully materialized log export: header row plus data rows.
///
/// Rows may be ragged; every cell access downstream goes through
/// `slice::get`, so a short row simply yields absent cells.
#[derive(Debug, Clone)]
pub struct RawTable {
    /// The header row, untrimmed.
    pub header: Vec<String>,
    /// All data rows in source order.
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Read a semicolon-delimited export from a file path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Read a semicolon-delimited export from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TableError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .flexible(true)
            .has_headers(false)
            .from_reader(reader);

        let mut records = csv_reader.records();

        let header: Vec<String> = match records.next() {
            Some(record) => record?.iter().map(|s| s.to_string()).collect(),
            None => return Err(TableError::MissingHeader),
        };

        let mut rows = Vec::new();
        for record in records {
            let record = record?;
            rows.push(record.iter().map(|s| s.to_string()).collect());
        }

        if rows.is_empty() {
            return Err(TableError::NoDataRows);
        }

        log::info!("ingested table: {} columns, {} rows", header.len(), rows.len());

        Ok(Self { header, rows })
    }
}
