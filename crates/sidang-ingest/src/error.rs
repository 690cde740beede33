//! Error types for spreadsheet ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the faculty spreadsheet.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Spreadsheet file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Extension is not one of the supported spreadsheet formats.
    #[error("unsupported spreadsheet format '{extension}': {path}")]
    UnsupportedFormat { path: PathBuf, extension: String },

    // === Parsing Errors ===
    /// Workbook could not be opened or the sheet could not be read.
    #[error("failed to read workbook {path}: {message}")]
    Workbook { path: PathBuf, message: String },

    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Workbook has no sheet, or the first sheet has no header row.
    #[error("spreadsheet is empty: {path}")]
    EmptySheet { path: PathBuf },

    // === Schema Errors ===
    /// One or more required columns are absent.
    #[error(
        "Kolom Excel harus ada: nama, jenis_id, id (tidak ditemukan: {})",
        missing.join(", ")
    )]
    MissingColumns { missing: Vec<String> },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
