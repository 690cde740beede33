//! Faculty spreadsheet ingestion.
//!
//! This crate reads the faculty (dosen) spreadsheet and builds the lookup
//! structures the form needs.
//!
//! # Features
//!
//! - **Workbook loading**: first worksheet of `.xlsx`, `.xlsm`, `.xls` or `.ods`
//!   files via calamine
//! - **CSV loading**: the same table exported as `.csv`, via Polars
//! - **Column normalisation**: headers are trimmed and lower-cased before the
//!   required columns (`nama`, `jenis_id`, `id`) are checked
//! - **Directory**: id → member and display label → id lookups
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use sidang_ingest::load_faculty_directory;
//!
//! let directory = load_faculty_directory(Path::new("resources/dosen.xlsx"))?;
//! for label in directory.display_labels() {
//!     println!("{label}");
//! }
//! ```

mod directory;
mod error;
mod sheet;

// === Error Types ===
pub use error::{IngestError, Result};

// === Directory ===
pub use directory::{FacultyDirectory, REQUIRED_COLUMNS, load_faculty_directory};

// === Sheet Reading ===
pub use sheet::{SheetFormat, normalize_column_name, read_sheet, unique_column_names};
