//! Spreadsheet reading into a string-typed Polars DataFrame.
//!
//! Workbooks are read with calamine (first worksheet only); CSV files go
//! through Polars' own reader. Either way the result has one `String`
//! column per header cell, with normalised column names.

use std::collections::HashSet;
use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use polars::prelude::{
    AnyValue, Column, CsvReadOptions, DataFrame, NamedFrom, SerReader, Series,
};

use crate::error::{IngestError, Result};

/// Spreadsheet formats accepted by [`read_sheet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    /// Any workbook calamine can open (xlsx, xlsm, xls, ods).
    Workbook,
    Csv,
}

impl SheetFormat {
    /// Detect the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "xlsx" | "xlsm" | "xls" | "xlsb" | "ods" => Ok(Self::Workbook),
            "csv" => Ok(Self::Csv),
            _ => Err(IngestError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            }),
        }
    }
}

/// Normalise a header cell: strip a UTF-8 BOM, trim, lower-case.
pub fn normalize_column_name(name: &str) -> String {
    name.trim_start_matches('\u{feff}').trim().to_lowercase()
}

/// Normalise every header and make the names unique.
///
/// The first occurrence keeps its name; later ones get `_2`, `_3`, ... so a
/// repeated column never shadows a required one.
pub fn unique_column_names<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut result = Vec::with_capacity(names.len());
    for name in names {
        let base = normalize_column_name(name.as_ref());
        let mut candidate = base.clone();
        let mut suffix = 2;
        while !seen.insert(candidate.clone()) {
            candidate = format!("{base}_{suffix}");
            suffix += 1;
        }
        result.push(candidate);
    }
    result
}

/// Read the first sheet of `path` into a DataFrame of string columns.
pub fn read_sheet(path: &Path) -> Result<DataFrame> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut df = match SheetFormat::from_path(path)? {
        SheetFormat::Workbook => read_workbook(path)?,
        SheetFormat::Csv => read_csv(path)?,
    };

    let current: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    df.set_column_names(unique_column_names(&current))?;

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "Read spreadsheet"
    );
    Ok(df)
}

fn read_workbook(path: &Path) -> Result<DataFrame> {
    let workbook_error = |message: String| IngestError::Workbook {
        path: path.to_path_buf(),
        message,
    };

    let mut workbook = open_workbook_auto(path).map_err(|e| workbook_error(e.to_string()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| IngestError::EmptySheet {
            path: path.to_path_buf(),
        })?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| workbook_error(e.to_string()))?;

    let mut rows = range.rows();
    let header = rows.next().ok_or_else(|| IngestError::EmptySheet {
        path: path.to_path_buf(),
    })?;

    let raw_headers: Vec<String> = header
        .iter()
        .enumerate()
        .map(|(idx, cell)| {
            let name = cell_text(cell);
            if name.trim().is_empty() {
                format!("column_{}", idx + 1)
            } else {
                name
            }
        })
        .collect();
    let headers = unique_column_names(&raw_headers);

    let mut values: Vec<Vec<String>> = vec![Vec::with_capacity(range.height()); headers.len()];
    for row in rows {
        for (idx, column) in values.iter_mut().enumerate() {
            column.push(row.get(idx).map(cell_text).unwrap_or_default());
        }
    }

    let columns: Vec<Column> = headers
        .iter()
        .zip(values)
        .map(|(name, column)| Series::new(name.as_str().into(), column).into())
        .collect();

    Ok(DataFrame::new(columns)?)
}

fn read_csv(path: &Path) -> Result<DataFrame> {
    let csv_error = |message: String| IngestError::CsvParse {
        path: path.to_path_buf(),
        message,
    };

    // Schema inference over zero rows keeps every column as String, so ids
    // with leading zeros survive untouched.
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| csv_error(e.to_string()))?
        .finish()
        .map_err(|e| csv_error(e.to_string()))
}

/// Render a workbook cell as text.
///
/// Integral floats lose their `.0` so numeric ids read back as typed.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => format_number(*f),
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Render a DataFrame value as trimmed text; nulls become `""`.
pub(crate) fn any_to_text(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(s) => s.trim().to_string(),
        AnyValue::StringOwned(s) => s.trim().to_string(),
        AnyValue::Float64(f) => format_number(f),
        AnyValue::Float32(f) => format_number(f64::from(f)),
        other => other.to_string().trim().to_string(),
    }
}
