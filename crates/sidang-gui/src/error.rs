//! GUI-specific error types.
//!
//! Every failure that reaches the window ends up as a [`GuiError`], which
//! carries the modal title and the message shown to the user.

use thiserror::Error;

use sidang_ingest::IngestError;
use sidang_output::OutputError;
use sidang_validate::ValidationFailure;

/// Errors shown to the user in a modal dialog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GuiError {
    /// A prerequisite (spreadsheet, template) is missing.
    #[error("{message}")]
    NotReady { message: String },

    /// A form field could not be parsed or a rule failed.
    #[error("{message}")]
    InvalidInput { message: String },

    /// The faculty spreadsheet could not be loaded.
    #[error("{reason}")]
    SpreadsheetLoad { reason: String },

    /// Rendering or writing a document failed.
    #[error("{reason}")]
    Generate { reason: String },

    /// Settings could not be written.
    #[error("Gagal menyimpan pengaturan: {reason}")]
    SettingsSave { reason: String },

    /// Background task panicked or was cancelled.
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl GuiError {
    /// Modal title for this error.
    pub fn title(&self) -> &'static str {
        match self {
            Self::NotReady { .. } => "Belum siap",
            Self::InvalidInput { .. } => "Input belum valid",
            Self::SpreadsheetLoad { .. } => "Gagal load Excel",
            Self::Generate { .. } => "Gagal generate",
            Self::SettingsSave { .. } => "Pengaturan",
            Self::Internal { .. } => "Kesalahan",
        }
    }

    /// Warnings are user-fixable; everything else is an error.
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::NotReady { .. } | Self::InvalidInput { .. })
    }

    pub fn not_ready(message: impl Into<String>) -> Self {
        Self::NotReady {
            message: message.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::fmt::Display) -> Self {
        Self::Internal {
            message: err.to_string(),
        }
    }
}

impl From<IngestError> for GuiError {
    fn from(err: IngestError) -> Self {
        Self::SpreadsheetLoad {
            reason: err.to_string(),
        }
    }
}

impl From<OutputError> for GuiError {
    fn from(err: OutputError) -> Self {
        Self::Generate {
            reason: err.to_string(),
        }
    }
}

impl From<ValidationFailure> for GuiError {
    fn from(failure: ValidationFailure) -> Self {
        Self::invalid_input(failure.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_output_error_keeps_message() {
        let err: GuiError = OutputError::TemplateNotFound {
            path: PathBuf::from("resources/a.docx"),
        }
        .into();
        assert_eq!(err.title(), "Gagal generate");
        assert_eq!(err.to_string(), "Template tidak ditemukan: resources/a.docx");
        assert!(!err.is_warning());
    }

    #[test]
    fn test_missing_columns_message() {
        let err: GuiError = IngestError::MissingColumns {
            missing: vec!["jenis_id".to_string()],
        }
        .into();
        assert_eq!(err.title(), "Gagal load Excel");
        assert!(err.to_string().starts_with("Kolom Excel harus ada: nama, jenis_id, id"));
    }
}
