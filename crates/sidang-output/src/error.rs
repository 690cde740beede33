//! Error types for document generation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while selecting, rendering or writing a document.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Template file does not exist.
    #[error("Template tidak ditemukan: {path}")]
    TemplateNotFound { path: PathBuf },

    /// Template is not a readable `.docx` (zip) archive.
    #[error("invalid template {path}: {message}")]
    TemplateArchive { path: PathBuf, message: String },

    /// A document part is not valid UTF-8 XML text.
    #[error("invalid XML in template part '{part}': {message}")]
    TemplatePart { part: String, message: String },

    /// Filesystem operation failed.
    #[error("failed to {operation} {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<zip::result::ZipError> for OutputError {
    fn from(err: zip::result::ZipError) -> Self {
        Self::TemplateArchive {
            path: PathBuf::new(),
            message: err.to_string(),
        }
    }
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OutputError::TemplateNotFound {
            path: PathBuf::from("resources/template.docx"),
        };
        assert_eq!(
            err.to_string(),
            "Template tidak ditemukan: resources/template.docx"
        );
    }
}
