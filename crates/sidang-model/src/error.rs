//! Error types for model construction.

use thiserror::Error;

/// Errors raised when building model values from raw input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Time string is not in `HH:mm` form.
    #[error("invalid time '{value}': expected HH:mm")]
    InvalidTime { value: String },

    /// Hour or minute component is out of range.
    #[error("time '{value}' is out of range")]
    TimeOutOfRange { value: String },

    /// Advisor count other than 1 or 2.
    #[error("Jumlah pembimbing tidak valid (harus 1 atau 2), got {count}")]
    InvalidAdvisorCount { count: usize },
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ModelError::InvalidTime {
            value: "9.30".to_string(),
        };
        assert_eq!(err.to_string(), "invalid time '9.30': expected HH:mm");
    }
}
