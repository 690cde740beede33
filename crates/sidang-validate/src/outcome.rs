//! Validation result types.

use std::fmt;

use crate::rules::RuleId;

/// The first rule that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationFailure {
    pub rule: RuleId,
}

impl ValidationFailure {
    pub fn message(&self) -> &'static str {
        self.rule.message()
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ValidationFailure {}

/// Either every rule passed, or the first failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid(ValidationFailure),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn failure(&self) -> Option<&ValidationFailure> {
        match self {
            Self::Valid => None,
            Self::Invalid(failure) => Some(failure),
        }
    }

    /// Message of the failing rule, or `""` when valid.
    pub fn message(&self) -> &'static str {
        self.failure().map_or("", ValidationFailure::message)
    }

    /// Convert into a `Result` for `?`-style call sites.
    pub fn into_result(self) -> Result<(), ValidationFailure> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid(failure) => Err(failure),
        }
    }
}
