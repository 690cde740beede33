//! Validation of the defense form.
//!
//! Validation is an ordered list of rules, each a predicate paired with the
//! message shown when it fails. Rules run in order and the first failure
//! short-circuits; the result is a [`ValidationOutcome`], never an error.
//!
//! # Example
//!
//! ```ignore
//! use sidang_validate::{ValidationOutcome, validate_form};
//!
//! match validate_form(&form) {
//!     ValidationOutcome::Valid => generate(&form),
//!     ValidationOutcome::Invalid(failure) => show_warning(failure.message()),
//! }
//! ```

mod outcome;
mod rules;
mod validator;

pub use outcome::{ValidationFailure, ValidationOutcome};
pub use rules::{Rule, RuleId};
pub use validator::{Validator, validate_form, validate_memo};
