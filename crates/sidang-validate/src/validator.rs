//! Short-circuit rule evaluation.

use sidang_model::{FormData, MemoDetails};

use crate::outcome::{ValidationFailure, ValidationOutcome};
use crate::rules::{Rule, form_rules, memo_rules};

/// An ordered rule list for one input type.
#[derive(Debug, Clone)]
pub struct Validator<T> {
    rules: Vec<Rule<T>>,
}

impl<T> Validator<T> {
    pub fn new(rules: Vec<Rule<T>>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule<T>] {
        &self.rules
    }

    /// Run rules in order and stop at the first failure.
    pub fn validate(&self, input: &T) -> ValidationOutcome {
        match self.rules.iter().find(|rule| !rule.passes(input)) {
            Some(rule) => {
                tracing::debug!(rule = ?rule.id, "Validation failed");
                ValidationOutcome::Invalid(ValidationFailure { rule: rule.id })
            }
            None => ValidationOutcome::Valid,
        }
    }
}

impl Validator<FormData> {
    pub fn for_form() -> Self {
        Self::new(form_rules())
    }
}

impl Validator<MemoDetails> {
    pub fn for_memo() -> Self {
        Self::new(memo_rules())
    }
}

/// Validate the defense form.
pub fn validate_form(form: &FormData) -> ValidationOutcome {
    Validator::for_form().validate(form)
}

/// Validate the memo (Nota Dinas) inputs.
pub fn validate_memo(memo: &MemoDetails) -> ValidationOutcome {
    Validator::for_memo().validate(memo)
}
