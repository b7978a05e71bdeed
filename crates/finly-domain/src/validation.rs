//! Field-level validation failures raised while turning drafts into entities.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Names the first required field that rejected a creation request.
pub enum ValidationError {
    BlankName,
    BlankNote,
    NonPositiveAmount,
    NonPositiveGoal,
    NoInstallments,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            ValidationError::BlankName => "name must not be blank",
            ValidationError::BlankNote => "note must not be blank",
            ValidationError::NonPositiveAmount => "amount must be greater than zero",
            ValidationError::NonPositiveGoal => "goal must be greater than zero",
            ValidationError::NoInstallments => "installment count must be at least one",
        };
        f.write_str(message)
    }
}

impl std::error::Error for ValidationError {}

/// Trims `value`, rejecting it with `error` when nothing is left.
pub(crate) fn required_text(value: &str, error: ValidationError) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(error)
    } else {
        Ok(trimmed.to_string())
    }
}
