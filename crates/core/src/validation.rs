//! Bridge from `validator` derive errors to [`CoreError::Validation`].
//!
//! Request DTOs derive [`Validate`] with `required` rules on every
//! mandatory field; [`validate_request`] flattens the failures into one
//! message listing the offending fields in a stable order.

use validator::{Validate, ValidationErrors};

use crate::error::CoreError;
use crate::types::Money;

/// Run the derived validation rules of `request`.
pub fn validate_request<T: Validate>(request: &T) -> Result<(), CoreError> {
    request.validate().map_err(|errs| CoreError::Validation(describe(&errs)))
}

/// Unwrap a field that validation has already proven present.
pub fn present<T>(field: &'static str, value: Option<T>) -> Result<T, CoreError> {
    value.ok_or_else(|| CoreError::Validation(format!("{field} is required")))
}

/// Reject zero and negative amounts.
pub fn require_positive(field: &'static str, amount: Money) -> Result<Money, CoreError> {
    if amount.is_sign_positive() && !amount.is_zero() {
        Ok(amount)
    } else {
        Err(CoreError::Validation(format!(
            "{field} must be greater than zero, got {amount}"
        )))
    }
}

fn describe(errs: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errs
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            let reason = errors
                .iter()
                .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| "is invalid".to_string());
            format!("{field} {reason}")
        })
        .collect();
    parts.sort();
    parts.join("; ")
}
