//! Field validation shared by the console forms.

use crate::error::{DomainError, DomainResult};

/// Require a non-blank value; returns the trimmed content.
pub fn required(field: &str, value: &str) -> DomainResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

/// Require a plausible email address (basic shape check).
pub fn email(field: &str, value: &str) -> DomainResult<String> {
    let trimmed = required(field, value)?;
    if !trimmed.contains('@') {
        return Err(DomainError::validation(format!(
            "{field} must be a valid email"
        )));
    }
    Ok(trimmed)
}
