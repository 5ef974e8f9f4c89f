//! Pre-flight argument validation.
//!
//! These checks run synchronously before any request is dispatched, so a
//! rejected argument never produces a partial network call.

use crate::error::{HatxError, HatxResult};

/// Reject an absent, empty or whitespace-only string argument.
pub fn require_non_empty(field: &str, value: &str) -> HatxResult<()> {
    if value.trim().is_empty() {
        return Err(HatxError::Validation {
            message: format!("Expected a non-empty value for {field}."),
        });
    }
    Ok(())
}

/// Reject an empty slice argument.
pub fn require_non_empty_slice<T>(field: &str, values: &[T]) -> HatxResult<()> {
    if values.is_empty() {
        return Err(HatxError::Validation {
            message: format!("Expected {field} to be a non-empty array."),
        });
    }
    Ok(())
}
