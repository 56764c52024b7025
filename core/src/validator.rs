//! Precondition checks run before a request leaves the client.

use crate::error::ValidationError;
use crate::types::AuthOptions;

/// Fail with `MissingField(field)` when `value` is empty.
pub fn require<'a>(value: &'a str, field: &'static str) -> Result<&'a str, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(value)
}

/// Fail unless `auth` carries a non-empty private key or token.
pub fn require_credentials(auth: &AuthOptions) -> Result<(), ValidationError> {
    let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.is_empty());
    if present(&auth.private_key) || present(&auth.token) {
        Ok(())
    } else {
        Err(ValidationError::MissingCredentials)
    }
}

/// Keep an optional field only when it holds a non-empty value.
pub(crate) fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|s| !s.is_empty()).cloned()
}
