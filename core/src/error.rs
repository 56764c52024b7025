//! Error types for the drafts client.
//!
//! # Design
//! `ValidationError` covers precondition failures raised before any request
//! is handed to a `Requester`; it always names the offending field.
//! `ApiError` is what every async operation returns. Errors produced by the
//! requester flow through the client untouched, so `NotFound` and
//! `HttpError` reach the caller exactly as the transport reported them.

use thiserror::Error;

/// A required input was missing or empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field was empty. Holds the field path, e.g. `draft.title`.
    #[error("{0} cannot be empty")]
    MissingField(&'static str),

    /// Neither `auth.private_key` nor `auth.token` was provided.
    #[error("auth.private_key or auth.token cannot be empty")]
    MissingCredentials,
}

impl ValidationError {
    /// The field path this error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingField(field) => field,
            ValidationError::MissingCredentials => "auth",
        }
    }
}

/// Errors returned by `DraftClient` operations and `Requester` implementations.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("serialization failed: {0}")]
    Serialization(String),

    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request is authorized by a private key only and must go through a
    /// signing transport.
    #[error("request must be signed with the private key before sending")]
    SigningRequired,

    #[error("transport error: {0}")]
    Transport(String),
}

/// Errors raised while loading a `ClientConfig` from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_name_the_field() {
        let err = ValidationError::MissingField("draft.mimeType");
        assert_eq!(err.to_string(), "draft.mimeType cannot be empty");
        assert_eq!(err.field(), "draft.mimeType");
        assert_eq!(ValidationError::MissingCredentials.field(), "auth");
    }

    #[test]
    fn validation_converts_into_api_error() {
        let err: ApiError = ValidationError::MissingField("id").into();
        assert!(matches!(
            err,
            ApiError::Validation(ValidationError::MissingField("id"))
        ));
        assert_eq!(err.to_string(), "validation failed: id cannot be empty");
    }
}
