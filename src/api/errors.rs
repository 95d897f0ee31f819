//! API layer error types

use crate::generation::GenerationError;
use thiserror::Error;

/// Structural validation errors for request payloads.
///
/// Version compatibility is deliberately not checked here; it is a different
/// failure class with different transport semantics.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Request payload is missing")]
    MissingPayload,

    #[error("Namespace cannot be empty")]
    EmptyNamespace,

    #[error("Invalid namespace: {0}")]
    InvalidNamespace(String),

    #[error("File list cannot be empty")]
    EmptyFileList,

    #[error("File identifier cannot be empty")]
    EmptyFileIdentifier,
}

/// Transport-neutral status class for an API failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    BadRequest,
    Forbidden,
    Internal,
}

/// Failure outcomes of the models API.
///
/// Every variant is an expected, recoverable-by-caller outcome; the server
/// keeps serving after any of them. Each layer reports its own kind and no
/// layer translates another's.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The refusal message is deliberately generic: it never distinguishes
    /// "API disabled" from "bad credential".
    #[error("API server does not want to talk to you.")]
    AccessRefused,

    #[error("Invalid data: {0}")]
    MalformedRequest(#[from] ValidationError),

    #[error("{0}")]
    VersionIncompatible(String),

    #[error("Model generation failed: {0}")]
    GenerationFailed(#[from] GenerationError),
}

impl ApiError {
    pub fn status(&self) -> StatusClass {
        match self {
            ApiError::AccessRefused | ApiError::VersionIncompatible(_) => StatusClass::Forbidden,
            ApiError::MalformedRequest(_) => StatusClass::BadRequest,
            ApiError::GenerationFailed(_) => StatusClass::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::AccessRefused.status(), StatusClass::Forbidden);
        assert_eq!(
            ApiError::MalformedRequest(ValidationError::EmptyNamespace).status(),
            StatusClass::BadRequest
        );
        assert_eq!(
            ApiError::VersionIncompatible("conflict".to_string()).status(),
            StatusClass::Forbidden
        );
        assert_eq!(
            ApiError::GenerationFailed(GenerationError::Pipeline("boom".to_string())).status(),
            StatusClass::Internal
        );
    }

    #[test]
    fn test_refusal_message_is_generic() {
        // Same message whatever the internal reason; probes learn nothing.
        assert_eq!(
            ApiError::AccessRefused.to_string(),
            "API server does not want to talk to you."
        );
    }
}
