//! Structural rules for request payloads

use crate::api::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;

// Dot-separated identifiers, each starting with a letter or underscore.
static NAMESPACE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)*$")
        .expect("namespace pattern is valid")
});

/// Validates a target namespace identifier.
pub fn validate_namespace(namespace: &str) -> Result<(), ValidationError> {
    if namespace.is_empty() {
        return Err(ValidationError::EmptyNamespace);
    }

    if !NAMESPACE_RE.is_match(namespace) {
        return Err(ValidationError::InvalidNamespace(namespace.to_string()));
    }

    Ok(())
}
