//! Data transfer objects for the models API

use crate::api::{ValidationError, rules};
use crate::generation::SourceFile;
use semver::Version;
use serde::{Deserialize, Serialize};

/// Request to check client/server version compatibility only.
///
/// A missing `client_version` is carried as `None` and left for the
/// compatibility check to reject; it is not a structural defect.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValidateClientVersionRequest {
    pub client_version: Option<Version>,
    pub min_server_version_supporting_client: Option<Version>,
}

impl ValidateClientVersionRequest {
    /// Both fields are strongly typed and optional; there is no further
    /// structural shape to check.
    pub fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Request to generate model source files.
#[derive(Debug, Clone, Deserialize)]
pub struct GetModelsRequest {
    pub namespace: String,
    pub files: Vec<SourceFile>,
    pub client_version: Option<Version>,
    pub min_server_version_supporting_client: Option<Version>,
}

impl GetModelsRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        rules::validate_namespace(&self.namespace)?;

        if self.files.is_empty() {
            return Err(ValidationError::EmptyFileList);
        }

        if self.files.iter().any(|f| f.name.trim().is_empty()) {
            return Err(ValidationError::EmptyFileIdentifier);
        }

        Ok(())
    }
}

/// Response carrying the running server's API version.
#[derive(Debug, Clone, Serialize)]
pub struct ServerVersionResponse {
    pub version: Version,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> GetModelsRequest {
        GetModelsRequest {
            namespace: "My.Models".to_string(),
            files: vec![SourceFile::new("Page", "// existing")],
            client_version: Some(Version::parse("9.0.5").unwrap()),
            min_server_version_supporting_client: None,
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_empty_namespace_is_rejected() {
        let mut request = valid_request();
        request.namespace = "".to_string();
        assert_eq!(
            request.validate().unwrap_err(),
            ValidationError::EmptyNamespace
        );
    }

    #[test]
    fn test_empty_file_list_is_rejected_independent_of_versions() {
        let mut request = valid_request();
        request.files.clear();
        request.client_version = None;
        assert_eq!(
            request.validate().unwrap_err(),
            ValidationError::EmptyFileList
        );
    }

    #[test]
    fn test_blank_file_identifier_is_rejected() {
        let mut request = valid_request();
        request.files.push(SourceFile::new("  ", "// content"));
        assert_eq!(
            request.validate().unwrap_err(),
            ValidationError::EmptyFileIdentifier
        );
    }

    #[test]
    fn test_validation_short_circuits_on_first_failure() {
        let request = GetModelsRequest {
            namespace: "".to_string(),
            files: vec![],
            client_version: None,
            min_server_version_supporting_client: None,
        };
        // Namespace is checked before the file list.
        assert_eq!(
            request.validate().unwrap_err(),
            ValidationError::EmptyNamespace
        );
    }

    #[test]
    fn test_get_models_request_deserializes_from_json() {
        let request: GetModelsRequest = serde_json::from_value(serde_json::json!({
            "namespace": "My.Models",
            "files": [{ "name": "Page", "content": "// existing" }],
            "client_version": "9.0.5"
        }))
        .unwrap();

        assert_eq!(request.namespace, "My.Models");
        assert_eq!(
            request.client_version,
            Some(Version::parse("9.0.5").unwrap())
        );
        // Absent means absent, never "latest".
        assert!(request.min_server_version_supporting_client.is_none());
    }

    #[test]
    fn test_version_request_accepts_missing_fields() {
        let request: ValidateClientVersionRequest = serde_json::from_value(serde_json::json!({}))
            .unwrap();
        assert!(request.client_version.is_none());
        assert!(request.validate().is_ok());
    }
}
