//! Core types for the generation domain

use serde::{Deserialize, Serialize};

/// A named source file - either client-supplied existing source sent along
/// with a request, or a generated model file in a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    pub name: String,
    pub content: String,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Result of a generation run: the generated model files and the namespace
/// they were generated under. All-or-nothing, no partial-success state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedModels {
    pub namespace: String,
    pub files: Vec<SourceFile>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_models_wire_shape() {
        let models = GeneratedModels {
            namespace: "My.Models".to_string(),
            files: vec![SourceFile::new("Page", "pub struct Page;")],
        };

        let json = serde_json::to_value(&models).unwrap();
        assert_eq!(json["namespace"], "My.Models");
        assert_eq!(json["files"][0]["name"], "Page");

        let back: GeneratedModels = serde_json::from_value(json).unwrap();
        assert_eq!(back, models);
    }
}
