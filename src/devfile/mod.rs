//! Devfile types and best-match selection
//!
//! A catalog is an ordered list of [`DevFileType`] descriptors. Selection picks
//! the single descriptor that best fits the primary language of a project; see
//! [`select_devfile_type`].

mod catalog;
mod selector;

pub use catalog::{load_catalog, parse_catalog, CatalogError, CatalogFormat};
pub use selector::{score_devfile_type, select_devfile_type};

use serde::{Deserialize, Serialize};

/// A named development environment descriptor from a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevFileType {
    pub name: String,
    /// Language identifier the descriptor targets (e.g. "java", "nodejs")
    pub language: String,
    #[serde(default)]
    pub project_type: String,
    /// Identifiers that raise the score when present among the detected facts
    #[serde(default)]
    pub tags: Vec<String>,
}

impl DevFileType {
    pub fn new(
        name: impl Into<String>,
        language: impl Into<String>,
        project_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            language: language.into(),
            project_type: project_type.into(),
            tags: Vec::new(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_round_trip() {
        let devfile = DevFileType::new("java-quarkus", "java", "quarkus").with_tags(["Java", "Quarkus"]);
        let json = serde_json::to_string(&devfile).unwrap();
        assert!(json.contains("\"projectType\":\"quarkus\""));

        let parsed: DevFileType = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, devfile);
    }

    #[test]
    fn test_optional_fields_default() {
        let parsed: DevFileType = serde_json::from_str(r#"{"name": "go", "language": "go"}"#).unwrap();
        assert_eq!(parsed.project_type, "");
        assert!(parsed.tags.is_empty());
    }
}
