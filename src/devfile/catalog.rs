use super::DevFileType;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML catalog: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported catalog format: {0} (expected .yaml, .yml or .json)")]
    UnsupportedFormat(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Yaml,
    Json,
}

impl CatalogFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => Some(CatalogFormat::Yaml),
            Some("json") => Some(CatalogFormat::Json),
            _ => None,
        }
    }
}

/// Parses a sequence of devfile types, keeping declaration order.
pub fn parse_catalog(content: &str, format: CatalogFormat) -> Result<Vec<DevFileType>, CatalogError> {
    let types = match format {
        CatalogFormat::Yaml => serde_yaml::from_str(content)?,
        CatalogFormat::Json => serde_json::from_str(content)?,
    };
    Ok(types)
}

/// Loads a catalog file, choosing the parser from its extension.
pub fn load_catalog(path: &Path) -> Result<Vec<DevFileType>, CatalogError> {
    let format =
        CatalogFormat::from_path(path).ok_or_else(|| CatalogError::UnsupportedFormat(path.to_path_buf()))?;

    let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let types = parse_catalog(&content, format)?;
    debug!(path = %path.display(), entries = types.len(), "Loaded devfile catalog");
    Ok(types)
}
