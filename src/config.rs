//! Recognizer configuration
//!
//! Settings are built from defaults and may be overridden by environment variables:
//!
//! - `RECOGNIZER_MAX_DEPTH`: maximum directory depth walked - default: 32
//! - `RECOGNIZER_MAX_FILES`: maximum number of files classified - default: 100000
//! - `RECOGNIZER_MIN_DETECTION_USAGE`: usage percentage below which framework and
//!   tool detectors are skipped for a language - default: 0.0
//! - `RECOGNIZER_EXCLUDED_DIRS`: comma separated directory names that replace the
//!   default exclusion list
//! - `RECOGNIZER_LOG_LEVEL`: logging level used by the binary - default: "warn"

use std::env;
use thiserror::Error;

const DEFAULT_MAX_DEPTH: usize = 32;
const DEFAULT_MAX_FILES: usize = 100_000;
const DEFAULT_MIN_DETECTION_USAGE: f64 = 0.0;
const DEFAULT_LOG_LEVEL: &str = "warn";

pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[
    ".git",
    ".hg",
    ".svn",
    "node_modules",
    "vendor",
    "target",
    "__pycache__",
    ".venv",
    "venv",
    ".idea",
    ".vscode",
    ".gradle",
    ".mvn",
];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),

    #[error("Failed to parse {field}: {error}")]
    ParseError { field: String, error: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecognizerConfig {
    pub max_depth: usize,
    pub max_files: usize,
    pub min_detection_usage: f64,
    pub excluded_dirs: Vec<String>,
    pub log_level: String,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_files: DEFAULT_MAX_FILES,
            min_detection_usage: DEFAULT_MIN_DETECTION_USAGE,
            excluded_dirs: DEFAULT_EXCLUDED_DIRS.iter().map(|d| d.to_string()).collect(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl RecognizerConfig {
    /// Defaults overridden by any `RECOGNIZER_*` variables that are set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` when a variable is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(v) = parse_var::<usize>("RECOGNIZER_MAX_DEPTH")? {
            config.max_depth = v;
        }
        if let Some(v) = parse_var::<usize>("RECOGNIZER_MAX_FILES")? {
            config.max_files = v;
        }
        if let Some(v) = parse_var::<f64>("RECOGNIZER_MIN_DETECTION_USAGE")? {
            config.min_detection_usage = v;
        }
        if let Ok(dirs) = env::var("RECOGNIZER_EXCLUDED_DIRS") {
            config.excluded_dirs = dirs
                .split(',')
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(String::from)
                .collect();
        }
        if let Ok(level) = env::var("RECOGNIZER_LOG_LEVEL") {
            config.log_level = level.to_lowercase();
        }

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::ValidationFailed(
                "Max depth must be at least 1".to_string(),
            ));
        }
        if self.max_files == 0 {
            return Err(ConfigError::ValidationFailed(
                "Max files must be at least 1".to_string(),
            ));
        }
        if !(0.0..=100.0).contains(&self.min_detection_usage) {
            return Err(ConfigError::ValidationFailed(format!(
                "Minimum detection usage must be between 0 and 100, got {}",
                self.min_detection_usage
            )));
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        Ok(())
    }

    pub fn with_excluded_dirs<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_dirs = dirs.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.excluded_dirs.iter().any(|d| d == name)
    }
}

fn parse_var<T>(name: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::ParseError {
                field: name.to_string(),
                error: e.to_string(),
            }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "RECOGNIZER_MAX_DEPTH",
        "RECOGNIZER_MAX_FILES",
        "RECOGNIZER_MIN_DETECTION_USAGE",
        "RECOGNIZER_EXCLUDED_DIRS",
        "RECOGNIZER_LOG_LEVEL",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_default_config() {
        let config = RecognizerConfig::default();
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(config.max_files, DEFAULT_MAX_FILES);
        assert_eq!(config.min_detection_usage, 0.0);
        assert!(config.is_excluded_dir(".git"));
        assert!(config.is_excluded_dir("node_modules"));
        assert!(!config.is_excluded_dir("src"));
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        env::set_var("RECOGNIZER_MAX_DEPTH", "4");
        env::set_var("RECOGNIZER_MIN_DETECTION_USAGE", "2.5");
        env::set_var("RECOGNIZER_EXCLUDED_DIRS", "dist, .git ,,");
        env::set_var("RECOGNIZER_LOG_LEVEL", "DEBUG");

        let config = RecognizerConfig::from_env().unwrap();
        assert_eq!(config.max_depth, 4);
        assert_eq!(config.min_detection_usage, 2.5);
        assert_eq!(config.excluded_dirs, vec!["dist".to_string(), ".git".to_string()]);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.max_files, DEFAULT_MAX_FILES);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_malformed_number() {
        clear_env();
        env::set_var("RECOGNIZER_MAX_FILES", "lots");

        let result = RecognizerConfig::from_env();
        match result {
            Err(ConfigError::ParseError { field, .. }) => {
                assert_eq!(field, "RECOGNIZER_MAX_FILES")
            }
            other => panic!("Expected ParseError, got {:?}", other),
        }

        clear_env();
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = RecognizerConfig {
            max_depth: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = RecognizerConfig {
            min_detection_usage: 150.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = RecognizerConfig {
            log_level: "verbose".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_with_excluded_dirs() {
        let config = RecognizerConfig::default().with_excluded_dirs(["generated"]);
        assert!(config.is_excluded_dir("generated"));
        assert!(!config.is_excluded_dir(".git"));
    }
}
