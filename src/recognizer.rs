//! Entry points tying the scanner, aggregator and selector together

use crate::aggregator::{LanguageAggregator, MinimumUsage, SignificancePolicy};
use crate::config::RecognizerConfig;
use crate::detector::DetectorRegistry;
use crate::devfile::{select_devfile_type, DevFileType};
use crate::error::RecognizerError;
use crate::fs::RealFileSystem;
use crate::language::{Language, LanguageRegistry};
use crate::scanner::LanguageScanner;
use std::path::Path;
use tracing::info;

/// Project analysis and devfile selection with explicitly supplied registries.
///
/// ```no_run
/// use devfile_recognizer::{DevFileType, Recognizer};
/// use std::path::Path;
///
/// let catalog = vec![
///     DevFileType::new("java-maven", "java", "java").with_tags(["Java", "Maven"]),
/// ];
/// let recognizer = Recognizer::new();
/// let devfile = recognizer.select_devfile_from_types(Path::new("."), &catalog)?;
/// println!("{}", devfile.name);
/// # Ok::<(), devfile_recognizer::RecognizerError>(())
/// ```
pub struct Recognizer {
    languages: LanguageRegistry,
    detectors: DetectorRegistry,
    policy: Box<dyn SignificancePolicy>,
    config: RecognizerConfig,
    fs: RealFileSystem,
}

impl Recognizer {
    pub fn new() -> Self {
        Self::with_config(RecognizerConfig::default())
    }

    pub fn with_config(config: RecognizerConfig) -> Self {
        Self {
            languages: LanguageRegistry::with_defaults(),
            detectors: DetectorRegistry::with_defaults(),
            policy: Box::new(MinimumUsage(config.min_detection_usage)),
            config,
            fs: RealFileSystem::new(),
        }
    }

    pub fn with_languages(mut self, languages: LanguageRegistry) -> Self {
        self.languages = languages;
        self
    }

    pub fn with_detectors(mut self, detectors: DetectorRegistry) -> Self {
        self.detectors = detectors;
        self
    }

    pub fn with_policy(mut self, policy: impl SignificancePolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    pub fn config(&self) -> &RecognizerConfig {
        &self.config
    }

    /// Languages used by the project at `path`, most used first.
    ///
    /// # Errors
    ///
    /// - Path errors when `path` is missing, not a directory or unreadable
    /// - `NoLanguageDetected` when no file could be attributed to a language
    pub fn analyze(&self, path: &Path) -> Result<Vec<Language>, RecognizerError> {
        let scanner = LanguageScanner::new(path, &self.languages, &self.fs, &self.config)?;
        let scan = scanner.scan();

        let aggregator = LanguageAggregator::new(
            &self.languages,
            &self.detectors,
            self.policy.as_ref(),
            &self.fs,
        );
        let languages = aggregator.aggregate(scanner.root(), &scan);

        if languages.is_empty() {
            return Err(RecognizerError::NoLanguageDetected);
        }

        info!(
            path = %path.display(),
            primary = %languages[0].name,
            languages = languages.len(),
            "Project analyzed"
        );
        Ok(languages)
    }

    /// Analyzes `path` and picks the best catalog entry for it.
    pub fn select_devfile_from_types(
        &self,
        path: &Path,
        devfile_types: &[DevFileType],
    ) -> Result<DevFileType, RecognizerError> {
        let languages = self.analyze(path)?;
        self.select_devfile_using_languages_from_types(&languages, devfile_types)
    }

    /// Picks the best catalog entry for languages analyzed earlier.
    pub fn select_devfile_using_languages_from_types(
        &self,
        languages: &[Language],
        devfile_types: &[DevFileType],
    ) -> Result<DevFileType, RecognizerError> {
        select_devfile_type(languages, devfile_types)
    }
}

impl Default for Recognizer {
    fn default() -> Self {
        Self::new()
    }
}

/// [`Recognizer::analyze`] with default registries and configuration.
pub fn analyze(path: &Path) -> Result<Vec<Language>, RecognizerError> {
    Recognizer::default().analyze(path)
}

/// [`Recognizer::select_devfile_from_types`] with default registries and configuration.
pub fn select_devfile_from_types(
    path: &Path,
    devfile_types: &[DevFileType],
) -> Result<DevFileType, RecognizerError> {
    Recognizer::default().select_devfile_from_types(path, devfile_types)
}

pub fn select_devfile_using_languages_from_types(
    languages: &[Language],
    devfile_types: &[DevFileType],
) -> Result<DevFileType, RecognizerError> {
    select_devfile_type(languages, devfile_types)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn catalog() -> Vec<DevFileType> {
        vec![
            DevFileType::new("java-maven", "java", "java").with_tags(["Java", "Maven"]),
            DevFileType::new("python", "python", "python").with_tags(["Python"]),
        ]
    }

    #[test]
    fn test_analyze_missing_path() {
        let result = analyze(Path::new("/definitely/not/here"));
        assert!(matches!(result, Err(RecognizerError::PathNotFound(_))));
    }

    #[test]
    fn test_analyze_empty_directory() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            analyze(dir.path()),
            Err(RecognizerError::NoLanguageDetected)
        ));
        assert!(matches!(
            select_devfile_from_types(dir.path(), &catalog()),
            Err(RecognizerError::NoLanguageDetected)
        ));
    }

    #[test]
    fn test_analyze_only_unclassified_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("README.md"), "# notes").unwrap();
        fs::write(dir.path().join("data.json"), "{}").unwrap();

        assert!(matches!(
            analyze(dir.path()),
            Err(RecognizerError::NoLanguageDetected)
        ));
    }

    #[test]
    fn test_select_maven_project() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("pom.xml"), "<project></project>").unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/App.java"), "class App {}\n").unwrap();

        let selected = select_devfile_from_types(dir.path(), &catalog()).unwrap();
        assert_eq!(selected.name, "java-maven");
    }

    #[test]
    fn test_policy_threshold_from_config() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("main.go"), "package main\n".repeat(100)).unwrap();
        fs::write(dir.path().join("setup.py"), "x = 1\n").unwrap();
        fs::write(dir.path().join("requirements.txt"), "flask\n").unwrap();

        let config = RecognizerConfig {
            min_detection_usage: 10.0,
            ..Default::default()
        };
        let languages = Recognizer::with_config(config).analyze(dir.path()).unwrap();

        let python = languages.iter().find(|l| l.name == "Python").unwrap();
        assert!(python.frameworks.is_empty());
        assert!(python.tools.is_empty());

        let languages = analyze(dir.path()).unwrap();
        let python = languages.iter().find(|l| l.name == "Python").unwrap();
        assert_eq!(python.frameworks, vec!["Flask".to_string()]);
        assert_eq!(python.tools, vec!["pip".to_string()]);
    }

    #[test]
    fn test_custom_detector_registry() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("pom.xml"), "<project></project>").unwrap();
        fs::write(dir.path().join("App.java"), "class App {}\n").unwrap();

        let recognizer = Recognizer::new().with_detectors(DetectorRegistry::new());
        let languages = recognizer.analyze(dir.path()).unwrap();
        assert!(languages[0].tools.is_empty());
    }
}
