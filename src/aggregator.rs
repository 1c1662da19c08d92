//! Turns raw scan sizes into the ranked `Language` list

use crate::detector::{DetectionContext, DetectorKind, DetectorRegistry};
use crate::fs::FileSystem;
use crate::language::{Language, LanguageId, LanguageRegistry};
use crate::scanner::ScanResult;
use std::cmp::Ordering;
use std::path::Path;
use tracing::{debug, warn};

/// Decides whether framework and tool detectors run for a language.
///
/// Languages rejected by the policy are still reported; they only carry no
/// frameworks or tools.
pub trait SignificancePolicy: Send + Sync {
    fn is_significant(&self, language: &Language) -> bool;
}

/// Runs detectors for every language whose usage reaches the threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinimumUsage(pub f64);

impl SignificancePolicy for MinimumUsage {
    fn is_significant(&self, language: &Language) -> bool {
        language.usage_in_percentage >= self.0
    }
}

impl Default for MinimumUsage {
    fn default() -> Self {
        Self(0.0)
    }
}

pub struct LanguageAggregator<'a> {
    languages: &'a LanguageRegistry,
    detectors: &'a DetectorRegistry,
    policy: &'a dyn SignificancePolicy,
    fs: &'a dyn FileSystem,
}

impl<'a> LanguageAggregator<'a> {
    pub fn new(
        languages: &'a LanguageRegistry,
        detectors: &'a DetectorRegistry,
        policy: &'a dyn SignificancePolicy,
        fs: &'a dyn FileSystem,
    ) -> Self {
        Self {
            languages,
            detectors,
            policy,
            fs,
        }
    }

    /// Builds the sorted `Language` list for the project at `root`.
    ///
    /// An empty or unrecognised project yields an empty list.
    pub fn aggregate(&self, root: &Path, scan: &ScanResult) -> Vec<Language> {
        let total = scan.total_size();
        if total == 0 {
            debug!(root = %root.display(), "No measurable source, nothing to aggregate");
            return Vec::new();
        }

        let mut measured: Vec<(LanguageId, Language)> = scan
            .sizes
            .iter()
            .filter(|(_, size)| **size > 0)
            .map(|(id, &size)| {
                let usage = 100.0 * size as f64 / total as f64;
                (id.clone(), self.describe(id, usage))
            })
            .collect();

        measured.sort_by(|(_, a), (_, b)| compare_languages(a, b));

        measured
            .into_iter()
            .map(|(id, mut language)| {
                if self.policy.is_significant(&language) {
                    self.attach_detections(root, scan, &id, &mut language);
                } else {
                    debug!(
                        language = %language.name,
                        usage = language.usage_in_percentage,
                        "Below significance threshold, skipping detectors"
                    );
                }
                language
            })
            .collect()
    }

    fn describe(&self, id: &LanguageId, usage: f64) -> Language {
        match self.languages.get(id) {
            Some(definition) => Language::from_definition(definition, usage),
            None => Language::new(id.name(), usage)
                .with_aliases(id.aliases().iter().copied()),
        }
    }

    fn attach_detections(
        &self,
        root: &Path,
        scan: &ScanResult,
        id: &LanguageId,
        language: &mut Language,
    ) {
        let ctx = DetectionContext {
            root,
            language: id,
            files: &scan.files,
            fs: self.fs,
        };

        for detector in self.detectors.for_language(id) {
            match detector.detect(&ctx) {
                Ok(true) => {
                    let name = detector.name().to_string();
                    let target = match detector.kind() {
                        DetectorKind::Framework => &mut language.frameworks,
                        DetectorKind::Tool => &mut language.tools,
                    };
                    if !target.contains(&name) {
                        target.push(name);
                    }
                }
                Ok(false) => {}
                Err(err) => {
                    warn!(
                        detector = detector.name(),
                        language = %language.name,
                        error = %err,
                        "Detector failed, skipping"
                    );
                }
            }
        }

        debug!(
            language = %language.name,
            frameworks = ?language.frameworks,
            tools = ?language.tools,
            "Detection completed"
        );
    }
}

/// Usage descending, then name ascending.
pub fn compare_languages(a: &Language, b: &Language) -> Ordering {
    b.usage_in_percentage
        .partial_cmp(&a.usage_in_percentage)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.name.cmp(&b.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::Detector;
    use crate::fs::MockFileSystem;
    use anyhow::{anyhow, Result};
    use std::path::PathBuf;
    use std::sync::Arc;

    struct FixedDetector {
        name: &'static str,
        kind: DetectorKind,
        languages: Vec<LanguageId>,
        outcome: fn() -> Result<bool>,
    }

    impl Detector for FixedDetector {
        fn name(&self) -> &str {
            self.name
        }

        fn kind(&self) -> DetectorKind {
            self.kind
        }

        fn languages(&self) -> &[LanguageId] {
            &self.languages
        }

        fn detect(&self, _ctx: &DetectionContext<'_>) -> Result<bool> {
            (self.outcome)()
        }
    }

    fn fixed(
        name: &'static str,
        kind: DetectorKind,
        language: LanguageId,
        outcome: fn() -> Result<bool>,
    ) -> Arc<dyn Detector> {
        Arc::new(FixedDetector {
            name,
            kind,
            languages: vec![language],
            outcome,
        })
    }

    fn scan_of(sizes: &[(LanguageId, u64)]) -> ScanResult {
        ScanResult {
            sizes: sizes.iter().cloned().collect(),
            files: Vec::new(),
        }
    }

    fn aggregate_with(
        detectors: &DetectorRegistry,
        policy: &dyn SignificancePolicy,
        scan: &ScanResult,
    ) -> Vec<Language> {
        let languages = LanguageRegistry::with_defaults();
        let fs = MockFileSystem::new();
        LanguageAggregator::new(&languages, detectors, policy, &fs).aggregate(fs.root(), scan)
    }

    #[test]
    fn test_empty_scan_yields_empty_list() {
        let result = aggregate_with(
            &DetectorRegistry::new(),
            &MinimumUsage::default(),
            &ScanResult::default(),
        );
        assert!(result.is_empty());
    }

    #[test]
    fn test_percentages_and_order() {
        let scan = scan_of(&[
            (LanguageId::Shell, 100),
            (LanguageId::Python, 750),
            (LanguageId::Java, 150),
        ]);
        let result = aggregate_with(&DetectorRegistry::new(), &MinimumUsage::default(), &scan);

        let names: Vec<&str> = result.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Python", "Java", "Shell"]);
        assert!((result[0].usage_in_percentage - 75.0).abs() < 1e-9);
        assert!((result[1].usage_in_percentage - 15.0).abs() < 1e-9);

        let sum: f64 = result.iter().map(|l| l.usage_in_percentage).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_ties_broken_by_name() {
        let scan = scan_of(&[
            (LanguageId::Ruby, 10),
            (LanguageId::Go, 10),
            (LanguageId::C, 10),
        ]);
        let result = aggregate_with(&DetectorRegistry::new(), &MinimumUsage::default(), &scan);

        let names: Vec<&str> = result.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["C", "Go", "Ruby"]);
    }

    #[test]
    fn test_language_metadata_from_definitions() {
        let scan = scan_of(&[(LanguageId::Python, 80), (LanguageId::Shell, 20)]);
        let result = aggregate_with(&DetectorRegistry::new(), &MinimumUsage::default(), &scan);

        assert_eq!(result[0].aliases, vec!["python3".to_string()]);
        assert!(result[0].can_be_component);
        assert!(!result[1].can_be_component);
    }

    #[test]
    fn test_custom_language_without_definition() {
        let scan = scan_of(&[(LanguageId::Custom("Zig".to_string()), 5)]);
        let result = aggregate_with(&DetectorRegistry::new(), &MinimumUsage::default(), &scan);

        assert_eq!(result[0].name, "Zig");
        assert!(!result[0].can_be_component);
        assert!((result[0].usage_in_percentage - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_detector_results_attached_and_deduplicated() {
        let mut detectors = DetectorRegistry::new();
        detectors.register(fixed("Maven", DetectorKind::Tool, LanguageId::Java, || Ok(true)));
        detectors.register(fixed("Quarkus", DetectorKind::Framework, LanguageId::Java, || Ok(true)));
        detectors.register(fixed("Quarkus", DetectorKind::Framework, LanguageId::Java, || Ok(true)));
        detectors.register(fixed("Spring", DetectorKind::Framework, LanguageId::Java, || Ok(false)));
        detectors.register(fixed("npm", DetectorKind::Tool, LanguageId::JavaScript, || Ok(true)));

        let scan = scan_of(&[(LanguageId::Java, 90), (LanguageId::Shell, 10)]);
        let result = aggregate_with(&detectors, &MinimumUsage::default(), &scan);

        assert_eq!(result[0].frameworks, vec!["Quarkus".to_string()]);
        assert_eq!(result[0].tools, vec!["Maven".to_string()]);
        assert!(result[1].frameworks.is_empty());
        assert!(result[1].tools.is_empty());
    }

    #[test]
    fn test_failing_detector_is_isolated() {
        let mut detectors = DetectorRegistry::new();
        detectors.register(fixed("Broken", DetectorKind::Framework, LanguageId::Go, || {
            Err(anyhow!("unreadable manifest"))
        }));
        detectors.register(fixed("Gin", DetectorKind::Framework, LanguageId::Go, || Ok(true)));

        let scan = scan_of(&[(LanguageId::Go, 1)]);
        let result = aggregate_with(&detectors, &MinimumUsage::default(), &scan);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].frameworks, vec!["Gin".to_string()]);
    }

    #[test]
    fn test_insignificant_language_kept_without_detections() {
        let mut detectors = DetectorRegistry::new();
        detectors.register(fixed("pip", DetectorKind::Tool, LanguageId::Python, || Ok(true)));
        detectors.register(fixed("Go Modules", DetectorKind::Tool, LanguageId::Go, || Ok(true)));

        let scan = scan_of(&[(LanguageId::Go, 990), (LanguageId::Python, 10)]);
        let result = aggregate_with(&detectors, &MinimumUsage(5.0), &scan);

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].tools, vec!["Go Modules".to_string()]);
        assert_eq!(result[1].name, "Python");
        assert!(result[1].tools.is_empty());
    }

    #[test]
    fn test_default_detectors_see_scanned_files() {
        let languages = LanguageRegistry::with_defaults();
        let detectors = DetectorRegistry::with_defaults();
        let fs = MockFileSystem::new();
        fs.add_file("go.mod", "module x\n\nrequire github.com/gin-gonic/gin v1.9.1\n");
        fs.add_file("main.go", "package main\n");

        let scan = ScanResult {
            sizes: [(LanguageId::Go, 13)].into_iter().collect(),
            files: vec![PathBuf::from("go.mod"), PathBuf::from("main.go")],
        };
        let policy = MinimumUsage::default();
        let result =
            LanguageAggregator::new(&languages, &detectors, &policy, &fs).aggregate(fs.root(), &scan);

        assert_eq!(result[0].tools, vec!["Go Modules".to_string()]);
        assert_eq!(result[0].frameworks, vec!["Gin".to_string()]);
    }
}
