use super::{dotnet, go, java, javascript, php, python, ruby, rust, Detector};
use crate::language::LanguageId;
use std::collections::HashMap;
use std::sync::Arc;

/// Detectors indexed by the languages they declare, in registration order.
pub struct DetectorRegistry {
    by_language: HashMap<LanguageId, Vec<Arc<dyn Detector>>>,
    count: usize,
}

impl DetectorRegistry {
    pub fn new() -> Self {
        Self {
            by_language: HashMap::new(),
            count: 0,
        }
    }

    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        let defaults = java::detectors()
            .into_iter()
            .chain(javascript::detectors())
            .chain(python::detectors())
            .chain(go::detectors())
            .chain(rust::detectors())
            .chain(ruby::detectors())
            .chain(php::detectors())
            .chain(dotnet::detectors());

        for detector in defaults {
            registry.register(detector);
        }
        registry
    }

    pub fn register(&mut self, detector: Arc<dyn Detector>) {
        for language in detector.languages() {
            self.by_language
                .entry(language.clone())
                .or_default()
                .push(Arc::clone(&detector));
        }
        self.count += 1;
    }

    pub fn for_language(&self, language: &LanguageId) -> &[Arc<dyn Detector>] {
        self.by_language
            .get(language)
            .map(|d| d.as_slice())
            .unwrap_or(&[])
    }

    /// Number of registered detectors
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl Default for DetectorRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
