//! Framework and tool detectors
//!
//! A detector is a pure predicate over a scanned project: it decides whether one
//! framework (Quarkus, Django, Express, ...) or one build/package tool (Maven,
//! pip, npm, ...) is present for the language it targets. Detectors never
//! mutate the project and may be invoked in any order; the aggregator only
//! keeps the set of names whose predicate returned `true`.
//!
//! Most detectors are table-driven:
//! - [`ManifestToolDetector`] reports a tool when one of its manifest files exists
//!   (optionally containing a marker string).
//! - [`DependencyDetector`] parses manifests and reports a framework when a
//!   declared dependency matches one of its [`DependencyPattern`]s.
//! - [`SourceMarkerDetector`] reports a framework from a marker inside a
//!   conventional source file (e.g. Django's `manage.py`).

mod dotnet;
mod go;
mod java;
mod javascript;
pub mod manifest;
mod php;
mod python;
mod registry;
mod ruby;
mod rust;

pub use manifest::ManifestKind;
pub use registry::DetectorRegistry;

use crate::fs::FileSystem;
use crate::language::LanguageId;
use anyhow::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectorKind {
    Framework,
    Tool,
}

/// Everything a detector may look at.
pub struct DetectionContext<'a> {
    pub root: &'a Path,
    pub language: &'a LanguageId,
    /// Files visited by the scan, relative to `root`, sorted
    pub files: &'a [PathBuf],
    pub fs: &'a dyn FileSystem,
}

impl<'a> DetectionContext<'a> {
    /// Files whose name matches `pattern` (`"pom.xml"` or `"*.csproj"`), shallowest first.
    pub fn files_named(&self, pattern: &str) -> Vec<&'a Path> {
        let mut matches: Vec<&'a Path> = self
            .files
            .iter()
            .filter(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .map(|n| file_name_matches(pattern, n))
                    .unwrap_or(false)
            })
            .map(|p| p.as_path())
            .collect();
        matches.sort_by_key(|p| p.components().count());
        matches
    }

    pub fn has_file(&self, pattern: &str) -> bool {
        !self.files_named(pattern).is_empty()
    }

    pub fn read(&self, rel_path: &Path) -> Result<String> {
        self.fs.read_to_string(&self.root.join(rel_path))
    }
}

pub trait Detector: Send + Sync {
    /// Framework or tool name reported on a match (e.g. "Quarkus", "Maven")
    fn name(&self) -> &str;

    fn kind(&self) -> DetectorKind;

    fn languages(&self) -> &[LanguageId];

    fn detect(&self, ctx: &DetectionContext<'_>) -> Result<bool>;
}

fn file_name_matches(pattern: &str, file_name: &str) -> bool {
    match pattern.strip_prefix('*') {
        Some(suffix) => file_name.ends_with(suffix) && file_name.len() > suffix.len(),
        None => pattern == file_name,
    }
}

/// Reports a tool when any of its manifests is present.
pub struct ManifestToolDetector {
    name: &'static str,
    languages: Vec<LanguageId>,
    manifests: &'static [&'static str],
    marker: Option<&'static str>,
    superseded_by: &'static [&'static str],
}

impl ManifestToolDetector {
    pub fn new(
        name: &'static str,
        languages: Vec<LanguageId>,
        manifests: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            languages,
            manifests,
            marker: None,
            superseded_by: &[],
        }
    }

    /// Requires the manifest to contain `marker` (e.g. `[tool.poetry]`)
    pub fn with_marker(mut self, marker: &'static str) -> Self {
        self.marker = Some(marker);
        self
    }

    /// Stays silent when any of `files` exists, e.g. npm next to `yarn.lock`
    pub fn unless_present(mut self, files: &'static [&'static str]) -> Self {
        self.superseded_by = files;
        self
    }
}

impl Detector for ManifestToolDetector {
    fn name(&self) -> &str {
        self.name
    }

    fn kind(&self) -> DetectorKind {
        DetectorKind::Tool
    }

    fn languages(&self) -> &[LanguageId] {
        &self.languages
    }

    fn detect(&self, ctx: &DetectionContext<'_>) -> Result<bool> {
        if self.superseded_by.iter().any(|file| ctx.has_file(file)) {
            return Ok(false);
        }

        for manifest in self.manifests {
            for path in ctx.files_named(manifest) {
                let Some(marker) = self.marker else {
                    return Ok(true);
                };
                if ctx.read(path)?.contains(marker) {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }
}

/// Matching rule applied to dependency coordinates extracted from manifests.
#[derive(Debug, Clone)]
pub enum DependencyPattern {
    Exact(&'static str),
    Prefix(&'static str),
    Regex(&'static str),
}

impl DependencyPattern {
    pub fn matches(&self, dependency: &str) -> bool {
        match self {
            DependencyPattern::Exact(name) => dependency == *name,
            DependencyPattern::Prefix(prefix) => dependency.starts_with(prefix),
            DependencyPattern::Regex(pattern) => Regex::new(pattern)
                .map(|re| re.is_match(dependency))
                .unwrap_or(false),
        }
    }
}

/// Reports a framework when a manifest declares a matching dependency.
///
/// Every manifest of the accepted kinds is inspected. A manifest that fails to
/// parse does not hide a match found in another one; the parse error is only
/// returned when nothing matched.
pub struct DependencyDetector {
    name: &'static str,
    languages: Vec<LanguageId>,
    manifests: &'static [ManifestKind],
    patterns: Vec<DependencyPattern>,
}

impl DependencyDetector {
    pub fn new(
        name: &'static str,
        languages: Vec<LanguageId>,
        manifests: &'static [ManifestKind],
        patterns: Vec<DependencyPattern>,
    ) -> Self {
        Self {
            name,
            languages,
            manifests,
            patterns,
        }
    }
}

impl Detector for DependencyDetector {
    fn name(&self) -> &str {
        self.name
    }

    fn kind(&self) -> DetectorKind {
        DetectorKind::Framework
    }

    fn languages(&self) -> &[LanguageId] {
        &self.languages
    }

    fn detect(&self, ctx: &DetectionContext<'_>) -> Result<bool> {
        let mut first_error = None;

        for path in ctx.files {
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let Some(kind) = self.manifests.iter().find(|k| k.matches(file_name)) else {
                continue;
            };

            let parsed = ctx
                .read(path)
                .and_then(|content| kind.parse_dependencies(&content));
            match parsed {
                Ok(dependencies) => {
                    if dependencies
                        .iter()
                        .any(|dep| self.patterns.iter().any(|p| p.matches(dep)))
                    {
                        return Ok(true);
                    }
                }
                Err(err) => {
                    if first_error.is_none() {
                        first_error = Some(err.context(format!("{}", path.display())));
                    }
                }
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(false),
        }
    }
}

/// Reports a framework when a conventional source file contains a marker.
pub struct SourceMarkerDetector {
    name: &'static str,
    languages: Vec<LanguageId>,
    file_names: &'static [&'static str],
    marker: &'static str,
}

impl SourceMarkerDetector {
    pub fn new(
        name: &'static str,
        languages: Vec<LanguageId>,
        file_names: &'static [&'static str],
        marker: &'static str,
    ) -> Self {
        Self {
            name,
            languages,
            file_names,
            marker,
        }
    }
}

impl Detector for SourceMarkerDetector {
    fn name(&self) -> &str {
        self.name
    }

    fn kind(&self) -> DetectorKind {
        DetectorKind::Framework
    }

    fn languages(&self) -> &[LanguageId] {
        &self.languages
    }

    fn detect(&self, ctx: &DetectionContext<'_>) -> Result<bool> {
        for file_name in self.file_names {
            for path in ctx.files_named(file_name) {
                if ctx.read(path)?.contains(self.marker) {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }
}
