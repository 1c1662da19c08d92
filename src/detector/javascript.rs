use super::{
    Detector, DependencyDetector, DependencyPattern, ManifestKind, ManifestToolDetector,
};
use crate::language::LanguageId;
use std::sync::Arc;

fn node_languages() -> Vec<LanguageId> {
    vec![LanguageId::JavaScript, LanguageId::TypeScript]
}

fn framework(name: &'static str, patterns: Vec<DependencyPattern>) -> Arc<dyn Detector> {
    Arc::new(DependencyDetector::new(
        name,
        node_languages(),
        &[ManifestKind::PackageJson],
        patterns,
    ))
}

pub fn detectors() -> Vec<Arc<dyn Detector>> {
    vec![
        Arc::new(
            ManifestToolDetector::new("npm", node_languages(), &["package.json"])
                .unless_present(&["yarn.lock", "pnpm-lock.yaml"]),
        ),
        Arc::new(ManifestToolDetector::new("Yarn", node_languages(), &["yarn.lock"])),
        Arc::new(ManifestToolDetector::new("pnpm", node_languages(), &["pnpm-lock.yaml"])),
        framework("Express", vec![DependencyPattern::Exact("express")]),
        framework("React", vec![DependencyPattern::Exact("react")]),
        framework("Next.js", vec![DependencyPattern::Exact("next")]),
        framework("Angular", vec![DependencyPattern::Exact("@angular/core")]),
        framework("Vue", vec![DependencyPattern::Exact("vue")]),
    ]
}
