use super::{
    Detector, DependencyDetector, DependencyPattern, ManifestKind, ManifestToolDetector,
};
use crate::language::LanguageId;
use std::sync::Arc;

fn framework(name: &'static str, crate_name: &'static str) -> Arc<dyn Detector> {
    Arc::new(DependencyDetector::new(
        name,
        vec![LanguageId::Rust],
        &[ManifestKind::Cargo],
        vec![DependencyPattern::Exact(crate_name)],
    ))
}

pub fn detectors() -> Vec<Arc<dyn Detector>> {
    vec![
        Arc::new(ManifestToolDetector::new("Cargo", vec![LanguageId::Rust], &["Cargo.toml"])),
        framework("Actix", "actix-web"),
        framework("Axum", "axum"),
        framework("Rocket", "rocket"),
    ]
}
