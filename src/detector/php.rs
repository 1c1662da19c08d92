use super::{
    Detector, DependencyDetector, DependencyPattern, ManifestKind, ManifestToolDetector,
};
use crate::language::LanguageId;
use std::sync::Arc;

pub fn detectors() -> Vec<Arc<dyn Detector>> {
    vec![
        Arc::new(ManifestToolDetector::new("Composer", vec![LanguageId::PHP], &["composer.json"])),
        Arc::new(DependencyDetector::new(
            "Laravel",
            vec![LanguageId::PHP],
            &[ManifestKind::Composer],
            vec![DependencyPattern::Exact("laravel/framework")],
        )),
        Arc::new(DependencyDetector::new(
            "Symfony",
            vec![LanguageId::PHP],
            &[ManifestKind::Composer],
            vec![DependencyPattern::Regex(
                r"^symfony/(framework-bundle|http-kernel|symfony)$",
            )],
        )),
    ]
}
