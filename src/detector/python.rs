use super::{
    Detector, DependencyDetector, DependencyPattern, ManifestKind, ManifestToolDetector,
    SourceMarkerDetector,
};
use crate::language::LanguageId;
use std::sync::Arc;

const PYTHON_MANIFESTS: &[ManifestKind] = &[
    ManifestKind::Requirements,
    ManifestKind::Pipfile,
    ManifestKind::Pyproject,
];

fn framework(name: &'static str, package: &'static str) -> Arc<dyn Detector> {
    Arc::new(DependencyDetector::new(
        name,
        vec![LanguageId::Python],
        PYTHON_MANIFESTS,
        vec![DependencyPattern::Exact(package)],
    ))
}

pub fn detectors() -> Vec<Arc<dyn Detector>> {
    vec![
        Arc::new(ManifestToolDetector::new(
            "pip",
            vec![LanguageId::Python],
            &["requirements.txt", "requirements-dev.txt", "setup.py"],
        )),
        Arc::new(
            ManifestToolDetector::new("Poetry", vec![LanguageId::Python], &["pyproject.toml"])
                .with_marker("[tool.poetry"),
        ),
        Arc::new(ManifestToolDetector::new("Pipenv", vec![LanguageId::Python], &["Pipfile"])),
        framework("Django", "django"),
        Arc::new(SourceMarkerDetector::new(
            "Django",
            vec![LanguageId::Python],
            &["manage.py"],
            "django",
        )),
        framework("Flask", "flask"),
        framework("FastAPI", "fastapi"),
    ]
}
