use super::{
    Detector, DependencyDetector, DependencyPattern, ManifestKind, ManifestToolDetector,
};
use crate::language::LanguageId;
use std::sync::Arc;

const BUILD_MANIFESTS: &[ManifestKind] = &[ManifestKind::Maven, ManifestKind::Gradle];

fn jvm_languages() -> Vec<LanguageId> {
    vec![LanguageId::Java, LanguageId::Kotlin, LanguageId::Groovy, LanguageId::Scala]
}

fn framework(name: &'static str, group_prefixes: &[&'static str]) -> Arc<dyn Detector> {
    Arc::new(DependencyDetector::new(
        name,
        jvm_languages(),
        BUILD_MANIFESTS,
        group_prefixes
            .iter()
            .map(|p| DependencyPattern::Prefix(p))
            .collect(),
    ))
}

pub fn detectors() -> Vec<Arc<dyn Detector>> {
    vec![
        Arc::new(ManifestToolDetector::new("Maven", jvm_languages(), &["pom.xml"])),
        Arc::new(ManifestToolDetector::new(
            "Gradle",
            jvm_languages(),
            &["build.gradle", "build.gradle.kts", "settings.gradle", "settings.gradle.kts"],
        )),
        framework("Quarkus", &["io.quarkus"]),
        framework("Micronaut", &["io.micronaut"]),
        framework("Spring", &["org.springframework"]),
        framework("Vert.x", &["io.vertx"]),
        framework("Wildfly", &["org.wildfly", "org.jboss.eap"]),
    ]
}
