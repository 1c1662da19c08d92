use super::{
    Detector, DependencyDetector, DependencyPattern, ManifestKind, ManifestToolDetector,
};
use crate::language::LanguageId;
use std::sync::Arc;

fn framework(name: &'static str, gem: &'static str) -> Arc<dyn Detector> {
    Arc::new(DependencyDetector::new(
        name,
        vec![LanguageId::Ruby],
        &[ManifestKind::Gemfile],
        vec![DependencyPattern::Exact(gem)],
    ))
}

pub fn detectors() -> Vec<Arc<dyn Detector>> {
    vec![
        Arc::new(ManifestToolDetector::new("Bundler", vec![LanguageId::Ruby], &["Gemfile"])),
        framework("Rails", "rails"),
        framework("Sinatra", "sinatra"),
    ]
}

#[cfg(test)]
mod tests {
    use crate::detector::test_support::detected_names;
    use crate::language::LanguageId;

    #[test]
    fn test_rails_gemfile() {
        let gemfile = "source 'https://rubygems.org'\ngem 'rails', '~> 7.1'\n";
        let names = detected_names(LanguageId::Ruby, &[("Gemfile", gemfile)]);
        assert_eq!(names, vec!["Bundler", "Rails"]);
    }
}
