use super::{
    Detector, DependencyDetector, DependencyPattern, ManifestKind, ManifestToolDetector,
};
use crate::language::LanguageId;
use std::sync::Arc;

fn framework(name: &'static str, patterns: Vec<DependencyPattern>) -> Arc<dyn Detector> {
    Arc::new(DependencyDetector::new(
        name,
        vec![LanguageId::Go],
        &[ManifestKind::GoMod],
        patterns,
    ))
}

pub fn detectors() -> Vec<Arc<dyn Detector>> {
    vec![
        Arc::new(ManifestToolDetector::new("Go Modules", vec![LanguageId::Go], &["go.mod"])),
        framework("Gin", vec![DependencyPattern::Exact("github.com/gin-gonic/gin")]),
        framework("Echo", vec![DependencyPattern::Prefix("github.com/labstack/echo")]),
        framework("Fiber", vec![DependencyPattern::Prefix("github.com/gofiber/fiber")]),
        framework(
            "Beego",
            vec![
                DependencyPattern::Prefix("github.com/beego/beego"),
                DependencyPattern::Prefix("github.com/astaxie/beego"),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use crate::detector::test_support::detected_names;
    use crate::language::LanguageId;

    #[test]
    fn test_gin_module() {
        let go_mod = "module example.com/app\n\ngo 1.21\n\nrequire github.com/gin-gonic/gin v1.9.1\n";
        let names = detected_names(LanguageId::Go, &[("go.mod", go_mod)]);
        assert_eq!(names, vec!["Go Modules", "Gin"]);
    }

    #[test]
    fn test_versioned_module_paths() {
        let go_mod = "module x\n\nrequire (\n\tgithub.com/gofiber/fiber/v2 v2.52.0\n\tgithub.com/beego/beego/v2 v2.1.0\n)\n";
        let names = detected_names(LanguageId::Go, &[("go.mod", go_mod)]);
        assert_eq!(names, vec!["Go Modules", "Fiber", "Beego"]);
    }
}
