use super::{Detector, ManifestToolDetector, SourceMarkerDetector};
use crate::language::LanguageId;
use std::sync::Arc;

fn dotnet_languages() -> Vec<LanguageId> {
    vec![LanguageId::CSharp, LanguageId::FSharp]
}

pub fn detectors() -> Vec<Arc<dyn Detector>> {
    vec![
        Arc::new(ManifestToolDetector::new(
            ".NET",
            dotnet_languages(),
            &["*.csproj", "*.fsproj", "*.sln"],
        )),
        Arc::new(SourceMarkerDetector::new(
            "ASP.NET Core",
            dotnet_languages(),
            &["*.csproj", "*.fsproj"],
            "Microsoft.NET.Sdk.Web",
        )),
    ]
}

#[cfg(test)]
mod tests {
    use crate::detector::test_support::detected_names;
    use crate::language::LanguageId;

    #[test]
    fn test_web_project() {
        let csproj = r#"<Project Sdk="Microsoft.NET.Sdk.Web"></Project>"#;
        let names = detected_names(LanguageId::CSharp, &[("src/Api/Api.csproj", csproj)]);
        assert_eq!(names, vec![".NET", "ASP.NET Core"]);
    }

    #[test]
    fn test_console_project() {
        let csproj = r#"<Project Sdk="Microsoft.NET.Sdk"></Project>"#;
        let names = detected_names(LanguageId::CSharp, &[("App.csproj", csproj)]);
        assert_eq!(names, vec![".NET"]);
    }
}
