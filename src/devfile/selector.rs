use super::DevFileType;
use crate::error::RecognizerError;
use crate::language::Language;
use tracing::debug;

/// Number of `devfile` tags found among the language's name, aliases,
/// frameworks and tools, ignoring case.
pub fn score_devfile_type(devfile: &DevFileType, language: &Language) -> usize {
    let identifiers: Vec<String> = language.identifiers().map(str::to_lowercase).collect();
    devfile
        .tags
        .iter()
        .filter(|tag| identifiers.contains(&tag.to_lowercase()))
        .count()
}

/// Picks the catalog entry that best fits the primary language.
///
/// The primary language is the first entry of `languages`, which is expected to
/// be sorted by usage. Candidates are the entries targeting that language by
/// name or alias; the highest score wins and ties go to the earliest entry.
///
/// # Errors
///
/// - `NoLanguageDetected` when `languages` is empty
/// - `NoMatchingDevFileType` when no catalog entry targets the primary language
pub fn select_devfile_type(
    languages: &[Language],
    devfile_types: &[DevFileType],
) -> Result<DevFileType, RecognizerError> {
    let primary = languages.first().ok_or(RecognizerError::NoLanguageDetected)?;

    let mut best: Option<(&DevFileType, usize)> = None;
    for devfile in devfile_types.iter().filter(|d| primary.is_named(&d.language)) {
        let score = score_devfile_type(devfile, primary);
        debug!(devfile = %devfile.name, score, "Scored devfile type");

        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((devfile, score));
        }
    }

    match best {
        Some((devfile, score)) => {
            debug!(
                devfile = %devfile.name,
                score,
                language = %primary.name,
                "Selected devfile type"
            );
            Ok(devfile.clone())
        }
        None => Err(RecognizerError::NoMatchingDevFileType {
            language: primary.name.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    fn catalog() -> Vec<DevFileType> {
        vec![
            DevFileType::new("java", "java", "java"),
            DevFileType::new("java-quarkus", "java", "quarkus").with_tags(["Java", "Quarkus"]),
            DevFileType::new("java-maven", "java", "java").with_tags(["Java", "Maven"]),
            DevFileType::new("java-spring", "java", "spring").with_tags(["Java", "Spring"]),
            DevFileType::new("nodejs", "nodejs", "nodejs").with_tags(["NodeJS", "Express"]),
            DevFileType::new("python-django", "python", "django").with_tags(["Python", "pip"]),
            DevFileType::new("go", "go", "go").with_tags(["go"]),
        ]
    }

    fn java(frameworks: &[&str], tools: &[&str]) -> Language {
        Language::new("Java", 100.0)
            .with_frameworks(frameworks.iter().copied())
            .with_tools(tools.iter().copied())
            .with_component(true)
    }

    #[parameterized(
        quarkus_beats_maven = { &["Quarkus"], &["Maven"], "java-quarkus" },
        unknown_framework_falls_back_to_build_tool = { &["Micronaut"], &["Maven"], "java-maven" },
        spring = { &["Spring"], &[], "java-spring" },
        language_only_picks_earliest_tagged_entry = { &[], &[], "java-quarkus" },
    )]
    fn test_java_selection(frameworks: &[&str], tools: &[&str], expected: &str) {
        let selected = select_devfile_type(&[java(frameworks, tools)], &catalog()).unwrap();
        assert_eq!(selected.name, expected);
    }

    #[test]
    fn test_untagged_entry_wins_when_all_score_zero() {
        let catalog = vec![
            DevFileType::new("java", "java", "java"),
            DevFileType::new("java-quarkus", "java", "quarkus").with_tags(["Quarkus"]),
        ];
        let selected = select_devfile_type(&[java(&[], &["Gradle"])], &catalog).unwrap();
        assert_eq!(selected.name, "java");
    }

    #[test]
    fn test_language_name_participates_in_scoring() {
        let go = Language::new("Go", 100.0).with_aliases(["golang"]);
        let selected = select_devfile_type(&[go], &catalog()).unwrap();
        assert_eq!(selected.name, "go");
    }

    #[test]
    fn test_catalog_language_matched_by_alias() {
        let js = Language::new("JavaScript", 70.0)
            .with_aliases(["js", "node", "nodejs"])
            .with_frameworks(["Express"]);
        let selected = select_devfile_type(&[js], &catalog()).unwrap();
        assert_eq!(selected.name, "nodejs");
    }

    #[test]
    fn test_only_primary_language_is_considered() {
        let languages = vec![
            Language::new("Shell", 60.0).with_aliases(["sh"]),
            Language::new("Python", 40.0).with_tools(["pip"]),
        ];
        let result = select_devfile_type(&languages, &catalog());
        match result {
            Err(RecognizerError::NoMatchingDevFileType { language }) => assert_eq!(language, "Shell"),
            other => panic!("Expected NoMatchingDevFileType, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_languages() {
        let result = select_devfile_type(&[], &catalog());
        assert!(matches!(result, Err(RecognizerError::NoLanguageDetected)));
    }

    #[test]
    fn test_empty_catalog() {
        let result = select_devfile_type(&[java(&[], &[])], &[]);
        assert!(matches!(
            result,
            Err(RecognizerError::NoMatchingDevFileType { .. })
        ));
    }

    #[test]
    fn test_tags_match_case_insensitively() {
        let devfile = DevFileType::new("python-django", "python", "django").with_tags(["PYTHON", "Pip", "django"]);
        let python = Language::new("Python", 90.0)
            .with_frameworks(["Django"])
            .with_tools(["pip"]);
        assert_eq!(score_devfile_type(&devfile, &python), 3);
    }

    #[test]
    fn test_selection_is_repeatable() {
        let languages = vec![java(&["Quarkus"], &["Maven"])];
        let catalog = catalog();
        let first = select_devfile_type(&languages, &catalog).unwrap();
        for _ in 0..5 {
            assert_eq!(select_devfile_type(&languages, &catalog).unwrap(), first);
        }
    }
}
