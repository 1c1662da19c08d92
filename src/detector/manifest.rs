//! Dependency extraction from package manifests
//!
//! Each [`ManifestKind`] knows which file names it owns and how to turn the
//! file content into a flat list of dependency coordinates. Coordinates are
//! ecosystem native: `group:artifact` for Maven and Gradle, package names for
//! npm, Composer, Cargo and Bundler, module paths for Go, lowercase project
//! names for Python.

use anyhow::{anyhow, Context, Result};
use regex::Regex;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManifestKind {
    Maven,
    Gradle,
    PackageJson,
    Requirements,
    Pipfile,
    Pyproject,
    GoMod,
    Cargo,
    Gemfile,
    Composer,
}

impl ManifestKind {
    pub fn matches(&self, file_name: &str) -> bool {
        match self {
            ManifestKind::Maven => file_name == "pom.xml",
            ManifestKind::Gradle => file_name == "build.gradle" || file_name == "build.gradle.kts",
            ManifestKind::PackageJson => file_name == "package.json",
            ManifestKind::Requirements => {
                file_name.starts_with("requirements") && file_name.ends_with(".txt")
            }
            ManifestKind::Pipfile => file_name == "Pipfile",
            ManifestKind::Pyproject => file_name == "pyproject.toml",
            ManifestKind::GoMod => file_name == "go.mod",
            ManifestKind::Cargo => file_name == "Cargo.toml",
            ManifestKind::Gemfile => file_name == "Gemfile",
            ManifestKind::Composer => file_name == "composer.json",
        }
    }

    /// Declared dependencies in declaration order, without duplicates.
    ///
    /// # Errors
    ///
    /// Fails when a structured manifest (XML, JSON, TOML) is malformed.
    pub fn parse_dependencies(&self, content: &str) -> Result<Vec<String>> {
        let raw = match self {
            ManifestKind::Maven => parse_pom(content)?,
            ManifestKind::Gradle => parse_gradle(content),
            ManifestKind::PackageJson => {
                parse_json_keys(content, &["dependencies", "devDependencies", "peerDependencies"])?
            }
            ManifestKind::Composer => parse_json_keys(content, &["require", "require-dev"])?,
            ManifestKind::Requirements => parse_requirements(content),
            ManifestKind::Pipfile => parse_toml_tables(content, &[&["packages"], &["dev-packages"]])?
                .into_iter()
                .map(|name| normalize_python_name(&name))
                .collect(),
            ManifestKind::Pyproject => parse_pyproject(content)?,
            ManifestKind::GoMod => parse_go_mod(content),
            ManifestKind::Cargo => parse_toml_tables(
                content,
                &[
                    &["dependencies"],
                    &["dev-dependencies"],
                    &["workspace", "dependencies"],
                ],
            )?,
            ManifestKind::Gemfile => parse_gemfile(content),
        };

        let mut seen = HashSet::new();
        Ok(raw.into_iter().filter(|d| seen.insert(d.clone())).collect())
    }
}

/// `groupId:artifactId` of every `<dependency>`, `<plugin>` and `<parent>`.
fn parse_pom(content: &str) -> Result<Vec<String>> {
    let doc = roxmltree::Document::parse(content).context("Invalid pom.xml")?;

    let mut deps = Vec::new();
    for node in doc.descendants() {
        if !matches!(node.tag_name().name(), "dependency" | "plugin" | "parent") {
            continue;
        }

        let child_text = |tag: &str| {
            node.children()
                .find(|c| c.is_element() && c.tag_name().name() == tag)
                .and_then(|c| c.text())
                .map(str::trim)
                .filter(|t| !t.is_empty())
        };

        match (child_text("groupId"), child_text("artifactId")) {
            (Some(group), Some(artifact)) => deps.push(format!("{}:{}", group, artifact)),
            // Maven plugins default to org.apache.maven.plugins
            (None, Some(artifact)) => deps.push(artifact.to_string()),
            _ => {}
        }
    }

    Ok(deps)
}

/// Dependency coordinates and plugin ids from Groovy or Kotlin DSL build scripts.
fn parse_gradle(content: &str) -> Vec<String> {
    let mut deps = Vec::new();

    if let Ok(re) = Regex::new(
        r#"(?m)^\s*(?:implementation|api|compileOnly|runtimeOnly|annotationProcessor|kapt|testImplementation|testRuntimeOnly|compile|enforcedPlatform|platform)\s*\(?\s*(?:platform\s*\(\s*)?["']([^:"'\s]+):([^:"'\s]+)"#,
    ) {
        for caps in re.captures_iter(content) {
            deps.push(format!("{}:{}", &caps[1], &caps[2]));
        }
    }

    if let Ok(re) = Regex::new(r#"(?m)^\s*id\s*\(?\s*["']([^"']+)["']"#) {
        for caps in re.captures_iter(content) {
            deps.push(caps[1].to_string());
        }
    }

    deps
}

fn parse_json_keys(content: &str, sections: &[&str]) -> Result<Vec<String>> {
    let parsed: serde_json::Value = serde_json::from_str(content).context("Invalid JSON manifest")?;
    if !parsed.is_object() {
        return Err(anyhow!("JSON manifest is not an object"));
    }

    let mut deps = Vec::new();
    for section in sections {
        if let Some(table) = parsed.get(section).and_then(|v| v.as_object()) {
            deps.extend(table.keys().cloned());
        }
    }
    Ok(deps)
}

fn parse_toml_tables(content: &str, paths: &[&[&str]]) -> Result<Vec<String>> {
    let parsed: toml::Value = toml::from_str(content).context("Invalid TOML manifest")?;

    let mut deps = Vec::new();
    for path in paths {
        let mut value = Some(&parsed);
        for key in path.iter() {
            value = value.and_then(|v| v.get(key));
        }
        if let Some(table) = value.and_then(|v| v.as_table()) {
            deps.extend(table.keys().cloned());
        }
    }
    Ok(deps)
}

/// PEP 621 `project.dependencies` plus Poetry dependency tables.
fn parse_pyproject(content: &str) -> Result<Vec<String>> {
    let parsed: toml::Value = toml::from_str(content).context("Invalid pyproject.toml")?;

    let mut deps = Vec::new();
    if let Some(list) = parsed
        .get("project")
        .and_then(|p| p.get("dependencies"))
        .and_then(|d| d.as_array())
    {
        deps.extend(
            list.iter()
                .filter_map(|v| v.as_str())
                .filter_map(requirement_name),
        );
    }

    if let Some(poetry) = parsed.get("tool").and_then(|t| t.get("poetry")) {
        let tables = [
            poetry.get("dependencies"),
            poetry.get("dev-dependencies"),
            poetry
                .get("group")
                .and_then(|g| g.get("dev"))
                .and_then(|d| d.get("dependencies")),
        ];
        for table in tables.into_iter().flatten().filter_map(|t| t.as_table()) {
            deps.extend(
                table
                    .keys()
                    .filter(|k| k.as_str() != "python")
                    .map(|k| normalize_python_name(k)),
            );
        }
    }

    Ok(deps)
}

fn parse_requirements(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.split('#').next().unwrap_or("").trim())
        .filter(|line| !line.is_empty() && !line.starts_with('-'))
        .filter_map(requirement_name)
        .collect()
}

/// Project name of a PEP 508 requirement such as `Django[bcrypt]>=4.2; python_version>"3"`.
fn requirement_name(requirement: &str) -> Option<String> {
    let re = Regex::new(r"^\s*([A-Za-z0-9][A-Za-z0-9._-]*)").ok()?;
    re.captures(requirement)
        .map(|caps| normalize_python_name(&caps[1]))
}

fn normalize_python_name(name: &str) -> String {
    name.to_lowercase().replace('_', "-")
}

/// Module paths from `require` lines, both single-line and block form.
fn parse_go_mod(content: &str) -> Vec<String> {
    let Ok(re) = Regex::new(r"^(?:require\s+)?([^\s()]+)\s+v\d[\w.+-]*") else {
        return Vec::new();
    };

    let mut deps = Vec::new();
    let mut in_require_block = false;
    for line in content.lines() {
        let line = line.split("//").next().unwrap_or("").trim();

        if line.starts_with("require") && line.ends_with('(') {
            in_require_block = true;
            continue;
        }
        if in_require_block && line.starts_with(')') {
            in_require_block = false;
            continue;
        }
        if !in_require_block && !line.starts_with("require") {
            continue;
        }

        if let Some(caps) = re.captures(line) {
            deps.push(caps[1].to_string());
        }
    }
    deps
}

fn parse_gemfile(content: &str) -> Vec<String> {
    let Ok(re) = Regex::new(r#"(?m)^\s*gem\s+["']([^"']+)["']"#) else {
        return Vec::new();
    };
    re.captures_iter(content)
        .map(|caps| caps[1].to_string())
        .collect()
}
