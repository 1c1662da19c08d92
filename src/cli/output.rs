//! Output formatting for analysis and selection results
//!
//! JSON and YAML reuse the camelCase serde shapes of [`Language`] and
//! [`DevFileType`]; the human format is a compact table.

use anyhow::{Context, Result};

use crate::devfile::DevFileType;
use crate::language::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
    Human,
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format_languages(&self, languages: &[Language]) -> Result<String> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(languages)
                .context("Failed to serialize languages to JSON"),
            OutputFormat::Yaml => {
                serde_yaml::to_string(languages).context("Failed to serialize languages to YAML")
            }
            OutputFormat::Human => Ok(self.format_languages_human(languages)),
        }
    }

    pub fn format_devfile(&self, devfile: &DevFileType) -> Result<String> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(devfile)
                .context("Failed to serialize devfile type to JSON"),
            OutputFormat::Yaml => {
                serde_yaml::to_string(devfile).context("Failed to serialize devfile type to YAML")
            }
            OutputFormat::Human => Ok(self.format_devfile_human(devfile)),
        }
    }

    fn format_languages_human(&self, languages: &[Language]) -> String {
        let mut output = String::new();
        output.push_str("Languages\n");
        output.push_str(&"\u{2501}".repeat(42));
        output.push('\n');

        for language in languages {
            let component = if language.can_be_component {
                ""
            } else {
                " (not a component)"
            };
            output.push_str(&format!(
                "{:<14} {:>6.2}%{}\n",
                language.name, language.usage_in_percentage, component
            ));
            if !language.frameworks.is_empty() {
                output.push_str(&format!(
                    "\u{251C}\u{2500} Frameworks: {}\n",
                    language.frameworks.join(", ")
                ));
            }
            if !language.tools.is_empty() {
                output.push_str(&format!(
                    "\u{2514}\u{2500} Tools:      {}\n",
                    language.tools.join(", ")
                ));
            }
        }

        output
    }

    fn format_devfile_human(&self, devfile: &DevFileType) -> String {
        let mut output = String::new();
        output.push_str(&format!("\u{2713} Devfile type: {}\n", devfile.name));
        output.push_str(&format!("\u{251C}\u{2500} Language:     {}\n", devfile.language));
        output.push_str(&format!("\u{251C}\u{2500} Project type: {}\n", devfile.project_type));
        if devfile.tags.is_empty() {
            output.push_str("\u{2514}\u{2500} Tags:         (none)\n");
        } else {
            output.push_str(&format!(
                "\u{2514}\u{2500} Tags:         {}\n",
                devfile.tags.join(", ")
            ));
        }
        output
    }
}
