//! Language identities, the classification table and the public `Language` record.
//!
//! A [`LanguageDefinition`] describes how files are attributed to a language
//! bucket (extensions, exact filenames, shebang interpreters) and whether the
//! language on its own can back a deployable component. The
//! [`LanguageRegistry`] indexes definitions for constant-time classification.

#[macro_use]
pub mod id_enum_macro;

mod definitions;
mod language_id;
mod registry;

pub use definitions::{default_definitions, StaticLanguage};
pub use language_id::LanguageId;
pub use registry::{parse_shebang, LanguageRegistry};

use serde::{Deserialize, Serialize};

pub trait LanguageDefinition: Send + Sync {
    fn id(&self) -> LanguageId;

    /// File extensions without the leading dot, lowercase
    fn extensions(&self) -> &[&str];

    /// Exact file names (e.g. "Dockerfile")
    fn filenames(&self) -> &[&str] {
        &[]
    }

    /// Shebang interpreters with version suffixes stripped (e.g. "python")
    fn interpreters(&self) -> &[&str] {
        &[]
    }

    fn can_be_component(&self) -> bool;
}

/// One detected programming language within a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    pub usage_in_percentage: f64,
    #[serde(default)]
    pub frameworks: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub can_be_component: bool,
}

impl Language {
    pub fn new(name: impl Into<String>, usage_in_percentage: f64) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            usage_in_percentage,
            frameworks: Vec::new(),
            tools: Vec::new(),
            can_be_component: false,
        }
    }

    pub fn from_definition(definition: &dyn LanguageDefinition, usage_in_percentage: f64) -> Self {
        let id = definition.id();
        Self {
            name: id.name(),
            aliases: id.aliases().iter().map(|a| a.to_string()).collect(),
            usage_in_percentage,
            frameworks: Vec::new(),
            tools: Vec::new(),
            can_be_component: definition.can_be_component(),
        }
    }

    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_frameworks<I, S>(mut self, frameworks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.frameworks = frameworks.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_tools<I, S>(mut self, tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tools = tools.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_component(mut self, can_be_component: bool) -> Self {
        self.can_be_component = can_be_component;
        self
    }

    /// True when `identifier` equals the name or one of the aliases, ignoring case.
    pub fn is_named(&self, identifier: &str) -> bool {
        self.name.eq_ignore_ascii_case(identifier)
            || self
                .aliases
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(identifier))
    }

    /// Name, aliases, frameworks and tools in that order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str())
            .chain(self.aliases.iter().map(String::as_str))
            .chain(self.frameworks.iter().map(String::as_str))
            .chain(self.tools.iter().map(String::as_str))
    }
}
