//! Built-in classification table

use super::{LanguageDefinition, LanguageId};
use std::sync::Arc;

/// Table-driven language definition.
#[derive(Debug, Clone)]
pub struct StaticLanguage {
    id: LanguageId,
    extensions: &'static [&'static str],
    filenames: &'static [&'static str],
    interpreters: &'static [&'static str],
    component: bool,
}

impl StaticLanguage {
    pub fn new(id: LanguageId, extensions: &'static [&'static str], component: bool) -> Self {
        Self {
            id,
            extensions,
            filenames: &[],
            interpreters: &[],
            component,
        }
    }

    pub fn with_filenames(mut self, filenames: &'static [&'static str]) -> Self {
        self.filenames = filenames;
        self
    }

    pub fn with_interpreters(mut self, interpreters: &'static [&'static str]) -> Self {
        self.interpreters = interpreters;
        self
    }
}

impl LanguageDefinition for StaticLanguage {
    fn id(&self) -> LanguageId {
        self.id.clone()
    }

    fn extensions(&self) -> &[&str] {
        self.extensions
    }

    fn filenames(&self) -> &[&str] {
        self.filenames
    }

    fn interpreters(&self) -> &[&str] {
        self.interpreters
    }

    fn can_be_component(&self) -> bool {
        self.component
    }
}

/// Default definitions in registration order. Earlier entries win when two
/// definitions claim the same extension, filename or interpreter.
pub fn default_definitions() -> Vec<Arc<dyn LanguageDefinition>> {
    vec![
        Arc::new(StaticLanguage::new(LanguageId::Java, &["java"], true)),
        Arc::new(StaticLanguage::new(LanguageId::Kotlin, &["kt", "kts"], true)),
        Arc::new(
            StaticLanguage::new(LanguageId::Scala, &["scala", "sc"], true)
                .with_interpreters(&["scala"]),
        ),
        Arc::new(
            StaticLanguage::new(LanguageId::Groovy, &["groovy", "gvy", "gradle"], true)
                .with_interpreters(&["groovy"]),
        ),
        Arc::new(
            StaticLanguage::new(LanguageId::JavaScript, &["js", "mjs", "cjs", "jsx"], true)
                .with_interpreters(&["node", "nodejs"]),
        ),
        Arc::new(StaticLanguage::new(
            LanguageId::TypeScript,
            &["ts", "tsx", "mts", "cts"],
            true,
        )),
        Arc::new(
            StaticLanguage::new(LanguageId::Python, &["py", "pyw", "pyi"], true)
                .with_interpreters(&["python"]),
        ),
        Arc::new(StaticLanguage::new(LanguageId::Go, &["go"], true)),
        Arc::new(StaticLanguage::new(LanguageId::Rust, &["rs"], true)),
        Arc::new(StaticLanguage::new(LanguageId::C, &["c", "h"], true)),
        Arc::new(StaticLanguage::new(
            LanguageId::Cpp,
            &["cpp", "cc", "cxx", "hpp", "hh", "hxx"],
            true,
        )),
        Arc::new(StaticLanguage::new(LanguageId::CSharp, &["cs", "csx"], true)),
        Arc::new(StaticLanguage::new(LanguageId::FSharp, &["fs", "fsx", "fsi"], true)),
        Arc::new(
            StaticLanguage::new(LanguageId::Ruby, &["rb", "rake", "gemspec"], true)
                .with_filenames(&["Rakefile", "Gemfile", "Guardfile", "config.ru"])
                .with_interpreters(&["ruby"]),
        ),
        Arc::new(
            StaticLanguage::new(LanguageId::PHP, &["php", "phtml"], true)
                .with_interpreters(&["php"]),
        ),
        Arc::new(
            StaticLanguage::new(LanguageId::Elixir, &["ex", "exs"], true)
                .with_interpreters(&["elixir"]),
        ),
        Arc::new(StaticLanguage::new(LanguageId::Swift, &["swift"], true)),
        Arc::new(StaticLanguage::new(LanguageId::Dart, &["dart"], true)),
        Arc::new(
            StaticLanguage::new(LanguageId::Shell, &["sh", "bash", "zsh", "ksh"], false)
                .with_interpreters(&["sh", "bash", "zsh", "ksh", "dash"]),
        ),
        Arc::new(
            StaticLanguage::new(LanguageId::PowerShell, &["ps1", "psm1", "psd1"], false)
                .with_interpreters(&["pwsh"]),
        ),
        Arc::new(StaticLanguage::new(LanguageId::Html, &["html", "htm", "xhtml"], false)),
        Arc::new(StaticLanguage::new(LanguageId::Css, &["css"], false)),
        Arc::new(StaticLanguage::new(LanguageId::Scss, &["scss"], false)),
        Arc::new(
            StaticLanguage::new(LanguageId::Dockerfile, &["dockerfile"], false)
                .with_filenames(&["Dockerfile", "Containerfile"]),
        ),
        Arc::new(
            StaticLanguage::new(LanguageId::Makefile, &["mk", "mak"], false)
                .with_filenames(&["Makefile", "GNUmakefile", "makefile"])
                .with_interpreters(&["make"]),
        ),
    ]
}
