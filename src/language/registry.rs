use super::{default_definitions, LanguageDefinition, LanguageId};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Indexed set of language definitions.
#[derive(Clone)]
pub struct LanguageRegistry {
    languages: Vec<Arc<dyn LanguageDefinition>>,
    by_extension: HashMap<String, usize>,
    by_filename: HashMap<String, usize>,
    by_interpreter: HashMap<String, usize>,
}

impl LanguageRegistry {
    pub fn new() -> Self {
        Self {
            languages: Vec::new(),
            by_extension: HashMap::new(),
            by_filename: HashMap::new(),
            by_interpreter: HashMap::new(),
        }
    }

    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for definition in default_definitions() {
            registry.register(definition);
        }
        registry
    }

    /// Adds a definition. Keys already claimed by an earlier definition are kept.
    pub fn register(&mut self, language: Arc<dyn LanguageDefinition>) {
        let idx = self.languages.len();

        for ext in language.extensions() {
            self.by_extension.entry(ext.to_lowercase()).or_insert(idx);
        }
        for name in language.filenames() {
            self.by_filename.entry(name.to_string()).or_insert(idx);
        }
        for interpreter in language.interpreters() {
            self.by_interpreter
                .entry(interpreter.to_string())
                .or_insert(idx);
        }

        self.languages.push(language);
    }

    pub fn get(&self, id: &LanguageId) -> Option<&dyn LanguageDefinition> {
        self.languages
            .iter()
            .find(|l| &l.id() == id)
            .map(|l| l.as_ref())
    }

    pub fn language_ids(&self) -> Vec<LanguageId> {
        self.languages.iter().map(|l| l.id()).collect()
    }

    /// Classifies a path by exact filename, then by its last extension.
    pub fn classify_path(&self, path: &Path) -> Option<LanguageId> {
        let file_name = path.file_name()?.to_str()?;

        if let Some(&idx) = self.by_filename.get(file_name) {
            return Some(self.languages[idx].id());
        }

        let ext = path.extension()?.to_str()?.to_lowercase();
        self.by_extension
            .get(&ext)
            .map(|&idx| self.languages[idx].id())
    }

    /// Classifies file contents by their shebang line.
    pub fn classify_shebang(&self, head: &[u8]) -> Option<LanguageId> {
        let interpreter = parse_shebang(head)?;
        self.by_interpreter
            .get(&interpreter)
            .map(|&idx| self.languages[idx].id())
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Extracts the interpreter named by a `#!` line, with any version suffix removed.
///
/// `#!/usr/bin/env python3.11` yields `python`, `#!/bin/bash -e` yields `bash`.
pub fn parse_shebang(head: &[u8]) -> Option<String> {
    let first_line = head.split(|&b| b == b'\n').next()?;
    let line = std::str::from_utf8(first_line).ok()?.trim();
    let command = line.strip_prefix("#!")?.trim();

    let mut parts = command.split_whitespace();
    let mut program = parts.next()?.rsplit('/').next()?;
    if program == "env" {
        program = parts.find(|p| !p.starts_with('-'))?;
    }

    let interpreter = program.trim_end_matches(|c: char| c.is_ascii_digit() || c == '.');
    if interpreter.is_empty() {
        None
    } else {
        Some(interpreter.to_string())
    }
}
