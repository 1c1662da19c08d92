//! Project traversal producing raw per-language byte counts

use crate::config::RecognizerConfig;
use crate::error::RecognizerError;
use crate::fs::FileSystem;
use crate::language::{LanguageId, LanguageRegistry};
use ignore::gitignore::Gitignore;
use ignore::WalkBuilder;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

const SHEBANG_PROBE_BYTES: usize = 256;

/// Raw output of a scan: bytes per language bucket plus every visited file.
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    pub sizes: HashMap<LanguageId, u64>,
    /// Paths relative to the project root, sorted
    pub files: Vec<PathBuf>,
}

impl ScanResult {
    pub fn total_size(&self) -> u64 {
        self.sizes.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_size() == 0
    }
}

pub struct LanguageScanner<'a> {
    root: PathBuf,
    languages: &'a LanguageRegistry,
    fs: &'a dyn FileSystem,
    config: &'a RecognizerConfig,
}

impl<'a> LanguageScanner<'a> {
    /// Validates `root` and resolves it to its canonical form.
    pub fn new(
        root: &Path,
        languages: &'a LanguageRegistry,
        fs: &'a dyn FileSystem,
        config: &'a RecognizerConfig,
    ) -> Result<Self, RecognizerError> {
        let root = validate_root(root)?;

        debug!(root = %root.display(), "LanguageScanner initialized");

        Ok(Self {
            root,
            languages,
            fs,
            config,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn scan(&self) -> ScanResult {
        let start = Instant::now();

        let mut result = ScanResult::default();
        let mut files_scanned = 0usize;

        let config = self.config.clone();
        let root_ignore = self.root_gitignore();
        let walker = WalkBuilder::new(&self.root)
            .max_depth(Some(self.config.max_depth))
            .hidden(false)
            .parents(false)
            .git_ignore(true)
            .require_git(false)
            .git_global(false)
            .git_exclude(false)
            .follow_links(false)
            .filter_entry(move |entry| {
                if entry.depth() == 0 {
                    return true;
                }
                let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
                let name = entry.file_name().to_str().unwrap_or("");
                !(is_dir && config.is_excluded_dir(name))
            })
            .build();

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(err) => {
                    warn!(error = %err, "Failed to read directory entry");
                    continue;
                }
            };

            let Some(file_type) = entry.file_type() else {
                continue;
            };
            if file_type.is_dir() {
                continue;
            }

            let path = entry.path();
            if file_type.is_symlink() && !self.is_contained_file(path, &root_ignore) {
                debug!(path = %path.display(), "Skipping symlink to a file outside the scanned tree");
                continue;
            }

            if files_scanned >= self.config.max_files {
                warn!(
                    files_scanned,
                    max_files = self.config.max_files,
                    "Reached file limit, stopping scan"
                );
                break;
            }
            files_scanned += 1;

            let rel_path = path.strip_prefix(&self.root).unwrap_or(path).to_path_buf();

            if let Some(language) = self.classify(path) {
                match self.fs.file_size(path) {
                    Ok(size) => {
                        *result.sizes.entry(language).or_insert(0) += size;
                    }
                    Err(err) => {
                        warn!(path = %path.display(), error = %err, "Failed to read file size");
                    }
                }
            }

            result.files.push(rel_path);
        }

        result.files.sort();

        info!(
            root = %self.root.display(),
            files_scanned,
            languages = result.sizes.len(),
            total_bytes = result.total_size(),
            scan_time_ms = start.elapsed().as_millis() as u64,
            "Language scan completed"
        );

        result
    }

    fn classify(&self, path: &Path) -> Option<LanguageId> {
        if let Some(language) = self.languages.classify_path(path) {
            return Some(language);
        }

        if path.extension().is_some() {
            return None;
        }

        match self.fs.read_bytes(path, SHEBANG_PROBE_BYTES) {
            Ok(head) => self.languages.classify_shebang(&head),
            Err(err) => {
                debug!(path = %path.display(), error = %err, "Failed to probe shebang");
                None
            }
        }
    }

    /// A symlink counts only when it resolves to a regular file the walk
    /// itself would have visited: inside the root, outside excluded
    /// directories and not ignored by the root `.gitignore`.
    fn is_contained_file(&self, link: &Path, root_ignore: &Gitignore) -> bool {
        let Ok(target) = self.fs.canonicalize(link) else {
            return false;
        };
        let Ok(rel_target) = target.strip_prefix(&self.root) else {
            return false;
        };
        if !self.fs.is_file(&target) {
            return false;
        }

        let mut dirs = rel_target.parent().into_iter().flat_map(Path::components);
        if dirs.any(|c| self.config.is_excluded_dir(&c.as_os_str().to_string_lossy())) {
            return false;
        }

        !root_ignore
            .matched_path_or_any_parents(rel_target, false)
            .is_ignore()
    }

    fn root_gitignore(&self) -> Gitignore {
        let path = self.root.join(".gitignore");
        if !self.fs.is_file(&path) {
            return Gitignore::empty();
        }
        let (matcher, err) = Gitignore::new(&path);
        if let Some(err) = err {
            debug!(path = %path.display(), error = %err, "Partially parsed .gitignore");
        }
        matcher
    }
}

fn validate_root(root: &Path) -> Result<PathBuf, RecognizerError> {
    if !root.exists() {
        return Err(RecognizerError::PathNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(RecognizerError::NotADirectory(root.to_path_buf()));
    }

    std::fs::read_dir(root).map_err(|source| RecognizerError::PathUnreadable {
        path: root.to_path_buf(),
        source,
    })?;

    root.canonicalize()
        .map_err(|source| RecognizerError::PathUnreadable {
            path: root.to_path_buf(),
            source,
        })
}
