use super::FileSystem;
use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use std::sync::RwLock;

/// In-memory file tree. Relative paths are resolved against the mock root.
pub struct MockFileSystem {
    files: RwLock<HashMap<PathBuf, String>>,
    root: PathBuf,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::with_root(PathBuf::from("/mock"))
    }

    pub fn with_root(root: PathBuf) -> Self {
        Self {
            files: RwLock::new(HashMap::new()),
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) {
        let path = self.normalize_path(path.as_ref());
        if let Ok(mut files) = self.files.write() {
            files.insert(path, content.to_string());
        }
    }

    fn normalize_path(&self, path: &Path) -> PathBuf {
        let joined = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        };

        let mut normalized = PathBuf::new();
        for component in joined.components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    normalized.pop();
                }
                other => normalized.push(other),
            }
        }
        normalized
    }

    fn is_parent_of_file(&self, dir: &Path) -> bool {
        self.files
            .read()
            .map(|files| files.keys().any(|p| p.starts_with(dir) && p != dir))
            .unwrap_or(false)
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        let path = self.normalize_path(path);
        self.is_file(&path) || path == self.root || self.is_parent_of_file(&path)
    }

    fn is_file(&self, path: &Path) -> bool {
        let path = self.normalize_path(path);
        self.files
            .read()
            .map(|files| files.contains_key(&path))
            .unwrap_or(false)
    }

    fn file_size(&self, path: &Path) -> Result<u64> {
        Ok(self.read_to_string(path)?.len() as u64)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        let path = self.normalize_path(path);
        let files = self
            .files
            .read()
            .map_err(|_| anyhow!("Mock file system lock poisoned"))?;
        files
            .get(&path)
            .cloned()
            .ok_or_else(|| anyhow!("File not found: {:?}", path))
    }

    fn read_bytes(&self, path: &Path, max_bytes: usize) -> Result<Vec<u8>> {
        let content = self.read_to_string(path)?;
        let bytes = content.as_bytes();
        Ok(bytes[..bytes.len().min(max_bytes)].to_vec())
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf> {
        let normalized = self.normalize_path(path);
        if self.exists(&normalized) {
            Ok(normalized)
        } else {
            Err(anyhow!("Path not found: {:?}", path))
        }
    }
}
