use anyhow::Result;
use std::path::{Path, PathBuf};

/// Abstraction over the project tree so detectors can be exercised without disk I/O.
pub trait FileSystem: Send + Sync {
    fn exists(&self, path: &Path) -> bool;

    fn is_file(&self, path: &Path) -> bool;

    /// Size in bytes, following symbolic links
    fn file_size(&self, path: &Path) -> Result<u64>;

    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Reads at most `max_bytes` from the start of the file
    fn read_bytes(&self, path: &Path, max_bytes: usize) -> Result<Vec<u8>>;

    fn canonicalize(&self, path: &Path) -> Result<PathBuf>;
}
