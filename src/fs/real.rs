use super::FileSystem;
use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

pub struct RealFileSystem;

impl RealFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RealFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn file_size(&self, path: &Path) -> Result<u64> {
        let meta =
            fs::metadata(path).with_context(|| format!("Failed to get metadata for {:?}", path))?;
        Ok(meta.len())
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
    }

    fn read_bytes(&self, path: &Path, max_bytes: usize) -> Result<Vec<u8>> {
        let file = fs::File::open(path).with_context(|| format!("Failed to open file {:?}", path))?;
        let mut buffer = Vec::with_capacity(max_bytes);
        file.take(max_bytes as u64)
            .read_to_end(&mut buffer)
            .with_context(|| format!("Failed to read bytes from {:?}", path))?;
        Ok(buffer)
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf> {
        path.canonicalize()
            .with_context(|| format!("Failed to canonicalize path {:?}", path))
    }
}
