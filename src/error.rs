use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecognizerError {
    #[error("Path does not exist: {0}")]
    PathNotFound(PathBuf),
    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("Path is not readable: {path}: {source}")]
    PathUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("No language detected in project")]
    NoLanguageDetected,
    #[error("No devfile type matches primary language {language}")]
    NoMatchingDevFileType { language: String },
}

impl RecognizerError {
    /// True for failures caused by the project path itself.
    pub fn is_path_error(&self) -> bool {
        matches!(
            self,
            RecognizerError::PathNotFound(_)
                | RecognizerError::NotADirectory(_)
                | RecognizerError::PathUnreadable { .. }
        )
    }
}
