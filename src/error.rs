use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VibeLintError {
    #[error("Failed to walk directory {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl VibeLintError {
    /// Wrap a traversal failure, preferring the entry path reported by `walkdir`.
    #[must_use]
    pub fn walk(root: &std::path::Path, source: walkdir::Error) -> Self {
        let path = source.path().unwrap_or(root).to_path_buf();
        Self::Walk { path, source }
    }
}

pub type Result<T> = std::result::Result<T, VibeLintError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
