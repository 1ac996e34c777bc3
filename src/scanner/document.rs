use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::EntryScanner;
use crate::config::DOCUMENT_SUFFIX;
use crate::error::{Result, VibeLintError};

/// Finds documentation files at any depth below a root.
pub struct DocumentScanner {
    suffix: String,
}

impl DocumentScanner {
    #[must_use]
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }

    fn is_document(&self, entry: &walkdir::DirEntry) -> bool {
        !entry.file_type().is_dir() && entry.file_name().to_string_lossy().ends_with(&self.suffix)
    }
}

impl Default for DocumentScanner {
    fn default() -> Self {
        Self::new(DOCUMENT_SUFFIX)
    }
}

impl EntryScanner for DocumentScanner {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut documents = Vec::new();
        for entry in WalkDir::new(root).follow_links(true).min_depth(1) {
            let entry = entry.map_err(|e| VibeLintError::walk(root, e))?;
            if self.is_document(&entry) {
                documents.push(entry.into_path());
            }
        }
        Ok(documents)
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
