use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::EntryScanner;
use crate::config::MAX_CODE_DIR_DEPTH;
use crate::error::{Result, VibeLintError};

/// Finds directories below a root, down to a fixed depth.
///
/// Depth counts levels below the root: the root's immediate children are at
/// depth 1. Directories deeper than `max_depth` are neither returned nor read.
pub struct DirectoryScanner {
    max_depth: usize,
}

impl DirectoryScanner {
    #[must_use]
    pub const fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Default for DirectoryScanner {
    fn default() -> Self {
        Self::new(MAX_CODE_DIR_DEPTH)
    }
}

impl EntryScanner for DirectoryScanner {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if self.max_depth == 0 {
            return Ok(Vec::new());
        }

        // Files are pruned before they are yielded; only directories are inspected.
        let walker = WalkDir::new(root)
            .follow_links(true)
            .min_depth(1)
            .max_depth(self.max_depth)
            .into_iter()
            .filter_entry(|e| e.file_type().is_dir());

        let mut dirs = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| VibeLintError::walk(root, e))?;
            dirs.push(entry.into_path());
        }
        Ok(dirs)
    }
}

#[cfg(test)]
#[path = "directory_tests.rs"]
mod tests;
