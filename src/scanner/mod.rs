mod directory;
mod document;

pub use directory::DirectoryScanner;
pub use document::DocumentScanner;

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Trait for walking a root directory and collecting the entries a naming
/// rule applies to.
///
/// Entries are returned in the filesystem's native listing order. Symbolic
/// links are followed, so an entry is classified by its target; a link that
/// loops back to an ancestor or points nowhere is a walk error.
pub trait EntryScanner {
    /// Walk `root` and return matching entry paths (the root itself excluded).
    ///
    /// # Errors
    /// Returns an error if any directory under `root` cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}
