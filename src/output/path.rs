//! Path display utilities for consistent output formatting.

use std::path::Path;

/// Format a project-relative path for display as `./<path>`.
///
/// Uses forward slashes as separators for consistent cross-platform output.
/// Absolute paths are shown unchanged apart from separator normalization.
#[must_use]
pub fn display_path(path: &Path) -> String {
    let normalized = normalize_separators(&path.to_string_lossy());
    if path.is_absolute() {
        normalized
    } else if normalized.is_empty() {
        ".".to_string()
    } else {
        format!("./{normalized}")
    }
}

/// Normalize path separators to forward slashes.
#[must_use]
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}
