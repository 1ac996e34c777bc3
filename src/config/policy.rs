use std::path::{Path, PathBuf};

/// Documentation root, relative to the project root.
pub const DEFAULT_DOCS_DIR: &str = "docs";

/// Code roots checked for kebab-case directories, in traversal order.
pub const DEFAULT_CODE_ROOTS: [&str; 5] = ["src", "components", "pages", "lib", "utils"];

/// Deepest directory level inspected below a code root (`src/a` is level 1).
pub const MAX_CODE_DIR_DEPTH: usize = 4;

/// File name suffix identifying documentation files.
pub const DOCUMENT_SUFFIX: &str = ".md";

/// The fixed naming policy. There is no configuration file; the defaults are
/// the policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintPolicy {
    pub docs_dir: PathBuf,
    pub code_roots: Vec<PathBuf>,
    pub max_code_dir_depth: usize,
    pub document_suffix: String,
}

impl Default for LintPolicy {
    fn default() -> Self {
        Self {
            docs_dir: PathBuf::from(DEFAULT_DOCS_DIR),
            code_roots: DEFAULT_CODE_ROOTS.iter().map(PathBuf::from).collect(),
            max_code_dir_depth: MAX_CODE_DIR_DEPTH,
            document_suffix: DOCUMENT_SUFFIX.to_string(),
        }
    }
}

impl LintPolicy {
    /// Absolute (or cwd-relative) location of the documentation root.
    #[must_use]
    pub fn docs_root(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.docs_dir)
    }

    /// Locations of all configured code roots, whether or not they exist.
    #[must_use]
    pub fn code_root_paths(&self, project_root: &Path) -> Vec<PathBuf> {
        self.code_roots
            .iter()
            .map(|root| project_root.join(root))
            .collect()
    }
}

#[cfg(test)]
#[path = "policy_tests.rs"]
mod tests;
