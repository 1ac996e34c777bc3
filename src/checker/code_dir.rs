use std::path::{Path, PathBuf};

use super::naming::is_code_dir_name_violation;
use super::{NamingChecker, SectionOutcome, Violation, entry_name, relative_to};
use crate::config::LintPolicy;
use crate::error::Result;
use crate::scanner::{DirectoryScanner, EntryScanner};

/// Requires code directories to be kebab-case with no localized characters.
///
/// Roots are visited in configured order; missing roots are skipped silently,
/// so this check always reports `SectionOutcome::Checked`.
pub struct CodeDirChecker<S: EntryScanner = DirectoryScanner> {
    code_roots: Vec<PathBuf>,
    scanner: S,
}

impl CodeDirChecker {
    #[must_use]
    pub fn from_policy(policy: &LintPolicy) -> Self {
        Self::new(
            policy.code_roots.clone(),
            DirectoryScanner::new(policy.max_code_dir_depth),
        )
    }
}

impl<S: EntryScanner> CodeDirChecker<S> {
    #[must_use]
    pub const fn new(code_roots: Vec<PathBuf>, scanner: S) -> Self {
        Self {
            code_roots,
            scanner,
        }
    }
}

impl<S: EntryScanner> NamingChecker for CodeDirChecker<S> {
    fn check(&self, project_root: &Path) -> Result<SectionOutcome> {
        let mut violations = Vec::new();

        for code_root in &self.code_roots {
            let root = project_root.join(code_root);
            if !root.is_dir() {
                continue;
            }

            for dir in self.scanner.scan(&root)? {
                if is_code_dir_name_violation(&entry_name(&dir)) {
                    violations.push(Violation::new(relative_to(&dir, project_root)));
                }
            }
        }

        Ok(SectionOutcome::checked(violations))
    }
}

#[cfg(test)]
#[path = "code_dir_tests.rs"]
mod tests;
