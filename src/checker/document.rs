use std::path::{Path, PathBuf};

use super::naming::{is_document_name_violation, suggest_document_name};
use super::{NamingChecker, SectionOutcome, Violation, entry_name, relative_to};
use crate::config::LintPolicy;
use crate::error::Result;
use crate::scanner::{DocumentScanner, EntryScanner};

/// Requires every documentation file name to carry localized-script characters.
pub struct DocumentChecker<S: EntryScanner = DocumentScanner> {
    docs_dir: PathBuf,
    scanner: S,
}

impl DocumentChecker {
    #[must_use]
    pub fn from_policy(policy: &LintPolicy) -> Self {
        Self::new(
            policy.docs_dir.clone(),
            DocumentScanner::new(policy.document_suffix.clone()),
        )
    }
}

impl<S: EntryScanner> DocumentChecker<S> {
    #[must_use]
    pub const fn new(docs_dir: PathBuf, scanner: S) -> Self {
        Self { docs_dir, scanner }
    }
}

impl<S: EntryScanner> NamingChecker for DocumentChecker<S> {
    fn check(&self, project_root: &Path) -> Result<SectionOutcome> {
        let root = project_root.join(&self.docs_dir);
        if !root.is_dir() {
            return Ok(SectionOutcome::Skipped {
                root: self.docs_dir.clone(),
            });
        }

        let violations = self
            .scanner
            .scan(&root)?
            .into_iter()
            .filter_map(|path| {
                let name = entry_name(&path);
                is_document_name_violation(&name).then(|| {
                    let suggestion = suggest_document_name(&name);
                    Violation::new(relative_to(&path, project_root)).with_suggestion(suggestion)
                })
            })
            .collect();

        Ok(SectionOutcome::checked(violations))
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
