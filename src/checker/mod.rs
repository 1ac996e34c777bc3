mod code_dir;
mod document;
pub mod naming;
mod report;
mod violation;

pub use code_dir::CodeDirChecker;
pub use document::DocumentChecker;
pub use report::{LintReport, SectionOutcome};
pub use violation::Violation;

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use crate::config::LintPolicy;
use crate::error::Result;

pub trait NamingChecker {
    /// Walk the checker's roots under `project_root` and collect violations.
    ///
    /// # Errors
    /// Returns an error if a directory under an existing root cannot be read.
    fn check(&self, project_root: &Path) -> Result<SectionOutcome>;
}

/// Run the document check, then the code-directory check.
///
/// # Errors
/// Returns the first filesystem error hit by either checker.
pub fn lint(project_root: &Path, policy: &LintPolicy) -> Result<LintReport> {
    let documents = DocumentChecker::from_policy(policy).check(project_root)?;
    let code_dirs = CodeDirChecker::from_policy(policy).check(project_root)?;
    Ok(LintReport::new(documents, code_dirs))
}

/// Bare name of a walked entry, lossily decoded.
fn entry_name(path: &Path) -> Cow<'_, str> {
    path.file_name()
        .map_or(Cow::Borrowed(""), |name| name.to_string_lossy())
}

/// Path of a walked entry relative to the project root.
fn relative_to(path: &Path, project_root: &Path) -> PathBuf {
    path.strip_prefix(project_root)
        .map_or_else(|_| path.to_path_buf(), Path::to_path_buf)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
