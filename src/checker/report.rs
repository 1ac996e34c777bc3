use std::path::PathBuf;

use super::Violation;

/// Outcome of a single checker run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionOutcome {
    /// The checker's root directory does not exist; nothing was inspected.
    Skipped { root: PathBuf },
    /// The checker ran; violations are in traversal order.
    Checked { violations: Vec<Violation> },
}

impl SectionOutcome {
    #[must_use]
    pub const fn checked(violations: Vec<Violation>) -> Self {
        Self::Checked { violations }
    }

    #[must_use]
    pub const fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped { .. })
    }

    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::Skipped { .. } => &[],
            Self::Checked { violations } => violations,
        }
    }

    #[must_use]
    pub fn has_violations(&self) -> bool {
        !self.violations().is_empty()
    }
}

/// Aggregated result of both checkers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintReport {
    pub documents: SectionOutcome,
    pub code_dirs: SectionOutcome,
}

impl LintReport {
    #[must_use]
    pub const fn new(documents: SectionOutcome, code_dirs: SectionOutcome) -> Self {
        Self {
            documents,
            code_dirs,
        }
    }

    /// True if either checker recorded a violation.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.documents.has_violations() || self.code_dirs.has_violations()
    }

    #[must_use]
    pub fn exit_code(&self) -> i32 {
        if self.has_errors() {
            crate::EXIT_VIOLATIONS_FOUND
        } else {
            crate::EXIT_SUCCESS
        }
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
