use std::path::PathBuf;

/// A filesystem entry that failed a naming rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Path relative to the project root.
    pub path: PathBuf,
    /// Suggested compliant name (document naming only).
    pub suggestion: Option<String>,
}

impl Violation {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self {
            path,
            suggestion: None,
        }
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}
