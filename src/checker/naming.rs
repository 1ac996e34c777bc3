//! Naming rules for documentation files and code directories.
//!
//! Every function here is a pure predicate over a bare entry name (no path
//! separators). Callers are responsible for extracting the name.

use std::sync::LazyLock;

use regex::Regex;

static ASCII_ONLY_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._-]+$").expect("valid ascii-only regex"));

static KEBAB_CASE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").expect("valid kebab-case regex"));

/// CJK Unified Ideographs, basic block (U+4E00..=U+9FA5).
static LOCALIZED_CHAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x{4E00}-\x{9FA5}]").expect("valid localized-char regex"));

/// Returns true if every character of `name` is in `[a-zA-Z0-9._-]`.
///
/// The empty string is not ASCII-only.
#[must_use]
pub fn is_ascii_only_name(name: &str) -> bool {
    ASCII_ONLY_NAME.is_match(name)
}

/// Returns true if every character of `name` is in `[a-z0-9-]`.
///
/// The empty string is not kebab-case.
#[must_use]
pub fn is_kebab_case(name: &str) -> bool {
    KEBAB_CASE_NAME.is_match(name)
}

/// Returns true if `name` contains at least one localized-script character.
#[must_use]
pub fn contains_localized_chars(name: &str) -> bool {
    LOCALIZED_CHAR.is_match(name)
}

/// A documentation file name violates the policy when it is written purely in
/// ASCII, i.e. it carries no localized-script characters.
#[must_use]
pub fn is_document_name_violation(name: &str) -> bool {
    is_ascii_only_name(name) && !contains_localized_chars(name)
}

/// A code directory name violates the policy when it is not kebab-case or
/// contains localized-script characters.
#[must_use]
pub fn is_code_dir_name_violation(name: &str) -> bool {
    !is_kebab_case(name) || contains_localized_chars(name)
}

/// Compliance hint for a violating document name: the name with all hyphens
/// removed. This is a weak heuristic and may return the input unchanged.
#[must_use]
pub fn suggest_document_name(name: &str) -> String {
    name.replace('-', "")
}

#[cfg(test)]
#[path = "naming_tests.rs"]
mod tests;
