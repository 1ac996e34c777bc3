use std::io::Write;

use super::{OutputFormatter, display_path};
use crate::checker::{LintReport, SectionOutcome};
use crate::error::Result;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RESET: &str = "\x1b[0m";
}

const SEPARATOR_WIDTH: usize = 50;

/// Static wording for one report section.
struct SectionLabels {
    heading: &'static str,
    passed: &'static str,
    failed_noun: &'static str,
    failed_hint: &'static str,
}

const DOCUMENT_LABELS: SectionLabels = SectionLabels {
    heading: "Checking document file names...",
    passed: "All document file names follow the naming convention",
    failed_noun: "document file naming violation(s)",
    failed_hint: "",
};

const CODE_DIR_LABELS: SectionLabels = SectionLabels {
    heading: "Checking code directory names...",
    passed: "All code directory names follow the naming convention",
    failed_noun: "code directory naming violation(s)",
    failed_hint: " (expected kebab-case)",
};

pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_section(
        &self,
        outcome: &SectionOutcome,
        labels: &SectionLabels,
        output: &mut Vec<u8>,
    ) {
        writeln!(output).ok();
        writeln!(output, "{}", labels.heading).ok();

        match outcome {
            SectionOutcome::Skipped { root } => {
                let notice = format!(
                    "⚠ {}/ directory does not exist, skipped",
                    root.display()
                );
                writeln!(output, "{}", self.colorize(&notice, ansi::YELLOW)).ok();
            }
            SectionOutcome::Checked { violations } if violations.is_empty() => {
                let line = format!("✓ {}", labels.passed);
                writeln!(output, "{}", self.colorize(&line, ansi::GREEN)).ok();
            }
            SectionOutcome::Checked { violations } => {
                let line = format!(
                    "✗ Found {} {}{}:",
                    violations.len(),
                    labels.failed_noun,
                    labels.failed_hint
                );
                writeln!(output, "{}", self.colorize(&line, ansi::RED)).ok();

                for violation in violations {
                    writeln!(output, "  {}", display_path(&violation.path)).ok();
                    if let Some(suggestion) = &violation.suggestion {
                        let hint = format!("Suggestion: {suggestion}");
                        writeln!(output, "  {}", self.colorize(&hint, ansi::YELLOW)).ok();
                    }
                }
            }
        }
    }

    fn format_summary(&self, report: &LintReport, output: &mut Vec<u8>) {
        writeln!(output).ok();
        writeln!(output, "{}", "=".repeat(SEPARATOR_WIDTH)).ok();

        let summary = if report.has_errors() {
            self.colorize("✗ Checks failed, please fix the issues above", ansi::RED)
        } else {
            self.colorize("✓ All checks passed", ansi::GREEN)
        };
        writeln!(output, "{summary}").ok();
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &LintReport) -> Result<String> {
        let mut output = Vec::new();

        writeln!(output, "Vibe Lint - checking naming conventions...").ok();

        self.format_section(&report.documents, &DOCUMENT_LABELS, &mut output);
        self.format_section(&report.code_dirs, &CODE_DIR_LABELS, &mut output);
        self.format_summary(report, &mut output);

        Ok(String::from_utf8_lossy(&output).to_string())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
