use serde::Serialize;

use super::{OutputFormatter, display_path};
use crate::checker::{LintReport, SectionOutcome};
use crate::error::Result;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    passed: bool,
    documents: Section,
    code_dirs: Section,
}

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
enum SectionStatus {
    Skipped,
    Passed,
    Failed,
}

#[derive(Serialize)]
struct Section {
    status: SectionStatus,
    violations: Vec<JsonViolation>,
}

#[derive(Serialize)]
struct JsonViolation {
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestion: Option<String>,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &LintReport) -> Result<String> {
        let output = JsonOutput {
            passed: !report.has_errors(),
            documents: convert_section(&report.documents),
            code_dirs: convert_section(&report.code_dirs),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_section(outcome: &SectionOutcome) -> Section {
    let status = match outcome {
        SectionOutcome::Skipped { .. } => SectionStatus::Skipped,
        SectionOutcome::Checked { violations } if violations.is_empty() => SectionStatus::Passed,
        SectionOutcome::Checked { .. } => SectionStatus::Failed,
    };

    let violations = outcome
        .violations()
        .iter()
        .map(|v| JsonViolation {
            path: display_path(&v.path),
            suggestion: v.suggestion.clone(),
        })
        .collect();

    Section { status, violations }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
