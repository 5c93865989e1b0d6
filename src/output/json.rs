//! JSON output formatter.
//!
//! Produces a pretty-printed JSON document with file metadata, the
//! validation mode, a pass/fail summary, and every check.

use crate::report::{CheckResult, ValidationMode, ValidationReport};

#[derive(serde::Serialize)]
struct JsonOutput<'a> {
    file: String,
    timestamp: &'a str,
    mode: ValidationMode,
    schema: &'a Option<String>,
    parser: Option<&'static str>,
    passed: bool,
    summary: Summary,
    checks: &'a [CheckResult],
}

#[derive(serde::Serialize)]
struct Summary {
    passed: usize,
    failed: usize,
}

/// Formats a [`ValidationReport`] as pretty-printed JSON.
///
/// # Panics
///
/// Panics if the report cannot be serialized (should not happen with valid data).
pub fn format(report: &ValidationReport) -> String {
    let (passed, failed) = report.count_by_status();
    let output = JsonOutput {
        file: report.file.display().to_string(),
        timestamp: &report.timestamp,
        mode: report.mode,
        schema: &report.schema,
        parser: report.parser,
        passed: report.passed,
        summary: Summary { passed, failed },
        checks: &report.checks,
    };

    serde_json::to_string_pretty(&output).expect("JSON serialization failed")
}
