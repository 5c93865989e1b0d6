//! Plain PASS/FAIL line formatter.
//!
//! Each check becomes one line, `PASS: <message>` or `FAIL: <message>`. The
//! status tag is coloured when stdout is a terminal; `colored` turns itself
//! off otherwise and honours `NO_COLOR`.

use crate::report::{Status, ValidationReport};
use colored::Colorize;

/// Formats a [`ValidationReport`] as one line per check.
pub fn format(report: &ValidationReport) -> String {
    let mut out = String::new();

    for check in &report.checks {
        let tag = match check.status {
            Status::Pass => "PASS".green().bold().to_string(),
            Status::Fail => "FAIL".red().bold().to_string(),
        };
        out.push_str(&format!("{tag}: {}\n", check.message));
    }

    out
}
