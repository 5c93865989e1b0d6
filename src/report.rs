use std::fmt;
use std::path::{Path, PathBuf};

/// Outcome of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pass,
    Fail,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Pass => write!(f, "PASS"),
            Status::Fail => write!(f, "FAIL"),
        }
    }
}

/// The kinds of checks the validator performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckKind {
    /// The file starts with a non-empty frontmatter block.
    Frontmatter,
    /// `name` is present and kebab-case.
    Name,
    /// `description` is present and non-empty.
    Description,
    /// The mapping conforms to its JSON Schema.
    Schema,
}

impl CheckKind {
    /// Every check kind, in reporting order.
    pub const ALL: [CheckKind; 4] = [
        CheckKind::Frontmatter,
        CheckKind::Name,
        CheckKind::Description,
        CheckKind::Schema,
    ];

    /// Stable rule identifier used in machine-readable output.
    pub fn id(&self) -> &'static str {
        match self {
            CheckKind::Frontmatter => "frontmatter/present",
            CheckKind::Name => "frontmatter/name",
            CheckKind::Description => "frontmatter/description",
            CheckKind::Schema => "frontmatter/schema",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CheckKind::Frontmatter => "File must begin with a '---' delimited frontmatter block",
            CheckKind::Name => "'name' must be present and lowercase-kebab-case",
            CheckKind::Description => "'description' must be present and non-empty",
            CheckKind::Schema => "Frontmatter must conform to its JSON Schema",
        }
    }
}

/// One PASS/FAIL line of a report.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CheckResult {
    pub check: CheckKind,
    pub status: Status,
    /// Field the check concerns; a JSON Pointer for schema violations.
    pub field: Option<String>,
    /// Message without the status tag, e.g. `name ok for a.md -> 'x'`.
    pub message: String,
}

impl CheckResult {
    pub fn pass(check: CheckKind, field: Option<&str>, message: impl Into<String>) -> Self {
        CheckResult {
            check,
            status: Status::Pass,
            field: field.map(str::to_string),
            message: message.into(),
        }
    }

    pub fn fail(check: CheckKind, field: Option<&str>, message: impl Into<String>) -> Self {
        CheckResult {
            check,
            status: Status::Fail,
            field: field.map(str::to_string),
            message: message.into(),
        }
    }

    pub fn passed(&self) -> bool {
        self.status == Status::Pass
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

/// Which validation strategy produced a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// No frontmatter block was found, so nothing was parsed.
    None,
    /// Hard-coded `name` / `description` checks.
    Basic,
    /// JSON Schema validation.
    Schema,
}

/// Everything one invocation found out about one file.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ValidationReport {
    pub file: PathBuf,
    pub timestamp: String,
    pub mode: ValidationMode,
    /// Schema file name when `mode` is [`ValidationMode::Schema`].
    pub schema: Option<String>,
    /// Parser that produced the mapping; `None` when nothing was parsed.
    pub parser: Option<&'static str>,
    pub checks: Vec<CheckResult>,
    pub passed: bool,
}

impl ValidationReport {
    pub fn new(
        file: &Path,
        mode: ValidationMode,
        schema: Option<String>,
        parser: Option<&'static str>,
        checks: Vec<CheckResult>,
    ) -> Self {
        // A report with no checks has proven nothing.
        let passed = !checks.is_empty() && checks.iter().all(CheckResult::passed);
        ValidationReport {
            file: file.to_path_buf(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            mode,
            schema,
            parser,
            checks,
            passed,
        }
    }

    /// Count passed and failed checks in a single pass.
    ///
    /// Returns `(passed, failed)`.
    pub fn count_by_status(&self) -> (usize, usize) {
        self.checks
            .iter()
            .fold((0, 0), |(p, f), c| match c.status {
                Status::Pass => (p + 1, f),
                Status::Fail => (p, f + 1),
            })
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckResult> {
        self.checks.iter().filter(|c| !c.passed())
    }

    /// Process exit code: `0` when every check passed, `1` otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.passed {
            0
        } else {
            1
        }
    }
}
