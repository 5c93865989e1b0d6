//! Validation pipeline.
//!
//! [`validate_path`] is the main entry-point. For one Markdown file it:
//!
//! 1. Extracts the frontmatter block ([`extract_frontmatter`]). An empty
//!    block fails immediately with a single "no frontmatter" check.
//! 2. Parses the block with the configured [`FrontmatterParser`], falling
//!    back to the builtin parser when the YAML engine rejects it.
//! 3. Resolves a JSON Schema for the path. When one is found and the engine
//!    can run it, schema mode decides the result.
//! 4. Otherwise runs basic mode: [`check_name`] and [`check_description`].
//!
//! Schema mode and basic mode never both contribute to a report.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::extract::extract_frontmatter;
use crate::parser::{self, Frontmatter, FrontmatterParser};
use crate::report::{CheckKind, CheckResult, ValidationMode, ValidationReport};
use crate::schema::{self, SchemaOutcome};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Lowercase alphanumeric segments separated by single hyphens.
static RE_KEBAB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap());

/// Returns `true` if `name` is lowercase-kebab-case.
///
/// ```
/// use validate_frontmatter::validate::is_kebab_case;
///
/// assert!(is_kebab_case("foo-bar-2"));
/// assert!(!is_kebab_case("Foo_Bar"));
/// assert!(!is_kebab_case("foo--bar"));
/// assert!(!is_kebab_case("-foo"));
/// ```
pub fn is_kebab_case(name: &str) -> bool {
    RE_KEBAB.is_match(name)
}

/// Validates one file from disk.
///
/// # Errors
///
/// Returns [`Error::Read`] when the file cannot be read as UTF-8 text.
/// Content problems are never errors; they are failed checks in the report.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
/// use validate_frontmatter::{config::Config, validate};
///
/// let config = Config::load(None).unwrap();
/// let report = validate::validate_path(Path::new("skills/lint/SKILL.md"), &config).unwrap();
///
/// std::process::exit(report.exit_code());
/// ```
pub fn validate_path(path: &Path, config: &Config) -> Result<ValidationReport> {
    let text = std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parser = parser::select(config.parser.engine);
    Ok(validate_text(path, &text, parser.as_ref(), config))
}

/// Validates already-loaded file content.
///
/// `path` is only used for messages and for schema resolution.
pub fn validate_text(
    path: &Path,
    text: &str,
    parser: &dyn FrontmatterParser,
    config: &Config,
) -> ValidationReport {
    let block = extract_frontmatter(text);
    if block.is_empty() {
        let check = CheckResult::fail(
            CheckKind::Frontmatter,
            None,
            format!("no frontmatter in {}", path.display()),
        );
        return ValidationReport::new(path, ValidationMode::None, None, None, vec![check]);
    }

    let parsed = parser::parse_with_fallback(parser, &block);
    tracing::debug!(
        parser = parsed.parser,
        fields = parsed.frontmatter.len(),
        "parsed frontmatter"
    );

    if config.schema.enabled {
        if let Some(resolved) = schema::resolve(path, &config.schema) {
            let schema_name = resolved.file_name();
            match schema::validate(&resolved, &parsed.frontmatter.to_value()) {
                SchemaOutcome::Pass => {
                    let check = CheckResult::pass(
                        CheckKind::Schema,
                        None,
                        format!("{} conforms to {schema_name}", path.display()),
                    );
                    return ValidationReport::new(
                        path,
                        ValidationMode::Schema,
                        Some(schema_name),
                        Some(parsed.parser),
                        vec![check],
                    );
                }
                SchemaOutcome::Fail(violations) => {
                    let checks = violations
                        .iter()
                        .map(|v| {
                            CheckResult::fail(
                                CheckKind::Schema,
                                Some(v.location()),
                                format!("{}: {v}", path.display()),
                            )
                        })
                        .collect();
                    return ValidationReport::new(
                        path,
                        ValidationMode::Schema,
                        Some(schema_name),
                        Some(parsed.parser),
                        checks,
                    );
                }
                SchemaOutcome::NotApplicable(reason) => {
                    tracing::debug!(%reason, "schema validation skipped");
                }
            }
        }
    }

    let checks = basic_checks(path, &parsed.frontmatter);
    ValidationReport::new(
        path,
        ValidationMode::Basic,
        None,
        Some(parsed.parser),
        checks,
    )
}

/// Runs both basic-mode checks. Each is evaluated independently.
pub fn basic_checks(path: &Path, fm: &Frontmatter) -> Vec<CheckResult> {
    vec![check_name(path, fm), check_description(path, fm)]
}

/// `name` must be present and lowercase-kebab-case.
pub fn check_name(path: &Path, fm: &Frontmatter) -> CheckResult {
    let file = path.display();
    match fm.field_text("name") {
        None => CheckResult::fail(
            CheckKind::Name,
            Some("name"),
            format!("missing 'name' in {file}"),
        ),
        Some(name) if !is_kebab_case(&name) => CheckResult::fail(
            CheckKind::Name,
            Some("name"),
            format!("invalid 'name' (must be kebab-case) in {file} -> '{name}'"),
        ),
        Some(name) => CheckResult::pass(
            CheckKind::Name,
            Some("name"),
            format!("name ok for {file} -> '{name}'"),
        ),
    }
}

/// `description` must be present and non-empty after trimming.
pub fn check_description(path: &Path, fm: &Frontmatter) -> CheckResult {
    let file = path.display();
    match fm.field_text("description") {
        Some(desc) if !desc.trim().is_empty() => CheckResult::pass(
            CheckKind::Description,
            Some("description"),
            format!("description present for {file}"),
        ),
        _ => CheckResult::fail(
            CheckKind::Description,
            Some("description"),
            format!("missing or empty 'description' in {file}"),
        ),
    }
}
