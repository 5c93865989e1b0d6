use std::path::{Path, PathBuf};

use validate_frontmatter::config::{Config, SchemaConfig};
use validate_frontmatter::parser::line::LineParser;
use validate_frontmatter::parser::{select, FrontmatterParser, ParserEngine};
use validate_frontmatter::report::{CheckKind, Status, ValidationMode, ValidationReport};
use validate_frontmatter::validate::{validate_path, validate_text};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn basic_config() -> Config {
    let mut config = Config::default();
    config.schema.enabled = false;
    config
}

fn schema_config() -> Config {
    Config {
        schema: SchemaConfig {
            dir: PathBuf::from("tests/fixtures/schemas"),
            ..SchemaConfig::default()
        },
        ..Config::default()
    }
}

fn run(text: &str) -> ValidationReport {
    let parser = select(ParserEngine::Auto);
    validate_text(Path::new("skill.md"), text, parser.as_ref(), &basic_config())
}

fn run_with(parser: &dyn FrontmatterParser, text: &str) -> ValidationReport {
    validate_text(Path::new("skill.md"), text, parser, &basic_config())
}

fn statuses(report: &ValidationReport) -> Vec<(CheckKind, Status)> {
    report.checks.iter().map(|c| (c.check, c.status)).collect()
}

// ---------------------------------------------------------------------------
// Frontmatter presence
// ---------------------------------------------------------------------------

#[test]
fn file_without_delimiter_reports_no_frontmatter() {
    let report = run("# Title\nname: foo\n");
    assert_eq!(report.mode, ValidationMode::None);
    assert_eq!(report.parser, None);
    assert_eq!(statuses(&report), vec![(CheckKind::Frontmatter, Status::Fail)]);
    assert_eq!(report.checks[0].to_string(), "FAIL: no frontmatter in skill.md");
    assert_eq!(report.exit_code(), 1);
}

#[test]
fn empty_file_reports_no_frontmatter() {
    let report = run("");
    assert_eq!(statuses(&report), vec![(CheckKind::Frontmatter, Status::Fail)]);
}

// ---------------------------------------------------------------------------
// Basic mode
// ---------------------------------------------------------------------------

#[test]
fn simple_block_passes_both_checks() {
    let report = run("---\nname: foo-bar\ndescription: hello\n---");
    assert_eq!(report.mode, ValidationMode::Basic);
    assert_eq!(
        statuses(&report),
        vec![
            (CheckKind::Name, Status::Pass),
            (CheckKind::Description, Status::Pass),
        ]
    );
    assert_eq!(report.checks[0].message, "name ok for skill.md -> 'foo-bar'");
    assert_eq!(report.checks[1].message, "description present for skill.md");
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn non_kebab_name_fails_and_description_still_checked() {
    let report = run("---\nname: Foo_Bar\ndescription: hello\n---\n");
    assert_eq!(
        statuses(&report),
        vec![
            (CheckKind::Name, Status::Fail),
            (CheckKind::Description, Status::Pass),
        ]
    );
    assert_eq!(
        report.checks[0].message,
        "invalid 'name' (must be kebab-case) in skill.md -> 'Foo_Bar'"
    );
    assert_eq!(report.exit_code(), 1);
}

#[test]
fn both_fields_missing_reports_two_failures() {
    let report = run("---\ntitle: something\n---\n");
    assert_eq!(
        statuses(&report),
        vec![
            (CheckKind::Name, Status::Fail),
            (CheckKind::Description, Status::Fail),
        ]
    );
    assert_eq!(report.checks[0].message, "missing 'name' in skill.md");
    assert_eq!(
        report.checks[1].message,
        "missing or empty 'description' in skill.md"
    );
}

#[test]
fn whitespace_only_description_fails() {
    let report = run("---\nname: ok\ndescription: \"   \"\n---\n");
    assert_eq!(report.checks[1].status, Status::Fail);
}

#[test]
fn kebab_edge_cases() {
    for bad in ["-lead", "trail-", "dou--ble", "UPPER", "with space", "snake_case", "dot.ted"] {
        let report = run(&format!("---\nname: \"{bad}\"\ndescription: d\n---\n"));
        assert_eq!(report.checks[0].status, Status::Fail, "{bad} should fail");
    }
    for good in ["a", "a1", "123", "multi-part-name-2"] {
        let report = run(&format!("---\nname: \"{good}\"\ndescription: d\n---\n"));
        assert_eq!(report.checks[0].status, Status::Pass, "{good} should pass");
    }
}

#[test]
fn block_scalar_description_passes_with_builtin_parser() {
    let text = "---\nname: multi\ndescription: |\n  line one\n  line two\n---\n";
    let report = run_with(&LineParser, text);
    assert_eq!(report.parser, Some("builtin"));
    assert!(report.passed);
}

#[test]
fn empty_block_scalar_description_fails() {
    let text = "---\nname: multi\ndescription: >\nother: x\n---\n";
    let report = run_with(&LineParser, text);
    assert_eq!(report.checks[1].status, Status::Fail);
}

#[cfg(feature = "yaml")]
#[test]
fn numeric_name_is_rendered_as_text() {
    let report = run("---\nname: 42\ndescription: answer\n---\n");
    assert_eq!(report.parser, Some("yaml"));
    assert_eq!(report.checks[0].status, Status::Pass);
    assert_eq!(report.checks[0].message, "name ok for skill.md -> '42'");
}

#[cfg(feature = "yaml")]
#[test]
fn list_valued_name_is_not_kebab_case() {
    let report = run("---\nname: [a, b]\ndescription: d\n---\n");
    assert_eq!(report.checks[0].status, Status::Fail);
}

#[cfg(feature = "yaml")]
#[test]
fn non_mapping_yaml_counts_as_empty() {
    let report = run("---\n- name\n- description\n---\n");
    assert_eq!(report.parser, Some("yaml"));
    assert_eq!(report.failures().count(), 2);
}

// ---------------------------------------------------------------------------
// Schema mode
// ---------------------------------------------------------------------------

#[cfg(feature = "schema")]
#[test]
fn agent_path_uses_agent_schema() {
    let report = validate_path(Path::new("tests/fixtures/agents/reviewer.md"), &schema_config()).unwrap();
    assert_eq!(report.mode, ValidationMode::Schema);
    assert_eq!(report.schema.as_deref(), Some("agent.schema.json"));
    assert_eq!(statuses(&report), vec![(CheckKind::Schema, Status::Pass)]);
}

#[cfg(feature = "schema")]
#[test]
fn schema_failures_are_reported_per_violation() {
    let report = validate_path(Path::new("tests/fixtures/agents/no-model.md"), &schema_config()).unwrap();
    assert_eq!(report.mode, ValidationMode::Schema);
    assert!(!report.passed);
    assert!(report.checks.iter().all(|c| c.check == CheckKind::Schema));
    assert_eq!(report.checks.len(), 1);
    assert_eq!(report.checks[0].field.as_deref(), Some("(root)"));
}

#[cfg(feature = "schema")]
#[test]
fn schema_mode_can_fail_where_basic_mode_passes() {
    let path = Path::new("tests/fixtures/agents/no-model.md");
    let schema = validate_path(path, &schema_config()).unwrap();
    let basic = validate_path(path, &basic_config()).unwrap();
    assert!(!schema.passed);
    assert!(basic.passed);
    assert_eq!(basic.mode, ValidationMode::Basic);
}

#[cfg(feature = "schema")]
#[test]
fn skill_path_uses_skill_schema() {
    let report = validate_path(
        Path::new("tests/fixtures/skills/code-review/SKILL.md"),
        &schema_config(),
    )
    .unwrap();
    assert_eq!(report.schema.as_deref(), Some("skill.schema.json"));
    assert!(report.passed);
}

#[test]
fn uncompilable_schema_falls_back_to_basic_mode() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("skill.schema.json"), r#"{"type": 12}"#).unwrap();
    let mut config = Config::default();
    config.schema.dir = dir.path().to_path_buf();

    let report = validate_path(
        Path::new("tests/fixtures/skills/bad-name/SKILL.md"),
        &config,
    )
    .unwrap();
    assert_eq!(report.mode, ValidationMode::Basic);
    assert_eq!(report.checks.len(), 2);
}

#[test]
fn missing_schema_matches_basic_mode() {
    let path = Path::new("tests/fixtures/agents/no-model.md");
    let mut config = Config::default();
    config.schema.dir = PathBuf::from("tests/fixtures/no-such-dir");

    let fallback = validate_path(path, &config).unwrap();
    let basic = validate_path(path, &basic_config()).unwrap();
    assert_eq!(fallback.mode, basic.mode);
    assert_eq!(fallback.checks, basic.checks);
}

#[cfg(not(feature = "schema"))]
#[test]
fn without_schema_engine_results_match_basic_mode() {
    let path = Path::new("tests/fixtures/agents/no-model.md");
    let with_schema = validate_path(path, &schema_config()).unwrap();
    let basic = validate_path(path, &basic_config()).unwrap();
    assert_eq!(with_schema.mode, ValidationMode::Basic);
    assert_eq!(with_schema.checks, basic.checks);
}

// ---------------------------------------------------------------------------
// I/O
// ---------------------------------------------------------------------------

#[test]
fn unreadable_path_is_an_error() {
    let err = validate_path(Path::new("tests/fixtures/missing.md"), &basic_config()).unwrap_err();
    assert!(err.to_string().contains("failed to read"));
}
