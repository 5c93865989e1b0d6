//! JSON Schema resolution and validation.
//!
//! Schema checking is a best-effort enhancement. A file is matched to a
//! schema by path convention ([`SchemaKind::for_path`]), the schema is loaded
//! from the configured directory ([`resolve`]), and the parsed frontmatter is
//! validated with the [jsonschema] engine ([`validate`]).
//!
//! Whenever any of that is impossible (no schema file, unreadable schema,
//! engine not compiled in, schema does not compile) the outcome is
//! [`SchemaOutcome::NotApplicable`] and the caller runs basic validation.
//!
//! [jsonschema]: https://docs.rs/jsonschema

use crate::config::SchemaConfig;
use crate::error::{Error, Result};
use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};

/// Default file name of the agent schema.
pub const AGENT_SCHEMA: &str = "agent.schema.json";
/// Default file name of the skill schema.
pub const SKILL_SCHEMA: &str = "skill.schema.json";

/// Path component that marks a file as an agent definition.
const AGENTS_SEGMENT: &str = "agents";

/// Which schema a file is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaKind {
    Agent,
    Skill,
}

impl SchemaKind {
    /// Picks the schema kind from a file path.
    ///
    /// Any path component equal to `agents` selects [`SchemaKind::Agent`].
    ///
    /// ```
    /// use std::path::Path;
    /// use validate_frontmatter::schema::SchemaKind;
    ///
    /// assert_eq!(SchemaKind::for_path(Path::new(".ai-config/agents/reviewer.md")), SchemaKind::Agent);
    /// assert_eq!(SchemaKind::for_path(Path::new(".ai-config/skills/lint/SKILL.md")), SchemaKind::Skill);
    /// assert_eq!(SchemaKind::for_path(Path::new("my-agents/x.md")), SchemaKind::Skill);
    /// ```
    pub fn for_path(path: &Path) -> Self {
        let is_agent = path
            .components()
            .any(|c| c.as_os_str() == AGENTS_SEGMENT);
        if is_agent {
            SchemaKind::Agent
        } else {
            SchemaKind::Skill
        }
    }

    /// Returns the configured schema file name for this kind.
    pub fn file_name<'a>(&self, config: &'a SchemaConfig) -> &'a str {
        match self {
            SchemaKind::Agent => &config.agent,
            SchemaKind::Skill => &config.skill,
        }
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaKind::Agent => write!(f, "agent"),
            SchemaKind::Skill => write!(f, "skill"),
        }
    }
}

/// A schema document located and loaded for one file.
#[derive(Debug, Clone)]
pub struct ResolvedSchema {
    pub kind: SchemaKind,
    pub path: PathBuf,
    pub document: Value,
}

impl ResolvedSchema {
    /// The schema's file name, for display.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Locates and loads the schema for `file`.
///
/// Returns `None` when the schema file is absent or cannot be loaded;
/// neither is an error for the caller.
pub fn resolve(file: &Path, config: &SchemaConfig) -> Option<ResolvedSchema> {
    let kind = SchemaKind::for_path(file);
    let path = config.dir.join(kind.file_name(config));

    if !path.is_file() {
        tracing::debug!(schema = %path.display(), %kind, "no schema found");
        return None;
    }

    match load_schema(&path) {
        Ok(document) => {
            tracing::info!(schema = %path.display(), %kind, "resolved schema");
            Some(ResolvedSchema {
                kind,
                path,
                document,
            })
        }
        Err(e) => {
            tracing::warn!("{e}");
            None
        }
    }
}

/// Reads and decodes a schema document.
///
/// # Errors
///
/// Returns [`Error::SchemaLoad`] when the file cannot be read or is not JSON.
pub fn load_schema(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::SchemaLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    serde_json::from_str(&content).map_err(|e| Error::SchemaLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// A single schema violation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Violation {
    /// JSON Pointer to the offending field; empty for the document root.
    pub instance_path: String,
    /// Human-readable description from the engine.
    pub message: String,
}

impl Violation {
    /// The instance path, or `(root)` for the whole document.
    pub fn location(&self) -> &str {
        if self.instance_path.is_empty() {
            "(root)"
        } else {
            &self.instance_path
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location(), self.message)
    }
}

/// Result of schema validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaOutcome {
    /// The document conforms to the schema.
    Pass,
    /// The document violates the schema.
    Fail(Vec<Violation>),
    /// Schema validation could not run; the reason is informational only.
    NotApplicable(String),
}

/// Returns `true` if the JSON Schema engine is compiled into this build.
pub fn engine_available() -> bool {
    cfg!(feature = "schema")
}

/// Validates `instance` against a resolved schema.
pub fn validate(schema: &ResolvedSchema, instance: &Value) -> SchemaOutcome {
    engine::validate(&schema.document, instance)
}

#[cfg(feature = "schema")]
mod engine {
    use super::*;

    pub(super) fn validate(schema: &Value, instance: &Value) -> SchemaOutcome {
        let validator = match jsonschema::validator_for(schema) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(error = %e, "schema does not compile; using basic validation");
                return SchemaOutcome::NotApplicable(format!("invalid schema: {e}"));
            }
        };

        let violations: Vec<Violation> = validator
            .iter_errors(instance)
            .map(|e| Violation {
                instance_path: e.instance_path.to_string(),
                message: e.to_string(),
            })
            .collect();

        if violations.is_empty() {
            SchemaOutcome::Pass
        } else {
            SchemaOutcome::Fail(violations)
        }
    }
}

#[cfg(not(feature = "schema"))]
mod engine {
    use super::*;

    pub(super) fn validate(_schema: &Value, _instance: &Value) -> SchemaOutcome {
        SchemaOutcome::NotApplicable("schema engine not compiled in".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn write_schema(dir: &Path, name: &str, body: &str) {
        std::fs::write(dir.join(name), body).unwrap();
    }

    fn config_for(dir: &Path) -> SchemaConfig {
        SchemaConfig {
            dir: dir.to_path_buf(),
            ..SchemaConfig::default()
        }
    }

    #[test]
    fn agents_segment_selects_agent_schema() {
        assert_eq!(SchemaKind::for_path(Path::new("agents/a.md")), SchemaKind::Agent);
        assert_eq!(SchemaKind::for_path(Path::new("/x/agents/y/a.md")), SchemaKind::Agent);
        assert_eq!(SchemaKind::for_path(Path::new("skills/agents.md")), SchemaKind::Skill);
        assert_eq!(SchemaKind::for_path(Path::new("agentsx/a.md")), SchemaKind::Skill);
    }

    #[test]
    fn resolve_missing_schema_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(resolve(Path::new("agents/a.md"), &config_for(dir.path())).is_none());
    }

    #[test]
    fn resolve_invalid_json_is_none() {
        let dir = tempfile::tempdir().unwrap();
        write_schema(dir.path(), SKILL_SCHEMA, "{ not json");
        assert!(resolve(Path::new("skills/a.md"), &config_for(dir.path())).is_none());
    }

    #[test]
    fn resolve_picks_schema_by_kind() {
        let dir = tempfile::tempdir().unwrap();
        write_schema(dir.path(), AGENT_SCHEMA, r#"{"title": "agent"}"#);
        write_schema(dir.path(), SKILL_SCHEMA, r#"{"title": "skill"}"#);
        let config = config_for(dir.path());

        let agent = resolve(Path::new("agents/a.md"), &config).unwrap();
        assert_eq!(agent.kind, SchemaKind::Agent);
        assert_eq!(agent.document["title"], "agent");
        assert_eq!(agent.file_name(), AGENT_SCHEMA);

        let skill = resolve(Path::new("skills/a/SKILL.md"), &config).unwrap();
        assert_eq!(skill.kind, SchemaKind::Skill);
        assert_eq!(skill.document["title"], "skill");
    }

    #[test]
    fn violation_location_defaults_to_root() {
        let v = Violation {
            instance_path: String::new(),
            message: "\"name\" is a required property".to_string(),
        };
        assert_eq!(v.to_string(), "(root): \"name\" is a required property");
    }

    #[cfg(feature = "schema")]
    #[test]
    fn validate_reports_each_violation() {
        let schema = ResolvedSchema {
            kind: SchemaKind::Skill,
            path: PathBuf::from(SKILL_SCHEMA),
            document: json!({
                "type": "object",
                "required": ["name", "description"],
                "properties": {
                    "name": {"type": "string", "pattern": "^[a-z0-9]+(-[a-z0-9]+)*$"}
                }
            }),
        };

        assert_eq!(
            validate(&schema, &json!({"name": "ok-name", "description": "d"})),
            SchemaOutcome::Pass
        );

        match validate(&schema, &json!({"name": "Bad_Name"})) {
            SchemaOutcome::Fail(violations) => {
                assert_eq!(violations.len(), 2);
                assert!(violations.iter().any(|v| v.instance_path == "/name"));
                assert!(violations.iter().any(|v| v.location() == "(root)"));
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[cfg(feature = "schema")]
    #[test]
    fn uncompilable_schema_is_not_applicable() {
        let schema = ResolvedSchema {
            kind: SchemaKind::Skill,
            path: PathBuf::from(SKILL_SCHEMA),
            document: json!({"type": 12}),
        };
        assert!(matches!(
            validate(&schema, &json!({})),
            SchemaOutcome::NotApplicable(_)
        ));
    }

    #[cfg(not(feature = "schema"))]
    #[test]
    fn without_engine_validation_is_not_applicable() {
        let schema = ResolvedSchema {
            kind: SchemaKind::Skill,
            path: PathBuf::from(SKILL_SCHEMA),
            document: json!({"required": ["name"]}),
        };
        assert!(!engine_available());
        assert!(matches!(
            validate(&schema, &json!({})),
            SchemaOutcome::NotApplicable(_)
        ));
    }
}
