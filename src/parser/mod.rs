//! Frontmatter parsers.
//!
//! Every parser implements the [`FrontmatterParser`] trait, turning an
//! extracted block into a [`Frontmatter`] mapping. Two implementations ship
//! with the crate:
//!
//! | Parser | Engine | Availability |
//! |--------|--------|--------------|
//! | [`yaml::YamlParser`] | [serde_yaml] | `yaml` cargo feature |
//! | [`line::LineParser`] | built-in | always |
//!
//! [`select`] probes availability once at startup and returns the preferred
//! parser. [`parse_with_fallback`] runs it and drops back to the line parser
//! when the YAML engine rejects the block.
//!
//! [serde_yaml]: https://docs.rs/serde_yaml

pub mod line;
pub mod yaml;

use crate::error::Result;
use serde_json::{Map, Value};

/// A parsed frontmatter mapping.
///
/// Values are JSON-compatible so the same mapping can be handed to the
/// JSON Schema engine unchanged. The line parser only ever stores strings.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct Frontmatter {
    fields: Map<String, Value>,
}

impl Frontmatter {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a field. Last write wins.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.fields.insert(key.into(), value);
    }

    /// Returns the raw value of a field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over field names.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Returns a field rendered as text, or `None` when it is absent or empty.
    ///
    /// Strings are trimmed, so a YAML block scalar's trailing newline does
    /// not leak into the text. Numbers and booleans use their display form.
    /// Null, blank strings, and empty sequences or mappings all count as
    /// absent. Non-empty sequences and mappings are rendered as compact JSON.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use validate_frontmatter::parser::Frontmatter;
    ///
    /// let mut fm = Frontmatter::new();
    /// fm.insert("name", json!("my-skill"));
    /// fm.insert("version", json!(3));
    /// fm.insert("description", json!("  "));
    ///
    /// assert_eq!(fm.field_text("name").as_deref(), Some("my-skill"));
    /// assert_eq!(fm.field_text("version").as_deref(), Some("3"));
    /// assert_eq!(fm.field_text("description"), None);
    /// assert_eq!(fm.field_text("missing"), None);
    /// ```
    pub fn field_text(&self, key: &str) -> Option<String> {
        match self.fields.get(key)? {
            Value::Null => None,
            Value::String(s) if s.trim().is_empty() => None,
            Value::String(s) => Some(s.trim().to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Number(n) => Some(n.to_string()),
            Value::Array(items) if items.is_empty() => None,
            Value::Object(map) if map.is_empty() => None,
            other => Some(other.to_string()),
        }
    }

    /// Returns the mapping as a JSON object, for schema validation.
    pub fn to_value(&self) -> Value {
        Value::Object(self.fields.clone())
    }
}

impl From<Map<String, Value>> for Frontmatter {
    fn from(fields: Map<String, Value>) -> Self {
        Frontmatter { fields }
    }
}

/// A strategy for turning a frontmatter block into a [`Frontmatter`] mapping.
///
/// # Implementing a custom parser
///
/// ```rust,ignore
/// use validate_frontmatter::parser::{Frontmatter, FrontmatterParser};
///
/// pub struct TomlParser;
///
/// impl FrontmatterParser for TomlParser {
///     fn name(&self) -> &'static str { "toml" }
///     fn description(&self) -> &'static str { "TOML frontmatter" }
///     fn is_available(&self) -> bool { true }
///     fn parse(&self, block: &str) -> Result<Frontmatter> {
///         // ... parsing logic ...
///         # todo!()
///     }
/// }
/// ```
pub trait FrontmatterParser {
    /// Returns the parser's identifier (e.g. `"yaml"`, `"builtin"`).
    fn name(&self) -> &'static str;

    /// Returns a short, human-readable description of the parser.
    fn description(&self) -> &'static str;

    /// Returns `true` if the parser's engine is compiled into this build.
    fn is_available(&self) -> bool;

    /// Parses an extracted frontmatter block.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`](crate::error::Error::Parse) when the engine
    /// rejects the block or is not available.
    fn parse(&self, block: &str) -> Result<Frontmatter>;
}

/// Which parser the validator should use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParserEngine {
    /// Prefer the YAML engine when compiled in, else the builtin parser.
    #[default]
    Auto,
    /// Request the YAML engine explicitly; warns when it is unavailable.
    Yaml,
    /// Always use the builtin line-oriented parser.
    Builtin,
}

/// Returns every registered parser, preferred first.
pub fn all_parsers() -> Vec<Box<dyn FrontmatterParser>> {
    vec![Box::new(yaml::YamlParser), Box::new(line::LineParser)]
}

/// Probes parser availability and returns the one to use for `engine`.
///
/// # Examples
///
/// ```
/// use validate_frontmatter::parser::{select, ParserEngine};
///
/// assert_eq!(select(ParserEngine::Builtin).name(), "builtin");
/// ```
pub fn select(engine: ParserEngine) -> Box<dyn FrontmatterParser> {
    if engine == ParserEngine::Builtin {
        return Box::new(line::LineParser);
    }

    let yaml = yaml::YamlParser;
    if yaml.is_available() {
        return Box::new(yaml);
    }

    if engine == ParserEngine::Yaml {
        tracing::warn!("yaml parser requested but not compiled in; using builtin parser");
    }
    Box::new(line::LineParser)
}

/// Result of [`parse_with_fallback`]: the mapping and the parser that produced it.
#[derive(Debug, Clone)]
pub struct Parsed {
    pub frontmatter: Frontmatter,
    pub parser: &'static str,
}

/// Parses `block` with `parser`, falling back to the line parser on failure.
///
/// Engine failures are logged at debug level and never reported as a
/// validation failure.
pub fn parse_with_fallback(parser: &dyn FrontmatterParser, block: &str) -> Parsed {
    match parser.parse(block) {
        Ok(frontmatter) => Parsed {
            frontmatter,
            parser: parser.name(),
        },
        Err(e) => {
            tracing::debug!(error = %e, "falling back to builtin parser");
            let fallback = line::LineParser;
            Parsed {
                frontmatter: fallback.parse_block(block),
                parser: fallback.name(),
            }
        }
    }
}
