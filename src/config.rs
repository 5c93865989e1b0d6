//! Configuration loading.
//!
//! The default configuration file is `validate-frontmatter.toml` in the
//! current working directory. Every field has a default, so the file can be
//! omitted entirely.
//!
//! ```toml
//! [parser]
//! engine = "auto"        # "auto" | "yaml" | "builtin"
//!
//! [schema]
//! enabled = true
//! dir = "schemas"
//! agent = "agent.schema.json"
//! skill = "skill.schema.json"
//! ```

use crate::error::{Error, Result};
use crate::parser::ParserEngine;
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "validate-frontmatter.toml";

/// Main configuration for the validator.
///
/// # Examples
///
/// ```rust,no_run
/// use validate_frontmatter::config::Config;
///
/// // Load from the default location or fall back to built-in defaults.
/// let config = Config::load(None).unwrap();
/// ```
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Config {
    /// Frontmatter parser selection.
    pub parser: ParserConfig,
    /// JSON Schema lookup.
    pub schema: SchemaConfig,
}

/// Parser selection.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct ParserConfig {
    pub engine: ParserEngine,
}

/// Where schema documents live and what they are called.
///
/// A file whose path contains an `agents` component is checked against
/// [`agent`](SchemaConfig::agent); everything else against
/// [`skill`](SchemaConfig::skill).
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct SchemaConfig {
    /// Set to `false` to always run basic validation.
    pub enabled: bool,
    /// Directory holding the schema documents, relative to the working directory.
    pub dir: PathBuf,
    /// File name of the agent schema.
    pub agent: String,
    /// File name of the skill schema.
    pub skill: String,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        SchemaConfig {
            enabled: true,
            dir: PathBuf::from("schemas"),
            agent: crate::schema::AGENT_SCHEMA.to_string(),
            skill: crate::schema::SKILL_SCHEMA.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// Resolution order:
    /// 1. If `path` is `Some`, load from that file (error if missing).
    /// 2. If `path` is `None`, try [`DEFAULT_CONFIG_FILE`] in the current directory.
    /// 3. If that file does not exist either, return [`Config::default()`].
    ///
    /// # Errors
    ///
    /// - [`Error::ConfigNotFound`] when the explicit path does not exist.
    /// - [`Error::Read`] when the file cannot be read.
    /// - [`Error::ConfigParse`] when the TOML content is invalid.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let config_path = match path {
            Some(p) if p.exists() => Some(p.to_path_buf()),
            Some(p) => return Err(Error::ConfigNotFound(p.to_path_buf())),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                default_path.exists().then(|| default_path.to_path_buf())
            }
        };

        match config_path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config");
                let content = std::fs::read_to_string(&path).map_err(|source| Error::Read {
                    path: path.clone(),
                    source,
                })?;
                Config::from_toml(&content).map_err(|source| Error::ConfigParse { path, source })
            }
            None => Ok(Config::default()),
        }
    }

    /// Parses configuration from TOML text.
    ///
    /// ```
    /// use validate_frontmatter::config::Config;
    /// use validate_frontmatter::parser::ParserEngine;
    ///
    /// let config = Config::from_toml("[parser]\nengine = \"builtin\"\n").unwrap();
    /// assert_eq!(config.parser.engine, ParserEngine::Builtin);
    /// assert!(config.schema.enabled);
    /// ```
    pub fn from_toml(content: &str) -> std::result::Result<Config, toml::de::Error> {
        toml::from_str(content)
    }
}
