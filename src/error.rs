//! Error types shared across the crate.
//!
//! Content problems in a frontmatter block are never errors: they become
//! failed checks in a [`ValidationReport`](crate::report::ValidationReport).
//! The variants below cover the cases where validation cannot run at all.

use std::path::PathBuf;

/// Errors raised while loading inputs or configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The target Markdown file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// File that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// An explicitly requested configuration file does not exist.
    #[error("config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// The configuration file is not valid TOML for [`Config`](crate::config::Config).
    #[error("failed to parse config {}: {source}", .path.display())]
    ConfigParse {
        /// Configuration file path.
        path: PathBuf,
        /// TOML deserialization error.
        source: toml::de::Error,
    },

    /// A schema document exists but could not be read or decoded.
    #[error("schema load error for '{}': {reason}", .path.display())]
    SchemaLoad {
        /// Schema file path.
        path: PathBuf,
        /// Reason the schema could not be loaded.
        reason: String,
    },

    /// A parser engine rejected the frontmatter block.
    #[error("{engine} parser failed: {reason}")]
    Parse {
        /// Name of the parser that failed.
        engine: &'static str,
        /// Engine-specific failure description.
        reason: String,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
