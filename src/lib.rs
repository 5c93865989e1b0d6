//! # validate-frontmatter
//!
//! Validates the YAML frontmatter of agent and skill Markdown files.
//!
//! Every file must begin with a `---` delimited block carrying a
//! lowercase-kebab-case `name` and a non-empty `description`. When a JSON
//! Schema for the file's kind is available it is used instead of those two
//! hard-coded checks.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use validate_frontmatter::{config::Config, output, validate};
//!
//! let config = Config::load(None).expect("failed to load config");
//! let report = validate::validate_path(Path::new("skills/lint/SKILL.md"), &config)
//!     .expect("failed to read file");
//!
//! print!("{}", output::format_report(&report, &output::OutputFormat::Pretty));
//! std::process::exit(report.exit_code());
//! ```
//!
//! ## Architecture
//!
//! 1. **[`extract`]**: find the frontmatter block.
//! 2. **[`parser`]**: turn it into a [`parser::Frontmatter`] mapping with the
//!    YAML engine or the builtin line parser.
//! 3. **[`schema`]**: pick and run a JSON Schema, when one applies.
//! 4. **[`validate`]**: orchestrate the above and fall back to basic checks.
//! 5. **[`report`]** and **[`output`]**: collect checks and render them as
//!    plain text, JSON, or [SARIF].
//!
//! ## Cargo features
//!
//! | Feature | Default | Enables |
//! |---------|---------|---------|
//! | `yaml` | yes | full YAML parsing via `serde_yaml` |
//! | `schema` | yes | JSON Schema validation via `jsonschema` |
//!
//! Without either feature the tool still works: parsing uses the builtin
//! parser and validation runs in basic mode.
//!
//! [SARIF]: https://sarifweb.azurewebsites.net/

pub mod config;
pub mod error;
pub mod extract;
pub mod output;
pub mod parser;
pub mod report;
pub mod schema;
pub mod validate;

pub use error::{Error, Result};
