//! Builtin line-oriented frontmatter parser.
//!
//! Understands the small subset of YAML that frontmatter blocks actually
//! use: top-level `key: value` pairs, optionally quoted, and `|` / `>` block
//! scalars made of indented continuation lines. Anything else is skipped.

use super::{Frontmatter, FrontmatterParser};
use crate::error::Result;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// Top-level `key: value` line.
static RE_KEY_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9_-]+):\s*(.*)$").unwrap());

/// Parser with no external engine. Always available and never fails.
pub struct LineParser;

impl LineParser {
    /// Parses `block` into a mapping. Lines that are not `key: value`
    /// pairs are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use validate_frontmatter::parser::line::LineParser;
    ///
    /// let fm = LineParser.parse_block("name: 'my-skill'\ndescription: |\n  line one\n  line two");
    /// assert_eq!(fm.field_text("name").as_deref(), Some("my-skill"));
    /// assert_eq!(fm.field_text("description").as_deref(), Some("line one\nline two"));
    /// ```
    pub fn parse_block(&self, block: &str) -> Frontmatter {
        let mut fm = Frontmatter::new();
        let mut lines = block.lines().peekable();

        while let Some(line) = lines.next() {
            if line.trim().is_empty() {
                continue;
            }
            let Some(caps) = RE_KEY_VALUE.captures(line) else {
                continue;
            };
            let key = &caps[1];
            let raw = caps.get(2).map_or("", |m| m.as_str());

            if is_block_marker(raw) {
                let mut collected: Vec<&str> = Vec::new();
                while let Some(next) = lines.next_if(|l| l.starts_with([' ', '\t'])) {
                    collected.push(next.trim_start());
                }
                let text = collected.join("\n");
                fm.insert(key, Value::String(text.trim().to_string()));
                continue;
            }

            fm.insert(key, Value::String(unquote(raw.trim()).to_string()));
        }

        fm
    }
}

impl FrontmatterParser for LineParser {
    fn name(&self) -> &'static str {
        "builtin"
    }

    fn description(&self) -> &'static str {
        "Line-oriented key: value parser with block scalar support"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn parse(&self, block: &str) -> Result<Frontmatter> {
        Ok(self.parse_block(block))
    }
}

/// `|` and `>` introduce an indented multi-line value.
fn is_block_marker(raw: &str) -> bool {
    matches!(raw.trim_end(), "|" | ">")
}

/// Strips one layer of matching double or single quotes.
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
