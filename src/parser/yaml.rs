//! Full YAML frontmatter parser backed by [serde_yaml].
//!
//! Only compiled with the `yaml` cargo feature. Without it the parser still
//! exists but reports itself unavailable, so [`select`](super::select)
//! never picks it.
//!
//! [serde_yaml]: https://docs.rs/serde_yaml

use super::{Frontmatter, FrontmatterParser};
use crate::error::{Error, Result};

/// Parser that delegates to a complete YAML implementation.
pub struct YamlParser;

impl FrontmatterParser for YamlParser {
    fn name(&self) -> &'static str {
        "yaml"
    }

    fn description(&self) -> &'static str {
        "Full YAML parser (serde_yaml)"
    }

    fn is_available(&self) -> bool {
        cfg!(feature = "yaml")
    }

    /// Parses `block` as YAML.
    ///
    /// A document that is not a mapping (a scalar, a sequence, or nothing
    /// at all) yields an empty [`Frontmatter`].
    fn parse(&self, block: &str) -> Result<Frontmatter> {
        engine::parse(block)
    }
}

#[cfg(feature = "yaml")]
mod engine {
    use super::*;
    use serde_json::{Map, Value};
    use serde_yaml::Value as Yaml;

    pub(super) fn parse(block: &str) -> Result<Frontmatter> {
        if block.trim().is_empty() {
            return Ok(Frontmatter::new());
        }
        let doc: Yaml = serde_yaml::from_str(block).map_err(|e| Error::Parse {
            engine: "yaml",
            reason: e.to_string(),
        })?;

        match to_json(&doc).map_err(|reason| Error::Parse {
            engine: "yaml",
            reason,
        })? {
            Value::Object(map) => Ok(Frontmatter::from(map)),
            _ => Ok(Frontmatter::new()),
        }
    }

    /// Converts a YAML value tree into the equivalent JSON tree.
    ///
    /// Tags are dropped. Scalar mapping keys are stringified; sequence or
    /// mapping keys have no JSON form and are rejected.
    fn to_json(yaml: &Yaml) -> std::result::Result<Value, String> {
        match yaml {
            Yaml::Null => Ok(Value::Null),
            Yaml::Bool(b) => Ok(Value::Bool(*b)),
            Yaml::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Value::from(i))
                } else if let Some(u) = n.as_u64() {
                    Ok(Value::from(u))
                } else if let Some(f) = n.as_f64() {
                    serde_json::Number::from_f64(f)
                        .map(Value::Number)
                        .ok_or_else(|| format!("cannot represent float {f} in JSON"))
                } else {
                    Err(format!("unsupported YAML number: {n:?}"))
                }
            }
            Yaml::String(s) => Ok(Value::String(s.clone())),
            Yaml::Sequence(seq) => seq
                .iter()
                .map(to_json)
                .collect::<std::result::Result<Vec<_>, _>>()
                .map(Value::Array),
            Yaml::Mapping(mapping) => {
                let mut map = Map::new();
                for (k, v) in mapping {
                    let key = match k {
                        Yaml::String(s) => s.clone(),
                        Yaml::Number(n) => n.to_string(),
                        Yaml::Bool(b) => b.to_string(),
                        Yaml::Null => "null".to_string(),
                        other => return Err(format!("unsupported YAML map key: {other:?}")),
                    };
                    map.insert(key, to_json(v)?);
                }
                Ok(Value::Object(map))
            }
            Yaml::Tagged(tagged) => to_json(&tagged.value),
        }
    }

}

#[cfg(not(feature = "yaml"))]
mod engine {
    use super::*;

    pub(super) fn parse(_block: &str) -> Result<Frontmatter> {
        Err(Error::Parse {
            engine: "yaml",
            reason: "yaml engine not compiled in".to_string(),
        })
    }
}
