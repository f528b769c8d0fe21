//! YAML-to-JSON document normalization.
//!
//! YAML mappings may be keyed by any scalar; JSON objects are keyed by text.
//! [`normalize`] walks a decoded YAML tree and produces a JSON tree whose
//! mappings are string-keyed by construction.

use serde_json::Value as JsonValue;
use serde_yaml_ng::Value as YamlValue;

use crate::{MocktailError, Result};

/// How to handle mapping keys that are not already text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyPolicy {
    /// Drop entries whose key is not a YAML string (the historical behavior).
    #[default]
    Drop,
    /// Render boolean and numeric keys to their text form; null and
    /// composite keys are still dropped.
    Stringify,
}

/// Normalize a YAML document into a string-keyed JSON document using
/// [`KeyPolicy::Drop`].
pub fn normalize(doc: &YamlValue) -> Result<JsonValue> {
    normalize_with(doc, KeyPolicy::Drop)
}

/// Normalize a YAML document into a string-keyed JSON document.
///
/// Sequences keep their order and length. Dropped mapping entries are not an
/// error. Single pass over the tree.
pub fn normalize_with(doc: &YamlValue, policy: KeyPolicy) -> Result<JsonValue> {
    Ok(match doc {
        YamlValue::Null => JsonValue::Null,
        YamlValue::Bool(b) => JsonValue::Bool(*b),
        YamlValue::Number(n) => JsonValue::Number(number_to_json(n)?),
        YamlValue::String(s) => JsonValue::String(s.clone()),
        YamlValue::Sequence(seq) => JsonValue::Array(
            seq.iter()
                .map(|v| normalize_with(v, policy))
                .collect::<Result<Vec<_>>>()?,
        ),
        YamlValue::Mapping(map) => {
            let mut object = serde_json::Map::new();
            for (key, value) in map {
                if let Some(key) = coerce_key(key, policy) {
                    object.insert(key, normalize_with(value, policy)?);
                }
            }
            JsonValue::Object(object)
        }
        // Tags carry no JSON meaning; normalize the value they wrap.
        YamlValue::Tagged(tagged) => normalize_with(&tagged.value, policy)?,
    })
}

fn coerce_key(key: &YamlValue, policy: KeyPolicy) -> Option<String> {
    match (key, policy) {
        (YamlValue::String(s), _) => Some(s.clone()),
        (YamlValue::Bool(b), KeyPolicy::Stringify) => Some(b.to_string()),
        (YamlValue::Number(n), KeyPolicy::Stringify) => Some(n.to_string()),
        _ => None,
    }
}

fn number_to_json(n: &serde_yaml_ng::Number) -> Result<serde_json::Number> {
    if let Some(i) = n.as_i64() {
        Ok(i.into())
    } else if let Some(u) = n.as_u64() {
        Ok(u.into())
    } else {
        let f = n.as_f64().ok_or(MocktailError::NonFiniteNumber)?;
        serde_json::Number::from_f64(f).ok_or(MocktailError::NonFiniteNumber)
    }
}
