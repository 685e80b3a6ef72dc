//! The in-memory config model.
//!
//! A [`Config`] is a string-keyed mapping whose values are scalars,
//! sequences or nested mappings. Key order follows insertion order so that
//! written files keep the order in which keys were read.

use crate::error::{ConfigenError, Result};
use serde_json::{Map, Value};

/// A nested mapping of configuration values.
pub type Config = Map<String, Value>;

/// Coerce a decoded document into a [`Config`].
///
/// `null` (an empty YAML document) becomes an empty mapping. Any other
/// non-mapping root is rejected with `ConfigType`.
pub fn into_config(value: Value, origin: &str) -> Result<Config> {
    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Config::new()),
        other => Err(ConfigenError::ConfigType(format!(
            "expected a mapping at the root of '{}', found {}",
            origin,
            kind_of(&other)
        ))),
    }
}

/// Parse a JSON object literal (as passed to `--append`) into a [`Config`].
pub fn parse_inline_json(input: &str) -> Result<Config> {
    let value: Value =
        serde_json::from_str(input).map_err(|e| ConfigenError::MalformedInput {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(ConfigenError::ConfigType(format!(
            "expected a JSON object, found {}",
            kind_of(&other)
        ))),
    }
}

/// Human-readable name of a value's type, used in error messages.
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
