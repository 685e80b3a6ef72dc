//! Decode and encode configs for each [`Format`].
//!
//! Layout parameters are fixed: JSON is pretty-printed with [`JSON_INDENT`],
//! YAML uses the serde_yaml block layout (two-space mappings, block
//! sequences). Both outputs end with a newline.

use super::Format;
use crate::config::{Config, into_config};
use crate::error::{ConfigenError, Result};
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;
use std::path::Path;
use tracing::debug;

/// Indentation used for every nesting level of written JSON.
pub const JSON_INDENT: &[u8] = b"    ";

/// Origin label used in errors for input that did not come from a file.
const IN_MEMORY: &str = "<memory>";

impl Format {
    /// Decode a document held in memory.
    pub fn decode(&self, input: &[u8]) -> Result<Config> {
        self.decode_named(input, IN_MEMORY)
    }

    /// Read and decode a config file.
    ///
    /// A missing file is `NotFound`; a syntax error is `MalformedInput`
    /// carrying the file path.
    pub fn read_file(&self, path: &Path) -> Result<Config> {
        let bytes = std::fs::read(path).map_err(|e| ConfigenError::from_io(path, e))?;

        debug!(path = %path.display(), format = %self, bytes = bytes.len(), "decoding file");
        self.decode_named(&bytes, &path.display().to_string())
    }

    /// Encode any serializable value in this format.
    ///
    /// Serializer failures (a non-string map key in JSON, a value whose
    /// `Serialize` impl errors) become `UnsupportedValue`.
    pub fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        match self {
            Format::Json => encode_json(value),
            Format::Yaml => serde_yaml::to_string(value).map_err(|e| self.unsupported(e)),
        }
    }

    fn decode_named(&self, input: &[u8], origin: &str) -> Result<Config> {
        let value = match self {
            Format::Json => serde_json::from_slice::<Value>(input)
                .map_err(|e| malformed(origin, e.to_string()))?,
            Format::Yaml => decode_yaml(input, origin)?,
        };
        into_config(value, origin)
    }

    fn unsupported(&self, err: impl std::fmt::Display) -> ConfigenError {
        ConfigenError::UnsupportedValue {
            format: *self,
            message: err.to_string(),
        }
    }
}

fn encode_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| Format::Json.unsupported(e))?;
    buf.push(b'\n');

    String::from_utf8(buf).map_err(|e| Format::Json.unsupported(e))
}

/// YAML goes through `serde_yaml::Value` first so merge keys (`<<: *anchor`)
/// are resolved before the document is turned into a [`Config`].
fn decode_yaml(input: &[u8], origin: &str) -> Result<Value> {
    let mut document: serde_yaml::Value =
        serde_yaml::from_slice(input).map_err(|e| malformed(origin, e.to_string()))?;
    document
        .apply_merge()
        .map_err(|e| malformed(origin, e.to_string()))?;
    check_yaml(&document, "").map_err(|message| malformed(origin, message))?;

    serde_json::to_value(&document)
        .map_err(|e| malformed(origin, format!("unsupported YAML structure: {}", e)))
}

/// Reject YAML that would not survive conversion to the JSON data model:
/// `.nan`/`.inf` numbers (serde_json turns them into null) and mapping keys
/// that are not scalars.
fn check_yaml(value: &serde_yaml::Value, at: &str) -> std::result::Result<(), String> {
    use serde_yaml::Value as Yaml;

    match value {
        Yaml::Number(n) if !is_finite(n) => {
            Err(format!("non-finite number {} at '{}'", n, location(at)))
        }
        Yaml::Sequence(items) => items
            .iter()
            .enumerate()
            .try_for_each(|(i, item)| check_yaml(item, &format!("{}[{}]", at, i))),
        Yaml::Mapping(mapping) => mapping.iter().try_for_each(|(key, item)| {
            let key = match key {
                Yaml::String(s) => s.clone(),
                Yaml::Bool(b) => b.to_string(),
                Yaml::Number(n) if is_finite(n) => n.to_string(),
                Yaml::Null => {
                    return Err(format!("null mapping key at '{}'", location(at)));
                }
                _ => {
                    return Err(format!(
                        "mapping key at '{}' must be a string, number or boolean",
                        location(at)
                    ));
                }
            };
            let nested = if at.is_empty() {
                key
            } else {
                format!("{}.{}", at, key)
            };
            check_yaml(item, &nested)
        }),
        Yaml::Tagged(tagged) => check_yaml(&tagged.value, at),
        _ => Ok(()),
    }
}

fn is_finite(n: &serde_yaml::Number) -> bool {
    !(n.is_nan() || n.is_infinite())
}

fn location(at: &str) -> &str {
    if at.is_empty() { "<root>" } else { at }
}

fn malformed(origin: &str, message: String) -> ConfigenError {
    ConfigenError::MalformedInput {
        path: origin.to_string(),
        message,
    }
}
