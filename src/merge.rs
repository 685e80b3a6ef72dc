//! Deep merge of configs.
//!
//! For every key of the incoming config:
//! - absent in the base: inserted as is
//! - a mapping on both sides: merged recursively
//! - anything else: the incoming value replaces the base value
//!
//! Sequences are replaced, never concatenated.

use crate::config::Config;
use serde_json::Value;

/// Merge `incoming` into `base` and return the result.
///
/// Both arguments are taken by value; `base` is reused as the output
/// allocation, so the caller's copy is consumed rather than aliased.
pub fn merge(mut base: Config, incoming: Config) -> Config {
    merge_into(&mut base, incoming);
    base
}

/// In-place form of [`merge`]: `base` is updated with `incoming`.
pub fn merge_into(base: &mut Config, incoming: Config) {
    for (key, value) in incoming {
        match value {
            Value::Object(nested) => {
                if let Some(Value::Object(existing)) = base.get_mut(&key) {
                    merge_into(existing, nested);
                } else {
                    base.insert(key, Value::Object(nested));
                }
            }
            other => {
                base.insert(key, other);
            }
        }
    }
}
