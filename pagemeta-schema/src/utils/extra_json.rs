//! Free-form JSON-LD fragment merging.

use serde_json::{Map, Value};

/// Merges the keys of a free-form JSON object string into `target`.
///
/// Keys from `raw` are inserted last and override existing keys on
/// collision; the free-form field is the author's escape hatch and
/// always wins. Malformed input, and input that is valid JSON but not
/// an object, are logged at `warn` and leave `target` unchanged.
pub fn merge_into(target: &mut Map<String, Value>, raw: &str) {
    if raw.trim().is_empty() {
        return;
    }
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(extra)) => {
            for (key, value) in extra {
                target.insert(key, value);
            }
        }
        Ok(other) => {
            log::warn!(
                "Ignoring extra JSON fragment: expected an object, got {}",
                kind_of(&other)
            );
        }
        Err(e) => {
            log::warn!("Ignoring malformed extra JSON fragment: {e}");
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
