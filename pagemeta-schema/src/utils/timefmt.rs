//! Time-of-day serialization/deserialization helpers.
//!
//! Provides custom Serde serialization/deserialization support:
//! - Serialization: `NaiveTime` -> `"HH:MM"` string
//! - Deserialization: `"HH:MM"` or `"HH:MM:SS"` string -> `NaiveTime`

use chrono::NaiveTime;
use serde::{Deserialize, Deserializer, Serializer};

/// Serializes a `NaiveTime` as an `"HH:MM"` string.
pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&time.format("%H:%M").to_string())
}

/// Deserializes a `NaiveTime` from `"HH:MM"` or `"HH:MM:SS"`.
pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let s = String::deserialize(deserializer)?;
    NaiveTime::parse_from_str(&s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(&s, "%H:%M:%S"))
        .map_err(|e| Error::custom(format!("Invalid time of day '{s}': {e}")))
}
