//! Structured-data value blocks.
//!
//! [`OpenHours`] and [`StructuredDataAction`] are the repeating value
//! blocks a page stores alongside its organization markup. Each block
//! renders itself into the JSON-LD value tree via `to_schema_value`.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::types::{ACTION_PLATFORMS, ActionType, ReservationType, Weekday};
use crate::utils::extra_json;

// ============ Open Hours ============

/// Business open-hours entry: a set of weekdays plus a time range.
///
/// Days are drawn from the fixed seven-value [`Weekday`] set. The time
/// pair is intentionally not validated as ordered: for late-night
/// hours past 23:59, define each day in a separate entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenHours {
    /// Days this time range applies to.
    pub days: Vec<Weekday>,
    /// Opening time.
    #[serde(with = "crate::utils::timefmt")]
    pub start_time: NaiveTime,
    /// Closing time.
    #[serde(with = "crate::utils::timefmt")]
    pub end_time: NaiveTime,
}

impl OpenHours {
    /// Creates an entry covering `days` with the given time range.
    #[must_use]
    pub fn new(days: Vec<Weekday>, start_time: NaiveTime, end_time: NaiveTime) -> Self {
        Self {
            days,
            start_time,
            end_time,
        }
    }

    /// Renders the entry as a schema.org `openingHours` string, e.g.
    /// `"Monday,Tuesday 09:00-17:00"`.
    #[must_use]
    pub fn to_schema_value(&self) -> Value {
        let days: Vec<&str> = self.days.iter().map(Weekday::as_str).collect();
        Value::String(format!(
            "{} {}-{}",
            days.join(","),
            self.start_time.format("%H:%M"),
            self.end_time.format("%H:%M"),
        ))
    }
}

// ============ Actions ============

/// schema.org Action block attached to a page's organization markup.
///
/// If the action is offered in multiple languages, create a separate
/// action per language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredDataAction {
    /// Action type from the fixed schema.org vocabulary.
    pub action_type: ActionType,
    /// Target URL the action is performed against.
    pub target: String,
    /// Language tag of the action target.
    #[serde(default = "default_language")]
    pub language: String,
    /// Result type. Left blank for `OrderAction` by convention.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_type: Option<ReservationType>,
    /// Human-readable result name, e.g. `"Reserve a table"`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub result_name: String,
    /// Additional JSON-LD merged into the Action mapping. Must be
    /// properties of schema.org/Action.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub extra_json: String,
}

fn default_language() -> String {
    "en-US".to_string()
}

impl StructuredDataAction {
    /// Creates an action with the default language and no result.
    #[must_use]
    pub fn new(action_type: ActionType, target: impl Into<String>) -> Self {
        Self {
            action_type,
            target: target.into(),
            language: default_language(),
            result_type: None,
            result_name: String::new(),
            extra_json: String::new(),
        }
    }

    /// Builds the schema.org Action mapping for this block.
    ///
    /// The target becomes an `EntryPoint` sub-mapping carrying the
    /// URL template, language, and supported action platforms. The
    /// `result` sub-mapping is present only when a result type is set.
    /// `extra_json` keys merge last and override the structured fields
    /// on collision; malformed fragments are logged and skipped.
    #[must_use]
    pub fn to_schema_value(&self) -> Value {
        let mut map = Map::new();
        map.insert("@type".to_string(), json!(self.action_type.as_str()));
        map.insert(
            "target".to_string(),
            json!({
                "@type": "EntryPoint",
                "urlTemplate": self.target,
                "inLanguage": self.language,
                "actionPlatform": ACTION_PLATFORMS,
            }),
        );
        if let Some(result_type) = self.result_type {
            let mut result = Map::new();
            result.insert("@type".to_string(), json!(result_type.as_str()));
            if !self.result_name.trim().is_empty() {
                result.insert("name".to_string(), json!(self.result_name));
            }
            map.insert("result".to_string(), Value::Object(result));
        }
        extra_json::merge_into(&mut map, &self.extra_json);
        Value::Object(map)
    }
}
