//! Submission snapshot, synthetic response, and overlay formatting.

#[cfg(test)]
#[path = "response_test.rs"]
mod response_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::consts::{ERRORS_FIELD_NAME, HEADING_FAILURE, HEADING_SUCCESS, SUBMIT_SUCCESS_MESSAGE, TIMESTAMP_KEY};

/// Named form values captured at submit time, plus a timestamp.
///
/// Keys keep form order; a repeated name overwrites the earlier value in
/// place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormDataSnapshot(Map<String, Value>);

impl FormDataSnapshot {
    /// Build a snapshot from `(name, value)` entries and an ISO-8601 timestamp.
    pub fn capture<I, K, V>(entries: I, timestamp: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut map = Map::new();
        for (key, value) in entries {
            map.insert(key.into(), Value::String(value.into()));
        }
        map.insert(TIMESTAMP_KEY.to_owned(), Value::String(timestamp.into()));
        Self(map)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

/// Server-shaped response: `{success, message, data}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: String,
    pub data: Value,
}

impl SubmitResponse {
    /// The response the simulated server always returns.
    #[must_use]
    pub fn success(snapshot: FormDataSnapshot) -> Self {
        Self { success: true, message: SUBMIT_SUCCESS_MESSAGE.to_owned(), data: snapshot.into_value() }
    }

    #[must_use]
    pub fn heading(&self) -> &'static str {
        if self.success { HEADING_SUCCESS } else { HEADING_FAILURE }
    }
}

/// Pretty-print response data for the overlay.
///
/// A string payload is decoded as JSON first, and a non-empty string
/// `form-errors` member is decoded too. Either decode is best effort: a
/// failure is logged and the less-decoded value is shown instead.
#[must_use]
pub fn format_response_data(data: &Value) -> String {
    let parsed = match data {
        Value::String(raw) => match serde_json::from_str::<Value>(raw) {
            Ok(value) => value,
            Err(err) => {
                log::error!("error parsing form response: {err}");
                return pretty(data);
            }
        },
        other => other.clone(),
    };
    pretty(&decode_form_errors(parsed))
}

fn decode_form_errors(mut parsed: Value) -> Value {
    if let Some(Value::String(raw)) = parsed.get(ERRORS_FIELD_NAME) {
        if !raw.is_empty() {
            match serde_json::from_str::<Value>(raw) {
                Ok(decoded) => {
                    if let Some(obj) = parsed.as_object_mut() {
                        obj.insert(ERRORS_FIELD_NAME.to_owned(), decoded);
                    }
                }
                Err(err) => log::error!("error parsing form-errors: {err}"),
            }
        }
    }
    parsed
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|err| {
        log::error!("error formatting response data: {err}");
        value.to_string()
    })
}
