use crate::extract::error::ExtractError;
use crate::extract::path::FieldPath;
use chrono::{DateTime, FixedOffset};
use serde_json::Value;

impl FieldPath {
    /// Numeric field. Log producers emit durations both as JSON numbers and as
    /// numeric strings, so both are accepted.
    pub fn number(&self, document: &Value) -> Result<f64, ExtractError> {
        let value = self.resolve(document)?;

        let number = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.parse::<f64>().ok(),
            _ => None,
        };

        match number {
            Some(n) if n.is_finite() => Ok(n),
            _ => Err(ExtractError::mismatch(
                self.as_str(),
                "a number",
                describe(value),
            )),
        }
    }

    /// String field. No conversion from other JSON types is attempted.
    pub fn string(&self, document: &Value) -> Result<String, ExtractError> {
        match self.resolve(document)? {
            Value::String(s) => Ok(s.clone()),
            other => Err(ExtractError::mismatch(
                self.as_str(),
                "a string",
                describe(other),
            )),
        }
    }

    /// RFC 3339 timestamp field. The offset written in the record is kept.
    /// A space or a lowercase `t` is accepted as the date/time separator.
    pub fn timestamp(&self, document: &Value) -> Result<DateTime<FixedOffset>, ExtractError> {
        let value = self.resolve(document)?;

        value
            .as_str()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .ok_or_else(|| {
                ExtractError::mismatch(self.as_str(), "an RFC 3339 timestamp", describe(value))
            })
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean {b}"),
        Value::Number(n) => format!("number {n}"),
        Value::String(s) => format!("string {s:?}"),
        Value::Array(_) => "an array".to_string(),
        Value::Object(_) => "an object".to_string(),
    }
}
