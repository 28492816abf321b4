use crate::extract::{ExtractError, FieldPath};
use chrono::{DateTime, FixedOffset};
use std::fmt;
use thiserror::Error;

/// The four fields pulled out of every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Duration,
    Uri,
    Method,
    Timestamp,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Duration => "duration",
            Field::Uri => "uri",
            Field::Method => "method",
            Field::Timestamp => "timestamp",
        })
    }
}

/// Compiled field paths for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSchema {
    pub duration: FieldPath,
    pub uri: FieldPath,
    pub method: FieldPath,
    pub timestamp: FieldPath,
}

/// One fully extracted request. Only built when every field was extracted.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRequest {
    pub duration_ms: f64,
    pub uri: String,
    pub method: String,
    pub timestamp: DateTime<FixedOffset>,
}

/// Result of looking at one input line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    Request(ParsedRequest),
    /// The line does not start with `{` and was not decoded.
    NotJson,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to extract {field}: {source}")]
pub struct RecordError {
    pub field: Field,
    #[source]
    pub source: ExtractError,
}

impl RecordError {
    pub fn is_path_not_found(&self) -> bool {
        matches!(self.source, ExtractError::PathNotFound { .. })
    }

    pub fn is_type_mismatch(&self) -> bool {
        matches!(self.source, ExtractError::TypeMismatch { .. })
    }
}
