use crate::extract::ExtractError;
use crate::record::types::{Field, LineOutcome, ParsedRequest, RecordError, RecordSchema};
use serde_json::Value;

impl RecordSchema {
    /// Turns one raw line into a request.
    ///
    /// Lines that do not start with `{` are skipped without decoding. A line
    /// that starts like JSON but fails to decode is treated as an empty
    /// document, so it fails on the first field lookup.
    pub fn parse_line(&self, line: &[u8]) -> Result<LineOutcome, RecordError> {
        if line.first() != Some(&b'{') {
            return Ok(LineOutcome::NotJson);
        }

        let document = serde_json::from_slice::<Value>(line).unwrap_or(Value::Null);

        self.extract(&document).map(LineOutcome::Request)
    }

    /// Extracts duration, uri, method and timestamp, in that order.
    pub fn extract(&self, document: &Value) -> Result<ParsedRequest, RecordError> {
        let duration_ms = self
            .duration
            .number(document)
            .map_err(at(Field::Duration))?;
        let uri = self.uri.string(document).map_err(at(Field::Uri))?;
        let method = self.method.string(document).map_err(at(Field::Method))?;
        let timestamp = self
            .timestamp
            .timestamp(document)
            .map_err(at(Field::Timestamp))?;

        Ok(ParsedRequest {
            duration_ms,
            uri,
            method,
            timestamp,
        })
    }
}

fn at(field: Field) -> impl Fn(ExtractError) -> RecordError {
    move |source| RecordError { field, source }
}
