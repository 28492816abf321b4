use crate::extract::{ExtractError, FieldPath};
use crate::record::{Field, LineOutcome, ParsedRequest, RecordError, RecordSchema};
use chrono::DateTime;
use pretty_assertions::assert_eq;

fn schema() -> RecordSchema {
    RecordSchema {
        duration: FieldPath::parse("duration").unwrap(),
        uri: FieldPath::parse("uri").unwrap(),
        method: FieldPath::parse("method").unwrap(),
        timestamp: FieldPath::parse("time").unwrap(),
    }
}

fn parse(line: &str) -> Result<LineOutcome, RecordError> {
    schema().parse_line(line.as_bytes())
}

fn failed_field(line: &str) -> Field {
    parse(line).expect_err("expected extraction failure").field
}

#[test]
fn extracts_a_complete_record() {
    // Arrange
    let line = r#"{"duration": 12.5, "uri": "/a?b=1", "method": "GET", "time": "2024-01-02T03:04:05Z"}"#;

    // Act
    let outcome = parse(line).unwrap();

    // Assert
    assert_eq!(
        outcome,
        LineOutcome::Request(ParsedRequest {
            duration_ms: 12.5,
            uri: "/a?b=1".to_string(),
            method: "GET".to_string(),
            timestamp: DateTime::parse_from_rfc3339("2024-01-02T03:04:05Z").unwrap(),
        })
    );
}

#[test]
fn extracts_nested_fields_below_a_namespace() {
    // Arrange
    let schema = RecordSchema {
        duration: FieldPath::with_namespace("$.http", "latency").unwrap(),
        uri: FieldPath::with_namespace("$.http", "request.path").unwrap(),
        method: FieldPath::with_namespace("$.http", "request.method").unwrap(),
        timestamp: FieldPath::parse("$.ts").unwrap(),
    };
    let line = br#"{"ts": "2024-01-02T03:04:05Z", "http": {"latency": "7", "request": {"path": "/x", "method": "POST"}}}"#;

    // Act
    let outcome = schema.parse_line(line).unwrap();

    // Assert
    let req = match outcome {
        LineOutcome::Request(req) => req,
        other => panic!("expected a request, got {other:?}"),
    };
    assert_eq!(req.duration_ms, 7.0);
    assert_eq!(req.uri, "/x");
    assert_eq!(req.method, "POST");
}

#[test]
fn trailing_newline_is_tolerated() {
    let line = "{\"duration\": 1, \"uri\": \"/\", \"method\": \"GET\", \"time\": \"2024-01-02T03:04:05Z\"}\r\n";

    assert!(matches!(parse(line), Ok(LineOutcome::Request(_))));
}

#[test]
fn non_json_lines_are_skipped() {
    for line in ["not json", "", "\n", " {\"duration\": 1}", "[1, 2]", "2024-01-01 INFO started"] {
        assert_eq!(parse(line), Ok(LineOutcome::NotJson), "line {line:?}");
    }
}

#[test]
fn invalid_utf8_is_skipped_or_rejected_without_panicking() {
    let schema = schema();

    assert_eq!(schema.parse_line(&[0xff, 0xfe]), Ok(LineOutcome::NotJson));
    assert!(schema.parse_line(&[b'{', 0xff, b'}']).is_err());
}

#[test]
fn malformed_json_fails_with_path_not_found() {
    // Arrange
    let line = r#"{"duration": 12, "uri": "#;

    // Act
    let err = parse(line).unwrap_err();

    // Assert
    assert_eq!(err.field, Field::Duration);
    assert!(err.is_path_not_found());
}

#[test]
fn missing_duration_is_reported_first() {
    let line = r#"{"uri": 5, "method": "GET", "time": "2024-01-02T03:04:05Z"}"#;

    let err = parse(line).unwrap_err();

    assert_eq!(
        err,
        RecordError {
            field: Field::Duration,
            source: ExtractError::PathNotFound {
                path: "$.duration".to_string()
            },
        }
    );
}

#[test]
fn extraction_short_circuits_in_field_order() {
    assert_eq!(
        failed_field(r#"{"duration": 1, "uri": 5, "time": "bad"}"#),
        Field::Uri
    );
    assert_eq!(
        failed_field(r#"{"duration": 1, "uri": "/", "method": ["GET"], "time": "bad"}"#),
        Field::Method
    );
    assert_eq!(
        failed_field(r#"{"duration": 1, "uri": "/", "method": "GET", "time": "bad"}"#),
        Field::Timestamp
    );
}

#[test]
fn type_mismatch_is_classified() {
    let err = parse(r#"{"duration": "slow", "uri": "/", "method": "GET", "time": "2024-01-02T03:04:05Z"}"#)
        .unwrap_err();

    assert!(err.is_type_mismatch());
    assert!(!err.is_path_not_found());
    assert_eq!(
        err.to_string(),
        "failed to extract duration: value at $.duration is string \"slow\", expected a number"
    );
}
