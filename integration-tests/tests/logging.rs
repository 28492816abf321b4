use integration_tests::harness::{CapturedEvent, capture_events};
use pipelog_core::conf::PipelogConfig;
use pretty_assertions::assert_eq;
use tracing::Level;

mod common;

fn with_message<'a>(events: &'a [CapturedEvent], message: &str) -> Vec<&'a CapturedEvent> {
    events
        .iter()
        .filter(|e| e.message() == Some(message))
        .collect()
}

#[test]
fn skipped_records_are_logged_at_debug() {
    // Arrange
    let config = PipelogConfig::default();

    // Act
    let (_, events) = capture_events(|| common::analyze("two_days.ndjson", &config));

    // Assert
    let skipped = with_message(&events, "record skipped");
    let lines: Vec<_> = skipped.iter().filter_map(|e| e.field("line")).collect();
    let fields: Vec<_> = skipped.iter().filter_map(|e| e.field("field")).collect();

    assert_eq!(lines, vec!["6", "9", "10"]);
    assert_eq!(fields, vec!["duration", "duration", "timestamp"]);
    assert!(skipped.iter().all(|e| e.level == Level::DEBUG));
    assert!(skipped.iter().all(|e| e.target.starts_with("pipelog_core")));
}

#[test]
fn rejected_records_raise_one_warning() {
    let config = PipelogConfig::default();

    let (_, events) = capture_events(|| common::analyze("two_days.ndjson", &config));

    let warnings: Vec<_> = events.iter().filter(|e| e.level == Level::WARN).collect();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].field("rejected"), Some("3"));
}

#[test]
fn clean_input_does_not_warn() {
    let config = PipelogConfig::default();

    let (analysis, events) = capture_events(|| common::analyze("uuid_paths.ndjson", &config));

    assert_eq!(analysis.stats.rejected, 0);
    assert!(events.iter().all(|e| e.level != Level::WARN));

    let consumed = with_message(&events, "input consumed");
    assert_eq!(consumed.len(), 1);
    assert_eq!(consumed[0].field("parsed"), Some("4"));
}
