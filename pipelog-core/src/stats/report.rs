use crate::stats::samples::DurationSamples;
use crate::stats::summary::{Summary, summarize};
use serde::Serialize;

/// Summary of one group, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatLine {
    pub key: String,
    #[serde(flatten)]
    pub summary: Summary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOrder {
    /// Ascending by key.
    ByKey,
    /// Descending by request count, ties ascending by key.
    ByRequestCount,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub title: String,
    pub rows: Vec<StatLine>,
}

/// Summarizes every group, orders the rows and keeps at most `limit` of them.
/// A limit of 0 keeps every row.
pub fn build_report(
    title: &str,
    samples: &DurationSamples,
    order: RowOrder,
    limit: usize,
) -> Report {
    let mut rows: Vec<StatLine> = samples
        .iter()
        .filter_map(|(key, durations)| {
            summarize(durations).map(|summary| StatLine {
                key: key.to_string(),
                summary,
            })
        })
        .collect();

    match order {
        RowOrder::ByKey => rows.sort_by(|a, b| a.key.cmp(&b.key)),
        RowOrder::ByRequestCount => rows.sort_by(|a, b| {
            b.summary
                .count
                .cmp(&a.summary.count)
                .then_with(|| a.key.cmp(&b.key))
        }),
    }

    if limit > 0 {
        rows.truncate(limit);
    }

    Report {
        title: title.to_string(),
        rows,
    }
}
