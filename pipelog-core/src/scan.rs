//! Input scanning
//!
//! Reads newline-delimited records one line at a time, hands every line to
//! the record parser and feeds the resulting requests to the aggregator.
//!
//! reader
//! RecordSchema::parse_line
//! ParsedRequest
//! Aggregator
//! Analysis
//! Reports
//!
//! A line that fails extraction is either skipped or, when the run is
//! configured to fail fast, returned to the caller as `ScanError::Record`.

use crate::conf::{PipelogConfig, ReportOptions};
use crate::record::{LineOutcome, RecordError};
use crate::stats::{Aggregator, Report, RowOrder, build_report};
use serde::Serialize;
use std::io::{self, BufRead};
use thiserror::Error;


pub const DAY_TITLE: &str = "Day";
pub const ENDPOINT_TITLE: &str = "URI";

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: {source}")]
    Record {
        line: usize,
        #[source]
        source: RecordError,
    },
}

/// Counters for one pass over the input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    pub lines: usize,
    pub parsed: usize,
    pub not_json: usize,
    pub rejected: usize,
}

/// Everything collected from one input stream.
#[derive(Debug)]
pub struct Analysis {
    pub aggregator: Aggregator,
    pub stats: ScanStats,
}

/// The two reports of a run.
#[derive(Debug, Clone, Serialize)]
pub struct Reports {
    pub by_day: Report,
    pub by_endpoint: Report,
}

pub fn scan<R: BufRead>(mut reader: R, config: &PipelogConfig) -> Result<Analysis, ScanError> {
    let mut aggregator = Aggregator::new(config.mask_identifiers);
    let mut stats = ScanStats::default();
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        stats.lines += 1;

        match config.schema.parse_line(&line) {
            Ok(LineOutcome::Request(request)) => {
                aggregator.record(&request);
                stats.parsed += 1;
            }
            Ok(LineOutcome::NotJson) => {
                stats.not_json += 1;
            }
            Err(source) if config.fail_fast => {
                return Err(ScanError::Record {
                    line: stats.lines,
                    source,
                });
            }
            Err(err) => {
                stats.rejected += 1;
                tracing::debug!(line = stats.lines, field = %err.field, error = %err.source, "record skipped");
            }
        }
    }

    tracing::info!(
        lines = stats.lines,
        parsed = stats.parsed,
        not_json = stats.not_json,
        rejected = stats.rejected,
        "input consumed"
    );

    if stats.rejected > 0 {
        tracing::warn!(
            rejected = stats.rejected,
            "some records could not be extracted and were skipped"
        );
    }

    Ok(Analysis { aggregator, stats })
}

impl Analysis {
    /// Days in chronological order with full history; endpoints ranked by
    /// request volume and cut to `options.top`.
    pub fn reports(&self, options: &ReportOptions) -> Reports {
        Reports {
            by_day: build_report(
                DAY_TITLE,
                self.aggregator.by_day(),
                RowOrder::ByKey,
                0,
            ),
            by_endpoint: build_report(
                ENDPOINT_TITLE,
                self.aggregator.by_endpoint(),
                RowOrder::ByRequestCount,
                options.top,
            ),
        }
    }
}
