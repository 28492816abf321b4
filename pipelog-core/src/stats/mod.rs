//! Latency statistics
//!
//! Requests are bucketed twice, by calendar day and by endpoint. Each bucket
//! keeps every observed duration; once the input is consumed the buckets are
//! summarized (count, mean, stddev, min, max, p95) and turned into ordered
//! report rows.
//!
//! ParsedRequest
//! Aggregator
//! DurationSamples
//! summarize
//! build_report
//!

mod report;
mod samples;
mod summary;
#[cfg(test)]
mod tests;

pub use report::*;
pub use samples::*;
pub use summary::*;
