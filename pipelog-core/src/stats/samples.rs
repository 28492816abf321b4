use crate::normalize::endpoint_key;
use crate::record::ParsedRequest;
use std::collections::HashMap;

/// Day keys are the calendar date in the record's own UTC offset.
const DAY_FORMAT: &str = "%Y-%m-%d";

/// Observed durations per group key.
#[derive(Debug, Default, Clone)]
pub struct DurationSamples {
    groups: HashMap<String, Vec<f64>>,
}

impl DurationSamples {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, key: impl Into<String>, duration_ms: f64) {
        self.groups.entry(key.into()).or_default().push(duration_ms);
    }

    pub fn get(&self, key: &str) -> Option<&[f64]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of samples across every group.
    pub fn sample_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

/// Buckets every request by day and by endpoint.
#[derive(Debug, Default, Clone)]
pub struct Aggregator {
    mask_identifiers: bool,
    by_day: DurationSamples,
    by_endpoint: DurationSamples,
}

impl Aggregator {
    pub fn new(mask_identifiers: bool) -> Self {
        Self {
            mask_identifiers,
            ..Self::default()
        }
    }

    pub fn record(&mut self, request: &ParsedRequest) {
        let day = request.timestamp.format(DAY_FORMAT).to_string();
        let endpoint = endpoint_key(&request.method, &request.uri, self.mask_identifiers);

        self.by_day.record(day, request.duration_ms);
        self.by_endpoint.record(endpoint, request.duration_ms);
    }

    pub fn by_day(&self) -> &DurationSamples {
        &self.by_day
    }

    pub fn by_endpoint(&self) -> &DurationSamples {
        &self.by_endpoint
    }
}
