use serde::Serialize;

/// Summary statistics of one group of durations, in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    /// Population standard deviation.
    pub stddev: f64,
    pub min: f64,
    pub max: f64,
    pub p95: f64,
}

/// Summarizes a list of durations. Returns `None` for an empty list.
///
/// The 95th percentile is the element at zero-based index `floor(0.95 * N)`
/// of the sorted samples, so for `N = 100` it is the 96th smallest value.
pub fn summarize(samples: &[f64]) -> Option<Summary> {
    if samples.is_empty() {
        return None;
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);

    let count = sorted.len();
    let (min, max) = (sorted[0], sorted[count - 1]);

    // Running mean; a plain sum can overflow or round past `max`.
    let mean = sorted
        .iter()
        .enumerate()
        .fold(0.0_f64, |m, (i, v)| m + (v - m) / (i + 1) as f64)
        .clamp(min, max);

    Some(Summary {
        count,
        mean,
        stddev: population_stddev(&sorted, mean),
        min,
        max,
        p95: sorted[percentile_index(count, 95)],
    })
}

/// Deviations are scaled by the largest one so squaring cannot overflow.
fn population_stddev(samples: &[f64], mean: f64) -> f64 {
    let scale = samples
        .iter()
        .map(|v| (v - mean).abs())
        .fold(0.0, f64::max);
    if scale == 0.0 {
        return 0.0;
    }
    if !scale.is_finite() {
        return f64::INFINITY;
    }

    let n = samples.len() as f64;
    let variance = samples
        .iter()
        .map(|v| ((v - mean) / scale).powi(2))
        .sum::<f64>()
        / n;

    scale * variance.sqrt()
}

/// Nearest-rank index `floor(pct / 100 * len)`, in integer arithmetic.
fn percentile_index(len: usize, pct: usize) -> usize {
    (pct * len / 100).min(len - 1)
}
