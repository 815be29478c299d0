//! Metric normalizer.
//!
//! Percentage-class metrics are stored as fractions (0.0005 for 0.05%) and
//! are scaled by 100 here. Scaling is lenient: a value that is not a number
//! becomes 0.0 so one bad cell never blanks the whole dashboard.

use crate::types::{MetricKey, MetricValue, MetricsSnapshot};
use tracing::debug;

/// Scale the percentage-class metrics; pass everything else through.
pub fn normalize(raw: MetricsSnapshot) -> MetricsSnapshot {
    raw.into_iter()
        .map(|(key, value)| {
            if key.is_percentage() {
                (key, MetricValue::Number(scale_percentage(key, &value)))
            } else {
                (key, value)
            }
        })
        .collect()
}

/// 100 × the value, or 0.0 when it has no numeric reading.
pub fn scale_percentage(key: MetricKey, value: &MetricValue) -> f64 {
    let fraction = match value {
        MetricValue::Number(v) => Some(*v),
        MetricValue::Text(s) => s.trim().parse::<f64>().ok(),
        MetricValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        MetricValue::Empty => None,
    };

    match fraction {
        Some(v) => v * 100.0,
        None => {
            debug!("{} is not numeric ({:?}), showing 0.0", key, value);
            0.0
        }
    }
}
