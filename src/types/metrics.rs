use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Named metrics read from the CHART sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricKey {
    #[serde(rename = "LIVE%")]
    LivePct,
    #[serde(rename = "MAX%")]
    MaxPct,
    #[serde(rename = "MIN%")]
    MinPct,
    #[serde(rename = "LIVE_PNL")]
    LivePnl,
    #[serde(rename = "SPOT")]
    Spot,
    #[serde(rename = "MARGIN")]
    Margin,
    #[serde(rename = "TIME")]
    Time,
}

impl MetricKey {
    /// Display label, identical to the serialized name.
    pub fn label(&self) -> &'static str {
        match self {
            MetricKey::LivePct => "LIVE%",
            MetricKey::MaxPct => "MAX%",
            MetricKey::MinPct => "MIN%",
            MetricKey::LivePnl => "LIVE_PNL",
            MetricKey::Spot => "SPOT",
            MetricKey::Margin => "MARGIN",
            MetricKey::Time => "TIME",
        }
    }

    /// Percentage-class metrics are stored as fractions in the workbook.
    pub fn is_percentage(&self) -> bool {
        matches!(
            self,
            MetricKey::LivePct | MetricKey::MaxPct | MetricKey::MinPct
        )
    }
}

impl fmt::Display for MetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A scalar cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricValue {
    Number(f64),
    Text(String),
    Bool(bool),
    Empty,
}

impl MetricValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            MetricValue::Number(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<f64> for MetricValue {
    fn from(v: f64) -> Self {
        MetricValue::Number(v)
    }
}

impl From<&str> for MetricValue {
    fn from(s: &str) -> Self {
        MetricValue::Text(s.to_string())
    }
}

/// Metric values keyed by name. Iteration order is unspecified.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsSnapshot {
    values: HashMap<MetricKey, MetricValue>,
}

impl MetricsSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: MetricKey, value: MetricValue) -> Option<MetricValue> {
        self.values.insert(key, value)
    }

    pub fn get(&self, key: MetricKey) -> Option<&MetricValue> {
        self.values.get(&key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

}

impl FromIterator<(MetricKey, MetricValue)> for MetricsSnapshot {
    fn from_iter<I: IntoIterator<Item = (MetricKey, MetricValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for MetricsSnapshot {
    type Item = (MetricKey, MetricValue);
    type IntoIter = std::collections::hash_map::IntoIter<MetricKey, MetricValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}
