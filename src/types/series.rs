use serde::{Deserialize, Serialize};

/// One row of the TABLE sheet.
///
/// `time` is always normalized to `HH:MM:SS`. Rows keep the order they had in
/// the sheet; duplicate or out-of-order times are left alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesRow {
    pub time: String,
    pub live_pnl: f64,
    pub spot: f64,
}

impl TimeSeriesRow {
    pub fn new(time: impl Into<String>, live_pnl: f64, spot: f64) -> Self {
        Self {
            time: time.into(),
            live_pnl,
            spot,
        }
    }
}
