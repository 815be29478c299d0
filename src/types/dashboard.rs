use super::{ChartSpec, DisplayCard};
use serde::Serialize;

/// Everything one tick produces: the metric cards and the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub cards: Vec<DisplayCard>,
    pub chart: ChartSpec,
}
