//! One tick: read the workbook, normalize, render cards and chart.
//!
//! Every tick starts from scratch. Nothing is carried over from the previous
//! one, and a failed read fails the tick as a whole.

use super::cards::render_cards;
use super::chart_builder::build_chart;
use super::normalizer::normalize;
use super::workbook::{load_workbook, WorkbookData};
use crate::error::Result;
use crate::types::{DashboardView, MetricsSnapshot, TimeSeriesRow};
use std::path::Path;
use tracing::debug;

/// Run the full pipeline against the workbook at `path`.
pub fn run_tick(path: &Path) -> Result<DashboardView> {
    let WorkbookData { rows, metrics } = load_workbook(path)?;
    let view = build_view(&rows, metrics);
    debug!("Tick complete: {} rows, {} cards", rows.len(), view.cards.len());
    Ok(view)
}

/// The pure half of a tick, for data already read.
pub fn build_view(rows: &[TimeSeriesRow], raw_metrics: MetricsSnapshot) -> DashboardView {
    let metrics = normalize(raw_metrics);
    DashboardView {
        cards: render_cards(&metrics),
        chart: build_chart(rows),
    }
}
