//! Live dashboard: the page shell and the per-tick data endpoint.

use crate::error::Result;
use crate::services::{page, pipeline, render_cards_html};
use crate::types::{ChartSpec, DisplayCard};
use crate::AppState;
use axum::{extract::State, response::Html, routing::get, Json, Router};
use serde::Serialize;
use tracing::warn;

/// One tick's worth of display state. Replaces everything on the page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub cards: Vec<DisplayCard>,
    pub cards_html: String,
    pub figure: ChartSpec,
}

async fn index(State(state): State<AppState>) -> Html<String> {
    Html(page::render_live_page(&state.config))
}

/// Runs a full tick. A failed read fails the request; stale data is never served.
async fn dashboard(State(state): State<AppState>) -> Result<Json<DashboardResponse>> {
    let view = pipeline::run_tick(&state.config.workbook_path).map_err(|e| {
        warn!("Tick failed: {}", e);
        e
    })?;

    Ok(Json(DashboardResponse {
        cards_html: render_cards_html(&view.cards),
        cards: view.cards,
        figure: view.chart,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route(page::DASHBOARD_ENDPOINT, get(dashboard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Emphasis;

    #[test]
    fn test_dashboard_response_field_names() {
        let response = DashboardResponse {
            cards: vec![DisplayCard {
                label: "SPOT".to_string(),
                text: "22,450.00".to_string(),
                emphasis: Emphasis::Normal,
            }],
            cards_html: "<div></div>".to_string(),
            figure: crate::services::build_chart(&[]),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["cards"][0]["label"], "SPOT");
        assert_eq!(json["cards"][0]["emphasis"], "normal");
        assert_eq!(json["cardsHtml"], "<div></div>");
        assert!(json["figure"]["data"].is_array());
    }
}
