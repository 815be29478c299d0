//! Chart builder: LIVE PNL area on the left axis, SPOT line on the right.
//!
//! The x axis is categorical. Rows are plotted exactly as read, so uneven
//! sampling shows no gaps and nothing is resampled or interpolated.

use crate::types::{
    Axis, AxisTitle, ChartSpec, Font, Layout, Legend, LineStyle, Margin, TimeSeriesRow, Trace,
};

pub const PNL_TRACE_NAME: &str = "LIVE PNL";
pub const SPOT_TRACE_NAME: &str = "SPOT";

const PNL_COLOR: &str = "white";
const SPOT_COLOR: &str = "black";
const BACKGROUND: &str = "#385e9d";
const FONT_COLOR: &str = "#f2f5fa";
const LINE_WIDTH: f64 = 2.0;

/// Build the dual-axis figure for the given rows.
pub fn build_chart(rows: &[TimeSeriesRow]) -> ChartSpec {
    let times: Vec<String> = rows.iter().map(|r| r.time.clone()).collect();

    let pnl = Trace {
        kind: "scatter".to_string(),
        name: PNL_TRACE_NAME.to_string(),
        x: times.clone(),
        y: rows.iter().map(|r| r.live_pnl).collect(),
        mode: "lines".to_string(),
        fill: Some("tozeroy".to_string()),
        yaxis: None,
        line: LineStyle {
            color: PNL_COLOR.to_string(),
            width: LINE_WIDTH,
        },
    };

    let spot = Trace {
        kind: "scatter".to_string(),
        name: SPOT_TRACE_NAME.to_string(),
        x: times,
        y: rows.iter().map(|r| r.spot).collect(),
        mode: "lines".to_string(),
        fill: None,
        yaxis: Some("y2".to_string()),
        line: LineStyle {
            color: SPOT_COLOR.to_string(),
            width: LINE_WIDTH,
        },
    };

    ChartSpec {
        data: vec![pnl, spot],
        layout: layout(),
    }
}

fn layout() -> Layout {
    Layout {
        font: Font {
            color: Some(FONT_COLOR.to_string()),
            size: None,
        },
        plot_bgcolor: BACKGROUND.to_string(),
        paper_bgcolor: BACKGROUND.to_string(),
        hovermode: "x unified".to_string(),
        xaxis: Axis {
            title: Some(title("Time")),
            kind: Some("category".to_string()),
            tickangle: Some(-45),
            tickfont: Some(Font {
                color: None,
                size: Some(10),
            }),
            showgrid: Some(false),
            ..Axis::default()
        },
        yaxis: Axis {
            title: Some(title(PNL_TRACE_NAME)),
            zerolinecolor: Some(PNL_COLOR.to_string()),
            gridcolor: Some("#506784".to_string()),
            ..Axis::default()
        },
        yaxis2: Axis {
            title: Some(title(SPOT_TRACE_NAME)),
            overlaying: Some("y".to_string()),
            side: Some("right".to_string()),
            ..Axis::default()
        },
        margin: Margin {
            l: 40,
            r: 40,
            t: 30,
            b: 80,
        },
        legend: Legend {
            bgcolor: "rgba(0,0,0,0)".to_string(),
        },
    }
}

fn title(text: &str) -> AxisTitle {
    AxisTitle {
        text: text.to_string(),
    }
}
