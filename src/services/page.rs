//! HTML pages for the two presentation drivers.
//!
//! The live page is an empty shell that polls the dashboard endpoint. The
//! static page has the cards and figure baked in and reloads itself.

use super::cards::{escape_html, render_cards_html};
use crate::config::Config;
use crate::error::Result;
use crate::types::{ChartSpec, DashboardView};
use std::fs;
use std::path::Path;
use tracing::info;

pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";
pub const CHART_ELEMENT_ID: &str = "live-chart";
pub const METRICS_ELEMENT_ID: &str = "metrics-row";
pub const DASHBOARD_ENDPOINT: &str = "/api/dashboard";

const PAGE_STYLE: &str = "<style>body{margin:0;font-family:Arial,sans-serif;background:#f4f6f9;color:#2c3e50}h2{text-align:center;margin:10px 0}.metrics{display:flex;gap:10px;padding:0 20px;margin-bottom:20px}.card{flex:1;padding:10px;background:#fff;border-radius:6px;box-shadow:0 1px 3px rgba(0,0,0,.2);text-align:center}.card-value{font-size:22px;font-weight:bold}.card-label{font-size:12px;color:#555}.chart-wrap{padding:0 20px}.chart{min-height:450px}.tick-error{margin:0 20px 20px;padding:10px;border-radius:6px;background:#fde2e2;color:crimson;font-weight:bold}.generated{text-align:center;font-size:12px;color:#555;margin:10px 0 20px}</style>\n";

const LIVE_CLIENT_SCRIPT: &str = r#"<script>
(function () {
  const row = document.getElementById('__METRICS_ID__');
  const banner = document.getElementById('tick-error');
  const chartId = '__CHART_ID__';

  async function refresh() {
    try {
      const res = await fetch('__ENDPOINT__', { cache: 'no-store' });
      const body = await res.json();
      if (!res.ok) {
        throw new Error(body.error || ('HTTP ' + res.status));
      }
      row.innerHTML = body.cardsHtml;
      Plotly.react(chartId, body.figure.data, body.figure.layout, { responsive: true });
      banner.hidden = true;
    } catch (err) {
      row.innerHTML = '';
      Plotly.purge(chartId);
      banner.textContent = 'Refresh failed: ' + err.message;
      banner.hidden = false;
    } finally {
      setTimeout(refresh, __REFRESH_MS__);
    }
  }

  refresh();
})();
</script>
"#;

fn head(out: &mut String, title: &str, reload_secs: Option<u64>) {
    out.push_str("<!DOCTYPE html><html><head><meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    if let Some(secs) = reload_secs {
        out.push_str(&format!("<meta http-equiv=\"refresh\" content=\"{}\">\n", secs));
    }
    out.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    out.push_str(&format!("<script src=\"{}\"></script>\n", PLOTLY_CDN));
    out.push_str(PAGE_STYLE);
    out.push_str("</head><body>\n");
    out.push_str(&format!("<h2>📈 {}</h2>\n", escape_html(title)));
}

/// Shell for the live dashboard; all data arrives through polling. The next
/// poll is scheduled only once the previous response has been applied.
pub fn render_live_page(config: &Config) -> String {
    let mut out = String::new();
    head(&mut out, &config.title, None);

    out.push_str("<div id=\"tick-error\" class=\"tick-error\" hidden></div>\n");
    out.push_str(&format!(
        "<div id=\"{}\" class=\"metrics\"></div>\n",
        METRICS_ELEMENT_ID
    ));
    out.push_str(&format!(
        "<div class=\"chart-wrap\"><div id=\"{}\" class=\"chart\"></div></div>\n",
        CHART_ELEMENT_ID
    ));
    out.push_str(
        &LIVE_CLIENT_SCRIPT
            .replace("__METRICS_ID__", METRICS_ELEMENT_ID)
            .replace("__CHART_ID__", CHART_ELEMENT_ID)
            .replace("__ENDPOINT__", DASHBOARD_ENDPOINT)
            .replace("__REFRESH_MS__", &config.refresh_interval_ms.to_string()),
    );

    out.push_str("</body></html>\n");
    out
}

/// Self-contained snapshot page. Only `generated_at` varies between runs
/// over the same workbook.
pub fn render_static_page(
    view: &DashboardView,
    title: &str,
    generated_at: &str,
    reload_secs: u64,
) -> Result<String> {
    let mut out = String::new();
    head(&mut out, title, Some(reload_secs));

    out.push_str(&format!(
        "<div id=\"{}\" class=\"metrics\">\n",
        METRICS_ELEMENT_ID
    ));
    out.push_str(&render_cards_html(&view.cards));
    out.push_str("</div>\n");
    out.push_str("<div class=\"chart-wrap\">\n");
    out.push_str(&render_chart_html(&view.chart)?);
    out.push_str("</div>\n");
    out.push_str(&format!(
        "<p class=\"generated\">Last generated: {}</p>\n",
        escape_html(generated_at)
    ));

    out.push_str("</body></html>\n");
    Ok(out)
}

/// Chart container plus the script that draws the figure into it.
pub fn render_chart_html(chart: &ChartSpec) -> Result<String> {
    // "</" would end the script element early.
    let figure = serde_json::to_string(chart)?.replace("</", "<\\/");
    Ok(format!(
        "<div id=\"{id}\" class=\"chart\"></div>\n<script>\n(function () {{\n  const figure = {figure};\n  Plotly.newPlot('{id}', figure.data, figure.layout, {{ responsive: true }});\n}})();\n</script>\n",
        id = CHART_ELEMENT_ID,
        figure = figure,
    ))
}

/// Write the page, creating the parent directory if needed.
pub fn write_static_page(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, html)?;
    info!("Wrote {} ({} bytes)", path.display(), html.len());
    Ok(())
}
