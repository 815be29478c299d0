//! Regenerate the static dashboard page once and exit.
//!
//! Publishing the written file is left to whatever runs this binary.

use anyhow::Context;
use chrono::Local;
use livepnl::config::Config;
use livepnl::init_tracing;
use livepnl::services::{render_static_page, run_tick, write_static_page};
use tracing::info;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    init_tracing();

    let config = Config::from_env();
    info!("Generating static dashboard from {}", config.workbook_path.display());

    let view = run_tick(&config.workbook_path)
        .with_context(|| format!("reading {}", config.workbook_path.display()))?;

    let generated_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let html = render_static_page(&view, &config.title, &generated_at, config.static_reload_secs)?;

    write_static_page(&config.static_output_path, &html)
        .with_context(|| format!("writing {}", config.static_output_path.display()))?;

    info!(
        "Generated {} at {}",
        config.static_output_path.display(),
        generated_at
    );
    Ok(())
}
