pub mod cards;
pub mod chart_builder;
pub mod normalizer;
pub mod page;
pub mod pipeline;
pub mod workbook;

pub use cards::{format_number, render_cards, render_cards_html, METRIC_ORDER};
pub use chart_builder::build_chart;
pub use normalizer::normalize;
pub use page::{render_live_page, render_static_page, write_static_page};
pub use pipeline::{build_view, run_tick};
pub use workbook::{load_workbook, WorkbookData, METRICS_SCHEMA};
