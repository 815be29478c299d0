use std::env;
use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Workbook holding the TABLE and CHART sheets.
    pub workbook_path: PathBuf,
    /// Client poll interval for the live dashboard (ms).
    pub refresh_interval_ms: u64,
    /// Where the static generator writes its page.
    pub static_output_path: PathBuf,
    /// Meta-refresh interval embedded in the static page (seconds).
    pub static_reload_secs: u64,
    /// Page title and heading.
    pub title: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            workbook_path: env::var("WORKBOOK_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("LIVE_PNL.xltm")),
            refresh_interval_ms: env::var("REFRESH_INTERVAL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|v| *v > 0)
                .unwrap_or(5_000),
            static_output_path: env::var("STATIC_OUTPUT_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("docs/index.html")),
            static_reload_secs: env::var("STATIC_RELOAD_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|v| *v > 0)
                .unwrap_or(30),
            title: env::var("DASHBOARD_TITLE")
                .unwrap_or_else(|_| "Live P&L Dashboard".to_string()),
        }
    }

    /// Address the live server binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
