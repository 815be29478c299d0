use axum::Router;
use livepnl::{api, config::Config, init_tracing, AppState};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

// Ticks are synchronous reads; one thread keeps them strictly sequential.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    init_tracing();

    let config = Config::from_env();
    info!(
        "Starting live dashboard on {} (workbook: {}, refresh every {} ms)",
        config.bind_addr(),
        config.workbook_path.display(),
        config.refresh_interval_ms
    );
    if !config.workbook_path.is_file() {
        warn!(
            "Workbook {} not found yet; ticks will fail until it appears",
            config.workbook_path.display()
        );
    }

    let addr = config.bind_addr();
    let state = AppState::new(config);

    // Build CORS layer
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the router
    let app = Router::new()
        .merge(api::router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start the server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Live dashboard listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
