use std::net::SocketAddr;

use anyhow::Result;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use cv_analyzer::config::Config;
use cv_analyzer::routes::build_router;
use cv_analyzer::state::AppState;
use cv_analyzer::telemetry::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    init_tracing(env!("CARGO_CRATE_NAME"), &config.rust_log);

    info!("Starting CV Analyzer API v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::from_config(config.clone())?;
    if state.model.is_some() {
        info!("Gemini client initialized (model: {})", config.gemini_model);
    } else {
        warn!("GEMINI_API_KEY not found in environment; analysis endpoints will return 500");
    }

    // The browser frontend is served from a different origin.
    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");
    info!("  GET  /api/health        - server status");
    info!("  POST /api/analyze       - analyze a PDF resume");
    info!("  POST /api/analyze-text  - analyze a plain-text resume");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
