mod handlers;
mod state;
mod static_files;

use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::capitals::CountryKey;
use crate::enrich::Enricher;

pub use state::AppState;

pub fn build_router(enricher: Enricher, default_country: CountryKey) -> Router {
    let state = Arc::new(AppState::new(enricher, default_country));

    Router::new()
        .route("/", get(handlers::index))
        .route("/style.css", get(handlers::style))
        .route("/app.js", get(handlers::script))
        .route("/api/capital", get(handlers::capital))
        .route("/api/enriched", get(handlers::enriched))
        .route("/api/random", get(handlers::random))
        .route("/api/lookup", get(handlers::lookup))
        .route("/api/regions", get(handlers::regions))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn start(host: &str, port: u16, enricher: Enricher, default_country: CountryKey) -> anyhow::Result<()> {
    use anyhow::Context;

    let app = build_router(enricher, default_country);
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Cannot bind to {}", addr))?;

    info!("Capital Quest listening on http://{}", addr);
    info!("  GET /  (browser front-end)");
    info!("  GET /api/capital?country=us&state=california");
    info!("  GET /api/enriched?capital=Sacramento");
    info!("  GET /api/random?country=us");
    info!("  GET /api/lookup?country=us&state=california");
    info!("  GET /api/regions?country=us");

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
