mod handlers;
mod types;

pub use types::{AnalysisRequest, AnalysisResponse, HelloResponse};

use crate::{Result, config::Config};
use axum::{
    Router,
    routing::{get, post},
};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

/// Builds the application router. Separate from `run` so tests can
/// drive the routes without binding a socket.
pub fn router() -> Router {
    Router::new()
        .route("/", get(handlers::hello))
        .route("/analyze", post(handlers::analyze))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

pub async fn run(config: Config) -> Result<()> {
    let app = router();

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
