use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tokio::signal;

use crate::{enricher::MetadataEnricher, error::Result, types::ListingResponse};

/// Shared per-request dependencies
#[derive(Clone)]
pub struct AppState {
    pub enricher: Arc<MetadataEnricher>,
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub path: String,
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/list-contents", get(list_contents))
        .with_state(state)
}

/// GET /list-contents?path=... — enriched directory listing
///
/// Always replies 200; failures are signaled in the body's `status` field.
async fn list_contents(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<ListingResponse> {
    Json(state.enricher.enrich_response(&query.path).await)
}

/// Bind and serve the router until ctrl-c
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install ctrl-c handler");
    }
}
