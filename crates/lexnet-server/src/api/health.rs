//! Root and health check endpoints for the Lexnet Server

use axum::{extract::State, response::IntoResponse, Json};
use lexnet_kb::LexicalStore;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

use crate::AppState;

/// Service banner
pub async fn root() -> impl IntoResponse {
    Json(json!({
        "message": "Lexnet Explorer API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Health check handler
///
/// The lexicon is loaded before the listener binds, so a reachable server
/// is always able to answer; the response reports which lexicon it serves.
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    debug!("Health check requested");

    let store = state.explorer.store();
    let lexicon = store.lexicon();
    Json(json!({
        "status": "UP",
        "version": env!("CARGO_PKG_VERSION"),
        "lexicon": {
            "id": lexicon.id,
            "label": lexicon.label,
            "version": lexicon.version,
        },
        "store_version": store.version(),
    }))
}
