//! API module for the Lexnet Server
//!
//! This module contains the API routes and handlers.

use axum::{extract::rejection::QueryRejection, routing::get, Router};
use std::sync::Arc;

pub mod graph;
pub mod health;
pub mod synsets;

use crate::error::ServerError;
use crate::AppState;

/// Build the router for the explorer endpoints (mounted under the API prefix)
pub fn build_router() -> Router<Arc<AppState>> {
    Router::new()
        // Graph views
        .route("/graph/neighborhood/:id", get(graph::neighborhood))
        .route("/graph/path/:source/:target", get(graph::shortest_path))
        .route("/graph/hypernym-tree/:id", get(graph::hypernym_tree))
        .route("/graph/hyponym-tree/:id", get(graph::hyponym_tree))
        .route("/graph/similarity/:id1/:id2", get(graph::similarity))

        // Synset lookups
        .route("/synsets/:id", get(synsets::synset))
        .route("/synsets/:id/relations", get(synsets::relations))
        .route("/synsets/:id/hypernyms", get(synsets::hypernyms))
        .route("/synsets/:id/hyponyms", get(synsets::hyponyms))
        .route("/synsets/:id/hypernym-paths", get(synsets::hypernym_paths))

        // Search
        .route("/search", get(synsets::search))
        .route("/autocomplete", get(synsets::autocomplete))
}

/// Routes served outside the API prefix
pub fn root_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
}

impl From<QueryRejection> for ServerError {
    fn from(rejection: QueryRejection) -> Self {
        ServerError::InvalidArgument(rejection.body_text())
    }
}
