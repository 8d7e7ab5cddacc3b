//!
//! Lexnet Server - HTTP front end for the lexical graph explorer
//!
//! This module exports all the components of the Lexnet Server.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use lexnet_kb::{ExplorerService, LexicalStore, MemoryLexicalStore};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

/// API module
pub mod api;

/// Configuration module
pub mod config;

/// Error module
pub mod error;

/// Logging module
pub mod logging;

// Re-export key types
pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};

/// State shared by every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub explorer: ExplorerService,
}

impl AppState {
    pub fn new(store: Arc<dyn LexicalStore>, config: &ServerConfig) -> Self {
        let explorer = ExplorerService::new(store, config.explorer.clone())
            .with_timeout(Duration::from_millis(config.explorer.timeout_ms));
        Self { explorer }
    }
}

/// Build the complete application: explorer routes under the configured
/// prefix, the root routes, CORS and request tracing.
pub fn build_app(state: AppState, api_prefix: &str) -> Router {
    let state = Arc::new(state);
    let api = api::build_router();

    let router = if api_prefix.is_empty() {
        api::root_router().merge(api)
    } else {
        api::root_router().nest(api_prefix, api)
    };

    router
        .with_state(state)
        .layer(axum::middleware::from_fn(logging::correlation_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Run function
pub async fn run(config: ServerConfig) -> ServerResult<()> {
    let store = MemoryLexicalStore::load_json(&config.lexicon_path)
        .await
        .map_err(|e| {
            ServerError::ConfigError(format!("Failed to load lexicon {}: {}", config.lexicon_path, e))
        })?;
    let lexicon = store.lexicon();
    info!(
        lexicon = %lexicon.id,
        version = %lexicon.version,
        path = %config.lexicon_path,
        "Lexicon loaded"
    );

    let state = AppState::new(Arc::new(store), &config);
    let app = build_app(state, &config.api_prefix);

    // Create and bind the TCP listener
    let listener = TcpListener::bind(config.socket_addr()).await?;
    let addr = listener.local_addr()?;
    info!(%addr, prefix = %config.api_prefix, "Lexnet server listening");

    // Run the server
    axum::serve(listener, app).await?;
    Ok(())
}
