//! Lexnet knowledge base: graph exploration and similarity over a
//! WordNet-style lexical network.

// Core modules
pub mod data;
pub mod services;
pub mod storage;
pub mod taxonomy;
pub mod traits;

// Testing utilities - available to this crate's tests and, through the
// `test-utils` feature, to dependants
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-export key types for convenient usage
pub use data::{
    ExplorerError, ExplorerResult, GraphData, GraphEdge, GraphNode, PartOfSpeech, PathResult,
    SimilarityResult, SimilarityScores, StoreError, Synset, SynsetId,
};
pub use services::{ExplorerConfig, ExplorerService};
pub use storage::MemoryLexicalStore;
pub use taxonomy::Relation;
pub use traits::LexicalStore;

/// Installs a plain fmt subscriber filtered by `RUST_LOG` (default `info`).
///
/// Intended for embedders and tools; servers usually install their own
/// subscriber. Calling it twice is harmless.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
