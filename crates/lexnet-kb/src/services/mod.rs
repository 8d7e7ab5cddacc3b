//! Services built on top of the lexical store

pub mod explorer;

// Re-exports
pub use explorer::{ExplorerConfig, ExplorerService, GraphMaterializer, TaxonomyDepthCache};
