//! Graph exploration and similarity engine
//!
//! The algorithms (`walker`, `hypernyms`, `shortest_path`, `similarity`)
//! operate on raw synsets read through a [`LexicalStore`](crate::traits::LexicalStore);
//! `materializer` renders their output and [`ExplorerService`] ties them
//! together behind bounded, deadline-guarded operations.

pub mod config;
pub mod deadline;
pub mod hypernyms;
pub mod materializer;
pub mod service;
pub mod shortest_path;
pub mod similarity;
pub mod walker;

pub use config::ExplorerConfig;
pub use deadline::Deadline;
pub use hypernyms::{HypernymPaths, PathLimits};
pub use materializer::GraphMaterializer;
pub use service::ExplorerService;
pub use shortest_path::{FoundPath, StepDirection};
pub use similarity::TaxonomyDepthCache;
pub use walker::{Walk, WalkEdge, WalkLimits};

#[cfg(test)]
mod tests;
