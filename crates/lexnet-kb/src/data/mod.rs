//! Core data structures for the lexical network explorer

pub mod entities;
pub mod errors;
pub mod identifiers;
pub mod types;

// Re-export all common types
pub use entities::{LemmaMatch, LexiconInfo, PartOfSpeech, Synset};
pub use errors::{ExplorerError, ExplorerResult, StoreError};
pub use identifiers::{is_placeholder_id, SynsetId, INFERRED_MARKER, PLACEHOLDER_PREFIX};
pub use types::*;
