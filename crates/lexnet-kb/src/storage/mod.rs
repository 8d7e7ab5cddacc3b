//! Concrete lexical store implementations

pub mod lexicon;
pub mod memory;

pub use lexicon::{LexiconDocument, RelationEntry, SynsetEntry};
pub use memory::MemoryLexicalStore;
