//! Core traits (interfaces) for the lexical network explorer

pub mod lexical_store;

pub use lexical_store::LexicalStore;
