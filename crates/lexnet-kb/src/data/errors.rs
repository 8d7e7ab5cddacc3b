//! Error types for the lexical network explorer

use thiserror::Error;

/// Base error type for exploration operations.
#[derive(Error, Debug)]
pub enum ExplorerError {
    #[error("Synset '{id}' not found")]
    NotFound { id: String },

    #[error("Invalid argument {name}={value}: {reason}")]
    InvalidArgument {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("No path found between '{from_id}' and '{to_id}'")]
    NoPathFound { from_id: String, to_id: String },

    #[error("{operation} exceeded its deadline of {limit_ms}ms")]
    Timeout { operation: &'static str, limit_ms: u64 },

    #[error("Lexical store error: {0}")]
    Store(#[from] StoreError),
}

impl ExplorerError {
    /// Helper to create a not found error
    pub fn not_found(id: impl Into<String>) -> Self {
        ExplorerError::NotFound { id: id.into() }
    }

    /// Helper to create an invalid argument error
    pub fn invalid_argument(
        name: &'static str,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        ExplorerError::InvalidArgument {
            name,
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Helper to create a no path error
    pub fn no_path(from_id: impl Into<String>, to_id: impl Into<String>) -> Self {
        ExplorerError::NoPathFound {
            from_id: from_id.into(),
            to_id: to_id.into(),
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ExplorerError::Timeout { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ExplorerError::NotFound { .. })
    }
}

/// Result type for exploration operations
pub type ExplorerResult<T> = Result<T, ExplorerError>;

/// Specific error type for the lexical store adapter.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Lexical store unavailable: {0}")]
    Unavailable(String),
    #[error("Relation lookup '{relation}' failed for {synset_id}: {message}")]
    RelationLookup {
        synset_id: String,
        relation: String,
        message: String,
    },
    #[error("Invalid lexicon data: {0}")]
    InvalidData(String),
    #[error("Lexicon I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Lexicon parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<String> for StoreError {
    fn from(error: String) -> Self {
        StoreError::Unavailable(error)
    }
}
