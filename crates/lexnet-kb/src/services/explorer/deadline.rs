use std::time::Duration;
use tokio::time::Instant;

use crate::data::{ExplorerError, ExplorerResult};

/// Cooperative cancellation point for long traversals.
///
/// The service also wraps each operation in `tokio::time::timeout`; the
/// deadline covers the stretches where a traversal makes progress without
/// yielding to the runtime.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    operation: &'static str,
    expires_at: Option<Instant>,
    limit_ms: u64,
}

impl Deadline {
    pub fn after(operation: &'static str, limit: Duration) -> Self {
        Self {
            operation,
            expires_at: Instant::now().checked_add(limit),
            limit_ms: u64::try_from(limit.as_millis()).unwrap_or(u64::MAX),
        }
    }

    pub fn unbounded(operation: &'static str) -> Self {
        Self {
            operation,
            expires_at: None,
            limit_ms: 0,
        }
    }

    pub fn operation(&self) -> &'static str {
        self.operation
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at.map_or(false, |at| Instant::now() >= at)
    }

    pub fn check(&self) -> ExplorerResult<()> {
        if self.is_expired() {
            Err(self.timeout_error())
        } else {
            Ok(())
        }
    }

    pub fn timeout_error(&self) -> ExplorerError {
        ExplorerError::Timeout {
            operation: self.operation,
            limit_ms: self.limit_ms,
        }
    }
}
