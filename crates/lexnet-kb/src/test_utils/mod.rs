//! Fixtures and fault-injecting stores for tests

pub mod fakes;
pub mod fixtures;

// Re-export commonly used test utilities
pub use fakes::*;
pub use fixtures::*;
