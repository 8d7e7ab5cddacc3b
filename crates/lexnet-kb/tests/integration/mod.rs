//! Integration tests for lexnet-kb
//!
//! This module organizes all integration tests in the integration directory.

pub mod explorer_scenarios;
pub mod fault_handling;
pub mod lexicon_loading;
pub mod service_bounds;
