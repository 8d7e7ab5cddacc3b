//! Bounds and defaults for every explorer operation

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::data::{ExplorerError, ExplorerResult};

/// Limits applied at the explorer boundary.
///
/// Requested values below 1 are rejected; values above the maximum are
/// clamped to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    pub neighborhood_max_depth: usize,
    pub neighborhood_default_depth: usize,
    pub neighborhood_max_limit: usize,
    pub neighborhood_default_limit: usize,

    pub subtree_max_depth: usize,
    pub subtree_default_depth: usize,
    pub subtree_max_limit: usize,
    pub subtree_default_limit: usize,

    pub tree_max_path_depth: usize,
    pub tree_default_path_depth: usize,
    /// Hard cap on nodes in a hypernym tree or a transitive listing.
    pub tree_node_cap: usize,
    /// Cap on complete hypernym paths enumerated for one synset.
    pub max_hypernym_paths: usize,

    pub search_max_limit: usize,
    pub search_default_limit: usize,
    pub autocomplete_max_limit: usize,
    pub autocomplete_default_limit: usize,
    pub autocomplete_min_chars: usize,

    pub definition_preview_chars: usize,
    pub lemmas_per_node: usize,
    pub label_lemmas: usize,

    pub timeout_ms: u64,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            neighborhood_max_depth: 3,
            neighborhood_default_depth: 1,
            neighborhood_max_limit: 200,
            neighborhood_default_limit: 50,

            subtree_max_depth: 4,
            subtree_default_depth: 2,
            subtree_max_limit: 500,
            subtree_default_limit: 100,

            tree_max_path_depth: 10,
            tree_default_path_depth: 5,
            tree_node_cap: 500,
            max_hypernym_paths: 256,

            search_max_limit: 100,
            search_default_limit: 20,
            autocomplete_max_limit: 50,
            autocomplete_default_limit: 10,
            autocomplete_min_chars: 2,

            definition_preview_chars: 200,
            lemmas_per_node: 5,
            label_lemmas: 3,

            timeout_ms: 10_000,
        }
    }
}

impl ExplorerConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Applies a `[1, max]` bound to an optional request parameter.
pub fn bounded(
    name: &'static str,
    requested: Option<usize>,
    default: usize,
    max: usize,
) -> ExplorerResult<usize> {
    let Some(value) = requested else {
        return Ok(default.clamp(1, max.max(1)));
    };
    if value < 1 {
        return Err(ExplorerError::invalid_argument(
            name,
            value,
            "must be at least 1",
        ));
    }
    if value > max {
        debug!(parameter = name, requested = value, max, "Clamping parameter to its maximum");
        return Ok(max);
    }
    Ok(value)
}
