//! Enumeration of every upward hypernym path from a synset to its roots

use tracing::{debug, warn};

use super::deadline::Deadline;
use crate::data::{ExplorerResult, Synset};
use crate::traits::LexicalStore;

/// All hypernym paths of one synset.
///
/// Each path lists ancestors nearest first and ends at a root (a synset with
/// no hypernyms). The starting synset itself is not part of any path.
#[derive(Debug, Clone, Default)]
pub struct HypernymPaths {
    /// Distinct roots in the order they were first reached.
    pub roots: Vec<Synset>,
    /// Paths after per-path truncation.
    pub paths: Vec<Vec<Synset>>,
    /// Longest path length in nodes, measured before truncation.
    pub max_length: usize,
    /// Set when enumeration stopped at the path-count cap.
    pub capped: bool,
}

impl HypernymPaths {
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Limits for one enumeration.
#[derive(Debug, Clone, Copy)]
pub struct PathLimits {
    /// Nodes kept per path; the most root-distant entries are dropped.
    pub max_path_nodes: Option<usize>,
    /// Complete paths recorded before enumeration stops.
    pub max_paths: usize,
}

/// Depth-first ascent recording every complete path.
///
/// A synset with no hypernyms yields an empty result; a store failure is
/// returned as an error. A hypernym already on the current path is skipped
/// so a malformed cyclic hierarchy still terminates.
pub async fn enumerate(
    store: &dyn LexicalStore,
    synset: &Synset,
    limits: PathLimits,
    deadline: &Deadline,
) -> ExplorerResult<HypernymPaths> {
    let mut result = HypernymPaths::default();
    let mut stack: Vec<(Synset, Vec<Synset>)> = vec![(synset.clone(), Vec::new())];

    while let Some((current, path)) = stack.pop() {
        deadline.check()?;

        let hypernyms: Vec<Synset> = store
            .hypernyms_of(&current)
            .await?
            .into_iter()
            .filter(|h| !h.is_placeholder())
            .filter(|h| h.id != synset.id && path.iter().all(|p| p.id != h.id))
            .collect();

        if hypernyms.is_empty() {
            if path.is_empty() {
                continue;
            }
            if result.paths.len() >= limits.max_paths {
                warn!(
                    synset_id = %synset.id,
                    max_paths = limits.max_paths,
                    "Hypernym path enumeration capped"
                );
                result.capped = true;
                break;
            }
            record(&mut result, path, limits.max_path_nodes);
            continue;
        }

        for hypernym in hypernyms.into_iter().rev() {
            let mut extended = Vec::with_capacity(path.len() + 1);
            extended.extend(path.iter().cloned());
            extended.push(hypernym.clone());
            stack.push((hypernym, extended));
        }
    }

    debug!(
        synset_id = %synset.id,
        paths = result.paths.len(),
        roots = result.roots.len(),
        max_length = result.max_length,
        "Enumerated hypernym paths"
    );
    Ok(result)
}

fn record(result: &mut HypernymPaths, mut path: Vec<Synset>, max_path_nodes: Option<usize>) {
    result.max_length = result.max_length.max(path.len());
    if let Some(root) = path.last() {
        if result.roots.iter().all(|r| r.id != root.id) {
            result.roots.push(root.clone());
        }
    }
    if let Some(max) = max_path_nodes {
        path.truncate(max);
    }
    result.paths.push(path);
}
