//! Level-synchronous breadth-first expansion with a node budget

use std::collections::HashSet;
use tracing::{trace, warn};

use super::deadline::Deadline;
use crate::data::{ExplorerResult, Synset, SynsetId};
use crate::taxonomy::Relation;
use crate::traits::LexicalStore;

/// Depth and node budget for one walk. The center counts against `node_limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkLimits {
    pub depth: usize,
    pub node_limit: usize,
}

/// A traversed edge, before rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct WalkEdge {
    pub id: String,
    pub source: SynsetId,
    pub target: SynsetId,
    pub relation: Relation,
}

/// Result of a walk: nodes in discovery order (center first) and every edge
/// emitted towards a kept node.
#[derive(Debug, Clone, Default)]
pub struct Walk {
    pub nodes: Vec<Synset>,
    pub edges: Vec<WalkEdge>,
    /// Number of levels actually expanded.
    pub levels: usize,
}

impl Walk {
    pub fn node_ids(&self) -> Vec<&str> {
        self.nodes.iter().map(|s| s.id.as_str()).collect()
    }
}

/// Expands outward from `center` following `relations`.
///
/// Targets are visited in the order the store returns them, relation by
/// relation. Placeholder targets are never kept. A failed relation lookup
/// counts as "no edges" for that relation.
pub async fn walk(
    store: &dyn LexicalStore,
    center: Synset,
    relations: &[Relation],
    limits: WalkLimits,
    deadline: &Deadline,
) -> ExplorerResult<Walk> {
    let mut visited: HashSet<SynsetId> = HashSet::new();
    visited.insert(center.id.clone());

    let mut walk = Walk {
        nodes: vec![center.clone()],
        edges: Vec::new(),
        levels: 0,
    };
    let mut frontier = vec![center];
    let mut edge_counter = 0usize;

    for _ in 0..limits.depth {
        if frontier.is_empty() || walk.nodes.len() >= limits.node_limit {
            break;
        }
        walk.levels += 1;
        let mut next_frontier = Vec::new();

        for source in &frontier {
            if walk.nodes.len() >= limits.node_limit {
                break;
            }
            for relation in relations {
                deadline.check()?;

                let targets = match store.relations_of(source, *relation).await {
                    Ok(targets) => targets,
                    Err(e) => {
                        warn!(
                            synset_id = %source.id,
                            relation = %relation,
                            error = %e,
                            "Relation lookup failed, treating as no edges"
                        );
                        continue;
                    }
                };

                for target in targets {
                    if target.is_placeholder() {
                        trace!(synset_id = %source.id, relation = %relation, "Skipping placeholder target");
                        continue;
                    }
                    if !visited.contains(&target.id) {
                        if walk.nodes.len() >= limits.node_limit {
                            continue;
                        }
                        visited.insert(target.id.clone());
                        walk.nodes.push(target.clone());
                        next_frontier.push(target.clone());
                    }

                    edge_counter += 1;
                    walk.edges.push(WalkEdge {
                        id: format!("e-{}-{}-{}", source.id, relation, edge_counter),
                        source: source.id.clone(),
                        target: target.id,
                        relation: *relation,
                    });
                }
            }
        }

        frontier = next_frontier;
    }

    Ok(walk)
}
