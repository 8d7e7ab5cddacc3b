//! Shortest hypernym/hyponym path between two synsets.
//!
//! Both synsets are climbed breadth-first over the hypernym graph augmented
//! with a synthetic root that sits above every true root. The path turns
//! around at the common ancestor minimizing the summed distance, so any two
//! synsets are connected, at worst through the synthetic root. The root is
//! only a key inside this module and never leaves it as a synset.

use std::collections::{HashMap, HashSet, VecDeque};
use tracing::debug;

use super::deadline::Deadline;
use crate::data::{ExplorerError, ExplorerResult, Synset, SynsetId};
use crate::traits::LexicalStore;

/// A node of the augmented hypernym graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKey {
    Synset(SynsetId),
    Root,
}

#[derive(Debug, Clone)]
struct AncestorEntry {
    synset: Option<Synset>,
    distance: usize,
    /// The node this one was first reached from, one step closer to the origin.
    via: Option<NodeKey>,
    parents: Vec<NodeKey>,
}

/// Every ancestor of one synset, with BFS distances from it.
#[derive(Debug, Clone)]
pub struct AncestorGraph {
    origin: NodeKey,
    order: Vec<NodeKey>,
    entries: HashMap<NodeKey, AncestorEntry>,
}

impl AncestorGraph {
    /// Climbs from `synset` to the synthetic root, recording distances.
    pub async fn explore(
        store: &dyn LexicalStore,
        synset: &Synset,
        deadline: &Deadline,
    ) -> ExplorerResult<Self> {
        let origin = NodeKey::Synset(synset.id.clone());
        let mut graph = Self {
            origin: origin.clone(),
            order: vec![origin.clone()],
            entries: HashMap::new(),
        };
        graph.entries.insert(
            origin.clone(),
            AncestorEntry {
                synset: Some(synset.clone()),
                distance: 0,
                via: None,
                parents: Vec::new(),
            },
        );

        let mut queue = VecDeque::from([origin]);
        while let Some(key) = queue.pop_front() {
            deadline.check()?;

            let Some(entry) = graph.entries.get(&key) else { continue };
            let Some(current) = entry.synset.clone() else { continue };
            let distance = entry.distance;

            let mut parents: Vec<NodeKey> = store
                .hypernyms_of(&current)
                .await?
                .into_iter()
                .filter(|h| !h.is_placeholder())
                .map(|h| {
                    let parent = NodeKey::Synset(h.id.clone());
                    if !graph.entries.contains_key(&parent) {
                        graph.order.push(parent.clone());
                        graph.entries.insert(
                            parent.clone(),
                            AncestorEntry {
                                synset: Some(h),
                                distance: distance + 1,
                                via: Some(key.clone()),
                                parents: Vec::new(),
                            },
                        );
                        queue.push_back(parent.clone());
                    }
                    parent
                })
                .collect();

            if parents.is_empty() {
                if !graph.entries.contains_key(&NodeKey::Root) {
                    graph.order.push(NodeKey::Root);
                    graph.entries.insert(
                        NodeKey::Root,
                        AncestorEntry {
                            synset: None,
                            distance: distance + 1,
                            via: Some(key.clone()),
                            parents: Vec::new(),
                        },
                    );
                }
                parents.push(NodeKey::Root);
            }

            if let Some(entry) = graph.entries.get_mut(&key) {
                entry.parents = parents;
            }
        }

        Ok(graph)
    }

    pub fn origin_id(&self) -> Option<&SynsetId> {
        match &self.origin {
            NodeKey::Synset(id) => Some(id),
            NodeKey::Root => None,
        }
    }

    pub fn distance_to(&self, key: &NodeKey) -> Option<usize> {
        self.entries.get(key).map(|e| e.distance)
    }

    pub fn synset(&self, key: &NodeKey) -> Option<&Synset> {
        self.entries.get(key).and_then(|e| e.synset.as_ref())
    }

    /// Keys in BFS discovery order, origin first.
    pub fn keys(&self) -> &[NodeKey] {
        &self.order
    }

    pub fn contains(&self, key: &NodeKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Longest distance from the synthetic root down to `key`: the root is 0,
    /// a true root is 1.
    pub fn depth_from_root(&self, key: &NodeKey) -> usize {
        let mut memo = HashMap::new();
        let mut in_progress = HashSet::new();
        self.depth_memo(key, &mut memo, &mut in_progress)
    }

    fn depth_memo(
        &self,
        key: &NodeKey,
        memo: &mut HashMap<NodeKey, usize>,
        in_progress: &mut HashSet<NodeKey>,
    ) -> usize {
        if *key == NodeKey::Root {
            return 0;
        }
        if let Some(depth) = memo.get(key) {
            return *depth;
        }
        if !in_progress.insert(key.clone()) {
            return 0;
        }
        let parents = self
            .entries
            .get(key)
            .map(|e| e.parents.clone())
            .unwrap_or_default();
        let depth = parents
            .iter()
            .map(|p| self.depth_memo(p, memo, in_progress) + 1)
            .max()
            .unwrap_or(1);
        in_progress.remove(key);
        memo.insert(key.clone(), depth);
        depth
    }

    /// Chain of keys from `key` back down to the origin, `key` first.
    fn chain_to_origin(&self, key: &NodeKey) -> Vec<NodeKey> {
        let mut chain = vec![key.clone()];
        let mut current = key.clone();
        while let Some(via) = self.entries.get(&current).and_then(|e| e.via.clone()) {
            chain.push(via.clone());
            current = via;
        }
        chain
    }
}

/// The common ancestor of `a` and `b` minimizing the summed distance.
/// Ties keep the first candidate in `a`'s discovery order.
pub fn closest_meeting(a: &AncestorGraph, b: &AncestorGraph) -> Option<(NodeKey, usize)> {
    let mut best: Option<(NodeKey, usize)> = None;
    for key in a.keys() {
        let (Some(da), Some(db)) = (a.distance_to(key), b.distance_to(key)) else {
            continue;
        };
        let total = da + db;
        if best.as_ref().map_or(true, |(_, d)| total < *d) {
            best = Some((key.clone(), total));
        }
    }
    best
}

/// Direction of one hop along a found path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    /// Towards a hypernym.
    Up,
    /// Towards a hyponym.
    Down,
    /// Between two true roots, through the synthetic root.
    AcrossRoot,
}

impl StepDirection {
    pub fn relation_name(&self) -> &'static str {
        match self {
            StepDirection::Up => "hypernym",
            StepDirection::Down => "hyponym",
            StepDirection::AcrossRoot => "path",
        }
    }
}

/// A shortest path with the synthetic root removed.
#[derive(Debug, Clone)]
pub struct FoundPath {
    pub nodes: Vec<Synset>,
    /// `steps[i]` joins `nodes[i]` and `nodes[i + 1]`.
    pub steps: Vec<StepDirection>,
    /// Hop count through the synthetic root when it is crossed.
    pub distance: usize,
    pub via_synthetic_root: bool,
}

impl FoundPath {
    pub fn length(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

/// Builds the path `a -> pivot -> b` from two explored ancestor graphs.
pub fn assemble(
    a: &AncestorGraph,
    b: &AncestorGraph,
    pivot: &NodeKey,
    distance: usize,
) -> Option<FoundPath> {
    let mut ascent = a.chain_to_origin(pivot);
    ascent.reverse();
    let descent = b.chain_to_origin(pivot);

    let mut keyed: Vec<(NodeKey, &AncestorGraph)> = ascent.into_iter().map(|k| (k, a)).collect();
    let turn = keyed.len();
    keyed.extend(descent.into_iter().skip(1).map(|k| (k, b)));

    let mut nodes = Vec::with_capacity(keyed.len());
    let mut steps = Vec::with_capacity(keyed.len());
    let mut crossing = false;
    for (index, (key, graph)) in keyed.iter().enumerate() {
        if *key == NodeKey::Root {
            crossing = true;
            continue;
        }
        let synset = graph.synset(key)?.clone();
        if !nodes.is_empty() {
            let direction = if crossing {
                StepDirection::AcrossRoot
            } else if index < turn {
                StepDirection::Up
            } else {
                StepDirection::Down
            };
            steps.push(direction);
            crossing = false;
        }
        nodes.push(synset);
    }

    Some(FoundPath {
        nodes,
        steps,
        distance,
        via_synthetic_root: *pivot == NodeKey::Root,
    })
}

/// Shortest path between two resolved synsets.
///
/// A store failure while climbing means no path can be produced and is
/// reported as `NoPathFound`; an expired deadline stays a timeout.
pub async fn shortest_path(
    store: &dyn LexicalStore,
    a: &Synset,
    b: &Synset,
    deadline: &Deadline,
) -> ExplorerResult<FoundPath> {
    let no_path = || ExplorerError::no_path(a.id.as_str(), b.id.as_str());
    let recover = |e: ExplorerError| match e {
        ExplorerError::Store(err) => {
            debug!(from = %a.id, to = %b.id, error = %err, "Store failed during path search");
            no_path()
        }
        other => other,
    };

    let up_a = AncestorGraph::explore(store, a, deadline).await.map_err(recover)?;
    let up_b = AncestorGraph::explore(store, b, deadline).await.map_err(recover)?;

    let (pivot, distance) = closest_meeting(&up_a, &up_b).ok_or_else(no_path)?;
    assemble(&up_a, &up_b, &pivot, distance).ok_or_else(no_path)
}
