//! Path, Wu-Palmer and Leacock-Chodorow similarity

use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, warn};

use super::deadline::Deadline;
use super::shortest_path::{closest_meeting, AncestorGraph, NodeKey};
use crate::data::{ExplorerError, ExplorerResult, PartOfSpeech, SimilarityScores, Synset, SynsetId};
use crate::traits::LexicalStore;

#[derive(Debug, Clone)]
struct CachedDepth {
    store_version: String,
    depth: usize,
}

/// Maximum taxonomy depth per part of speech, computed once per store version.
///
/// Concurrent misses may both compute the depth; readers only ever see a
/// complete value.
#[derive(Debug, Default)]
pub struct TaxonomyDepthCache {
    entries: RwLock<HashMap<PartOfSpeech, CachedDepth>>,
}

impl TaxonomyDepthCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, pos: PartOfSpeech, store_version: &str) -> Option<usize> {
        let entries = self.entries.read();
        entries
            .get(&pos)
            .filter(|cached| cached.store_version == store_version)
            .map(|cached| cached.depth)
    }

    pub fn insert(&self, pos: PartOfSpeech, store_version: impl Into<String>, depth: usize) {
        self.entries.write().insert(
            pos,
            CachedDepth {
                store_version: store_version.into(),
                depth,
            },
        );
    }

    pub fn invalidate(&self) {
        self.entries.write().clear();
    }

    /// Cached depth for `pos`, computing it on a miss or after the store version changed.
    pub async fn depth_for(
        &self,
        store: &dyn LexicalStore,
        pos: PartOfSpeech,
        deadline: &Deadline,
    ) -> ExplorerResult<usize> {
        let version = store.version();
        if let Some(depth) = self.get(pos, &version) {
            return Ok(depth);
        }

        let depth = taxonomy_depth(store, pos, deadline).await?;
        info!(pos = %pos, depth, store_version = %version, "Computed taxonomy depth");
        self.insert(pos, version, depth);
        Ok(depth)
    }
}

/// Longest hypernym chain, in edges, among all synsets of one part of speech.
pub async fn taxonomy_depth(
    store: &dyn LexicalStore,
    pos: PartOfSpeech,
    deadline: &Deadline,
) -> ExplorerResult<usize> {
    let synsets = store.synsets_by_pos(pos).await?;
    let mut parents: HashMap<SynsetId, Vec<SynsetId>> = HashMap::with_capacity(synsets.len());
    for synset in &synsets {
        deadline.check()?;
        let hypernyms = store
            .hypernyms_of(synset)
            .await?
            .into_iter()
            .filter(|h| !h.is_placeholder())
            .map(|h| h.id)
            .collect();
        parents.insert(synset.id.clone(), hypernyms);
    }

    let mut memo: HashMap<SynsetId, usize> = HashMap::with_capacity(parents.len());
    let mut deepest = 0;
    for synset in &synsets {
        let mut in_progress = HashSet::new();
        deepest = deepest.max(chain_length(&synset.id, &parents, &mut memo, &mut in_progress));
    }
    Ok(deepest)
}

fn chain_length(
    id: &SynsetId,
    parents: &HashMap<SynsetId, Vec<SynsetId>>,
    memo: &mut HashMap<SynsetId, usize>,
    in_progress: &mut HashSet<SynsetId>,
) -> usize {
    if let Some(length) = memo.get(id) {
        return *length;
    }
    if !in_progress.insert(id.clone()) {
        return 0;
    }
    let length = parents
        .get(id)
        .map(|ps| {
            ps.iter()
                .map(|p| chain_length(p, parents, memo, in_progress) + 1)
                .max()
                .unwrap_or(0)
        })
        .unwrap_or(0);
    in_progress.remove(id);
    memo.insert(id.clone(), length);
    length
}

/// Least common subsumer: the shared ancestor deepest below the synthetic
/// root, ties broken by the smaller summed distance, then discovery order.
/// Returns the key with its distances from `a` and `b`.
pub fn least_common_subsumer(
    a: &AncestorGraph,
    b: &AncestorGraph,
) -> Option<(NodeKey, usize, usize)> {
    let mut best: Option<(NodeKey, usize, usize, usize)> = None;
    for key in a.keys() {
        let (Some(da), Some(db)) = (a.distance_to(key), b.distance_to(key)) else {
            continue;
        };
        let depth = a.depth_from_root(key);
        let better = match &best {
            None => true,
            Some((_, best_depth, best_da, best_db)) => {
                depth > *best_depth || (depth == *best_depth && da + db < best_da + best_db)
            }
        };
        if better {
            best = Some((key.clone(), depth, da, db));
        }
    }
    best.map(|(key, _, da, db)| (key, da, db))
}

pub fn path_similarity(distance: usize) -> f64 {
    1.0 / (distance as f64 + 1.0)
}

/// `2k / (i + j + 2k)` with `k` the LCS depth below the synthetic root.
pub fn wu_palmer(lcs_depth: usize, i: usize, j: usize) -> Option<f64> {
    let k = lcs_depth as f64;
    let denominator = i as f64 + j as f64 + 2.0 * k;
    if denominator == 0.0 {
        return None;
    }
    Some(2.0 * k / denominator)
}

/// `-ln((distance + 1) / (2 * max_depth))`; undefined for an empty taxonomy.
pub fn leacock_chodorow(distance: usize, max_depth: usize) -> Option<f64> {
    if max_depth == 0 {
        return None;
    }
    Some(-((distance as f64 + 1.0) / (2.0 * max_depth as f64)).ln())
}

/// Computes all three scores; each one is independently absent when undefined.
pub async fn score(
    store: &dyn LexicalStore,
    depth_cache: &TaxonomyDepthCache,
    a: &Synset,
    b: &Synset,
    deadline: &Deadline,
) -> ExplorerResult<SimilarityScores> {
    let mut scores = SimilarityScores::default();

    let graphs = match explore_pair(store, a, b, deadline).await {
        Ok(graphs) => Some(graphs),
        Err(e) if e.is_timeout() => return Err(e),
        Err(e) => {
            warn!(synset1 = %a.id, synset2 = %b.id, error = %e, "Hierarchy unavailable for similarity");
            None
        }
    };

    let meeting = graphs.as_ref().and_then(|(ga, gb)| closest_meeting(ga, gb));
    if let Some((_, distance)) = &meeting {
        scores.path = Some(path_similarity(*distance));
    }

    if let Some((ga, gb)) = &graphs {
        scores.wup = least_common_subsumer(ga, gb)
            .and_then(|(lcs, i, j)| wu_palmer(ga.depth_from_root(&lcs), i, j));
    }

    if a.pos != b.pos {
        debug!(synset1 = %a.id, synset2 = %b.id, "Parts of speech differ, skipping lch");
    } else if let Some((_, distance)) = meeting {
        match depth_cache.depth_for(store, a.pos, deadline).await {
            Ok(max_depth) => scores.lch = leacock_chodorow(distance, max_depth),
            Err(e) if e.is_timeout() => return Err(e),
            Err(e) => warn!(pos = %a.pos, error = %e, "Taxonomy depth unavailable, skipping lch"),
        }
    }

    Ok(scores)
}

async fn explore_pair(
    store: &dyn LexicalStore,
    a: &Synset,
    b: &Synset,
    deadline: &Deadline,
) -> Result<(AncestorGraph, AncestorGraph), ExplorerError> {
    let ga = AncestorGraph::explore(store, a, deadline).await?;
    let gb = AncestorGraph::explore(store, b, deadline).await?;
    Ok((ga, gb))
}
