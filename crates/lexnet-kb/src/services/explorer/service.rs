use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use super::config::{bounded, ExplorerConfig};
use super::deadline::Deadline;
use super::hypernyms::{self, PathLimits};
use super::materializer::GraphMaterializer;
use super::shortest_path;
use super::similarity::{self, TaxonomyDepthCache};
use super::walker::{self, WalkLimits};
use crate::data::{
    is_placeholder_id, AutocompleteItem, ExplorerError, ExplorerResult, GraphData, HypernymPath,
    PartOfSpeech, PathResult, RelatedSynset, SearchResult, SimilarityResult, Synset, SynsetDetail,
    SynsetRelations,
};
use crate::taxonomy::{self, Relation};
use crate::traits::LexicalStore;

/// Read-only exploration facade over a lexical store.
///
/// Cheap to clone: the store and the taxonomy-depth cache are shared.
#[derive(Clone)]
pub struct ExplorerService {
    store: Arc<dyn LexicalStore>,
    config: ExplorerConfig,
    depth_cache: Arc<TaxonomyDepthCache>,
    materializer: GraphMaterializer,
    timeout: Duration,
}

impl std::fmt::Debug for ExplorerService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExplorerService")
            .field("lexicon", &self.store.lexicon().id)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ExplorerService {
    pub fn new(store: Arc<dyn LexicalStore>, config: ExplorerConfig) -> Self {
        Self {
            materializer: GraphMaterializer::from_config(&config),
            timeout: config.timeout(),
            depth_cache: Arc::new(TaxonomyDepthCache::new()),
            store,
            config,
        }
    }

    /// Overrides the per-operation deadline from the config.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<dyn LexicalStore> {
        &self.store
    }

    pub fn depth_cache(&self) -> &TaxonomyDepthCache {
        &self.depth_cache
    }

    /// Neighbors of a synset up to `depth` levels, following `relations`
    /// (the curated default set when none are named).
    #[instrument(skip(self, relations), fields(relations = ?relations))]
    pub async fn neighborhood(
        &self,
        center_id: &str,
        depth: Option<usize>,
        relations: Option<&[String]>,
        limit: Option<usize>,
    ) -> ExplorerResult<GraphData> {
        let c = &self.config;
        let depth = bounded("depth", depth, c.neighborhood_default_depth, c.neighborhood_max_depth)?;
        let limit = bounded("limit", limit, c.neighborhood_default_limit, c.neighborhood_max_limit)?;
        let relations = match relations {
            Some(names) if !names.is_empty() => taxonomy::resolve_names(names),
            _ => taxonomy::default_neighborhood_relations(),
        };

        self.guarded("neighborhood", |deadline| async move {
            let center = self.resolve(center_id).await?;
            let center_id = center.id.to_string();
            let limits = WalkLimits { depth, node_limit: limit };
            let walk = walker::walk(self.store.as_ref(), center, &relations, limits, &deadline).await?;
            debug!(nodes = walk.nodes.len(), edges = walk.edges.len(), levels = walk.levels, "Neighborhood expanded");
            Ok(self.materializer.walk(&center_id, &walk, limit))
        })
        .await
    }

    /// Hyponym subtree below a synset.
    #[instrument(skip(self))]
    pub async fn hyponym_subtree(
        &self,
        center_id: &str,
        max_depth: Option<usize>,
        limit: Option<usize>,
    ) -> ExplorerResult<GraphData> {
        let c = &self.config;
        let depth = bounded("max_depth", max_depth, c.subtree_default_depth, c.subtree_max_depth)?;
        let limit = bounded("limit", limit, c.subtree_default_limit, c.subtree_max_limit)?;

        self.guarded("hyponym_subtree", |deadline| async move {
            let center = self.resolve(center_id).await?;
            let center_id = center.id.to_string();
            let limits = WalkLimits { depth, node_limit: limit };
            let walk =
                walker::walk(self.store.as_ref(), center, &[taxonomy::HYPONYM], limits, &deadline).await?;
            Ok(self.materializer.walk(&center_id, &walk, limit))
        })
        .await
    }

    /// The synset plus every hypernym path to a root, each cut to `max_depth` nodes.
    #[instrument(skip(self))]
    pub async fn hypernym_tree(
        &self,
        center_id: &str,
        max_depth: Option<usize>,
    ) -> ExplorerResult<GraphData> {
        let c = &self.config;
        let max_depth = bounded("max_depth", max_depth, c.tree_default_path_depth, c.tree_max_path_depth)?;
        let limits = PathLimits {
            max_path_nodes: Some(max_depth),
            max_paths: c.max_hypernym_paths,
        };

        self.guarded("hypernym_tree", |deadline| async move {
            let center = self.resolve(center_id).await?;
            let found = hypernyms::enumerate(self.store.as_ref(), &center, limits, &deadline).await?;

            let mut nodes: Vec<&Synset> = vec![&center];
            let mut edges = Vec::new();
            for path in &found.paths {
                let mut below = &center;
                for ancestor in path {
                    nodes.push(ancestor);
                    edges.push(self.materializer.edge(
                        format!("hyper-{}-{}", below.id, ancestor.id),
                        below.id.as_str(),
                        ancestor.id.as_str(),
                        taxonomy::HYPERNYM.name(),
                    ));
                    below = ancestor;
                }
            }
            debug!(
                paths = found.paths.len(),
                roots = found.roots.len(),
                max_length = found.max_length,
                "Hypernym tree assembled"
            );
            // The center is always rendered, whatever the cap.
            Ok(self
                .materializer
                .graph(center.id.as_str(), nodes, edges, self.config.tree_node_cap.max(1)))
        })
        .await
    }

    /// Every complete hypernym path, untruncated, nearest ancestor first.
    #[instrument(skip(self))]
    pub async fn hypernym_paths(&self, id: &str) -> ExplorerResult<Vec<HypernymPath>> {
        let limits = PathLimits {
            max_path_nodes: None,
            max_paths: self.config.max_hypernym_paths,
        };
        self.guarded("hypernym_paths", |deadline| async move {
            let synset = self.resolve(id).await?;
            let found = hypernyms::enumerate(self.store.as_ref(), &synset, limits, &deadline).await?;
            Ok(found
                .paths
                .iter()
                .map(|path| HypernymPath {
                    path: path.iter().map(|s| self.materializer.related(s)).collect(),
                    depth: path.len(),
                })
                .collect())
        })
        .await
    }

    /// Shortest hypernym/hyponym path, through the synthetic root if needed.
    #[instrument(skip(self))]
    pub async fn shortest_path(&self, source_id: &str, target_id: &str) -> ExplorerResult<PathResult> {
        self.guarded("shortest_path", |deadline| async move {
            let source = self.resolve(source_id).await?;
            let target = self.resolve(target_id).await?;
            let found = shortest_path::shortest_path(self.store.as_ref(), &source, &target, &deadline).await?;
            Ok(self
                .materializer
                .path(source.id.as_str(), target.id.as_str(), &found))
        })
        .await
    }

    /// Path, Wu-Palmer and Leacock-Chodorow similarity between two synsets.
    #[instrument(skip(self))]
    pub async fn similarity(&self, id1: &str, id2: &str) -> ExplorerResult<SimilarityResult> {
        self.guarded("similarity", |deadline| async move {
            let s1 = self.resolve(id1).await?;
            let s2 = self.resolve(id2).await?;
            let scores =
                similarity::score(self.store.as_ref(), &self.depth_cache, &s1, &s2, &deadline).await?;
            Ok(SimilarityResult {
                synset1: s1.id.to_string(),
                synset2: s2.id.to_string(),
                similarity: scores,
            })
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn synset(&self, id: &str) -> ExplorerResult<SynsetDetail> {
        self.guarded("synset", |_| async move {
            let synset = self.resolve(id).await?;
            Ok(self.materializer.detail(&synset, &self.store.lexicon().id))
        })
        .await
    }

    /// Direct relations grouped for display. Failed lookups leave their group empty.
    #[instrument(skip(self))]
    pub async fn synset_relations(&self, id: &str) -> ExplorerResult<SynsetRelations> {
        use taxonomy::*;

        self.guarded("synset_relations", |deadline| async move {
            let synset = self.resolve(id).await?;
            Ok(SynsetRelations {
                synset_id: synset.id.to_string(),
                hypernyms: self.related(&synset, UPWARD, &deadline).await?,
                hyponyms: self.related(&synset, DOWNWARD, &deadline).await?,
                holonyms: self
                    .related(&synset, &[HOLO_MEMBER, HOLO_PART, HOLO_SUBSTANCE], &deadline)
                    .await?,
                meronyms: self
                    .related(&synset, &[MERO_MEMBER, MERO_PART, MERO_SUBSTANCE], &deadline)
                    .await?,
                similar: self.related(&synset, &[SIMILAR], &deadline).await?,
                also: self.related(&synset, &[ALSO], &deadline).await?,
                attributes: self.related(&synset, &[ATTRIBUTE], &deadline).await?,
                domain_topics: self.related(&synset, &[DOMAIN_TOPIC], &deadline).await?,
                domain_regions: self.related(&synset, &[DOMAIN_REGION], &deadline).await?,
            })
        })
        .await
    }

    /// Synsets reached by following one relation up to `depth` times, in
    /// breadth-first order. An unknown relation name reaches nothing.
    #[instrument(skip(self))]
    pub async fn transitive(
        &self,
        id: &str,
        relation: &str,
        depth: Option<usize>,
    ) -> ExplorerResult<Vec<RelatedSynset>> {
        let relations: Vec<Relation> = Relation::from_name(relation).into_iter().collect();
        self.closure("transitive", id, relations, depth).await
    }

    /// Transitive hypernyms, instance hypernyms included.
    pub async fn hypernyms(&self, id: &str, depth: Option<usize>) -> ExplorerResult<Vec<RelatedSynset>> {
        self.closure("hypernyms", id, taxonomy::UPWARD.to_vec(), depth).await
    }

    /// Transitive hyponyms, instance hyponyms included.
    pub async fn hyponyms(&self, id: &str, depth: Option<usize>) -> ExplorerResult<Vec<RelatedSynset>> {
        self.closure("hyponyms", id, taxonomy::DOWNWARD.to_vec(), depth).await
    }

    /// Synset lookup by id, falling back to exact lemma match.
    #[instrument(skip(self))]
    pub async fn search(
        &self,
        query: &str,
        pos: Option<&str>,
        limit: Option<usize>,
    ) -> ExplorerResult<Vec<SearchResult>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ExplorerError::invalid_argument("q", query, "must not be empty"));
        }
        let pos = pos
            .filter(|p| !p.trim().is_empty())
            .map(|p| {
                p.parse::<PartOfSpeech>()
                    .map_err(|reason| ExplorerError::invalid_argument("pos", p, reason))
            })
            .transpose()?;
        let c = &self.config;
        let limit = bounded("limit", limit, c.search_default_limit, c.search_max_limit)?;

        self.guarded("search", |_| async move {
            let direct = if is_placeholder_id(query) {
                None
            } else {
                self.store.resolve(query).await.ok().flatten()
            };
            let synsets = match direct {
                Some(synset) if pos.map_or(true, |p| p == synset.pos) => vec![synset],
                Some(_) => Vec::new(),
                None => self.store.synsets_by_lemma(query, pos).await?,
            };

            Ok(synsets
                .iter()
                .filter(|s| !s.is_placeholder())
                .take(limit)
                .map(|s| {
                    let node = self.materializer.node(s);
                    SearchResult {
                        result_type: node.node_type,
                        id: node.id,
                        label: node.label,
                        pos: Some(node.pos),
                        definition: node.definition,
                    }
                })
                .collect())
        })
        .await
    }

    /// Distinct lemma forms starting with `prefix`.
    #[instrument(skip(self))]
    pub async fn autocomplete(
        &self,
        prefix: &str,
        limit: Option<usize>,
    ) -> ExplorerResult<Vec<AutocompleteItem>> {
        let c = &self.config;
        let limit = bounded("limit", limit, c.autocomplete_default_limit, c.autocomplete_max_limit)?;
        let prefix = prefix.trim();
        if prefix.chars().count() < c.autocomplete_min_chars {
            return Ok(Vec::new());
        }

        self.guarded("autocomplete", |_| async move {
            let matches = self.store.lemmas_with_prefix(prefix, limit).await?;
            Ok(matches
                .into_iter()
                .map(|m| AutocompleteItem {
                    form: m.form,
                    pos: m.pos,
                    id: m.synset_id.into_string(),
                    sense_count: m.sense_count,
                })
                .collect())
        })
        .await
    }

    /// Resolves an id to a real synset. Malformed ids, placeholders and
    /// store failures all surface as `NotFound`.
    async fn resolve(&self, id: &str) -> ExplorerResult<Synset> {
        let id = id.trim();
        if is_placeholder_id(id) {
            return Err(ExplorerError::not_found(id));
        }
        match self.store.resolve(id).await {
            Ok(Some(synset)) if !synset.is_placeholder() => Ok(synset),
            Ok(_) => Err(ExplorerError::not_found(id)),
            Err(e) => {
                debug!(synset_id = %id, error = %e, "Store failed to resolve synset");
                Err(ExplorerError::not_found(id))
            }
        }
    }

    async fn related(
        &self,
        synset: &Synset,
        relations: &[Relation],
        deadline: &Deadline,
    ) -> ExplorerResult<Vec<RelatedSynset>> {
        let mut related = Vec::new();
        for relation in relations {
            deadline.check()?;
            match self.store.relations_of(synset, *relation).await {
                Ok(targets) => related.extend(
                    targets
                        .iter()
                        .filter(|t| !t.is_placeholder())
                        .map(|t| self.materializer.related(t)),
                ),
                Err(e) => warn!(
                    synset_id = %synset.id,
                    relation = %relation,
                    error = %e,
                    "Relation lookup failed, treating as no edges"
                ),
            }
        }
        Ok(related)
    }

    async fn closure(
        &self,
        operation: &'static str,
        id: &str,
        relations: Vec<Relation>,
        depth: Option<usize>,
    ) -> ExplorerResult<Vec<RelatedSynset>> {
        let c = &self.config;
        let depth = bounded("depth", depth, 1, c.tree_max_path_depth)?;
        let limits = WalkLimits {
            depth,
            node_limit: c.tree_node_cap.saturating_add(1),
        };

        self.guarded(operation, |deadline| async move {
            let synset = self.resolve(id).await?;
            let walk = walker::walk(self.store.as_ref(), synset, &relations, limits, &deadline).await?;
            Ok(walk
                .nodes
                .iter()
                .skip(1)
                .map(|s| self.materializer.related(s))
                .collect())
        })
        .await
    }

    /// Runs one operation under the configured deadline.
    async fn guarded<T, F, Fut>(&self, operation: &'static str, run: F) -> ExplorerResult<T>
    where
        F: FnOnce(Deadline) -> Fut,
        Fut: Future<Output = ExplorerResult<T>>,
    {
        let deadline = Deadline::after(operation, self.timeout);
        let result = match tokio::time::timeout(self.timeout, run(deadline)).await {
            Ok(result) => result,
            Err(_) => Err(deadline.timeout_error()),
        };
        if let Err(e) = &result {
            if e.is_timeout() {
                warn!(operation = operation, timeout_ms = self.timeout.as_millis() as u64, "Operation timed out");
            }
        }
        result
    }
}
