//! Rendering of synsets and traversal results into graph fragments

use std::collections::HashSet;

use super::config::ExplorerConfig;
use super::shortest_path::FoundPath;
use super::walker::Walk;
use crate::data::{
    GraphData, GraphEdge, GraphNode, PathResult, RelatedSynset, Synset, SynsetDetail,
};
use crate::taxonomy;

const NODE_TYPE: &str = "synset";

/// Converts synsets and raw edges into the rendered node/edge model.
///
/// Every fragment it produces has unique node ids, unique edge ids, edges
/// only between kept nodes, and at most `limit` nodes.
#[derive(Debug, Clone)]
pub struct GraphMaterializer {
    definition_chars: usize,
    lemmas_per_node: usize,
    label_lemmas: usize,
}

impl Default for GraphMaterializer {
    fn default() -> Self {
        Self::from_config(&ExplorerConfig::default())
    }
}

impl GraphMaterializer {
    pub fn from_config(config: &ExplorerConfig) -> Self {
        Self {
            definition_chars: config.definition_preview_chars,
            lemmas_per_node: config.lemmas_per_node,
            label_lemmas: config.label_lemmas,
        }
    }

    /// Label: the first few lemmas joined, or the id for an unlexicalized synset.
    pub fn label(&self, synset: &Synset) -> String {
        if synset.lemmas.is_empty() {
            return synset.id.to_string();
        }
        synset
            .lemmas
            .iter()
            .take(self.label_lemmas)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn node(&self, synset: &Synset) -> GraphNode {
        GraphNode {
            id: synset.id.to_string(),
            node_type: NODE_TYPE.to_string(),
            label: self.label(synset),
            pos: synset.pos,
            definition: synset.definition().map(|d| self.preview(d)),
            lemmas: synset.lemmas.iter().take(self.lemmas_per_node).cloned().collect(),
            ili: synset.ili.clone(),
        }
    }

    pub fn related(&self, synset: &Synset) -> RelatedSynset {
        RelatedSynset {
            id: synset.id.to_string(),
            pos: synset.pos,
            definition: synset.definition.clone(),
            lemmas: synset.lemmas.clone(),
        }
    }

    pub fn detail(&self, synset: &Synset, lexicon: &str) -> SynsetDetail {
        SynsetDetail {
            id: synset.id.to_string(),
            pos: synset.pos,
            lexicon: lexicon.to_string(),
            ili: synset.ili.clone(),
            definition: synset.definition.clone(),
            definitions: synset.definition.iter().cloned().collect(),
            examples: synset.examples.clone(),
            lemmas: synset.lemmas.clone(),
            lexicalized: synset.is_lexicalized(),
        }
    }

    /// A directed or symmetric edge, directedness taken from the taxonomy.
    pub fn edge(&self, id: String, source: &str, target: &str, relation: &str) -> GraphEdge {
        GraphEdge {
            id,
            source: source.to_string(),
            target: target.to_string(),
            relation: relation.to_string(),
            directed: taxonomy::is_directed(relation),
        }
    }

    /// Assembles a fragment from nodes in priority order (center first).
    pub fn graph<'a>(
        &self,
        center_id: &str,
        nodes: impl IntoIterator<Item = &'a Synset>,
        edges: impl IntoIterator<Item = GraphEdge>,
        limit: usize,
    ) -> GraphData {
        let mut seen: HashSet<String> = HashSet::new();
        let mut rendered = Vec::new();
        for synset in nodes {
            if rendered.len() >= limit {
                break;
            }
            if synset.is_placeholder() || !seen.insert(synset.id.to_string()) {
                continue;
            }
            rendered.push(self.node(synset));
        }

        let mut edge_ids: HashSet<String> = HashSet::new();
        let kept: Vec<GraphEdge> = edges
            .into_iter()
            .filter(|e| seen.contains(&e.source) && seen.contains(&e.target))
            .filter(|e| edge_ids.insert(e.id.clone()))
            .collect();

        GraphData {
            nodes: rendered,
            edges: kept,
            center_node: center_id.to_string(),
        }
    }

    pub fn walk(&self, center_id: &str, walk: &Walk, limit: usize) -> GraphData {
        let edges = walk.edges.iter().map(|e| {
            self.edge(e.id.clone(), e.source.as_str(), e.target.as_str(), e.relation.name())
        });
        self.graph(center_id, &walk.nodes, edges, limit)
    }

    pub fn path(&self, source_id: &str, target_id: &str, found: &FoundPath) -> PathResult {
        let path: Vec<GraphNode> = found.nodes.iter().map(|s| self.node(s)).collect();
        let edges = found
            .nodes
            .windows(2)
            .zip(&found.steps)
            .enumerate()
            .map(|(i, (pair, step))| GraphEdge {
                id: format!("path-edge-{}", i),
                source: pair[0].id.to_string(),
                target: pair[1].id.to_string(),
                relation: step.relation_name().to_string(),
                directed: true,
            })
            .collect();

        PathResult {
            source: source_id.to_string(),
            target: target_id.to_string(),
            length: path.len().saturating_sub(1),
            path,
            edges,
            distance: found.distance,
            via_synthetic_root: found.via_synthetic_root,
        }
    }

    fn preview(&self, definition: &str) -> String {
        match definition.char_indices().nth(self.definition_chars) {
            Some((cut, _)) => definition[..cut].to_string(),
            None => definition.to_string(),
        }
    }
}
