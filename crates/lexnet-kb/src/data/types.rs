//! Rendered result types returned by the explorer

use serde::{Deserialize, Serialize};

use crate::data::entities::PartOfSpeech;

/// A node in a rendered graph fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub label: String,
    pub pos: PartOfSpeech,
    pub definition: Option<String>,
    pub lemmas: Vec<String>,
    pub ili: Option<String>,
}

/// An edge in a rendered graph fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub relation: String,
    pub directed: bool,
}

/// Complete graph fragment for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphData {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub center_node: String,
}

impl GraphData {
    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }

    pub fn node_ids(&self) -> Vec<&str> {
        self.nodes.iter().map(|n| n.id.as_str()).collect()
    }
}

/// Result of a shortest-path query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathResult {
    pub source: String,
    pub target: String,
    pub path: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    /// Number of rendered edges (`path.len() - 1`). A path joined at the
    /// synthetic root renders one `path` edge for its two hops, so this is
    /// one less than `distance` there.
    pub length: usize,
    /// Hop count including both hops through the synthetic root. Path
    /// similarity is `1 / (distance + 1)`.
    pub distance: usize,
    pub via_synthetic_root: bool,
}

/// Similarity scores between two synsets; each is absent when undefined.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimilarityScores {
    /// `1 / (distance + 1)` over [`PathResult::distance`].
    pub path: Option<f64>,
    pub wup: Option<f64>,
    pub lch: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityResult {
    pub synset1: String,
    pub synset2: String,
    pub similarity: SimilarityScores,
}

/// Compact synset listing used in relation views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedSynset {
    pub id: String,
    pub pos: PartOfSpeech,
    pub definition: Option<String>,
    pub lemmas: Vec<String>,
}

/// Full description of a single synset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynsetDetail {
    pub id: String,
    pub pos: PartOfSpeech,
    pub lexicon: String,
    pub ili: Option<String>,
    pub definition: Option<String>,
    pub definitions: Vec<String>,
    pub examples: Vec<String>,
    pub lemmas: Vec<String>,
    pub lexicalized: bool,
}

/// Direct relations of a synset, grouped for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SynsetRelations {
    pub synset_id: String,
    pub hypernyms: Vec<RelatedSynset>,
    pub hyponyms: Vec<RelatedSynset>,
    pub holonyms: Vec<RelatedSynset>,
    pub meronyms: Vec<RelatedSynset>,
    pub similar: Vec<RelatedSynset>,
    pub also: Vec<RelatedSynset>,
    pub attributes: Vec<RelatedSynset>,
    pub domain_topics: Vec<RelatedSynset>,
    pub domain_regions: Vec<RelatedSynset>,
}

/// One complete hypernym path, nearest ancestor first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HypernymPath {
    pub path: Vec<RelatedSynset>,
    pub depth: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(rename = "type")]
    pub result_type: String,
    pub id: String,
    pub label: String,
    pub pos: Option<PartOfSpeech>,
    pub definition: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutocompleteItem {
    pub form: String,
    pub pos: PartOfSpeech,
    pub id: String,
    pub sense_count: usize,
}
