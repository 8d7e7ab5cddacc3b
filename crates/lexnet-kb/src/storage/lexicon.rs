//! JSON lexicon document format read by the in-memory store

use serde::{Deserialize, Serialize};

use crate::data::{PartOfSpeech, Synset, SynsetId};

/// A lexicon file: metadata plus synsets with their outgoing relations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexiconDocument {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub language: String,
    pub version: String,
    #[serde(default)]
    pub synsets: Vec<SynsetEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynsetEntry {
    pub id: SynsetId,
    pub pos: PartOfSpeech,
    #[serde(default)]
    pub lemmas: Vec<String>,
    #[serde(default)]
    pub definition: Option<String>,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default)]
    pub ili: Option<String>,
    #[serde(default)]
    pub relations: Vec<RelationEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationEntry {
    #[serde(rename = "type")]
    pub relation_type: String,
    pub target: SynsetId,
}

impl SynsetEntry {
    pub fn to_synset(&self) -> Synset {
        Synset {
            id: self.id.clone(),
            pos: self.pos,
            lemmas: self.lemmas.clone(),
            definition: self.definition.clone(),
            examples: self.examples.clone(),
            ili: self.ili.clone(),
        }
    }
}

impl LexiconDocument {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
