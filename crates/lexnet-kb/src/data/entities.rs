//! Entity definitions for the lexical network

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::data::identifiers::{SynsetId, INFERRED_MARKER};

/// Part-of-speech tag of a synset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartOfSpeech {
    #[serde(rename = "n")]
    Noun,
    #[serde(rename = "v")]
    Verb,
    #[serde(rename = "a")]
    Adjective,
    #[serde(rename = "r")]
    Adverb,
    #[serde(rename = "s")]
    AdjectiveSatellite,
}

impl PartOfSpeech {
    pub fn as_tag(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "n",
            PartOfSpeech::Verb => "v",
            PartOfSpeech::Adjective => "a",
            PartOfSpeech::Adverb => "r",
            PartOfSpeech::AdjectiveSatellite => "s",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl FromStr for PartOfSpeech {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "n" | "noun" => Ok(PartOfSpeech::Noun),
            "v" | "verb" => Ok(PartOfSpeech::Verb),
            "a" | "adj" | "adjective" => Ok(PartOfSpeech::Adjective),
            "r" | "adv" | "adverb" => Ok(PartOfSpeech::Adverb),
            "s" | "satellite" => Ok(PartOfSpeech::AdjectiveSatellite),
            other => Err(format!("unknown part of speech '{}'", other)),
        }
    }
}

/// A concept node: an immutable record owned by the lexical store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Synset {
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
}

impl Synset {
    pub fn new(id: impl Into<SynsetId>, pos: PartOfSpeech) -> Self {
        Self {
            id: id.into(),
            pos,
            lemmas: Vec::new(),
            definition: None,
            examples: Vec::new(),
            ili: None,
        }
    }

    /// Sentinel for a relation target the store could not materialize.
    pub fn placeholder(pos: PartOfSpeech) -> Self {
        Self::new(INFERRED_MARKER, pos)
    }

    pub fn with_lemmas<I, S>(mut self, lemmas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lemmas = lemmas.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = Some(definition.into());
        self
    }

    pub fn lemmas(&self) -> &[String] {
        &self.lemmas
    }

    pub fn definition(&self) -> Option<&str> {
        self.definition.as_deref()
    }

    pub fn part_of_speech(&self) -> PartOfSpeech {
        self.pos
    }

    pub fn interlingual_id(&self) -> Option<&str> {
        self.ili.as_deref()
    }

    pub fn is_placeholder(&self) -> bool {
        self.id.is_placeholder()
    }

    /// A synset without any lemma is unlexicalized.
    pub fn is_lexicalized(&self) -> bool {
        !self.lemmas.is_empty()
    }
}

/// Descriptive metadata about the lexicon a store serves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexiconInfo {
    pub id: String,
    pub version: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub language: String,
}

/// A lemma matched by prefix, as returned for autocompletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LemmaMatch {
    pub form: String,
    pub pos: PartOfSpeech,
    pub synset_id: SynsetId,
    pub sense_count: usize,
}
