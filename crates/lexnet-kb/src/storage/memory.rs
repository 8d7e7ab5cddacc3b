use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::data::{LemmaMatch, LexiconInfo, PartOfSpeech, StoreError, Synset, SynsetId};
use crate::storage::lexicon::LexiconDocument;
use crate::taxonomy::{Relation, RELATIONS};
use crate::traits::LexicalStore;

#[derive(Debug, Clone)]
struct LemmaSense {
    form: String,
    pos: PartOfSpeech,
    synset_id: SynsetId,
}

/// In-memory lexical store.
///
/// Built once (from a [`LexiconDocument`] or by hand) and read-only afterwards,
/// so it can be shared behind an `Arc` without locking.
#[derive(Debug, Clone)]
pub struct MemoryLexicalStore {
    info: LexiconInfo,
    synsets: HashMap<SynsetId, Synset>,
    order: Vec<SynsetId>,
    edges: HashMap<(SynsetId, &'static str), Vec<SynsetId>>,
    lemma_index: BTreeMap<String, Vec<LemmaSense>>,
}

impl MemoryLexicalStore {
    pub fn new(info: LexiconInfo) -> Self {
        Self {
            info,
            synsets: HashMap::new(),
            order: Vec::new(),
            edges: HashMap::new(),
            lemma_index: BTreeMap::new(),
        }
    }

    /// Builds a store from a parsed lexicon document, inferring missing inverse edges.
    pub fn from_document(document: LexiconDocument) -> Self {
        let mut store = Self::new(LexiconInfo {
            id: document.id.clone(),
            version: document.version.clone(),
            label: document.label.clone(),
            language: document.language.clone(),
        });

        for entry in &document.synsets {
            store.insert_synset(entry.to_synset());
        }

        let mut skipped = 0usize;
        for entry in &document.synsets {
            for relation_entry in &entry.relations {
                match Relation::from_name(&relation_entry.relation_type) {
                    Some(relation) => {
                        store.insert_relation(&entry.id, relation, &relation_entry.target);
                    }
                    None => {
                        skipped += 1;
                        warn!(
                            synset_id = %entry.id,
                            relation = %relation_entry.relation_type,
                            "Skipping relation of unknown type"
                        );
                    }
                }
            }
        }

        let inferred = store.infer_inverses();
        info!(
            lexicon = %store.info.id,
            synsets = store.order.len(),
            inferred_edges = inferred,
            skipped_edges = skipped,
            "Loaded lexicon into memory store"
        );
        store
    }

    pub fn from_json_str(json: &str) -> Result<Self, StoreError> {
        let document = LexiconDocument::from_json_str(json)?;
        Ok(Self::from_document(document))
    }

    /// Reads and parses a JSON lexicon file.
    pub async fn load_json(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Reading lexicon file");
        let json = tokio::fs::read_to_string(path).await?;
        Self::from_json_str(&json)
    }

    /// Inserts or replaces a synset and indexes its lemmas.
    pub fn insert_synset(&mut self, synset: Synset) {
        if self.synsets.contains_key(&synset.id) {
            for senses in self.lemma_index.values_mut() {
                senses.retain(|s| s.synset_id != synset.id);
            }
        } else {
            self.order.push(synset.id.clone());
        }

        for lemma in &synset.lemmas {
            self.lemma_index
                .entry(lemma.to_lowercase())
                .or_default()
                .push(LemmaSense {
                    form: lemma.clone(),
                    pos: synset.pos,
                    synset_id: synset.id.clone(),
                });
        }
        self.synsets.insert(synset.id.clone(), synset);
    }

    /// Adds a typed edge. Returns false if the edge was already present.
    pub fn insert_relation(&mut self, source: &SynsetId, relation: Relation, target: &SynsetId) -> bool {
        let targets = self
            .edges
            .entry((source.clone(), relation.name()))
            .or_default();
        if targets.contains(target) {
            return false;
        }
        targets.push(target.clone());
        true
    }

    /// Adds the inverse of every edge whose inverse is missing and whose endpoints both exist.
    /// Returns the number of edges added.
    pub fn infer_inverses(&mut self) -> usize {
        let mut missing = Vec::new();
        for source in &self.order {
            for relation in RELATIONS {
                let Some(inverse) = relation.inverse() else { continue };
                let Some(targets) = self.edges.get(&(source.clone(), relation.name())) else {
                    continue;
                };
                for target in targets {
                    if !self.synsets.contains_key(target) {
                        continue;
                    }
                    missing.push((target.clone(), inverse, source.clone()));
                }
            }
        }

        missing
            .into_iter()
            .filter(|(source, relation, target)| self.insert_relation(source, *relation, target))
            .count()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[async_trait]
impl LexicalStore for MemoryLexicalStore {
    async fn resolve(&self, id: &str) -> Result<Option<Synset>, StoreError> {
        Ok(self.synsets.get(id).cloned())
    }

    async fn relations_of(
        &self,
        synset: &Synset,
        relation: Relation,
    ) -> Result<Vec<Synset>, StoreError> {
        let Some(targets) = self.edges.get(&(synset.id.clone(), relation.name())) else {
            return Ok(Vec::new());
        };
        Ok(targets
            .iter()
            .map(|id| {
                self.synsets
                    .get(id)
                    .cloned()
                    .unwrap_or_else(|| Synset::placeholder(synset.pos))
            })
            .collect())
    }

    async fn synsets_by_lemma(
        &self,
        lemma: &str,
        pos: Option<PartOfSpeech>,
    ) -> Result<Vec<Synset>, StoreError> {
        let Some(senses) = self.lemma_index.get(&lemma.trim().to_lowercase()) else {
            return Ok(Vec::new());
        };
        let mut found: Vec<Synset> = Vec::new();
        for sense in senses {
            if pos.map_or(false, |p| p != sense.pos) {
                continue;
            }
            if found.iter().any(|s| s.id == sense.synset_id) {
                continue;
            }
            if let Some(synset) = self.synsets.get(&sense.synset_id) {
                found.push(synset.clone());
            }
        }
        Ok(found)
    }

    async fn lemmas_with_prefix(
        &self,
        prefix: &str,
        limit: usize,
    ) -> Result<Vec<LemmaMatch>, StoreError> {
        let prefix = prefix.trim().to_lowercase();
        let mut matches: Vec<LemmaMatch> = Vec::new();

        for (_, senses) in self
            .lemma_index
            .range(prefix.clone()..)
            .take_while(|(key, _)| key.starts_with(&prefix))
        {
            for sense in senses {
                if let Some(existing) = matches
                    .iter_mut()
                    .find(|m| m.form == sense.form && m.pos == sense.pos)
                {
                    existing.sense_count += 1;
                    continue;
                }
                if matches.len() >= limit {
                    continue;
                }
                matches.push(LemmaMatch {
                    form: sense.form.clone(),
                    pos: sense.pos,
                    synset_id: sense.synset_id.clone(),
                    sense_count: 1,
                });
            }
        }
        Ok(matches)
    }

    async fn synsets_by_pos(&self, pos: PartOfSpeech) -> Result<Vec<Synset>, StoreError> {
        Ok(self
            .order
            .iter()
            .filter_map(|id| self.synsets.get(id))
            .filter(|s| s.pos == pos)
            .cloned()
            .collect())
    }

    fn lexicon(&self) -> LexiconInfo {
        self.info.clone()
    }
}
