use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::data::{LemmaMatch, LexiconInfo, PartOfSpeech, StoreError, Synset};
use crate::taxonomy::Relation;
use crate::traits::LexicalStore;

/// Wraps a store and fails every lookup of the given relation types.
pub struct FailingRelationStore {
    inner: Arc<dyn LexicalStore>,
    relations: Vec<Relation>,
}

impl FailingRelationStore {
    pub fn new(inner: Arc<dyn LexicalStore>, relation: Relation) -> Self {
        Self::all_of(inner, &[relation])
    }

    pub fn all_of(inner: Arc<dyn LexicalStore>, relations: &[Relation]) -> Self {
        Self {
            inner,
            relations: relations.to_vec(),
        }
    }
}

#[async_trait]
impl LexicalStore for FailingRelationStore {
    async fn resolve(&self, id: &str) -> Result<Option<Synset>, StoreError> {
        self.inner.resolve(id).await
    }

    async fn relations_of(
        &self,
        synset: &Synset,
        relation: Relation,
    ) -> Result<Vec<Synset>, StoreError> {
        if self.relations.contains(&relation) {
            return Err(StoreError::RelationLookup {
                synset_id: synset.id.to_string(),
                relation: relation.name().to_string(),
                message: "injected failure".to_string(),
            });
        }
        self.inner.relations_of(synset, relation).await
    }

    async fn synsets_by_lemma(
        &self,
        lemma: &str,
        pos: Option<PartOfSpeech>,
    ) -> Result<Vec<Synset>, StoreError> {
        self.inner.synsets_by_lemma(lemma, pos).await
    }

    async fn lemmas_with_prefix(
        &self,
        prefix: &str,
        limit: usize,
    ) -> Result<Vec<LemmaMatch>, StoreError> {
        self.inner.lemmas_with_prefix(prefix, limit).await
    }

    async fn synsets_by_pos(&self, pos: PartOfSpeech) -> Result<Vec<Synset>, StoreError> {
        self.inner.synsets_by_pos(pos).await
    }

    fn lexicon(&self) -> LexiconInfo {
        self.inner.lexicon()
    }
}

/// Wraps a store and sleeps before every relation lookup.
pub struct SlowStore {
    inner: Arc<dyn LexicalStore>,
    delay: Duration,
}

impl SlowStore {
    pub fn new(inner: Arc<dyn LexicalStore>, delay: Duration) -> Self {
        Self { inner, delay }
    }
}

#[async_trait]
impl LexicalStore for SlowStore {
    async fn resolve(&self, id: &str) -> Result<Option<Synset>, StoreError> {
        self.inner.resolve(id).await
    }

    async fn relations_of(
        &self,
        synset: &Synset,
        relation: Relation,
    ) -> Result<Vec<Synset>, StoreError> {
        tokio::time::sleep(self.delay).await;
        self.inner.relations_of(synset, relation).await
    }

    async fn synsets_by_lemma(
        &self,
        lemma: &str,
        pos: Option<PartOfSpeech>,
    ) -> Result<Vec<Synset>, StoreError> {
        self.inner.synsets_by_lemma(lemma, pos).await
    }

    async fn lemmas_with_prefix(
        &self,
        prefix: &str,
        limit: usize,
    ) -> Result<Vec<LemmaMatch>, StoreError> {
        self.inner.lemmas_with_prefix(prefix, limit).await
    }

    async fn synsets_by_pos(&self, pos: PartOfSpeech) -> Result<Vec<Synset>, StoreError> {
        self.inner.synsets_by_pos(pos).await
    }

    fn lexicon(&self) -> LexiconInfo {
        self.inner.lexicon()
    }
}

/// Wraps a store and fails full part-of-speech scans only, so the taxonomy
/// depth cannot be computed while the hierarchy itself stays readable.
pub struct FailingScanStore {
    inner: Arc<dyn LexicalStore>,
}

impl FailingScanStore {
    pub fn new(inner: Arc<dyn LexicalStore>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl LexicalStore for FailingScanStore {
    async fn resolve(&self, id: &str) -> Result<Option<Synset>, StoreError> {
        self.inner.resolve(id).await
    }

    async fn relations_of(
        &self,
        synset: &Synset,
        relation: Relation,
    ) -> Result<Vec<Synset>, StoreError> {
        self.inner.relations_of(synset, relation).await
    }

    async fn synsets_by_lemma(
        &self,
        lemma: &str,
        pos: Option<PartOfSpeech>,
    ) -> Result<Vec<Synset>, StoreError> {
        self.inner.synsets_by_lemma(lemma, pos).await
    }

    async fn lemmas_with_prefix(
        &self,
        prefix: &str,
        limit: usize,
    ) -> Result<Vec<LemmaMatch>, StoreError> {
        self.inner.lemmas_with_prefix(prefix, limit).await
    }

    async fn synsets_by_pos(&self, pos: PartOfSpeech) -> Result<Vec<Synset>, StoreError> {
        Err(StoreError::Unavailable(format!("scan of '{}' synsets refused", pos)))
    }

    fn lexicon(&self) -> LexiconInfo {
        self.inner.lexicon()
    }
}

/// A store whose backend is down: every call fails.
#[derive(Debug, Default)]
pub struct FailingStore;

impl FailingStore {
    fn down() -> StoreError {
        StoreError::Unavailable("backend offline".to_string())
    }
}

#[async_trait]
impl LexicalStore for FailingStore {
    async fn resolve(&self, _id: &str) -> Result<Option<Synset>, StoreError> {
        Err(Self::down())
    }

    async fn relations_of(
        &self,
        _synset: &Synset,
        _relation: Relation,
    ) -> Result<Vec<Synset>, StoreError> {
        Err(Self::down())
    }

    async fn synsets_by_lemma(
        &self,
        _lemma: &str,
        _pos: Option<PartOfSpeech>,
    ) -> Result<Vec<Synset>, StoreError> {
        Err(Self::down())
    }

    async fn lemmas_with_prefix(
        &self,
        _prefix: &str,
        _limit: usize,
    ) -> Result<Vec<LemmaMatch>, StoreError> {
        Err(Self::down())
    }

    async fn synsets_by_pos(&self, _pos: PartOfSpeech) -> Result<Vec<Synset>, StoreError> {
        Err(Self::down())
    }

    fn lexicon(&self) -> LexiconInfo {
        LexiconInfo {
            id: "offline".to_string(),
            version: "0".to_string(),
            label: String::new(),
            language: String::new(),
        }
    }
}

/// Wraps a store and counts full part-of-speech scans, which only the
/// taxonomy-depth computation performs. The reported version can be bumped
/// to simulate a reloaded store.
pub struct CountingStore {
    inner: Arc<dyn LexicalStore>,
    scans: AtomicUsize,
    generation: AtomicUsize,
}

impl CountingStore {
    pub fn new(inner: Arc<dyn LexicalStore>) -> Self {
        Self {
            inner,
            scans: AtomicUsize::new(0),
            generation: AtomicUsize::new(0),
        }
    }

    pub fn scans(&self) -> usize {
        self.scans.load(Ordering::SeqCst)
    }

    pub fn bump_version(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl LexicalStore for CountingStore {
    async fn resolve(&self, id: &str) -> Result<Option<Synset>, StoreError> {
        self.inner.resolve(id).await
    }

    async fn relations_of(
        &self,
        synset: &Synset,
        relation: Relation,
    ) -> Result<Vec<Synset>, StoreError> {
        self.inner.relations_of(synset, relation).await
    }

    async fn synsets_by_lemma(
        &self,
        lemma: &str,
        pos: Option<PartOfSpeech>,
    ) -> Result<Vec<Synset>, StoreError> {
        self.inner.synsets_by_lemma(lemma, pos).await
    }

    async fn lemmas_with_prefix(
        &self,
        prefix: &str,
        limit: usize,
    ) -> Result<Vec<LemmaMatch>, StoreError> {
        self.inner.lemmas_with_prefix(prefix, limit).await
    }

    async fn synsets_by_pos(&self, pos: PartOfSpeech) -> Result<Vec<Synset>, StoreError> {
        self.scans.fetch_add(1, Ordering::SeqCst);
        self.inner.synsets_by_pos(pos).await
    }

    fn lexicon(&self) -> LexiconInfo {
        self.inner.lexicon()
    }

    fn version(&self) -> String {
        format!(
            "{}#{}",
            self.inner.version(),
            self.generation.load(Ordering::SeqCst)
        )
    }
}
