//! LexicalStore trait definition for lexical network access

use async_trait::async_trait;
use tracing::warn;

use crate::data::{LemmaMatch, LexiconInfo, PartOfSpeech, StoreError, Synset};
use crate::taxonomy::{Relation, DOWNWARD, UPWARD};

/// Represents the interface to the lexical store holding synsets and their typed relations.
/// The explorer only ever reads through this trait; it never mutates the store.
///
/// Ordering matters: the order in which `relations_of` returns targets is the
/// tie-break order for every traversal built on top of it, so implementations
/// must return a stable order for an unchanged store.
#[async_trait]
pub trait LexicalStore: Send + Sync {
    /// Resolves an identifier to a synset. Unknown or malformed identifiers yield `Ok(None)`.
    async fn resolve(&self, id: &str) -> Result<Option<Synset>, StoreError>;

    /// Returns the targets of `synset`'s outgoing edges of one relation type.
    ///
    /// Targets the store cannot materialize may be returned as placeholder
    /// synsets; callers are responsible for filtering them.
    async fn relations_of(
        &self,
        synset: &Synset,
        relation: Relation,
    ) -> Result<Vec<Synset>, StoreError>;

    /// Direct generalizations: `hypernym` targets followed by `instance_hypernym` targets.
    ///
    /// A relation type whose lookup fails contributes no targets; the call
    /// only fails when every type in the set failed.
    async fn hypernyms_of(&self, synset: &Synset) -> Result<Vec<Synset>, StoreError> {
        relations_of_any(self, synset, UPWARD).await
    }

    /// Direct specializations: `hyponym` targets followed by `instance_hyponym` targets.
    /// Failures are handled as in [`LexicalStore::hypernyms_of`].
    async fn hyponyms_of(&self, synset: &Synset) -> Result<Vec<Synset>, StoreError> {
        relations_of_any(self, synset, DOWNWARD).await
    }

    /// Synsets having `lemma` (case-insensitive) among their lemmas.
    async fn synsets_by_lemma(
        &self,
        lemma: &str,
        pos: Option<PartOfSpeech>,
    ) -> Result<Vec<Synset>, StoreError>;

    /// Distinct lemmas starting with `prefix`, at most `limit` of them.
    async fn lemmas_with_prefix(
        &self,
        prefix: &str,
        limit: usize,
    ) -> Result<Vec<LemmaMatch>, StoreError>;

    /// Every synset of one part of speech, in store order.
    async fn synsets_by_pos(&self, pos: PartOfSpeech) -> Result<Vec<Synset>, StoreError>;

    /// Metadata about the lexicon served.
    fn lexicon(&self) -> LexiconInfo;

    /// Opaque content version; derived caches are keyed by it.
    fn version(&self) -> String {
        let info = self.lexicon();
        format!("{}:{}", info.id, info.version)
    }
}

/// Concatenates the targets of several relation types in order, skipping
/// types whose lookup fails. The last error is returned only if no type
/// could be read at all.
async fn relations_of_any<S>(
    store: &S,
    synset: &Synset,
    relations: &[Relation],
) -> Result<Vec<Synset>, StoreError>
where
    S: LexicalStore + ?Sized,
{
    let mut targets = Vec::new();
    let mut last_error = None;
    let mut answered = false;
    for relation in relations {
        match store.relations_of(synset, *relation).await {
            Ok(found) => {
                answered = true;
                targets.extend(found);
            }
            Err(e) => {
                warn!(
                    synset_id = %synset.id,
                    relation = %relation,
                    error = %e,
                    "Relation lookup failed, treating as no edges"
                );
                last_error = Some(e);
            }
        }
    }
    match last_error {
        Some(e) if !answered => Err(e),
        _ => Ok(targets),
    }
}
