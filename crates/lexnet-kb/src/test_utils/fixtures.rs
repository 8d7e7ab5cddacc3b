use std::sync::Arc;

use crate::services::{ExplorerConfig, ExplorerService};
use crate::storage::MemoryLexicalStore;
use crate::traits::LexicalStore;

/// Bundled sample lexicon: a noun hierarchy from `entity` down to dogs and
/// cats, a few car parts, a small verb chain and an adjective cluster.
pub const SAMPLE_LEXICON_JSON: &str = include_str!("../../data/sample-lexicon.json");

/// Well-known synset ids in the sample lexicon.
pub mod ids {
    pub const ENTITY: &str = "oewn-00001740-n";
    pub const PHYSICAL_ENTITY: &str = "oewn-00001930-n";
    pub const ABSTRACTION: &str = "oewn-00002137-n";
    pub const GROUP: &str = "oewn-00031563-n";
    pub const OBJECT: &str = "oewn-00002684-n";
    pub const WHOLE: &str = "oewn-00003553-n";
    pub const LIVING_THING: &str = "oewn-00004258-n";
    pub const ORGANISM: &str = "oewn-00004475-n";
    pub const ANIMAL: &str = "oewn-00015388-n";
    pub const CHORDATE: &str = "oewn-01466257-n";
    pub const VERTEBRATE: &str = "oewn-01471682-n";
    pub const MAMMAL: &str = "oewn-01861778-n";
    pub const PLACENTAL: &str = "oewn-01886756-n";
    pub const CARNIVORE: &str = "oewn-02077948-n";
    pub const CANINE: &str = "oewn-02085998-n";
    pub const DOMESTIC_ANIMAL: &str = "oewn-01320032-n";
    pub const DOG: &str = "oewn-02086723-n";
    pub const PUPPY: &str = "oewn-01325095-n";
    pub const TOY_DOG: &str = "oewn-02087122-n";
    pub const FELINE: &str = "oewn-02123649-n";
    pub const CAT: &str = "oewn-02124272-n";
    pub const PACK: &str = "oewn-08008335-n";
    pub const ARTIFACT: &str = "oewn-00022119-n";
    pub const MOTOR_VEHICLE: &str = "oewn-03796768-n";
    pub const CAR: &str = "oewn-02961779-n";
    pub const CAR_DOOR: &str = "oewn-02963378-n";
    pub const BUMPER: &str = "oewn-02910145-n";
    pub const COMMUNICATE: &str = "oewn-00742582-v";
    pub const UTTER: &str = "oewn-00941990-v";
    pub const BARK: &str = "oewn-01049617-v";
    pub const BIG: &str = "oewn-01387319-a";
    pub const HUGE: &str = "oewn-01389022-s";
    pub const SMALL: &str = "oewn-01394557-a";
}

/// Longest hypernym chain among the sample nouns (puppy up to entity).
pub const SAMPLE_NOUN_DEPTH: usize = 14;

pub fn sample_store() -> MemoryLexicalStore {
    MemoryLexicalStore::from_json_str(SAMPLE_LEXICON_JSON).expect("bundled sample lexicon parses")
}

pub fn sample_store_arc() -> Arc<dyn LexicalStore> {
    Arc::new(sample_store())
}

/// Explorer over the sample lexicon with default bounds.
pub fn sample_service() -> ExplorerService {
    ExplorerService::new(sample_store_arc(), ExplorerConfig::default())
}

/// Explorer over an arbitrary store with default bounds.
pub fn service_over(store: Arc<dyn LexicalStore>) -> ExplorerService {
    ExplorerService::new(store, ExplorerConfig::default())
}
