use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::time::Duration;

use super::deadline::Deadline;
use super::hypernyms::{enumerate, PathLimits};
use super::shortest_path::{shortest_path, StepDirection};
use super::similarity::{score, TaxonomyDepthCache};
use super::walker::{walk, WalkLimits};
use crate::data::{ExplorerError, StoreError, Synset};
use crate::taxonomy::{self, Relation};
use crate::test_utils::{
    ids, sample_store, sample_store_arc, CountingStore, FailingRelationStore, FailingScanStore,
};
use crate::traits::LexicalStore;

async fn synset(store: &dyn LexicalStore, id: &str) -> Synset {
    store.resolve(id).await.unwrap().unwrap()
}

fn names(synsets: &[Synset]) -> Vec<&str> {
    synsets.iter().map(|s| s.id.as_str()).collect()
}

fn close(actual: Option<f64>, expected: f64) -> bool {
    actual.map_or(false, |v| (v - expected).abs() < 1e-9)
}

fn unbounded() -> Deadline {
    Deadline::unbounded("test")
}

#[tokio::test]
async fn test_walk_one_level_follows_store_order() {
    let store = sample_store();
    let dog = synset(&store, ids::DOG).await;
    let relations = taxonomy::default_neighborhood_relations();
    let limits = WalkLimits { depth: 1, node_limit: 200 };

    let walk = walk(&store, dog, &relations, limits, &unbounded()).await.unwrap();

    assert_eq!(
        walk.node_ids(),
        vec![ids::DOG, ids::CANINE, ids::DOMESTIC_ANIMAL, ids::PUPPY, ids::TOY_DOG, ids::PACK]
    );
    let edges: Vec<(&str, &str)> = walk
        .edges
        .iter()
        .map(|e| (e.target.as_str(), e.relation.name()))
        .collect();
    assert_eq!(
        edges,
        vec![
            (ids::CANINE, "hypernym"),
            (ids::DOMESTIC_ANIMAL, "hypernym"),
            (ids::PUPPY, "hyponym"),
            (ids::TOY_DOG, "hyponym"),
            (ids::PACK, "holo_member"),
        ]
    );
    assert_eq!(walk.edges[0].id, format!("e-{}-hypernym-1", ids::DOG));
    assert_eq!(walk.edges[4].id, format!("e-{}-holo_member-5", ids::DOG));
}

#[tokio::test]
async fn test_walk_budget_drops_nodes_and_their_edges() {
    let store = sample_store();
    let dog = synset(&store, ids::DOG).await;
    let relations = taxonomy::default_neighborhood_relations();
    let limits = WalkLimits { depth: 3, node_limit: 3 };

    let walk = walk(&store, dog, &relations, limits, &unbounded()).await.unwrap();

    assert_eq!(walk.node_ids(), vec![ids::DOG, ids::CANINE, ids::DOMESTIC_ANIMAL]);
    assert_eq!(walk.edges.len(), 2);
    assert_eq!(walk.levels, 1);
}

#[tokio::test]
async fn test_walk_emits_edges_to_already_visited_nodes() {
    let store = sample_store();
    let dog = synset(&store, ids::DOG).await;
    let relations = [taxonomy::HYPERNYM, taxonomy::HYPONYM];
    let limits = WalkLimits { depth: 2, node_limit: 200 };

    let walk = walk(&store, dog, &relations, limits, &unbounded()).await.unwrap();

    assert!(walk
        .edges
        .iter()
        .any(|e| e.source.as_str() == ids::CANINE && e.target.as_str() == ids::DOG && e.relation == taxonomy::HYPONYM));
    let unique: std::collections::HashSet<_> = walk.node_ids().into_iter().collect();
    assert_eq!(unique.len(), walk.nodes.len());
}

#[tokio::test]
async fn test_walk_hyponym_levels() {
    let store = sample_store();
    let carnivore = synset(&store, ids::CARNIVORE).await;
    let limits = WalkLimits { depth: 2, node_limit: 100 };

    let walk = walk(&store, carnivore, &[taxonomy::HYPONYM], limits, &unbounded())
        .await
        .unwrap();

    assert_eq!(
        walk.node_ids(),
        vec![ids::CARNIVORE, ids::CANINE, ids::FELINE, ids::DOG, ids::CAT]
    );
}

#[test_log::test(tokio::test)]
async fn test_walk_swallows_failed_relation_lookups() {
    let store = FailingRelationStore::new(sample_store_arc(), taxonomy::HYPONYM);
    let dog = synset(&store, ids::DOG).await;
    let relations = taxonomy::default_neighborhood_relations();
    let limits = WalkLimits { depth: 1, node_limit: 200 };

    let walk = walk(&store, dog, &relations, limits, &unbounded()).await.unwrap();

    assert_eq!(
        walk.node_ids(),
        vec![ids::DOG, ids::CANINE, ids::DOMESTIC_ANIMAL, ids::PACK]
    );
}

#[tokio::test]
async fn test_walk_never_keeps_placeholders() {
    let store = sample_store();
    let dog = synset(&store, ids::DOG).await;
    let limits = WalkLimits { depth: 1, node_limit: 200 };

    let walk = walk(&store, dog, &[taxonomy::MERO_PART], limits, &unbounded())
        .await
        .unwrap();

    assert_eq!(walk.node_ids(), vec![ids::DOG]);
    assert!(walk.edges.is_empty());
}

#[tokio::test]
async fn test_enumerate_records_every_path() {
    let store = sample_store();
    let dog = synset(&store, ids::DOG).await;
    let limits = PathLimits { max_path_nodes: None, max_paths: 256 };

    let found = enumerate(&store, &dog, limits, &unbounded()).await.unwrap();

    assert_eq!(found.paths.len(), 2);
    assert_eq!(found.paths[0].len(), 13);
    assert_eq!(found.paths[0][0].id.as_str(), ids::CANINE);
    assert_eq!(found.paths[1].len(), 8);
    assert_eq!(found.paths[1][0].id.as_str(), ids::DOMESTIC_ANIMAL);
    assert_eq!(names(&found.roots), vec![ids::ENTITY]);
    assert_eq!(found.max_length, 13);
    assert!(!found.capped);
}

#[tokio::test]
async fn test_enumerate_truncates_far_end_of_each_path() {
    let store = sample_store();
    let dog = synset(&store, ids::DOG).await;
    let limits = PathLimits { max_path_nodes: Some(3), max_paths: 256 };

    let found = enumerate(&store, &dog, limits, &unbounded()).await.unwrap();

    assert_eq!(names(&found.paths[0]), vec![ids::CANINE, ids::CARNIVORE, ids::PLACENTAL]);
    assert_eq!(names(&found.paths[1]), vec![ids::DOMESTIC_ANIMAL, ids::ANIMAL, ids::ORGANISM]);
    assert_eq!(found.max_length, 13);
}

#[tokio::test]
async fn test_enumerate_root_and_failure_are_distinct() {
    let store = sample_store();
    let entity = synset(&store, ids::ENTITY).await;
    let limits = PathLimits { max_path_nodes: None, max_paths: 256 };

    let found = enumerate(&store, &entity, limits, &unbounded()).await.unwrap();
    assert!(found.is_empty());
    assert!(found.roots.is_empty());

    let failing = FailingRelationStore::all_of(sample_store_arc(), taxonomy::UPWARD);
    let dog = synset(&failing, ids::DOG).await;
    let err = enumerate(&failing, &dog, limits, &unbounded()).await.unwrap_err();
    assert!(matches!(err, ExplorerError::Store(StoreError::RelationLookup { .. })));
}

#[tokio::test]
async fn test_enumerate_stops_at_path_cap() {
    let store = sample_store();
    let dog = synset(&store, ids::DOG).await;
    let limits = PathLimits { max_path_nodes: None, max_paths: 1 };

    let found = enumerate(&store, &dog, limits, &unbounded()).await.unwrap();

    assert_eq!(found.paths.len(), 1);
    assert!(found.capped);
}

#[tokio::test]
async fn test_shortest_path_turns_at_common_ancestor() {
    let store = sample_store();
    let dog = synset(&store, ids::DOG).await;
    let cat = synset(&store, ids::CAT).await;

    let found = shortest_path(&store, &dog, &cat, &unbounded()).await.unwrap();

    assert_eq!(
        names(&found.nodes),
        vec![ids::DOG, ids::CANINE, ids::CARNIVORE, ids::FELINE, ids::CAT]
    );
    assert_eq!(
        found.steps,
        vec![StepDirection::Up, StepDirection::Up, StepDirection::Down, StepDirection::Down]
    );
    assert_eq!(found.length(), 4);
    assert_eq!(found.distance, 4);
    assert!(!found.via_synthetic_root);
}

#[tokio::test]
async fn test_shortest_path_crosses_synthetic_root() {
    let store = sample_store();
    let dog = synset(&store, ids::DOG).await;
    let bark = synset(&store, ids::BARK).await;

    let found = shortest_path(&store, &dog, &bark, &unbounded()).await.unwrap();

    assert_eq!(found.nodes.len(), 12);
    assert_eq!(found.nodes[8].id.as_str(), ids::ENTITY);
    assert_eq!(found.nodes[9].id.as_str(), ids::COMMUNICATE);
    assert_eq!(found.steps[8], StepDirection::AcrossRoot);
    assert_eq!(found.steps.len(), 11);
    assert_eq!(found.distance, 12);
    assert!(found.via_synthetic_root);
    assert!(found.nodes.iter().all(|s| !s.is_placeholder()));
}

#[tokio::test]
async fn test_shortest_path_to_self_is_single_node() {
    let store = sample_store();
    let dog = synset(&store, ids::DOG).await;

    let found = shortest_path(&store, &dog, &dog, &unbounded()).await.unwrap();

    assert_eq!(names(&found.nodes), vec![ids::DOG]);
    assert!(found.steps.is_empty());
    assert_eq!(found.distance, 0);
}

#[tokio::test]
async fn test_shortest_path_store_failure_is_no_path() {
    let store = FailingRelationStore::all_of(sample_store_arc(), taxonomy::UPWARD);
    let dog = synset(&store, ids::DOG).await;
    let cat = synset(&store, ids::CAT).await;

    let err = shortest_path(&store, &dog, &cat, &unbounded()).await.unwrap_err();
    assert!(matches!(err, ExplorerError::NoPathFound { .. }));
}

#[tokio::test]
async fn test_similarity_dog_cat() {
    let store = sample_store();
    let cache = TaxonomyDepthCache::new();
    let dog = synset(&store, ids::DOG).await;
    let cat = synset(&store, ids::CAT).await;

    let scores = score(&store, &cache, &dog, &cat, &unbounded()).await.unwrap();

    assert!(close(scores.path, 0.2));
    assert!(close(scores.wup, 24.0 / 28.0));
    assert!(close(scores.lch, 5.6f64.ln()));
}

#[tokio::test]
async fn test_similarity_identity() {
    let store = sample_store();
    let cache = TaxonomyDepthCache::new();
    let dog = synset(&store, ids::DOG).await;

    let scores = score(&store, &cache, &dog, &dog, &unbounded()).await.unwrap();

    assert!(close(scores.path, 1.0));
    assert!(close(scores.wup, 1.0));
    assert!(close(scores.lch, 28f64.ln()));
}

#[tokio::test]
async fn test_similarity_across_parts_of_speech() {
    let store = sample_store();
    let cache = TaxonomyDepthCache::new();
    let dog = synset(&store, ids::DOG).await;
    let bark = synset(&store, ids::BARK).await;

    let scores = score(&store, &cache, &dog, &bark, &unbounded()).await.unwrap();

    assert!(close(scores.path, 1.0 / 13.0));
    assert!(close(scores.wup, 0.0));
    assert_eq!(scores.lch, None);
}

#[tokio::test]
async fn test_similarity_satellite_is_a_distinct_part_of_speech() {
    let store = sample_store();
    let cache = TaxonomyDepthCache::new();
    let big = synset(&store, ids::BIG).await;
    let huge = synset(&store, ids::HUGE).await;

    let scores = score(&store, &cache, &big, &huge, &unbounded()).await.unwrap();

    assert!(close(scores.path, 1.0 / 3.0));
    assert_eq!(scores.lch, None);
}

#[tokio::test]
async fn test_similarity_metrics_fail_independently() {
    let store = FailingScanStore::new(sample_store_arc());
    let cache = TaxonomyDepthCache::new();
    let dog = synset(&store, ids::DOG).await;
    let cat = synset(&store, ids::CAT).await;

    let scores = score(&store, &cache, &dog, &cat, &unbounded()).await.unwrap();

    assert_eq!(scores.path, Some(0.2));
    assert!(close(scores.wup, 24.0 / 28.0));
    assert_eq!(scores.lch, None);
}

#[tokio::test]
async fn test_similarity_without_hierarchy_has_no_scores() {
    let store = FailingRelationStore::all_of(sample_store_arc(), taxonomy::UPWARD);
    let cache = TaxonomyDepthCache::new();
    let dog = synset(&store, ids::DOG).await;
    let cat = synset(&store, ids::CAT).await;

    let scores = score(&store, &cache, &dog, &cat, &unbounded()).await.unwrap();

    assert_eq!(scores.path, None);
    assert_eq!(scores.wup, None);
    assert_eq!(scores.lch, None);
}

#[test_log::test(tokio::test)]
async fn test_failed_instance_hypernym_lookup_is_skipped() {
    let store = FailingRelationStore::new(sample_store_arc(), taxonomy::INSTANCE_HYPERNYM);
    let cache = TaxonomyDepthCache::new();
    let dog = synset(&store, ids::DOG).await;
    let cat = synset(&store, ids::CAT).await;
    let limits = PathLimits { max_path_nodes: None, max_paths: 256 };

    let found = enumerate(&store, &dog, limits, &unbounded()).await.unwrap();
    assert_eq!(found.paths.len(), 2);

    let path = shortest_path(&store, &dog, &cat, &unbounded()).await.unwrap();
    assert_eq!(path.distance, 4);
    assert!(!path.via_synthetic_root);

    let scores = score(&store, &cache, &dog, &cat, &unbounded()).await.unwrap();
    assert!(close(scores.path, 0.2));
    assert!(close(scores.wup, 24.0 / 28.0));
    assert!(close(scores.lch, 5.6f64.ln()));
}

#[tokio::test]
async fn test_taxonomy_depth_computed_once_per_version() {
    let store = CountingStore::new(sample_store_arc());
    let cache = TaxonomyDepthCache::new();
    let dog = synset(&store, ids::DOG).await;
    let cat = synset(&store, ids::CAT).await;

    score(&store, &cache, &dog, &cat, &unbounded()).await.unwrap();
    score(&store, &cache, &cat, &dog, &unbounded()).await.unwrap();
    assert_eq!(store.scans(), 1);

    store.bump_version();
    let scores = score(&store, &cache, &dog, &cat, &unbounded()).await.unwrap();
    assert_eq!(store.scans(), 2);
    assert!(close(scores.lch, 5.6f64.ln()));
}

#[tokio::test]
async fn test_concurrent_depth_lookups_agree() {
    let store: Arc<dyn LexicalStore> = sample_store_arc();
    let cache = Arc::new(TaxonomyDepthCache::new());

    let mut handles = Vec::new();
    for _ in 0..8 {
        let store = Arc::clone(&store);
        let cache = Arc::clone(&cache);
        handles.push(tokio::spawn(async move {
            cache
                .depth_for(store.as_ref(), crate::data::PartOfSpeech::Noun, &Deadline::unbounded("depth"))
                .await
                .unwrap()
        }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap(), crate::test_utils::SAMPLE_NOUN_DEPTH);
    }
}

#[tokio::test(start_paused = true)]
async fn test_expired_deadline_aborts_walk() {
    let store = sample_store();
    let dog = synset(&store, ids::DOG).await;
    let deadline = Deadline::after("neighborhood", Duration::from_millis(5));
    tokio::time::advance(Duration::from_millis(10)).await;

    let limits = WalkLimits { depth: 1, node_limit: 10 };
    let err = walk(&store, dog, &[taxonomy::HYPERNYM], limits, &deadline)
        .await
        .unwrap_err();
    assert!(err.is_timeout());
}

#[test]
fn test_unknown_relation_name_resolves_to_nothing() {
    assert_eq!(Relation::from_name("smells_like"), None);
    assert!(taxonomy::resolve_names(&["smells_like"]).is_empty());
}
