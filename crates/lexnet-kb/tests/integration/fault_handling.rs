use std::sync::Arc;
use std::time::Duration;

use lexnet_kb::taxonomy;
use lexnet_kb::test_utils::{
    ids, sample_store_arc, service_over, FailingRelationStore, FailingStore, SlowStore,
};
use lexnet_kb::ExplorerError;

#[test_log::test(tokio::test)]
async fn test_failed_relation_type_only_hides_its_edges() {
    let store = Arc::new(FailingRelationStore::new(sample_store_arc(), taxonomy::HOLO_MEMBER));
    let service = service_over(store);

    let graph = service.neighborhood(ids::DOG, Some(1), None, None).await.unwrap();

    assert_eq!(graph.nodes.len(), 5);
    assert!(!graph.contains_node(ids::PACK));
    assert!(graph.contains_node(ids::PUPPY));

    let relations = service.synset_relations(ids::DOG).await.unwrap();
    assert!(relations.holonyms.is_empty());
    assert_eq!(relations.hypernyms.len(), 2);
}

#[test_log::test(tokio::test)]
async fn test_failed_instance_hypernym_lookup_keeps_hierarchy() {
    let store = Arc::new(FailingRelationStore::new(
        sample_store_arc(),
        taxonomy::INSTANCE_HYPERNYM,
    ));
    let service = service_over(store);

    let tree = service.hypernym_tree(ids::DOG, None).await.unwrap();
    assert_eq!(tree.nodes.len(), 11);
    assert!(tree.contains_node(ids::CANINE));

    let result = service.shortest_path(ids::DOG, ids::CAT).await.unwrap();
    let path: Vec<&str> = result.path.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(path, vec![ids::DOG, ids::CANINE, ids::CARNIVORE, ids::FELINE, ids::CAT]);

    let scores = service.similarity(ids::DOG, ids::CAT).await.unwrap();
    assert_eq!(scores.similarity.path, Some(0.2));
    let wup = scores.similarity.wup.unwrap();
    assert!((wup - 24.0 / 28.0).abs() < 1e-9);
    assert!(scores.similarity.lch.is_some());
}

#[tokio::test]
async fn test_broken_hierarchy_is_no_path_not_not_found() {
    let store = Arc::new(FailingRelationStore::all_of(sample_store_arc(), taxonomy::UPWARD));
    let service = service_over(store);

    let err = service.shortest_path(ids::DOG, ids::CAT).await.unwrap_err();
    assert!(matches!(err, ExplorerError::NoPathFound { .. }));

    let scores = service.similarity(ids::DOG, ids::CAT).await.unwrap();
    assert_eq!(scores.similarity.path, None);
    assert_eq!(scores.similarity.wup, None);
    assert_eq!(scores.similarity.lch, None);
}

#[tokio::test]
async fn test_unavailable_store_resolves_nothing() {
    let service = service_over(Arc::new(FailingStore));

    let err = service.neighborhood(ids::DOG, None, None, None).await.unwrap_err();
    assert!(err.is_not_found());

    let err = service.search("dog", None, None).await.unwrap_err();
    assert!(matches!(err, ExplorerError::Store(_)));
}

#[tokio::test(start_paused = true)]
async fn test_slow_store_times_out() {
    let store = Arc::new(SlowStore::new(sample_store_arc(), Duration::from_millis(50)));
    let service = service_over(store).with_timeout(Duration::from_millis(20));

    let err = service.neighborhood(ids::DOG, Some(2), None, None).await.unwrap_err();
    assert!(err.is_timeout());
    assert!(matches!(err, ExplorerError::Timeout { operation: "neighborhood", limit_ms: 20 }));

    let err = service.shortest_path(ids::DOG, ids::CAT).await.unwrap_err();
    assert!(err.is_timeout());

    let err = service.similarity(ids::DOG, ids::CAT).await.unwrap_err();
    assert!(err.is_timeout());
}

#[tokio::test(start_paused = true)]
async fn test_slow_store_within_deadline_succeeds() {
    let store = Arc::new(SlowStore::new(sample_store_arc(), Duration::from_millis(1)));
    let service = service_over(store).with_timeout(Duration::from_secs(5));

    let graph = service.neighborhood(ids::DOG, Some(1), None, None).await.unwrap();
    assert_eq!(graph.nodes.len(), 6);
}
