use lexnet_kb::test_utils::{ids, sample_store_arc};
use lexnet_kb::{ExplorerConfig, ExplorerError, ExplorerService};

#[tokio::test]
async fn test_unknown_and_malformed_ids_are_not_found() {
    let service = lexnet_kb::test_utils::sample_service();

    for id in ["oewn-99999999-n", "", "   ", "*INFERRED*", "*oewn-1-n", "not an id at all"] {
        let err = service.neighborhood(id, None, None, None).await.unwrap_err();
        assert!(err.is_not_found(), "{:?} gave {:?}", id, err);
    }

    let err = service.shortest_path(ids::DOG, "nope").await.unwrap_err();
    assert!(matches!(err, ExplorerError::NotFound { ref id } if id == "nope"));

    let err = service.similarity("nope", ids::DOG).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(service.synset_relations("nope").await.unwrap_err().is_not_found());
    assert!(service.hypernym_tree("nope", None).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_parameters_below_one_are_rejected() {
    let service = lexnet_kb::test_utils::sample_service();

    let err = service.neighborhood(ids::DOG, Some(0), None, None).await.unwrap_err();
    assert!(matches!(err, ExplorerError::InvalidArgument { name: "depth", .. }));

    let err = service.neighborhood(ids::DOG, None, None, Some(0)).await.unwrap_err();
    assert!(matches!(err, ExplorerError::InvalidArgument { name: "limit", .. }));

    let err = service.hypernym_tree(ids::DOG, Some(0)).await.unwrap_err();
    assert!(matches!(err, ExplorerError::InvalidArgument { name: "max_depth", .. }));

    let err = service.search("  ", None, None).await.unwrap_err();
    assert!(matches!(err, ExplorerError::InvalidArgument { name: "q", .. }));

    let err = service.search("dog", Some("x"), None).await.unwrap_err();
    assert!(matches!(err, ExplorerError::InvalidArgument { name: "pos", .. }));
}

#[tokio::test]
async fn test_parameters_above_maximum_are_clamped() {
    let config = ExplorerConfig {
        neighborhood_max_limit: 4,
        neighborhood_max_depth: 1,
        ..ExplorerConfig::default()
    };
    let service = ExplorerService::new(sample_store_arc(), config);

    let graph = service
        .neighborhood(ids::DOG, Some(99), None, Some(10_000))
        .await
        .unwrap();

    assert_eq!(graph.nodes.len(), 4);
    assert!(graph.nodes.iter().all(|n| n.id != ids::CARNIVORE));
}

#[tokio::test]
async fn test_default_parameters_apply_when_omitted() {
    let service = lexnet_kb::test_utils::sample_service();

    let graph = service.neighborhood(ids::DOG, None, None, None).await.unwrap();
    assert_eq!(graph.nodes.len(), 6);

    let subtree = service.hyponym_subtree(ids::ANIMAL, None, None).await.unwrap();
    assert!(subtree.contains_node(ids::VERTEBRATE));
    assert!(!subtree.contains_node(ids::MAMMAL));
}

#[tokio::test]
async fn test_zero_tree_node_cap_keeps_the_center() {
    let config = ExplorerConfig {
        tree_node_cap: 0,
        ..ExplorerConfig::default()
    };
    let service = ExplorerService::new(sample_store_arc(), config);

    let graph = service.hypernym_tree(ids::DOG, None).await.unwrap();

    assert_eq!(graph.nodes.len(), 1);
    assert_eq!(graph.nodes[0].id, ids::DOG);
    assert_eq!(graph.center_node, ids::DOG);
    assert!(graph.edges.is_empty());
}
