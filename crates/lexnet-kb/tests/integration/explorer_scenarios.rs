use pretty_assertions::assert_eq;

use lexnet_kb::data::GraphData;
use lexnet_kb::test_utils::{ids, sample_service};
use lexnet_kb::PartOfSpeech;

fn ids_of(graph: &GraphData) -> Vec<&str> {
    graph.node_ids()
}

fn assert_clean(graph: &GraphData, limit: usize) {
    assert!(graph.nodes.len() <= limit);
    assert!(graph.nodes.iter().all(|n| !n.id.starts_with('*')));
    let unique: std::collections::HashSet<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(unique.len(), graph.nodes.len());
    let edge_ids: std::collections::HashSet<&str> = graph.edges.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(edge_ids.len(), graph.edges.len());
    for edge in &graph.edges {
        assert!(graph.contains_node(&edge.source), "dangling source {}", edge.source);
        assert!(graph.contains_node(&edge.target), "dangling target {}", edge.target);
    }
}

#[tokio::test]
async fn test_dog_neighborhood_has_both_hypernyms_and_hyponyms() {
    let service = sample_service();

    let graph = service
        .neighborhood(ids::DOG, Some(1), None, Some(200))
        .await
        .unwrap();

    assert_eq!(graph.center_node, ids::DOG);
    assert_eq!(
        ids_of(&graph),
        vec![ids::DOG, ids::CANINE, ids::DOMESTIC_ANIMAL, ids::PUPPY, ids::TOY_DOG, ids::PACK]
    );
    for hypernym in [ids::CANINE, ids::DOMESTIC_ANIMAL] {
        assert!(graph
            .edges
            .iter()
            .any(|e| e.target == hypernym && e.relation == "hypernym" && e.directed));
    }
    assert_eq!(graph.nodes[0].label, "dog, domestic dog, Canis familiaris");
    assert_clean(&graph, 200);
}

#[tokio::test]
async fn test_neighborhood_respects_node_limit() {
    let service = sample_service();

    for limit in 1..=6 {
        let graph = service
            .neighborhood(ids::DOG, Some(2), None, Some(limit))
            .await
            .unwrap();
        assert_eq!(graph.nodes.len(), limit);
        assert_eq!(graph.nodes[0].id, ids::DOG);
        assert_clean(&graph, limit);
    }
}

#[tokio::test]
async fn test_neighborhood_with_explicit_relations() {
    let service = sample_service();
    let relations = vec!["similar".to_string(), "smells_like".to_string()];

    let graph = service
        .neighborhood(ids::BIG, Some(1), Some(relations.as_slice()), None)
        .await
        .unwrap();

    assert_eq!(ids_of(&graph), vec![ids::BIG, ids::HUGE]);
    assert_eq!(graph.edges.len(), 1);
    assert_eq!(graph.edges[0].relation, "similar");
    assert!(!graph.edges[0].directed);

    let unknown_only = vec!["smells_like".to_string()];
    let graph = service
        .neighborhood(ids::BIG, Some(1), Some(unknown_only.as_slice()), None)
        .await
        .unwrap();
    assert_eq!(ids_of(&graph), vec![ids::BIG]);
    assert!(graph.edges.is_empty());
}

#[tokio::test]
async fn test_neighborhood_is_idempotent() {
    let service = sample_service();

    let first = service.neighborhood(ids::CAR, Some(3), None, Some(50)).await.unwrap();
    let second = service.neighborhood(ids::CAR, Some(3), None, Some(50)).await.unwrap();

    assert_eq!(first, second);
    assert_clean(&first, 50);
}

#[tokio::test]
async fn test_hyponym_subtree_of_carnivore() {
    let service = sample_service();

    let graph = service
        .hyponym_subtree(ids::CARNIVORE, Some(2), Some(100))
        .await
        .unwrap();

    assert_eq!(
        ids_of(&graph),
        vec![ids::CARNIVORE, ids::CANINE, ids::FELINE, ids::DOG, ids::CAT]
    );
    assert!(graph.edges.iter().all(|e| e.relation == "hyponym"));
    assert_clean(&graph, 100);
}

#[tokio::test]
async fn test_hypernym_tree_of_dog() {
    let service = sample_service();

    let graph = service.hypernym_tree(ids::DOG, None).await.unwrap();

    assert_eq!(graph.nodes.len(), 11);
    assert_eq!(graph.edges.len(), 10);
    assert!(graph.contains_node(ids::CANINE));
    assert!(graph.contains_node(ids::DOMESTIC_ANIMAL));
    assert!(!graph.contains_node(ids::ENTITY));
    assert!(graph.edges.iter().all(|e| e.relation == "hypernym" && e.directed));
    assert_eq!(
        graph.edges[0].id,
        format!("hyper-{}-{}", ids::DOG, ids::CANINE)
    );
    assert_clean(&graph, 500);

    let full = service.hypernym_tree(ids::DOG, Some(10)).await.unwrap();
    assert_eq!(full.nodes.len(), 15);
}

#[tokio::test]
async fn test_hypernym_tree_of_root_is_just_the_root() {
    let service = sample_service();

    let graph = service.hypernym_tree(ids::ENTITY, Some(5)).await.unwrap();

    assert_eq!(ids_of(&graph), vec![ids::ENTITY]);
    assert!(graph.edges.is_empty());
}

#[tokio::test]
async fn test_hypernym_paths_are_untruncated() {
    let service = sample_service();

    let paths = service.hypernym_paths(ids::DOG).await.unwrap();

    let depths: Vec<usize> = paths.iter().map(|p| p.depth).collect();
    assert_eq!(depths, vec![13, 8]);
    assert_eq!(paths[0].path.last().unwrap().id, ids::ENTITY);
    assert!(service.hypernym_paths(ids::ENTITY).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_shortest_path_dog_cat() {
    let service = sample_service();

    let result = service.shortest_path(ids::DOG, ids::CAT).await.unwrap();

    let path: Vec<&str> = result.path.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(path, vec![ids::DOG, ids::CANINE, ids::CARNIVORE, ids::FELINE, ids::CAT]);
    assert_eq!(result.length, 4);
    assert_eq!(result.distance, 4);
    let relations: Vec<&str> = result.edges.iter().map(|e| e.relation.as_str()).collect();
    assert_eq!(relations, vec!["hypernym", "hypernym", "hyponym", "hyponym"]);
    assert_eq!(result.edges[0].id, "path-edge-0");
}

#[tokio::test]
async fn test_shortest_path_same_synset() {
    let service = sample_service();

    let result = service.shortest_path(ids::CAT, ids::CAT).await.unwrap();

    assert_eq!(result.path.len(), 1);
    assert_eq!(result.length, 0);
    assert!(result.edges.is_empty());
}

#[tokio::test]
async fn test_shortest_path_across_parts_of_speech() {
    let service = sample_service();

    let result = service.shortest_path(ids::DOG, ids::BARK).await.unwrap();

    assert!(result.via_synthetic_root);
    assert_eq!(result.length, 11);
    assert_eq!(result.distance, 12);
    assert_eq!(result.edges.iter().filter(|e| e.relation == "path").count(), 1);

    let scores = service.similarity(ids::DOG, ids::BARK).await.unwrap();
    assert_eq!(scores.similarity.path, Some(1.0 / (result.distance as f64 + 1.0)));
    assert_ne!(scores.similarity.path, Some(1.0 / (result.length as f64 + 1.0)));
}

#[tokio::test]
async fn test_similarity_scores() {
    let service = sample_service();

    let dog_cat = service.similarity(ids::DOG, ids::CAT).await.unwrap();
    assert_eq!(dog_cat.synset1, ids::DOG);
    assert_eq!(dog_cat.similarity.path, Some(0.2));
    let wup = dog_cat.similarity.wup.unwrap();
    assert!((wup - 24.0 / 28.0).abs() < 1e-9);
    let lch = dog_cat.similarity.lch.unwrap();
    assert!((lch - 1.7227665977411035).abs() < 1e-9);

    let path = service.shortest_path(ids::DOG, ids::CAT).await.unwrap();
    assert_eq!(dog_cat.similarity.path, Some(1.0 / (path.distance as f64 + 1.0)));

    let same = service.similarity(ids::DOG, ids::DOG).await.unwrap();
    assert_eq!(same.similarity.path, Some(1.0));
    assert_eq!(same.similarity.wup, Some(1.0));

    let cross = service.similarity(ids::DOG, ids::BARK).await.unwrap();
    assert_eq!(cross.similarity.lch, None);
    assert!(cross.similarity.path.is_some());
}

#[tokio::test]
async fn test_synset_detail_and_relations() {
    let service = sample_service();

    let detail = service.synset(ids::DOG).await.unwrap();
    assert_eq!(detail.lexicon, "sample-en");
    assert_eq!(detail.pos, PartOfSpeech::Noun);
    assert_eq!(detail.ili.as_deref(), Some("i46360"));
    assert_eq!(detail.definitions.len(), 1);
    assert_eq!(detail.examples, vec!["the dog barked all night".to_string()]);
    assert!(detail.lexicalized);

    let relations = service.synset_relations(ids::DOG).await.unwrap();
    let hypernyms: Vec<&str> = relations.hypernyms.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(hypernyms, vec![ids::CANINE, ids::DOMESTIC_ANIMAL]);
    let hyponyms: Vec<&str> = relations.hyponyms.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(hyponyms, vec![ids::PUPPY, ids::TOY_DOG]);
    assert_eq!(relations.holonyms.len(), 1);
    assert_eq!(relations.holonyms[0].id, ids::PACK);
    assert!(relations.meronyms.is_empty());

    let car = service.synset_relations(ids::CAR).await.unwrap();
    let parts: Vec<&str> = car.meronyms.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(parts, vec![ids::CAR_DOOR, ids::BUMPER]);
}

#[tokio::test]
async fn test_transitive_listings() {
    let service = sample_service();

    let up = service.transitive(ids::DOG, "hypernym", Some(2)).await.unwrap();
    let up: Vec<&str> = up.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(up, vec![ids::CANINE, ids::DOMESTIC_ANIMAL, ids::CARNIVORE, ids::ANIMAL]);

    assert!(service
        .transitive(ids::DOG, "smells_like", Some(2))
        .await
        .unwrap()
        .is_empty());

    let parents = service.hypernyms(ids::PUPPY, None).await.unwrap();
    assert_eq!(parents.len(), 1);
    assert_eq!(parents[0].id, ids::DOG);

    let below = service.hyponyms(ids::CANINE, Some(2)).await.unwrap();
    let below: Vec<&str> = below.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(below, vec![ids::DOG, ids::PUPPY, ids::TOY_DOG]);
}

#[tokio::test]
async fn test_search_by_lemma_and_id() {
    let service = sample_service();

    let by_lemma = service.search("Dog", None, None).await.unwrap();
    assert_eq!(by_lemma.len(), 1);
    assert_eq!(by_lemma[0].id, ids::DOG);
    assert_eq!(by_lemma[0].result_type, "synset");

    let by_id = service.search(ids::CAT, None, None).await.unwrap();
    assert_eq!(by_id[0].label, "cat, true cat");

    let bark_nouns = service.search("bark", Some("n"), None).await.unwrap();
    assert!(bark_nouns.is_empty());
    let bark_verbs = service.search("bark", Some("verb"), None).await.unwrap();
    assert_eq!(bark_verbs[0].id, ids::BARK);
}

#[tokio::test]
async fn test_autocomplete_prefixes() {
    let service = sample_service();

    let items = service.autocomplete("ca", None).await.unwrap();
    let forms: Vec<&str> = items.iter().map(|i| i.form.as_str()).collect();
    assert_eq!(
        forms,
        vec!["canid", "canine", "Canis familiaris", "car", "car door", "carnivore", "cat"]
    );

    let limited = service.autocomplete("ca", Some(2)).await.unwrap();
    assert_eq!(limited.len(), 2);

    assert!(service.autocomplete("c", None).await.unwrap().is_empty());
}
