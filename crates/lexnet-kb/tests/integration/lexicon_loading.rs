use std::io::Write as _;

use lexnet_kb::test_utils::{ids, SAMPLE_LEXICON_JSON};
use lexnet_kb::{LexicalStore, MemoryLexicalStore, PartOfSpeech, StoreError};

#[tokio::test]
async fn test_sample_lexicon_loads_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE_LEXICON_JSON.as_bytes()).unwrap();

    let store = MemoryLexicalStore::load_json(file.path()).await.unwrap();

    assert_eq!(store.len(), 33);
    assert_eq!(store.version(), "sample-en:2024");
    let info = store.lexicon();
    assert_eq!(info.language, "en");

    let nouns = store.synsets_by_pos(PartOfSpeech::Noun).await.unwrap();
    assert_eq!(nouns.len(), 27);
    assert_eq!(nouns[0].id.as_str(), ids::ENTITY);
}

#[tokio::test]
async fn test_inverse_relations_are_inferred() {
    let store = MemoryLexicalStore::from_json_str(SAMPLE_LEXICON_JSON).unwrap();
    let pack = store.resolve(ids::PACK).await.unwrap().unwrap();

    let members = store
        .relations_of(&pack, lexnet_kb::taxonomy::MERO_MEMBER)
        .await
        .unwrap();

    assert_eq!(members.len(), 1);
    assert_eq!(members[0].id.as_str(), ids::DOG);
}

#[tokio::test]
async fn test_invalid_lexicon_is_reported() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"{"id": "x", "synsets": []}"#).unwrap();

    let err = MemoryLexicalStore::load_json(file.path()).await.unwrap_err();
    assert!(matches!(err, StoreError::Parse(_)));
}
