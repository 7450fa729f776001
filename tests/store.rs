//! Document store tests - JSON round trips, index ordering, deletion

mod common;

use common::block;
use storyflow::model::{
    BlockIdGenerator, BlockType, Script, ScriptId, ScriptLanguage, ScriptMetadata,
};
use storyflow::store::{DocumentStore, FileStore, MemoryStore, StoreError};
use storyflow::templates;

fn sample_script(title: &str, last_modified: u64) -> Script {
    let mut script = Script::new(
        ScriptMetadata {
            title: title.to_string(),
            language: ScriptLanguage::Dual,
            ..ScriptMetadata::default()
        },
        vec![
            block(1, BlockType::SceneHeading, "INT. 茶馆 - DAY"),
            block(2, BlockType::Action, "Steam rises.\nA bell rings."),
            block(3, BlockType::Parenthetical, "(softly)"),
        ],
    );
    script.last_modified = last_modified;
    script
}

#[test]
fn test_file_store_round_trip_is_lossless() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::open(dir.path()).unwrap();

    let script = sample_script("Tea House", 10);
    store.save(&script).unwrap();

    let loaded = store.load(&script.id).unwrap();
    assert_eq!(loaded, script);
}

#[test]
fn test_template_scripts_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::open(dir.path()).unwrap();
    let mut ids = BlockIdGenerator::new();

    for template in templates::TEMPLATES {
        for language in [ScriptLanguage::En, ScriptLanguage::Zh, ScriptLanguage::Dual] {
            let script = Script::from_template(template, language, &mut ids);
            store.save(&script).unwrap();
            assert_eq!(store.load(&script.id).unwrap(), script);
        }
    }
}

#[test]
fn test_list_is_most_recent_first_and_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut store = FileStore::open(dir.path()).unwrap();
        store.save(&sample_script("Oldest", 100)).unwrap();
        store.save(&sample_script("Newest", 300)).unwrap();
        store.save(&sample_script("Middle", 200)).unwrap();
    }

    let store = FileStore::open(dir.path()).unwrap();
    let titles: Vec<_> = store.list().unwrap().into_iter().map(|s| s.title).collect();
    assert_eq!(titles, vec!["Newest", "Middle", "Oldest"]);
    assert_eq!(store.most_recent().unwrap().metadata.title, "Newest");
}

#[test]
fn test_resave_replaces_index_entry() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::open(dir.path()).unwrap();

    let mut script = sample_script("Draft", 1);
    store.save(&script).unwrap();
    script.metadata.title = "Final".to_string();
    script.last_modified = 2;
    store.save(&script).unwrap();

    let summaries = store.list().unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].title, "Final");
    assert_eq!(summaries[0].last_modified, 2);
}

#[test]
fn test_delete_removes_file_and_entry() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::open(dir.path()).unwrap();

    let keep = sample_script("Keep", 1);
    let drop = sample_script("Drop", 2);
    store.save(&keep).unwrap();
    store.save(&drop).unwrap();

    store.delete(&drop.id).unwrap();
    assert_eq!(store.load(&drop.id), Err(StoreError::NotFound(drop.id.clone())));
    assert_eq!(store.list().unwrap().len(), 1);
    assert_eq!(store.delete(&drop.id), Err(StoreError::NotFound(drop.id.clone())));
    assert!(store.load(&keep.id).is_ok());
}

#[test]
fn test_corrupt_script_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path()).unwrap();
    std::fs::write(dir.path().join("broken.json"), "{ not json").unwrap();

    let err = store.load(&ScriptId::from("broken")).unwrap_err();
    assert!(matches!(err, StoreError::ParseError(_)));
}

#[test]
fn test_most_recent_skips_unreadable_scripts() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::open(dir.path()).unwrap();

    let good = sample_script("Good", 1);
    let bad = sample_script("Bad", 2);
    store.save(&good).unwrap();
    store.save(&bad).unwrap();
    std::fs::write(dir.path().join(format!("{}.json", bad.id)), "garbage").unwrap();

    assert_eq!(store.most_recent().unwrap().id, good.id);
}

#[test]
fn test_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path().join("nested/scripts")).unwrap();
    assert!(store.list().unwrap().is_empty());
    assert!(store.most_recent().is_none());
}

#[test]
fn test_memory_store_matches_file_store_semantics() {
    let mut store = MemoryStore::new();
    let a = sample_script("A", 5);
    let b = sample_script("B", 9);
    store.save(&a).unwrap();
    store.save(&b).unwrap();

    assert_eq!(store.load(&a.id).unwrap(), a);
    assert_eq!(store.list().unwrap()[0].id, b.id);
    store.delete(&b.id).unwrap();
    assert_eq!(store.most_recent().unwrap().id, a.id);
}

#[test]
fn test_script_json_uses_type_field() {
    let script = sample_script("Json", 1);
    let json = serde_json::to_value(&script).unwrap();
    assert_eq!(json["blocks"][0]["type"], "SCENE_HEADING");
    assert_eq!(json["blocks"][2]["type"], "PARENTHETICAL");
}
