//! File-backed reference data tests.

use std::fs;

use tempfile::TempDir;

use jdskill::reference::{default_aliases, default_categories};
use jdskill::{Config, FileStore, RecordKind, ReferenceData, ReferenceStore, SkillPipeline};

fn config_for(dir: &TempDir) -> Config {
    let mut config = Config::default();
    config.data.dir = dir.path().join("data").to_string_lossy().to_string();
    config
}

#[test]
fn test_load_without_files_uses_defaults_and_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::from_config(&config_for(&dir)).unwrap();

    let data = ReferenceData::load(&store);
    assert_eq!(data.aliases(), &default_aliases());
    assert_eq!(data.categories(), &default_categories());
    assert!(!store.dir().exists());
}

#[test]
fn test_initialize_creates_pretty_json_once() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::from_config(&config_for(&dir)).unwrap();

    let report = ReferenceData::initialize(&store).unwrap();
    assert_eq!(report.created.len(), 2);

    let aliases_path = store.path(RecordKind::Aliases);
    let categories_path = store.path(RecordKind::Categories);
    let first = fs::read_to_string(&categories_path).unwrap();
    assert!(first.starts_with("{\n"));
    assert!(first.contains("\"Uncategorized\": []"));

    let report = ReferenceData::initialize(&store).unwrap();
    assert!(report.created.is_empty());
    assert_eq!(fs::read_to_string(&categories_path).unwrap(), first);

    let aliases: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(aliases_path).unwrap()).unwrap();
    assert_eq!(aliases["k8s"], "kubernetes");
}

#[test]
fn test_user_edits_are_used() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir);
    let store = FileStore::from_config(&config).unwrap();
    ReferenceData::initialize(&store).unwrap();

    store
        .write(RecordKind::Aliases, r#"{"elixir": "elixir", "py": "python"}"#)
        .unwrap();
    store
        .write(
            RecordKind::Categories,
            r#"{"Functional": ["elixir"], "Scripting": ["python"]}"#,
        )
        .unwrap();

    let pipeline = SkillPipeline::from_config(config).unwrap();
    let report = pipeline.analyze("Elixir and py");
    assert_eq!(report.skills, vec!["elixir".to_string(), "python".to_string()]);

    let names: Vec<&str> = report.categories.categories().collect();
    assert_eq!(names, vec!["Functional", "Scripting"]);
}

#[test]
fn test_corrupt_file_falls_back_per_record() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir);
    let store = FileStore::from_config(&config).unwrap();

    store.write(RecordKind::Aliases, "{ truncated").unwrap();
    store
        .write(RecordKind::Categories, r#"{"Only": ["python"]}"#)
        .unwrap();

    let data = ReferenceData::load(&store);
    assert_eq!(data.defaulted(), &[RecordKind::Aliases]);
    assert_eq!(data.aliases(), &default_aliases());
    assert_eq!(data.categories().len(), 1);

    let pipeline = SkillPipeline::from_config(config).unwrap();
    let report = pipeline.analyze("python and docker");
    assert_eq!(report.categories.get("Only"), Some(&["python".to_string()][..]));
    assert_eq!(
        report.categories.get("Uncategorized"),
        Some(&["docker".to_string()][..])
    );
}

#[test]
fn test_reload_picks_up_replaced_store() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir);
    let store = FileStore::from_config(&config).unwrap();
    ReferenceData::initialize(&store).unwrap();

    let mut pipeline = SkillPipeline::from_config(config).unwrap();
    assert!(pipeline.analyze("zig").is_empty());

    store.write(RecordKind::Aliases, r#"{"zig": "zig"}"#).unwrap();
    pipeline.reload(&store);
    assert_eq!(pipeline.analyze("zig").skills, vec!["zig".to_string()]);
}
