use std::fs;

use pretty_assertions::assert_eq;
use serde::Deserialize;
use sync_fs::{ConfigFormat, ConfigStore, Error, NormalizedPath};
use tempfile::TempDir;

#[derive(Debug, Deserialize, PartialEq)]
struct TestConfig {
    canonical: String,
    topics: Vec<String>,
}

fn expected() -> TestConfig {
    TestConfig {
        canonical: "AI_INSTRUCTIONS.md".into(),
        topics: vec!["testing.md".into()],
    }
}

#[test]
fn test_load_toml() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("rules-sync.toml");
    fs::write(
        &file_path,
        "canonical = \"AI_INSTRUCTIONS.md\"\ntopics = [\"testing.md\"]\n",
    )
    .unwrap();

    let config: TestConfig = ConfigStore::new().load(&NormalizedPath::new(&file_path)).unwrap();
    assert_eq!(config, expected());
}

#[test]
fn test_load_json() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("rules-sync.json");
    fs::write(
        &file_path,
        r#"{"canonical": "AI_INSTRUCTIONS.md", "topics": ["testing.md"]}"#,
    )
    .unwrap();

    let config: TestConfig = ConfigStore::new().load(&NormalizedPath::new(&file_path)).unwrap();
    assert_eq!(config, expected());
}

#[test]
fn test_load_yaml() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("rules-sync.yml");
    fs::write(&file_path, "canonical: AI_INSTRUCTIONS.md\ntopics:\n  - testing.md\n").unwrap();

    let config: TestConfig = ConfigStore::new().load(&NormalizedPath::new(&file_path)).unwrap();
    assert_eq!(config, expected());
}

#[test]
fn test_load_unsupported_extension() {
    let path = NormalizedPath::new("rules-sync.ini");
    let result: sync_fs::Result<TestConfig> = ConfigStore::new().load(&path);
    assert!(matches!(result, Err(Error::UnsupportedFormat { .. })));
}

#[test]
fn test_load_invalid_toml_reports_format() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("rules-sync.toml");
    fs::write(&file_path, "canonical = [unterminated").unwrap();

    let result: sync_fs::Result<TestConfig> =
        ConfigStore::new().load(&NormalizedPath::new(&file_path));
    match result {
        Err(Error::ConfigParse { format, .. }) => assert_eq!(format, "TOML"),
        other => panic!("expected ConfigParse, got {:?}", other),
    }
}

#[test]
fn test_load_optional_missing_file() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("rules-sync.toml"));
    let config: Option<TestConfig> = ConfigStore::new().load_optional(&path).unwrap();
    assert!(config.is_none());
}

#[test]
fn test_detect_format() {
    assert_eq!(ConfigFormat::detect(&"a.TOML".into()).unwrap(), ConfigFormat::Toml);
    assert_eq!(ConfigFormat::detect(&"a.yaml".into()).unwrap(), ConfigFormat::Yaml);
    assert!(ConfigFormat::detect(&"a".into()).is_err());
}
