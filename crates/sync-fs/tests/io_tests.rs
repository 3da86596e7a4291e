use std::fs;

use sync_fs::{NormalizedPath, io};
use tempfile::TempDir;

#[test]
fn test_write_atomic_creates_file() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("CLAUDE.md"));

    io::write_atomic(&path, b"hello world").unwrap();

    let content = fs::read_to_string(path.to_native()).unwrap();
    assert_eq!(content, "hello world");
}

#[test]
fn test_write_atomic_overwrites_existing() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("CLAUDE.md");
    fs::write(&file_path, "hand edited").unwrap();

    let path = NormalizedPath::new(&file_path);
    io::write_atomic(&path, b"generated").unwrap();

    let content = fs::read_to_string(&file_path).unwrap();
    assert_eq!(content, "generated");
}

#[test]
fn test_write_text_creates_nested_parents() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path()).join(".cursor/rules/testing.mdc");

    io::write_text(&path, "body").unwrap();

    assert!(temp.path().join(".cursor").join("rules").is_dir());
    assert_eq!(io::read_text(&path).unwrap(), "body");
}

#[test]
fn test_write_leaves_no_temp_files() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("out.md"));

    io::write_text(&path, "content").unwrap();

    let leftovers: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "found temp files: {:?}", leftovers);
}

#[test]
fn test_failed_replace_removes_temp_file() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("CLAUDE.md").join("blocker")).unwrap();
    let path = NormalizedPath::new(temp.path().join("CLAUDE.md"));

    assert!(io::write_text(&path, "content").is_err());

    let leftovers: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "found temp files: {:?}", leftovers);
    assert!(temp.path().join("CLAUDE.md").is_dir());
}

#[test]
fn test_read_text_nonexistent_file() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("missing.md"));

    let err = io::read_text(&path).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_read_text_if_exists() {
    let temp = TempDir::new().unwrap();
    let present = NormalizedPath::new(temp.path().join("present.md"));
    let absent = NormalizedPath::new(temp.path().join("absent.md"));
    fs::write(present.to_native(), "here").unwrap();

    assert_eq!(io::read_text_if_exists(&present).unwrap().as_deref(), Some("here"));
    assert_eq!(io::read_text_if_exists(&absent).unwrap(), None);
}
