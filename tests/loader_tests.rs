//! Integration tests for JSON file loading, including gzipped input.

use flate2::write::GzEncoder;
use flate2::Compression;
use parsequill::file::loader::load_json_file;
use serde_json::json;
use std::io::Write;

#[test]
fn test_load_plain_json_file() {
    let mut file = tempfile::NamedTempFile::with_suffix(".json").unwrap();
    file.write_all(br#"{"user": {"name": "Alice"}, "count": 3}"#)
        .unwrap();

    let value = load_json_file(file.path()).unwrap();
    assert_eq!(value["user"]["name"], json!("Alice"));
    assert_eq!(value["count"], json!(3));
}

#[test]
fn test_load_gzipped_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json.gz");

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(br#"{"compressed": true}"#).unwrap();
    std::fs::write(&path, encoder.finish().unwrap()).unwrap();

    let value = load_json_file(&path).unwrap();
    assert_eq!(value["compressed"], json!(true));
}

#[test]
fn test_load_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_json_file(dir.path().join("absent.json")).is_err());
}

#[test]
fn test_load_invalid_json_fails() {
    let mut file = tempfile::NamedTempFile::with_suffix(".json").unwrap();
    file.write_all(b"{not json").unwrap();
    assert!(load_json_file(file.path()).is_err());
}

#[test]
fn test_load_corrupted_gzip_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json.gz");
    std::fs::write(&path, b"definitely not gzip").unwrap();
    assert!(load_json_file(&path).is_err());
}

#[test]
fn test_document_key_order_survives_loading() {
    let mut file = tempfile::NamedTempFile::with_suffix(".json").unwrap();
    file.write_all(br#"{"zebra": 1, "apple": 2, "mango": 3}"#)
        .unwrap();

    let value = load_json_file(file.path()).unwrap();
    let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["zebra", "apple", "mango"]);
}
