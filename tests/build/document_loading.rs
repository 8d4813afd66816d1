//! Tests for loading crawl dump files.

use std::fs;
use std::path::Path;

use docsift::build::{load_document, load_documents, InputManifest};
use docsift::{BuildError, HeadingLevel};
use tempfile::TempDir;

use crate::common::fixture;

#[test]
fn test_load_documents_sorted_by_path() {
    let input = fixture("valid");
    let manifest = InputManifest::load(Path::new(&input)).unwrap();
    let docs = load_documents(Path::new(&input), &manifest).unwrap();

    let paths: Vec<&str> = docs.iter().map(|d| d.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "blog/2024/react-19.md",
            "docs/hooks-zh-CN.md",
            "docs/hooks.md",
            "index.md"
        ]
    );
}

#[test]
fn test_load_document_headings_and_missing_sequence() {
    let path = format!("{}/docs-hooks.json", fixture("valid"));
    let doc = load_document(Path::new(&path)).unwrap();
    assert_eq!(doc.nodes.len(), 4);

    let last = &doc.nodes[3];
    assert_eq!(last.sequence_id, None);
    assert_eq!(last.headings.get(HeadingLevel::H2), Some("State Hook"));
    assert_eq!(last.headings.get(HeadingLevel::H3), None);
}

#[test]
fn test_load_document_keeps_malformed_nodes() {
    let path = format!("{}/docs-refs.json", fixture("malformed-nodes"));
    let doc = load_document(Path::new(&path)).unwrap();
    assert_eq!(doc.nodes.len(), 5);
    assert!(doc.nodes[1].url.is_none());
    assert!(doc.nodes[2].tag_name.is_none());
}

#[test]
fn test_load_document_reads_nulls_as_absent() {
    let path = format!("{}/docs-refs-callback.json", fixture("malformed-nodes"));
    let doc = load_document(Path::new(&path)).unwrap();
    assert_eq!(doc.nodes.len(), 3);

    let first = &doc.nodes[0];
    assert_eq!(first.sequence_id, None);
    assert_eq!(first.headings.get(HeadingLevel::H1), Some("Callback Refs"));
    assert_eq!(first.headings.get(HeadingLevel::H2), None);

    assert_eq!(doc.nodes[1].text, None);
    assert!(doc.nodes[2].headings.is_empty());
    assert!(doc.nodes[1].clone().into_node(1).is_err());
    assert!(doc.nodes[2].clone().into_node(2).is_err());
}

#[test]
fn test_load_documents_missing_file() {
    let input = fixture("missing-doc");
    let manifest = InputManifest::load(Path::new(&input)).unwrap();
    let result = load_documents(Path::new(&input), &manifest);
    match result {
        Err(BuildError::Read { path, .. }) => assert!(path.ends_with("absent.json")),
        other => panic!("expected a read error, got {:?}", other),
    }
}

#[test]
fn test_load_document_invalid_json() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.json");
    fs::write(&path, r#"{"path": "docs/a.md", "nodes": [ {"#).unwrap();

    let result = load_document(&path);
    assert!(matches!(result, Err(BuildError::Json { .. })));
}
