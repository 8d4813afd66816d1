//! Tests for manifest parsing.

use std::path::Path;

use docsift::build::{InputManifest, MANIFEST_VERSION};
use docsift::BuildError;

use crate::common::fixture;

#[test]
fn test_parse_manifest_valid() {
    let json = r#"{
        "version": 1,
        "documents": ["0.json", "1.json"]
    }"#;
    let manifest: InputManifest = serde_json::from_str(json).unwrap();
    assert_eq!(manifest.version, 1);
    assert_eq!(manifest.documents.len(), 2);
    assert!(manifest.validate().is_ok());
}

#[test]
fn test_parse_manifest_empty_documents() {
    let json = r#"{
        "version": 1,
        "documents": []
    }"#;
    let manifest: InputManifest = serde_json::from_str(json).unwrap();
    assert!(manifest.documents.is_empty());
}

#[test]
fn test_load_valid_fixture_manifest() {
    let manifest = InputManifest::load(Path::new(&fixture("valid"))).unwrap();
    assert_eq!(manifest.version, MANIFEST_VERSION);
    assert_eq!(manifest.documents.len(), 4);
    assert!(manifest.documents.contains(&"index.json".to_string()));
}

#[test]
fn test_load_manifest_missing() {
    let result = InputManifest::load(Path::new("/nonexistent-docsift-input"));
    match result {
        Err(BuildError::Read { path, .. }) => assert!(path.ends_with("manifest.json")),
        other => panic!("expected a read error, got {:?}", other),
    }
}

#[test]
fn test_load_manifest_invalid_json() {
    let result = InputManifest::load(Path::new(&fixture("invalid-manifest")));
    assert!(
        matches!(result, Err(BuildError::Json { .. })),
        "truncated manifest should be a JSON error: {:?}",
        result
    );
}

#[test]
fn test_load_manifest_unsupported_version() {
    let result = InputManifest::load(Path::new(&fixture("unsupported-version")));
    assert!(matches!(
        result,
        Err(BuildError::ManifestVersion {
            found: 2,
            expected: 1
        })
    ));
}
