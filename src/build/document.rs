// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One crawl dump file: a document path and its nodes in document order.

use std::fs;
use std::path::Path;

use crate::error::BuildError;
use crate::types::CrawledDocument;

/// Read and parse one document file.
///
/// Individual nodes may be malformed (they are skipped later); the file as a
/// whole must be valid JSON.
pub fn load_document(path: &Path) -> Result<CrawledDocument, BuildError> {
    let content = fs::read_to_string(path).map_err(|source| BuildError::Read {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| BuildError::Json {
        path: path.display().to_string(),
        source,
    })
}
