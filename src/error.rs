// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for record extraction.
//!
//! Only two things stop a run: a crawl with no nodes at all, and a record list
//! the sink refuses. Everything else (malformed nodes, short hierarchies,
//! excluded pages) is skipped and counted in the extraction report.

use thiserror::Error;

use crate::verify::InvariantError;

/// Why a raw crawler node could not become a content node.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NodeError {
    /// A required field is absent or empty
    #[error("missing required field `{field}`")]
    MissingField { field: &'static str },
    /// Tag name is not one of h1..h6 or a paragraph
    #[error("unknown tag `{tag}`")]
    UnknownTag { tag: String },
}

/// Fatal pipeline failures. The pipeline keeps no intermediate state, so the
/// only recovery is re-running it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// The crawler supplied no nodes
    #[error("crawl produced no content nodes")]
    EmptyCrawl,
    /// The sink rejected the final record list
    #[error("record list rejected: {0}")]
    Rejected(#[from] InvariantError),
}

/// Failures of the file-based extraction build.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Unsupported manifest version {found} (expected {expected})")]
    ManifestVersion { found: u32, expected: u32 },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to serialize records: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}
