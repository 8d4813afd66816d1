// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search records from crawled documentation pages.
//!
//! A crawler walks the rendered site and emits one content node per heading
//! or paragraph. This crate turns that node stream into the flat record list
//! a hosted search backend indexes: each record carries a hierarchy path, a
//! deep-link URL, a display title and the ranking weights the backend sorts
//! by. Every page additionally gets one synthetic "Go to <page>" record.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐   ┌──────────────┐   ┌─────────────┐   ┌───────────────┐
//! │ classify.rs │──▶│ hierarchy.rs │──▶│  shape.rs   │──▶│ synthesize.rs │
//! │ (exclusion  │   │ (path, URL,  │   │ (weights,   │   │ (one page     │
//! │  rules)     │   │  locale)     │   │  titles)    │   │  record/group)│
//! └─────────────┘   └──────────────┘   └─────────────┘   └───────────────┘
//!        │                 │                  │                  │
//!        ▼                 ▼                  ▼                  ▼
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │ extract.rs: RecordExtractor (accumulate) ─▶ finalize ─▶ Extraction  │
//! └─────────────────────────────────────────────────────────────────────┘
//!                                    │
//!                                    ▼
//!              verify/ (check_records) ─▶ sink.rs (RecordSink)
//! ```
//!
//! `build/` wires this to the filesystem (manifest in, content-hashed JSON
//! out) and `inspect` reads a written file back.
//!
//! # Usage
//!
//! ```
//! use docsift::testing::paragraph_node;
//! use docsift::{extract_nodes, MemorySink};
//!
//! let node = paragraph_node("/docs/hooks.html", Some("Hooks"), "Hooks let you use state.");
//! let extraction = extract_nodes([&node]).unwrap();
//!
//! // one shaped record plus the page record for (Docs, Hooks)
//! assert_eq!(extraction.records.len(), 2);
//!
//! let mut sink = MemorySink::new();
//! extraction.submit_to(&mut sink).unwrap();
//! ```

pub mod build;
pub mod classify;
pub mod error;
pub mod extract;
pub mod hierarchy;
pub mod inspect;
pub mod shape;
pub mod sink;
pub mod slug;
pub mod synthesize;
pub mod testing;
pub mod types;
pub mod verify;

pub use classify::{classify, should_exclude, ExclusionReason};
pub use error::{BuildError, NodeError, PipelineError};
pub use extract::{
    extract_documents, extract_nodes, shape_node, ExtractReport, Extraction, RecordExtractor, Skip,
};
pub use hierarchy::{build_hierarchy, build_url, derive_locale, SiteSection};
pub use shape::{display_title, shape_record, weight_tag_name};
pub use sink::{MemorySink, RecordSink};
pub use slug::anchor_slug;
pub use synthesize::synthesize_page_records;
pub use types::{
    ContentNode, CrawledDocument, HeadingChain, HeadingLevel, Locale, RawNode, SearchRecord,
    TagClass,
};
pub use verify::{check_records, InvariantError, VerificationReport};
