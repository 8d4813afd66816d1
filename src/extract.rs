// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The extraction pipeline: nodes in, finalized record list out.
//!
//! Extraction has two phases, and the split is explicit in the types:
//!
//! ```text
//!   accumulate (RecordExtractor)                 finalize()
//! ┌──────────────────────────────────────────┐  ┌──────────────────────┐
//! │ node ─▶ classify ─▶ hierarchy ─▶ shape ──┼─▶│ synthesize page      │──▶ Extraction
//! │            │            │          │     │  │ records, append once │
//! │         excluded    malformed  too short │  └──────────────────────┘
//! └──────────────────────────────────────────┘
//! ```
//!
//! Shaping a node is a pure function of that node, so documents can be shaped
//! independently (in parallel with the `parallel` feature) and concatenated in
//! document order. Page synthesis needs the whole record list and runs once,
//! after everything else.

use std::collections::BTreeMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, debug_span, info, warn};

use crate::classify::{classify, ExclusionReason};
use crate::error::{NodeError, PipelineError};
use crate::hierarchy::{build_hierarchy, build_url, derive_locale};
use crate::shape::shape_record;
use crate::synthesize::synthesize_page_records;
use crate::types::{ContentNode, CrawledDocument, RawNode, SearchRecord};
use crate::verify::contracts::check_shaped_record;

/// Why a node produced no record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Skip {
    /// Matched an exclusion rule
    Excluded(ExclusionReason),
    /// Fewer than two hierarchy levels
    HierarchyTooShort,
    /// Missing or blank required fields, or unknown tag
    Malformed(NodeError),
}

/// Counts of what happened to every node of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractReport {
    /// Nodes seen, including skipped ones.
    pub nodes: usize,
    /// Records shaped from nodes.
    pub emitted: usize,
    /// Excluded nodes by reason.
    #[serde(serialize_with = "serialize_reasons")]
    pub excluded: BTreeMap<ExclusionReason, usize>,
    pub too_short: usize,
    pub malformed: usize,
    /// Synthetic page records appended at finalize.
    pub page_records: usize,
}

fn serialize_reasons<S: serde::Serializer>(
    reasons: &BTreeMap<ExclusionReason, usize>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(reasons.iter().map(|(reason, count)| (reason.as_str(), count)))
}

impl ExtractReport {
    fn count(&mut self, outcome: &Result<(), Skip>) {
        self.nodes += 1;
        match outcome {
            Ok(()) => self.emitted += 1,
            Err(Skip::Excluded(reason)) => *self.excluded.entry(*reason).or_insert(0) += 1,
            Err(Skip::HierarchyTooShort) => self.too_short += 1,
            Err(Skip::Malformed(_)) => self.malformed += 1,
        }
    }

    /// Fold another report into this one.
    pub fn merge(&mut self, other: &ExtractReport) {
        self.nodes += other.nodes;
        self.emitted += other.emitted;
        for (reason, count) in &other.excluded {
            *self.excluded.entry(*reason).or_insert(0) += count;
        }
        self.too_short += other.too_short;
        self.malformed += other.malformed;
        self.page_records += other.page_records;
    }

    /// Total excluded nodes, all reasons.
    pub fn excluded_total(&self) -> usize {
        self.excluded.values().sum()
    }

    /// Nodes that produced no record.
    pub fn skipped(&self) -> usize {
        self.nodes - self.emitted
    }
}

/// Run the per-node stages: classify, build hierarchy and URL, shape.
pub fn shape_node(node: &ContentNode) -> Result<SearchRecord, Skip> {
    if node.text.is_empty() {
        return Err(Skip::Malformed(NodeError::MissingField { field: "text" }));
    }
    if let Some(reason) = classify(node) {
        return Err(Skip::Excluded(reason));
    }

    let hierarchy = build_hierarchy(node);
    let url = build_url(node);
    let locale = derive_locale(&node.url);

    let record = shape_record(node, hierarchy, url, locale).ok_or(Skip::HierarchyTooShort)?;
    check_shaped_record(node, &record);
    Ok(record)
}

/// Accumulation phase: an ordered record buffer plus the report.
#[derive(Debug, Default)]
pub struct RecordExtractor {
    records: Vec<SearchRecord>,
    report: ExtractReport,
}

impl RecordExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shape one validated node and append its record.
    pub fn push(&mut self, node: &ContentNode) -> Result<(), Skip> {
        let outcome = match shape_node(node) {
            Ok(record) => {
                self.records.push(record);
                Ok(())
            }
            Err(skip) => {
                debug!(url = %node.url, sequence_id = node.sequence_id, ?skip, "node skipped");
                Err(skip)
            }
        };
        self.report.count(&outcome);
        outcome
    }

    /// Validate and shape a raw crawler node. `position` is its index in the
    /// document, used when the crawler left out `sequenceId`.
    pub fn push_raw(&mut self, raw: RawNode, position: usize) -> Result<(), Skip> {
        match raw.into_node(position) {
            Ok(node) => self.push(&node),
            Err(err) => {
                warn!(position, error = %err, "malformed content node");
                let outcome = Err(Skip::Malformed(err));
                self.report.count(&outcome);
                outcome
            }
        }
    }

    /// Shape every node of a document, in order.
    pub fn push_document(&mut self, document: CrawledDocument) {
        let _span = debug_span!("document", path = %document.path).entered();
        for (position, raw) in document.nodes.into_iter().enumerate() {
            // Skips are counted in the report
            let _ = self.push_raw(raw, position);
        }
    }

    /// Append a document shaped by another extractor, keeping its order.
    pub fn append(&mut self, other: RecordExtractor) {
        self.records.extend(other.records);
        self.report.merge(&other.report);
    }

    /// Records shaped so far.
    pub fn records(&self) -> &[SearchRecord] {
        &self.records
    }

    pub fn report(&self) -> &ExtractReport {
        &self.report
    }

    /// Finalize: append one page record per `(category, subcategory)` group.
    ///
    /// Fails with [`PipelineError::EmptyCrawl`] when no node was ever pushed.
    pub fn finalize(mut self) -> Result<Extraction, PipelineError> {
        if self.report.nodes == 0 {
            return Err(PipelineError::EmptyCrawl);
        }

        let pages = synthesize_page_records(&self.records);
        self.report.page_records = pages.len();
        self.records.extend(pages);

        info!(
            nodes = self.report.nodes,
            emitted = self.report.emitted,
            excluded = self.report.excluded_total(),
            too_short = self.report.too_short,
            malformed = self.report.malformed,
            page_records = self.report.page_records,
            "extraction finalized"
        );

        Ok(Extraction {
            records: self.records,
            report: self.report,
        })
    }
}

/// A finalized record list, ready for a sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub records: Vec<SearchRecord>,
    pub report: ExtractReport,
}

fn shape_document(document: CrawledDocument) -> RecordExtractor {
    let mut extractor = RecordExtractor::new();
    extractor.push_document(document);
    extractor
}

/// Extract records from whole documents.
///
/// Documents are shaped in ascending `path` order; with the `parallel`
/// feature they are shaped concurrently and concatenated in that same order,
/// so the output is identical either way.
pub fn extract_documents(mut documents: Vec<CrawledDocument>) -> Result<Extraction, PipelineError> {
    documents.sort_by(|a, b| a.path.cmp(&b.path));

    #[cfg(feature = "parallel")]
    let shaped: Vec<RecordExtractor> = documents.into_par_iter().map(shape_document).collect();
    #[cfg(not(feature = "parallel"))]
    let shaped: Vec<RecordExtractor> = documents.into_iter().map(shape_document).collect();

    let mut extractor = RecordExtractor::new();
    for document in shaped {
        extractor.append(document);
    }
    extractor.finalize()
}

/// Extract records from a node stream that was already validated.
pub fn extract_nodes<'a, I>(nodes: I) -> Result<Extraction, PipelineError>
where
    I: IntoIterator<Item = &'a ContentNode>,
{
    let mut extractor = RecordExtractor::new();
    for node in nodes {
        // Skips are counted in the report
        let _ = extractor.push(node);
    }
    extractor.finalize()
}
