// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reading a written record file back and summarizing it.
//!
//! `docsift inspect` is the consumer of this module: load, verify, then
//! tabulate. The tables are ordered maps so the printed summary is stable.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use crate::error::BuildError;
use crate::types::{Locale, SearchRecord};
use crate::verify::is_page_record;

/// Load a records JSON file.
pub fn load_records(path: &Path) -> Result<Vec<SearchRecord>, BuildError> {
    let content = fs::read_to_string(path).map_err(|source| BuildError::Read {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| BuildError::Json {
        path: path.display().to_string(),
        source,
    })
}

/// Per-group tallies of a record list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStats {
    pub total: usize,
    pub page_records: usize,
    /// Records per category, page records included.
    pub by_category: BTreeMap<String, usize>,
    pub by_locale: BTreeMap<Locale, usize>,
    /// Records per `weight_tag_name`.
    pub by_tag_weight: BTreeMap<u8, usize>,
    /// Distinct `(category, subcategory)` pairs.
    pub groups: usize,
}

impl RecordStats {
    pub fn from_records(records: &[SearchRecord]) -> Self {
        let mut stats = RecordStats {
            total: records.len(),
            ..RecordStats::default()
        };
        let mut groups = BTreeSet::new();

        for record in records {
            if is_page_record(record) {
                stats.page_records += 1;
            }
            *stats.by_category.entry(record.category.clone()).or_insert(0) += 1;
            *stats.by_locale.entry(record.locale).or_insert(0) += 1;
            *stats.by_tag_weight.entry(record.weight_tag_name).or_insert(0) += 1;
            groups.insert((record.category.as_str(), record.subcategory.as_str()));
        }

        stats.groups = groups.len();
        stats
    }

    /// Records shaped from crawled nodes.
    pub fn shaped(&self) -> usize {
        self.total - self.page_records
    }
}
