// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Synthetic "Go to <page>" records.
//!
//! A query for a page's name should find the page even when no paragraph
//! mentions it. After every node has been shaped, records are grouped by
//! `(category, subcategory)` and each group gets one page record built from
//! its first member.
//!
//! Groups are emitted in first-occurrence order of their key, the same trick
//! `DictTable`-style interning uses: an ordered list of keys plus a lookup set,
//! so output never depends on hash iteration order.

use std::collections::HashSet;

use crate::shape::{go_to_title, PAGE_RECORD_WEIGHT_ORDER, PAGE_RECORD_WEIGHT_TAG_NAME};
use crate::types::SearchRecord;

/// First record of each `(category, subcategory)` group, in first-occurrence order.
pub fn group_representatives(records: &[SearchRecord]) -> Vec<&SearchRecord> {
    let mut seen: HashSet<(&str, &str)> = HashSet::new();
    records
        .iter()
        .filter(|r| seen.insert((r.category.as_str(), r.subcategory.as_str())))
        .collect()
}

/// URL with any `#anchor` removed.
pub fn strip_anchor(url: &str) -> &str {
    url.split_once('#').map_or(url, |(page, _)| page)
}

/// Build the page record standing in for a whole group.
pub fn page_record(representative: &SearchRecord) -> SearchRecord {
    SearchRecord {
        url: strip_anchor(&representative.url).to_string(),
        locale: representative.locale,
        localized: representative.localized,
        hierarchy: representative.hierarchy.clone(),
        category: representative.category.clone(),
        subcategory: representative.subcategory.clone(),
        display_title: go_to_title(&representative.subcategory),
        title: representative.subcategory.clone(),
        text: String::new(),
        page_score: representative.page_score,
        weight_tag_name: PAGE_RECORD_WEIGHT_TAG_NAME,
        weight_order: PAGE_RECORD_WEIGHT_ORDER,
    }
}

/// One page record per distinct `(category, subcategory)`, to be appended
/// after `records`.
pub fn synthesize_page_records(records: &[SearchRecord]) -> Vec<SearchRecord> {
    group_representatives(records)
        .into_iter()
        .map(page_record)
        .collect()
}
