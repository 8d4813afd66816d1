// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: record invariants, checked two ways.
//!
//! 1. **Full check** ([`check_records`]) over a finished record list. The build
//!    runs it before writing, `inspect` runs it on files. A violation means
//!    the backend would be fed garbage, so the payload is rejected.
//!
//! 2. **Runtime contracts** ([`contracts`]) that panic in debug builds when a
//!    single freshly shaped record is wrong. Zero-cost in release, but catch
//!    bugs while tests run.

pub mod contracts;
mod types;

use std::collections::HashSet;

pub use types::*;

use crate::shape::{PAGE_RECORD_WEIGHT_ORDER, PAGE_RECORD_WEIGHT_TAG_NAME};
use crate::types::SearchRecord;

/// Is this a synthetic page record?
pub fn is_page_record(record: &SearchRecord) -> bool {
    record.weight_order == PAGE_RECORD_WEIGHT_ORDER
}

/// Valid tag weights: 0 for paragraphs, 40..=90 in steps of ten for headings.
pub fn is_valid_tag_weight(weight: u8) -> bool {
    weight == 0 || ((40..=90).contains(&weight) && weight % 10 == 0)
}

/// Check the invariants that hold for any single record.
pub fn check_record(index: usize, record: &SearchRecord) -> Result<(), InvariantError> {
    let len = record.hierarchy.len();
    if len < 2 {
        return Err(InvariantError::ShortHierarchy { index, len });
    }
    if record.category != record.hierarchy[0] || record.subcategory != record.hierarchy[1] {
        return Err(InvariantError::MisalignedCategory { index });
    }
    if !record.title.is_empty() && !record.text.is_empty() {
        return Err(InvariantError::TitleAndText { index });
    }
    if !is_valid_tag_weight(record.weight_tag_name) {
        return Err(InvariantError::InvalidTagWeight {
            index,
            weight: record.weight_tag_name,
        });
    }
    if record.weight_order < 0 && record.weight_order != PAGE_RECORD_WEIGHT_ORDER {
        return Err(InvariantError::InvalidOrderWeight {
            index,
            weight: record.weight_order,
        });
    }
    if is_page_record(record)
        && (record.weight_tag_name != PAGE_RECORD_WEIGHT_TAG_NAME
            || !record.text.is_empty()
            || record.title.is_empty())
    {
        return Err(InvariantError::MalformedPageRecord { index });
    }
    Ok(())
}

/// Check a finalized record list: every record is well formed, page records
/// come last, and each `(category, subcategory)` group has exactly one.
pub fn check_records(records: &[SearchRecord]) -> Result<VerificationReport, InvariantError> {
    let mut groups: Vec<(&str, &str)> = Vec::new();
    let mut group_set: HashSet<(&str, &str)> = HashSet::new();
    let mut paged: HashSet<(&str, &str)> = HashSet::new();
    let mut page_records = 0;

    for (index, record) in records.iter().enumerate() {
        check_record(index, record)?;

        let key = (record.category.as_str(), record.subcategory.as_str());
        if is_page_record(record) {
            page_records += 1;
            if !group_set.contains(&key) {
                return Err(InvariantError::OrphanPageRecord { index });
            }
            if !paged.insert(key) {
                return Err(InvariantError::DuplicatePageRecord { index });
            }
        } else {
            if page_records > 0 {
                return Err(InvariantError::PageRecordOutOfPlace { index });
            }
            if group_set.insert(key) {
                groups.push(key);
            }
        }
    }

    if let Some(&(category, subcategory)) = groups.iter().find(|key| !paged.contains(*key)) {
        return Err(InvariantError::MissingPageRecord {
            category: category.to_string(),
            subcategory: subcategory.to_string(),
        });
    }

    Ok(VerificationReport {
        records: records.len(),
        page_records,
        groups: groups.len(),
    })
}
