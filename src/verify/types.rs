// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Invariant violations and the summary of a successful check.

use std::fmt;

/// A record list that breaks one of the record invariants.
///
/// `index` is the position of the offending record in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// Hierarchy has fewer than two elements.
    ShortHierarchy { index: usize, len: usize },
    /// `category`/`subcategory` differ from `hierarchy[0]`/`hierarchy[1]`.
    MisalignedCategory { index: usize },
    /// Both `title` and `text` are populated.
    TitleAndText { index: usize },
    /// Tag weight outside {0, 40, 50, ..., 90}.
    InvalidTagWeight { index: usize, weight: u8 },
    /// Negative order weight other than the page record marker.
    InvalidOrderWeight { index: usize, weight: i64 },
    /// Page record without weight 90, with text, or without a title.
    MalformedPageRecord { index: usize },
    /// A shaped record follows a page record.
    PageRecordOutOfPlace { index: usize },
    /// A group of shaped records has no page record.
    MissingPageRecord {
        category: String,
        subcategory: String,
    },
    /// A group has more than one page record.
    DuplicatePageRecord { index: usize },
    /// A page record whose group has no shaped records.
    OrphanPageRecord { index: usize },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::ShortHierarchy { index, len } => {
                write!(f, "record {} has hierarchy of length {} < 2", index, len)
            }
            InvariantError::MisalignedCategory { index } => write!(
                f,
                "record {} category/subcategory differ from hierarchy[0..2]",
                index
            ),
            InvariantError::TitleAndText { index } => {
                write!(f, "record {} has both title and text", index)
            }
            InvariantError::InvalidTagWeight { index, weight } => {
                write!(f, "record {} has invalid tag weight {}", index, weight)
            }
            InvariantError::InvalidOrderWeight { index, weight } => {
                write!(f, "record {} has invalid order weight {}", index, weight)
            }
            InvariantError::MalformedPageRecord { index } => {
                write!(f, "page record {} is malformed", index)
            }
            InvariantError::PageRecordOutOfPlace { index } => {
                write!(f, "record {} follows a page record", index)
            }
            InvariantError::MissingPageRecord {
                category,
                subcategory,
            } => write!(f, "no page record for ({}, {})", category, subcategory),
            InvariantError::DuplicatePageRecord { index } => {
                write!(f, "page record {} duplicates an earlier one", index)
            }
            InvariantError::OrphanPageRecord { index } => {
                write!(f, "page record {} has no records in its group", index)
            }
        }
    }
}

impl std::error::Error for InvariantError {}

/// What a successful check saw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerificationReport {
    /// Total records, page records included.
    pub records: usize,
    /// Synthetic page records.
    pub page_records: usize,
    /// Distinct `(category, subcategory)` groups.
    pub groups: usize,
}
