// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for freshly shaped records.
//!
//! These are **zero-cost in release builds** (`debug_assert!`). They run after
//! every shaping step in debug builds, so a broken record panics at the node
//! that produced it instead of surfacing later as a rejected payload.

use crate::shape::{weight_tag_name, PAGE_RECORD_WEIGHT_TAG_NAME};
use crate::types::{ContentNode, SearchRecord};

use super::check_record;

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// Tag weights strictly decrease with heading depth and stay above paragraphs.
const _: () = {
    let mut level = 1u8;
    while level < 6 {
        // 100 - level * 10, the formula used by `weight_tag_name`
        assert!(100 - level * 10 > 100 - (level + 1) * 10);
        level += 1;
    }
    assert!(100 - 6 * 10 > 0);
    // Page records rank like an h1
    assert!(PAGE_RECORD_WEIGHT_TAG_NAME == 100 - 10);
};

/// Check that a shaped record is well formed and agrees with its node.
///
/// # Panics (debug builds only)
/// Panics if the record breaks a record invariant, or if its title/text split
/// or weights disagree with the node's tag class.
#[inline]
pub fn check_shaped_record(node: &ContentNode, record: &SearchRecord) {
    debug_assert!(
        check_record(0, record).is_ok(),
        "shaped record violates invariants: {:?}",
        check_record(0, record)
    );
    let (used, unused) = if node.tag.is_heading() {
        (&record.title, &record.text)
    } else {
        (&record.text, &record.title)
    };
    debug_assert!(
        !used.is_empty() && unused.is_empty(),
        "title/text split disagrees with tag {}",
        node.tag
    );
    debug_assert_eq!(record.weight_tag_name, weight_tag_name(node.tag));
    debug_assert_eq!(record.weight_order, i64::from(node.sequence_id));
}
