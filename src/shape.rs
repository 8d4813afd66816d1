// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning a positioned node into a search record.
//!
//! Two ranking signals come out of here, both consumed by the backend at query
//! time:
//!
//! | Signal            | Source          | Values                        |
//! |-------------------|-----------------|-------------------------------|
//! | `weight_tag_name` | tag class       | h1=90, h2=80 … h6=40, p=0     |
//! | `weight_order`    | `sequence_id`   | document order, page records -1 |
//!
//! `page_score` is a coarser third signal from the site section (docs > tips >
//! other > blog).

use crate::hierarchy::SiteSection;
use crate::types::{ContentNode, Locale, SearchRecord, TagClass};

/// Separator between the two parts of a display title.
pub const DISPLAY_SEPARATOR: &str = " › ";

/// Prefix of the display title of page-level records.
pub const GO_TO_PREFIX: &str = "Go to ";

/// `weight_tag_name` of synthetic page records (same as an h1).
pub const PAGE_RECORD_WEIGHT_TAG_NAME: u8 = 90;

/// `weight_order` of synthetic page records; sorts before every real node.
pub const PAGE_RECORD_WEIGHT_ORDER: i64 = -1;

/// Tag weight: paragraphs 0, headings `100 - level * 10`.
///
/// Strictly decreasing with depth, so a shallow heading outranks a deeper one
/// at equal text relevance.
pub fn weight_tag_name(tag: TagClass) -> u8 {
    match tag {
        TagClass::Paragraph => 0,
        TagClass::Heading(level) => 100 - level.number() * 10,
    }
}

/// Section importance by URL prefix: `/docs/` 3, `/tips/` 2, `/blog/` 0, else 1.
pub fn page_score(url: &str) -> u8 {
    SiteSection::from_url(url).page_score()
}

/// `"Go to <subcategory>"`.
pub fn go_to_title(subcategory: &str) -> String {
    format!("{}{}", GO_TO_PREFIX, subcategory)
}

/// Label shown for a record.
///
/// Two-level hierarchies get `"Go to <page>"`. Deeper ones show the nearest
/// subsection and the most specific heading, collapsed into one when equal.
pub fn display_title(hierarchy: &[String]) -> String {
    match hierarchy {
        [] | [_] => String::new(),
        [_, subcategory] => go_to_title(subcategory),
        [_, _, section, rest @ ..] => {
            let last = rest.last().unwrap_or(section);
            let mut parts: Vec<&str> = Vec::with_capacity(2);
            for part in [section.as_str(), last.as_str()] {
                if !part.is_empty() && !parts.contains(&part) {
                    parts.push(part);
                }
            }
            parts.join(DISPLAY_SEPARATOR)
        }
    }
}

/// Shape a node into a record.
///
/// Returns `None` when the hierarchy has fewer than two elements: without a
/// category and subcategory the record cannot be grouped or displayed.
pub fn shape_record(
    node: &ContentNode,
    hierarchy: Vec<String>,
    url: String,
    locale: Locale,
) -> Option<SearchRecord> {
    if hierarchy.len() < 2 {
        return None;
    }

    let (title, text) = if node.tag.is_heading() {
        (node.text.clone(), String::new())
    } else {
        (String::new(), node.text.clone())
    };

    Some(SearchRecord {
        page_score: page_score(&node.url),
        locale,
        localized: locale.is_localized(),
        category: hierarchy[0].clone(),
        subcategory: hierarchy[1].clone(),
        display_title: display_title(&hierarchy),
        hierarchy,
        url,
        title,
        text,
        weight_tag_name: weight_tag_name(node.tag),
        weight_order: i64::from(node.sequence_id),
    })
}
