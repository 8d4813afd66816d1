//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{
    ContentNode, HeadingChain, HeadingLevel, Locale, RawNode, SearchRecord, TagClass,
};

/// Create a paragraph node with no open headings.
pub fn paragraph_node(url: &str, page_title: Option<&str>, text: &str) -> ContentNode {
    ContentNode {
        url: url.to_string(),
        tag: TagClass::Paragraph,
        text: text.to_string(),
        page_title: page_title.map(str::to_string),
        headings: HeadingChain::new(),
        sequence_id: 0,
    }
}

/// Create a heading node. The heading itself is the deepest entry of its chain.
pub fn heading_node(
    url: &str,
    page_title: Option<&str>,
    level: HeadingLevel,
    text: &str,
) -> ContentNode {
    ContentNode {
        url: url.to_string(),
        tag: TagClass::Heading(level),
        text: text.to_string(),
        page_title: page_title.map(str::to_string),
        headings: HeadingChain::new().with(level, text),
        sequence_id: 0,
    }
}

/// Replace a node's heading chain.
pub fn with_headings(mut node: ContentNode, headings: &[(HeadingLevel, &str)]) -> ContentNode {
    node.headings = headings
        .iter()
        .fold(HeadingChain::new(), |chain, (level, text)| chain.with(*level, *text));
    node
}

/// Set a node's sequence id.
pub fn with_sequence(mut node: ContentNode, sequence_id: u32) -> ContentNode {
    node.sequence_id = sequence_id;
    node
}

/// Create a raw crawler node as it would appear in a document file.
pub fn raw_node(
    url: &str,
    tag_name: &str,
    text: &str,
    page_title: &str,
    headings: &[(HeadingLevel, &str)],
    sequence_id: u32,
) -> RawNode {
    RawNode {
        url: Some(url.to_string()),
        tag_name: Some(tag_name.to_string()),
        text: Some(text.to_string()),
        title: Some(page_title.to_string()),
        headings: headings
            .iter()
            .fold(HeadingChain::new(), |chain, (level, t)| chain.with(*level, *t)),
        sequence_id: Some(sequence_id),
    }
}

/// Create a shaped paragraph record with a two-level hierarchy.
pub fn make_record(category: &str, subcategory: &str, url: &str, weight_order: i64) -> SearchRecord {
    SearchRecord {
        url: url.to_string(),
        locale: Locale::EnUs,
        localized: false,
        hierarchy: vec![category.to_string(), subcategory.to_string()],
        category: category.to_string(),
        subcategory: subcategory.to_string(),
        display_title: format!("Go to {}", subcategory),
        title: String::new(),
        text: format!("Text of {} {}", subcategory, weight_order),
        page_score: 3,
        weight_tag_name: 0,
        weight_order,
    }
}
