// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The data model: what the crawler hands us and what the backend gets back.
//!
//! A [`ContentNode`] is one heading or paragraph of a crawled page, carrying
//! the text of every heading still open at its position. A [`SearchRecord`] is
//! what the search backend indexes. Nodes are consumed once and produce at most
//! one record; records are never mutated after shaping.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **ContentNode**: `text` is cleaned and non-empty, so a heading always
//!   yields a titled record and a paragraph always yields searchable text.
//!
//! - **SearchRecord**: `hierarchy.len() >= 2`, `category == hierarchy[0]`,
//!   `subcategory == hierarchy[1]`, and at most one of `title`/`text` is non-empty.
//!
//! - **Page records**: `weight_tag_name = 90`, `weight_order = -1`, empty `text`,
//!   non-empty `title`.
//!
//! `verify::check_records` checks all of these on a finished record list.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::NodeError;

// =============================================================================
// TAG CLASSIFICATION
// =============================================================================

/// Heading depth, `h1` (shallowest) through `h6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    /// All levels, shallowest first.
    pub const ALL: [HeadingLevel; 6] = [
        HeadingLevel::H1,
        HeadingLevel::H2,
        HeadingLevel::H3,
        HeadingLevel::H4,
        HeadingLevel::H5,
        HeadingLevel::H6,
    ];

    /// Numeric level, 1..=6.
    #[inline]
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Level from its number. `None` outside 1..=6.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1..=6 => Some(Self::ALL[(n - 1) as usize]),
            _ => None,
        }
    }

    /// Tag name as it appears in markup (`"h1"`..`"h6"`).
    pub fn tag_name(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
            HeadingLevel::H4 => "h4",
            HeadingLevel::H5 => "h5",
            HeadingLevel::H6 => "h6",
        }
    }

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// Structural role of a content node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagClass {
    Heading(HeadingLevel),
    Paragraph,
}

impl TagClass {
    /// Parse a crawler tag name. Accepts `h1`..`h6`, `p` and `paragraph`.
    pub fn parse(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        if tag.eq_ignore_ascii_case("p") || tag.eq_ignore_ascii_case("paragraph") {
            return Some(TagClass::Paragraph);
        }
        let digits = tag.strip_prefix('h').or_else(|| tag.strip_prefix('H'))?;
        let n: u8 = digits.parse().ok()?;
        HeadingLevel::from_number(n).map(TagClass::Heading)
    }

    pub fn is_heading(self) -> bool {
        matches!(self, TagClass::Heading(_))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TagClass::Heading(level) => level.tag_name(),
            TagClass::Paragraph => "p",
        }
    }
}

impl fmt::Display for TagClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// HEADING CHAIN
// =============================================================================

/// Text of every ancestor heading open at a node's position, keyed by level.
///
/// Serialized as a map (`{"h1": "Hooks", "h3": "useState"}`) because that is
/// how the crawler reports it. Crawlers write `null` for closed levels (and
/// sometimes for the whole map); those read as absent. Chains are not required
/// to be well nested: a lone `h4` is legal and kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "Option<BTreeMap<String, Option<String>>>",
    into = "BTreeMap<String, String>"
)]
pub struct HeadingChain {
    levels: [Option<String>; 6],
}

impl HeadingChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter, mostly for tests and fixtures.
    pub fn with(mut self, level: HeadingLevel, text: impl Into<String>) -> Self {
        self.set(level, text);
        self
    }

    pub fn set(&mut self, level: HeadingLevel, text: impl Into<String>) {
        self.levels[level.index()] = Some(text.into());
    }

    /// Heading text at `level`, or `None` when absent or empty.
    pub fn get(&self, level: HeadingLevel) -> Option<&str> {
        self.levels[level.index()]
            .as_deref()
            .filter(|text| !text.is_empty())
    }

    /// Non-empty headings, shallowest first.
    pub fn iter(&self) -> impl Iterator<Item = (HeadingLevel, &str)> + '_ {
        HeadingLevel::ALL
            .into_iter()
            .filter_map(move |level| self.get(level).map(|text| (level, text)))
    }

    /// The most specific non-empty heading, scanning h6 down to h1.
    pub fn deepest(&self) -> Option<(HeadingLevel, &str)> {
        HeadingLevel::ALL
            .into_iter()
            .rev()
            .find_map(|level| self.get(level).map(|text| (level, text)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

impl From<Option<BTreeMap<String, Option<String>>>> for HeadingChain {
    fn from(map: Option<BTreeMap<String, Option<String>>>) -> Self {
        let mut chain = HeadingChain::default();
        for (key, text) in map.into_iter().flatten() {
            // Unknown keys (e.g. "h7", "title") are ignored
            if let (Some(TagClass::Heading(level)), Some(text)) = (TagClass::parse(&key), text) {
                chain.set(level, text);
            }
        }
        chain
    }
}

impl From<HeadingChain> for BTreeMap<String, String> {
    fn from(chain: HeadingChain) -> Self {
        HeadingLevel::ALL
            .into_iter()
            .zip(chain.levels)
            .filter_map(|(level, text)| text.map(|t| (level.tag_name().to_string(), t)))
            .collect()
    }
}

// =============================================================================
// LOCALE
// =============================================================================

/// The fixed set of locales a page can be published in.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Locale {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "zh-CN")]
    ZhCn,
    #[serde(rename = "ja-JP")]
    JaJp,
    #[serde(rename = "ko-KR")]
    KoKr,
}

impl Locale {
    /// Locale of every page without a recognised suffix.
    pub const BASE: Locale = Locale::EnUs;

    pub fn as_str(self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::ZhCn => "zh-CN",
            Locale::JaJp => "ja-JP",
            Locale::KoKr => "ko-KR",
        }
    }

    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "en-US" => Some(Locale::EnUs),
            "zh-CN" => Some(Locale::ZhCn),
            "ja-JP" => Some(Locale::JaJp),
            "ko-KR" => Some(Locale::KoKr),
            _ => None,
        }
    }

    pub fn is_localized(self) -> bool {
        self != Locale::BASE
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// CONTENT NODES
// =============================================================================

/// One validated heading or paragraph from a crawled page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentNode {
    /// Page path, without anchor.
    pub url: String,
    pub tag: TagClass,
    pub text: String,
    /// The page's own title, supplied by the crawler.
    pub page_title: Option<String>,
    pub headings: HeadingChain,
    /// Document order within the page.
    pub sequence_id: u32,
}

impl ContentNode {
    /// Page title, treating an empty title as absent.
    pub fn page_title(&self) -> Option<&str> {
        self.page_title.as_deref().filter(|t| !t.is_empty())
    }
}

/// A node exactly as the crawler serialized it.
///
/// Every field is optional here, `null` included, so one broken node can be
/// reported and skipped instead of failing the whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNode {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub tag_name: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    /// Page title.
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub headings: HeadingChain,
    #[serde(default)]
    pub sequence_id: Option<u32>,
}

impl RawNode {
    /// Validate into a [`ContentNode`].
    ///
    /// `position` is the node's zero-based index in its document; it stands in
    /// for `sequenceId` when the crawler omitted one.
    pub fn into_node(self, position: usize) -> Result<ContentNode, NodeError> {
        let url = self
            .url
            .filter(|url| !url.is_empty())
            .ok_or(NodeError::MissingField { field: "url" })?;
        let tag_name = self
            .tag_name
            .ok_or(NodeError::MissingField { field: "tagName" })?;
        let tag = TagClass::parse(&tag_name).ok_or(NodeError::UnknownTag { tag: tag_name })?;
        // A heading without text has no title, a paragraph without text has
        // nothing to search
        let text = self
            .text
            .as_deref()
            .map(clean_text)
            .filter(|text| !text.is_empty())
            .ok_or(NodeError::MissingField { field: "text" })?;

        Ok(ContentNode {
            url,
            tag,
            text,
            page_title: self.title,
            headings: self.headings,
            sequence_id: self
                .sequence_id
                .unwrap_or_else(|| u32::try_from(position).unwrap_or(u32::MAX)),
        })
    }
}

/// Everything the crawler extracted from one source document, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawledDocument {
    /// Source path; documents are processed in ascending path order.
    pub path: String,
    #[serde(default)]
    pub nodes: Vec<RawNode>,
}

/// Trim a node's text and drop the trailing `" #"` permalink marker that
/// rendered headings carry.
pub fn clean_text(text: &str) -> String {
    let trimmed = text.trim();
    trimmed
        .strip_suffix(" #")
        .map(str::trim_end)
        .unwrap_or(trimmed)
        .to_string()
}

// =============================================================================
// SEARCH RECORDS
// =============================================================================

/// One searchable record, as handed to the search backend.
///
/// Serializes to exactly these twelve fields; identifiers such as an object ID
/// are the backend's business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRecord {
    /// Page URL, with `#anchor` of the nearest enclosing heading when one exists.
    pub url: String,
    pub locale: Locale,
    pub localized: bool,
    /// Site section, page title, then the open headings.
    pub hierarchy: Vec<String>,
    pub category: String,
    pub subcategory: String,
    pub display_title: String,
    /// Heading text; empty for paragraphs.
    pub title: String,
    /// Paragraph text; empty for headings.
    pub text: String,
    pub page_score: u8,
    /// 0 for paragraphs, 90 (h1) down to 40 (h6) for headings.
    pub weight_tag_name: u8,
    /// In-page order; -1 for synthetic page records.
    pub weight_order: i64,
}
