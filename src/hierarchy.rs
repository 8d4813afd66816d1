// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where a node sits in the site: its hierarchy path, anchored URL and locale.
//!
//! The hierarchy is the ordered path a reader would follow to reach the node:
//!
//! ```text
//! /docs/hooks-reference.html, title "Hooks API", h1 "Hooks API", h3 "useState"
//!   → ["Docs", "Hooks API", "Hooks API", "useState"]
//!      └root┘  └─ page ──┘  └──── open headings ───┘
//! ```
//!
//! The first two elements double as the category and subcategory of the
//! record, and as the grouping key for synthetic page records.

use std::sync::LazyLock;

use regex::Regex;

use crate::slug::anchor_slug;
use crate::types::{ContentNode, Locale};

/// `...-zh-CN.html`, `...-ja-JP.html`, `...-ko-KR.html`. The greedy prefix
/// makes the last suffix win.
static LOCALE_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r".*-(zh-CN|ja-JP|ko-KR)\.html").expect("locale pattern is valid")
});

/// Top-level section of the site, derived from the URL prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SiteSection {
    Docs,
    Tips,
    Blog,
    Other,
}

/// `(prefix, section)` pairs, checked top-down.
const SECTION_PREFIXES: [(&str, SiteSection); 3] = [
    ("/blog/", SiteSection::Blog),
    ("/tips/", SiteSection::Tips),
    ("/docs/", SiteSection::Docs),
];

impl SiteSection {
    pub fn from_url(url: &str) -> Self {
        SECTION_PREFIXES
            .iter()
            .find(|(prefix, _)| url.starts_with(prefix))
            .map_or(SiteSection::Other, |&(_, section)| section)
    }

    /// Root label prepended to the hierarchy, if the section has one.
    pub fn label(self) -> Option<&'static str> {
        match self {
            SiteSection::Docs => Some("Docs"),
            SiteSection::Tips => Some("Tips"),
            SiteSection::Blog => Some("Blog"),
            SiteSection::Other => None,
        }
    }

    /// Importance of the section. Reference docs first, blog posts last.
    pub fn page_score(self) -> u8 {
        match self {
            SiteSection::Docs => 3,
            SiteSection::Tips => 2,
            SiteSection::Other => 1,
            SiteSection::Blog => 0,
        }
    }
}

/// Ordered path of section titles for a node.
///
/// Root label (if any), then the page title (if known), then every non-empty
/// heading from h1 to h6. May come out shorter than two elements; the shaper
/// drops those nodes.
pub fn build_hierarchy(node: &ContentNode) -> Vec<String> {
    let mut hierarchy = Vec::with_capacity(8);

    if let Some(label) = SiteSection::from_url(&node.url).label() {
        hierarchy.push(label.to_string());
    }
    if let Some(title) = node.page_title() {
        hierarchy.push(title.to_string());
    }
    hierarchy.extend(node.headings.iter().map(|(_, text)| text.to_string()));

    hierarchy
}

/// Anchor of the most specific open heading (h6 first), if any.
///
/// A paragraph links to its nearest enclosing heading, a heading to itself
/// when the crawler includes it in its own chain.
pub fn anchor(node: &ContentNode) -> Option<String> {
    node.headings
        .deepest()
        .map(|(_, text)| anchor_slug(text))
}

/// The node's URL with `#anchor` appended when it has an enclosing heading.
pub fn build_url(node: &ContentNode) -> String {
    match anchor(node) {
        Some(anchor) => format!("{}#{}", node.url, anchor),
        None => node.url.clone(),
    }
}

/// Locale from the page's URL suffix, falling back to [`Locale::BASE`].
pub fn derive_locale(url: &str) -> Locale {
    LOCALE_SUFFIX
        .captures(url)
        .and_then(|caps| caps.get(1))
        .and_then(|tag| Locale::parse(tag.as_str()))
        .unwrap_or(Locale::BASE)
}
