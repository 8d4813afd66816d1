// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Which crawled nodes never become records.
//!
//! Some pages only repeat content that lives elsewhere: the root index, the
//! community round-up posts that link out to other articles, and the blog's
//! pagination pages. Nodes from those pages are dropped before shaping.
//!
//! The rules live in one ordered table, [`EXCLUSION_RULES`]. Evaluation is
//! top-down and the first match wins, so the order decides which reason a
//! node is reported under.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::types::ContentNode;

/// Blog pagination pages: `/blog/page2/`, `/blog/page17/index.html`, ...
static BLOG_PAGINATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/blog/page\d+/").expect("pagination pattern is valid"));

/// Marker in the title of aggregator posts.
pub const ROUND_UP_MARKER: &str = "Community Round-up";

/// Why a node was excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExclusionReason {
    /// The site root has no distinguishing content
    RootIndex,
    /// Round-up posts duplicate the pages they link to
    CommunityRoundUp,
    /// Blog listing pages repeat post excerpts
    BlogPagination,
}

impl ExclusionReason {
    pub fn as_str(self) -> &'static str {
        match self {
            ExclusionReason::RootIndex => "root index",
            ExclusionReason::CommunityRoundUp => "community round-up",
            ExclusionReason::BlogPagination => "blog pagination",
        }
    }
}

impl fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single `(predicate, outcome)` pair of the exclusion table.
#[derive(Clone, Copy)]
pub struct ExclusionRule {
    pub reason: ExclusionReason,
    pub matches: fn(&ContentNode) -> bool,
}

impl fmt::Debug for ExclusionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExclusionRule")
            .field("reason", &self.reason)
            .finish_non_exhaustive()
    }
}

/// Exclusion rules in evaluation order.
pub const EXCLUSION_RULES: [ExclusionRule; 3] = [
    ExclusionRule {
        reason: ExclusionReason::RootIndex,
        matches: is_root_index,
    },
    ExclusionRule {
        reason: ExclusionReason::CommunityRoundUp,
        matches: is_round_up,
    },
    ExclusionRule {
        reason: ExclusionReason::BlogPagination,
        matches: is_blog_pagination,
    },
];

fn is_root_index(node: &ContentNode) -> bool {
    node.url == "/index.html"
}

fn is_round_up(node: &ContentNode) -> bool {
    node.page_title()
        .is_some_and(|title| title.contains(ROUND_UP_MARKER))
}

fn is_blog_pagination(node: &ContentNode) -> bool {
    BLOG_PAGINATION.is_match(&node.url)
}

/// First matching exclusion rule, or `None` when the node is kept.
pub fn classify(node: &ContentNode) -> Option<ExclusionReason> {
    EXCLUSION_RULES
        .iter()
        .find(|rule| (rule.matches)(node))
        .map(|rule| rule.reason)
}

/// Should this node be dropped?
pub fn should_exclude(node: &ContentNode) -> bool {
    classify(node).is_some()
}
