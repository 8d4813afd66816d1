//! Tests for hierarchy paths, anchors and locale detection.

use docsift::hierarchy::anchor;
use docsift::HeadingLevel::{H1, H2, H3, H4, H6};
use docsift::{anchor_slug, build_hierarchy, build_url, derive_locale, Locale};

use crate::common::{heading_node, paragraph_node, with_headings};

#[test]
fn test_hierarchy_root_title_headings() {
    let node = with_headings(
        paragraph_node("/docs/hooks.html", Some("Hooks"), "text"),
        &[(H1, "Introducing Hooks"), (H3, "Rules")],
    );
    assert_eq!(
        build_hierarchy(&node),
        vec!["Docs", "Hooks", "Introducing Hooks", "Rules"]
    );
}

#[test]
fn test_hierarchy_without_root_label() {
    let node = paragraph_node("/community/support.html", Some("Support"), "text");
    assert_eq!(build_hierarchy(&node), vec!["Support"]);
}

#[test]
fn test_hierarchy_skips_empty_title_and_headings() {
    let node = with_headings(
        paragraph_node("/tips/props.html", Some(""), "text"),
        &[(H1, ""), (H2, "Props in getInitialState")],
    );
    assert_eq!(build_hierarchy(&node), vec!["Tips", "Props in getInitialState"]);
}

#[test]
fn test_anchor_uses_deepest_heading() {
    let node = with_headings(
        paragraph_node("/docs/hooks.html", Some("Hooks"), "text"),
        &[(H1, "Hooks"), (H3, "useState")],
    );
    assert_eq!(anchor(&node).as_deref(), Some("usestate"));
    assert_eq!(build_url(&node), "/docs/hooks.html#usestate");
}

#[test]
fn test_anchor_for_malformed_chain() {
    let node = with_headings(
        paragraph_node("/docs/a.html", Some("A"), "text"),
        &[(H4, "Only Four")],
    );
    assert_eq!(build_url(&node), "/docs/a.html#only-four");

    let node = with_headings(
        paragraph_node("/docs/a.html", Some("A"), "text"),
        &[(H1, "Top"), (H6, "")],
    );
    assert_eq!(build_url(&node), "/docs/a.html#top");
}

#[test]
fn test_no_heading_no_anchor() {
    let node = paragraph_node("/docs/a.html", Some("A"), "text");
    assert_eq!(anchor(&node), None);
    assert_eq!(build_url(&node), "/docs/a.html");
}

#[test]
fn test_heading_node_anchors_to_itself() {
    let node = heading_node("/docs/refs.html", Some("Refs"), H2, "Callback Refs");
    assert_eq!(build_url(&node), "/docs/refs.html#callback-refs");
}

#[test]
fn test_anchor_slugs_match_rendered_ids() {
    assert_eq!(anchor_slug("Using the State Hook"), "using-the-state-hook");
    assert_eq!(anchor_slug("What's a Hook?"), "what-s-a-hook");
    assert_eq!(anchor_slug("<code>useEffect</code> Hook"), "useeffect-hook");
    assert_eq!(anchor_slug("Tips &amp; Tricks"), "tips-tricks");
    assert_eq!(anchor_slug("  leading"), "leading");
}

#[test]
fn test_locale_detection() {
    let ko = derive_locale("/docs/hooks-ko-KR.html");
    assert_eq!(ko, Locale::KoKr);
    assert!(ko.is_localized());

    let en = derive_locale("/docs/hooks.html");
    assert_eq!(en, Locale::EnUs);
    assert!(!en.is_localized());

    assert_eq!(derive_locale("/docs/hooks-zh-CN.html"), Locale::ZhCn);
    assert_eq!(derive_locale("/docs/hooks-ja-JP.html"), Locale::JaJp);
}

#[test]
fn test_unrecognized_locale_falls_back() {
    assert_eq!(derive_locale("/docs/hooks-fr-FR.html"), Locale::EnUs);
    assert_eq!(derive_locale("/docs/hooks-zh-CNxhtml"), Locale::EnUs);
    assert_eq!(derive_locale("/docs/hooks-zh-CN.html#anchor"), Locale::ZhCn);
}
