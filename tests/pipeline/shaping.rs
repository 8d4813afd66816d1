//! Tests for record shaping and ranking weights.

use docsift::shape::page_score;
use docsift::HeadingLevel::{self, H1, H2, H3, H6};
use docsift::{
    display_title, extract_nodes, shape_node, weight_tag_name, SearchRecord, Skip, TagClass,
};

use crate::common::{heading_node, paragraph_node, sample_site, with_headings, with_sequence};

fn path(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_short_hierarchy_emits_nothing() {
    let node = paragraph_node("/docs/overview.html", None, "An overview");
    assert_eq!(shape_node(&node), Err(Skip::HierarchyTooShort));

    let extraction = extract_nodes([&node]).unwrap();
    assert!(extraction.records.is_empty());
    assert_eq!(extraction.report.too_short, 1);
}

#[test]
fn test_heading_and_paragraph_fields_are_exclusive() {
    let extraction = extract_nodes(&sample_site()).unwrap();
    let shaped = &extraction.records[..extraction.report.emitted];

    for record in shaped {
        if record.weight_tag_name > 0 {
            assert!(!record.title.is_empty(), "{:?}", record);
            assert!(record.text.is_empty(), "{:?}", record);
        } else {
            assert!(record.title.is_empty(), "{:?}", record);
            assert!(!record.text.is_empty(), "{:?}", record);
        }
    }
}

#[test]
fn test_tag_weights() {
    assert_eq!(weight_tag_name(TagClass::Heading(H1)), 90);
    assert_eq!(weight_tag_name(TagClass::Heading(H3)), 70);
    assert_eq!(weight_tag_name(TagClass::Heading(H6)), 40);
    assert_eq!(weight_tag_name(TagClass::Paragraph), 0);

    let weights: Vec<u8> = HeadingLevel::ALL
        .iter()
        .map(|&level| weight_tag_name(TagClass::Heading(level)))
        .collect();
    assert!(weights.windows(2).all(|w| w[0] > w[1]), "{:?}", weights);
}

#[test]
fn test_page_scores() {
    assert_eq!(page_score("/docs/x"), 3);
    assert_eq!(page_score("/tips/x"), 2);
    assert_eq!(page_score("/blog/x"), 0);
    assert_eq!(page_score("/other/x"), 1);
}

#[test]
fn test_display_titles() {
    assert_eq!(display_title(&path(&["Docs", "Hooks"])), "Go to Hooks");
    assert_eq!(display_title(&path(&["Docs", "Hooks", "Intro"])), "Intro");
    assert_eq!(
        display_title(&path(&["Docs", "Hooks", "Intro", "Rules", "useState"])),
        "Intro › useState"
    );
    assert_eq!(
        display_title(&path(&["Docs", "Hooks", "Intro", "Intro"])),
        "Intro"
    );
}

#[test]
fn test_weight_order_is_sequence_id() {
    let node = with_sequence(
        with_headings(
            paragraph_node("/docs/hooks.html", Some("Hooks"), "text"),
            &[(H1, "Hooks")],
        ),
        42,
    );
    assert_eq!(shape_node(&node).unwrap().weight_order, 42);
}

#[test]
fn test_shaped_heading_record() {
    let node = with_sequence(
        with_headings(
            heading_node("/tips/props.html", Some("Props"), H2, "Default Props"),
            &[(H1, "Props in State"), (H2, "Default Props")],
        ),
        7,
    );
    let record = shape_node(&node).unwrap();
    let expected = SearchRecord {
        url: "/tips/props.html#default-props".to_string(),
        locale: docsift::Locale::EnUs,
        localized: false,
        hierarchy: path(&["Tips", "Props", "Props in State", "Default Props"]),
        category: "Tips".to_string(),
        subcategory: "Props".to_string(),
        display_title: "Props in State › Default Props".to_string(),
        title: "Default Props".to_string(),
        text: String::new(),
        page_score: 2,
        weight_tag_name: 80,
        weight_order: 7,
    };
    assert_eq!(record, expected);
}

#[test]
fn test_record_serializes_exact_fields() {
    let node = paragraph_node("/docs/hooks-ja-JP.html", Some("フック"), "テキスト");
    let record = shape_node(&node).unwrap();
    let value = serde_json::to_value(&record).unwrap();

    let mut keys: Vec<&str> = value
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec![
            "category",
            "displayTitle",
            "hierarchy",
            "locale",
            "localized",
            "pageScore",
            "subcategory",
            "text",
            "title",
            "url",
            "weightOrder",
            "weightTagName"
        ]
    );
    assert_eq!(value["locale"], "ja-JP");
    assert_eq!(value["localized"], true);
}
