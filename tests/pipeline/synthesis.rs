//! Tests for page record synthesis.

use docsift::synthesize::strip_anchor;
use docsift::{check_records, extract_nodes, synthesize_page_records, RecordExtractor};

use crate::common::{make_record, sample_site};

#[test]
fn test_two_groups_two_page_records() {
    let records = vec![
        make_record("Docs", "Hooks", "/docs/hooks.html#usestate", 1),
        make_record("Docs", "Hooks", "/docs/hooks.html#useeffect", 2),
        make_record("Docs", "Refs", "/docs/refs.html#callback-refs", 1),
        make_record("Docs", "Hooks", "/docs/hooks.html#rules", 3),
        make_record("Docs", "Refs", "/docs/refs.html", 2),
    ];
    let before = records.clone();
    let pages = synthesize_page_records(&records);

    assert_eq!(records, before, "existing records are untouched");
    assert_eq!(pages.len(), 2);
    assert!(pages.iter().all(|p| p.weight_order == -1));
    assert!(pages.iter().all(|p| p.weight_tag_name == 90));

    assert_eq!(pages[0].subcategory, "Hooks");
    assert_eq!(pages[0].title, "Hooks");
    assert_eq!(pages[0].display_title, "Go to Hooks");
    assert_eq!(pages[0].url, "/docs/hooks.html");
    assert!(pages[0].text.is_empty());
    assert_eq!(pages[1].subcategory, "Refs");
    assert_eq!(pages[1].url, "/docs/refs.html");
}

#[test]
fn test_page_record_copies_representative() {
    let mut first = make_record("Blog", "React v16", "/blog/2017/react-v16.html#new-features", 4);
    first.hierarchy.push("New Features".to_string());
    first.page_score = 0;
    let later = make_record("Blog", "React v16", "/blog/2017/react-v16.html#other", 9);

    let pages = synthesize_page_records(&[first.clone(), later]);
    assert_eq!(pages.len(), 1);
    let page = &pages[0];
    assert_eq!(page.hierarchy, first.hierarchy);
    assert_eq!(page.page_score, 0);
    assert_eq!(page.locale, first.locale);
    assert_eq!(page.url, "/blog/2017/react-v16.html");
}

#[test]
fn test_strip_anchor() {
    assert_eq!(strip_anchor("/docs/a.html#b"), "/docs/a.html");
    assert_eq!(strip_anchor("/docs/a.html"), "/docs/a.html");
    assert_eq!(strip_anchor("/docs/a.html#b#c"), "/docs/a.html");
}

#[test]
fn test_no_records_no_page_records() {
    assert!(synthesize_page_records(&[]).is_empty());
}

#[test]
fn test_page_records_appended_after_shaped_records() {
    let extraction = extract_nodes(&sample_site()).unwrap();
    let emitted = extraction.report.emitted;

    // (Docs, Hooks), (Docs, Refs), (Blog, Fresh post)
    assert_eq!(extraction.report.page_records, 3);
    assert_eq!(extraction.records.len(), emitted + 3);
    assert!(extraction.records[..emitted]
        .iter()
        .all(|r| r.weight_order >= 0));
    assert!(extraction.records[emitted..]
        .iter()
        .all(|r| r.weight_order == -1));

    let report = check_records(&extraction.records).unwrap();
    assert_eq!(report.groups, 3);
    assert_eq!(report.page_records, 3);
}

#[test]
fn test_records_visible_before_finalize() {
    let mut extractor = RecordExtractor::new();
    for node in &sample_site() {
        let _ = extractor.push(node);
    }
    let shaped = extractor.records().len();
    assert!(extractor.records().iter().all(|r| r.weight_order >= 0));

    let extraction = extractor.finalize().unwrap();
    assert_eq!(extraction.records.len(), shaped + 3);
}
