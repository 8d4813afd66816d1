//! Tests for reproducible output and sink handover.

use docsift::build::encode_records;
use docsift::HeadingLevel::{H1, H3};
use docsift::{
    extract_documents, CrawledDocument, InvariantError, MemorySink, PipelineError, RecordSink,
};

use crate::common::{make_record, raw_node};

fn documents() -> Vec<CrawledDocument> {
    vec![
        CrawledDocument {
            path: "tips/props.md".to_string(),
            nodes: vec![
                raw_node("/tips/props.html", "h1", "Props", "Props", &[(H1, "Props")], 0),
                raw_node("/tips/props.html", "p", "Pass data down.", "Props", &[(H1, "Props")], 1),
            ],
        },
        CrawledDocument {
            path: "docs/hooks.md".to_string(),
            nodes: vec![
                raw_node("/docs/hooks.html", "h1", "Hooks", "Hooks", &[(H1, "Hooks")], 0),
                raw_node(
                    "/docs/hooks.html",
                    "h3",
                    "useState",
                    "Hooks",
                    &[(H1, "Hooks"), (H3, "useState")],
                    1,
                ),
            ],
        },
        CrawledDocument {
            path: "docs/refs-ko-KR.md".to_string(),
            nodes: vec![raw_node("/docs/refs-ko-KR.html", "p", "참조", "Refs", &[], 0)],
        },
    ]
}

#[test]
fn test_identical_input_identical_bytes() {
    let first = extract_documents(documents()).unwrap();
    let second = extract_documents(documents()).unwrap();

    assert_eq!(
        encode_records(&first.records, false).unwrap(),
        encode_records(&second.records, false).unwrap()
    );
    assert_eq!(first.report, second.report);
}

#[test]
fn test_document_order_does_not_matter() {
    let mut reversed = documents();
    reversed.reverse();

    let a = extract_documents(documents()).unwrap();
    let b = extract_documents(reversed).unwrap();
    assert_eq!(a.records, b.records);

    // Ascending path order: docs/hooks.md, docs/refs-ko-KR.md, tips/props.md
    let subcategories: Vec<&str> = a.records.iter().map(|r| r.subcategory.as_str()).collect();
    assert_eq!(
        subcategories,
        vec!["Hooks", "Hooks", "Refs", "Props", "Props", "Hooks", "Refs", "Props"]
    );
}

#[test]
fn test_anchor_from_deepest_heading_end_to_end() {
    let extraction = extract_documents(documents()).unwrap();
    assert_eq!(extraction.records[1].url, "/docs/hooks.html#usestate");
    assert_eq!(extraction.records[1].weight_tag_name, 70);
}

#[test]
fn test_memory_sink_receives_verified_records() {
    let extraction = extract_documents(documents()).unwrap();
    let mut sink = MemorySink::new();

    let report = extraction.submit_to(&mut sink).unwrap();
    assert_eq!(report.records, extraction.records.len());
    assert_eq!(report.groups, 3);
    assert_eq!(sink.records, extraction.records);
}

#[test]
fn test_sink_rejects_list_without_page_records() {
    let mut sink = MemorySink::new();
    let records = vec![make_record("Docs", "Hooks", "/docs/hooks.html#a", 0)];

    match sink.accept(&records) {
        Err(PipelineError::Rejected(InvariantError::MissingPageRecord {
            category,
            subcategory,
        })) => {
            assert_eq!(category, "Docs");
            assert_eq!(subcategory, "Hooks");
        }
        other => panic!("expected rejection, got {:?}", other),
    }
    assert!(sink.records.is_empty());
}
