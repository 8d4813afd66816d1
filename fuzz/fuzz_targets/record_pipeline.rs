#![no_main]

use arbitrary::Arbitrary;
use docsift::{
    check_records, extract_documents, CrawledDocument, HeadingChain, HeadingLevel, PipelineError,
    RawNode,
};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct FuzzNode {
    url: Option<String>,
    tag_name: Option<String>,
    text: Option<String>,
    title: Option<String>,
    headings: Vec<(u8, String)>,
    sequence_id: Option<u32>,
}

#[derive(Arbitrary, Debug)]
struct FuzzDocument {
    path: String,
    nodes: Vec<FuzzNode>,
}

impl From<FuzzNode> for RawNode {
    fn from(node: FuzzNode) -> Self {
        let headings = node
            .headings
            .into_iter()
            .fold(HeadingChain::new(), |chain, (n, text)| {
                match HeadingLevel::from_number(n % 7) {
                    Some(level) => chain.with(level, text),
                    None => chain,
                }
            });
        RawNode {
            url: node.url,
            tag_name: node.tag_name,
            text: node.text,
            title: node.title,
            headings,
            sequence_id: node.sequence_id,
        }
    }
}

/// Fuzz target for the whole extraction pipeline.
///
/// Whatever the crawler hands over:
/// - extraction never panics
/// - the only possible error is an empty crawl
/// - the finalized record list always passes verification
fuzz_target!(|docs: Vec<FuzzDocument>| {
    let total: usize = docs.iter().map(|d| d.nodes.len()).sum();
    let crawl: Vec<CrawledDocument> = docs
        .into_iter()
        .map(|d| CrawledDocument {
            path: d.path,
            nodes: d.nodes.into_iter().map(RawNode::from).collect(),
        })
        .collect();

    match extract_documents(crawl) {
        Ok(extraction) => {
            assert!(total > 0);
            assert_eq!(extraction.report.nodes, total);
            if let Err(e) = check_records(&extraction.records) {
                panic!("verifier rejected pipeline output: {}", e);
            }
        }
        Err(PipelineError::EmptyCrawl) => assert_eq!(total, 0),
        Err(e) => panic!("unexpected pipeline error: {}", e),
    }
});
