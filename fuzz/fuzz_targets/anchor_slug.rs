#![no_main]

use docsift::anchor_slug;
use libfuzzer_sys::fuzz_target;

/// Fuzz target for heading anchors.
///
/// Anchors are URL fragments, so for any heading text:
/// - the slug is ASCII with no upper-case letters
/// - dashes never lead, trail or repeat
/// - non-empty input never yields an empty anchor
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let slug = anchor_slug(text);

    if text.is_empty() {
        assert!(slug.is_empty());
        return;
    }
    assert!(!slug.is_empty());
    assert!(slug.is_ascii());
    assert!(!slug.bytes().any(|b| b.is_ascii_uppercase()));
    assert!(!slug.starts_with('-') && !slug.ends_with('-'));
    assert!(!slug.contains("--"));
});
