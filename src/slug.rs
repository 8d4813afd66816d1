// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Heading anchors, byte-for-byte compatible with Redcarpet's `header_anchor`.
//!
//! The site's markdown renderer generates heading ids with Redcarpet, so record
//! URLs must use the exact same algorithm or `#anchor` links land nowhere. The
//! algorithm works on bytes, not characters:
//!
//! ```text
//! '<' ... '>'      skipped (inline HTML such as <code>)
//! '&' ... ';'      skipped (entities)
//! non-ASCII byte   ┐
//! STRIPPED byte    ┘ collapse into a single '-', only after some output
//! anything else    lower-cased and kept
//! ```
//!
//! A trailing dash is dropped. If nothing survives, the anchor falls back to
//! `part-<djb2 hash in hex>` of the raw input.
//!
//! # References
//!
//! - Redcarpet `ext/redcarpet/html.c`, `rndr_header_anchor`

/// Bytes that never appear in an anchor.
const STRIPPED: &[u8] = b" -&+$,/:;=?@\"#{}|^~[]`\\*()%.!'";

/// Initial value of the djb2 hash.
const DJB2_SEED: u64 = 5381;

/// Generate the anchor id for a heading's text.
pub fn anchor_slug(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(bytes.len());
    let mut stripped = false;
    let mut inserted = 0usize;

    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b == b'<' {
            while i < bytes.len() && bytes[i] != b'>' {
                i += 1;
            }
        } else if b == b'&' {
            while i < bytes.len() && bytes[i] != b';' {
                i += 1;
            }
        } else if !b.is_ascii() || STRIPPED.contains(&b) {
            if inserted > 0 && !stripped {
                out.push('-');
            }
            stripped = true;
        } else {
            out.push(char::from(b.to_ascii_lowercase()));
            stripped = false;
            inserted += 1;
        }
        i += 1;
    }

    if stripped && inserted > 0 {
        out.pop();
    }

    if inserted == 0 && !bytes.is_empty() {
        return format!("part-{:x}", djb2(bytes));
    }

    out
}

fn djb2(bytes: &[u8]) -> u64 {
    bytes.iter().fold(DJB2_SEED, |hash, &b| {
        hash.wrapping_mul(33).wrapping_add(u64::from(b))
    })
}
