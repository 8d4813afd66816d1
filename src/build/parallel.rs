// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parallel document loading.
//!
//! Reading and parsing crawl dump files is the slow part of a run and every
//! file is independent, so with the `parallel` feature it is a `par_iter()`
//! over the manifest. Results are sorted by document path afterwards, which
//! is the order the extractor relies on for reproducible output.

use std::path::Path;
#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicUsize, Ordering};

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::BuildError;
use crate::types::CrawledDocument;

use super::{load_document, InputManifest};

fn sort_by_path(mut docs: Vec<CrawledDocument>) -> Vec<CrawledDocument> {
    docs.sort_by(|a, b| a.path.cmp(&b.path));
    docs
}

/// Load every document listed in the manifest, sorted by path.
///
/// The first unreadable or invalid file fails the load.
pub fn load_documents(
    input_dir: &Path,
    manifest: &InputManifest,
) -> Result<Vec<CrawledDocument>, BuildError> {
    #[cfg(feature = "parallel")]
    let iter = manifest.documents.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = manifest.documents.iter();

    iter.map(|filename| load_document(&input_dir.join(filename)))
        .collect::<Result<Vec<_>, _>>()
        .map(sort_by_path)
}

/// Load all documents in parallel with progress reporting.
#[cfg(feature = "parallel")]
pub fn load_documents_with_progress(
    input_dir: &Path,
    manifest: &InputManifest,
    progress: &ProgressBar,
) -> Result<Vec<CrawledDocument>, BuildError> {
    let counter = AtomicUsize::new(0);
    let total = manifest.documents.len();

    let docs = manifest
        .documents
        .par_iter()
        .map(|filename| {
            let doc = load_document(&input_dir.join(filename))?;

            let count = counter.fetch_add(1, Ordering::Relaxed) + 1;
            progress.set_position(count as u64);
            if count % 10 == 0 || count == total {
                progress.set_message(format!("{}/{}", count, total));
            }

            Ok(doc)
        })
        .collect::<Result<Vec<_>, BuildError>>()?;

    Ok(sort_by_path(docs))
}

/// Non-parallel fallback (no progress bar).
#[cfg(not(feature = "parallel"))]
pub fn load_documents_with_progress(
    input_dir: &Path,
    manifest: &InputManifest,
) -> Result<Vec<CrawledDocument>, BuildError> {
    load_documents(input_dir, manifest)
}
