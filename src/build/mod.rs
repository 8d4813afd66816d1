// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The `docsift extract` workflow: crawl dump directory in, record file out.
//!
//! ```text
//! input/manifest.json ─▶ load documents ─▶ extract ─▶ verify ─▶ output/records-<crc>.json
//! ```

pub mod document;
pub mod manifest;
pub mod output;
pub mod parallel;

use std::path::{Path, PathBuf};

#[cfg(feature = "parallel")]
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use tracing::info;

use crate::error::BuildError;
use crate::extract::{extract_documents, ExtractReport};
use crate::sink::RecordSink;
use crate::verify::VerificationReport;

pub use document::*;
pub use manifest::*;
pub use output::*;
pub use parallel::*;

/// Toggles for an extraction build.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExtractOptions {
    /// Pretty-print the output JSON.
    pub pretty: bool,
}

/// What a finished build produced.
#[derive(Debug)]
pub struct BuildSummary {
    pub documents: usize,
    pub report: ExtractReport,
    pub verification: VerificationReport,
    /// The record file written.
    pub output: PathBuf,
}

/// Create a progress style for the main progress bars
#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("━━╸")
}

pub fn run_extract(
    input_dir: &str,
    output_dir: &str,
    options: ExtractOptions,
) -> Result<BuildSummary, BuildError> {
    let input_path = Path::new(input_dir);
    let output_path = Path::new(output_dir);

    // 1. Read manifest
    let manifest = InputManifest::load(input_path)?;
    info!(documents = manifest.documents.len(), "manifest loaded");

    // 2. Load documents with progress bar
    #[cfg(feature = "parallel")]
    let multi = MultiProgress::new();
    #[cfg(feature = "parallel")]
    let load_pb = multi.add(ProgressBar::new(manifest.documents.len() as u64));
    #[cfg(feature = "parallel")]
    {
        load_pb.set_style(create_progress_style());
        load_pb.set_prefix("Loading");
        load_pb.set_message("documents...");
    }

    let documents = parallel::load_documents_with_progress(
        input_path,
        &manifest,
        #[cfg(feature = "parallel")]
        &load_pb,
    )?;

    #[cfg(feature = "parallel")]
    load_pb.finish_with_message(format!("loaded {} documents", documents.len()));

    let document_count = documents.len();

    // 3. Extract: shape every document, then synthesize page records
    let extraction = extract_documents(documents)?;

    // 4. Verify and write
    let mut sink = JsonDirSink::new(output_path, options.pretty);
    let verification = extraction.submit_to(&mut sink)?;
    let output = sink
        .written()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| output_path.to_path_buf());
    eprintln!("  ✓ {}", output.display());

    let report = extraction.report;
    eprintln!();
    eprintln!("✅ Extraction complete");
    eprintln!(
        "   {} documents │ {} nodes │ {} records │ {} page records │ {} skipped",
        document_count,
        report.nodes,
        report.emitted,
        report.page_records,
        report.skipped()
    );
    if report.malformed > 0 {
        eprintln!("⚠️  {} malformed nodes skipped", report.malformed);
    }

    Ok(BuildSummary {
        documents: document_count,
        report,
        verification,
        output,
    })
}
