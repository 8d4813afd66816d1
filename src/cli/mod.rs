// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the docsift command-line interface.
//!
//! Two subcommands: `extract` turns a crawl dump into a record file, and
//! `inspect` verifies and summarizes a record file that was already written.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "docsift",
    about = "Turn crawled documentation pages into search records",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract search records from a directory of crawled documents
    Extract {
        /// Input directory containing manifest.json and document files
        #[arg(short, long)]
        input: String,

        /// Output directory for the records-<hash>.json file
        #[arg(short, long)]
        output: String,

        /// Pretty-print the output JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Verify a records file and summarize its contents
    Inspect {
        /// Path to records JSON file
        file: String,

        /// Only check invariants, print no summary
        #[arg(long)]
        verify_only: bool,
    },
}
