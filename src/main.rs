// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use docsift::build::{run_extract, ExtractOptions};
use docsift::inspect::{load_records, RecordStats};
use docsift::verify::check_records;

mod cli;
use cli::{display, Cli, Commands};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            input,
            output,
            pretty,
        } => run_extract(&input, &output, ExtractOptions { pretty })
            .map(|_| ())
            .with_context(|| format!("extracting records from {}", input)),
        Commands::Inspect { file, verify_only } => inspect_records_file(&file, verify_only),
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Load, verify and summarize a records file.
fn inspect_records_file(file: &str, verify_only: bool) -> Result<()> {
    let records = load_records(Path::new(file))?;

    let report = match check_records(&records) {
        Ok(report) => report,
        Err(e) => {
            display::print_rejected(file, &e);
            anyhow::bail!("{} failed verification", file);
        }
    };

    if verify_only {
        println!(
            "✓ {} ({} records, {} page records)",
            file, report.records, report.page_records
        );
        return Ok(());
    }

    let stats = RecordStats::from_records(&records);
    display::print_inspect(file, &stats, &report);
    Ok(())
}
