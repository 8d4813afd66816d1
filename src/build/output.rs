// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Writing the record list to disk.
//!
//! The output file is named after a CRC32 of its bytes
//! (`records-1a2b3c4d.json`). Identical input produces identical bytes, so a
//! re-run lands on the same file name and deploy caches stay warm.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::BuildError;
use crate::sink::RecordSink;
use crate::types::SearchRecord;

/// Serialize records as a JSON array.
pub fn encode_records(records: &[SearchRecord], pretty: bool) -> Result<Vec<u8>, BuildError> {
    let mut bytes = if pretty {
        serde_json::to_vec_pretty(records)
    } else {
        serde_json::to_vec(records)
    }
    .map_err(BuildError::Serialize)?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Content-hashed file name for encoded records.
pub fn records_filename(bytes: &[u8]) -> String {
    format!("records-{:08x}.json", crc32fast::hash(bytes))
}

/// Sink writing a content-hashed JSON file into a directory.
#[derive(Debug)]
pub struct JsonDirSink {
    dir: PathBuf,
    pretty: bool,
    written: Option<PathBuf>,
}

impl JsonDirSink {
    pub fn new(dir: impl Into<PathBuf>, pretty: bool) -> Self {
        Self {
            dir: dir.into(),
            pretty,
            written: None,
        }
    }

    /// Path of the last file written, if any.
    pub fn written(&self) -> Option<&Path> {
        self.written.as_deref()
    }
}

impl RecordSink for JsonDirSink {
    type Error = BuildError;

    fn submit(&mut self, records: &[SearchRecord]) -> Result<(), BuildError> {
        let bytes = encode_records(records, self.pretty)?;

        fs::create_dir_all(&self.dir).map_err(|source| BuildError::Write {
            path: self.dir.display().to_string(),
            source,
        })?;

        let path = self.dir.join(records_filename(&bytes));
        fs::write(&path, &bytes).map_err(|source| BuildError::Write {
            path: path.display().to_string(),
            source,
        })?;

        self.written = Some(path);
        Ok(())
    }
}
