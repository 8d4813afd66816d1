// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `manifest.json`: which crawl dump files make up a run.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::BuildError;

/// The only manifest format this build understands.
pub const MANIFEST_VERSION: u32 = 1;

/// File name of the manifest inside the input directory.
pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Deserialize, Clone, Debug)]
pub struct InputManifest {
    pub version: u32,
    /// Document files, relative to the input directory.
    pub documents: Vec<String>,
}

impl InputManifest {
    /// Read and validate `manifest.json` from `input_dir`.
    pub fn load(input_dir: &Path) -> Result<Self, BuildError> {
        let path = input_dir.join(MANIFEST_FILE);
        let content = fs::read_to_string(&path).map_err(|source| BuildError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let manifest: InputManifest =
            serde_json::from_str(&content).map_err(|source| BuildError::Json {
                path: path.display().to_string(),
                source,
            })?;
        manifest.validate()?;
        Ok(manifest)
    }

    pub fn validate(&self) -> Result<(), BuildError> {
        if self.version != MANIFEST_VERSION {
            return Err(BuildError::ManifestVersion {
                found: self.version,
                expected: MANIFEST_VERSION,
            });
        }
        Ok(())
    }
}
