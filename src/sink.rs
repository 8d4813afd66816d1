// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where finalized records go.
//!
//! The search backend consumes the record list wholesale; a sink is the seam
//! in front of it. [`RecordSink::accept`] verifies the list before handing it
//! over, so an invalid payload is rejected here rather than by the backend.

use crate::error::PipelineError;
use crate::extract::Extraction;
use crate::types::SearchRecord;
use crate::verify::{check_records, VerificationReport};

/// Receiver of a finalized record list.
pub trait RecordSink {
    type Error: From<PipelineError>;

    /// Hand over records that already passed verification.
    fn submit(&mut self, records: &[SearchRecord]) -> Result<(), Self::Error>;

    /// Verify, then submit.
    fn accept(&mut self, records: &[SearchRecord]) -> Result<VerificationReport, Self::Error> {
        let report = check_records(records).map_err(PipelineError::from)?;
        self.submit(records)?;
        Ok(report)
    }
}

/// Collects records in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub records: Vec<SearchRecord>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordSink for MemorySink {
    type Error = PipelineError;

    fn submit(&mut self, records: &[SearchRecord]) -> Result<(), PipelineError> {
        self.records.extend_from_slice(records);
        Ok(())
    }
}

impl Extraction {
    /// Send the records to `sink`, verifying them first.
    pub fn submit_to<S: RecordSink>(&self, sink: &mut S) -> Result<VerificationReport, S::Error> {
        sink.accept(&self.records)
    }
}
