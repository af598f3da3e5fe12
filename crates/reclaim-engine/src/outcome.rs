//! Per-artifact outcomes and the run summary they reduce into.
//!
//! Every directory entry produces exactly one [`ArtifactOutcome`]; the batch
//! runner logs each outcome and folds them into a [`RunSummary`]. No outcome
//! ever aborts the batch.

use std::fmt;

use reclaim_range::AddressRange;
use reclaim_types::AttachmentId;

use crate::error::EngineError;

/// Why an entry was skipped without being read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// The file name does not follow the artifact naming convention.
    NameMismatch,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NameMismatch => write!(f, "name does not match the artifact convention"),
        }
    }
}

/// The pipeline stage at which an artifact failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureStage {
    /// The file could not be read.
    Read,
    /// Content was not a valid result document, or carried no address.
    Decode,
    /// CIDR parsing or boundary computation failed.
    Range,
    /// The store rejected or could not complete the reservation.
    Reserve,
}

impl fmt::Display for FailureStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailureStage::Read => "read",
            FailureStage::Decode => "decode",
            FailureStage::Range => "range",
            FailureStage::Reserve => "reserve",
        };
        write!(f, "{name}")
    }
}

/// The result of processing a single directory entry.
#[derive(Debug)]
pub enum ArtifactOutcome {
    /// A reservation was replayed for this artifact.
    Reserved {
        file: String,
        owner: AttachmentId,
        /// The reserved address in string form.
        address: String,
        /// The reconstructed range context.
        range: AddressRange,
    },
    /// The entry was not an artifact; it was never read.
    Skipped { file: String, reason: SkipReason },
    /// The artifact failed at one stage; the batch continued.
    Failed {
        file: String,
        stage: FailureStage,
        error: EngineError,
    },
}

/// Aggregate counts for a whole run.
///
/// Any mix of skips and failures still completes the run; callers map a
/// summary to exit code 0. Only a directory-listing failure, surfaced as an
/// error before any summary exists, is fatal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub reserved: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl RunSummary {
    /// Fold one outcome into the counts.
    pub fn record(&mut self, outcome: &ArtifactOutcome) {
        match outcome {
            ArtifactOutcome::Reserved { .. } => self.reserved += 1,
            ArtifactOutcome::Skipped { .. } => self.skipped += 1,
            ArtifactOutcome::Failed { .. } => self.failed += 1,
        }
    }

    /// Total entries processed.
    pub fn total(&self) -> usize {
        self.reserved + self.skipped + self.failed
    }
}
