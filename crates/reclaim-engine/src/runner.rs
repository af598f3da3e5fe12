//! The batch runner: enumerate a results directory and drive the pipeline.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use reclaim_range::RangeBounder;
use reclaim_store::Reserver;

use crate::error::{EngineError, EngineResult};
use crate::matcher::ArtifactMatcher;
use crate::outcome::{ArtifactOutcome, FailureStage, RunSummary, SkipReason};
use crate::pipeline::ReservationPipeline;

/// Drives one recovery pass over a directory of result artifacts.
///
/// Processing is strictly sequential: one entry is fully matched, read,
/// decoded, range-derived and reserved before the next is considered. There
/// is no retry anywhere; re-running the whole pass is the retry mechanism,
/// made safe by the store's owner-keyed idempotency.
pub struct BatchRunner<'a> {
    matcher: ArtifactMatcher,
    pipeline: ReservationPipeline<'a>,
}

impl<'a> BatchRunner<'a> {
    pub fn new(
        matcher: ArtifactMatcher,
        bounder: &'a dyn RangeBounder,
        reserver: &'a dyn Reserver,
        kubeconfig: PathBuf,
    ) -> Self {
        Self {
            matcher,
            pipeline: ReservationPipeline::new(bounder, reserver, kubeconfig),
        }
    }

    /// Process every entry of `dir`, sorted by file name.
    ///
    /// A missing directory means "nothing to migrate" and yields an empty
    /// summary. Any other listing failure is the run's single fatal error.
    pub fn run(&self, dir: &Path) -> EngineResult<RunSummary> {
        let read_dir = match fs::read_dir(dir) {
            Ok(read_dir) => read_dir,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(dir = %dir.display(), "results directory absent; nothing to migrate");
                return Ok(RunSummary::default());
            }
            Err(e) => {
                return Err(EngineError::ListDir {
                    path: dir.to_path_buf(),
                    source: e,
                })
            }
        };

        let mut entries: Vec<PathBuf> = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| EngineError::ListDir {
                path: dir.to_path_buf(),
                source: e,
            })?;
            entries.push(entry.path());
        }
        // OS enumeration order is unspecified; sort for reproducible logs.
        entries.sort();

        Ok(self.run_entries(&entries))
    }

    /// Process an explicit list of files, in the order given.
    ///
    /// Per-artifact failures are contained in their outcomes; this never
    /// fails as a whole.
    pub fn run_entries(&self, files: &[PathBuf]) -> RunSummary {
        let mut summary = RunSummary::default();
        for path in files {
            let outcome = self.process_entry(path);
            log_outcome(&outcome);
            summary.record(&outcome);
        }
        info!(
            reserved = summary.reserved,
            skipped = summary.skipped,
            failed = summary.failed,
            "recovery pass complete"
        );
        summary
    }

    /// Match, read, and pipeline a single entry. Non-matching entries are
    /// never read.
    fn process_entry(&self, path: &Path) -> ArtifactOutcome {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let Some(owner) = self.matcher.attachment_id(&name) else {
            return ArtifactOutcome::Skipped {
                file: name,
                reason: SkipReason::NameMismatch,
            };
        };

        match fs::read(path) {
            Ok(contents) => self.pipeline.process(&name, owner, &contents),
            Err(e) => ArtifactOutcome::Failed {
                file: name,
                stage: FailureStage::Read,
                error: e.into(),
            },
        }
    }
}

fn log_outcome(outcome: &ArtifactOutcome) {
    match outcome {
        ArtifactOutcome::Reserved {
            file,
            owner,
            address,
            range,
        } => {
            debug!(file = %file, owner = %owner, address = %address, range = %range.cidr, "reservation replayed");
        }
        ArtifactOutcome::Skipped { file, reason } => {
            debug!(file = %file, %reason, "skipping entry");
        }
        ArtifactOutcome::Failed { file, stage, error } => {
            error!(file = %file, %stage, %error, "artifact failed; continuing");
        }
    }
}
