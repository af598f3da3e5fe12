//! The reservation-recovery engine for `reclaim`.
//!
//! Ties the pieces together: [`ArtifactMatcher`] decides which files are
//! result artifacts and extracts their attachment id, [`decode_result`]
//! parses artifact content, [`ReservationPipeline`] derives the range context
//! and replays one reservation per artifact, and [`BatchRunner`] walks a
//! results directory producing one [`ArtifactOutcome`] per entry.
//!
//! Failure containment is the defining property: every per-artifact error is
//! captured in its outcome and the batch continues. The only fatal condition
//! is a results directory that exists but cannot be listed.

pub mod decoder;
pub mod error;
pub mod matcher;
pub mod outcome;
pub mod pipeline;
pub mod runner;

pub use decoder::decode_result;
pub use error::{EngineError, EngineResult};
pub use matcher::{ArtifactMatcher, DEFAULT_PREFIX};
pub use outcome::{ArtifactOutcome, FailureStage, RunSummary, SkipReason};
pub use pipeline::ReservationPipeline;
pub use runner::BatchRunner;
