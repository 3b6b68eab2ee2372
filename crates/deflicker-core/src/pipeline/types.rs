use std::path::PathBuf;

use crate::error::DeflickerError;

/// Pipeline processing stage, used for progress reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineStage {
    /// Decode every picture and extract its luminance histogram.
    Analyze,
    /// Reduce the histogram sequence into per-picture targets.
    Average,
    /// Synthesize LUTs, remap pixels and write the corrected files.
    Adjust,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Analyze => write!(f, "Analyzing histograms"),
            Self::Average => write!(f, "Averaging references"),
            Self::Adjust => write!(f, "Adjusting pictures"),
        }
    }
}

/// Thread-safe progress reporting for the pipeline.
///
/// Implementors can use this to drive progress bars, logging, or any other
/// UI feedback. All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    /// A new pipeline stage has started. `total_items` is the number of
    /// work items in this stage (the picture count), if known.
    fn begin_stage(&self, _stage: PipelineStage, _total_items: Option<usize>) {}

    /// One work item within the current stage has completed.
    fn advance(&self, _items_done: usize) {}

    /// The current stage is finished.
    fn finish_stage(&self) {}
}

/// No-op progress reporter, used when `run` delegates.
pub(super) struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}

/// Outcome of a pipeline run.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Pictures whose corrected output was written.
    pub completed: usize,
    /// Pictures dropped under `FailurePolicy::Skip`, with the failure
    /// that removed each one.
    pub skipped: Vec<(PathBuf, DeflickerError)>,
}
