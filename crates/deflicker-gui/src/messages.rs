use deflicker_core::pipeline::config::DeflickerConfig;
use deflicker_core::pipeline::types::PipelineStage;

/// Commands sent from the UI thread to the worker thread.
pub enum WorkerCommand {
    /// Discover the sequence and run the full pipeline.
    Run { config: DeflickerConfig },
}

/// Results sent from the worker thread back to the UI thread.
pub enum WorkerResult {
    /// Progress update during a pipeline stage.
    Progress {
        stage: PipelineStage,
        items_done: usize,
        items_total: Option<usize>,
    },

    /// Run finished; counts of written and skipped pictures.
    Finished { completed: usize, skipped: usize },

    Error { message: String },
}
