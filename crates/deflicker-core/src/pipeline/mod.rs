pub mod config;
pub mod orchestrator;
pub mod types;

pub use config::{DeflickerConfig, FailurePolicy};
pub use orchestrator::{run, run_reported};
pub use types::{PipelineStage, ProgressReporter, RunSummary};
