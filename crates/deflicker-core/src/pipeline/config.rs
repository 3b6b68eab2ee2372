use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::remap::RemapMode;

/// Everything the engine needs for one run.
///
/// Front ends build this and hand it in; the core keeps no process-wide
/// state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeflickerConfig {
    /// Directory holding the input sequence.
    pub source: PathBuf,
    /// Directory the corrected frames are written into.
    pub destination: PathBuf,
    /// Rolling-average window radius in frames; 0 selects global mode.
    #[serde(default = "default_rolling_average")]
    pub rolling_average: u32,
    /// Worker count for the parallel stages.
    #[serde(default = "default_threads")]
    pub threads: usize,
    #[serde(default)]
    pub remap: RemapMode,
    #[serde(default)]
    pub on_error: FailurePolicy,
}

fn default_rolling_average() -> u32 {
    10
}

fn default_threads() -> usize {
    num_cpus::get()
}

impl DeflickerConfig {
    /// Config with the default knobs for the given directory pair.
    pub fn new(source: PathBuf, destination: PathBuf) -> Self {
        Self {
            source,
            destination,
            rolling_average: default_rolling_average(),
            threads: default_threads(),
            remap: RemapMode::default(),
            on_error: FailurePolicy::default(),
        }
    }
}

/// What to do when one picture fails to decode or save.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Abort the whole run on the first failure.
    #[default]
    Abort,
    /// Drop the failing picture, keep going, and report it in the
    /// run summary.
    Skip,
}
