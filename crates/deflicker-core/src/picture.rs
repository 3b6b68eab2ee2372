use std::path::PathBuf;

use crate::histogram::Histogram;

/// One frame of the sequence, tracked from discovery to the written output.
///
/// The current histogram is filled in by the Analyze stage and the target
/// by the Average stage; the Adjust stage consumes the record when it
/// writes the corrected file. Sequence position is fixed at discovery
/// time, since rolling-average windows depend on it.
#[derive(Clone, Debug)]
pub struct Picture {
    /// Where the frame is read from.
    pub source_path: PathBuf,
    /// Where the corrected frame is written; same file name as the source.
    pub target_path: PathBuf,
    /// Luminance distribution of the source frame.
    pub current: Histogram,
    /// Temporally smoothed distribution the frame is matched toward.
    pub target: Histogram,
}

impl Picture {
    pub fn new(source_path: PathBuf, target_path: PathBuf) -> Self {
        Self {
            source_path,
            target_path,
            current: Histogram::zeroed(),
            target: Histogram::zeroed(),
        }
    }
}
