use crate::histogram::{Histogram, BUCKETS};
use crate::picture::Picture;

/// How the per-picture target histogram is derived from the sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReferenceMode {
    /// Every picture is matched toward the mean of the whole sequence.
    Global,
    /// Each picture is matched toward the mean of its neighbors within
    /// the given radius. Windows shrink at the sequence boundaries
    /// instead of wrapping or padding.
    Rolling(usize),
}

impl ReferenceMode {
    /// Map the configured window radius; below 1 selects global mode.
    pub fn from_radius(radius: u32) -> Self {
        if radius < 1 {
            Self::Global
        } else {
            Self::Rolling(radius as usize)
        }
    }
}

/// Fill in the target histogram of every picture in the sequence.
///
/// Must run only after every current histogram is available — this is the
/// barrier between the Analyze and Adjust stages.
pub fn assign_targets(pictures: &mut [Picture], mode: ReferenceMode) {
    let histograms: Vec<Histogram> = pictures.iter().map(|picture| picture.current).collect();
    let targets = build_targets(&histograms, mode);
    for (picture, target) in pictures.iter_mut().zip(targets) {
        picture.target = target;
    }
}

/// Target histograms for an ordered histogram sequence.
///
/// Pure function of the sequence: identical inputs give identical targets
/// no matter how extraction was scheduled.
pub fn build_targets(histograms: &[Histogram], mode: ReferenceMode) -> Vec<Histogram> {
    if histograms.is_empty() {
        return Vec::new();
    }
    match mode {
        ReferenceMode::Global => {
            let target = mean_histogram(histograms);
            vec![target; histograms.len()]
        }
        ReferenceMode::Rolling(radius) => {
            let last = histograms.len() - 1;
            (0..histograms.len())
                .map(|i| {
                    let start = i.saturating_sub(radius);
                    let end = (i + radius).min(last);
                    mean_histogram(&histograms[start..=end])
                })
                .collect()
        }
    }
}

/// Bucket-wise mean with truncating integer division.
///
/// Accumulates in u64 so long sequences cannot overflow the u32 counters.
fn mean_histogram(histograms: &[Histogram]) -> Histogram {
    let mut sums = [0u64; BUCKETS];
    for histogram in histograms {
        for (sum, &count) in sums.iter_mut().zip(&histogram.counts) {
            *sum += count as u64;
        }
    }
    let n = histograms.len() as u64;
    let mut mean = Histogram::zeroed();
    for (bucket, sum) in mean.counts.iter_mut().zip(sums) {
        *bucket = (sum / n) as u32;
    }
    mean
}
