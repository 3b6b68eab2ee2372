use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use rayon::prelude::*;
use tracing::{info, warn};

use crate::error::{DeflickerError, Result};
use crate::histogram::Histogram;
use crate::io::image_io::{load_image, save_image};
use crate::lut::Lut;
use crate::picture::Picture;
use crate::reference::{assign_targets, ReferenceMode};
use crate::remap::apply_lut;

use super::config::{DeflickerConfig, FailurePolicy};
use super::types::{NoOpReporter, PipelineStage, ProgressReporter, RunSummary};

/// Run the three-stage pipeline with a thread-safe progress reporter.
///
/// Analyze and Adjust fan out over a worker pool bounded by the
/// configured thread count; Average runs single-threaded between them and
/// only starts once every histogram is in — the barrier the rolling
/// windows depend on. Each worker writes only to the picture at its own
/// sequence index, so the sequence itself needs no lock.
pub fn run_reported(
    mut pictures: Vec<Picture>,
    config: &DeflickerConfig,
    reporter: Arc<dyn ProgressReporter>,
) -> Result<RunSummary> {
    let threads = config.threads.max(1);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()?;
    let mut summary = RunSummary::default();

    info!(
        pictures = pictures.len(),
        threads,
        rolling_average = config.rolling_average,
        "starting deflicker run"
    );

    // Stage 1: extract a histogram per picture.
    run_parallel_stage(
        &pool,
        PipelineStage::Analyze,
        &mut pictures,
        config.on_error,
        &reporter,
        &mut summary,
        |picture| {
            let image = load_image(&picture.source_path)?;
            picture.current = Histogram::from_image(&image);
            Ok(())
        },
    )?;

    // Stage 2: single-threaded reduction over the full sequence.
    reporter.begin_stage(PipelineStage::Average, None);
    assign_targets(
        &mut pictures,
        ReferenceMode::from_radius(config.rolling_average),
    );
    reporter.finish_stage();

    // Stage 3: match, remap and write every picture.
    let remap = config.remap;
    run_parallel_stage(
        &pool,
        PipelineStage::Adjust,
        &mut pictures,
        config.on_error,
        &reporter,
        &mut summary,
        move |picture| {
            let image = load_image(&picture.source_path)?;
            let lut = Lut::matching(&picture.current, &picture.target);
            let corrected = apply_lut(&image, &lut, remap);
            save_image(&corrected, &picture.target_path)
        },
    )?;

    summary.completed = pictures.len();
    info!(
        completed = summary.completed,
        skipped = summary.skipped.len(),
        "deflicker run finished"
    );
    Ok(summary)
}

/// Run the full pipeline without progress reporting.
pub fn run(pictures: Vec<Picture>, config: &DeflickerConfig) -> Result<RunSummary> {
    run_reported(pictures, config, Arc::new(NoOpReporter))
}

/// Map `op` over every picture on the worker pool.
///
/// The shared progress counter is atomic; everything else is a disjoint
/// per-index write. Under `Abort` the first failure cancels the stage;
/// under `Skip` failing pictures are removed from the sequence (order
/// preserved) and recorded in the summary.
fn run_parallel_stage<F>(
    pool: &rayon::ThreadPool,
    stage: PipelineStage,
    pictures: &mut Vec<Picture>,
    policy: FailurePolicy,
    reporter: &Arc<dyn ProgressReporter>,
    summary: &mut RunSummary,
    op: F,
) -> Result<()>
where
    F: Fn(&mut Picture) -> Result<()> + Send + Sync,
{
    reporter.begin_stage(stage, Some(pictures.len()));
    let done = AtomicUsize::new(0);
    let track = |result: Result<()>| {
        let completed = done.fetch_add(1, Ordering::Relaxed) + 1;
        reporter.advance(completed);
        result
    };

    match policy {
        FailurePolicy::Abort => {
            pool.install(|| {
                pictures
                    .par_iter_mut()
                    .try_for_each(|picture| track(op(picture)))
            })?;
        }
        FailurePolicy::Skip => {
            let failures: Vec<Option<DeflickerError>> = pool.install(|| {
                pictures
                    .par_iter_mut()
                    .map(|picture| track(op(picture)).err())
                    .collect()
            });
            for (picture, failure) in std::mem::take(pictures).into_iter().zip(failures) {
                match failure {
                    None => pictures.push(picture),
                    Some(error) => {
                        warn!(
                            path = %picture.source_path.display(),
                            %error,
                            "skipping picture"
                        );
                        summary.skipped.push((picture.source_path, error));
                    }
                }
            }
        }
    }
    reporter.finish_stage();
    Ok(())
}
