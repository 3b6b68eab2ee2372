use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::sync::Mutex;

use deflicker_core::pipeline::types::{PipelineStage, ProgressReporter};

use crate::messages::WorkerResult;

/// Progress reporter that sends updates over an mpsc channel to the UI
/// thread.
pub struct ChannelProgressReporter {
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
    current_stage: Mutex<PipelineStage>,
    current_total: AtomicUsize,
}

impl ChannelProgressReporter {
    pub fn new(tx: mpsc::Sender<WorkerResult>, ctx: egui::Context) -> Self {
        Self {
            tx,
            ctx,
            current_stage: Mutex::new(PipelineStage::Analyze),
            current_total: AtomicUsize::new(0),
        }
    }
}

impl ProgressReporter for ChannelProgressReporter {
    fn begin_stage(&self, stage: PipelineStage, total_items: Option<usize>) {
        *self.current_stage.lock().unwrap() = stage;
        self.current_total
            .store(total_items.unwrap_or(0), Ordering::Relaxed);
        let _ = self.tx.send(WorkerResult::Progress {
            stage,
            items_done: 0,
            items_total: total_items,
        });
        self.ctx.request_repaint();
    }

    fn advance(&self, items_done: usize) {
        let stage = *self.current_stage.lock().unwrap();
        let total = self.current_total.load(Ordering::Relaxed);
        let _ = self.tx.send(WorkerResult::Progress {
            stage,
            items_done,
            items_total: (total > 0).then_some(total),
        });
        self.ctx.request_repaint();
    }

    fn finish_stage(&self) {
        // The UI handles stage transitions via the next begin_stage or
        // the final Finished message.
    }
}
