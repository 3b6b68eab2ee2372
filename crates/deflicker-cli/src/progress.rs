use std::sync::Mutex;

use deflicker_core::pipeline::types::{PipelineStage, ProgressReporter};
use indicatif::{ProgressBar, ProgressStyle};

/// Renders each pipeline stage as an indicatif bar.
pub struct BarReporter {
    style: ProgressStyle,
    current: Mutex<Option<ProgressBar>>,
}

impl BarReporter {
    pub fn new() -> Self {
        let style = ProgressStyle::default_bar()
            .template("{msg:22} [{bar:40}] {pos}/{len}")
            .expect("static progress template")
            .progress_chars("=> ");
        Self {
            style,
            current: Mutex::new(None),
        }
    }
}

impl ProgressReporter for BarReporter {
    fn begin_stage(&self, stage: PipelineStage, total_items: Option<usize>) {
        let bar = match total_items {
            Some(total) => {
                let bar = ProgressBar::new(total as u64);
                bar.set_style(self.style.clone());
                bar
            }
            None => ProgressBar::new_spinner(),
        };
        bar.set_message(stage.to_string());
        *self.current.lock().unwrap() = Some(bar);
    }

    fn advance(&self, items_done: usize) {
        if let Some(bar) = self.current.lock().unwrap().as_ref() {
            bar.set_position(items_done as u64);
        }
    }

    fn finish_stage(&self) {
        if let Some(bar) = self.current.lock().unwrap().take() {
            bar.finish();
        }
    }
}
