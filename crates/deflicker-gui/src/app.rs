use std::path::PathBuf;
use std::sync::mpsc;

use deflicker_core::pipeline::config::{DeflickerConfig, FailurePolicy};
use deflicker_core::pipeline::types::PipelineStage;
use deflicker_core::remap::RemapMode;

use crate::messages::{WorkerCommand, WorkerResult};
use crate::worker;

pub struct DeflickerApp {
    cmd_tx: mpsc::Sender<WorkerCommand>,
    result_rx: mpsc::Receiver<WorkerResult>,
    source: String,
    destination: String,
    rolling_average: u32,
    threads: usize,
    preserve_hue: bool,
    keep_going: bool,
    running: bool,
    progress: Option<(PipelineStage, usize, Option<usize>)>,
    status: Option<String>,
    error: Option<String>,
}

impl DeflickerApp {
    pub fn new(ctx: &egui::Context) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx, ctx.clone());

        Self {
            cmd_tx,
            result_rx,
            source: String::new(),
            destination: String::new(),
            rolling_average: 10,
            threads: num_cpus::get(),
            preserve_hue: false,
            keep_going: false,
            running: false,
            progress: None,
            status: None,
            error: None,
        }
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::Progress {
                    stage,
                    items_done,
                    items_total,
                } => {
                    self.progress = Some((stage, items_done, items_total));
                }
                WorkerResult::Finished { completed, skipped } => {
                    self.running = false;
                    self.progress = None;
                    self.status = Some(if skipped > 0 {
                        format!("{completed} pictures written, {skipped} skipped")
                    } else {
                        format!("{completed} pictures written")
                    });
                }
                WorkerResult::Error { message } => {
                    self.running = false;
                    self.progress = None;
                    self.error = Some(message);
                }
            }
        }
    }

    fn start_run(&mut self) {
        let mut config = DeflickerConfig::new(
            PathBuf::from(&self.source),
            PathBuf::from(&self.destination),
        );
        config.rolling_average = self.rolling_average;
        config.threads = self.threads.max(1);
        config.remap = if self.preserve_hue {
            RemapMode::Luminance
        } else {
            RemapMode::PerChannel
        };
        config.on_error = if self.keep_going {
            FailurePolicy::Skip
        } else {
            FailurePolicy::Abort
        };

        self.running = true;
        self.status = None;
        self.error = None;
        let _ = self.cmd_tx.send(WorkerCommand::Run { config });
    }

    fn browse_source(&mut self) {
        if let Some(directory) = rfd::FileDialog::new()
            .set_title("Select a source directory")
            .pick_folder()
        {
            self.source = directory.display().to_string();
            if self.destination.is_empty() {
                self.destination = directory.join("deflickered").display().to_string();
            }
        }
    }

    fn browse_destination(&mut self) {
        if let Some(directory) = rfd::FileDialog::new()
            .set_title("Select a destination directory")
            .pick_folder()
        {
            self.destination = directory.display().to_string();
        }
    }
}

impl eframe::App for DeflickerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Deflicker");
            ui.add_space(8.0);

            ui.label("Source directory");
            ui.horizontal(|ui| {
                ui.add(egui::TextEdit::singleline(&mut self.source).desired_width(300.0));
                if ui.button("Browse\u{2026}").clicked() {
                    self.browse_source();
                }
            });
            ui.add_space(4.0);

            ui.label("Destination directory");
            ui.horizontal(|ui| {
                ui.add(egui::TextEdit::singleline(&mut self.destination).desired_width(300.0));
                if ui.button("Browse\u{2026}").clicked() {
                    self.browse_destination();
                }
            });
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.label("Rolling average");
                ui.add(egui::DragValue::new(&mut self.rolling_average).range(0..=500));
                ui.label("frames (0 = whole sequence)");
            });
            ui.horizontal(|ui| {
                ui.label("Threads");
                ui.add(egui::DragValue::new(&mut self.threads).range(1..=256));
            });
            ui.checkbox(&mut self.preserve_hue, "Preserve hue (remap luminance only)");
            ui.checkbox(&mut self.keep_going, "Skip failing pictures");
            ui.add_space(12.0);

            let can_start =
                !self.running && !self.source.is_empty() && !self.destination.is_empty();
            if ui
                .add_enabled(can_start, egui::Button::new("Start"))
                .clicked()
            {
                self.start_run();
            }

            if let Some((stage, done, total)) = self.progress {
                ui.add_space(8.0);
                let bar = match total {
                    Some(total) if total > 0 => egui::ProgressBar::new(done as f32 / total as f32)
                        .text(format!("{stage}: {done}/{total}")),
                    _ => egui::ProgressBar::new(0.0).text(stage.to_string()),
                };
                ui.add(bar);
            }
            if let Some(ref status) = self.status {
                ui.add_space(8.0);
                ui.label(status);
            }
            if let Some(ref error) = self.error {
                ui.add_space(8.0);
                ui.colored_label(egui::Color32::RED, error);
            }
        });
    }
}
