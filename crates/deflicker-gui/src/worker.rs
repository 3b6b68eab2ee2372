use std::sync::mpsc;
use std::sync::Arc;
use std::thread;

use deflicker_core::io::discover::discover_pictures;
use deflicker_core::pipeline::orchestrator::run_reported;
use tracing::error;

use crate::messages::{WorkerCommand, WorkerResult};
use crate::progress::ChannelProgressReporter;

/// Spawn the worker thread; returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    thread::spawn(move || {
        while let Ok(command) = cmd_rx.recv() {
            match command {
                WorkerCommand::Run { config } => {
                    let reporter = Arc::new(ChannelProgressReporter::new(
                        result_tx.clone(),
                        ctx.clone(),
                    ));
                    let outcome = discover_pictures(&config.source, &config.destination)
                        .and_then(|pictures| run_reported(pictures, &config, reporter));
                    let result = match outcome {
                        Ok(summary) => WorkerResult::Finished {
                            completed: summary.completed,
                            skipped: summary.skipped.len(),
                        },
                        Err(e) => {
                            error!(%e, "deflicker run failed");
                            WorkerResult::Error {
                                message: e.to_string(),
                            }
                        }
                    };
                    let _ = result_tx.send(result);
                    ctx.request_repaint();
                }
            }
        }
    });

    cmd_tx
}
