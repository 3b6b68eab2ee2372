mod app;
mod messages;
mod progress;
mod worker;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([440.0, 480.0])
            .with_min_inner_size([360.0, 420.0])
            .with_title("Deflicker"),
        ..Default::default()
    };

    eframe::run_native(
        "Deflicker",
        options,
        Box::new(|cc| Ok(Box::new(app::DeflickerApp::new(&cc.egui_ctx)))),
    )
}
