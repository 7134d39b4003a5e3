mod app;
mod ui;

use eframe::NativeOptions;
use seismograph_core::SeismographConfig;
use tracing_subscriber::{fmt, EnvFilter};

use crate::app::SeismographApp;

fn main() -> eframe::Result<()> {
    init_logging();

    let config = SeismographConfig::default();
    let native_options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Seismograph")
            .with_inner_size([config.window_width as f32, config.window_height as f32])
            .with_resizable(false),
        ..NativeOptions::default()
    };
    eframe::run_native(
        "Seismograph",
        native_options,
        Box::new(move |cc| Ok(Box::new(SeismographApp::new(cc, config)))),
    )
}

fn init_logging() {
    fmt()
        .with_env_filter(EnvFilter::new("warn,seismograph=debug,seismograph_core=info"))
        .with_target(false)
        .init();
}
