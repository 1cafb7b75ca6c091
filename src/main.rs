mod app;
mod canvas;
mod config;
mod error;
mod grid;
mod paint;
mod sketchpad;
mod ui;

use std::path::PathBuf;

use app::SketchpadApp;
use config::SketchpadConfig;
use log::warn;

fn load_config() -> SketchpadConfig {
    let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        return SketchpadConfig::default();
    };
    match SketchpadConfig::load(&path) {
        Ok(config) => config,
        Err(err) => {
            warn!("{}; using defaults", err);
            SketchpadConfig::default()
        }
    }
}

fn main() -> eframe::Result<()> {
    env_logger::init();
    let config = load_config();

    let native_options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(900.0, 640.0)),
        min_window_size: Some(egui::vec2(config.container_size + 320.0, config.container_size + 80.0)),
        ..Default::default()
    };

    eframe::run_native(
        "Pixel Sketchpad",
        native_options,
        Box::new(move |cc| Box::new(SketchpadApp::new(cc, config))),
    )
}
