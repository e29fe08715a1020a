mod app;
mod assets;
mod color;
mod config;
mod data;
mod state;
mod ui;

use anyhow::{anyhow, Result};
use app::DashboardApp;
use config::DashboardConfig;
use eframe::egui;
use state::AppState;

fn main() -> Result<()> {
    env_logger::init();

    let config = DashboardConfig::default();

    // The data file is required: failing here ends the process.
    let dataset = data::cache::load_dataset(&config.data_file, &config.columns).map_err(|e| {
        log::error!("Failed to load dataset: {e:#}");
        e
    })?;
    let logo = assets::load_logo(&config.logo_file);
    let state = AppState::new(dataset, config.default_entities.clone(), logo);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.inner_size)
            .with_min_inner_size(config.min_inner_size),
        ..Default::default()
    };

    let title = config.window_title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            // Install image loaders so egui can render the png logo.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(DashboardApp::new(state, &config)))
        }),
    )
    .map_err(|e| anyhow!("eframe: {e}"))
}
