mod app;
mod config;
mod data;
mod icon;
mod map;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use app::SeismapApp;
use clap::Parser;
use config::ViewerConfig;
use eframe::egui;

/// Interactive map of seismic stations with network and timeline filters.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Station CSV to load (defaults to stations.csv)
    stations: Option<PathBuf>,

    /// JSON viewer configuration
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ViewerConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ViewerConfig::default(),
    };
    if let Some(stations) = args.stations {
        config.stations_path = stations;
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Seismap – Station Viewer",
        options,
        Box::new(|cc| {
            // Install image loaders so egui can fetch and render the
            // receiver function previews.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(SeismapApp::new(config)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("viewer failed: {e}"))
}
