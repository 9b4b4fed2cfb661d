//! # Multitouch Frontend
//!
//! A desktop surface for the stroke tracker. Touch events from the window are turned
//! into pointer events, fed through the tracker, and the resulting strokes are painted
//! every frame: wide while a finger is down, narrower once it lifts. A cancelled touch
//! (e.g. the platform stole the gesture) makes its stroke disappear entirely.
//!
use anyhow::{anyhow, Result};
use clap::Parser;

use env_logger::Env;
use log::debug;
use model::Model;
use multitouch_strokes::config::load_config_from_file;

mod cli;
mod model;
mod surface_input;
mod ui;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize the logger from the environment

    env_logger::Builder::from_env(Env::default().default_filter_or(&cli.log_level))
        .filter_module("winit", log::LevelFilter::Warn)
        .filter_module("eframe", log::LevelFilter::Warn)
        .init();

    debug!("Started; args: {:?}", cli);

    let config = load_config_from_file(&cli.config_path)?;
    let model = Model::new(&cli, config)?;

    let options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(1280.0, 960.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Multitouch Strokes",
        options,
        Box::new(|_cc| Box::new(model)),
    )
    .map_err(|e| anyhow!("Failed to run frontend: {}", e))
}
