// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Meme Generator
//!
//! A cross-platform desktop application that overlays caption text on an
//! image and reads the captions aloud with a platform voice.

mod app;
mod controller;
mod io;
mod models;
mod render;
mod speech;
mod ui;
mod util;

use anyhow::Result;
use app::MemeApp;
use controller::MemeController;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let config = io::config::config_from_env()?;
    let (registry, speech) = speech::default_backends();
    let canvas = config.canvas();
    let controller = MemeController::new(config, registry, speech);

    // Leave room for the form next to the canvas
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([canvas.width as f32 + 340.0, canvas.height as f32 + 80.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Meme Generator"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Meme Generator",
        options,
        Box::new(|_cc| Ok(Box::new(MemeApp::new(controller)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
