// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the application structure that implements the
//! egui::App trait. It loads images in the background, uploads them as
//! textures, and routes user actions from the form to the controller.

use crate::controller::MemeController;
use crate::io::media::{self, LoadedImage, IMAGE_EXTENSIONS};
use crate::ui::{canvas, controls};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};

/// Main application state.
pub struct MemeApp {
    controller: MemeController,

    /// Texture of the active image
    image_texture: Option<egui::TextureHandle>,

    /// Receiver for background image loading
    image_loader: Option<Receiver<Result<LoadedImage, String>>>,

    /// Loading state message
    loading_message: Option<String>,
}

impl MemeApp {
    /// Create the application around a configured controller.
    pub fn new(controller: MemeController) -> Self {
        Self {
            controller,
            image_texture: None,
            image_loader: None,
            loading_message: None,
        }
    }

    /// Ask for an image file and start loading it.
    fn open_image_dialog(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", IMAGE_EXTENSIONS)
            .pick_file()
        {
            self.load_image_file(path);
        }
    }

    /// Decode an image file on a background thread.
    pub fn load_image_file(&mut self, path: PathBuf) {
        let (sender, receiver) = channel();
        self.image_loader = Some(receiver);
        self.loading_message = Some("Loading image...".to_string());

        std::thread::spawn(move || {
            let result = media::load_image(&path).map_err(|e| format!("{:#}", e));
            if let Ok(ref loaded) = result {
                log::info!("Decoded image: {} ({}x{})", path.display(), loaded.width, loaded.height);
            }
            let _ = sender.send(result);
        });
    }

    /// Upload a decoded image and redraw the canvas with it.
    fn finish_image_load(&mut self, ctx: &egui::Context, loaded: LoadedImage) {
        if let Err(e) = self.controller.image_loaded(loaded.dimensions()) {
            log::error!("Cannot render image: {}", e);
            return;
        }

        let size = [loaded.width as usize, loaded.height as usize];
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &loaded.pixels);
        self.image_texture = Some(ctx.load_texture(
            "meme_image",
            color_image,
            egui::TextureOptions::LINEAR,
        ));
    }

    fn poll_image_loader(&mut self, ctx: &egui::Context) {
        let Some(ref receiver) = self.image_loader else {
            return;
        };
        let Ok(result) = receiver.try_recv() else {
            return;
        };
        self.image_loader = None;
        self.loading_message = None;

        match result {
            Ok(loaded) => self.finish_image_load(ctx, loaded),
            Err(e) => log::error!("Failed to load image: {}", e),
        }
    }

    fn handle_controls(&mut self, action: controls::ControlsAction) {
        use controls::ControlsAction;

        match action {
            ControlsAction::OpenImage => self.open_image_dialog(),
            ControlsAction::Generate => {
                if let Err(e) = self.controller.submit_captions() {
                    log::error!("Cannot render captions: {}", e);
                }
            }
            ControlsAction::Clear => self.controller.clear(),
            ControlsAction::ReadAloud => {
                if let Err(e) = self.controller.read_aloud() {
                    log::warn!("Speech failed: {:#}", e);
                }
            }
            ControlsAction::SelectVoice(index) => self.controller.select_voice(index),
            ControlsAction::SetVolume(level) => self.controller.set_volume(level),
            ControlsAction::None => {}
        }
    }
}

impl eframe::App for MemeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_image_loader(ctx);

        // Request repaint if still loading (to update spinner)
        if self.loading_message.is_some() {
            ctx.request_repaint();
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Image...").clicked() {
                        self.open_image_dialog();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        // Caption form (left side)
        let controls_action = egui::SidePanel::left("controls")
            .default_width(280.0)
            .show(ctx, |ui| controls::show(ui, &mut self.controller))
            .inner;
        self.handle_controls(controls_action);

        // Canvas (center)
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(ref message) = self.loading_message {
                ui.centered_and_justified(|ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(20.0);
                        ui.spinner();
                        ui.add_space(10.0);
                        ui.label(
                            egui::RichText::new(message)
                                .size(16.0)
                                .color(egui::Color32::from_gray(200)),
                        );
                    });
                });
            } else {
                canvas::show(
                    ui,
                    self.controller.scene(),
                    self.image_texture.as_ref(),
                    self.controller.canvas(),
                );
            }
        });
    }
}
