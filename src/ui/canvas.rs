// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Drawing canvas for the meme.
//!
//! This module provides the fixed-size canvas area. The controller's
//! recorded [`Scene`] is replayed onto an egui painter every frame.

use crate::models::dimensions::{Dimensions, FitResult};
use crate::render::{DrawingSurface, Scene};

/// [`DrawingSurface`] backed by an egui painter clipped to the canvas.
pub struct PainterSurface<'a> {
    painter: egui::Painter,
    origin: egui::Pos2,
    texture: Option<&'a egui::TextureHandle>,
    blank: egui::Color32,
}

impl<'a> PainterSurface<'a> {
    pub fn new(
        painter: egui::Painter,
        canvas_rect: egui::Rect,
        texture: Option<&'a egui::TextureHandle>,
        blank: egui::Color32,
    ) -> Self {
        Self {
            painter: painter.with_clip_rect(canvas_rect),
            origin: canvas_rect.min,
            texture,
            blank,
        }
    }

    fn rect(&self, x: f64, y: f64, width: f64, height: f64) -> egui::Rect {
        egui::Rect::from_min_size(
            self.origin + egui::vec2(x as f32, y as f32),
            egui::vec2(width as f32, height as f32),
        )
    }
}

fn color(rgb: [u8; 3]) -> egui::Color32 {
    egui::Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

impl DrawingSurface for PainterSurface<'_> {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.painter.rect_filled(self.rect(x, y, width, height), 0.0, self.blank);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, rgb: [u8; 3]) {
        self.painter.rect_filled(self.rect(x, y, width, height), 0.0, color(rgb));
    }

    fn draw_image(&mut self, placement: FitResult) {
        let Some(texture) = self.texture else {
            log::debug!("Scene draws an image but no texture is loaded");
            return;
        };
        let rect = self.rect(placement.start_x, placement.start_y, placement.width, placement.height);
        self.painter.image(
            texture.id(),
            rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, size: f32, rgb: [u8; 3]) {
        if text.is_empty() {
            return;
        }
        self.painter.text(
            self.origin + egui::vec2(x as f32, y as f32),
            egui::Align2::CENTER_BOTTOM,
            text,
            egui::FontId::proportional(size),
            color(rgb),
        );
    }
}

/// Display the canvas and paint the scene into it.
pub fn show(
    ui: &mut egui::Ui,
    scene: &Scene,
    texture: Option<&egui::TextureHandle>,
    canvas: Dimensions,
) {
    let size = egui::vec2(canvas.width as f32, canvas.height as f32);
    let blank = egui::Color32::from_gray(40);

    ui.vertical_centered(|ui| {
        let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
        let canvas_rect = response.rect;

        // Blank canvas underneath whatever the scene draws
        painter.rect_filled(canvas_rect, 0.0, blank);

        let mut surface = PainterSurface::new(painter, canvas_rect, texture, blank);
        scene.replay(&mut surface);

        if scene.is_blank() {
            ui.painter().text(
                canvas_rect.center(),
                egui::Align2::CENTER_CENTER,
                "Open an image, then write your captions",
                egui::FontId::proportional(14.0),
                egui::Color32::from_gray(150),
            );
        }
    });
}
