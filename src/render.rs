// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Meme composition.
//!
//! This module draws the letterboxed image and the two captions onto any
//! [`DrawingSurface`]. The editor records the drawing into a [`Scene`]
//! once per render and replays it onto the egui painter every frame, so
//! the canvas only changes when the user loads an image, submits the
//! captions or clears.

use crate::models::caption::Captions;
use crate::models::dimensions::{Dimensions, FitResult};
use crate::util::geometry::{fit_dimensions, FitError};

/// Errors raised while composing a meme.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum RenderError {
    #[error("no image has been loaded")]
    NoActiveImage,
    #[error(transparent)]
    InvalidDimension(#[from] FitError),
}

/// Caption font and layout settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font_size: f32,
    pub color: [u8; 3],
    /// Letterbox fill behind the image.
    pub background: [u8; 3],
    pub top_y: f64,
    pub bottom_margin: f64,
}

/// Target of drawing calls, in canvas coordinates.
pub trait DrawingSurface {
    /// Reset the whole canvas to blank.
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: [u8; 3]);

    /// Draw the active image into `placement`.
    fn draw_image(&mut self, placement: FitResult);

    /// Draw `text` horizontally centered on `x` with its baseline at `y`.
    fn fill_text(&mut self, text: &str, x: f64, y: f64, size: f32, color: [u8; 3]);
}

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { x: f64, y: f64, width: f64, height: f64 },
    FillRect { x: f64, y: f64, width: f64, height: f64, color: [u8; 3] },
    Image(FitResult),
    Text { text: String, x: f64, y: f64, size: f32, color: [u8; 3] },
}

/// A recorded list of drawing calls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_blank(&self) -> bool {
        self.commands
            .iter()
            .all(|c| matches!(c, DrawCommand::Clear { .. }))
    }

    /// Placement of the image, if the scene draws one.
    #[cfg(test)]
    pub fn image_placement(&self) -> Option<FitResult> {
        self.commands.iter().find_map(|c| match c {
            DrawCommand::Image(fit) => Some(*fit),
            _ => None,
        })
    }

    /// Re-issue every recorded call on `surface`.
    pub fn replay(&self, surface: &mut impl DrawingSurface) {
        for command in &self.commands {
            match command {
                DrawCommand::Clear { x, y, width, height } => {
                    surface.clear_rect(*x, *y, *width, *height)
                }
                DrawCommand::FillRect { x, y, width, height, color } => {
                    surface.fill_rect(*x, *y, *width, *height, *color)
                }
                DrawCommand::Image(fit) => surface.draw_image(*fit),
                DrawCommand::Text { text, x, y, size, color } => {
                    surface.fill_text(text, *x, *y, *size, *color)
                }
            }
        }
    }
}

impl DrawingSurface for Scene {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        // A clear hides everything drawn before it
        self.commands.clear();
        self.commands.push(DrawCommand::Clear { x, y, width, height });
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: [u8; 3]) {
        self.commands.push(DrawCommand::FillRect { x, y, width, height, color });
    }

    fn draw_image(&mut self, placement: FitResult) {
        self.commands.push(DrawCommand::Image(placement));
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, size: f32, color: [u8; 3]) {
        self.commands.push(DrawCommand::Text { text: text.to_string(), x, y, size, color });
    }
}

/// Placement of the active image, or `NoActiveImage` when there is none.
pub fn fit_active_image(
    canvas: Dimensions,
    image: Option<Dimensions>,
) -> Result<FitResult, RenderError> {
    let image = image.ok_or(RenderError::NoActiveImage)?;
    Ok(fit_dimensions(canvas, image)?)
}

/// Draw the meme onto `surface`.
///
/// Without an image the captions are drawn on a blank canvas. Invalid
/// canvas or image sizes are returned as errors before anything is drawn.
pub fn render_meme(
    surface: &mut impl DrawingSurface,
    canvas: Dimensions,
    image: Option<Dimensions>,
    captions: &Captions,
    style: &TextStyle,
) -> Result<(), RenderError> {
    let placement = match fit_active_image(canvas, image) {
        Ok(fit) => Some(fit),
        Err(RenderError::NoActiveImage) => {
            log::debug!("No active image, rendering captions only");
            None
        }
        Err(e) => return Err(e),
    };

    surface.clear_rect(0.0, 0.0, canvas.width, canvas.height);

    if let Some(fit) = placement {
        if !fit.contains_within(canvas, 1e-6) {
            log::debug!("Image overflows the canvas at {:?}", fit);
        }
        surface.fill_rect(0.0, 0.0, canvas.width, canvas.height, style.background);
        surface.draw_image(fit);
    }

    let center_x = canvas.width / 2.0;
    surface.fill_text(&captions.top, center_x, style.top_y, style.font_size, style.color);
    surface.fill_text(
        &captions.bottom,
        center_x,
        canvas.height - style.bottom_margin,
        style.font_size,
        style.color,
    );

    Ok(())
}

/// Blank the canvas.
pub fn clear_canvas(surface: &mut impl DrawingSurface, canvas: Dimensions) {
    surface.clear_rect(0.0, 0.0, canvas.width, canvas.height);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::config::MemeConfig;

    fn style() -> TextStyle {
        MemeConfig::default().text_style()
    }

    fn canvas() -> Dimensions {
        Dimensions::new(400.0, 400.0)
    }

    #[test]
    fn test_render_with_image() {
        let mut scene = Scene::new();
        let captions = Captions::new("top", "bottom");
        render_meme(&mut scene, canvas(), Some(Dimensions::new(800.0, 400.0)), &captions, &style())
            .unwrap();

        assert_eq!(
            scene.commands(),
            &[
                DrawCommand::Clear { x: 0.0, y: 0.0, width: 400.0, height: 400.0 },
                DrawCommand::FillRect { x: 0.0, y: 0.0, width: 400.0, height: 400.0, color: [0, 0, 0] },
                DrawCommand::Image(FitResult { width: 400.0, height: 200.0, start_x: 0.0, start_y: 100.0 }),
                DrawCommand::Text { text: "top".into(), x: 200.0, y: 40.0, size: 32.0, color: [255, 255, 255] },
                DrawCommand::Text { text: "bottom".into(), x: 200.0, y: 395.0, size: 32.0, color: [255, 255, 255] },
            ]
        );
    }

    #[test]
    fn test_render_without_image_draws_captions_only() {
        let mut scene = Scene::new();
        render_meme(&mut scene, canvas(), None, &Captions::new("a", "b"), &style()).unwrap();

        assert!(scene.image_placement().is_none());
        assert!(!scene.is_blank());
        let texts = scene
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Text { .. }))
            .count();
        assert_eq!(texts, 2);
        assert!(!scene.commands().iter().any(|c| matches!(c, DrawCommand::FillRect { .. })));
    }

    #[test]
    fn test_invalid_image_leaves_surface_untouched() {
        let mut scene = Scene::new();
        render_meme(&mut scene, canvas(), None, &Captions::new("keep", ""), &style()).unwrap();
        let before = scene.clone();

        let result = render_meme(
            &mut scene,
            canvas(),
            Some(Dimensions::new(0.0, 10.0)),
            &Captions::default(),
            &style(),
        );
        assert!(matches!(result, Err(RenderError::InvalidDimension(_))));
        assert_eq!(scene, before);
    }

    #[test]
    fn test_fit_active_image_errors() {
        assert_eq!(fit_active_image(canvas(), None), Err(RenderError::NoActiveImage));
        assert!(fit_active_image(canvas(), Some(Dimensions::new(10.0, 10.0))).is_ok());
    }

    #[test]
    fn test_clear_discards_previous_drawing() {
        let mut scene = Scene::new();
        render_meme(&mut scene, canvas(), Some(Dimensions::new(10.0, 20.0)), &Captions::default(), &style())
            .unwrap();
        clear_canvas(&mut scene, canvas());
        assert!(scene.is_blank());
        assert_eq!(scene.commands().len(), 1);
    }

    #[test]
    fn test_replay_reproduces_commands() {
        let mut original = Scene::new();
        render_meme(&mut original, canvas(), Some(Dimensions::new(200.0, 800.0)), &Captions::new("x", "y"), &style())
            .unwrap();

        let mut copy = Scene::new();
        original.replay(&mut copy);
        assert_eq!(copy, original);
    }
}
