// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Editor configuration.
//!
//! This module handles reading the editor settings from YAML or JSON
//! files. Every field has a default, so a file only needs the values it
//! changes.

use crate::models::dimensions::Dimensions;
use crate::models::volume::Volume;
use crate::render::TextStyle;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming an optional configuration file.
pub const CONFIG_ENV: &str = "MEMEGEN_CONFIG";

/// Largest accepted canvas side, in pixels.
pub const MAX_CANVAS_SIDE: f64 = 8192.0;

/// Largest accepted caption font size, in points.
pub const MAX_FONT_SIZE: f32 = 512.0;

/// Settings for the canvas, captions and speech.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemeConfig {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub font_size: f32,
    /// Baseline of the top caption, from the top edge.
    pub top_caption_y: f64,
    /// Gap between the bottom caption baseline and the bottom edge.
    pub bottom_caption_margin: f64,
    pub text_color: [u8; 3],
    pub background_color: [u8; 3],
    pub pitch: f32,
    pub initial_volume: u8,
    pub voice_placeholder: String,
}

impl Default for MemeConfig {
    fn default() -> Self {
        Self {
            canvas_width: 400.0,
            canvas_height: 400.0,
            font_size: 32.0,
            top_caption_y: 40.0,
            bottom_caption_margin: 5.0,
            text_color: [255, 255, 255],
            background_color: [0, 0, 0],
            pitch: 1.0,
            initial_volume: 100,
            voice_placeholder: "Select voice".to_string(),
        }
    }
}

impl MemeConfig {
    pub fn canvas(&self) -> Dimensions {
        Dimensions::new(self.canvas_width, self.canvas_height)
    }

    pub fn text_style(&self) -> TextStyle {
        TextStyle {
            font_size: self.font_size,
            color: self.text_color,
            background: self.background_color,
            top_y: self.top_caption_y,
            bottom_margin: self.bottom_caption_margin,
        }
    }

    pub fn volume(&self) -> Volume {
        Volume::new(self.initial_volume)
    }

    fn validate(self) -> Result<Self> {
        let canvas = self.canvas();
        if !canvas.is_valid() || canvas.width > MAX_CANVAS_SIDE || canvas.height > MAX_CANVAS_SIDE {
            bail!(
                "canvas size must be positive and at most {}, got {}x{}",
                MAX_CANVAS_SIDE,
                self.canvas_width,
                self.canvas_height
            );
        }
        if !(self.font_size.is_finite() && self.font_size > 0.0 && self.font_size <= MAX_FONT_SIZE) {
            bail!("font_size must be in (0, {}], got {}", MAX_FONT_SIZE, self.font_size);
        }
        for (name, value) in [
            ("top_caption_y", self.top_caption_y),
            ("bottom_caption_margin", self.bottom_caption_margin),
        ] {
            if !(value.is_finite() && (0.0..=self.canvas_height).contains(&value)) {
                bail!("{} must be within the canvas height, got {}", name, value);
            }
        }
        if !(self.pitch.is_finite() && (0.0..=2.0).contains(&self.pitch)) {
            bail!("pitch must be in [0, 2], got {}", self.pitch);
        }
        Ok(self)
    }
}

/// Load configuration from a YAML or JSON file, chosen by extension.
pub fn load_config(path: &Path) -> Result<MemeConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let extension = path.extension().and_then(|s| s.to_str());
    let config = match extension {
        Some("yaml") | Some("yml") => parse_yaml(&text)?,
        Some("json") => parse_json(&text)?,
        _ => bail!("Unsupported config extension: {:?}", extension),
    };
    config.validate()
}

/// Load the file named by `MEMEGEN_CONFIG`, or the defaults when unset.
pub fn config_from_env() -> Result<MemeConfig> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => {
            let config = load_config(Path::new(&path))?;
            log::info!("Loaded config from {}", Path::new(&path).display());
            Ok(config)
        }
        None => Ok(MemeConfig::default()),
    }
}

fn parse_yaml(text: &str) -> Result<MemeConfig> {
    Ok(serde_yaml::from_str(text)?)
}

fn parse_json(text: &str) -> Result<MemeConfig> {
    Ok(serde_json::from_str(text)?)
}
