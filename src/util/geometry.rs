// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module computes how to letterbox an image into the fixed-size
//! canvas: scaled to touch the canvas on one axis, aspect ratio kept,
//! and centered along the axis with leftover space.

use crate::models::dimensions::{is_positive_finite, Dimensions, FitResult};

/// Error returned for sizes that cannot be fitted.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum FitError {
    #[error("invalid {name}: {value} (must be positive and finite)")]
    InvalidDimension { name: &'static str, value: f64 },
}

/// Compute the placement of an image inside the canvas.
///
/// Portrait images (aspect ratio below 1) are fitted by height and
/// centered horizontally. Square and landscape images are fitted by width
/// and centered vertically.
pub fn compute_fit(
    canvas_width: f64,
    canvas_height: f64,
    image_width: f64,
    image_height: f64,
) -> Result<FitResult, FitError> {
    check("canvas width", canvas_width)?;
    check("canvas height", canvas_height)?;
    check("image width", image_width)?;
    check("image height", image_height)?;

    let aspect_ratio = image_width / image_height;

    let fit = if aspect_ratio < 1.0 {
        let width = canvas_height * aspect_ratio;
        FitResult {
            width,
            height: canvas_height,
            start_x: (canvas_width - width) / 2.0,
            start_y: 0.0,
        }
    } else {
        // Squares land here too
        let height = canvas_width / aspect_ratio;
        FitResult {
            width: canvas_width,
            height,
            start_x: 0.0,
            start_y: (canvas_height - height) / 2.0,
        }
    };

    Ok(fit)
}

/// Same as [`compute_fit`], taking the sizes as [`Dimensions`].
pub fn fit_dimensions(canvas: Dimensions, image: Dimensions) -> Result<FitResult, FitError> {
    compute_fit(canvas.width, canvas.height, image.width, image.height)
}

fn check(name: &'static str, value: f64) -> Result<(), FitError> {
    if is_positive_finite(value) {
        Ok(())
    } else {
        Err(FitError::InvalidDimension { name, value })
    }
}
