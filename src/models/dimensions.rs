// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Size and placement data structures.
//!
//! This module defines the sizes read from the canvas and from decoded
//! images, and the placement computed for drawing one inside the other.

/// Width and height of a canvas or a decoded image, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    /// Create new dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Dimensions of a decoded image with integer pixel sizes.
    pub fn from_pixels(width: u32, height: u32) -> Self {
        Self::new(width as f64, height as f64)
    }

    /// Check that both sides are positive and finite.
    pub fn is_valid(&self) -> bool {
        is_positive_finite(self.width) && is_positive_finite(self.height)
    }
}

/// Placement of a scaled image inside the canvas.
///
/// The rectangle `[start_x, start_x + width] x [start_y, start_y + height]`
/// lies inside the canvas and touches its boundary on at least one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitResult {
    pub width: f64,
    pub height: f64,
    pub start_x: f64,
    pub start_y: f64,
}

impl FitResult {
    /// Width divided by height of the drawn rectangle.
    #[cfg(test)]
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// Check whether the drawn rectangle fits inside `canvas`, allowing
    /// `eps` of floating-point slack on the far edges.
    pub fn contains_within(&self, canvas: Dimensions, eps: f64) -> bool {
        self.start_x >= 0.0
            && self.start_y >= 0.0
            && self.start_x + self.width <= canvas.width + eps
            && self.start_y + self.height <= canvas.height + eps
    }
}

pub(crate) fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validity() {
        assert!(Dimensions::new(400.0, 300.0).is_valid());
        assert!(!Dimensions::new(0.0, 300.0).is_valid());
        assert!(!Dimensions::new(400.0, -1.0).is_valid());
        assert!(!Dimensions::new(f64::NAN, 300.0).is_valid());
        assert!(!Dimensions::new(400.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn test_contains_within() {
        let canvas = Dimensions::new(400.0, 400.0);
        let inside = FitResult { width: 400.0, height: 200.0, start_x: 0.0, start_y: 100.0 };
        assert!(inside.contains_within(canvas, 1e-9));

        let overflow = FitResult { width: 400.0, height: 200.0, start_x: 10.0, start_y: 100.0 };
        assert!(!overflow.contains_within(canvas, 1e-9));
    }
}
