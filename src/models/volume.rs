// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Read-aloud volume and its icon tier.

/// Slider volume, an integer from 0 to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Volume(u8);

impl Volume {
    pub const MAX: u8 = 100;

    /// Create a volume, clamping to 0..=100.
    pub fn new(level: u8) -> Self {
        Self(level.min(Self::MAX))
    }

    pub fn level(self) -> u8 {
        self.0
    }

    /// Volume as a fraction in `0.0..=1.0`.
    pub fn as_fraction(self) -> f32 {
        f32::from(self.0) / f32::from(Self::MAX)
    }

    pub fn tier(self) -> VolumeTier {
        VolumeTier::from_level(self.0)
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(Self::MAX)
    }
}

/// Four-step volume indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeTier {
    Muted,
    Low,
    Medium,
    High,
}

impl VolumeTier {
    /// Tier for a slider level.
    pub fn from_level(level: u8) -> Self {
        match level {
            67..=100 => VolumeTier::High,
            34..=66 => VolumeTier::Medium,
            1..=33 => VolumeTier::Low,
            _ => VolumeTier::Muted,
        }
    }

    /// Index used in icon names, 0 (muted) to 3 (loud).
    pub fn index(self) -> u8 {
        match self {
            VolumeTier::Muted => 0,
            VolumeTier::Low => 1,
            VolumeTier::Medium => 2,
            VolumeTier::High => 3,
        }
    }

    /// Relative path of the icon image for this tier.
    pub fn icon_path(self) -> String {
        format!("icons/volume-level-{}.svg", self.index())
    }

    /// Glyph shown next to the slider.
    pub fn glyph(self) -> &'static str {
        match self {
            VolumeTier::Muted => "🔇",
            VolumeTier::Low => "🔈",
            VolumeTier::Medium => "🔉",
            VolumeTier::High => "🔊",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(VolumeTier::from_level(0), VolumeTier::Muted);
        assert_eq!(VolumeTier::from_level(1), VolumeTier::Low);
        assert_eq!(VolumeTier::from_level(33), VolumeTier::Low);
        assert_eq!(VolumeTier::from_level(34), VolumeTier::Medium);
        assert_eq!(VolumeTier::from_level(66), VolumeTier::Medium);
        assert_eq!(VolumeTier::from_level(67), VolumeTier::High);
        assert_eq!(VolumeTier::from_level(100), VolumeTier::High);
        // Out of slider range
        assert_eq!(VolumeTier::from_level(200), VolumeTier::Muted);
    }

    #[test]
    fn test_icon_path() {
        assert_eq!(VolumeTier::High.icon_path(), "icons/volume-level-3.svg");
        assert_eq!(Volume::new(0).tier().icon_path(), "icons/volume-level-0.svg");
    }

    #[test]
    fn test_clamp_and_fraction() {
        assert_eq!(Volume::new(250).level(), 100);
        assert_eq!(Volume::new(50).as_fraction(), 0.5);
        assert_eq!(Volume::default().as_fraction(), 1.0);
    }
}
