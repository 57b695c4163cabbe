//! Tunable generation sliders.

use serde::{Deserialize, Serialize};

/// Lower bound of the documented slider domain.
pub const SLIDER_MIN: f64 = -0.5;
/// Upper bound of the documented slider domain.
pub const SLIDER_MAX: f64 = 0.5;

/// The seven map-shaping sliders. Each one's documented domain is
/// [-0.5, +0.5]; the classifier does not validate, so callers should run
/// values through [`GenerationParameters::clamped`] first. Behavior outside
/// the domain is unspecified but never panics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationParameters {
    /// Raises the water line (more ocean).
    pub water: f64,
    /// Boosts effective vegetation everywhere.
    pub green: f64,
    /// Lowers the hill and mountain lines (more high ground).
    pub mountain: f64,
    /// Raises the vegetation threshold below which flat land dries out.
    pub desert: f64,
    /// Widens the swamp band above the water line.
    pub swamp: f64,
    /// Grows the badlands share of dry flat land.
    pub badlands: f64,
    /// Lowers the snow line on mountain peaks.
    pub snow: f64,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            water: 0.0,
            green: 0.0,
            mountain: 0.0,
            desert: 0.0,
            swamp: 0.0,
            badlands: 0.0,
            snow: 0.0,
        }
    }
}

impl GenerationParameters {
    /// Clamp every slider into the documented domain.
    pub fn clamped(self) -> Self {
        let c = |v: f64| v.clamp(SLIDER_MIN, SLIDER_MAX);
        Self {
            water: c(self.water),
            green: c(self.green),
            mountain: c(self.mountain),
            desert: c(self.desert),
            swamp: c(self.swamp),
            badlands: c(self.badlands),
            snow: c(self.snow),
        }
    }
}
