//! Biome classification.
//!
//! `classify` is a pure decision procedure: (elevation, vegetation,
//! sliders) in, one of twelve biomes out. The rules live in an explicit
//! ordered table evaluated top-to-bottom with first match winning; the
//! evaluation order is a contract (swamp must be tested before flat
//! terrain, snow before bare mountains) and is covered by tests
//! rule-by-rule rather than hidden inside a nested branch tree.

use serde::{Deserialize, Serialize};

use crate::params::GenerationParameters;

/// Terrain category assigned to a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Biome {
    Water,
    Swamp,
    Grassland,
    ForestLight,
    Forest,
    Hills,
    HillsForest,
    Mountains,
    MountainsForest,
    Desert,
    Badlands,
    SnowyMountains,
}

/// All twelve biomes, in a stable order (useful for histograms and tests).
pub const ALL_BIOMES: [Biome; 12] = [
    Biome::Water,
    Biome::Swamp,
    Biome::Grassland,
    Biome::ForestLight,
    Biome::Forest,
    Biome::Hills,
    Biome::HillsForest,
    Biome::Mountains,
    Biome::MountainsForest,
    Biome::Desert,
    Biome::Badlands,
    Biome::SnowyMountains,
];

impl Biome {
    pub fn name(&self) -> &'static str {
        match self {
            Biome::Water => "water",
            Biome::Swamp => "swamp",
            Biome::Grassland => "grassland",
            Biome::ForestLight => "forest (light)",
            Biome::Forest => "forest",
            Biome::Hills => "hills",
            Biome::HillsForest => "hills (forest)",
            Biome::Mountains => "mountains",
            Biome::MountainsForest => "mountains (forest)",
            Biome::Desert => "desert",
            Biome::Badlands => "badlands",
            Biome::SnowyMountains => "snowy mountains",
        }
    }
}

// =============================================================================
// DERIVED THRESHOLDS
// =============================================================================

/// Classification thresholds derived from the sliders. Default-parameter
/// values in parentheses.
#[derive(Debug, Clone, Copy)]
pub struct Thresholds {
    /// Below this elevation everything is water (0.12).
    pub water_line: f64,
    /// Swamp band upper edge, relative to the water line (0.18).
    pub swamp_line: f64,
    /// Hills start here (0.60).
    pub hill_line: f64,
    /// Mountains start here (0.75).
    pub mt_line: f64,
    /// Above this, sparse peaks get snow (0.92).
    pub snow_line: f64,
    /// Flat land below this effective vegetation dries out (0.20).
    pub desert_veg: f64,
    /// Dry-land split between desert and badlands (0.10).
    pub badlands_cut: f64,
    /// Flat additive boost applied to per-cell vegetation (0.0).
    pub veg_bonus: f64,
}

impl Thresholds {
    pub fn from_params(params: &GenerationParameters) -> Self {
        let water_line = 0.12 + params.water * 0.30;
        let desert_veg = 0.20 + params.desert * 0.50;
        Self {
            water_line,
            swamp_line: water_line + 0.06 + params.swamp * 0.30,
            hill_line: 0.60 - params.mountain * 0.50,
            mt_line: 0.75 - params.mountain * 0.50,
            snow_line: 0.92 - params.snow * 0.30,
            desert_veg,
            badlands_cut: desert_veg * (0.5 + params.badlands),
            veg_bonus: params.green * 0.80,
        }
    }
}

// =============================================================================
// ORDERED RULE TABLE
// =============================================================================

/// One classification rule: a predicate over (elevation, boosted
/// vegetation, thresholds) and the biome it yields.
pub struct Rule {
    pub biome: Biome,
    pub applies: fn(elevation: f64, veg: f64, t: &Thresholds) -> bool,
}

/// The classification procedure, flattened into its evaluation order.
/// First match wins; the last rule matches unconditionally.
pub const RULES: [Rule; 12] = [
    Rule {
        biome: Biome::Water,
        applies: |e, _, t| e < t.water_line,
    },
    Rule {
        biome: Biome::Swamp,
        applies: |e, veg, t| e < t.swamp_line && veg > 0.35,
    },
    Rule {
        biome: Biome::SnowyMountains,
        applies: |e, veg, t| e >= t.mt_line && e > t.snow_line && veg < 0.50,
    },
    Rule {
        biome: Biome::MountainsForest,
        applies: |e, veg, t| e >= t.mt_line && veg > 0.50,
    },
    Rule {
        biome: Biome::Mountains,
        applies: |e, _, t| e >= t.mt_line,
    },
    Rule {
        biome: Biome::HillsForest,
        applies: |e, veg, t| e >= t.hill_line && veg > 0.50,
    },
    Rule {
        biome: Biome::Hills,
        applies: |e, _, t| e >= t.hill_line,
    },
    Rule {
        biome: Biome::Badlands,
        applies: |_, veg, t| veg < t.desert_veg && veg < t.badlands_cut,
    },
    Rule {
        biome: Biome::Desert,
        applies: |_, veg, t| veg < t.desert_veg,
    },
    Rule {
        biome: Biome::Grassland,
        applies: |_, veg, _| veg < 0.45,
    },
    Rule {
        biome: Biome::ForestLight,
        applies: |_, veg, _| veg < 0.65,
    },
    Rule {
        biome: Biome::Forest,
        applies: |_, _, _| true,
    },
];

/// Classify one cell against precomputed thresholds.
pub fn classify_with(elevation: f64, vegetation: f64, t: &Thresholds) -> Biome {
    let veg = vegetation + t.veg_bonus;
    for rule in &RULES {
        if (rule.applies)(elevation, veg, t) {
            return rule.biome;
        }
    }
    // The last rule matches unconditionally.
    Biome::Forest
}

/// Classify one cell. Pure and total: never panics, always returns one of
/// the twelve biomes, even for inputs outside the documented domains.
pub fn classify(elevation: f64, vegetation: f64, params: &GenerationParameters) -> Biome {
    classify_with(elevation, vegetation, &Thresholds::from_params(params))
}
