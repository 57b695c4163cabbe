//! Tile pools and biome-to-tile resolution.
//!
//! A pool set maps eight category names to lists of interchangeable asset
//! paths. Resolution never panics: when the fallback chain is exhausted it
//! returns `None` and leaves the skip-or-abort policy to the caller.
//! Selection inside a pool draws from an injected RNG so tests (and callers
//! that need byte-identical output) can pass a seeded generator instead of
//! ambient randomness.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::biomes::Biome;

/// Pool category names. `Other` is the shared fallback pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileCategory {
    Water,
    Vegetation,
    Mountains,
    Desert,
    Swamp,
    Badlands,
    Snow,
    Other,
}

/// Fixed preference order used when both the mapped pool and the "other"
/// pool are empty.
pub const CATEGORY_PREFERENCE: [TileCategory; 8] = [
    TileCategory::Water,
    TileCategory::Vegetation,
    TileCategory::Mountains,
    TileCategory::Desert,
    TileCategory::Swamp,
    TileCategory::Badlands,
    TileCategory::Snow,
    TileCategory::Other,
];

impl TileCategory {
    /// Base biome-to-category mapping. Snowy mountains nominally map to
    /// mountains here; the resolver upgrades them to the dedicated snow
    /// pool when one is populated.
    pub fn for_biome(biome: Biome) -> TileCategory {
        match biome {
            Biome::Water => TileCategory::Water,
            Biome::Swamp => TileCategory::Swamp,
            Biome::Grassland | Biome::ForestLight | Biome::Forest => TileCategory::Vegetation,
            Biome::Hills
            | Biome::HillsForest
            | Biome::Mountains
            | Biome::MountainsForest
            | Biome::SnowyMountains => TileCategory::Mountains,
            Biome::Desert => TileCategory::Desert,
            Biome::Badlands => TileCategory::Badlands,
        }
    }
}

/// Named lists of asset paths, one per category. Caller-supplied sets may
/// leave any (or all) pools empty; the built-in set never does.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TilePoolSet {
    pub water: Vec<String>,
    pub vegetation: Vec<String>,
    pub mountains: Vec<String>,
    pub desert: Vec<String>,
    pub swamp: Vec<String>,
    pub badlands: Vec<String>,
    pub snow: Vec<String>,
    pub other: Vec<String>,
}

impl TilePoolSet {
    /// The built-in pool set. Guaranteed non-empty for every category, so
    /// the exhausted-fallback outcome is only reachable with
    /// caller-supplied sets.
    pub fn builtin() -> Self {
        let paths = |cat: &str, names: &[&str]| -> Vec<String> {
            names
                .iter()
                .map(|n| format!("assets/tiles/{}/{}.png", cat, n))
                .collect()
        };
        Self {
            water: paths("water", &["water_calm", "water_waves", "water_deep"]),
            vegetation: paths("vegetation", &["grass", "grass_sparse", "trees", "trees_dense"]),
            mountains: paths("mountains", &["peak", "peak_double", "crag"]),
            desert: paths("desert", &["dunes", "sand_flat"]),
            swamp: paths("swamp", &["marsh", "reeds"]),
            badlands: paths("badlands", &["mesa", "cracked_earth"]),
            snow: paths("snow", &["peak_snow", "glacier"]),
            other: paths("other", &["blank"]),
        }
    }

    pub fn pool(&self, category: TileCategory) -> &[String] {
        match category {
            TileCategory::Water => &self.water,
            TileCategory::Vegetation => &self.vegetation,
            TileCategory::Mountains => &self.mountains,
            TileCategory::Desert => &self.desert,
            TileCategory::Swamp => &self.swamp,
            TileCategory::Badlands => &self.badlands,
            TileCategory::Snow => &self.snow,
            TileCategory::Other => &self.other,
        }
    }

    /// Resolve a biome to a concrete asset path.
    ///
    /// Resolution order: the mapped category pool, then "other", then the
    /// first non-empty pool in [`CATEGORY_PREFERENCE`]. Returns `None` only
    /// when every pool is empty.
    pub fn resolve<R: Rng + ?Sized>(&self, biome: Biome, rng: &mut R) -> Option<&str> {
        let category = match biome {
            Biome::SnowyMountains if !self.snow.is_empty() => TileCategory::Snow,
            _ => TileCategory::for_biome(biome),
        };

        let mapped = self.pool(category);
        if !mapped.is_empty() {
            return mapped.choose(rng).map(String::as_str);
        }

        if !self.other.is_empty() {
            return self.other.choose(rng).map(String::as_str);
        }

        for fallback in CATEGORY_PREFERENCE {
            let pool = self.pool(fallback);
            if !pool.is_empty() {
                return pool.choose(rng).map(String::as_str);
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_builtin_pools_are_never_empty() {
        let pools = TilePoolSet::builtin();
        for category in CATEGORY_PREFERENCE {
            assert!(
                !pools.pool(category).is_empty(),
                "built-in pool {:?} must not be empty",
                category,
            );
        }
    }

    #[test]
    fn test_every_biome_resolves_against_builtin() {
        let pools = TilePoolSet::builtin();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for biome in crate::biomes::ALL_BIOMES {
            assert!(pools.resolve(biome, &mut rng).is_some());
        }
    }

    #[test]
    fn test_snowy_mountains_prefer_snow_pool() {
        let pools = TilePoolSet::builtin();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        for _ in 0..20 {
            let path = pools.resolve(Biome::SnowyMountains, &mut rng).unwrap();
            assert!(path.contains("/snow/"), "expected snow tile, got {}", path);
        }
    }

    #[test]
    fn test_snowy_mountains_fall_back_to_mountains() {
        let mut pools = TilePoolSet::builtin();
        pools.snow.clear();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..20 {
            let path = pools.resolve(Biome::SnowyMountains, &mut rng).unwrap();
            assert!(path.contains("/mountains/"), "expected mountain tile, got {}", path);
        }
    }

    #[test]
    fn test_other_pool_covers_everything() {
        let pools = TilePoolSet {
            other: vec!["assets/tiles/other/only.png".to_string()],
            ..Default::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        for biome in crate::biomes::ALL_BIOMES {
            assert_eq!(
                pools.resolve(biome, &mut rng),
                Some("assets/tiles/other/only.png"),
            );
        }
    }

    #[test]
    fn test_preference_list_fallback() {
        // No vegetation, no other: a forest cell should fall back to the
        // first non-empty pool in preference order (water here).
        let pools = TilePoolSet {
            water: vec!["w.png".to_string()],
            desert: vec!["d.png".to_string()],
            ..Default::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        assert_eq!(pools.resolve(Biome::Forest, &mut rng), Some("w.png"));
    }

    #[test]
    fn test_exhausted_chain_returns_none() {
        let pools = TilePoolSet::default();
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        assert_eq!(pools.resolve(Biome::Water, &mut rng), None);
    }

    #[test]
    fn test_seeded_rng_reproduces_selection() {
        let pools = TilePoolSet::builtin();
        let pick = |seed: u64| -> Vec<String> {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..50)
                .map(|_| pools.resolve(Biome::Forest, &mut rng).unwrap().to_string())
                .collect()
        };
        assert_eq!(pick(77), pick(77));
    }

    #[test]
    fn test_selection_is_uniformish() {
        // All three water tiles should show up over enough draws.
        let pools = TilePoolSet::builtin();
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(pools.resolve(Biome::Water, &mut rng).unwrap().to_string());
        }
        assert_eq!(seen.len(), pools.water.len());
    }

    #[test]
    fn test_pool_set_deserializes_with_missing_keys() {
        let pools: TilePoolSet =
            serde_json::from_str(r#"{"water": ["a.png"], "other": ["b.png"]}"#).unwrap();
        assert_eq!(pools.water, vec!["a.png"]);
        assert!(pools.mountains.is_empty());
    }
}
