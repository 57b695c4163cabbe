//! Seed resolution and per-channel seed derivation.
//!
//! One base seed drives the whole map. The four noise channels get fixed,
//! distinct offsets from it so they stay decorrelated while remaining fully
//! reproducible from a single number.

/// Seed as supplied by the caller: a number, or any string.
#[derive(Debug, Clone, PartialEq)]
pub enum SeedInput {
    Number(i64),
    Text(String),
}

impl From<i64> for SeedInput {
    fn from(n: i64) -> Self {
        SeedInput::Number(n)
    }
}

impl From<&str> for SeedInput {
    fn from(s: &str) -> Self {
        SeedInput::Text(s.to_string())
    }
}

impl From<String> for SeedInput {
    fn from(s: String) -> Self {
        SeedInput::Text(s)
    }
}

/// Reduce a seed input to the integer the noise tables are built from.
/// `None` picks a random seed (returned to the caller in the result so the
/// map can be recreated).
///
/// String seeds sum character codes weighted by position. This is
/// intentionally weak hashing: the goal is "any string gives a plausible
/// map", not collision resistance, and the reduction is part of the
/// reproducibility contract.
pub fn resolve_seed(input: Option<&SeedInput>) -> i64 {
    match input {
        None => rand::random::<i32>() as i64,
        Some(SeedInput::Number(n)) => *n,
        Some(SeedInput::Text(s)) => s
            .chars()
            .enumerate()
            .map(|(i, c)| (c as i64).wrapping_mul(i as i64 + 1))
            .fold(0i64, |acc, v| acc.wrapping_add(v)),
    }
}

/// The four noise channels derived from one base seed.
#[derive(Debug, Clone, Copy)]
pub struct ChannelSeeds {
    /// Ridged elevation detail.
    pub elevation: i64,
    /// Low-frequency continental mask multiplied into elevation.
    pub elevation_mask: i64,
    /// Vegetation density.
    pub vegetation: i64,
    /// Domain warp applied to vegetation sampling.
    pub vegetation_warp: i64,
}

impl ChannelSeeds {
    /// Fixed offsets keep the channels decorrelated without a second seed.
    pub fn from_base(seed: i64) -> Self {
        Self {
            elevation: seed,
            elevation_mask: seed.wrapping_add(1111),
            vegetation: seed.wrapping_add(2222),
            vegetation_warp: seed.wrapping_add(3333),
        }
    }
}
