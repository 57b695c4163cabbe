//! Procedural biome tile map generator
//!
//! Turns a seed and seven tunable sliders into a grid of classified,
//! tile-resolved cells. Same seed and sliders always reproduce the same
//! map; moving a slider reshapes the map continuously.

pub mod ascii;
pub mod biomes;
pub mod export;
pub mod field;
pub mod noise;
pub mod params;
pub mod seeds;
pub mod tiles;
pub mod world;

pub use biomes::{classify, Biome};
pub use params::GenerationParameters;
pub use seeds::SeedInput;
pub use tiles::TilePoolSet;
pub use world::{generate, generate_default, GenerationError, GenerationRequest, GenerationResult};
