//! PNG and JSON export of generated maps.
//!
//! These are debugging/preview surfaces; placing tiles on an actual display
//! surface is the embedding application's job.

use std::fs::File;
use std::io::{self, BufWriter};

use image::{ImageBuffer, Rgb, RgbImage};

use crate::biomes::Biome;
use crate::field::Field;
use crate::world::GenerationResult;

/// Flat preview color for a biome.
pub fn biome_color(biome: Biome) -> [u8; 3] {
    match biome {
        Biome::Water => [54, 98, 171],
        Biome::Swamp => [83, 107, 77],
        Biome::Grassland => [134, 181, 91],
        Biome::ForestLight => [98, 156, 74],
        Biome::Forest => [58, 118, 56],
        Biome::Hills => [148, 132, 106],
        Biome::HillsForest => [106, 128, 82],
        Biome::Mountains => [136, 128, 126],
        Biome::MountainsForest => [96, 110, 92],
        Biome::Desert => [222, 196, 136],
        Biome::Badlands => [178, 118, 78],
        Biome::SnowyMountains => [236, 240, 244],
    }
}

/// Export the biome grid as a PNG, `scale` pixels per cell.
pub fn export_biome_map(
    result: &GenerationResult,
    path: &str,
    scale: u32,
) -> Result<(), image::ImageError> {
    let scale = scale.max(1);
    let mut img: RgbImage =
        ImageBuffer::new(result.cols as u32 * scale, result.rows as u32 * scale);

    for row in 0..result.rows {
        for col in 0..result.cols {
            let color = biome_color(result.cell(col, row).biome);
            for py in 0..scale {
                for px in 0..scale {
                    img.put_pixel(
                        col as u32 * scale + px,
                        row as u32 * scale + py,
                        Rgb(color),
                    );
                }
            }
        }
    }

    img.save(path)
}

/// Export a normalized field as a grayscale PNG (useful for inspecting the
/// elevation/vegetation inputs behind a classification).
pub fn export_field(field: &Field, path: &str) -> Result<(), image::ImageError> {
    let mut img: RgbImage = ImageBuffer::new(field.cols as u32, field.rows as u32);
    for row in 0..field.rows {
        for col in 0..field.cols {
            let v = (field.get(col, row).clamp(0.0, 1.0) * 255.0) as u8;
            img.put_pixel(col as u32, row as u32, Rgb([v, v, v]));
        }
    }
    img.save(path)
}

/// Write the full result grid as JSON for external placement/persistence
/// collaborators.
pub fn export_json(result: &GenerationResult, path: &str) -> io::Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), result)
        .map_err(io::Error::from)
}
