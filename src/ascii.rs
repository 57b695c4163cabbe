//! ASCII rendering of generated maps for quick terminal previews.

use crate::biomes::Biome;
use crate::world::GenerationResult;

/// Get the ASCII character for a biome.
pub fn biome_char(biome: Biome) -> char {
    match biome {
        Biome::Water => '~',
        Biome::Swamp => 's',
        Biome::Grassland => '"',
        Biome::ForestLight => 't',
        Biome::Forest => 'T',
        Biome::Hills => 'n',
        Biome::HillsForest => 'h',
        Biome::Mountains => '^',
        Biome::MountainsForest => 'm',
        Biome::Desert => '.',
        Biome::Badlands => 'x',
        Biome::SnowyMountains => 'A',
    }
}

/// Render the biome grid as one character per cell, rows separated by
/// newlines.
pub fn render_biome_map(result: &GenerationResult) -> String {
    let mut out = String::with_capacity((result.cols + 1) * result.rows);
    for row in 0..result.rows {
        for col in 0..result.cols {
            out.push(biome_char(result.cell(col, row).biome));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeds::SeedInput;
    use crate::world::{generate, GenerationRequest};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_chars_are_unique_per_biome() {
        let mut seen = std::collections::HashSet::new();
        for biome in crate::biomes::ALL_BIOMES {
            assert!(seen.insert(biome_char(biome)), "duplicate char for {:?}", biome);
        }
    }

    #[test]
    fn test_render_shape() {
        let mut request = GenerationRequest::new(10, 4);
        request.seed = Some(SeedInput::Number(1));
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let result = generate(&request, &mut rng).unwrap();

        let text = render_biome_map(&result);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|l| l.chars().count() == 10));
    }
}
