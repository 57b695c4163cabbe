use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tilegen::ascii;
use tilegen::biomes::ALL_BIOMES;
use tilegen::export;
use tilegen::world::{build_fields, generate, GenerationRequest};
use tilegen::{GenerationParameters, SeedInput, TilePoolSet};

#[derive(Parser, Debug)]
#[command(name = "tilegen")]
#[command(about = "Generate procedural biome tile maps from a seed and sliders")]
struct Args {
    /// Number of grid columns
    #[arg(short = 'W', long, default_value = "64")]
    cols: usize,

    /// Number of grid rows
    #[arg(short = 'H', long, default_value = "64")]
    rows: usize,

    /// Seed: an integer or any string (random if not specified)
    #[arg(short, long)]
    seed: Option<String>,

    /// Water slider (-0.5 to 0.5)
    #[arg(long, default_value = "0.0")]
    water: f64,

    /// Green (vegetation) slider (-0.5 to 0.5)
    #[arg(long, default_value = "0.0")]
    green: f64,

    /// Mountain slider (-0.5 to 0.5)
    #[arg(long, default_value = "0.0")]
    mountain: f64,

    /// Desert slider (-0.5 to 0.5)
    #[arg(long, default_value = "0.0")]
    desert: f64,

    /// Swamp slider (-0.5 to 0.5)
    #[arg(long, default_value = "0.0")]
    swamp: f64,

    /// Badlands slider (-0.5 to 0.5)
    #[arg(long, default_value = "0.0")]
    badlands: f64,

    /// Snow slider (-0.5 to 0.5)
    #[arg(long, default_value = "0.0")]
    snow: f64,

    /// JSON file with caller-supplied tile pools (built-in pools if omitted)
    #[arg(long)]
    pools: Option<String>,

    /// Seed for tile selection (ambient randomness if omitted)
    #[arg(long)]
    tile_seed: Option<u64>,

    /// Export the biome map to a PNG at this path
    #[arg(long)]
    export_png: Option<String>,

    /// Pixels per cell in the PNG export
    #[arg(long, default_value = "4")]
    export_scale: u32,

    /// Export the elevation and vegetation fields as grayscale PNGs with
    /// this path prefix (writes <prefix>_elevation.png and
    /// <prefix>_vegetation.png)
    #[arg(long)]
    export_fields: Option<String>,

    /// Export the full result grid as JSON at this path
    #[arg(long)]
    export_json: Option<String>,

    /// Print an ASCII preview of the biome map
    #[arg(long)]
    ascii: bool,
}

fn main() {
    let args = Args::parse();

    let params = GenerationParameters {
        water: args.water,
        green: args.green,
        mountain: args.mountain,
        desert: args.desert,
        swamp: args.swamp,
        badlands: args.badlands,
        snow: args.snow,
    }
    .clamped();

    let pools = match &args.pools {
        Some(path) => {
            let data = std::fs::read_to_string(path)
                .unwrap_or_else(|e| panic!("failed to read pool file {}: {}", path, e));
            serde_json::from_str::<TilePoolSet>(&data)
                .unwrap_or_else(|e| panic!("failed to parse pool file {}: {}", path, e))
        }
        None => TilePoolSet::builtin(),
    };

    let seed = args.seed.as_ref().map(|s| match s.parse::<i64>() {
        Ok(n) => SeedInput::Number(n),
        Err(_) => SeedInput::Text(s.clone()),
    });

    let request = GenerationRequest {
        seed,
        params,
        cols: args.cols,
        rows: args.rows,
        pools,
    };

    println!("Generating {}x{} map...", args.cols, args.rows);
    let result = match args.tile_seed {
        Some(tile_seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(tile_seed);
            generate(&request, &mut rng)
        }
        None => generate(&request, &mut rand::thread_rng()),
    }
    .unwrap_or_else(|e| panic!("generation failed: {}", e));

    println!("Seed used: {}", result.seed_used);

    // Biome histogram
    let total = result.cells.len();
    for biome in ALL_BIOMES {
        let count = result.cells.iter().filter(|c| c.biome == biome).count();
        if count > 0 {
            println!(
                "  {:<20} {:>6} cells ({:>5.1}%)",
                biome.name(),
                count,
                100.0 * count as f64 / total as f64,
            );
        }
    }

    let missing = result.missing_tile_count();
    if missing > 0 {
        println!("Warning: {} cells have no tile available", missing);
    }

    if args.ascii {
        print!("{}", ascii::render_biome_map(&result));
    }

    if let Some(path) = &args.export_png {
        export::export_biome_map(&result, path, args.export_scale)
            .unwrap_or_else(|e| panic!("PNG export failed: {}", e));
        println!("Biome map written to {}", path);
    }

    if let Some(prefix) = &args.export_fields {
        let (elevation, vegetation) = build_fields(result.seed_used, args.cols, args.rows);
        let elev_path = format!("{}_elevation.png", prefix);
        let veg_path = format!("{}_vegetation.png", prefix);
        export::export_field(&elevation, &elev_path)
            .unwrap_or_else(|e| panic!("field export failed: {}", e));
        export::export_field(&vegetation, &veg_path)
            .unwrap_or_else(|e| panic!("field export failed: {}", e));
        println!("Fields written to {} and {}", elev_path, veg_path);
    }

    if let Some(path) = &args.export_json {
        export::export_json(&result, path)
            .unwrap_or_else(|e| panic!("JSON export failed: {}", e));
        println!("Result grid written to {}", path);
    }
}
