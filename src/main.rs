use std::error::Error;

use clap::Parser;

use tilegen::ascii::{self, AsciiMode};
use tilegen::autotile::{AutotileResolver, MatchKind};
use tilegen::export;
use tilegen::session::{terrain_counts, MapSession};
use tilegen::{NoiseConfig, Position, TerrainType};

#[derive(Parser, Debug)]
#[command(name = "tilegen")]
#[command(about = "Generate autotiled 2D terrain maps from seeded noise")]
struct Args {
    /// Width of the map in cells
    #[arg(short = 'W', long, default_value = "64")]
    width: usize,

    /// Height of the map in cells
    #[arg(short = 'H', long, default_value = "32")]
    height: usize,

    /// Noise config JSON file; command-line values override it
    #[arg(short, long)]
    config: Option<String>,

    /// Random seed (uses random seed if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Water where water noise falls below this (0-1)
    #[arg(long)]
    water_threshold: Option<f64>,

    /// Frequency of the water noise field
    #[arg(long)]
    water_scale: Option<f64>,

    /// Dirt where dirt noise falls below this (0-1)
    #[arg(long)]
    dirt_threshold: Option<f64>,

    /// Number of smoothing rounds
    #[arg(long)]
    smoothing: Option<u32>,

    /// Print the map as ASCII
    #[arg(long)]
    ascii: bool,

    /// Use ANSI colors for the ASCII map
    #[arg(long)]
    color: bool,

    /// Find a path between two cells: x1,y1,x2,y2
    #[arg(long, value_parser = parse_path_arg)]
    path: Option<(Position, Position)>,

    /// Export a PNG preview of the terrain
    #[arg(long)]
    export_png: Option<String>,

    /// Pixels per cell in the PNG preview
    #[arg(long, default_value = "4")]
    png_scale: u32,

    /// Export the resolved sprite of every cell as JSON
    #[arg(long)]
    export_tiles: Option<String>,

    /// Save the effective noise config as JSON
    #[arg(long)]
    save_config: Option<String>,
}

fn parse_path_arg(s: &str) -> Result<(Position, Position), String> {
    let values: Vec<usize> = s
        .split(',')
        .map(|v| v.trim().parse::<usize>().map_err(|e| format!("'{}': {}", v, e)))
        .collect::<Result<_, _>>()?;

    match values.as_slice() {
        [x1, y1, x2, y2] => Ok(((*x1, *y1), (*x2, *y2))),
        _ => Err(format!("expected x1,y1,x2,y2, got '{}'", s)),
    }
}

fn build_config(args: &Args) -> Result<NoiseConfig, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => NoiseConfig::from_json_file(path)?,
        None => NoiseConfig {
            seed: rand::random(),
            ..NoiseConfig::default()
        },
    };

    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(t) = args.water_threshold {
        config.water_threshold = t;
    }
    if let Some(s) = args.water_scale {
        config.water_scale = s;
    }
    if let Some(t) = args.dirt_threshold {
        config.dirt_threshold = t;
    }
    if let Some(n) = args.smoothing {
        config.smoothing_iterations = n;
    }

    config.validate()?;
    Ok(config)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = build_config(&args)?;

    println!("Generating terrain with seed: {}", config.seed);
    println!("Map size: {}x{}", args.width, args.height);

    let session = MapSession::generate(args.width, args.height, &config)?;
    let grid = session.grid();

    let counts = terrain_counts(grid);
    let total = (grid.width * grid.height) as f64;
    for terrain in TerrainType::ALL {
        let n = counts[terrain.index()];
        println!("  {:<6} {:>7} cells ({:.1}%)", terrain, n, 100.0 * n as f64 / total);
    }

    // Tile selection summary
    let resolver = AutotileResolver::standard();
    let mut kinds = [0usize; 5];
    for (x, y, _) in grid.iter() {
        let choice = resolver.explain(grid, x, y)?;
        let slot = match choice.kind {
            MatchKind::Variation => 0,
            MatchKind::Transition => 1,
            MatchKind::Exact => 2,
            MatchKind::Cardinal => 3,
            MatchKind::Center => 4,
        };
        kinds[slot] += 1;
    }
    println!(
        "Tiles: {} variations, {} transitions, {} exact, {} cardinal, {} center",
        kinds[0], kinds[1], kinds[2], kinds[3], kinds[4]
    );

    let path = match args.path {
        Some((start, goal)) => {
            let path = session.find_path(start, goal)?;
            if path.is_empty() {
                println!("No path from {:?} to {:?}", start, goal);
            } else {
                println!("Path from {:?} to {:?}: {} steps", start, goal, path.len() - 1);
            }
            path
        }
        None => Vec::new(),
    };

    if args.ascii {
        println!();
        if args.color {
            print!("{}", ascii::render_colored_ascii_map(grid));
        } else if path.is_empty() {
            print!("{}", ascii::render_ascii_map(grid, AsciiMode::Terrain));
        } else {
            print!("{}", ascii::render_with_path(grid, &path));
        }
        println!("{}", ascii::terrain_legend());
    }

    if let Some(ref filename) = args.export_png {
        export::export_terrain_map(grid, args.png_scale, &path, filename)?;
        println!("Exported terrain preview to: {}", filename);
    }

    if let Some(ref filename) = args.export_tiles {
        export::export_tile_indices(grid, session.overlay(), filename)?;
        println!("Exported tile indices to: {}", filename);
    }

    if let Some(ref filename) = args.save_config {
        config.to_json_file(filename)?;
        println!("Saved config to: {}", filename);
    }

    Ok(())
}
