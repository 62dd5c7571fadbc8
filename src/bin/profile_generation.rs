//! Profiling tool to time each phase of terrain generation

use std::time::Instant;

use tilegen::{
    coastline, pathfinding, smoothing,
    autotile::AutotileResolver,
    terrain::TerrainClassifier,
    NoiseConfig, TerrainError,
};

fn main() -> Result<(), TerrainError> {
    env_logger::init();

    let width = 1024;
    let height = 1024;
    let config = NoiseConfig {
        seed: 1337,
        smoothing_iterations: 4,
        ..NoiseConfig::default()
    };

    println!("=== Performance Profiling ===");
    println!("Map size: {}x{} ({} cells)", width, height, width * height);
    println!();

    let start = Instant::now();
    let classifier = TerrainClassifier::new(&config);
    let raw = classifier.classify_grid(width, height)?;
    let classify_time = start.elapsed();
    println!("Classification: {:?}", classify_time);

    let start = Instant::now();
    let smoothed = smoothing::smooth(&raw, config.smoothing_iterations);
    let smooth_time = start.elapsed();
    println!("Smoothing ({} rounds): {:?}", config.smoothing_iterations, smooth_time);

    let start = Instant::now();
    let grid = coastline::apply_coast(&smoothed);
    let coast_time = start.elapsed();
    println!("Coastline: {:?}", coast_time);

    let start = Instant::now();
    let sprites = AutotileResolver::standard().resolve_all(&grid);
    let resolve_time = start.elapsed();
    println!("Autotile ({} sprites): {:?}", sprites.width * sprites.height, resolve_time);

    let start = Instant::now();
    let path = pathfinding::find_path(&grid, (0, 0), (width - 1, height - 1))?;
    let path_time = start.elapsed();
    println!("Pathfinding ({} cells): {:?}", path.len(), path_time);

    // Summary
    let total = classify_time + smooth_time + coast_time + resolve_time + path_time;
    let pct = |d: std::time::Duration| 100.0 * d.as_secs_f64() / total.as_secs_f64();
    println!("\n=== Summary ===");
    println!("Classification:   {:>8.2}% ({:?})", pct(classify_time), classify_time);
    println!("Smoothing:        {:>8.2}% ({:?})", pct(smooth_time), smooth_time);
    println!("Coastline:        {:>8.2}% ({:?})", pct(coast_time), coast_time);
    println!("Autotile:         {:>8.2}% ({:?})", pct(resolve_time), resolve_time);
    println!("Pathfinding:      {:>8.2}% ({:?})", pct(path_time), path_time);
    println!("─────────────────────────────────");
    println!("TOTAL:            {:>8}  {:?}", "100%", total);

    Ok(())
}
