//! Reproduces the reference run end to end: a (501, 502, 1000) synthetic
//! volume, the seven-rank percentile reduction, and the rendered median
//! slice.
//!
//! Allocates roughly 2 GB for the volume; run in release mode.

use gridquant::chunking::ChunkExtent;
use gridquant::grid::{AxisSpec, Grid, GridSpec, TimeSpec};
use gridquant::render::{extract_rank_slice, render_heatmap, HeatmapOptions};
use gridquant::statistics::{percentiles_over_dimension, PercentileRanks};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🔨 Generating the reference (501, 502, 1000) volume...");

    let grid = Grid::generate(&GridSpec {
        lat: AxisSpec::new(25.0, 50.0, 501),
        lon: AxisSpec::new(-125.0, -65.0, 502),
        time: TimeSpec::new(0, 1000),
    });
    println!("✅ Volume shape: {:?}", grid.volume.shape());

    let ranks = PercentileRanks::new(vec![50.0, 80.0, 90.0, 95.0, 99.0, 99.5, 99.9])?;
    let result = percentiles_over_dimension(&grid, "time", ranks, "lat", ChunkExtent::Whole)?;
    println!("✅ Percentile result shape: {:?}", result.data.shape());

    let median = extract_rank_slice(&result.data, 0)?;
    println!(
        "   Median at the grid center: {} (expected 499.5 everywhere)",
        median[[250, 251]]
    );

    let options = HeatmapOptions {
        color_scale: (0.0, 999.0),
        title: format!("{} (rank 50)", result.name),
        ..HeatmapOptions::default()
    };
    render_heatmap(
        &median,
        &grid.lat,
        &grid.lon,
        &options,
        std::path::Path::new("reference_percentiles.png"),
    )?;
    println!("✅ Saved heat map to reference_percentiles.png");

    Ok(())
}
