//! Entry point for the GridQuant application.
//! Handles CLI parsing, grid generation, and dispatches the percentile
//! reduction and presentation steps.

use clap::Parser;
use gridquant::chunking::ChunkExtent;
use gridquant::cli::Args;
use gridquant::grid::{Grid, GridSpec};
use gridquant::metadata::{compute_volume_summary, print_grid_metadata, write_json_report};
use gridquant::parallel::{get_parallel_info, ParallelConfig};
use gridquant::render::{extract_rank_slice, render_heatmap, HeatmapOptions};
use gridquant::statistics::{percentiles_over_dimension, PercentileRanks};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args = Args::parse();

    println!(
        r#"
------------------------------------------------------------------
              ____      _     _  ___                   _
             / ___|_ __(_) __| |/ _ \ _   _  __ _ _ __ | |_
            | |  _| '__| |/ _` | | | | | | |/ _` | '_ \| __|
            | |_| | |  | | (_| | |_| | |_| | (_| | | | | |_
             \____|_|  |_|\__,_|\__\_\\__,_|\__,_|_| |_|\__|
                    Rust-based grid percentile tool
------------------------------------------------------------------
                        "#
    );

    // Configure the worker pool before any computation
    ParallelConfig::new(args.threads).setup_global_pool()?;
    if args.verbose {
        get_parallel_info().print_info();
    }

    // Generate the synthetic grid
    let spec = GridSpec {
        lat: args.lat,
        lon: args.lon,
        time: args.time,
    };
    let grid = Grid::generate(&spec);
    println!("✅ Generated synthetic volume with shape: {:?}", grid.volume.shape());

    if args.verbose {
        print_grid_metadata(&grid);
    }

    if args.mesh {
        let mesh = grid.mesh()?;
        println!(
            " Mesh shapes: lat {:?}, lon {:?}, time {:?}",
            mesh.lat.shape(),
            mesh.lon.shape(),
            mesh.time.shape()
        );
    }

    // Chunked percentile reduction
    let ranks = PercentileRanks::new(args.ranks.clone())?;
    let extent = ChunkExtent::from_sentinel(args.chunk_size)?;
    let result = percentiles_over_dimension(&grid, &args.reduce_dim, ranks, &args.chunk_dim, extent)?;
    println!(
        "✅ Computed '{}' with shape: {:?}",
        result.name,
        result.data.shape()
    );

    if args.verbose {
        compute_volume_summary(result.data.view()).print(&result.name);
    }

    if let Some(path) = &args.summary_json {
        write_json_report(&result, path)?;
        println!("✅ Saved summary report to {}", path.display());
    }

    if let Some(path) = &args.output_png {
        let slice = extract_rank_slice(&result.data, args.rank_index)?;
        let default_scale = (0.0, grid.time.len().saturating_sub(1) as f64);
        let options = HeatmapOptions {
            color_scale: args.color_scale.unwrap_or(default_scale),
            title: format!(
                "{} (rank {})",
                result.name,
                result.ranks.as_slice()[args.rank_index]
            ),
            ..HeatmapOptions::default()
        };
        render_heatmap(&slice, &grid.lat, &grid.lon, &options, path)?;
        println!("✅ Saved heat map to {}", path.display());
    }

    Ok(())
}
