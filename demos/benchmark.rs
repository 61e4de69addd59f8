//! Simple benchmark example showing the performance effect of chunked
//! parallel percentile reduction.
//!
//! This example compares the single-chunk sentinel run against multi-chunk
//! execution over the same synthetic volume.

use gridquant::chunking::ChunkExtent;
use gridquant::grid::{AxisSpec, Grid, GridSpec, TimeSpec};
use gridquant::statistics::{percentiles_over_dimension, PercentileRanks};
use std::time::Instant;

fn timed_reduction(grid: &Grid, extent: ChunkExtent, label: &str) -> f64 {
    let ranks = PercentileRanks::new(vec![50.0, 95.0, 99.9]).expect("valid ranks");

    let start = Instant::now();
    let result =
        percentiles_over_dimension(grid, "time", ranks, "lat", extent).expect("reduction failed");
    let duration = start.elapsed().as_secs_f64();

    println!("   {} result shape: {:?}", label, result.data.shape());
    duration
}

fn main() {
    println!("🔬 GridQuant Chunked Reduction Benchmark");
    println!("==========================================\n");

    let available_threads = rayon::current_num_threads();
    println!(
        "System has {} logical CPU cores available\n",
        available_threads
    );

    let grid_sizes = vec![(101, 102, 500), (201, 202, 500), (301, 302, 500)];

    for (nlat, nlon, ntime) in grid_sizes {
        println!("📊 Testing with a ({}, {}, {}) volume:", nlat, nlon, ntime);
        println!("-------------------------------------------");

        let grid = Grid::generate(&GridSpec {
            lat: AxisSpec::new(25.0, 50.0, nlat),
            lon: AxisSpec::new(-125.0, -65.0, nlon),
            time: TimeSpec::new(0, ntime),
        });

        println!("🐌 Single chunk (sentinel -1):");
        let whole_time = timed_reduction(&grid, ChunkExtent::Whole, "whole-axis");
        println!("   ⏱️  Duration: {:.3} seconds\n", whole_time);

        let chunk_size = (nlat / available_threads.max(1)).max(1);
        println!("⚡ {}-row chunks across {} threads:", chunk_size, available_threads);
        let chunked_time =
            timed_reduction(&grid, ChunkExtent::Size(chunk_size), "chunked");
        println!("   ⏱️  Duration: {:.3} seconds", chunked_time);

        let speedup = whole_time / chunked_time;
        println!("   🚀 Speedup: {:.2}x\n", speedup);
        println!("=========================================\n");
    }

    println!("💡 Key Takeaways:");
    println!("   - Chunking never changes the numbers, only the schedule");
    println!("   - Use --threads in GridQuant to control parallelism");
    println!("   - Optimal chunk size depends on your CPU and volume shape");
}
