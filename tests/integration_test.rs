use gridquant::chunking::ChunkExtent;
use gridquant::grid::{AxisSpec, Grid, GridSpec, TimeSpec};
use gridquant::metadata::write_json_report;
use gridquant::render::{extract_rank_slice, render_heatmap, HeatmapOptions};
use gridquant::statistics::{percentiles_over_dimension, PercentileRanks};
use tempfile::tempdir;

#[test]
fn test_generate_reduce_present_pipeline() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let png_path = temp_dir.path().join("percentile_slice.png");
    let report_path = temp_dir.path().join("percentile_report.json");

    // A scaled replica of the reference run: same axes, same rank set,
    // smaller counts so the pipeline stays fast
    let grid = Grid::generate(&GridSpec {
        lat: AxisSpec::new(25.0, 50.0, 51),
        lon: AxisSpec::new(-125.0, -65.0, 52),
        time: TimeSpec::new(0, 100),
    });
    assert_eq!(grid.shape(), (51, 52, 100));

    let ranks = PercentileRanks::new(vec![50.0, 80.0, 90.0, 95.0, 99.0, 99.5, 99.9])
        .expect("valid rank set");
    let result = percentiles_over_dimension(&grid, "time", ranks, "lat", ChunkExtent::Size(8))
        .expect("reduction should succeed");

    // Shape contract: rank axis leads, spatial dims survive
    assert_eq!(result.data.shape(), &[7, 51, 52]);
    assert_eq!(result.remaining_dimensions, vec!["lat", "lon"]);

    // The 50th percentile of the run 0..99 is 49.5 at every spatial position
    let median = extract_rank_slice(&result.data, 0).expect("rank 0 exists");
    assert!(median.iter().all(|&v| v == 49.5));

    // The 99.9th percentile matches the interpolation formula everywhere
    let tail = extract_rank_slice(&result.data, 6).expect("rank 6 exists");
    let expected = 99.9 / 100.0 * 99.0;
    assert!(tail.iter().all(|&v| (v - expected).abs() < 1e-9));

    // Chunking is a performance partition only: the single-chunk sentinel
    // run agrees exactly
    let ranks = PercentileRanks::new(vec![50.0, 80.0, 90.0, 95.0, 99.0, 99.5, 99.9])
        .expect("valid rank set");
    let unchunked = percentiles_over_dimension(&grid, "time", ranks, "lat", ChunkExtent::Whole)
        .expect("reduction should succeed");
    assert_eq!(result.data, unchunked.data);

    // Present: heat map PNG plus JSON report
    let options = HeatmapOptions {
        width: 640,
        height: 480,
        color_scale: (0.0, 99.0),
        title: result.name.clone(),
    };
    render_heatmap(&median, &grid.lat, &grid.lon, &options, &png_path)
        .expect("rendering should succeed");
    assert!(png_path.exists());
    assert!(std::fs::metadata(&png_path).expect("png metadata").len() > 0);

    write_json_report(&result, &report_path).expect("report should be written");
    let report: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(&report_path).expect("report should be readable"),
    )
    .expect("report should be valid JSON");
    assert_eq!(report["shape"], serde_json::json!([7, 51, 52]));

    println!("✅ Integration test passed: generate → reduce → present pipeline works end to end!");
}

// Full-size reference run: ~2 GB volume, quarter-million sorted lanes.
// Run explicitly with `cargo test --release -- --ignored`.
#[test]
#[ignore]
fn test_reference_run_shape_contract() {
    let grid = Grid::generate(&GridSpec {
        lat: AxisSpec::new(25.0, 50.0, 501),
        lon: AxisSpec::new(-125.0, -65.0, 502),
        time: TimeSpec::new(0, 1000),
    });
    assert_eq!(grid.shape(), (501, 502, 1000));

    let ranks = PercentileRanks::new(vec![50.0, 80.0, 90.0, 95.0, 99.0, 99.5, 99.9])
        .expect("valid rank set");
    let result = percentiles_over_dimension(&grid, "time", ranks, "lat", ChunkExtent::Whole)
        .expect("reduction should succeed");

    assert_eq!(result.data.shape(), &[7, 501, 502]);

    // result[0] is the constant 499.5 everywhere
    let median = extract_rank_slice(&result.data, 0).expect("rank 0 exists");
    assert!(median.iter().all(|&v| v == 499.5));
}
