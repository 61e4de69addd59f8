//! Defines command-line interface options using `clap` for the GridQuant application.

use crate::grid::{AxisSpec, TimeSpec};
use clap::Parser;
use std::path::PathBuf;

/// A CLI tool for chunked percentile statistics over synthetic grids
#[derive(Parser, Debug)]
#[command(
    version = "0.3.0",
    name = "GridQuant",
    about = "App for computing chunked percentile statistics over gridded data"
)]
pub struct Args {
    /// Latitude axis, formatted as <start>:<stop>:<count>
    #[arg(long, value_parser = parse_axis_arg, default_value = "25:50:501", allow_hyphen_values = true)]
    pub lat: AxisSpec,

    /// Longitude axis, formatted as <start>:<stop>:<count>
    #[arg(long, value_parser = parse_axis_arg, default_value = "-125:-65:502", allow_hyphen_values = true)]
    pub lon: AxisSpec,

    /// Time axis, formatted as <start>:<stop> (unit steps)
    #[arg(long, value_parser = parse_time_arg, default_value = "0:1000", allow_hyphen_values = true)]
    pub time: TimeSpec,

    /// Percentile ranks for the reduction, comma separated
    #[arg(long, value_delimiter = ',', default_value = "50,80,90,95,99,99.5,99.9")]
    pub ranks: Vec<f64>,

    /// Dimension to reduce over
    #[arg(long, default_value = "time")]
    pub reduce_dim: String,

    /// Dimension to chunk for parallel execution
    #[arg(long, default_value = "lat")]
    pub chunk_dim: String,

    /// Chunk size along the chunked dimension; -1 keeps the axis in one piece
    #[arg(long, default_value_t = -1, allow_hyphen_values = true)]
    pub chunk_size: i64,

    /// Index into the percentile-rank axis for the rendered slice
    #[arg(long, default_value_t = 0)]
    pub rank_index: usize,

    /// Path to save the heat map as PNG. If not set, no image is rendered.
    #[arg(long)]
    pub output_png: Option<PathBuf>,

    /// Path to save a JSON summary report of the reduction result.
    #[arg(long)]
    pub summary_json: Option<PathBuf>,

    /// Fixed color-scale bounds for the heat map, formatted as <lo>:<hi>.
    /// Defaults to [0, time_count - 1].
    #[arg(long, value_parser = parse_scale_arg, allow_hyphen_values = true)]
    pub color_scale: Option<(f64, f64)>,

    /// Print the coordinate mesh shapes.
    #[arg(long, default_value_t = false)]
    pub mesh: bool,

    /// Enable verbose output.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Number of threads to use for parallel processing. Defaults to number of CPU cores.
    #[arg(short = 't', long)]
    pub threads: Option<usize>,
}

fn parse_axis_arg(s: &str) -> Result<AxisSpec, String> {
    let parts: Vec<&str> = s.split(':').collect();
    match parts.as_slice() {
        [start, stop, count] => {
            let start = start
                .trim()
                .parse::<f64>()
                .map_err(|_| format!("Invalid axis start '{}'", start))?;
            let stop = stop
                .trim()
                .parse::<f64>()
                .map_err(|_| format!("Invalid axis stop '{}'", stop))?;
            let count = count
                .trim()
                .parse::<usize>()
                .map_err(|_| format!("Invalid axis count '{}'", count))?;
            Ok(AxisSpec::new(start, stop, count))
        }
        _ => Err("Invalid format: Expected '<start>:<stop>:<count>'.".to_string()),
    }
}

fn parse_time_arg(s: &str) -> Result<TimeSpec, String> {
    let parts: Vec<&str> = s.split(':').collect();
    match parts.as_slice() {
        [start, stop] => {
            let start = start
                .trim()
                .parse::<i64>()
                .map_err(|_| format!("Invalid time start '{}'", start))?;
            let stop = stop
                .trim()
                .parse::<i64>()
                .map_err(|_| format!("Invalid time stop '{}'", stop))?;
            Ok(TimeSpec::new(start, stop))
        }
        _ => Err("Invalid format: Expected '<start>:<stop>'.".to_string()),
    }
}

fn parse_scale_arg(s: &str) -> Result<(f64, f64), String> {
    let parts: Vec<&str> = s.split(':').collect();
    match parts.as_slice() {
        [lo, hi] => {
            let lo = lo
                .trim()
                .parse::<f64>()
                .map_err(|_| format!("Invalid scale bound '{}'", lo))?;
            let hi = hi
                .trim()
                .parse::<f64>()
                .map_err(|_| format!("Invalid scale bound '{}'", hi))?;
            if hi <= lo {
                return Err(format!("Scale upper bound {} must exceed lower bound {}", hi, lo));
            }
            Ok((lo, hi))
        }
        _ => Err("Invalid format: Expected '<lo>:<hi>'.".to_string()),
    }
}
