//! Grid and result inspection
//!
//! This module provides functions for examining the generated grid's
//! structure, computing summary statistics over data volumes, and writing a
//! JSON report of a reduction result.

use crate::errors::{GridQuantError, Result};
use crate::grid::Grid;
use crate::statistics::PercentileResult;
use chrono::Utc;
use ndarray::ArrayViewD;
use serde_json::json;
use std::fs;
use std::path::Path;

/// Summary statistics of a data volume, computed over finite values only.
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeSummary {
    pub shape: Vec<usize>,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std_dev: f64,
    pub valid_count: usize,
    pub total_count: usize,
}

/// Prints the grid's dimensions, coordinate ranges, and volume shape.
pub fn print_grid_metadata(grid: &Grid) {
    println!("\n===== Grid =====");
    print_axis("lat", grid.lat.as_slice().unwrap_or(&[]));
    print_axis("lon", grid.lon.as_slice().unwrap_or(&[]));
    print_axis("time", grid.time.as_slice().unwrap_or(&[]));
    println!("- volume shape: {:?}", grid.volume.shape());
}

fn print_axis(name: &str, values: &[f64]) {
    match (values.first(), values.last()) {
        (Some(first), Some(last)) => {
            println!("- {}[{}]: {} .. {}", name, values.len(), first, last);
        }
        _ => println!("- {}[0]: (empty)", name),
    }
}

/// Computes summary statistics (min/max/mean/std) over the finite values of
/// a volume. An all-NaN or empty volume yields NaN statistics.
pub fn compute_volume_summary(data: ArrayViewD<'_, f64>) -> VolumeSummary {
    let total_count = data.len();

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    let mut valid_count = 0usize;

    for &value in data.iter() {
        if value.is_finite() {
            min = min.min(value);
            max = max.max(value);
            sum += value;
            valid_count += 1;
        }
    }

    let (min, max, mean, std_dev) = if valid_count > 0 {
        let mean = sum / valid_count as f64;
        let variance = data
            .iter()
            .filter(|v| v.is_finite())
            .map(|&v| (v - mean).powi(2))
            .sum::<f64>()
            / valid_count as f64;
        (min, max, mean, variance.sqrt())
    } else {
        (f64::NAN, f64::NAN, f64::NAN, f64::NAN)
    };

    VolumeSummary {
        shape: data.shape().to_vec(),
        min,
        max,
        mean,
        std_dev,
        valid_count,
        total_count,
    }
}

impl VolumeSummary {
    /// Display the summary in the terminal.
    pub fn print(&self, name: &str) {
        println!("\n Summary for: {}", name);
        println!("================================");
        println!("   Shape: {:?}", self.shape);
        println!("   Min: {}", self.min);
        println!("   Max: {}", self.max);
        println!("   Mean: {:.4}", self.mean);
        println!("   Std Dev: {:.4}", self.std_dev);
        println!("   Valid elements: {} / {}", self.valid_count, self.total_count);
    }

    /// The summary as a JSON value.
    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "shape": self.shape,
            "min": self.min,
            "max": self.max,
            "mean": self.mean,
            "std_dev": self.std_dev,
            "valid_count": self.valid_count,
            "total_count": self.total_count,
        })
    }
}

/// Writes a JSON report of a reduction result: ranks, dimensions, shape, and
/// summary statistics, stamped with the creation time.
pub fn write_json_report(result: &PercentileResult, path: &Path) -> Result<()> {
    let summary = compute_volume_summary(result.data.view());

    let report = json!({
        "name": result.name,
        "ranks": result.ranks.as_slice(),
        "reduced_dimension": result.reduced_dimension,
        "remaining_dimensions": result.remaining_dimensions,
        "shape": result.data.shape(),
        "summary": summary.to_json(),
        "created": Utc::now().to_rfc3339(),
    });

    let body = serde_json::to_string_pretty(&report)
        .map_err(|e| GridQuantError::Generic(format!("JSON serialization error: {}", e)))?;
    fs::write(path, body)?;

    Ok(())
}
