//! Grid-volume percentile entry points
//!
//! This module resolves dimension names against the grid layout and drives
//! the chunked reducer over the synthetic data volume.

use crate::chunking::{ChunkExtent, ChunkSpec};
use crate::errors::Result;
use crate::grid::{Grid, DIMENSION_NAMES};
use crate::statistics::operations::{PercentileRanks, PercentileResult};

/// Computes percentiles over a named dimension of the grid's volume.
///
/// `dim_name` selects the reduction axis and `chunk_dim` the axis that is
/// partitioned for parallel execution; both must name grid dimensions and
/// must differ. The returned result carries the data (rank axis leading),
/// the ranks, and the surviving dimension names.
pub fn percentiles_over_dimension(
    grid: &Grid,
    dim_name: &str,
    ranks: PercentileRanks,
    chunk_dim: &str,
    extent: ChunkExtent,
) -> Result<PercentileResult> {
    let axis_index = grid.axis_index(dim_name)?;
    let chunk_axis = grid.axis_index(chunk_dim)?;
    let chunks = ChunkSpec {
        axis: chunk_axis,
        extent,
    };

    println!(
        "⚡ Computing {} percentile rank(s) over dimension '{}'",
        ranks.len(),
        dim_name
    );

    let data = crate::statistics::parallel::chunked_percentile_axis(
        grid.volume.view().into_dyn(),
        axis_index,
        &ranks,
        &chunks,
    )?;

    let remaining_dimensions: Vec<String> = DIMENSION_NAMES
        .iter()
        .enumerate()
        .filter_map(|(i, name)| {
            if i != axis_index {
                Some((*name).to_string())
            } else {
                None
            }
        })
        .collect();

    let name = format!("volume_percentiles_over_{dim_name}");

    Ok(PercentileResult {
        data,
        ranks,
        reduced_dimension: dim_name.to_string(),
        remaining_dimensions,
        name,
    })
}
