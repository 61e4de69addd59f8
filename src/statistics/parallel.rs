//! Parallel computation implementations for percentile reductions
//!
//! This module contains the actual computation logic: per-chunk percentile
//! reduction over lanes of the reduction axis, fanned out over the Rayon
//! worker pool and reassembled in chunk order.

use crate::chunking::ChunkSpec;
use crate::errors::{GridQuantError, Result};
use crate::statistics::operations::PercentileRanks;
use ndarray::{ArrayD, ArrayViewD, Axis, IxDyn, Slice};
use rayon::prelude::*;

/// Linear-interpolation percentile of a sorted, non-empty lane: the value at
/// interpolated position `(rank / 100) * (n - 1)`.
fn interpolated_rank(sorted: &[f64], rank: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    let position = rank / 100.0 * (n - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;

    if lower == upper {
        sorted[lower]
    } else {
        let weight = position - lower as f64;
        sorted[lower] * (1.0 - weight) + sorted[upper] * weight
    }
}

/// Computes percentiles along an axis of a single chunk using parallel processing
///
/// Each lane along the reduction axis is gathered, sorted, and evaluated at
/// every rank. A lane containing NaN reduces to NaN for every rank. The
/// result has the rank axis prepended: shape `(rank_count, *kept-dims*)`.
///
/// The caller is responsible for axis validation; this function assumes a
/// valid, non-empty reduction axis.
///
/// # Errors
///
/// Returns an error if the output array cannot be assembled.
pub fn percentile_axis_view(
    data: &ArrayViewD<'_, f64>,
    axis: usize,
    ranks: &PercentileRanks,
) -> Result<ArrayD<f64>> {
    let shape = data.shape().to_vec();
    let axis_len = shape[axis];

    let mut kept = shape.clone();
    kept.remove(axis);
    let lane_count: usize = kept.iter().product();
    let rank_count = ranks.len();

    // One sorted lane per output position, evaluated at every rank
    let lanes: Vec<Vec<f64>> = (0..lane_count)
        .into_par_iter()
        .map(|flat_idx| {
            // Convert flat index back to multi-dimensional coordinates,
            // skipping the axis we're reducing over
            let mut coords = vec![0; shape.len()];
            let mut remaining = flat_idx;

            let mut kept_idx = 0;
            for dim_idx in 0..shape.len() {
                if dim_idx != axis {
                    let stride: usize = kept[kept_idx + 1..].iter().product();
                    coords[dim_idx] = remaining / stride;
                    remaining %= stride;
                    kept_idx += 1;
                }
            }

            let mut lane = Vec::with_capacity(axis_len);
            for i in 0..axis_len {
                coords[axis] = i;
                lane.push(data[coords.as_slice()]);
            }

            // NaN anywhere in the lane poisons every rank for this position
            if lane.iter().any(|v| v.is_nan()) {
                return vec![f64::NAN; rank_count];
            }

            lane.sort_by(f64::total_cmp);
            ranks
                .iter()
                .map(|rank| interpolated_rank(&lane, rank))
                .collect()
        })
        .collect();

    // Assemble with the rank axis leading
    let mut out_shape = Vec::with_capacity(kept.len() + 1);
    out_shape.push(rank_count);
    out_shape.extend_from_slice(&kept);

    let mut values = Vec::with_capacity(rank_count * lane_count);
    for r in 0..rank_count {
        for lane in &lanes {
            values.push(lane[r]);
        }
    }

    Ok(ArrayD::from_shape_vec(IxDyn(&out_shape), values)?)
}

/// Computes percentiles along an axis, chunk-partitioned for parallel execution
///
/// The chunk axis is split per the chunk specification; every chunk is an
/// independent task with no cross-chunk communication, mapped over the Rayon
/// pool. The per-chunk results are concatenated along the chunked dimension
/// in original chunk order, so the chunk size never affects the numeric
/// result.
///
/// # Errors
///
/// Returns an error if:
/// - the reduction axis is out of bounds or has zero length
/// - the chunk axis is out of bounds or equals the reduction axis
pub fn chunked_percentile_axis(
    data: ArrayViewD<'_, f64>,
    axis: usize,
    ranks: &PercentileRanks,
    chunks: &ChunkSpec,
) -> Result<ArrayD<f64>> {
    let ndim = data.ndim();
    if axis >= ndim {
        return Err(GridQuantError::AxisOutOfRange { axis, ndim });
    }
    if data.shape()[axis] == 0 {
        return Err(GridQuantError::EmptyReductionAxis { axis });
    }
    if chunks.axis >= ndim {
        return Err(GridQuantError::InvalidChunk {
            message: format!(
                "chunk axis {} is out of bounds for array with {} dimensions",
                chunks.axis, ndim
            ),
        });
    }
    if chunks.axis == axis {
        return Err(GridQuantError::InvalidChunk {
            message: format!(
                "chunk axis {} must differ from the reduction axis",
                chunks.axis
            ),
        });
    }

    let spans = chunks.partition(data.shape()[chunks.axis]);
    if spans.is_empty() {
        // The chunked axis is empty: the result is empty along it
        let mut out_shape = data.shape().to_vec();
        out_shape.remove(axis);
        out_shape.insert(0, ranks.len());
        return Ok(ArrayD::zeros(IxDyn(&out_shape)));
    }

    println!(
        "⚡ Reducing {} chunk(s) across {} CPU cores",
        spans.len(),
        rayon::current_num_threads()
    );

    let pieces: Vec<ArrayD<f64>> = spans
        .into_par_iter()
        .map(|span| {
            let chunk = data.slice_axis(Axis(chunks.axis), Slice::from(span));
            percentile_axis_view(&chunk, axis, ranks)
        })
        .collect::<Result<Vec<_>>>()?;

    // The chunked dimension's position in the output: the reduction axis is
    // gone and the rank axis is prepended
    let out_axis = if chunks.axis < axis {
        chunks.axis + 1
    } else {
        chunks.axis
    };

    let views: Vec<_> = pieces.iter().map(|piece| piece.view()).collect();
    ndarray::concatenate(Axis(out_axis), &views).map_err(GridQuantError::from)
}
