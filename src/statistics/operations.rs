//! Core percentile operation types and traits
//!
//! This module defines the fundamental types and traits for percentile reductions.

use crate::chunking::ChunkSpec;
use crate::errors::{GridQuantError, Result};
use ndarray::ArrayD;

/// An ordered, validated set of percentile ranks.
///
/// Order is preserved: the ranks define the result's leading axis. Every rank
/// must be finite and within `[0, 100]`.
#[derive(Debug, Clone, PartialEq)]
pub struct PercentileRanks(Vec<f64>);

impl PercentileRanks {
    /// Validate a user-supplied rank sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if the sequence is empty or any rank falls outside
    /// the `[0, 100]` domain (NaN and infinities included).
    pub fn new(ranks: Vec<f64>) -> Result<Self> {
        if ranks.is_empty() {
            return Err(GridQuantError::StatisticsError(
                "at least one percentile rank is required".to_string(),
            ));
        }
        for &rank in &ranks {
            if !rank.is_finite() || !(0.0..=100.0).contains(&rank) {
                return Err(GridQuantError::RankOutOfRange { rank });
            }
        }
        Ok(Self(ranks))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }
}

/// Result of a chunked percentile reduction
#[derive(Debug)]
pub struct PercentileResult {
    /// Percentile values, rank axis leading
    pub data: ArrayD<f64>,
    /// The ranks, in the order they appear along the leading axis
    pub ranks: PercentileRanks,
    /// Dimension that was reduced over
    pub reduced_dimension: String,
    /// Names of remaining dimensions after reduction
    pub remaining_dimensions: Vec<String>,
    /// Derived name for the result volume
    pub name: String,
}

impl PercentileResult {
    /// Get the shape of the result data
    #[must_use]
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Get the number of dimensions in the result
    #[must_use]
    pub fn ndim(&self) -> usize {
        self.data.ndim()
    }
}

/// Trait for types that can perform chunked percentile reductions along an axis
pub trait PercentileReduction {
    /// Compute percentiles along `axis`, chunk-partitioned per `chunks`,
    /// with the rank axis prepended to the result.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The reduction axis is out of bounds for the array
    /// - The reduction axis has zero length
    /// - The chunk axis is out of bounds or equals the reduction axis
    fn percentiles_along_axis(
        &self,
        axis: usize,
        ranks: &PercentileRanks,
        chunks: &ChunkSpec,
    ) -> Result<ArrayD<f64>>;
}

impl PercentileReduction for ArrayD<f64> {
    fn percentiles_along_axis(
        &self,
        axis: usize,
        ranks: &PercentileRanks,
        chunks: &ChunkSpec,
    ) -> Result<ArrayD<f64>> {
        super::parallel::chunked_percentile_axis(self.view(), axis, ranks, chunks)
    }
}
