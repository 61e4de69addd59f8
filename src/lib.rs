//! GridQuant: synthetic grid generation and chunked percentile statistics
//!
//! A Rust library for generating synthetic 3-D grids (latitude × longitude ×
//! time) and computing percentile statistics along one axis with chunked
//! parallel execution, plus heat-map rendering of the results.
//!
//! ## Key Features
//!
//! - **Parallel Processing**: Chunk-level and lane-level fan-out using Rayon
//! - **Percentile Reduction**: Linear-interpolation percentiles over any dimension
//! - **Chunk Invariance**: Chunking partitions the work, never the result
//! - **Grid Inspection**: Metadata printing and summary statistics
//! - **Presentation**: Viridis heat-map PNG output and JSON summary reports
//!
//! ## Module Organization
//!
//! The library is organized into logical modules:
//!
//! - [`grid`]: Synthetic grid and coordinate mesh generation
//! - [`chunking`]: Chunk descriptors and axis partitioning
//! - [`statistics`]: Percentile computations and chunked parallel reductions
//! - [`render`]: Rank-slice extraction and heat-map rendering
//! - [`metadata`]: Grid/result inspection and JSON reports
//! - [`parallel`]: Parallel processing configuration
//! - [`errors`]: Centralized error handling
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use gridquant::prelude::*;
//! use gridquant::grid::{AxisSpec, Grid, GridSpec, TimeSpec};
//!
//! // Generate a synthetic grid: value at every point equals its time index
//! let grid = Grid::generate(&GridSpec {
//!     lat: AxisSpec::new(25.0, 50.0, 501),
//!     lon: AxisSpec::new(-125.0, -65.0, 502),
//!     time: TimeSpec::new(0, 1000),
//! });
//!
//! // Compute percentiles over the time dimension, one chunk per 100 rows
//! let ranks = PercentileRanks::new(vec![50.0, 99.9]).unwrap();
//! let result = gridquant::statistics::percentiles_over_dimension(
//!     &grid,
//!     "time",
//!     ranks,
//!     "lat",
//!     ChunkExtent::Size(100),
//! )
//! .unwrap();
//! assert_eq!(result.data.shape(), &[2, 501, 502]);
//! ```
//!
//! The library is designed for deterministic batch computation: a run either
//! completes or fails fast with a structured error.

// Core modules
pub mod chunking;
pub mod cli;
pub mod errors;
pub mod grid;
pub mod metadata;
pub mod parallel;
pub mod render;
pub mod statistics;

// Direct re-exports for the public API
pub use chunking::*;
pub use errors::*;
pub use grid::*;
pub use metadata::*;
pub use parallel::*;
pub use render::*;
pub use statistics::*;

// High-level convenience API
pub mod prelude {
    //! Commonly used imports for convenience
    pub use crate::chunking::{ChunkExtent, ChunkSpec};
    pub use crate::errors::{GridQuantError, Result};
    pub use crate::grid::{AxisSpec, Grid, GridSpec, Mesh, TimeSpec};
    pub use crate::metadata::{compute_volume_summary, VolumeSummary};
    pub use crate::parallel::ParallelConfig;
    pub use crate::render::{extract_rank_slice, render_heatmap, HeatmapOptions};
    pub use crate::statistics::{PercentileRanks, PercentileReduction, PercentileResult};
}

// Backwards compatibility re-exports
#[deprecated(
    since = "0.3.0",
    note = "Use the modular API instead: `statistics::parallel::chunked_percentile_axis`"
)]
pub use crate::statistics::parallel::chunked_percentile_axis as reduce_percentiles;

#[deprecated(
    since = "0.3.0",
    note = "Use the modular API instead: `metadata::compute_volume_summary`"
)]
pub use crate::metadata::compute_volume_summary as summarize_volume;
