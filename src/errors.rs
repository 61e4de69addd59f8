//! Centralized error handling for GridQuant
//!
//! This module provides structured error types to replace the generic `Box<dyn Error>`
//! used in early prototypes, enabling better error context and type safety.

use std::fmt;

/// Main error type for GridQuant operations
#[derive(Debug)]
pub enum GridQuantError {
    /// Statistics computation errors
    StatisticsError(String),

    /// Percentile rank outside the valid [0, 100] domain
    RankOutOfRange { rank: f64 },

    /// Requested percentile-rank index beyond the result's leading axis
    RankIndexOutOfRange { index: usize, count: usize },

    /// Reduction axis index beyond the array's rank
    AxisOutOfRange { axis: usize, ndim: usize },

    /// Reduction axis has zero length
    EmptyReductionAxis { axis: usize },

    /// Invalid chunk specification
    InvalidChunk { message: String },

    /// Dimension name not known to the grid
    DimensionNotFound { dim: String },

    /// Coordinate arrays do not match the data they label
    ShapeMismatch { message: String },

    /// Heat-map rendering errors
    RenderError(String),

    /// I/O operation errors
    IoError(std::io::Error),

    /// Thread pool configuration error
    ThreadPoolError(String),

    /// Array shape or dimension error
    ArrayError(ndarray::ShapeError),

    /// Generic error for backward compatibility
    Generic(String),
}

impl fmt::Display for GridQuantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridQuantError::StatisticsError(msg) => {
                write!(f, "Statistics computation error: {}", msg)
            }
            GridQuantError::RankOutOfRange { rank } => {
                write!(f, "Percentile rank {} is outside the valid range [0, 100]", rank)
            }
            GridQuantError::RankIndexOutOfRange { index, count } => {
                write!(
                    f,
                    "Rank index {} is out of range for a result with {} percentile ranks",
                    index, count
                )
            }
            GridQuantError::AxisOutOfRange { axis, ndim } => {
                write!(f, "Axis {} is out of bounds for array with {} dimensions", axis, ndim)
            }
            GridQuantError::EmptyReductionAxis { axis } => {
                write!(f, "Cannot reduce along axis {}: the axis has zero length", axis)
            }
            GridQuantError::InvalidChunk { message } => {
                write!(f, "Invalid chunk specification: {}", message)
            }
            GridQuantError::DimensionNotFound { dim } => {
                write!(f, "Dimension '{}' not found in grid", dim)
            }
            GridQuantError::ShapeMismatch { message } => {
                write!(f, "Shape mismatch: {}", message)
            }
            GridQuantError::RenderError(msg) => write!(f, "Rendering error: {}", msg),
            GridQuantError::IoError(e) => write!(f, "I/O error: {}", e),
            GridQuantError::ThreadPoolError(msg) => write!(f, "Thread pool error: {}", msg),
            GridQuantError::ArrayError(e) => write!(f, "Array error: {}", e),
            GridQuantError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for GridQuantError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GridQuantError::IoError(e) => Some(e),
            GridQuantError::ArrayError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GridQuantError {
    fn from(error: std::io::Error) -> Self {
        GridQuantError::IoError(error)
    }
}

impl From<ndarray::ShapeError> for GridQuantError {
    fn from(error: ndarray::ShapeError) -> Self {
        GridQuantError::ArrayError(error)
    }
}

impl From<String> for GridQuantError {
    fn from(error: String) -> Self {
        GridQuantError::Generic(error)
    }
}

impl From<&str> for GridQuantError {
    fn from(error: &str) -> Self {
        GridQuantError::Generic(error.to_string())
    }
}

/// Result type alias for GridQuant operations
pub type Result<T> = std::result::Result<T, GridQuantError>;
