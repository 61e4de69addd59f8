//! Synthetic grid generation
//!
//! This module builds the coordinate axes and the synthetic data volume that
//! feed the percentile reducer: evenly spaced latitude/longitude axes, an
//! integer-stepped time axis, and a `(lat, lon, time)` volume whose value at
//! every point equals its index along the time axis.

use crate::errors::{GridQuantError, Result};
use ndarray::{Array1, Array3, Axis};

/// Names of the grid dimensions, in storage order.
pub const DIMENSION_NAMES: [&str; 3] = ["lat", "lon", "time"];

/// Specification of an evenly spaced coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSpec {
    pub start: f64,
    pub stop: f64,
    pub count: usize,
}

impl AxisSpec {
    pub fn new(start: f64, stop: f64, count: usize) -> Self {
        Self { start, stop, count }
    }

    /// Materialize the axis as `count` evenly spaced values with inclusive
    /// endpoints. A zero count yields an empty axis; a count of one yields
    /// just `start`.
    pub fn values(&self) -> Array1<f64> {
        Array1::linspace(self.start, self.stop, self.count)
    }
}

/// Specification of the integer-valued time axis: unit steps over `start..stop`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSpec {
    pub start: i64,
    pub stop: i64,
}

impl TimeSpec {
    pub fn new(start: i64, stop: i64) -> Self {
        Self { start, stop }
    }

    /// Number of time steps. An inverted range is empty, not an error.
    pub fn count(&self) -> usize {
        if self.stop > self.start {
            (self.stop - self.start) as usize
        } else {
            0
        }
    }

    pub fn values(&self) -> Array1<f64> {
        Array1::from_iter((self.start..self.stop.max(self.start)).map(|t| t as f64))
    }
}

/// Full specification of the synthetic grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    pub lat: AxisSpec,
    pub lon: AxisSpec,
    pub time: TimeSpec,
}

/// A generated grid: three coordinate axes plus the synthetic data volume.
///
/// Invariant: for every fixed `(lat, lon)` pair the time-axis lane of
/// `volume` is exactly the integer run `0..time_count`.
#[derive(Debug, Clone)]
pub struct Grid {
    pub lat: Array1<f64>,
    pub lon: Array1<f64>,
    pub time: Array1<f64>,
    pub volume: Array3<f64>,
}

/// Three same-shaped coordinate arrays, each broadcasting one axis's values
/// across the other two dimensions.
#[derive(Debug, Clone)]
pub struct Mesh {
    pub lat: Array3<f64>,
    pub lon: Array3<f64>,
    pub time: Array3<f64>,
}

impl Grid {
    /// Generate the coordinate axes and the synthetic volume.
    ///
    /// The value at time index `t` is `t`, broadcast over all `(lat, lon)`
    /// pairs and independent of the time axis's coordinate values.
    pub fn generate(spec: &GridSpec) -> Self {
        let lat = spec.lat.values();
        let lon = spec.lon.values();
        let time = spec.time.values();

        let mut volume = Array3::<f64>::zeros((lat.len(), lon.len(), time.len()));
        for (t, mut slab) in volume.axis_iter_mut(Axis(2)).enumerate() {
            slab.fill(t as f64);
        }

        Self {
            lat,
            lon,
            time,
            volume,
        }
    }

    /// Shape of the data volume as `(lat_count, lon_count, time_count)`.
    pub fn shape(&self) -> (usize, usize, usize) {
        let s = self.volume.shape();
        (s[0], s[1], s[2])
    }

    /// Resolve a dimension name to its axis index in the volume.
    pub fn axis_index(&self, dim_name: &str) -> Result<usize> {
        DIMENSION_NAMES
            .iter()
            .position(|d| *d == dim_name)
            .ok_or_else(|| GridQuantError::DimensionNotFound {
                dim: dim_name.to_string(),
            })
    }

    /// Build the coordinate mesh by broadcasting each 1-D axis across the
    /// full volume shape. Illustrative of the grid's geometry only; the
    /// reducer consumes the volume, not the mesh.
    pub fn mesh(&self) -> Result<Mesh> {
        let shape = (self.lat.len(), self.lon.len(), self.time.len());

        let lat = self
            .lat
            .view()
            .insert_axis(Axis(1))
            .insert_axis(Axis(2))
            .broadcast(shape)
            .ok_or_else(|| GridQuantError::ShapeMismatch {
                message: format!("cannot broadcast lat axis to {:?}", shape),
            })?
            .to_owned();

        let lon = self
            .lon
            .view()
            .insert_axis(Axis(0))
            .insert_axis(Axis(2))
            .broadcast(shape)
            .ok_or_else(|| GridQuantError::ShapeMismatch {
                message: format!("cannot broadcast lon axis to {:?}", shape),
            })?
            .to_owned();

        let time = self
            .time
            .view()
            .insert_axis(Axis(0))
            .insert_axis(Axis(1))
            .broadcast(shape)
            .ok_or_else(|| GridQuantError::ShapeMismatch {
                message: format!("cannot broadcast time axis to {:?}", shape),
            })?
            .to_owned();

        Ok(Mesh { lat, lon, time })
    }
}
