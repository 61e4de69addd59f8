//! Heat-map rendering of percentile slices
//!
//! This module extracts one percentile-rank slice from a reduction result and
//! renders it as a pseudo-color PNG: a viridis-mapped cell grid with
//! longitude/latitude axes drawn from the coordinate arrays and a color-bar
//! legend on the right.

use crate::errors::{GridQuantError, Result};
use colorgrad::Gradient;
use ndarray::{Array1, ArrayD, ArrayView2, Axis};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

/// Options controlling heat-map output.
#[derive(Debug, Clone)]
pub struct HeatmapOptions {
    pub width: u32,
    pub height: u32,
    /// Fixed color-scale bounds `(lo, hi)`; values outside are clamped.
    pub color_scale: (f64, f64),
    pub title: String,
}

impl Default for HeatmapOptions {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            color_scale: (0.0, 1.0),
            title: String::new(),
        }
    }
}

/// Extracts the 2-D slice at `rank_index` along the result's leading axis.
///
/// # Errors
///
/// Returns an error if the result is not 3-D or the index is out of range.
pub fn extract_rank_slice(result: &ArrayD<f64>, rank_index: usize) -> Result<ArrayView2<'_, f64>> {
    if result.ndim() != 3 {
        return Err(GridQuantError::ShapeMismatch {
            message: format!(
                "expected a 3-D result (rank, lat, lon), got {} dimensions",
                result.ndim()
            ),
        });
    }

    let count = result.shape()[0];
    if rank_index >= count {
        return Err(GridQuantError::RankIndexOutOfRange {
            index: rank_index,
            count,
        });
    }

    let slice = result.index_axis(Axis(0), rank_index);
    slice
        .into_dimensionality::<ndarray::Ix2>()
        .map_err(GridQuantError::from)
}

/// Renders a 2-D slice as a pseudo-color heat map PNG.
///
/// The slice's rows are labelled by `lat` and its columns by `lon`; each cell
/// owns one filled rectangle colored through a viridis gradient normalized to
/// the fixed color scale. NaN cells are drawn gray.
///
/// # Errors
///
/// Returns an error if the coordinate lengths do not match the slice shape,
/// the slice is empty, the color scale is inverted, or drawing fails.
pub fn render_heatmap(
    slice: &ArrayView2<'_, f64>,
    lat: &Array1<f64>,
    lon: &Array1<f64>,
    options: &HeatmapOptions,
    output_path: &Path,
) -> Result<()> {
    let (nlat, nlon) = slice.dim();
    if lat.len() != nlat || lon.len() != nlon {
        return Err(GridQuantError::ShapeMismatch {
            message: format!(
                "coordinate lengths (lat {}, lon {}) do not match slice shape ({}, {})",
                lat.len(),
                lon.len(),
                nlat,
                nlon
            ),
        });
    }
    if nlat == 0 || nlon == 0 {
        return Err(GridQuantError::RenderError(
            "cannot render an empty slice".to_string(),
        ));
    }

    let (vmin, vmax) = options.color_scale;
    if !(vmax > vmin) {
        return Err(GridQuantError::RenderError(format!(
            "invalid color scale [{}, {}]",
            vmin, vmax
        )));
    }

    let root =
        BitMapBackend::new(output_path, (options.width, options.height)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| GridQuantError::RenderError(e.to_string()))?;

    // Reserve a strip on the right for the color bar
    let (main, legend) = root.split_horizontally(options.width as i32 - 110);

    let (lon_min, lon_max) = axis_bounds(lon);
    let (lat_min, lat_max) = axis_bounds(lat);

    let mut chart = ChartBuilder::on(&main)
        .caption(&options.title, ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(lon_min..lon_max, lat_min..lat_max)
        .map_err(|e| GridQuantError::RenderError(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Longitude")
        .y_desc("Latitude")
        .x_labels(8)
        .y_labels(8)
        .draw()
        .map_err(|e| GridQuantError::RenderError(e.to_string()))?;

    let gradient = colorgrad::preset::viridis();

    chart
        .draw_series(
            (0..nlat)
                .flat_map(|i| (0..nlon).map(move |j| (i, j)))
                .map(|(i, j)| {
                    let color = map_color(&gradient, slice[[i, j]], vmin, vmax);
                    let (x0, x1) = cell_edges(lon, j, lon_min, lon_max);
                    let (y0, y1) = cell_edges(lat, i, lat_min, lat_max);
                    Rectangle::new([(x0, y0), (x1, y1)], color.filled())
                }),
        )
        .map_err(|e| GridQuantError::RenderError(e.to_string()))?;

    draw_color_bar(&legend, &gradient, vmin, vmax)?;

    root.present()
        .map_err(|e| GridQuantError::RenderError(e.to_string()))?;

    Ok(())
}

/// Map a value to an RGB color through the gradient, normalized to
/// `[vmin, vmax]`. Non-finite values map to gray.
fn map_color<G: Gradient>(gradient: &G, value: f64, vmin: f64, vmax: f64) -> RGBColor {
    if !value.is_finite() {
        return RGBColor(189, 189, 189);
    }
    let t = ((value - vmin) / (vmax - vmin)).clamp(0.0, 1.0) as f32;
    let color = gradient.at(t);
    RGBColor(
        (color.r * 255.0) as u8,
        (color.g * 255.0) as u8,
        (color.b * 255.0) as u8,
    )
}

/// Outer bounds of an axis, extending half a step beyond the end samples so
/// every cell has equal extent.
fn axis_bounds(coords: &Array1<f64>) -> (f64, f64) {
    let n = coords.len();
    if n == 1 {
        (coords[0] - 0.5, coords[0] + 0.5)
    } else {
        let first_step = coords[1] - coords[0];
        let last_step = coords[n - 1] - coords[n - 2];
        (
            coords[0] - 0.5 * first_step,
            coords[n - 1] + 0.5 * last_step,
        )
    }
}

/// Edges of the cell owned by sample `k`: midpoints toward its neighbors, or
/// the axis bound at the ends.
fn cell_edges(coords: &Array1<f64>, k: usize, lo: f64, hi: f64) -> (f64, f64) {
    let n = coords.len();
    let left = if k == 0 {
        lo
    } else {
        0.5 * (coords[k - 1] + coords[k])
    };
    let right = if k + 1 == n {
        hi
    } else {
        0.5 * (coords[k] + coords[k + 1])
    };
    (left, right)
}

fn draw_color_bar<DB: DrawingBackend, G: Gradient>(
    area: &DrawingArea<DB, Shift>,
    gradient: &G,
    vmin: f64,
    vmax: f64,
) -> Result<()> {
    let mut chart = ChartBuilder::on(area)
        .margin(10)
        .y_label_area_size(50)
        .build_cartesian_2d(0.0..1.0, vmin..vmax)
        .map_err(|e| GridQuantError::RenderError(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .disable_x_axis()
        .y_labels(6)
        .draw()
        .map_err(|e| GridQuantError::RenderError(e.to_string()))?;

    let steps = 128;
    let span = vmax - vmin;
    chart
        .draw_series((0..steps).map(|s| {
            let lo = vmin + span * s as f64 / steps as f64;
            let hi = vmin + span * (s + 1) as f64 / steps as f64;
            let color = map_color(gradient, 0.5 * (lo + hi), vmin, vmax);
            Rectangle::new([(0.0, lo), (1.0, hi)], color.filled())
        }))
        .map_err(|e| GridQuantError::RenderError(e.to_string()))?;

    Ok(())
}
