// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Bin continuous UV samples onto a regular grid.
//!
//! The grid's UV cell size follows from the sampling theorem: an image with a
//! field of view of `FOV` radians has UV cells `1 / FOV` wavelengths wide, so
//! a grid of `N` cells spans `±N / (2 FOV)` wavelengths. The zero spacing lies
//! on cell `N / 2` of each axis, matching the layout used by
//! [`crate::imaging::sky2uv`]. Samples beyond the grid's extent are an error;
//! they are never clipped or wrapped.

mod error;

pub use error::GridError;

use std::str::FromStr;

use itertools::Itertools;
use log::{debug, trace};
use ndarray::prelude::*;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::{coord::UV, math::round_to_isize};

lazy_static::lazy_static! {
    pub(crate) static ref MASK_TYPES_COMMA_SEPARATED: String = MaskType::iter().join(", ");
}

/// How samples landing in the same grid cell are combined.
#[derive(Debug, Display, EnumIter, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaskType {
    /// A cell is 1 if any sample lands in it, otherwise 0.
    #[strum(serialize = "binary")]
    Binary,

    /// A cell holds the number of samples landing in it.
    #[strum(serialize = "histogram")]
    Histogram,

    /// A cell holds the sum of the weights of the samples landing in it.
    #[strum(serialize = "weighted")]
    Weighted,
}

impl Default for MaskType {
    fn default() -> Self {
        MaskType::Binary
    }
}

impl FromStr for MaskType {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MaskType::iter()
            .find(|mt| mt.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GridError::InvalidMaskType(s.to_string()))
    }
}

/// The shape and field of view of a grid. `shape` is (rows, columns), i.e.
/// (Ny, Nx), and `fov_deg` is (FOVy, FOVx) [degrees].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    shape: (usize, usize),
    fov_deg: (f64, f64),
}

impl GridSpec {
    pub fn new(shape: (usize, usize), fov_deg: (f64, f64)) -> Result<GridSpec, GridError> {
        if shape.0 == 0 || shape.1 == 0 {
            return Err(GridError::InvalidGridSpec(format!(
                "the grid shape {shape:?} has a zero-length axis"
            )));
        }
        if !(fov_deg.0.is_finite() && fov_deg.1.is_finite() && fov_deg.0 > 0.0 && fov_deg.1 > 0.0)
        {
            return Err(GridError::InvalidGridSpec(format!(
                "the field of view {fov_deg:?} must be positive"
            )));
        }
        Ok(GridSpec { shape, fov_deg })
    }

    /// A square grid with the same field of view on both axes.
    pub fn square(num_pixels: usize, fov_deg: f64) -> Result<GridSpec, GridError> {
        Self::new((num_pixels, num_pixels), (fov_deg, fov_deg))
    }

    pub fn shape(&self) -> (usize, usize) {
        self.shape
    }

    pub fn fov_deg(&self) -> (f64, f64) {
        self.fov_deg
    }

    /// The UV cell sizes (Δu, Δv) [wavelengths].
    pub fn cell_size(&self) -> (f64, f64) {
        (
            1.0 / self.fov_deg.1.to_radians(),
            1.0 / self.fov_deg.0.to_radians(),
        )
    }

    /// The largest representable |u| and |v| [wavelengths]; half the Nyquist
    /// sampling rate implied by the pixel size.
    pub fn max_uv(&self) -> (f64, f64) {
        let (du, dv) = self.cell_size();
        let (ny, nx) = self.shape;
        (nx as f64 * du / 2.0, ny as f64 * dv / 2.0)
    }

    /// The (row, column) of the cell containing a UV sample, if the sample is
    /// within the grid's extent.
    pub fn cell_index(&self, uv: UV) -> Option<(usize, usize)> {
        let (max_u, max_v) = self.max_uv();
        if !(uv.u.abs() <= max_u && uv.v.abs() <= max_v) {
            return None;
        }
        let (du, dv) = self.cell_size();
        let (ny, nx) = self.shape;
        let col = round_to_isize(uv.u / du)? + (nx / 2) as isize;
        let row = round_to_isize(uv.v / dv)? + (ny / 2) as isize;
        // A sample right on the positive edge may round one past the end.
        if (0..nx as isize).contains(&col) && (0..ny as isize).contains(&row) {
            Some((row as usize, col as usize))
        } else {
            None
        }
    }
}

/// The result of gridding: the populated grid and the cell each sample
/// landed in (in sample order).
#[derive(Debug, Clone, PartialEq)]
pub struct UvGrid {
    pub grid: Array2<f64>,
    pub indices: Vec<(usize, usize)>,
    pub spec: GridSpec,
}

impl UvGrid {
    /// The number of cells that are non-zero.
    pub fn num_filled_cells(&self) -> usize {
        self.grid.iter().filter(|&&c| c != 0.0).count()
    }
}

/// Grid UV samples. `weights` are only used (and then required) with
/// [`MaskType::Weighted`], and must have one weight per sample.
///
/// Every sample is validated before any cell is written; a single sample
/// outside the grid's extent fails the whole call.
pub fn grid_uv_samples(
    uvs: &[UV],
    spec: GridSpec,
    mask_type: MaskType,
    weights: Option<&[f64]>,
) -> Result<UvGrid, GridError> {
    let weights = match (mask_type, weights) {
        (MaskType::Weighted, None) => return Err(GridError::MissingWeights),
        (MaskType::Weighted, Some(w)) if w.len() != uvs.len() => {
            return Err(GridError::WeightsLengthMismatch {
                weights: w.len(),
                samples: uvs.len(),
            })
        }
        (_, w) => w,
    };

    let indices = cell_indices(uvs, spec)?;
    let grid = match (mask_type, weights) {
        (MaskType::Binary, _) => grid_binary(&indices, spec.shape),
        (MaskType::Histogram, _) => grid_histogram(&indices, spec.shape),
        (MaskType::Weighted, Some(weights)) => grid_weighted(&indices, weights, spec.shape),
        (MaskType::Weighted, None) => return Err(GridError::MissingWeights),
    };

    Ok(UvGrid {
        grid,
        indices,
        spec,
    })
}

/// Find the cell of every sample, failing on the first one out of range.
fn cell_indices(uvs: &[UV], spec: GridSpec) -> Result<Vec<(usize, usize)>, GridError> {
    let (du, dv) = spec.cell_size();
    let (max_u, max_v) = spec.max_uv();
    debug!(
        "Gridding {} UV samples onto a {:?} grid; cell size {du:.3} λ x {dv:.3} λ, extent ±{max_u:.3} λ x ±{max_v:.3} λ",
        uvs.len(),
        spec.shape,
    );

    uvs.iter()
        .enumerate()
        .map(|(index, &uv)| {
            spec.cell_index(uv).ok_or_else(|| {
                trace!("Sample {index} ({uv:?}) is out of range");
                GridError::SampleOutOfRange {
                    index,
                    u: uv.u,
                    v: uv.v,
                    max_u,
                    max_v,
                }
            })
        })
        .collect()
}

fn grid_binary(indices: &[(usize, usize)], shape: (usize, usize)) -> Array2<f64> {
    let mut grid = Array2::zeros(shape);
    for &index in indices {
        grid[index] = 1.0;
    }
    grid
}

fn grid_histogram(indices: &[(usize, usize)], shape: (usize, usize)) -> Array2<f64> {
    let mut grid = Array2::zeros(shape);
    for &index in indices {
        grid[index] += 1.0;
    }
    grid
}

fn grid_weighted(indices: &[(usize, usize)], weights: &[f64], shape: (usize, usize)) -> Array2<f64> {
    let mut grid = Array2::zeros(shape);
    for (&index, &weight) in indices.iter().zip(weights) {
        grid[index] += weight;
    }
    grid
}
