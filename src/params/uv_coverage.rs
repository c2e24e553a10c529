// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Report how an array's UV track fills a grid.

use log::{info, warn};

use crate::{
    array::AntennaArray,
    gridding::{grid_uv_samples, GridError, GridSpec, MaskType, UvGrid},
    track::{uv_track_multiband, ObservationGeometry, UvTrack},
};

/// Parameters needed to make and grid a UV track.
pub(crate) struct UvCoverageParams {
    pub(crate) array: AntennaArray,

    pub(crate) geometry: ObservationGeometry,

    /// The grid the track is binned onto. This is also the image's pixel
    /// layout.
    pub(crate) grid_spec: GridSpec,

    pub(crate) mask_type: MaskType,
}

/// What [`UvCoverageParams::run`] found.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct UvCoverageSummary {
    pub(crate) num_baselines: usize,
    pub(crate) num_samples: usize,
    pub(crate) num_filled_cells: usize,
    /// The largest |u| and |v| of the track [wavelengths].
    pub(crate) max_abs_uv: (f64, f64),
    /// The largest |u| and |v| the grid can hold [wavelengths].
    pub(crate) nyquist_extent: (f64, f64),
}

impl UvCoverageParams {
    pub(crate) fn track(&self) -> UvTrack {
        uv_track_multiband(&self.array.baselines(), &self.geometry)
    }

    /// Warn if a track doesn't fit on the grid; gridding it will fail.
    pub(crate) fn check_extent(&self, track: &UvTrack) {
        let (max_u, max_v) = track.max_abs_uv();
        let (extent_u, extent_v) = self.grid_spec.max_uv();
        if max_u > extent_u || max_v > extent_v {
            warn!(
                "The UV track reaches ({max_u:.1}, {max_v:.1}) λ, beyond the grid's extent of (±{extent_u:.1}, ±{extent_v:.1}) λ"
            );
        }
    }

    pub(crate) fn grid(&self, track: &UvTrack) -> Result<UvGrid, GridError> {
        self.check_extent(track);
        grid_uv_samples(track.uvs(), self.grid_spec, self.mask_type, None)
    }

    pub(crate) fn run(&self) -> Result<UvCoverageSummary, GridError> {
        let track = self.track();
        let grid = self.grid(&track)?;

        let summary = UvCoverageSummary {
            num_baselines: track.num_baselines(),
            num_samples: track.len(),
            num_filled_cells: grid.num_filled_cells(),
            max_abs_uv: track.max_abs_uv(),
            nyquist_extent: self.grid_spec.max_uv(),
        };

        let (ny, nx) = self.grid_spec.shape();
        let (du, dv) = self.grid_spec.cell_size();
        info!(
            "{} baselines x {} time steps x {} channels = {} UV samples",
            summary.num_baselines,
            track.num_times(),
            track.num_channels(),
            summary.num_samples
        );
        info!(
            "{} of {} UV cells filled ({:.2}%), {} mask",
            summary.num_filled_cells,
            nx * ny,
            100.0 * summary.num_filled_cells as f64 / (nx * ny) as f64,
            self.mask_type
        );
        info!("UV cell size: {du:.3} λ x {dv:.3} λ");
        info!(
            "Track extent: |u| <= {:.3} λ, |v| <= {:.3} λ",
            summary.max_abs_uv.0, summary.max_abs_uv.1
        );
        info!(
            "Nyquist extent: |u| <= {:.3} λ, |v| <= {:.3} λ",
            summary.nyquist_extent.0, summary.nyquist_extent.1
        );

        Ok(summary)
    }
}
