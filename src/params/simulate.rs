// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Simulate a dirty observation of a sky model and measure how well it
//! reproduces the sky.

use log::{debug, info, warn};
use ndarray::prelude::*;
use thiserror::Error;

use super::UvCoverageParams;
use crate::{
    beam::Beam,
    constants::DEFAULT_MASKING_FACTOR,
    imaging::{simulate_dirty_observation, DirtyObservation, ImagingConfig, ImagingError},
    metrics::{compute_metrics, compute_sll, crop_centre, estimate_fwhm, Metrics, MetricsError},
    sky::SkyModel,
};

/// Parameters needed to simulate a dirty observation.
pub(crate) struct SimulateParams {
    /// The array, observation and grid.
    pub(crate) coverage: UvCoverageParams,

    pub(crate) sky_model: Box<dyn SkyModel>,

    /// Interface to beam code.
    pub(crate) beam: Box<dyn Beam>,

    /// The standard deviation of the noise added to each UV cell.
    pub(crate) noise_sigma: f64,

    pub(crate) seed: Option<u64>,

    /// The fraction of each image axis (about the centre) compared when
    /// computing the MSE.
    pub(crate) crop_fraction: f64,
}

/// What [`SimulateParams::run`] found.
#[derive(Debug, Clone)]
pub(crate) struct SimulationSummary {
    pub(crate) num_filled_cells: usize,

    /// The dirty beam's FWHM along x (columns) and y (rows) [pixels].
    pub(crate) dirty_beam_fwhm: (f64, f64),

    /// [dB]
    pub(crate) side_lobe_level: f64,

    /// The comparison of the central sky with the peak-normalised observation.
    /// Not available if the central sky is empty.
    pub(crate) metrics: Option<Metrics>,
}

impl SimulateParams {
    pub(crate) fn simulate(&self) -> Result<(Array2<f64>, DirtyObservation), ImagingError> {
        let track = self.coverage.track();
        self.coverage.check_extent(&track);

        let spec = self.coverage.grid_spec;
        let (_, fov_deg) = spec.fov_deg();
        let sky = self.sky_model.brightness(spec.shape(), fov_deg);
        let config = ImagingConfig {
            fov_deg,
            mask_type: self.coverage.mask_type,
            noise_sigma: self.noise_sigma,
            seed: self.seed,
        };
        let dirty = simulate_dirty_observation(
            sky.view(),
            track.uvs(),
            None,
            Some(self.beam.as_ref()),
            &config,
        )?;
        Ok((sky, dirty))
    }

    pub(crate) fn run(&self) -> Result<SimulationSummary, SimulateError> {
        let (sky, dirty) = self.simulate()?;
        let DirtyObservation {
            observation,
            dirty_beam,
            uv_grid,
        } = dirty;

        let (ny, nx) = dirty_beam.dim();
        let dirty_beam_fwhm = estimate_fwhm(dirty_beam.view())?;
        let side_lobe_level = compute_sll(
            dirty_beam.view(),
            (ny / 2, nx / 2),
            dirty_beam_fwhm.0,
            dirty_beam_fwhm.1,
            DEFAULT_MASKING_FACTOR,
        )?;

        let metrics = compare(sky.view(), observation.view(), self.crop_fraction)?;

        let summary = SimulationSummary {
            num_filled_cells: uv_grid.num_filled_cells(),
            dirty_beam_fwhm,
            side_lobe_level,
            metrics,
        };

        info!(
            "{} of {} UV cells filled",
            summary.num_filled_cells,
            uv_grid.grid.len()
        );
        info!(
            "Dirty beam FWHM: {:.2} x {:.2} pixels",
            summary.dirty_beam_fwhm.0, summary.dirty_beam_fwhm.1
        );
        info!("Side-lobe level: {:.2} dB", summary.side_lobe_level);
        if let Some(metrics) = &summary.metrics {
            info!("MSE: {:e}", metrics.mse);
            info!("Relative MSE: {:e}", metrics.rel_mse);
        }

        Ok(summary)
    }
}

/// Scale the observation to the sky's peak, then compare the central parts of
/// both images.
fn compare(
    sky: ArrayView2<f64>,
    observation: ArrayView2<f64>,
    crop_fraction: f64,
) -> Result<Option<Metrics>, MetricsError> {
    let peak = |image: ArrayView2<f64>| image.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let sky_peak = peak(sky);
    let obs_peak = peak(observation);
    if !(sky_peak > 0.0 && obs_peak > 0.0) {
        warn!("Not computing image metrics; the sky or the observation has no positive peak");
        return Ok(None);
    }
    debug!("Normalising the observation (peak {obs_peak}) to the sky's peak ({sky_peak})");
    let normalised = observation.mapv(|v| v * sky_peak / obs_peak);

    let sky_crop = crop_centre(sky, crop_fraction);
    let obs_crop = crop_centre(normalised.view(), crop_fraction);
    match compute_metrics(sky_crop, obs_crop) {
        Ok(m) => Ok(Some(m)),
        Err(MetricsError::ZeroReference) => {
            warn!("Not computing image metrics; the centre of the sky is empty");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

#[derive(Error, Debug)]
pub(crate) enum SimulateError {
    #[error(transparent)]
    Imaging(#[from] ImagingError),

    #[error(transparent)]
    Metrics(#[from] MetricsError),
}
