// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Dirty-image synthesis.
//!
//! An interferometer measures the sky's Fourier transform only where its
//! baselines sample the UV plane. Multiplying the transform of the apparent sky
//! (the sky attenuated by the primary beam) by the gridded sampling function
//! and transforming back gives the "dirty" observation; this is the sky
//! convolved with the "dirty beam", the transform of the sampling function
//! alone.

mod error;
mod fft;

pub use error::ImagingError;
pub use fft::{fftshift, ifftshift, sky2uv, uv2sky};

use log::{debug, trace};
use ndarray::prelude::*;
use rand::{rngs::StdRng, SeedableRng};
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use crate::{
    beam::Beam,
    constants::DEFAULT_FOV_DEG,
    coord::UV,
    gridding::{grid_uv_samples, GridSpec, MaskType, UvGrid},
    math::c64,
};

/// Settings for [`simulate_dirty_observation`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImagingConfig {
    /// The field of view of the sky model along both axes [degrees].
    pub fov_deg: f64,

    /// How UV samples are combined onto the grid.
    pub mask_type: MaskType,

    /// The standard deviation of the Gaussian noise added to the real and
    /// imaginary parts of each UV cell. Zero means no noise.
    pub noise_sigma: f64,

    /// The seed of the noise generator. If this is `None`, the generator is
    /// seeded from entropy, and results are not reproducible.
    pub seed: Option<u64>,
}

impl Default for ImagingConfig {
    fn default() -> Self {
        ImagingConfig {
            fov_deg: DEFAULT_FOV_DEG,
            mask_type: MaskType::default(),
            noise_sigma: 0.0,
            seed: None,
        }
    }
}

/// The outputs of [`simulate_dirty_observation`]. Both images have the shape
/// of the sky model.
#[derive(Debug, Clone)]
pub struct DirtyObservation {
    /// The apparent sky as seen through the UV sampling.
    pub observation: Array2<f64>,

    /// The point-spread function of the UV sampling.
    pub dirty_beam: Array2<f64>,

    /// The gridded UV sampling function used.
    pub uv_grid: UvGrid,
}

/// Simulate observing `sky` with the UV samples `uvs`.
///
/// The samples are gridded at the sky's resolution (the grid shape is the sky
/// shape, and the field of view is `config.fov_deg` on both axes). If a beam
/// is given, its intensity pattern must have the same shape as the sky.
/// `weights` are only needed with [`MaskType::Weighted`].
pub fn simulate_dirty_observation(
    sky: ArrayView2<f64>,
    uvs: &[UV],
    weights: Option<&[f64]>,
    beam: Option<&dyn Beam>,
    config: &ImagingConfig,
) -> Result<DirtyObservation, ImagingError> {
    if !(config.noise_sigma.is_finite() && config.noise_sigma >= 0.0) {
        return Err(ImagingError::InvalidNoiseSigma(config.noise_sigma));
    }

    let spec = GridSpec::new(sky.dim(), (config.fov_deg, config.fov_deg))?;
    let uv_grid = grid_uv_samples(uvs, spec, config.mask_type, weights)?;
    debug!(
        "{} of {} UV cells are sampled",
        uv_grid.num_filled_cells(),
        uv_grid.grid.len()
    );

    let dirty_beam = uv2sky(uv_grid.grid.view()).mapv(|v| v.re);

    let apparent_sky = match beam {
        Some(beam) => {
            let intensity = beam.intensity(sky.nrows(), config.fov_deg);
            if intensity.dim() != sky.dim() {
                return Err(ImagingError::ShapeMismatch {
                    what: "beam intensity pattern",
                    expected: sky.dim(),
                    got: intensity.dim(),
                });
            }
            trace!("Attenuating the sky with a {} beam", beam.beam_type());
            &sky * &intensity
        }
        None => sky.to_owned(),
    };

    let mut visibilities = sky2uv(apparent_sky.view());
    visibilities
        .iter_mut()
        .zip(uv_grid.grid.iter())
        .for_each(|(vis, &sampling)| *vis *= sampling);
    if config.noise_sigma > 0.0 {
        add_noise(&mut visibilities, config.noise_sigma, config.seed)?;
    }
    let observation = uv2sky(visibilities.view()).mapv(|v| v.re);

    Ok(DirtyObservation {
        observation,
        dirty_beam,
        uv_grid,
    })
}

/// Add zero-mean complex Gaussian noise to every cell. The real and imaginary
/// parts are drawn independently.
fn add_noise(
    visibilities: &mut Array2<c64>,
    sigma: f64,
    seed: Option<u64>,
) -> Result<(), ImagingError> {
    let normal = Normal::new(0.0, sigma).map_err(|_| ImagingError::InvalidNoiseSigma(sigma))?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    debug!("Adding noise with σ = {sigma} (seed: {seed:?})");
    for vis in visibilities.iter_mut() {
        let re = normal.sample(&mut rng);
        let im = normal.sample(&mut rng);
        *vis += c64::new(re, im);
    }
    Ok(())
}
