// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Sky models.
//!
//! A [`SkyModel`] produces a brightness image given a pixel shape and a field
//! of view. Source positions are offsets (l, m) from the image centre
//! [degrees]; l increases with the column index and m with the row index.

mod error;

pub use error::SkyError;

use log::debug;
use ndarray::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::{constants::FWHM_FACTOR, math::round_to_isize};

/// The fraction of the field of view (along each axis) within which random
/// sources are placed.
const RANDOM_SOURCE_EXTENT: f64 = 0.8;

/// A trait abstracting sky models.
pub trait SkyModel: Sync + Send {
    /// The sky brightness over an image of `shape` (rows, columns) pixels,
    /// spanning `fov_deg` degrees along each axis.
    fn brightness(&self, shape: (usize, usize), fov_deg: f64) -> Array2<f64>;
}

/// A circular Gaussian source. A FWHM of 0 makes this a point source, which
/// lands entirely on the nearest pixel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaussianSource {
    /// Offset from the image centre along the columns [degrees].
    pub l_deg: f64,

    /// Offset from the image centre along the rows [degrees].
    pub m_deg: f64,

    /// [degrees]
    pub fwhm_deg: f64,

    /// The peak brightness.
    pub intensity: f64,
}

impl GaussianSource {
    pub fn new(
        l_deg: f64,
        m_deg: f64,
        fwhm_deg: f64,
        intensity: f64,
    ) -> Result<GaussianSource, SkyError> {
        let source = GaussianSource {
            l_deg,
            m_deg,
            fwhm_deg,
            intensity,
        };
        source.validate()?;
        Ok(source)
    }

    /// Check that the source is sensible. Sources read from an arguments file
    /// skip [`GaussianSource::new`], so this is separately available.
    pub fn validate(&self) -> Result<(), SkyError> {
        for (name, value) in [
            ("l", self.l_deg),
            ("m", self.m_deg),
            ("intensity", self.intensity),
        ] {
            if !value.is_finite() {
                return Err(SkyError::NonFinite { name, value });
            }
        }
        if !(self.fwhm_deg.is_finite() && self.fwhm_deg >= 0.0) {
            return Err(SkyError::InvalidFwhm(self.fwhm_deg));
        }
        Ok(())
    }

    /// Add this source's brightness to an image.
    fn add_to(&self, mut image: ArrayViewMut2<f64>, fov_deg: f64) {
        let (ny, nx) = image.dim();
        if nx == 0 || ny == 0 {
            return;
        }
        let pix_x_deg = fov_deg / nx as f64;
        let pix_y_deg = fov_deg / ny as f64;
        // The source position in (fractional) pixels.
        let x0 = (nx / 2) as f64 + self.l_deg / pix_x_deg;
        let y0 = (ny / 2) as f64 + self.m_deg / pix_y_deg;

        if self.fwhm_deg == 0.0 {
            if let (Some(c), Some(r)) = (round_to_isize(x0), round_to_isize(y0)) {
                if (0..nx as isize).contains(&c) && (0..ny as isize).contains(&r) {
                    image[(r as usize, c as usize)] += self.intensity;
                }
            }
            return;
        }

        let sigma_deg = self.fwhm_deg / FWHM_FACTOR;
        let a = 1.0 / (2.0 * sigma_deg * sigma_deg);
        image.indexed_iter_mut().for_each(|((r, c), b)| {
            let dl = (c as f64 - x0) * pix_x_deg;
            let dm = (r as f64 - y0) * pix_y_deg;
            *b += self.intensity * (-a * (dl * dl + dm * dm)).exp();
        });
    }
}

impl SkyModel for GaussianSource {
    fn brightness(&self, shape: (usize, usize), fov_deg: f64) -> Array2<f64> {
        let mut image = Array2::zeros(shape);
        self.add_to(image.view_mut(), fov_deg);
        image
    }
}

/// A collection of sources. Brightnesses add.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceSky {
    pub sources: Vec<GaussianSource>,
}

impl SourceSky {
    pub fn new(sources: Vec<GaussianSource>) -> Result<SourceSky, SkyError> {
        for source in &sources {
            source.validate()?;
        }
        Ok(SourceSky { sources })
    }

    /// A sky with one source per (size, intensity) pair, placed uniformly at
    /// random within the central 80% of the field of view.
    pub fn random(
        fov_deg: f64,
        sizes_deg: &[f64],
        intensities: &[f64],
        seed: Option<u64>,
    ) -> Result<SourceSky, SkyError> {
        if sizes_deg.len() != intensities.len() {
            return Err(SkyError::LengthMismatch {
                sizes: sizes_deg.len(),
                intensities: intensities.len(),
            });
        }
        if !(fov_deg.is_finite() && fov_deg > 0.0) {
            return Err(SkyError::InvalidFov(fov_deg));
        }

        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let half_extent = RANDOM_SOURCE_EXTENT * fov_deg / 2.0;
        let sources = sizes_deg
            .iter()
            .zip(intensities)
            .map(|(&fwhm_deg, &intensity)| {
                let l_deg = rng.gen_range(-half_extent..=half_extent);
                let m_deg = rng.gen_range(-half_extent..=half_extent);
                GaussianSource::new(l_deg, m_deg, fwhm_deg, intensity)
            })
            .collect::<Result<Vec<_>, _>>()?;
        debug!("Generated {} random sources", sources.len());
        Ok(SourceSky { sources })
    }
}

impl SkyModel for SourceSky {
    fn brightness(&self, shape: (usize, usize), fov_deg: f64) -> Array2<f64> {
        let mut image = Array2::zeros(shape);
        for source in &self.sources {
            source.add_to(image.view_mut(), fov_deg);
        }
        image
    }
}
