// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use ndarray::prelude::*;

use super::{check_positive, radial_angles_deg, Beam, BeamError, BeamType};
use crate::constants::FWHM_FACTOR;

/// A circular Gaussian intensity pattern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianBeam {
    fwhm_deg: f64,
}

impl GaussianBeam {
    pub fn new(fwhm_deg: f64) -> Result<GaussianBeam, BeamError> {
        Ok(GaussianBeam {
            fwhm_deg: check_positive("fwhm_deg", fwhm_deg)?,
        })
    }

    pub fn fwhm_deg(&self) -> f64 {
        self.fwhm_deg
    }
}

impl Beam for GaussianBeam {
    fn beam_type(&self) -> BeamType {
        BeamType::Gaussian
    }

    fn intensity(&self, num_pixels: usize, fov_deg: f64) -> Array2<f64> {
        let sigma = self.fwhm_deg / FWHM_FACTOR;
        let a = 1.0 / (2.0 * sigma * sigma);
        radial_angles_deg(num_pixels, fov_deg).mapv(|theta| (-a * theta * theta).exp())
    }
}
