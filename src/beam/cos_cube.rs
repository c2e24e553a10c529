// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use ndarray::prelude::*;

use super::{check_positive, radial_angles_deg, Beam, BeamError, BeamType};
use crate::constants::FRAC_PI_2;

/// The default scale of the cos³ beam's argument [radians per degree per GHz].
pub const DEFAULT_COS_CUBE_C: f64 = 0.2;

/// The default frequency of the cos³ beam [GHz].
pub const DEFAULT_COS_CUBE_FREQ_GHZ: f64 = 1.0;

/// A beam with the voltage pattern `cos³(c f θ)`, where `θ` is the angle from
/// the beam centre [degrees] and `f` is a frequency [GHz]. The intensity is
/// the square of the voltage, and is zero beyond the first null.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CosCubeBeam {
    c: f64,
    freq_ghz: f64,
}

impl CosCubeBeam {
    pub fn new(c: f64, freq_ghz: f64) -> Result<CosCubeBeam, BeamError> {
        Ok(CosCubeBeam {
            c: check_positive("c", c)?,
            freq_ghz: check_positive("freq_ghz", freq_ghz)?,
        })
    }

    /// The angle of the first null from the beam centre [degrees].
    pub fn first_null_deg(&self) -> f64 {
        FRAC_PI_2 / (self.c * self.freq_ghz)
    }

    fn voltage(&self, theta_deg: f64) -> f64 {
        let arg = self.c * self.freq_ghz * theta_deg;
        if arg >= FRAC_PI_2 {
            0.0
        } else {
            arg.cos().powi(3)
        }
    }
}

impl Default for CosCubeBeam {
    fn default() -> Self {
        CosCubeBeam {
            c: DEFAULT_COS_CUBE_C,
            freq_ghz: DEFAULT_COS_CUBE_FREQ_GHZ,
        }
    }
}

impl Beam for CosCubeBeam {
    fn beam_type(&self) -> BeamType {
        BeamType::CosCube
    }

    fn intensity(&self, num_pixels: usize, fov_deg: f64) -> Array2<f64> {
        radial_angles_deg(num_pixels, fov_deg).mapv(|theta| self.voltage(theta).powi(2))
    }
}
