// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Handle UVW coordinates.
 */

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::{hadec::HADec, xyz::XyzBaseline};

/// The (u,v,w) coordinates of a baseline [metres].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UVW {
    /// u-coordinate
    pub u: f64,
    /// v-coordinate
    pub v: f64,
    /// w-coordinate
    pub w: f64,
}

impl UVW {
    /// Convert an [`XyzBaseline`] to [`UVW`], given the hour angle and
    /// declination of the phase centre.
    ///
    /// This is Equation 4.1 of: Interferometry and Synthesis in Radio
    /// Astronomy, Third Edition, Section 4: Geometrical Relationships,
    /// Polarimetry, and the Measurement Equation.
    pub fn from_xyz(xyz: XyzBaseline, phase_centre: HADec) -> Self {
        let (s_ha, c_ha) = phase_centre.ha.sin_cos();
        let (s_dec, c_dec) = phase_centre.dec.sin_cos();
        Self::from_xyz_inner(xyz, s_ha, c_ha, s_dec, c_dec)
    }

    /// Convert all [`XyzBaseline`]s to [`UVW`], given the phase centre.
    /// Processing is done in parallel on the CPU.
    pub fn get_baselines(xyz: &[XyzBaseline], phase_centre: HADec) -> Vec<Self> {
        let (s_ha, c_ha) = phase_centre.ha.sin_cos();
        let (s_dec, c_dec) = phase_centre.dec.sin_cos();
        xyz.par_iter()
            .map(|&l| Self::from_xyz_inner(l, s_ha, c_ha, s_dec, c_dec))
            .collect()
    }

    #[inline]
    fn from_xyz_inner(xyz: XyzBaseline, s_ha: f64, c_ha: f64, s_dec: f64, c_dec: f64) -> Self {
        Self {
            u: s_ha * xyz.x + c_ha * xyz.y,
            v: -s_dec * c_ha * xyz.x + s_dec * s_ha * xyz.y + c_dec * xyz.z,
            w: c_dec * c_ha * xyz.x - c_dec * s_ha * xyz.y + s_dec * xyz.z,
        }
    }

    /// Drop the w term.
    pub fn uv(self) -> UV {
        UV {
            u: self.u,
            v: self.v,
        }
    }
}

/// A sample on the UV plane. Units are wavelengths.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UV {
    pub u: f64,
    pub v: f64,
}

impl UV {
    pub fn new(u: f64, v: f64) -> UV {
        UV { u, v }
    }

    /// The distance of this sample from the UV-plane origin.
    pub fn length(self) -> f64 {
        self.u.hypot(self.v)
    }
}

impl std::ops::Mul<f64> for UV {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        UV {
            u: self.u * rhs,
            v: self.v * rhs,
        }
    }
}
