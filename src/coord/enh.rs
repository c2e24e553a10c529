// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Handle East, North and Height coordinates (typically associated with antennas
or baselines in a local tangent plane).
*/

use serde::{Deserialize, Serialize};

use super::xyz::XyzBaseline;

/// East, North and Height coordinates. All units are in metres.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ENH {
    /// East [metres]
    pub e: f64,
    /// North [metres]
    pub n: f64,
    /// Height [metres]
    pub h: f64,
}

impl ENH {
    pub fn new(e: f64, n: f64, h: f64) -> ENH {
        ENH { e, n, h }
    }

    /// Convert coords in local topocentric East, North, Height units to 'local'
    /// XYZ units. Local means Z points north, X points through the equator from
    /// the geocenter along the local meridian and Y is East. This is like the
    /// absolute system except that zero longitude is now the local meridian
    /// rather than prime meridian. Latitude is geodetic, in radians.
    ///
    /// Taken from the third edition of Interferometry and Synthesis in Radio
    /// Astronomy, chapter 4: Geometrical Relationships, Polarimetry, and the
    /// Measurement Equation.
    pub fn to_xyz(self, latitude_rad: f64) -> XyzBaseline {
        let (s_lat, c_lat) = latitude_rad.sin_cos();
        XyzBaseline {
            x: -self.n * s_lat + self.h * c_lat,
            y: self.e,
            z: self.n * c_lat + self.h * s_lat,
        }
    }

    /// The length of this vector [metres].
    pub fn length(self) -> f64 {
        (self.e * self.e + self.n * self.n + self.h * self.h).sqrt()
    }
}

impl std::ops::Sub<ENH> for ENH {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        ENH {
            e: self.e - rhs.e,
            n: self.n - rhs.n,
            h: self.h - rhs.h,
        }
    }
}
