// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Handle (hour angle, declination) coordinates.
 */

/// A struct containing an Hour Angle and Declination. All units are in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HADec {
    /// Hour angle [radians]
    pub ha: f64,
    /// Declination [radians]
    pub dec: f64,
}

impl HADec {
    /// Make a new `HADec` struct from values in radians.
    pub fn new(ha: f64, dec: f64) -> Self {
        Self { ha, dec }
    }

    /// Make a new `HADec` struct from values in degrees.
    pub fn new_degrees(ha: f64, dec: f64) -> Self {
        Self::new(ha.to_radians(), dec.to_radians())
    }
}
