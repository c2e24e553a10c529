// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Handle (x,y,z) coordinates of a baseline.
*/

/// The (x,y,z) coordinates of a baseline. All units are in metres.
///
/// This coordinate system is discussed at length in Interferometry and
/// Synthesis in Radio Astronomy, Third Edition, Section 4: Geometrical
/// Relationships, Polarimetry, and the Measurement Equation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct XyzBaseline {
    /// x-coordinate [meters]
    pub x: f64,
    /// y-coordinate [meters]
    pub y: f64,
    /// z-coordinate [meters]
    pub z: f64,
}
