// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Coordinate frames used to project antenna baselines onto the UV plane.
//!
//! The relationships here are discussed at length in Interferometry and
//! Synthesis in Radio Astronomy, Third Edition, Section 4: Geometrical
//! Relationships, Polarimetry, and the Measurement Equation.

mod enh;
mod hadec;
mod uvw;
mod xyz;

pub use enh::ENH;
pub use hadec::HADec;
pub use uvw::{UV, UVW};
pub use xyz::XyzBaseline;
