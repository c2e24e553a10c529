// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Earth-rotation synthesis for radio interferometers.

Antenna positions are turned into baselines, the baselines are projected onto
the UV plane as the sky rotates, and the resulting UV track is gridded into a
sampling mask. Imaging a sky model through that mask gives the dirty image an
interferometer would see, along with its dirty beam.
 */

pub mod array;
pub mod beam;
mod cli;
pub mod constants;
pub mod coord;
pub mod gridding;
pub mod imaging;
pub mod math;
pub mod metrics;
mod params;
pub mod sky;
pub mod track;

// Re-exports.
pub use cli::{Uvsynth, UvsynthError};
