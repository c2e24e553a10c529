// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Useful constants.

All constants *must* be double precision. `uvsynth` should do as many
calculations as possible in double precision before converting to a lower
precision, if it is ever required.
 */

pub use std::f64::consts::{FRAC_PI_2, PI};

/// Speed of light [metres/second].
pub const VEL_C: f64 = 299_792_458.0;

/// The number of radians the sky rotates through per hour of (solar) time.
/// Hour angles are derived from track times with this factor.
pub const HOUR_TO_RAD: f64 = PI / 12.0;

/// Default observer latitude [degrees].
pub const DEFAULT_LATITUDE_DEG: f64 = 35.0;

/// Default target declination [degrees].
pub const DEFAULT_DECLINATION_DEG: f64 = 32.0;

/// Default track start [hours of hour angle].
pub const DEFAULT_TRACK_START_H: f64 = 1.0;

/// Default track duration [hours].
pub const DEFAULT_TRACK_DURATION_H: f64 = 1.0;

/// Default number of time steps across a track.
pub const DEFAULT_NUM_TIMES: usize = 360;

/// Default centre frequency [Hz].
pub const DEFAULT_FREQ_HZ: f64 = 2.0e9;

/// Default total frequency span used for multi-band synthesis [Hz].
pub const DEFAULT_FREQ_SPAN_HZ: f64 = 1.0e9;

/// Default number of frequency channels used for multi-band synthesis.
pub const DEFAULT_NUM_FREQS: usize = 16;

/// Default number of image pixels along each axis.
pub const DEFAULT_NUM_PIXELS: usize = 512;

/// Default field of view [degrees].
pub const DEFAULT_FOV_DEG: f64 = 1.0;

/// Default source size used when no sky model is supplied [degrees].
pub const DEFAULT_SOURCE_SIZE_DEG: f64 = 0.02;

/// The ratio between a Gaussian's FWHM and its standard deviation.
pub const FWHM_FACTOR: f64 = 2.354_820_045_030_949_3;

/// Default masking factor used when excluding the main lobe of a dirty beam.
pub const DEFAULT_MASKING_FACTOR: f64 = 3.0;
