// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to abstract primary-beam patterns.
//!
//! [`Beam`] is a trait detailing how a primary beam attenuates the sky. By
//! making this trait, we can neatly abstract over multiple beam shapes,
//! including a simple [`NoBeam`] type (which doesn't attenuate anything).
//!
//! All beams here are circularly symmetric, centred on the image centre
//! (pixel `(N / 2, N / 2)`) and normalised to 1 at that centre.

mod cos_cube;
mod error;
mod gaussian;
#[cfg(test)]
mod tests;

pub use cos_cube::{CosCubeBeam, DEFAULT_COS_CUBE_C, DEFAULT_COS_CUBE_FREQ_GHZ};
pub use error::BeamError;
pub use gaussian::GaussianBeam;

use std::str::FromStr;

use itertools::Itertools;
use ndarray::prelude::*;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

lazy_static::lazy_static! {
    pub(crate) static ref BEAM_TYPES_COMMA_SEPARATED: String = BeamType::iter().join(", ");
}

/// Supported beam types.
#[derive(
    Debug, Display, EnumIter, EnumString, Clone, Copy, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum BeamType {
    /// a.k.a. [`NoBeam`]. The sky is not attenuated.
    #[strum(serialize = "none")]
    None,

    /// A `cos³` voltage pattern.
    #[strum(serialize = "cos-cube")]
    CosCube,

    /// A Gaussian intensity pattern.
    #[strum(serialize = "gaussian")]
    Gaussian,
}

impl BeamType {
    /// Parse a beam type, ignoring case.
    pub fn parse(s: &str) -> Result<BeamType, BeamError> {
        BeamType::from_str(&s.trim().to_lowercase())
            .map_err(|_| BeamError::InvalidBeamType(s.to_string()))
    }
}

/// A trait abstracting primary-beam patterns.
pub trait Beam: Sync + Send {
    /// Get the type of beam.
    fn beam_type(&self) -> BeamType;

    /// The beam's intensity over a square image of `num_pixels` by
    /// `num_pixels` pixels spanning `fov_deg` degrees along each axis.
    fn intensity(&self, num_pixels: usize, fov_deg: f64) -> Array2<f64>;
}

/// A beam implementation that returns an intensity of 1 everywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBeam;

impl Beam for NoBeam {
    fn beam_type(&self) -> BeamType {
        BeamType::None
    }

    fn intensity(&self, num_pixels: usize, _fov_deg: f64) -> Array2<f64> {
        Array2::ones((num_pixels, num_pixels))
    }
}

/// Create a "no beam" object.
pub fn create_no_beam_object() -> Box<dyn Beam> {
    Box::new(NoBeam)
}

/// Create a beam object of the specified type. `fwhm_deg` is only used by the
/// Gaussian beam; the cos³ beam uses its default parameters.
pub fn create_beam_object(
    beam_type: BeamType,
    fwhm_deg: Option<f64>,
) -> Result<Box<dyn Beam>, BeamError> {
    let beam: Box<dyn Beam> = match beam_type {
        BeamType::None => create_no_beam_object(),
        BeamType::CosCube => Box::<CosCubeBeam>::default(),
        BeamType::Gaussian => {
            let fwhm_deg = fwhm_deg.ok_or(BeamError::MissingFwhm)?;
            Box::new(GaussianBeam::new(fwhm_deg)?)
        }
    };
    Ok(beam)
}

/// The angular distance of every pixel from the image centre [degrees].
fn radial_angles_deg(num_pixels: usize, fov_deg: f64) -> Array2<f64> {
    let pixel_size_deg = fov_deg / num_pixels as f64;
    let centre = (num_pixels / 2) as f64;
    Array2::from_shape_fn((num_pixels, num_pixels), |(r, c)| {
        (r as f64 - centre).hypot(c as f64 - centre) * pixel_size_deg
    })
}

fn check_positive(name: &'static str, value: f64) -> Result<f64, BeamError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(BeamError::InvalidParameter { name, value })
    }
}
