// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors associated with sky models.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SkyError {
    #[error("A source's FWHM cannot be negative or non-finite (got {0} degrees)")]
    InvalidFwhm(f64),

    #[error("A source's {name} must be finite (got {value})")]
    NonFinite { name: &'static str, value: f64 },

    #[error("Got {sizes} source sizes but {intensities} source intensities; these must be equal")]
    LengthMismatch { sizes: usize, intensities: usize },

    #[error("The field of view must be positive (got {0} degrees)")]
    InvalidFov(f64),
}
