// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors associated with beam models.

use thiserror::Error;

use super::BEAM_TYPES_COMMA_SEPARATED;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BeamError {
    #[error("'{0}' is not a valid beam type; valid beam types are: {}", *BEAM_TYPES_COMMA_SEPARATED)]
    InvalidBeamType(String),

    #[error("The beam parameter '{name}' must be a positive number (got {value})")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("A Gaussian beam needs a FWHM")]
    MissingFwhm,
}
