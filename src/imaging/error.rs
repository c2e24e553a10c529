// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors associated with simulating dirty observations.

use thiserror::Error;

use crate::gridding::GridError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ImagingError {
    #[error("The {what} has shape {got:?}, but the sky model has shape {expected:?}")]
    ShapeMismatch {
        what: &'static str,
        expected: (usize, usize),
        got: (usize, usize),
    },

    #[error("The noise standard deviation must be a non-negative number (got {0})")]
    InvalidNoiseSigma(f64),

    #[error(transparent)]
    Grid(#[from] GridError),
}
