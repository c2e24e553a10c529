// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors associated with gridding UV samples.

use thiserror::Error;

use super::MASK_TYPES_COMMA_SEPARATED;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    #[error("UV sample {index} (u = {u} λ, v = {v} λ) lies outside the grid; the Nyquist extent is |u| <= {max_u} λ, |v| <= {max_v} λ")]
    SampleOutOfRange {
        index: usize,
        u: f64,
        v: f64,
        max_u: f64,
        max_v: f64,
    },

    #[error("'{0}' is not a valid mask type; valid mask types are: {}", *MASK_TYPES_COMMA_SEPARATED)]
    InvalidMaskType(String),

    #[error("The weighted mask type requires per-sample weights, but none were supplied")]
    MissingWeights,

    #[error("Got {weights} weights for {samples} UV samples; these must be equal")]
    WeightsLengthMismatch { weights: usize, samples: usize },

    #[error("Invalid grid: {0}")]
    InvalidGridSpec(String),
}
