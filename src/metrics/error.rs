// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors associated with image metrics.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricsError {
    #[error("Cannot compare images with shapes {0:?} and {1:?}")]
    ShapeMismatch((usize, usize), (usize, usize)),

    #[error("Cannot compute metrics on an empty image")]
    EmptyImage,

    #[error("The reference image is all zeros; a relative MSE is undefined")]
    ZeroReference,

    #[error("The beam's peak must be positive and finite (got {0})")]
    BadPeak(f64),
}
