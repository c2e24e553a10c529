// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors associated with observation geometry.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrackError {
    #[error("The number of time steps cannot be 0")]
    NoTimeSteps,

    #[error("The number of frequency channels cannot be 0")]
    NoFrequencies,

    #[error("The track duration cannot be negative (got {0} hours)")]
    NegativeDuration(f64),

    #[error("The centre frequency must be positive (got {0} Hz)")]
    NonPositiveFrequency(f64),

    #[error("The frequency span cannot be negative (got {0} Hz)")]
    NegativeFreqSpan(f64),

    #[error("The lowest channel frequency ({0} Hz) must be positive")]
    LowestChannelNotPositive(f64),

    #[error("The observation parameter '{0}' is not finite")]
    NonFinite(&'static str),
}
