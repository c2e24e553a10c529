// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all uvsynth-related errors. This should be the *only* error
//! enum that is publicly visible from the executable.

use thiserror::Error;

use super::{common::ObservationArgsError, simulate::SimulateArgsError};
use crate::{
    array::ArrayError,
    beam::BeamError,
    gridding::GridError,
    imaging::ImagingError,
    metrics::MetricsError,
    params::SimulateError,
    sky::SkyError,
    track::TrackError,
};

/// The *only* publicly visible error from the uvsynth executable. Library
/// errors are flattened into human-readable messages, grouped by what the
/// user would need to change to fix them.
#[derive(Error, Debug)]
pub enum UvsynthError {
    /// An error related to antenna positions.
    #[error("{0}\n\nAntenna files have one 'East North Up' row [metres] per antenna; lines starting with '#' are ignored.")]
    Antennas(String),

    /// An error related to the observation (track) parameters.
    #[error("{0}")]
    Observation(String),

    /// An error related to gridding UV samples.
    #[error("{0}")]
    Gridding(String),

    /// A UV sample didn't fit on the grid.
    #[error("{0}\n\nThe UV grid is too small for these baselines; try a smaller field of view, more pixels or a lower frequency.")]
    UvExtent(String),

    /// An error related to imaging.
    #[error("{0}")]
    Imaging(String),

    /// An error related to beam code.
    #[error("{0}")]
    Beam(String),

    /// An error related to sky models.
    #[error("{0}")]
    SkyModel(String),

    /// An error related to image metrics.
    #[error("{0}")]
    Metrics(String),

    /// An error related to argument files.
    #[error("{0}")]
    ArgFile(String),

    /// A generic error that can't be clarified further, e.g. IO errors.
    #[error("{0}")]
    Generic(String),
}

// When changing the error propagation below, ensure `Self::from(e)` uses the
// correct `e`!

// Binary sub-command errors.

impl From<ObservationArgsError> for UvsynthError {
    fn from(e: ObservationArgsError) -> Self {
        let s = e.to_string();
        match e {
            ObservationArgsError::NoAntennas | ObservationArgsError::AntennasDontExist(_) => {
                Self::Antennas(s)
            }
            ObservationArgsError::LatitudeInvalid(_)
            | ObservationArgsError::DeclinationInvalid(_) => Self::Observation(s),
        }
    }
}

impl From<SimulateArgsError> for UvsynthError {
    fn from(e: SimulateArgsError) -> Self {
        let s = e.to_string();
        match e {
            SimulateArgsError::BadCropFraction(_) => Self::Metrics(s),
        }
    }
}

impl From<SimulateError> for UvsynthError {
    fn from(e: SimulateError) -> Self {
        match e {
            SimulateError::Imaging(e) => Self::from(e),
            SimulateError::Metrics(e) => Self::from(e),
        }
    }
}

// Library code errors.

impl From<ArrayError> for UvsynthError {
    fn from(e: ArrayError) -> Self {
        Self::Antennas(e.to_string())
    }
}

impl From<TrackError> for UvsynthError {
    fn from(e: TrackError) -> Self {
        Self::Observation(e.to_string())
    }
}

impl From<GridError> for UvsynthError {
    fn from(e: GridError) -> Self {
        let s = e.to_string();
        match e {
            GridError::SampleOutOfRange { .. } => Self::UvExtent(s),
            GridError::InvalidMaskType(_)
            | GridError::MissingWeights
            | GridError::WeightsLengthMismatch { .. }
            | GridError::InvalidGridSpec(_) => Self::Gridding(s),
        }
    }
}

impl From<ImagingError> for UvsynthError {
    fn from(e: ImagingError) -> Self {
        let s = e.to_string();
        match e {
            ImagingError::Grid(e) => Self::from(e),
            ImagingError::ShapeMismatch { .. } | ImagingError::InvalidNoiseSigma(_) => {
                Self::Imaging(s)
            }
        }
    }
}

impl From<BeamError> for UvsynthError {
    fn from(e: BeamError) -> Self {
        Self::Beam(e.to_string())
    }
}

impl From<SkyError> for UvsynthError {
    fn from(e: SkyError) -> Self {
        Self::SkyModel(e.to_string())
    }
}

impl From<MetricsError> for UvsynthError {
    fn from(e: MetricsError) -> Self {
        Self::Metrics(e.to_string())
    }
}

impl From<std::io::Error> for UvsynthError {
    fn from(e: std::io::Error) -> Self {
        Self::Generic(e.to_string())
    }
}
