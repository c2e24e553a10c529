// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Earth-rotation synthesis: UV tracks of baselines as the sky rotates.
//!
//! For each time step of an observation, the hour angle of the target is
//! derived from the time (in hours), and every baseline is projected onto the
//! UV plane. This geometric track (in metres) is then scaled by `f / c` for
//! every frequency channel; UV coordinates scale linearly with frequency for a
//! fixed physical baseline.

mod error;

pub use error::TrackError;

use log::debug;
use rayon::prelude::*;
use vec1::Vec1;

use crate::{
    array::BaselineSet,
    constants::{HOUR_TO_RAD, VEL_C},
    coord::{HADec, UV, UVW},
    math::linspace,
};

/// Everything needed to know where baselines are on the UV plane during an
/// observation. The latitude and declination must be within [-π/2, π/2]; this
/// is not checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObservationGeometry {
    latitude_rad: f64,
    declination_rad: f64,
    track_start_h: f64,
    track_duration_h: f64,
    num_times: usize,
    freq_hz: f64,
    freq_span_hz: f64,
    num_freqs: usize,
    multi_band: bool,
}

impl ObservationGeometry {
    /// Create a new, validated observation geometry.
    ///
    /// - `track_start_h` is the hour angle at the start of the track [hours];
    /// - `track_duration_h` is the length of the track [hours]; time steps are
    ///   spread evenly over the track, inclusive of both ends;
    /// - `freq_hz` is the centre (reference) frequency;
    /// - `freq_span_hz` is the total span of the channels used for multi-band
    ///   synthesis, and `num_freqs` is how many channels there are. These are
    ///   still validated, but ignored, if `multi_band` is false.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        latitude_rad: f64,
        declination_rad: f64,
        track_start_h: f64,
        track_duration_h: f64,
        num_times: usize,
        freq_hz: f64,
        freq_span_hz: f64,
        num_freqs: usize,
        multi_band: bool,
    ) -> Result<ObservationGeometry, TrackError> {
        for (name, value) in [
            ("latitude", latitude_rad),
            ("declination", declination_rad),
            ("track start", track_start_h),
            ("track duration", track_duration_h),
            ("frequency", freq_hz),
            ("frequency span", freq_span_hz),
        ] {
            if !value.is_finite() {
                return Err(TrackError::NonFinite(name));
            }
        }
        if num_times == 0 {
            return Err(TrackError::NoTimeSteps);
        }
        if track_duration_h < 0.0 {
            return Err(TrackError::NegativeDuration(track_duration_h));
        }
        if freq_hz <= 0.0 {
            return Err(TrackError::NonPositiveFrequency(freq_hz));
        }
        if freq_span_hz < 0.0 {
            return Err(TrackError::NegativeFreqSpan(freq_span_hz));
        }
        if num_freqs == 0 {
            return Err(TrackError::NoFrequencies);
        }
        if multi_band {
            let lowest = freq_hz - freq_span_hz / 2.0;
            if lowest <= 0.0 {
                return Err(TrackError::LowestChannelNotPositive(lowest));
            }
        }

        Ok(ObservationGeometry {
            latitude_rad,
            declination_rad,
            track_start_h,
            track_duration_h,
            num_times,
            freq_hz,
            freq_span_hz,
            num_freqs,
            multi_band,
        })
    }

    /// A single-band geometry; the track is produced only at `freq_hz`.
    pub fn single_band(
        latitude_rad: f64,
        declination_rad: f64,
        track_start_h: f64,
        track_duration_h: f64,
        num_times: usize,
        freq_hz: f64,
    ) -> Result<ObservationGeometry, TrackError> {
        Self::new(
            latitude_rad,
            declination_rad,
            track_start_h,
            track_duration_h,
            num_times,
            freq_hz,
            0.0,
            1,
            false,
        )
    }

    pub fn latitude_rad(&self) -> f64 {
        self.latitude_rad
    }

    pub fn declination_rad(&self) -> f64 {
        self.declination_rad
    }

    pub fn num_times(&self) -> usize {
        self.num_times
    }

    pub fn multi_band(&self) -> bool {
        self.multi_band
    }

    /// The hour angles of each time step [radians].
    pub fn hour_angles(&self) -> Vec<f64> {
        linspace(
            self.track_start_h,
            self.track_start_h + self.track_duration_h,
            self.num_times,
        )
        .into_iter()
        .map(|t| t * HOUR_TO_RAD)
        .collect()
    }

    /// The channel frequencies [Hz]. Without multi-band synthesis, this is
    /// just the reference frequency.
    pub fn freqs_hz(&self) -> Vec1<f64> {
        if self.multi_band {
            let half_span = self.freq_span_hz / 2.0;
            let freqs = linspace(
                self.freq_hz - half_span,
                self.freq_hz + half_span,
                self.num_freqs,
            );
            // `num_freqs` was validated to be non-zero.
            Vec1::try_from_vec(freqs).unwrap_or_else(|_| Vec1::new(self.freq_hz))
        } else {
            Vec1::new(self.freq_hz)
        }
    }
}

/// A sequence of UV samples [wavelengths], one per (channel, time step,
/// baseline) triple, ordered channel-major, then by time step, then by
/// baseline. `freqs_hz` has one entry per channel.
#[derive(Debug, Clone, PartialEq)]
pub struct UvTrack {
    uvs: Vec<UV>,
    freqs_hz: Vec1<f64>,
    num_baselines: usize,
    num_times: usize,
}

impl UvTrack {
    /// All of the UV samples.
    pub fn uvs(&self) -> &[UV] {
        &self.uvs
    }

    pub fn freqs_hz(&self) -> &[f64] {
        self.freqs_hz.as_slice()
    }

    pub fn len(&self) -> usize {
        self.uvs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.uvs.is_empty()
    }

    pub fn num_baselines(&self) -> usize {
        self.num_baselines
    }

    pub fn num_times(&self) -> usize {
        self.num_times
    }

    pub fn num_channels(&self) -> usize {
        self.freqs_hz.len()
    }

    /// The UV samples belonging to a single frequency channel, if the channel
    /// exists.
    pub fn channel(&self, i_chan: usize) -> Option<&[UV]> {
        let per_chan = self.num_baselines * self.num_times;
        if i_chan >= self.num_channels() {
            return None;
        }
        self.uvs.get(i_chan * per_chan..(i_chan + 1) * per_chan)
    }

    /// The largest absolute u and v values of the track [wavelengths].
    pub fn max_abs_uv(&self) -> (f64, f64) {
        self.uvs.iter().fold((0.0, 0.0), |(max_u, max_v), uv| {
            (f64::max(max_u, uv.u.abs()), f64::max(max_v, uv.v.abs()))
        })
    }
}

/// Project baselines onto the UV plane for every time step of the observation,
/// at every channel frequency. See the module documentation for details.
pub fn uv_track_multiband(baselines: &BaselineSet, geometry: &ObservationGeometry) -> UvTrack {
    let num_baselines = baselines.len();
    let num_times = geometry.num_times;
    let freqs_hz = geometry.freqs_hz();
    debug!(
        "Generating UV tracks for {num_baselines} baselines, {num_times} time steps and {} channels",
        freqs_hz.len()
    );

    let xyzs: Vec<_> = baselines
        .as_slice()
        .iter()
        .map(|b| b.to_xyz(geometry.latitude_rad))
        .collect();

    // The geometric track, in metres. This is shared by every channel.
    let mut track_m = Vec::with_capacity(num_baselines * num_times);
    for ha in geometry.hour_angles() {
        let phase_centre = HADec::new(ha, geometry.declination_rad);
        track_m.extend(
            UVW::get_baselines(&xyzs, phase_centre)
                .into_iter()
                .map(UVW::uv),
        );
    }

    let track_m = &track_m;
    let uvs: Vec<UV> = freqs_hz
        .as_slice()
        .par_iter()
        .flat_map_iter(move |&freq_hz| {
            let inv_lambda = freq_hz / VEL_C;
            track_m.iter().map(move |&uv| uv * inv_lambda)
        })
        .collect();

    UvTrack {
        uvs,
        freqs_hz,
        num_baselines,
        num_times,
    }
}
