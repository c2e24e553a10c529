// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Common arguments for command-line interfaces. Both the `uv-coverage` and
//! `simulate` subcommands need an array and an observation to make a UV
//! track, and a grid to put it on, so those arguments are shared here.

mod beam;
mod printers;

pub(super) use beam::BeamArgs;
pub(super) use printers::InfoPrinter;
pub(crate) use printers::{display_warnings, Warn};

use std::path::PathBuf;

use clap::Parser;
use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use thiserror::Error;

use crate::{
    array::AntennaArray,
    constants::*,
    gridding::{GridError, GridSpec, MaskType, MASK_TYPES_COMMA_SEPARATED},
    track::ObservationGeometry,
    UvsynthError,
};

lazy_static::lazy_static! {
    pub(super) static ref ARG_FILE_TYPES_COMMA_SEPARATED: String = ArgFileTypes::iter().join(", ");

    pub(super) static ref ARG_FILE_HELP: String =
        format!("All arguments may be specified in a file. Any CLI arguments override arguments set in the file. Supported formats: {}", *ARG_FILE_TYPES_COMMA_SEPARATED);

    static ref LATITUDE_HELP: String =
        format!("The latitude of the array [degrees]. Default: {DEFAULT_LATITUDE_DEG}");

    static ref DECLINATION_HELP: String =
        format!("The declination of the target [degrees]. Default: {DEFAULT_DECLINATION_DEG}");

    static ref TRACK_START_HELP: String =
        format!("The hour angle of the target at the start of the track [hours]. Default: {DEFAULT_TRACK_START_H}");

    static ref TRACK_DURATION_HELP: String =
        format!("The length of the track [hours]. Default: {DEFAULT_TRACK_DURATION_H}");

    static ref NUM_TIMES_HELP: String =
        format!("The number of time steps spread over the track, including both ends. Default: {DEFAULT_NUM_TIMES}");

    static ref FREQ_HELP: String =
        format!("The centre frequency of the observation [MHz]. Default: {}", DEFAULT_FREQ_HZ / 1e6);

    static ref FREQ_SPAN_HELP: String =
        format!("The total bandwidth used for multi-band synthesis [MHz]. Default: {}", DEFAULT_FREQ_SPAN_HZ / 1e6);

    static ref NUM_FREQS_HELP: String =
        format!("The number of channels used for multi-band synthesis. Default: {DEFAULT_NUM_FREQS}");

    static ref NUM_PIXELS_HELP: String =
        format!("The number of pixels along each side of the (square) image and UV grid. Default: {DEFAULT_NUM_PIXELS}");

    static ref FOV_HELP: String =
        format!("The field of view of the image [degrees]. Default: {DEFAULT_FOV_DEG}");

    static ref MASK_TYPE_HELP: String =
        format!("How UV samples landing in the same grid cell are combined. Supported types: {}. Default: {}",
                *MASK_TYPES_COMMA_SEPARATED, MaskType::default());
}

#[derive(Debug, Display, EnumIter, EnumString)]
pub(super) enum ArgFileTypes {
    #[strum(serialize = "toml")]
    Toml,
    #[strum(serialize = "json")]
    Json,
}

/// Read an arguments file into whatever arguments struct the caller expects.
/// The format is determined by the file extension.
macro_rules! unpack_arg_file {
    ($arg_file:expr) => ({
        use std::{fs::File, io::Read, str::FromStr};

        use crate::cli::common::{ArgFileTypes, ARG_FILE_TYPES_COMMA_SEPARATED};

        log::debug!("Attempting to parse argument file {}", $arg_file.display());

        let mut contents = String::new();
        let arg_file_type = $arg_file
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .and_then(|e| ArgFileTypes::from_str(&e).ok());

        match arg_file_type {
            Some(ArgFileTypes::Toml) => {
                log::debug!("Parsing toml file...");
                let mut fh = File::open(&$arg_file)?;
                fh.read_to_string(&mut contents)?;
                match toml::from_str(&contents) {
                    Ok(p) => p,
                    Err(err) => {
                        return Err(crate::UvsynthError::ArgFile(format!(
                            "Couldn't decode toml structure from {:?}:\n{err}",
                            $arg_file
                        )))
                    }
                }
            }
            Some(ArgFileTypes::Json) => {
                log::debug!("Parsing json file...");
                let mut fh = File::open(&$arg_file)?;
                fh.read_to_string(&mut contents)?;
                match serde_json::from_str(&contents) {
                    Ok(p) => p,
                    Err(err) => {
                        return Err(crate::UvsynthError::ArgFile(format!(
                            "Couldn't decode json structure from {:?}:\n{err}",
                            $arg_file
                        )))
                    }
                }
            }

            _ => {
                return Err(crate::UvsynthError::ArgFile(format!(
                    "Argument file '{:?}' doesn't have a recognised file extension! Valid extensions are: {}", $arg_file, *ARG_FILE_TYPES_COMMA_SEPARATED)
                ))
            }
        }
    });
}

/// Arguments describing the array and how it observes: everything needed to
/// generate a UV track.
#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct ObservationArgs {
    /// Path to a text file of antenna positions. Each line has the East,
    /// North and Up coordinates of an antenna [metres].
    #[clap(short, long, parse(from_os_str), help_heading = "INPUT FILES")]
    pub(super) antennas: Option<PathBuf>,

    #[clap(long, help = LATITUDE_HELP.as_str(), help_heading = "OBSERVATION PARAMETERS", allow_hyphen_values = true)]
    pub(super) latitude: Option<f64>,

    #[clap(long, help = DECLINATION_HELP.as_str(), help_heading = "OBSERVATION PARAMETERS", allow_hyphen_values = true)]
    pub(super) declination: Option<f64>,

    #[clap(long, help = TRACK_START_HELP.as_str(), help_heading = "OBSERVATION PARAMETERS", allow_hyphen_values = true)]
    pub(super) track_start: Option<f64>,

    #[clap(long, help = TRACK_DURATION_HELP.as_str(), help_heading = "OBSERVATION PARAMETERS")]
    pub(super) track_duration: Option<f64>,

    #[clap(short = 't', long, help = NUM_TIMES_HELP.as_str(), help_heading = "OBSERVATION PARAMETERS")]
    pub(super) num_times: Option<usize>,

    #[clap(short, long, help = FREQ_HELP.as_str(), help_heading = "OBSERVATION PARAMETERS")]
    pub(super) freq: Option<f64>,

    #[clap(long, help = FREQ_SPAN_HELP.as_str(), help_heading = "OBSERVATION PARAMETERS")]
    pub(super) freq_span: Option<f64>,

    #[clap(long, help = NUM_FREQS_HELP.as_str(), help_heading = "OBSERVATION PARAMETERS")]
    pub(super) num_freqs: Option<usize>,

    /// Use multi-band synthesis, i.e. sample the UV plane at several
    /// frequencies spread over the bandwidth, rather than only at the centre
    /// frequency.
    #[clap(long, help_heading = "OBSERVATION PARAMETERS")]
    #[serde(default)]
    pub(super) multi_band: bool,
}

impl ObservationArgs {
    pub(super) fn merge(self, other: Self) -> Self {
        Self {
            antennas: self.antennas.or(other.antennas),
            latitude: self.latitude.or(other.latitude),
            declination: self.declination.or(other.declination),
            track_start: self.track_start.or(other.track_start),
            track_duration: self.track_duration.or(other.track_duration),
            num_times: self.num_times.or(other.num_times),
            freq: self.freq.or(other.freq),
            freq_span: self.freq_span.or(other.freq_span),
            num_freqs: self.num_freqs.or(other.num_freqs),
            multi_band: self.multi_band || other.multi_band,
        }
    }

    /// Read the antennas and validate the observation.
    pub(super) fn parse(self) -> Result<(AntennaArray, ObservationGeometry), UvsynthError> {
        let ObservationArgs {
            antennas,
            latitude,
            declination,
            track_start,
            track_duration,
            num_times,
            freq,
            freq_span,
            num_freqs,
            multi_band,
        } = self;

        let antennas = antennas.ok_or(ObservationArgsError::NoAntennas)?;
        if !antennas.exists() {
            return Err(ObservationArgsError::AntennasDontExist(antennas).into());
        }
        let array = AntennaArray::read_enu_txt(&antennas)?;

        let latitude_deg = latitude.unwrap_or(DEFAULT_LATITUDE_DEG);
        if !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(ObservationArgsError::LatitudeInvalid(latitude_deg).into());
        }
        let declination_deg = declination.unwrap_or(DEFAULT_DECLINATION_DEG);
        if !(-90.0..=90.0).contains(&declination_deg) {
            return Err(ObservationArgsError::DeclinationInvalid(declination_deg).into());
        }
        let track_start_h = track_start.unwrap_or(DEFAULT_TRACK_START_H);
        let track_duration_h = track_duration.unwrap_or(DEFAULT_TRACK_DURATION_H);
        let num_times = num_times.unwrap_or(DEFAULT_NUM_TIMES);
        let freq_hz = freq.map(|f| f * 1e6).unwrap_or(DEFAULT_FREQ_HZ);
        let freq_span_hz = freq_span.map(|f| f * 1e6).unwrap_or(DEFAULT_FREQ_SPAN_HZ);
        if !multi_band && (freq_span.is_some() || num_freqs.is_some()) {
            "Multi-band synthesis is off; ignoring the frequency span and number of channels"
                .warn();
        }
        let num_freqs = num_freqs.unwrap_or(DEFAULT_NUM_FREQS);

        let geometry = ObservationGeometry::new(
            latitude_deg.to_radians(),
            declination_deg.to_radians(),
            track_start_h,
            track_duration_h,
            num_times,
            freq_hz,
            freq_span_hz,
            num_freqs,
            multi_band,
        )?;

        let mut printer = InfoPrinter::new("Observation".into());
        printer.push_block(vec![
            format!("Antennas from {}", antennas.display()).into(),
            format!(
                "{} antennas, {} baselines (both directions)",
                array.num_antennas(),
                array.num_baselines()
            )
            .into(),
        ]);
        printer.push_line(
            format!("Latitude {latitude_deg}°, target declination {declination_deg}°").into(),
        );
        printer.push_line(
            format!(
                "Track: {num_times} time steps over {track_duration_h} h, from hour angle {track_start_h} h"
            )
            .into(),
        );
        let freqs = geometry.freqs_hz();
        if multi_band {
            printer.push_line(
                format!(
                    "Multi-band: {} channels from {:.3} to {:.3} MHz",
                    freqs.len(),
                    freqs.first() / 1e6,
                    freqs.last() / 1e6
                )
                .into(),
            );
        } else {
            printer.push_line(format!("Frequency: {:.3} MHz", freq_hz / 1e6).into());
        }
        printer.display();

        Ok((array, geometry))
    }
}

/// Arguments describing the image and the UV grid underneath it.
#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct GridArgs {
    #[clap(short = 'n', long, help = NUM_PIXELS_HELP.as_str(), help_heading = "GRIDDING")]
    pub(super) num_pixels: Option<usize>,

    #[clap(long, help = FOV_HELP.as_str(), help_heading = "GRIDDING")]
    pub(super) fov: Option<f64>,

    #[clap(short, long, help = MASK_TYPE_HELP.as_str(), help_heading = "GRIDDING")]
    pub(super) mask_type: Option<String>,
}

impl GridArgs {
    pub(super) fn merge(self, other: Self) -> Self {
        Self {
            num_pixels: self.num_pixels.or(other.num_pixels),
            fov: self.fov.or(other.fov),
            mask_type: self.mask_type.or(other.mask_type),
        }
    }

    pub(super) fn parse(self) -> Result<(GridSpec, MaskType), GridError> {
        let GridArgs {
            num_pixels,
            fov,
            mask_type,
        } = self;

        let num_pixels = num_pixels.unwrap_or(DEFAULT_NUM_PIXELS);
        let fov_deg = fov.unwrap_or(DEFAULT_FOV_DEG);
        let spec = GridSpec::square(num_pixels, fov_deg)?;
        let mask_type = match mask_type {
            Some(s) => s.parse()?,
            None => MaskType::default(),
        };
        debug!("Grid: {num_pixels}x{num_pixels} pixels over {fov_deg}°, {mask_type} mask");

        Ok((spec, mask_type))
    }
}

#[derive(Error, Debug)]
pub(super) enum ObservationArgsError {
    #[error("No antenna positions were supplied")]
    NoAntennas,

    #[error("Antenna file '{}' doesn't exist", .0.display())]
    AntennasDontExist(PathBuf),

    #[error("Latitude {0}° is not within -90 to 90!")]
    LatitudeInvalid(f64),

    #[error("Declination {0}° is not within -90 to 90!")]
    DeclinationInvalid(f64),
}
