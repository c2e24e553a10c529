// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Simulate a dirty observation of a sky model, and report the dirty beam and
//! how closely the observation resembles the sky.


use std::{borrow::Cow, path::PathBuf};

use clap::Parser;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::common::{
    display_warnings, BeamArgs, GridArgs, InfoPrinter, ObservationArgs, Warn, ARG_FILE_HELP,
};
use crate::{
    constants::DEFAULT_SOURCE_SIZE_DEG,
    params::{SimulateParams, UvCoverageParams},
    sky::{GaussianSource, SkyError, SkyModel, SourceSky},
    UvsynthError,
};

const DEFAULT_SOURCE_INTENSITY: f64 = 1.0;
const DEFAULT_CROP_FRACTION: f64 = 0.1;

lazy_static::lazy_static! {
    static ref SOURCE_SIZE_HELP: String =
        format!("The FWHM of the single Gaussian source at the centre of the field, used if no other sky model is given [degrees]. Default: {DEFAULT_SOURCE_SIZE_DEG}");

    static ref SOURCE_INTENSITY_HELP: String =
        format!("The peak brightness of the single central source. Default: {DEFAULT_SOURCE_INTENSITY}");

    static ref CROP_FRACTION_HELP: String =
        format!("The fraction of each image axis, about the centre, over which the observation is compared with the sky. Default: {DEFAULT_CROP_FRACTION}");
}

#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct SkyModelArgs {
    #[clap(long, help = SOURCE_SIZE_HELP.as_str(), help_heading = "SKY MODEL")]
    pub(super) source_size: Option<f64>,

    #[clap(long, help = SOURCE_INTENSITY_HELP.as_str(), help_heading = "SKY MODEL")]
    pub(super) source_intensity: Option<f64>,

    /// Make a sky of randomly placed Gaussian sources with these FWHMs
    /// [degrees]. Sources are placed within the central 80% of the field of
    /// view.
    #[clap(long, multiple_values(true), help_heading = "SKY MODEL")]
    pub(super) random_sizes: Option<Vec<f64>>,

    /// The peak brightnesses of the random sources, one per size. Default: 1
    /// for every source.
    #[clap(long, multiple_values(true), help_heading = "SKY MODEL")]
    pub(super) random_intensities: Option<Vec<f64>>,

    /// The seed used to place random sources. If not given, every run places
    /// them differently.
    #[clap(long, help_heading = "SKY MODEL")]
    pub(super) random_seed: Option<u64>,

    /// Sources with explicit positions. These can only be given in an
    /// arguments file, and take precedence over everything else.
    #[clap(skip)]
    pub(super) sources: Option<Vec<GaussianSource>>,
}

impl SkyModelArgs {
    fn merge(self, other: Self) -> Self {
        Self {
            source_size: self.source_size.or(other.source_size),
            source_intensity: self.source_intensity.or(other.source_intensity),
            random_sizes: self.random_sizes.or(other.random_sizes),
            random_intensities: self.random_intensities.or(other.random_intensities),
            random_seed: self.random_seed.or(other.random_seed),
            sources: self.sources.or(other.sources),
        }
    }

    fn parse(self, fov_deg: f64) -> Result<Box<dyn SkyModel>, SkyError> {
        let Self {
            source_size,
            source_intensity,
            random_sizes,
            random_intensities,
            random_seed,
            sources,
        } = self;

        let mut printer = InfoPrinter::new("Sky model".into());
        let sky: Box<dyn SkyModel> = match (sources, random_sizes, random_intensities) {
            (Some(sources), sizes, intensities) => {
                if sizes.is_some() || intensities.is_some() {
                    "Sources were given explicitly; ignoring the random source arguments".warn();
                }
                let sky = SourceSky::new(sources)?;
                printer.push_line(
                    format!("{} sources from the arguments file", sky.sources.len()).into(),
                );
                Box::new(sky)
            }

            (None, None, None) => {
                let fwhm_deg = source_size.unwrap_or(DEFAULT_SOURCE_SIZE_DEG);
                let intensity = source_intensity.unwrap_or(DEFAULT_SOURCE_INTENSITY);
                let source = GaussianSource::new(0.0, 0.0, fwhm_deg, intensity)?;
                printer.push_line(
                    format!("One central source: FWHM {fwhm_deg}°, peak {intensity}").into(),
                );
                Box::new(source)
            }

            (None, sizes, intensities) => {
                // Whichever list is missing is filled from the single-source
                // arguments.
                let (sizes, intensities) = match (sizes, intensities) {
                    (Some(s), Some(i)) => (s, i),
                    (Some(s), None) => {
                        let i = vec![source_intensity.unwrap_or(DEFAULT_SOURCE_INTENSITY); s.len()];
                        (s, i)
                    }
                    (None, Some(i)) => {
                        let s = vec![source_size.unwrap_or(DEFAULT_SOURCE_SIZE_DEG); i.len()];
                        (s, i)
                    }
                    (None, None) => (vec![], vec![]),
                };
                let sky = SourceSky::random(fov_deg, &sizes, &intensities, random_seed)?;
                let mut block: Vec<Cow<'static, str>> =
                    vec![format!("{} random sources", sky.sources.len()).into()];
                for s in &sky.sources {
                    block.push(
                        format!(
                            "l {:+.4}°, m {:+.4}°, FWHM {}°, peak {}",
                            s.l_deg, s.m_deg, s.fwhm_deg, s.intensity
                        )
                        .into(),
                    );
                }
                printer.push_block(block);
                Box::new(sky)
            }
        };

        printer.display();
        Ok(sky)
    }
}

#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct SimulateCliArgs {
    /// The standard deviation of the complex Gaussian noise added to the real
    /// and imaginary parts of every UV cell. Default: 0 (no noise)
    #[clap(long, help_heading = "SIMULATION")]
    pub(super) noise_sigma: Option<f64>,

    /// The seed of the noise generator. If not given, the noise differs on
    /// every run.
    #[clap(long, help_heading = "SIMULATION")]
    pub(super) seed: Option<u64>,

    #[clap(long, help = CROP_FRACTION_HELP.as_str(), help_heading = "SIMULATION")]
    pub(super) crop_fraction: Option<f64>,
}

impl SimulateCliArgs {
    fn merge(self, other: Self) -> Self {
        Self {
            noise_sigma: self.noise_sigma.or(other.noise_sigma),
            seed: self.seed.or(other.seed),
            crop_fraction: self.crop_fraction.or(other.crop_fraction),
        }
    }
}

#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct SimulateArgs {
    #[clap(name = "ARGUMENTS_FILE", help = ARG_FILE_HELP.as_str(), parse(from_os_str))]
    pub(super) args_file: Option<PathBuf>,

    #[clap(flatten)]
    #[serde(rename = "observation")]
    #[serde(default)]
    pub(super) observation_args: ObservationArgs,

    #[clap(flatten)]
    #[serde(rename = "grid")]
    #[serde(default)]
    pub(super) grid_args: GridArgs,

    #[clap(flatten)]
    #[serde(rename = "beam")]
    #[serde(default)]
    pub(super) beam_args: BeamArgs,

    #[clap(flatten)]
    #[serde(rename = "sky-model")]
    #[serde(default)]
    pub(super) sky_model_args: SkyModelArgs,

    #[clap(flatten)]
    #[serde(rename = "simulate")]
    #[serde(default)]
    pub(super) simulate_args: SimulateCliArgs,
}

impl SimulateArgs {
    /// Both command-line and file arguments overlap in terms of what is
    /// available; this function consolidates everything that was specified into
    /// a single struct. Where applicable, it will prefer CLI parameters over
    /// those in the file.
    pub(super) fn merge(self) -> Result<SimulateArgs, UvsynthError> {
        debug!("Merging command-line arguments with the argument file");

        let cli_args = self;

        if let Some(arg_file) = cli_args.args_file {
            let SimulateArgs {
                args_file: _,
                observation_args,
                grid_args,
                beam_args,
                sky_model_args,
                simulate_args,
            } = unpack_arg_file!(arg_file);

            Ok(SimulateArgs {
                args_file: None,
                observation_args: cli_args.observation_args.merge(observation_args),
                grid_args: cli_args.grid_args.merge(grid_args),
                beam_args: cli_args.beam_args.merge(beam_args),
                sky_model_args: cli_args.sky_model_args.merge(sky_model_args),
                simulate_args: cli_args.simulate_args.merge(simulate_args),
            })
        } else {
            Ok(cli_args)
        }
    }

    fn parse(self) -> Result<SimulateParams, UvsynthError> {
        // Expose all the struct fields to ensure they're all used.
        let SimulateArgs {
            args_file: _,
            observation_args,
            grid_args,
            beam_args,
            sky_model_args,
            simulate_args:
                SimulateCliArgs {
                    noise_sigma,
                    seed,
                    crop_fraction,
                },
        } = self;

        let (array, geometry) = observation_args.parse()?;
        let (grid_spec, mask_type) = grid_args.parse()?;
        let (num_pixels, _) = grid_spec.shape();
        let (fov_deg, _) = grid_spec.fov_deg();
        let beam = beam_args.parse()?;
        let sky_model = sky_model_args.parse(fov_deg)?;

        let noise_sigma = noise_sigma.unwrap_or(0.0);
        let crop_fraction = crop_fraction.unwrap_or(DEFAULT_CROP_FRACTION);
        if !(crop_fraction > 0.0 && crop_fraction <= 1.0) {
            return Err(SimulateArgsError::BadCropFraction(crop_fraction).into());
        }
        if noise_sigma == 0.0 && seed.is_some() {
            "No noise is being added; the noise seed is unused".warn();
        }

        let mut printer = InfoPrinter::new("Simulation".into());
        printer.push_line(
            format!("{num_pixels}x{num_pixels} pixels over {fov_deg}°, {mask_type} mask").into(),
        );
        printer.push_line(match (noise_sigma, seed) {
            (s, _) if s == 0.0 => "No noise".into(),
            (s, Some(seed)) => format!("Noise σ = {s} (seed {seed})").into(),
            (s, None) => format!("Noise σ = {s} (unseeded)").into(),
        });
        printer.push_line(
            format!(
                "Metrics over the central {}% of each axis",
                crop_fraction * 100.0
            )
            .into(),
        );
        printer.display();
        display_warnings();

        Ok(SimulateParams {
            coverage: UvCoverageParams {
                array,
                geometry,
                grid_spec,
                mask_type,
            },
            sky_model,
            beam,
            noise_sigma,
            seed,
            crop_fraction,
        })
    }

    pub(super) fn run(self, dry_run: bool) -> Result<(), UvsynthError> {
        debug!("Converting arguments into parameters");
        trace!("{:#?}", self);
        let params = self.parse()?;

        if dry_run {
            info!("Dry run -- exiting now.");
            return Ok(());
        }

        params.run()?;
        Ok(())
    }
}

#[derive(Error, Debug)]
pub(super) enum SimulateArgsError {
    #[error("The crop fraction must be within (0, 1] (got {0})")]
    BadCropFraction(f64),
}
