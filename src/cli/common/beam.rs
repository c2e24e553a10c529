// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use clap::Parser;
use log::debug;
use serde::{Deserialize, Serialize};

use super::{InfoPrinter, Warn};
use crate::beam::{
    create_beam_object, create_no_beam_object, Beam, BeamError, BeamType, CosCubeBeam,
    BEAM_TYPES_COMMA_SEPARATED, DEFAULT_COS_CUBE_C, DEFAULT_COS_CUBE_FREQ_GHZ,
};

lazy_static::lazy_static! {
    static ref BEAM_TYPE_HELP: String =
        format!("The primary beam applied to the sky. Supported types: {}. Default: {}",
                *BEAM_TYPES_COMMA_SEPARATED, BeamType::CosCube);

    static ref COS_CUBE_C_HELP: String =
        format!("The scale of the cos-cube beam's argument [radians per degree per GHz]. Default: {DEFAULT_COS_CUBE_C}");

    static ref COS_CUBE_FREQ_HELP: String =
        format!("The frequency of the cos-cube beam [GHz]. Default: {DEFAULT_COS_CUBE_FREQ_GHZ}");
}

#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct BeamArgs {
    #[clap(short, long, help = BEAM_TYPE_HELP.as_str(), help_heading = "BEAM")]
    pub(crate) beam_type: Option<String>,

    /// Don't apply a beam to the sky. This is the same as "--beam-type none".
    #[clap(long, conflicts_with("beam-type"), help_heading = "BEAM")]
    #[serde(default)]
    pub(crate) no_beam: bool,

    /// The FWHM of the Gaussian beam [degrees]. Required if the beam type is
    /// gaussian.
    #[clap(long, help_heading = "BEAM")]
    pub(crate) beam_fwhm: Option<f64>,

    #[clap(long, help = COS_CUBE_C_HELP.as_str(), help_heading = "BEAM")]
    pub(crate) cos_cube_c: Option<f64>,

    #[clap(long, help = COS_CUBE_FREQ_HELP.as_str(), help_heading = "BEAM")]
    pub(crate) cos_cube_freq: Option<f64>,
}

impl BeamArgs {
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            beam_type: self.beam_type.or(other.beam_type),
            no_beam: self.no_beam || other.no_beam,
            beam_fwhm: self.beam_fwhm.or(other.beam_fwhm),
            cos_cube_c: self.cos_cube_c.or(other.cos_cube_c),
            cos_cube_freq: self.cos_cube_freq.or(other.cos_cube_freq),
        }
    }

    pub(crate) fn parse(self) -> Result<Box<dyn Beam>, BeamError> {
        let Self {
            beam_type,
            no_beam,
            beam_fwhm,
            cos_cube_c,
            cos_cube_freq,
        } = self;

        let mut printer = InfoPrinter::new("Beam info".into());
        let beam_type = match (no_beam, beam_type.as_deref()) {
            (true, _) => BeamType::None,
            (false, Some(s)) => BeamType::parse(s)?,
            (false, None) => BeamType::CosCube,
        };
        debug!("Beam type: {beam_type}");

        let beam: Box<dyn Beam> = match beam_type {
            BeamType::None => {
                printer.push_line("Not using any beam".into());
                create_no_beam_object()
            }

            BeamType::CosCube => {
                let c = cos_cube_c.unwrap_or(DEFAULT_COS_CUBE_C);
                let freq_ghz = cos_cube_freq.unwrap_or(DEFAULT_COS_CUBE_FREQ_GHZ);
                let beam = CosCubeBeam::new(c, freq_ghz)?;
                printer.push_block(vec![
                    format!("Type: cos³ (c = {c}, f = {freq_ghz} GHz)").into(),
                    format!("First null: {:.3}°", beam.first_null_deg()).into(),
                ]);
                Box::new(beam)
            }

            BeamType::Gaussian => {
                let beam = create_beam_object(beam_type, beam_fwhm)?;
                printer.push_line(
                    format!("Type: Gaussian (FWHM {}°)", beam_fwhm.unwrap_or_default()).into(),
                );
                beam
            }
        };

        if beam_type != BeamType::CosCube && (cos_cube_c.is_some() || cos_cube_freq.is_some()) {
            format!("The beam type is {beam_type}; ignoring the cos-cube parameters").warn();
        }
        if beam_type != BeamType::Gaussian && beam_fwhm.is_some() {
            format!("The beam type is {beam_type}; ignoring the beam FWHM").warn();
        }

        printer.display();
        Ok(beam)
    }
}
