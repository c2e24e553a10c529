// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Make an array's UV track and report how it fills the UV grid.

use std::path::PathBuf;

use clap::Parser;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use super::common::{display_warnings, GridArgs, InfoPrinter, ObservationArgs, ARG_FILE_HELP};
use crate::{params::UvCoverageParams, UvsynthError};

#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct UvCoverageArgs {
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
}

impl UvCoverageArgs {
    /// Both command-line and file arguments overlap in terms of what is
    /// available; this function consolidates everything that was specified into
    /// a single struct. Where applicable, it will prefer CLI parameters over
    /// those in the file.
    ///
    /// This function should only ever merge arguments, and not try to make
    /// sense of them.
    pub(super) fn merge(self) -> Result<UvCoverageArgs, UvsynthError> {
        debug!("Merging command-line arguments with the argument file");

        let cli_args = self;

        if let Some(arg_file) = cli_args.args_file {
            // Ensure all of the file args are accounted for by pattern
            // matching.
            let UvCoverageArgs {
                args_file: _,
                observation_args,
                grid_args,
            } = unpack_arg_file!(arg_file);

            Ok(UvCoverageArgs {
                args_file: None,
                observation_args: cli_args.observation_args.merge(observation_args),
                grid_args: cli_args.grid_args.merge(grid_args),
            })
        } else {
            Ok(cli_args)
        }
    }

    fn parse(self) -> Result<UvCoverageParams, UvsynthError> {
        let UvCoverageArgs {
            args_file: _,
            observation_args,
            grid_args,
        } = self;

        let (array, geometry) = observation_args.parse()?;
        let (grid_spec, mask_type) = grid_args.parse()?;

        let (ny, nx) = grid_spec.shape();
        let (fov_y, fov_x) = grid_spec.fov_deg();
        let (du, dv) = grid_spec.cell_size();
        let (max_u, max_v) = grid_spec.max_uv();
        let mut printer = InfoPrinter::new("UV grid".into());
        printer.push_line(format!("{nx}x{ny} cells, {mask_type} mask").into());
        printer.push_block(vec![
            format!("Field of view: {fov_x}° x {fov_y}°").into(),
            format!("Cell size: {du:.3} λ x {dv:.3} λ").into(),
            format!("Nyquist extent: ±{max_u:.3} λ x ±{max_v:.3} λ").into(),
        ]);
        printer.display();
        display_warnings();

        Ok(UvCoverageParams {
            array,
            geometry,
            grid_spec,
            mask_type,
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
