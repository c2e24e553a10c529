// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Parameters that are kept modular to be used by multiple `uvsynth`
//! subcommands.
//!
//! The code here is kind of "mirroring" the code within the `cli` module; the
//! idea is that `cli` is unparsed, user-facing code, whereas parameters have
//! been parsed and are ready to be used directly.

mod simulate;
mod uv_coverage;

pub(crate) use simulate::{SimulateError, SimulateParams};
pub(crate) use uv_coverage::UvCoverageParams;
