// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors associated with antenna arrays.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArrayError {
    #[error("An antenna array needs at least 2 antennas, but {0} were supplied")]
    TooFewAntennas(usize),

    #[error("{file}:{line}: Expected 3 columns (East, North, Up), but found {num_cols}")]
    WrongNumColumns {
        file: PathBuf,
        line: usize,
        num_cols: usize,
    },

    #[error("{file}:{line}: Couldn't parse '{value}' as a float")]
    ParseFloat {
        file: PathBuf,
        line: usize,
        value: String,
    },

    #[error("{file}:{line}: Antenna position contains a non-finite value")]
    NonFinite { file: PathBuf, line: usize },

    #[error("IO error when reading {file}: {err}")]
    IO {
        file: PathBuf,
        err: std::io::Error,
    },
}
