// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Antenna arrays and the baselines they form.
//!
//! Antenna positions are East, North, Up (ENU) coordinates in metres, relative
//! to some local reference point. Every ordered pair of distinct antennas
//! forms a baseline; both (i, j) and (j, i) are kept, as a baseline and its
//! reverse both sample the UV plane (the sky brightness is real, so its
//! visibilities are Hermitian).

mod error;
#[cfg(test)]
mod tests;

pub use error::ArrayError;

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use log::{debug, trace};
use vec1::Vec1;

use crate::coord::ENH;

/// An ordered, immutable collection of antenna positions. There are always at
/// least two antennas.
#[derive(Debug, Clone, PartialEq)]
pub struct AntennaArray {
    positions: Vec1<ENH>,
}

impl AntennaArray {
    /// Create a new array from ENU positions [metres].
    pub fn new(positions: Vec<ENH>) -> Result<AntennaArray, ArrayError> {
        let num_antennas = positions.len();
        if num_antennas < 2 {
            return Err(ArrayError::TooFewAntennas(num_antennas));
        }
        let positions = Vec1::try_from_vec(positions)
            .map_err(|_| ArrayError::TooFewAntennas(num_antennas))?;
        Ok(AntennaArray { positions })
    }

    /// Read antenna positions from a plain-text file. Each non-empty line that
    /// doesn't start with '#' must have three whitespace-separated columns:
    /// East, North and Up [metres].
    pub fn read_enu_txt<P: AsRef<Path>>(file: P) -> Result<AntennaArray, ArrayError> {
        let file = file.as_ref();
        debug!("Reading antenna ENU positions from {}", file.display());
        let f = File::open(file).map_err(|err| ArrayError::IO {
            file: file.to_path_buf(),
            err,
        })?;

        let mut positions = vec![];
        for (i_line, line) in BufReader::new(f).lines().enumerate() {
            let line = line.map_err(|err| ArrayError::IO {
                file: file.to_path_buf(),
                err,
            })?;
            let line_num = i_line + 1;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let cols: Vec<&str> = trimmed.split_whitespace().collect();
            if cols.len() != 3 {
                return Err(ArrayError::WrongNumColumns {
                    file: file.to_path_buf(),
                    line: line_num,
                    num_cols: cols.len(),
                });
            }
            let mut enu = [0.0_f64; 3];
            for (value, col) in enu.iter_mut().zip(cols) {
                *value = col.parse().map_err(|_| ArrayError::ParseFloat {
                    file: file.to_path_buf(),
                    line: line_num,
                    value: col.to_string(),
                })?;
            }
            if enu.iter().any(|v| !v.is_finite()) {
                return Err(ArrayError::NonFinite {
                    file: file.to_path_buf(),
                    line: line_num,
                });
            }
            let [e, n, h] = enu;
            trace!("Antenna {}: {e} {n} {h}", positions.len());
            positions.push(ENH { e, n, h });
        }

        AntennaArray::new(positions)
    }

    pub fn positions(&self) -> &[ENH] {
        self.positions.as_slice()
    }

    pub fn num_antennas(&self) -> usize {
        self.positions.len()
    }

    /// The number of baselines formed by this array, counting both directions
    /// of every antenna pair.
    pub fn num_baselines(&self) -> usize {
        let n = self.num_antennas();
        n * (n - 1)
    }

    /// Derive the ENU baseline vectors of this array. See
    /// [`get_baselines`].
    pub fn baselines(&self) -> BaselineSet {
        get_baselines(self.positions())
    }
}

/// ENU baseline vectors [metres]. For `N` antennas there are `N * (N - 1)`
/// baselines, as both directions of each antenna pair are kept.
#[derive(Debug, Clone, PartialEq)]
pub struct BaselineSet {
    baselines: Vec<ENH>,
}

impl BaselineSet {
    pub fn as_slice(&self) -> &[ENH] {
        &self.baselines
    }

    pub fn len(&self) -> usize {
        self.baselines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.baselines.is_empty()
    }

    /// The length of the longest baseline [metres]. Zero if there are no
    /// baselines.
    pub fn max_length(&self) -> f64 {
        self.baselines
            .iter()
            .map(|b| b.length())
            .fold(0.0, f64::max)
    }
}

impl From<Vec<ENH>> for BaselineSet {
    fn from(baselines: Vec<ENH>) -> Self {
        BaselineSet { baselines }
    }
}

/// For every ordered pair of distinct antennas (i, j), calculate the baseline
/// `antenna_j - antenna_i`. The baselines are ordered by i, then j. Fewer than
/// two positions produce an empty set.
pub fn get_baselines(positions: &[ENH]) -> BaselineSet {
    let num_antennas = positions.len();
    let mut baselines = Vec::with_capacity(num_antennas * num_antennas.saturating_sub(1));
    for (i, &pos_i) in positions.iter().enumerate() {
        for (j, &pos_j) in positions.iter().enumerate() {
            if i == j {
                continue;
            }
            baselines.push(pos_j - pos_i);
        }
    }
    debug!(
        "Formed {} baselines from {num_antennas} antennas",
        baselines.len()
    );
    BaselineSet { baselines }
}
