// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Some helper mathematics.

#[cfg(test)]
mod tests;

/// Double-precision complex numbers.
#[allow(non_camel_case_types)]
pub type c64 = num_complex::Complex64;

/// Evenly spaced values over the closed interval [`start`, `stop`]. A single
/// value is just `start`, and zero values is empty.
pub fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => vec![],
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            (0..num)
                .map(|i| {
                    // Pin the last value, rather than accumulating error.
                    if i + 1 == num {
                        stop
                    } else {
                        start + step * i as f64
                    }
                })
                .collect()
        }
    }
}

/// Round half away from zero and convert to an integer. Unlike `as` casts of
/// `f64::round`, non-finite values are rejected.
#[inline]
pub(crate) fn round_to_isize(x: f64) -> Option<isize> {
    if x.is_finite() && x.abs() < isize::MAX as f64 {
        Some(x.round() as isize)
    } else {
        None
    }
}
