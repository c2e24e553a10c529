// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Diagnostics of simulated images and dirty beams.

mod error;
#[cfg(test)]
mod tests;

pub use error::MetricsError;

use ndarray::prelude::*;

use crate::math::round_to_isize;

/// Added to side-lobe ratios so that a beam without side lobes has a finite
/// level.
const SLL_FLOOR: f64 = 1e-12;

/// Comparisons between a reference image and a test image.
#[derive(Debug, Clone, PartialEq)]
pub struct Metrics {
    pub mse: f64,
    pub rel_mse: f64,
    /// The absolute difference of the images.
    pub residual: Array2<f64>,
}

fn check_shapes(a: ArrayView2<f64>, b: ArrayView2<f64>) -> Result<(), MetricsError> {
    if a.dim() != b.dim() {
        return Err(MetricsError::ShapeMismatch(a.dim(), b.dim()));
    }
    if a.is_empty() {
        return Err(MetricsError::EmptyImage);
    }
    Ok(())
}

/// The mean squared difference of two images.
pub fn mse(a: ArrayView2<f64>, b: ArrayView2<f64>) -> Result<f64, MetricsError> {
    check_shapes(a, b)?;
    let sum: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(a, b)| (a - b) * (a - b))
        .sum();
    Ok(sum / a.len() as f64)
}

/// The MSE normalised by the mean square of the reference image.
pub fn rel_mse(reference: ArrayView2<f64>, test: ArrayView2<f64>) -> Result<f64, MetricsError> {
    let mse = mse(reference, test)?;
    let norm = reference.iter().map(|r| r * r).sum::<f64>() / reference.len() as f64;
    if norm == 0.0 {
        return Err(MetricsError::ZeroReference);
    }
    Ok(mse / norm)
}

/// The difference `a - b`, or its absolute value.
pub fn residuals(
    a: ArrayView2<f64>,
    b: ArrayView2<f64>,
    absolute: bool,
) -> Result<Array2<f64>, MetricsError> {
    check_shapes(a, b)?;
    let diff = &a - &b;
    Ok(if absolute { diff.mapv(f64::abs) } else { diff })
}

pub fn compute_metrics(
    reference: ArrayView2<f64>,
    test: ArrayView2<f64>,
) -> Result<Metrics, MetricsError> {
    Ok(Metrics {
        mse: mse(reference, test)?,
        rel_mse: rel_mse(reference, test)?,
        residual: residuals(reference, test, true)?,
    })
}

/// The radius [pixels] of the region around a dirty beam's peak that counts as
/// the main lobe.
pub fn compute_mask_radius(fwhm_x: f64, fwhm_y: f64, masking_factor: f64) -> usize {
    round_to_isize((fwhm_x + fwhm_y) / masking_factor)
        .map(|r| r.max(0) as usize)
        .unwrap_or(0)
}

/// Zero every pixel strictly within `radius` pixels of `centre` (row, column).
pub fn mask_main_lobe(beam: ArrayView2<f64>, centre: (usize, usize), radius: usize) -> Array2<f64> {
    let r2 = (radius * radius) as f64;
    let mut masked = beam.to_owned();
    masked.indexed_iter_mut().for_each(|((r, c), b)| {
        let dr = r as f64 - centre.0 as f64;
        let dc = c as f64 - centre.1 as f64;
        if dr * dr + dc * dc < r2 {
            *b = 0.0;
        }
    });
    masked
}

/// The side-lobe level of a (centred) dirty beam [dB]: the ratio of the
/// largest absolute value outside the main lobe to the main-lobe peak.
pub fn compute_sll(
    beam: ArrayView2<f64>,
    centre: (usize, usize),
    fwhm_x: f64,
    fwhm_y: f64,
    masking_factor: f64,
) -> Result<f64, MetricsError> {
    if beam.is_empty() {
        return Err(MetricsError::EmptyImage);
    }
    let main_peak = beam.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !(main_peak.is_finite() && main_peak > 0.0) {
        return Err(MetricsError::BadPeak(main_peak));
    }
    let radius = compute_mask_radius(fwhm_x, fwhm_y, masking_factor);
    let masked = mask_main_lobe(beam, centre, radius);
    let side_peak = masked.iter().fold(0.0, |acc: f64, &b| acc.max(b.abs()));
    Ok(10.0 * (side_peak / main_peak + SLL_FLOOR).log10())
}

/// The (row, column) of the largest value in an image.
pub fn peak_index(image: ArrayView2<f64>) -> Option<(usize, usize)> {
    image
        .indexed_iter()
        .fold(None, |best: Option<((usize, usize), f64)>, (i, &v)| match best {
            Some((_, b)) if b >= v => best,
            _ if v.is_nan() => best,
            _ => Some((i, v)),
        })
        .map(|(i, _)| i)
}

/// Estimate the full width at half maximum of a beam along its columns (x)
/// and rows (y) [pixels]. The widths are measured through the beam's peak,
/// linearly interpolating where the beam crosses half of the peak. If the
/// beam doesn't fall to half its peak before an image edge, the edge is used.
pub fn estimate_fwhm(beam: ArrayView2<f64>) -> Result<(f64, f64), MetricsError> {
    let (r, c) = peak_index(beam).ok_or(MetricsError::EmptyImage)?;
    let peak = beam[(r, c)];
    if !(peak.is_finite() && peak > 0.0) {
        return Err(MetricsError::BadPeak(peak));
    }
    let half = peak / 2.0;
    let fwhm_x = half_max_width(beam.row(r), c, half);
    let fwhm_y = half_max_width(beam.column(c), r, half);
    Ok((fwhm_x, fwhm_y))
}

fn half_max_width(cut: ArrayView1<f64>, peak: usize, half: f64) -> f64 {
    let n = cut.len();
    // Where the value falls below `half` between `inside` and `outside`.
    let crossing = |inside: usize, outside: usize| -> f64 {
        let (a, b) = (cut[inside], cut[outside]);
        let frac = (a - half) / (a - b);
        inside as f64 + frac * (outside as f64 - inside as f64)
    };

    let mut right = (n - 1) as f64;
    for i in peak + 1..n {
        if cut[i] < half {
            right = crossing(i - 1, i);
            break;
        }
    }
    let mut left = 0.0;
    for i in (0..peak).rev() {
        if cut[i] < half {
            left = crossing(i + 1, i);
            break;
        }
    }
    right - left
}

/// The central part of an image: `fraction` of each axis, centred on
/// `(N0 / 2, N1 / 2)`.
pub fn crop_centre(image: ArrayView2<f64>, fraction: f64) -> ArrayView2<f64> {
    let (n0, n1) = image.dim();
    let half_width = |n: usize| -> usize {
        let w = (n as f64 * fraction.clamp(0.0, 1.0) / 2.0).floor() as usize;
        w.max(1).min(n / 2)
    };
    let (h0, h1) = (half_width(n0), half_width(n1));
    let (c0, c1) = (n0 / 2, n1 / 2);
    image.slice_move(s![c0 - h0..(c0 + h0).min(n0), c1 - h1..(c1 + h1).min(n1)])
}
