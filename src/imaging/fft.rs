// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Centred two-dimensional Fourier transforms between the sky and UV planes.
//!
//! Both the sky and UV planes keep their origin at index `(N0 / 2, N1 / 2)`,
//! so each transform is wrapped in the appropriate shifts:
//!
//! `sky2uv(x) = fftshift(fft2(ifftshift(x)))`
//!
//! `uv2sky(x) = fftshift(ifft2(ifftshift(x)))`
//!
//! The forward transform is unnormalised and the inverse transform is
//! normalised by `1 / (N0 N1)`, so `uv2sky(sky2uv(x)) == x` to floating-point
//! precision.

use std::sync::Arc;

use ndarray::{parallel::prelude::*, prelude::*};
use rustfft::{Fft, FftDirection, FftPlanner};

use crate::math::c64;

/// Transform a sky-plane image to the UV plane. Real-valued images are
/// promoted to complex.
pub fn sky2uv<A>(sky: ArrayView2<A>) -> Array2<c64>
where
    A: Copy + Into<c64>,
{
    let sky: Array2<c64> = sky.mapv(Into::into);
    let shifted = ifftshift(sky.view());
    let transformed = fft2(shifted, FftDirection::Forward);
    fftshift(transformed.view())
}

/// Transform a UV-plane grid to the sky plane. Real-valued grids are promoted
/// to complex.
pub fn uv2sky<A>(uv: ArrayView2<A>) -> Array2<c64>
where
    A: Copy + Into<c64>,
{
    let uv: Array2<c64> = uv.mapv(Into::into);
    let shifted = ifftshift(uv.view());
    let mut transformed = fft2(shifted, FftDirection::Inverse);
    if !transformed.is_empty() {
        let norm = 1.0 / transformed.len() as f64;
        transformed.mapv_inplace(|v| v * norm);
    }
    fftshift(transformed.view())
}

/// Move the zero-frequency element from index `(0, 0)` to the centre of the
/// array, `(N0 / 2, N1 / 2)`.
pub fn fftshift<T: Clone>(a: ArrayView2<T>) -> Array2<T> {
    let (n0, n1) = a.dim();
    roll(a, (n0 / 2, n1 / 2))
}

/// The inverse of [`fftshift`]. This differs from `fftshift` only for axes of
/// odd length.
pub fn ifftshift<T: Clone>(a: ArrayView2<T>) -> Array2<T> {
    let (n0, n1) = a.dim();
    roll(a, (n0 - n0 / 2, n1 - n1 / 2))
}

/// Cyclically shift the elements of an array so that element `(i, j)` moves to
/// `((i + s0) mod N0, (j + s1) mod N1)`.
fn roll<T: Clone>(a: ArrayView2<T>, (s0, s1): (usize, usize)) -> Array2<T> {
    let (n0, n1) = a.dim();
    Array2::from_shape_fn((n0, n1), |(r, c)| {
        a[((r + n0 - s0 % n0) % n0, (c + n1 - s1 % n1) % n1)].clone()
    })
}

/// An unnormalised 2D FFT, done as 1D FFTs along rows then columns. Rows are
/// processed in parallel.
fn fft2(a: Array2<c64>, direction: FftDirection) -> Array2<c64> {
    if a.is_empty() {
        return a;
    }
    let (n0, n1) = a.dim();
    let mut planner = FftPlanner::new();
    let row_fft = planner.plan_fft(n1, direction);
    let col_fft = planner.plan_fft(n0, direction);

    let mut a = a.as_standard_layout().into_owned();
    fft_rows(&mut a, &row_fft);
    // Transposing makes the columns contiguous.
    let mut t = a.t().as_standard_layout().into_owned();
    fft_rows(&mut t, &col_fft);
    t.t().as_standard_layout().into_owned()
}

fn fft_rows(a: &mut Array2<c64>, fft: &Arc<dyn Fft<f64>>) {
    a.axis_iter_mut(Axis(0))
        .into_par_iter()
        .for_each(|mut row| match row.as_slice_mut() {
            Some(slice) => fft.process(slice),
            None => {
                let mut buffer = row.to_vec();
                fft.process(&mut buffer);
                row.assign(&ArrayView1::from(&buffer));
            }
        });
}
