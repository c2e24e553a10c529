// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use approx::assert_abs_diff_eq;

use super::*;
use crate::constants::FWHM_FACTOR;

/// A circular Gaussian with a peak of 1 at `centre`.
fn gaussian_image(shape: (usize, usize), centre: (f64, f64), fwhm_pix: f64) -> Array2<f64> {
    let sigma = fwhm_pix / FWHM_FACTOR;
    Array2::from_shape_fn(shape, |(r, c)| {
        let dr = r as f64 - centre.0;
        let dc = c as f64 - centre.1;
        (-(dr * dr + dc * dc) / (2.0 * sigma * sigma)).exp()
    })
}

#[test]
fn test_mse() {
    let a = array![[1.0, 2.0], [3.0, 4.0]];
    let b = array![[1.0, 0.0], [3.0, 8.0]];
    // (0 + 4 + 0 + 16) / 4
    assert_abs_diff_eq!(mse(a.view(), b.view()).unwrap(), 5.0);
    assert_abs_diff_eq!(mse(a.view(), a.view()).unwrap(), 0.0);
    // Mean square of a = 30 / 4
    assert_abs_diff_eq!(rel_mse(a.view(), b.view()).unwrap(), 5.0 / 7.5);
}

#[test]
fn test_residuals() {
    let a = array![[1.0, 2.0], [3.0, 4.0]];
    let b = array![[1.5, 0.0], [3.0, 8.0]];
    assert_abs_diff_eq!(
        residuals(a.view(), b.view(), false).unwrap(),
        array![[-0.5, 2.0], [0.0, -4.0]]
    );
    assert_abs_diff_eq!(
        residuals(a.view(), b.view(), true).unwrap(),
        array![[0.5, 2.0], [0.0, 4.0]]
    );
}

#[test]
fn test_compute_metrics() {
    let reference = array![[0.0, 1.0], [0.0, 1.0]];
    let test = array![[0.0, 0.5], [0.5, 1.0]];
    let metrics = compute_metrics(reference.view(), test.view()).unwrap();
    assert_abs_diff_eq!(metrics.mse, 0.125);
    assert_abs_diff_eq!(metrics.rel_mse, 0.25);
    assert_abs_diff_eq!(metrics.residual, array![[0.0, 0.5], [0.5, 0.0]]);
}

#[test]
fn test_metric_errors() {
    let a = Array2::<f64>::zeros((2, 2));
    let b = Array2::<f64>::zeros((2, 3));
    assert_eq!(
        mse(a.view(), b.view()),
        Err(MetricsError::ShapeMismatch((2, 2), (2, 3)))
    );
    assert!(residuals(a.view(), b.view(), true).is_err());
    assert_eq!(
        rel_mse(a.view(), a.view()),
        Err(MetricsError::ZeroReference)
    );
    let empty = Array2::<f64>::zeros((0, 0));
    assert_eq!(
        mse(empty.view(), empty.view()),
        Err(MetricsError::EmptyImage)
    );
}

#[test]
fn test_compute_mask_radius() {
    assert_eq!(compute_mask_radius(4.0, 5.0, 3.0), 3);
    assert_eq!(compute_mask_radius(4.0, 4.0, 3.0), 3);
    assert_eq!(compute_mask_radius(1.0, 1.0, 3.0), 1);
    assert_eq!(compute_mask_radius(0.0, 0.0, 3.0), 0);
}

#[test]
fn test_mask_main_lobe() {
    let beam = Array2::ones((7, 7));
    let masked = mask_main_lobe(beam.view(), (3, 3), 2);
    // Only pixels strictly inside the radius are masked.
    assert_eq!(masked[(3, 3)], 0.0);
    assert_eq!(masked[(3, 4)], 0.0);
    assert_eq!(masked[(4, 4)], 0.0);
    assert_eq!(masked[(3, 5)], 1.0);
    assert_eq!(masked[(5, 4)], 1.0);
    assert_abs_diff_eq!(masked.sum(), 49.0 - 9.0);

    let untouched = mask_main_lobe(beam.view(), (3, 3), 0);
    assert_abs_diff_eq!(untouched, beam);
}

#[test]
fn test_sll() {
    let mut beam = Array2::zeros((32, 32));
    beam[(16, 16)] = 1.0;
    beam[(16, 17)] = 0.6;
    // A side lobe, outside the masked region.
    beam[(16, 26)] = -0.1;
    let sll = compute_sll(beam.view(), (16, 16), 3.0, 3.0, 3.0).unwrap();
    assert_abs_diff_eq!(sll, -10.0, epsilon = 1e-9);

    // Without side lobes, the level is set by the floor.
    beam[(16, 26)] = 0.0;
    let sll = compute_sll(beam.view(), (16, 16), 3.0, 3.0, 3.0).unwrap();
    assert_abs_diff_eq!(sll, -120.0, epsilon = 1e-6);

    let zeros = Array2::zeros((4, 4));
    assert!(matches!(
        compute_sll(zeros.view(), (2, 2), 1.0, 1.0, 3.0),
        Err(MetricsError::BadPeak(_))
    ));
}

#[test]
fn test_peak_index() {
    let image = array![[0.0, 3.0, 1.0], [2.0, f64::NAN, -1.0]];
    assert_eq!(peak_index(image.view()), Some((0, 1)));
    assert_eq!(peak_index(Array2::<f64>::zeros((0, 3)).view()), None);
}

#[test]
fn test_estimate_fwhm_of_a_gaussian() {
    let beam = gaussian_image((64, 64), (32.0, 32.0), 8.0);
    let (fwhm_x, fwhm_y) = estimate_fwhm(beam.view()).unwrap();
    assert_abs_diff_eq!(fwhm_x, 8.0, epsilon = 0.1);
    assert_abs_diff_eq!(fwhm_y, 8.0, epsilon = 0.1);
}

#[test]
fn test_estimate_fwhm_of_an_elongated_beam() {
    let sigma_x = 10.0 / FWHM_FACTOR;
    let sigma_y = 4.0 / FWHM_FACTOR;
    let beam = Array2::from_shape_fn((64, 64), |(r, c)| {
        let dr = r as f64 - 30.0;
        let dc = c as f64 - 34.0;
        2.0 * (-(dc * dc) / (2.0 * sigma_x * sigma_x) - (dr * dr) / (2.0 * sigma_y * sigma_y))
            .exp()
    });
    let (fwhm_x, fwhm_y) = estimate_fwhm(beam.view()).unwrap();
    assert_abs_diff_eq!(fwhm_x, 10.0, epsilon = 0.1);
    assert_abs_diff_eq!(fwhm_y, 4.0, epsilon = 0.2);
}

#[test]
fn test_estimate_fwhm_at_an_edge() {
    // The beam never falls to half its peak.
    let beam = Array2::ones((5, 9));
    assert_eq!(estimate_fwhm(beam.view()), Ok((8.0, 4.0)));
}

#[test]
fn test_crop_centre() {
    let image = Array2::from_shape_fn((20, 10), |(r, c)| (r * 10 + c) as f64);
    let cropped = crop_centre(image.view(), 0.2);
    assert_eq!(cropped.dim(), (4, 2));
    assert_eq!(cropped[(0, 0)], image[(8, 4)]);
    assert_eq!(crop_centre(image.view(), 1.0).dim(), (20, 10));
}
