// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use approx::assert_abs_diff_eq;
use ndarray::prelude::*;

use super::*;
use crate::constants::FRAC_PI_2;

#[test]
fn no_beam_means_no_beam() {
    let beam = create_no_beam_object();
    assert_eq!(beam.beam_type(), BeamType::None);
    let intensity = beam.intensity(16, 2.0);
    assert_eq!(intensity.dim(), (16, 16));
    assert_abs_diff_eq!(intensity, Array2::ones((16, 16)));
}

#[test]
fn test_radial_angles() {
    // 0.5 degrees per pixel.
    let angles = radial_angles_deg(64, 32.0);
    assert_abs_diff_eq!(angles[(32, 32)], 0.0);
    assert_abs_diff_eq!(angles[(32, 36)], 2.0);
    assert_abs_diff_eq!(angles[(28, 32)], 2.0);
    assert_abs_diff_eq!(angles[(35, 36)], 2.5);
}

#[test]
fn cos_cube_beam_values_are_sensible() {
    let beam = CosCubeBeam::default();
    assert_eq!(beam.beam_type(), BeamType::CosCube);
    let intensity = beam.intensity(64, 32.0);

    assert_abs_diff_eq!(intensity[(32, 32)], 1.0);
    // 2 degrees from the centre.
    assert_abs_diff_eq!(intensity[(32, 36)], 0.4_f64.cos().powi(6), epsilon = 1e-12);
    // The corners are beyond the first null (~7.85 degrees).
    assert_abs_diff_eq!(beam.first_null_deg(), FRAC_PI_2 / 0.2);
    assert_eq!(intensity[(0, 0)], 0.0);
    assert_eq!(intensity[(32, 0)], 0.0);

    // Within the main lobe, the intensity falls off with distance.
    let row = intensity.row(32);
    for c in 33..47 {
        assert!(row[c] < row[c - 1], "column {c}");
    }
    assert!(intensity.iter().all(|&i| (0.0..=1.0).contains(&i)));
}

#[test]
fn cos_cube_beam_scales_with_frequency() {
    let low = CosCubeBeam::new(0.2, 1.0).unwrap();
    let high = CosCubeBeam::new(0.2, 2.0).unwrap();
    assert_abs_diff_eq!(low.first_null_deg(), 2.0 * high.first_null_deg());
    let low = low.intensity(64, 32.0);
    let high = high.intensity(64, 32.0);
    // 1 degree at 2 GHz is the same as 2 degrees at 1 GHz.
    assert_abs_diff_eq!(high[(32, 34)], low[(32, 36)], epsilon = 1e-12);
}

#[test]
fn gaussian_beam_has_the_right_width() {
    // 1 degree per pixel.
    let beam = GaussianBeam::new(4.0).unwrap();
    assert_eq!(beam.beam_type(), BeamType::Gaussian);
    let intensity = beam.intensity(64, 64.0);
    assert_abs_diff_eq!(intensity[(32, 32)], 1.0);
    // Half the FWHM from the centre is half the peak.
    assert_abs_diff_eq!(intensity[(32, 34)], 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(intensity[(30, 32)], 0.5, epsilon = 1e-12);
    // Circular symmetry.
    assert_abs_diff_eq!(intensity[(35, 36)], intensity[(32, 37)], epsilon = 1e-12);
}

#[test]
fn test_odd_sized_beams_are_centred() {
    let intensity = GaussianBeam::new(2.0).unwrap().intensity(7, 7.0);
    assert_abs_diff_eq!(intensity[(3, 3)], 1.0);
    assert_abs_diff_eq!(intensity[(3, 0)], intensity[(3, 6)], epsilon = 1e-12);
    assert_abs_diff_eq!(intensity[(0, 3)], intensity[(6, 3)], epsilon = 1e-12);
}

#[test]
fn test_invalid_beam_parameters() {
    assert_eq!(
        GaussianBeam::new(0.0),
        Err(BeamError::InvalidParameter {
            name: "fwhm_deg",
            value: 0.0
        })
    );
    assert!(GaussianBeam::new(f64::NAN).is_err());
    assert_eq!(
        CosCubeBeam::new(-0.2, 1.0),
        Err(BeamError::InvalidParameter {
            name: "c",
            value: -0.2
        })
    );
    assert!(CosCubeBeam::new(0.2, f64::INFINITY).is_err());
}

#[test]
fn test_create_beam_object() {
    for beam_type in BeamType::iter() {
        let beam = create_beam_object(beam_type, Some(1.0)).unwrap();
        assert_eq!(beam.beam_type(), beam_type);
    }
    assert!(matches!(
        create_beam_object(BeamType::Gaussian, None),
        Err(BeamError::MissingFwhm)
    ));
}

#[test]
fn test_parse_beam_type() {
    assert_eq!(BeamType::parse("none"), Ok(BeamType::None));
    assert_eq!(BeamType::parse("Cos-Cube"), Ok(BeamType::CosCube));
    assert_eq!(BeamType::parse("gaussian "), Ok(BeamType::Gaussian));
    let err = BeamType::parse("fee").unwrap_err();
    assert_eq!(err, BeamError::InvalidBeamType("fee".to_string()));
    assert!(err.to_string().contains("none, cos-cube, gaussian"));
}
