// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::io::Write;

use approx::assert_abs_diff_eq;
use indoc::indoc;
use tempfile::NamedTempFile;

use super::*;

fn three_antennas() -> Vec<ENH> {
    vec![
        ENH::new(0.0, 0.0, 0.0),
        ENH::new(100.0, 0.0, 0.0),
        ENH::new(0.0, 50.0, 2.0),
    ]
}

#[test]
fn test_get_baselines() {
    let baselines = get_baselines(&three_antennas());
    assert_eq!(baselines.len(), 6);

    let expected = [
        ENH::new(100.0, 0.0, 0.0),
        ENH::new(0.0, 50.0, 2.0),
        ENH::new(-100.0, 0.0, 0.0),
        ENH::new(-100.0, 50.0, 2.0),
        ENH::new(0.0, -50.0, -2.0),
        ENH::new(100.0, -50.0, -2.0),
    ];
    for (exp, bl) in expected.iter().zip(baselines.as_slice()) {
        assert_abs_diff_eq!(exp.e, bl.e);
        assert_abs_diff_eq!(exp.n, bl.n);
        assert_abs_diff_eq!(exp.h, bl.h);
    }
}

#[test]
fn test_baselines_come_in_opposite_pairs() {
    let array = AntennaArray::new(three_antennas()).unwrap();
    let baselines = array.baselines();
    assert_eq!(baselines.len(), array.num_baselines());
    for bl in baselines.as_slice() {
        let reverse = -*bl;
        assert!(baselines.as_slice().contains(&reverse));
    }
}

#[test]
fn test_num_baselines_scales_quadratically() {
    for n in 2..10 {
        let positions = (0..n).map(|i| ENH::new(i as f64, 0.0, 0.0)).collect();
        let array = AntennaArray::new(positions).unwrap();
        assert_eq!(array.baselines().len(), n * (n - 1));
    }
}

#[test]
fn test_empty_positions_give_no_baselines() {
    assert!(get_baselines(&[]).is_empty());
    assert!(get_baselines(&[ENH::default()]).is_empty());
}

#[test]
fn test_too_few_antennas() {
    let result = AntennaArray::new(vec![ENH::default()]);
    assert!(matches!(result, Err(ArrayError::TooFewAntennas(1))));
    let result = AntennaArray::new(vec![]);
    assert!(matches!(result, Err(ArrayError::TooFewAntennas(0))));
}

#[test]
fn test_max_baseline_length() {
    let array = AntennaArray::new(three_antennas()).unwrap();
    let expected = (100.0_f64.powi(2) + 50.0_f64.powi(2) + 2.0_f64.powi(2)).sqrt();
    assert_abs_diff_eq!(array.baselines().max_length(), expected);
}

#[test]
fn test_read_enu_txt() {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(
        indoc! {"
            # East North Up
            0.0 0.0 0.0

            100.0   0.0 0.0
            -25.5 12.25 1e-1
        "}
        .as_bytes(),
    )
    .unwrap();
    f.flush().unwrap();

    let array = AntennaArray::read_enu_txt(f.path()).unwrap();
    assert_eq!(array.num_antennas(), 3);
    let last = array.positions()[2];
    assert_abs_diff_eq!(last.e, -25.5);
    assert_abs_diff_eq!(last.n, 12.25);
    assert_abs_diff_eq!(last.h, 0.1);
}

#[test]
fn test_read_enu_txt_bad_columns() {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(b"0.0 0.0 0.0\n1.0 2.0\n").unwrap();
    f.flush().unwrap();

    let result = AntennaArray::read_enu_txt(f.path());
    assert!(matches!(
        result,
        Err(ArrayError::WrongNumColumns {
            line: 2,
            num_cols: 2,
            ..
        })
    ));
}

#[test]
fn test_read_enu_txt_bad_float() {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(b"0.0 0.0 0.0\n1.0 two 0.0\n").unwrap();
    f.flush().unwrap();

    let result = AntennaArray::read_enu_txt(f.path());
    match result {
        Err(ArrayError::ParseFloat { line, value, .. }) => {
            assert_eq!(line, 2);
            assert_eq!(value, "two");
        }
        other => panic!("Unexpected result: {other:?}"),
    }
}

#[test]
fn test_read_enu_txt_single_antenna() {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(b"0.0 0.0 0.0\n").unwrap();
    f.flush().unwrap();

    let result = AntennaArray::read_enu_txt(f.path());
    assert!(matches!(result, Err(ArrayError::TooFewAntennas(1))));
}

#[test]
fn test_read_enu_txt_missing_file() {
    let result = AntennaArray::read_enu_txt("/this/file/does/not/exist.txt");
    assert!(matches!(result, Err(ArrayError::IO { .. })));
}
