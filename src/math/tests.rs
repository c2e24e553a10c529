// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use approx::assert_abs_diff_eq;

use super::*;

#[test]
fn test_linspace() {
    let values = linspace(1.0, 2.0, 5);
    assert_eq!(values.len(), 5);
    for (v, e) in values.iter().zip([1.0, 1.25, 1.5, 1.75, 2.0]) {
        assert_abs_diff_eq!(*v, e);
    }
}

#[test]
fn test_linspace_edges() {
    assert!(linspace(0.0, 1.0, 0).is_empty());
    assert_eq!(linspace(3.0, 10.0, 1), vec![3.0]);
    assert_eq!(linspace(-1.0, 1.0, 2), vec![-1.0, 1.0]);
}

#[test]
fn test_linspace_hits_stop_exactly() {
    let values = linspace(1.0, 2.0, 360);
    assert_eq!(*values.last().unwrap(), 2.0);
}

#[test]
fn test_round_to_isize() {
    assert_eq!(round_to_isize(2.5), Some(3));
    assert_eq!(round_to_isize(-2.5), Some(-3));
    assert_eq!(round_to_isize(-0.4), Some(0));
    assert_eq!(round_to_isize(f64::NAN), None);
    assert_eq!(round_to_isize(f64::INFINITY), None);
}
