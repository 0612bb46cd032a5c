// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use approx::assert_abs_diff_eq;

use super::*;
use crate::constants::{FRAC_PI_2, PI};
use std::f64::consts::FRAC_PI_4;

#[test]
fn test_spherical_to_cartesian_zenith() {
    // The azimuth doesn't matter when looking straight up.
    for az in [0.0, 1.0, PI, 5.0] {
        assert_abs_diff_eq!(
            spherical_to_cartesian(0.0, az),
            Xyz::new(0.0, 0.0, 1.0),
            epsilon = 1e-15
        );
    }
}

#[test]
fn test_spherical_to_cartesian_horizon() {
    assert_abs_diff_eq!(
        spherical_to_cartesian(FRAC_PI_2, 0.0),
        Xyz::new(1.0, 0.0, 0.0),
        epsilon = 1e-15
    );
    assert_abs_diff_eq!(
        spherical_to_cartesian(FRAC_PI_2, FRAC_PI_2),
        Xyz::new(0.0, 1.0, 0.0),
        epsilon = 1e-15
    );
}

#[test]
fn test_spherical_to_cartesian_is_unit() {
    let v = spherical_to_cartesian(1.234, -7.89);
    assert_abs_diff_eq!(v.norm(), 1.0, epsilon = 1e-15);
}

#[test]
fn test_spherical_to_cartesian_many() {
    let zeniths = [0.1, 0.5, 1.2];
    let azimuths = [3.0, 0.0, 4.5];
    let many = spherical_to_cartesian_many(&zeniths, &azimuths).unwrap();
    assert_eq!(many.len(), 3);
    for ((zen, az), v) in zeniths.iter().zip(azimuths.iter()).zip(many) {
        assert_eq!(v, spherical_to_cartesian(*zen, *az));
    }
}

#[test]
fn test_spherical_to_cartesian_many_mismatched() {
    let result = spherical_to_cartesian_many(&[0.1, 0.2], &[0.3]);
    assert!(matches!(
        result,
        Err(FrameError::InvalidFrameShape {
            expected: 2,
            got: 1,
            ..
        })
    ));
}

#[test]
fn test_cartesian_to_spherical() {
    let (zen, az) = cartesian_to_spherical(spherical_to_cartesian(0.8, 5.5) * 42.0).unwrap();
    assert_abs_diff_eq!(zen, 0.8, epsilon = 1e-12);
    assert_abs_diff_eq!(az, 5.5, epsilon = 1e-12);

    // Negative azimuths are wrapped.
    let (_, az) = cartesian_to_spherical(spherical_to_cartesian(0.8, -0.5)).unwrap();
    assert_abs_diff_eq!(az, TAU - 0.5, epsilon = 1e-12);
}

#[test]
fn test_cartesian_to_spherical_zero() {
    assert!(matches!(
        cartesian_to_spherical(Xyz::origin()),
        Err(FrameError::DegenerateVector { .. })
    ));
}

#[test]
fn test_cartesian_to_spherical_extreme_magnitudes() {
    let (zen, az) = cartesian_to_spherical(Xyz::new(1e200, 1e200, 0.0)).unwrap();
    assert_abs_diff_eq!(zen, FRAC_PI_2, epsilon = 1e-15);
    assert_abs_diff_eq!(az, FRAC_PI_4, epsilon = 1e-15);

    let (zen, az) = cartesian_to_spherical(Xyz::new(0.0, -1e-170, 1e-170)).unwrap();
    assert_abs_diff_eq!(zen, FRAC_PI_4, epsilon = 1e-15);
    assert_abs_diff_eq!(az, 3.0 * FRAC_PI_2, epsilon = 1e-15);

    assert!(matches!(
        cartesian_to_spherical(Xyz::new(f64::NAN, 0.0, 1.0)),
        Err(FrameError::DegenerateVector { .. })
    ));
}
