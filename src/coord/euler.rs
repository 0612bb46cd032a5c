// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Decompose a rotation matrix into ZYX Euler angles.

For a matrix `R = R_z(phi) · R_y(theta) · R_x(psi)`, any `R` with
`|R[2,0]| < 1` has exactly two decompositions, `theta` and `pi - theta`.
[`EulerAngles::from_matrix`] always returns the one on the principal branch of
`asin` (`theta` in `[-pi/2, pi/2]`); the other is available from
[`EulerAngles::alternative`]. No attempt is made to pick a "better" one.

At gimbal lock (`|R[2,0]| = 1`) only `psi - phi` (or `psi + phi`) is
determined, so `phi` is set to zero and `psi` absorbs the rotation.
 */

use serde::{Deserialize, Serialize};

use super::matrix::RotationMatrix;
use crate::constants::{FRAC_PI_2, PI};

/// ZYX Euler angles \[radians\].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EulerAngles {
    /// Rotation about the x axis (applied first).
    pub psi: f64,
    /// Rotation about the y axis.
    pub theta: f64,
    /// Rotation about the z axis (applied last).
    pub phi: f64,
}

impl EulerAngles {
    pub fn new(psi: f64, theta: f64, phi: f64) -> Self {
        Self { psi, theta, phi }
    }

    /// Get the primary-branch Euler angles of `r`. `r` is assumed to be a
    /// proper rotation.
    pub fn from_matrix(r: &RotationMatrix) -> Self {
        let r20 = r[(2, 0)];
        if r20.abs() < 1.0 {
            Self::with_theta(r, -r20.asin())
        } else {
            // Gimbal lock. Rounding can push |R[2,0]| just past 1, which would
            // give NaN from asin, so anything >= 1 is handled here.
            let phi = 0.0;
            if r20 < 0.0 {
                Self {
                    psi: phi + r[(0, 1)].atan2(r[(0, 2)]),
                    theta: FRAC_PI_2,
                    phi,
                }
            } else {
                Self {
                    psi: -phi + (-r[(0, 1)]).atan2(-r[(0, 2)]),
                    theta: -FRAC_PI_2,
                    phi,
                }
            }
        }
    }

    /// The second decomposition of `r`, with `theta' = pi - theta`. Returns
    /// `None` at gimbal lock, where the decomposition isn't a discrete pair.
    pub fn alternative(r: &RotationMatrix) -> Option<Self> {
        let r20 = r[(2, 0)];
        if r20.abs() < 1.0 {
            Some(Self::with_theta(r, PI + r20.asin()))
        } else {
            None
        }
    }

    fn with_theta(r: &RotationMatrix, theta: f64) -> Self {
        let c_theta = theta.cos();
        Self {
            psi: (r[(2, 1)] / c_theta).atan2(r[(2, 2)] / c_theta),
            theta,
            phi: (r[(1, 0)] / c_theta).atan2(r[(0, 0)] / c_theta),
        }
    }

    /// Compose the rotation `R_z(phi) · R_y(theta) · R_x(psi)`.
    pub fn to_matrix(&self) -> RotationMatrix {
        RotationMatrix::rotation_about_z(self.phi)
            * RotationMatrix::rotation_about_y(self.theta)
            * RotationMatrix::rotation_about_x(self.psi)
    }
}

impl std::fmt::Display for EulerAngles {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "(psi {}°, theta {}°, phi {}°)",
            self.psi.to_degrees(),
            self.theta.to_degrees(),
            self.phi.to_degrees()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::*;

    #[test]
    fn identity_has_zero_angles() {
        let e = EulerAngles::from_matrix(&RotationMatrix::identity());
        assert_abs_diff_eq!(e.psi, 0.0);
        assert_abs_diff_eq!(e.theta, 0.0);
        assert_abs_diff_eq!(e.phi, 0.0);
    }

    #[test]
    fn recovers_known_angles() {
        let expected = EulerAngles::new(0.4, -0.7, 2.1);
        let e = EulerAngles::from_matrix(&expected.to_matrix());
        assert_abs_diff_eq!(e.psi, expected.psi, epsilon = 1e-12);
        assert_abs_diff_eq!(e.theta, expected.theta, epsilon = 1e-12);
        assert_abs_diff_eq!(e.phi, expected.phi, epsilon = 1e-12);
    }

    #[test]
    fn alternative_reproduces_the_same_matrix() {
        let r = EulerAngles::new(-1.2, 0.3, 0.9).to_matrix();
        let primary = EulerAngles::from_matrix(&r);
        let alt = EulerAngles::alternative(&r).unwrap();
        assert_abs_diff_eq!(alt.theta, PI - primary.theta, epsilon = 1e-12);
        assert_abs_diff_eq!(alt.to_matrix(), r, epsilon = 1e-12);
    }

    #[test]
    fn gimbal_lock_positive() {
        // R[2,0] = -1 exactly.
        let r = RotationMatrix([[0.0, 0.6, 0.8], [0.0, 0.8, -0.6], [-1.0, 0.0, 0.0]]);
        let e = EulerAngles::from_matrix(&r);
        assert_eq!(e.phi, 0.0);
        assert_abs_diff_eq!(e.theta, FRAC_PI_2);
        assert_abs_diff_eq!(e.psi, 0.6_f64.atan2(0.8));
        assert_abs_diff_eq!(e.to_matrix(), r, epsilon = 1e-12);
        assert!(EulerAngles::alternative(&r).is_none());
    }

    #[test]
    fn gimbal_lock_negative() {
        // R[2,0] = 1 exactly.
        let r = RotationMatrix([[0.0, -0.6, -0.8], [0.0, 0.8, -0.6], [1.0, 0.0, 0.0]]);
        let e = EulerAngles::from_matrix(&r);
        assert_eq!(e.phi, 0.0);
        assert_abs_diff_eq!(e.theta, -FRAC_PI_2);
        assert_abs_diff_eq!(e.psi, 0.6_f64.atan2(0.8));
        assert_abs_diff_eq!(e.to_matrix(), r, epsilon = 1e-12);
    }
}
