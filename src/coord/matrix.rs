// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! 3x3 change-of-basis matrices.
//!
//! Every matrix built by this crate has orthonormal rows, so the inverse of a
//! [`RotationMatrix`] is always taken as its transpose. Nothing here performs
//! a general matrix inversion.

use serde::{Deserialize, Serialize};

use super::xyz::Xyz;

/// A row-major 3x3 matrix. Applying it to an [`Xyz`] takes the dot product of
/// each row with the vector, so a matrix built from basis vectors `[e1; e2;
/// e3]` expresses a vector in that basis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RotationMatrix(pub [[f64; 3]; 3]);

impl RotationMatrix {
    pub const fn identity() -> Self {
        Self([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Build a matrix from its three rows.
    pub fn from_rows(e1: Xyz, e2: Xyz, e3: Xyz) -> Self {
        Self([e1.to_array(), e2.to_array(), e3.to_array()])
    }

    /// Rotation about the z axis. With `angle` positive, the x axis is
    /// rotated towards the y axis.
    pub fn rotation_about_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self([[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Rotation about the y axis.
    pub fn rotation_about_y(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self([[c, 0.0, s], [0.0, 1.0, 0.0], [-s, 0.0, c]])
    }

    /// Rotation about the x axis.
    pub fn rotation_about_x(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self([[1.0, 0.0, 0.0], [0.0, c, -s], [0.0, s, c]])
    }

    pub fn row(&self, i: usize) -> Xyz {
        Xyz::from(self.0[i])
    }

    pub fn transpose(&self) -> Self {
        let m = &self.0;
        Self([
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ])
    }

    pub fn determinant(&self) -> f64 {
        self.row(0).dot(&self.row(1).cross(&self.row(2)))
    }

    /// Does `M · Mᵀ` equal the identity to within `epsilon` (elementwise)?
    pub fn is_orthonormal(&self, epsilon: f64) -> bool {
        let product = *self * self.transpose();
        product
            .0
            .iter()
            .flatten()
            .zip(RotationMatrix::identity().0.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

impl Default for RotationMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::ops::Index<(usize, usize)> for RotationMatrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.0[row][col]
    }
}

impl std::ops::Mul<Xyz> for RotationMatrix {
    type Output = Xyz;

    fn mul(self, v: Xyz) -> Xyz {
        &self * v
    }
}

impl std::ops::Mul<Xyz> for &RotationMatrix {
    type Output = Xyz;

    fn mul(self, v: Xyz) -> Xyz {
        let m = &self.0;
        Xyz {
            x: m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z,
            y: m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z,
            z: m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z,
        }
    }
}

impl std::ops::Mul for RotationMatrix {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut out = [[0.0; 3]; 3];
        for (i, out_row) in out.iter_mut().enumerate() {
            for (j, out_elem) in out_row.iter_mut().enumerate() {
                *out_elem = (0..3).map(|k| self.0[i][k] * rhs.0[k][j]).sum();
            }
        }
        Self(out)
    }
}

impl std::fmt::Display for RotationMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let m = &self.0;
        write!(
            f,
            "[[{}, {}, {}], [{}, {}, {}], [{}, {}, {}]]",
            m[0][0], m[0][1], m[0][2], m[1][0], m[1][1], m[1][2], m[2][0], m[2][1], m[2][2]
        )
    }
}

#[cfg(any(test, feature = "approx"))]
impl approx::AbsDiffEq for RotationMatrix {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.0
            .iter()
            .flatten()
            .zip(other.0.iter().flatten())
            .all(|(a, b)| approx::AbsDiffEq::abs_diff_eq(a, b, epsilon))
    }
}
