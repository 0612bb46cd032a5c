// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Code to move positions between frames for a single shower geometry.

From the Cartesian ground coordinate system (CORSIKA conventions; x: North,
y: West, z: up), positions can be moved

 * to the vxB-vx(vxB) shower-plane system;
 * to the on-sky system (spherical unit vectors e_r, e_theta, e_phi);
 * to a ground system aligned with magnetic (rather than geographic) North;
 * to a ground system whose x axis is the shower azimuth;
 * to the early-late shower-plane system, whose z axis is the shower axis;

and back again. Single positions and batches are separate calls; nothing
here guesses which one it has been given from the shape of the data.
 */

use log::{debug, trace};
use ndarray::{prelude::*, Zip};
use rayon::prelude::*;

use super::{
    basis::{shower_axis, FrameBasis},
    DegenerateGeometry, Frame, FrameError,
};
use crate::{
    constants::DEGENERACY_TOLERANCE, EulerAngles, MagneticField, RotationMatrix, ShowerGeometry,
    Xyz,
};

/// Transforms between all frames of one shower geometry. Immutable after
/// construction, so one instance can be shared between threads.
#[derive(Clone, Debug)]
pub struct FrameTransformer {
    geometry: ShowerGeometry,
    basis: FrameBasis,
    shower_axis: Xyz,
    magnetic_field: Xyz,
}

impl FrameTransformer {
    /// Set up all frames for a shower arriving from (`zenith`, `azimuth`) in a
    /// geomagnetic field. All angles are in radians and follow CORSIKA
    /// conventions.
    pub fn new(
        zenith: f64,
        azimuth: f64,
        magnetic_field: MagneticField,
        declination: f64,
    ) -> Result<Self, FrameError> {
        Self::from_geometry(ShowerGeometry {
            zenith,
            azimuth,
            magnetic_field,
            declination,
        })
    }

    pub fn from_geometry(geometry: ShowerGeometry) -> Result<Self, FrameError> {
        debug!("Setting up frames for {geometry}");
        let field = geometry.magnetic_field.to_vector();
        let basis = FrameBasis::new(
            geometry.zenith,
            geometry.azimuth,
            field,
            geometry.declination,
        )?;
        Ok(Self {
            geometry,
            basis,
            shower_axis: shower_axis(geometry.zenith, geometry.azimuth),
            magnetic_field: field.normalise()?,
        })
    }

    pub fn geometry(&self) -> &ShowerGeometry {
        &self.geometry
    }

    pub fn basis(&self) -> &FrameBasis {
        &self.basis
    }

    /// The unit vector along which the shower propagates (ground frame).
    pub fn shower_axis(&self) -> Xyz {
        self.shower_axis
    }

    /// The normalised magnetic field (ground frame).
    pub fn magnetic_field(&self) -> Xyz {
        self.magnetic_field
    }

    /// Apply `matrix` to a single position.
    pub fn transform_one(position: Xyz, matrix: &RotationMatrix) -> Xyz {
        matrix * position
    }

    /// Apply `matrix` to every position independently. The output order
    /// matches the input.
    pub fn transform_many(positions: &[Xyz], matrix: &RotationMatrix) -> Vec<Xyz> {
        apply_many(positions, matrix, Xyz::origin(), Xyz::origin())
    }

    /// Apply `matrix` to every row of an `(N, 3)` array. Any other number of
    /// columns is an error.
    pub fn transform_array(
        positions: ArrayView2<f64>,
        matrix: &RotationMatrix,
    ) -> Result<Array2<f64>, FrameError> {
        apply_array(positions, matrix, Xyz::origin(), Xyz::origin())
    }

    // On-sky coordinates are (e_r, e_theta, e_phi).

    pub fn ground_to_onsky(&self, position: Xyz) -> Xyz {
        self.basis.onsky().forward() * position
    }

    pub fn ground_to_onsky_many(&self, positions: &[Xyz]) -> Vec<Xyz> {
        Self::transform_many(positions, self.basis.onsky().forward())
    }

    pub fn onsky_to_ground(&self, position: Xyz) -> Xyz {
        self.basis.onsky().inverse() * position
    }

    pub fn onsky_to_ground_many(&self, positions: &[Xyz]) -> Vec<Xyz> {
        Self::transform_many(positions, self.basis.onsky().inverse())
    }

    pub fn magnetic_to_geographic(&self, position: Xyz) -> Xyz {
        self.basis.magnetic().inverse() * position
    }

    pub fn magnetic_to_geographic_many(&self, positions: &[Xyz]) -> Vec<Xyz> {
        Self::transform_many(positions, self.basis.magnetic().inverse())
    }

    pub fn geographic_to_magnetic(&self, position: Xyz) -> Xyz {
        self.basis.magnetic().forward() * position
    }

    pub fn geographic_to_magnetic_many(&self, positions: &[Xyz]) -> Vec<Xyz> {
        Self::transform_many(positions, self.basis.magnetic().forward())
    }

    pub fn azimuth_to_geographic(&self, position: Xyz) -> Xyz {
        self.basis.azimuth().inverse() * position
    }

    pub fn azimuth_to_geographic_many(&self, positions: &[Xyz]) -> Vec<Xyz> {
        Self::transform_many(positions, self.basis.azimuth().inverse())
    }

    pub fn geographic_to_azimuth(&self, position: Xyz) -> Xyz {
        self.basis.azimuth().forward() * position
    }

    pub fn geographic_to_azimuth_many(&self, positions: &[Xyz]) -> Vec<Xyz> {
        Self::transform_many(positions, self.basis.azimuth().forward())
    }

    /// Move a ground position into the early-late frame. If `core` is given,
    /// it is subtracted first.
    pub fn to_early_late(&self, position: Xyz, core: Option<Xyz>) -> Xyz {
        self.basis.early_late().forward() * (position - core.unwrap_or_default())
    }

    pub fn to_early_late_many(&self, positions: &[Xyz], core: Option<Xyz>) -> Vec<Xyz> {
        apply_many(
            positions,
            self.basis.early_late().forward(),
            core.unwrap_or_default(),
            Xyz::origin(),
        )
    }

    pub fn to_early_late_array(
        &self,
        positions: ArrayView2<f64>,
        core: Option<ArrayView1<f64>>,
    ) -> Result<Array2<f64>, FrameError> {
        apply_array(
            positions,
            self.basis.early_late().forward(),
            core_from_view(core)?,
            Xyz::origin(),
        )
    }

    /// Move an early-late position back to the ground frame. If `core` is
    /// given, it is added afterwards.
    pub fn from_early_late(&self, position: Xyz, core: Option<Xyz>) -> Xyz {
        self.basis.early_late().inverse() * position + core.unwrap_or_default()
    }

    pub fn from_early_late_many(&self, positions: &[Xyz], core: Option<Xyz>) -> Vec<Xyz> {
        apply_many(
            positions,
            self.basis.early_late().inverse(),
            Xyz::origin(),
            core.unwrap_or_default(),
        )
    }

    pub fn from_early_late_array(
        &self,
        positions: ArrayView2<f64>,
        core: Option<ArrayView1<f64>>,
    ) -> Result<Array2<f64>, FrameError> {
        apply_array(
            positions,
            self.basis.early_late().inverse(),
            Xyz::origin(),
            core_from_view(core)?,
        )
    }

    /// Move a ground position into the vxB-vxvxB frame. If `core` is given, it
    /// is subtracted first.
    pub fn to_shower_plane(&self, position: Xyz, core: Option<Xyz>) -> Xyz {
        self.basis.shower_plane().forward() * (position - core.unwrap_or_default())
    }

    pub fn to_shower_plane_many(&self, positions: &[Xyz], core: Option<Xyz>) -> Vec<Xyz> {
        apply_many(
            positions,
            self.basis.shower_plane().forward(),
            core.unwrap_or_default(),
            Xyz::origin(),
        )
    }

    /// [`FrameTransformer::to_shower_plane_many`] for an `(N, 3)` array, e.g.
    /// station positions or the three polarisations of a trace transposed to
    /// one sample per row.
    pub fn to_shower_plane_array(
        &self,
        positions: ArrayView2<f64>,
        core: Option<ArrayView1<f64>>,
    ) -> Result<Array2<f64>, FrameError> {
        apply_array(
            positions,
            self.basis.shower_plane().forward(),
            core_from_view(core)?,
            Xyz::origin(),
        )
    }

    /// Move a vxB-vxvxB position back to the ground frame. If `core` is given,
    /// it is added afterwards.
    pub fn from_shower_plane(&self, position: Xyz, core: Option<Xyz>) -> Xyz {
        self.basis.shower_plane().inverse() * position + core.unwrap_or_default()
    }

    pub fn from_shower_plane_many(&self, positions: &[Xyz], core: Option<Xyz>) -> Vec<Xyz> {
        apply_many(
            positions,
            self.basis.shower_plane().inverse(),
            Xyz::origin(),
            core.unwrap_or_default(),
        )
    }

    pub fn from_shower_plane_array(
        &self,
        positions: ArrayView2<f64>,
        core: Option<ArrayView1<f64>>,
    ) -> Result<Array2<f64>, FrameError> {
        apply_array(
            positions,
            self.basis.shower_plane().inverse(),
            Xyz::origin(),
            core_from_view(core)?,
        )
    }

    /// The third element of the last row of the vxB-vxvxB basis, i.e. the
    /// vertical component of the shower axis. Zero when the shower plane is
    /// vertical.
    fn non_vertical_m22(&self) -> Result<f64, FrameError> {
        let m22 = self.basis.shower_plane().forward()[(2, 2)];
        if m22.abs() < DEGENERACY_TOLERANCE {
            return Err(DegenerateGeometry::VerticalShowerPlane { m22 }.into());
        }
        Ok(m22)
    }

    /// Given the vxB and vxvxB coordinates (`x`, `y`) of a station on the
    /// ground, get its coordinate along the shower axis, i.e. the `z` for
    /// which `(x, y, z)` in the vxB-vxvxB frame has zero height in the ground
    /// frame.
    ///
    /// Fails for horizontal showers, whose shower plane is vertical.
    pub fn reconstruct_height(&self, x: f64, y: f64) -> Result<f64, FrameError> {
        let m22 = self.non_vertical_m22()?;
        let m = self.basis.shower_plane().forward();
        Ok(-(m[(0, 2)] * x + m[(1, 2)] * y) / m22)
    }

    /// Given ground coordinates (`x`, `y`), get the ground height `z` at
    /// which `(x, y, z)` lies in the vxB-vxvxB plane through the origin.
    ///
    /// Fails for horizontal showers, whose shower plane is vertical.
    pub fn ground_height_in_shower_plane(&self, x: f64, y: f64) -> Result<f64, FrameError> {
        let m22 = self.non_vertical_m22()?;
        let m = self.basis.shower_plane().forward();
        Ok(-(m[(2, 0)] * x + m[(2, 1)] * y) / m22)
    }

    /// Take a station given only by its vxB and vxvxB coordinates, fill in
    /// the coordinate along the shower axis with
    /// [`FrameTransformer::reconstruct_height`] and move it to the ground
    /// frame. If `core` is given, it is added afterwards.
    pub fn from_shower_plane_2d(&self, x: f64, y: f64, core: Option<Xyz>) -> Result<Xyz, FrameError> {
        let z = self.reconstruct_height(x, y)?;
        Ok(self.from_shower_plane(Xyz::new(x, y, z), core))
    }

    pub fn from_shower_plane_2d_many(
        &self,
        positions: &[(f64, f64)],
        core: Option<Xyz>,
    ) -> Result<Vec<Xyz>, FrameError> {
        let m22 = self.non_vertical_m22()?;
        let m = self.basis.shower_plane().forward();
        let core = core.unwrap_or_default();
        trace!("Reconstructing {} shower-plane positions", positions.len());

        let mut out = Vec::with_capacity(positions.len());
        positions
            .par_iter()
            .map(|&(x, y)| {
                let z = -(m[(0, 2)] * x + m[(1, 2)] * y) / m22;
                self.basis.shower_plane().inverse() * Xyz::new(x, y, z) + core
            })
            .collect_into_vec(&mut out);
        Ok(out)
    }

    /// Decompose the vxB-vxvxB basis into ZYX Euler angles. Only the primary
    /// solution is returned; see [`EulerAngles`].
    pub fn euler_angles(&self) -> EulerAngles {
        EulerAngles::from_matrix(self.basis.shower_plane().forward())
    }

    fn ground_to(&self, frame: Frame) -> RotationMatrix {
        match frame {
            Frame::Ground => RotationMatrix::identity(),
            Frame::OnSky => *self.basis.onsky().forward(),
            Frame::Magnetic => *self.basis.magnetic().forward(),
            Frame::Azimuth => *self.basis.azimuth().forward(),
            Frame::EarlyLate => *self.basis.early_late().forward(),
            Frame::ShowerPlane => *self.basis.shower_plane().forward(),
        }
    }

    /// The matrix taking vectors in `from` to vectors in `to`, going through
    /// the ground frame.
    pub fn conversion_matrix(&self, from: Frame, to: Frame) -> RotationMatrix {
        if from == to {
            return RotationMatrix::identity();
        }
        self.ground_to(to) * self.ground_to(from).transpose()
    }

    /// Move a vector between any two frames. No core offsets are applied.
    pub fn convert(&self, position: Xyz, from: Frame, to: Frame) -> Xyz {
        if from == to {
            return position;
        }
        self.conversion_matrix(from, to) * position
    }

    pub fn convert_many(&self, positions: &[Xyz], from: Frame, to: Frame) -> Vec<Xyz> {
        if from == to {
            return positions.to_vec();
        }
        Self::transform_many(positions, &self.conversion_matrix(from, to))
    }
}

/// `matrix · (p - pre) + post` for every `p`.
fn apply_many(positions: &[Xyz], matrix: &RotationMatrix, pre: Xyz, post: Xyz) -> Vec<Xyz> {
    trace!("Transforming {} positions", positions.len());
    let mut out = Vec::with_capacity(positions.len());
    positions
        .par_iter()
        .map(|&p| matrix * (p - pre) + post)
        .collect_into_vec(&mut out);
    out
}

/// `matrix · (p - pre) + post` for every row `p` of an `(N, 3)` array.
fn apply_array(
    positions: ArrayView2<f64>,
    matrix: &RotationMatrix,
    pre: Xyz,
    post: Xyz,
) -> Result<Array2<f64>, FrameError> {
    if positions.ncols() != 3 {
        return Err(FrameError::InvalidFrameShape {
            input: "positions",
            expected: 3,
            got: positions.ncols(),
        });
    }
    trace!("Transforming {} positions", positions.nrows());

    let mut out = Array2::zeros(positions.raw_dim());
    Zip::from(out.rows_mut())
        .and(positions.rows())
        .par_for_each(|mut row, p| {
            let v = matrix * (Xyz::new(p[0], p[1], p[2]) - pre) + post;
            row[0] = v.x;
            row[1] = v.y;
            row[2] = v.z;
        });
    Ok(out)
}

fn core_from_view(core: Option<ArrayView1<f64>>) -> Result<Xyz, FrameError> {
    match core {
        None => Ok(Xyz::origin()),
        Some(core) if core.len() == 3 => Ok(Xyz::new(core[0], core[1], core[2])),
        Some(core) => Err(FrameError::InvalidFrameShape {
            input: "core",
            expected: 3,
            got: core.len(),
        }),
    }
}
