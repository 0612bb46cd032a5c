// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The change-of-basis matrices for a single shower geometry.

use log::trace;

use super::{DegenerateGeometry, FrameError};
use crate::{
    constants::{DEGENERACY_TOLERANCE, FRAC_PI_2},
    math::spherical_to_cartesian,
    RotationMatrix, Xyz,
};

/// A change-of-basis matrix from the ground frame and its inverse. The
/// inverse is always the transpose.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BasisPair {
    forward: RotationMatrix,
    inverse: RotationMatrix,
}

impl BasisPair {
    fn new(forward: RotationMatrix) -> Self {
        Self {
            forward,
            inverse: forward.transpose(),
        }
    }

    /// Ground frame to this frame.
    pub fn forward(&self) -> &RotationMatrix {
        &self.forward
    }

    /// This frame to the ground frame.
    pub fn inverse(&self) -> &RotationMatrix {
        &self.inverse
    }
}

/// The five bases for a shower geometry. Each `forward` matrix takes
/// ground-frame vectors into the named frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameBasis {
    /// Rows are (e_r, e_theta, e_phi). Singular at the poles, where e_phi has
    /// no azimuthal meaning.
    onsky: BasisPair,
    /// Rotation about the vertical by -declination.
    magnetic: BasisPair,
    /// Rotation about the vertical by -azimuth, so that the new x axis is the
    /// shower direction projected on ground.
    azimuth: BasisPair,
    /// Shower axis along the new z axis, with its ground projection in the
    /// yz plane.
    early_late: BasisPair,
    /// Rows are (vxB, vxvxB, v).
    shower_plane: BasisPair,
}

impl FrameBasis {
    /// Derive all bases. `magnetic_field` is in the ground frame and needn't
    /// be normalised. Fails if the field is zero or parallel to the shower
    /// axis.
    pub fn new(
        zenith: f64,
        azimuth: f64,
        magnetic_field: Xyz,
        declination: f64,
    ) -> Result<Self, FrameError> {
        let basis = Self {
            onsky: BasisPair::new(onsky_matrix(zenith, azimuth)),
            magnetic: BasisPair::new(RotationMatrix::rotation_about_z(-declination)),
            azimuth: BasisPair::new(RotationMatrix::rotation_about_z(-azimuth)),
            early_late: BasisPair::new(early_late_matrix(zenith, azimuth)),
            shower_plane: BasisPair::new(shower_plane_matrix(zenith, azimuth, magnetic_field)?),
        };
        trace!("vxB-vxvxB basis: {}", basis.shower_plane.forward);
        trace!("on-sky basis: {}", basis.onsky.forward);
        trace!("early-late basis: {}", basis.early_late.forward);
        Ok(basis)
    }

    pub fn onsky(&self) -> &BasisPair {
        &self.onsky
    }

    pub fn magnetic(&self) -> &BasisPair {
        &self.magnetic
    }

    pub fn azimuth(&self) -> &BasisPair {
        &self.azimuth
    }

    pub fn early_late(&self) -> &BasisPair {
        &self.early_late
    }

    pub fn shower_plane(&self) -> &BasisPair {
        &self.shower_plane
    }

    /// All five forward matrices, labelled.
    pub fn matrices(&self) -> [(&'static str, &RotationMatrix); 5] {
        [
            ("on-sky", &self.onsky.forward),
            ("magnetic", &self.magnetic.forward),
            ("azimuth", &self.azimuth.forward),
            ("early-late", &self.early_late.forward),
            ("vxB-vxvxB", &self.shower_plane.forward),
        ]
    }
}

/// The direction the shower travels in. This is the opposite of the arrival
/// direction given by (zenith, azimuth).
pub(crate) fn shower_axis(zenith: f64, azimuth: f64) -> Xyz {
    -spherical_to_cartesian(zenith, azimuth)
}

fn shower_plane_matrix(
    zenith: f64,
    azimuth: f64,
    magnetic_field: Xyz,
) -> Result<RotationMatrix, FrameError> {
    let v = shower_axis(zenith, azimuth);
    let b = magnetic_field.normalise()?;

    let vxb = v.cross(&b);
    // Check before normalising; a shower along the field line has no vxB
    // direction.
    if vxb.norm() < DEGENERACY_TOLERANCE {
        return Err(DegenerateGeometry::ShowerAxisAlongField { zenith, azimuth }.into());
    }
    let e1 = vxb.normalise()?;
    let e2 = v.cross(&e1).normalise()?;
    let e3 = e1.cross(&e2).normalise()?;
    Ok(RotationMatrix::from_rows(e1, e2, e3))
}

fn onsky_matrix(zenith: f64, azimuth: f64) -> RotationMatrix {
    let (st, ct) = zenith.sin_cos();
    let (sp, cp) = azimuth.sin_cos();
    RotationMatrix::from_rows(
        Xyz::new(st * cp, st * sp, ct),
        Xyz::new(ct * cp, ct * sp, -st),
        Xyz::new(-sp, cp, 0.0),
    )
}

fn early_late_matrix(zenith: f64, azimuth: f64) -> RotationMatrix {
    // Rotate about z so the shower axis projected on ground lies along y,
    // then tilt about the new x axis so the shower axis lies along z.
    let r_azimuth = RotationMatrix::rotation_about_z(-azimuth + FRAC_PI_2);
    let r_tilt = RotationMatrix::rotation_about_x(zenith);
    r_tilt * r_azimuth
}
