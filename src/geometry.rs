// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
The shower geometry from which all frames are derived.

All angles follow CORSIKA conventions: the zenith is 0 for a shower coming
straight down, and the azimuth is 0 for a shower coming from the North,
increasing towards the West. Any rotation between CORSIKA ground coordinates
and another convention (e.g. the 270° Auger rotation) must be applied to the
positions before they reach this crate.

[`ShowerGeometry`] derives serde's traits so it can be embedded in a caller's
parameter file; this crate doesn't read any files itself.
 */

use serde::{Deserialize, Serialize};

use crate::{
    constants::{DUNHUANG_DECLINATION_RAD, DUNHUANG_INCLINATION_RAD},
    FrameError, FrameTransformer, Xyz,
};

/// The geomagnetic field in the ground frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MagneticField {
    /// An explicit field vector. Its magnitude is irrelevant.
    Vector(Xyz),

    /// The angle between the field lines and the ground \[radians\].
    Inclination(f64),
}

impl MagneticField {
    /// Make a new `MagneticField` from an inclination in degrees.
    pub fn inclination_degrees(inclination: f64) -> Self {
        Self::Inclination(inclination.to_radians())
    }

    /// Get the field as a vector in the ground frame. An inclination `i`
    /// becomes `(cos i, 0, -sin i)`.
    pub fn to_vector(&self) -> Xyz {
        match *self {
            MagneticField::Vector(v) => v,
            MagneticField::Inclination(inclination) => {
                let (s_inc, c_inc) = inclination.sin_cos();
                Xyz::new(c_inc, 0.0, -s_inc)
            }
        }
    }
}

impl Default for MagneticField {
    /// The field at GRAND's Dunhuang site.
    fn default() -> Self {
        Self::Inclination(DUNHUANG_INCLINATION_RAD)
    }
}

impl std::fmt::Display for MagneticField {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            MagneticField::Vector(v) => write!(f, "vector {v}"),
            MagneticField::Inclination(i) => write!(f, "inclination {}°", i.to_degrees()),
        }
    }
}

/// Everything needed to build a [`FrameTransformer`]. All angles are in
/// radians.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowerGeometry {
    /// Zenith angle of the incoming shower \[radians\]
    pub zenith: f64,
    /// Azimuth angle of the incoming shower \[radians\]
    pub azimuth: f64,
    pub magnetic_field: MagneticField,
    /// Angle between magnetic and geographic North \[radians\]
    pub declination: f64,
}

impl ShowerGeometry {
    /// Make a new `ShowerGeometry` for the Dunhuang magnetic field from
    /// values in radians.
    pub fn new(zenith: f64, azimuth: f64) -> Self {
        Self {
            zenith,
            azimuth,
            ..Default::default()
        }
    }

    /// Make a new `ShowerGeometry` for the Dunhuang magnetic field from
    /// values in degrees.
    pub fn new_degrees(zenith: f64, azimuth: f64) -> Self {
        Self::new(zenith.to_radians(), azimuth.to_radians())
    }

    pub fn with_magnetic_field(self, magnetic_field: MagneticField) -> Self {
        Self {
            magnetic_field,
            ..self
        }
    }

    /// Set the declination \[radians\].
    pub fn with_declination(self, declination: f64) -> Self {
        Self {
            declination,
            ..self
        }
    }

    /// Build the transformer for this geometry.
    pub fn transformer(&self) -> Result<FrameTransformer, FrameError> {
        FrameTransformer::from_geometry(*self)
    }
}

impl Default for ShowerGeometry {
    /// A vertical shower at GRAND's Dunhuang site.
    fn default() -> Self {
        Self {
            zenith: 0.0,
            azimuth: 0.0,
            magnetic_field: MagneticField::default(),
            declination: DUNHUANG_DECLINATION_RAD,
        }
    }
}

impl std::fmt::Display for ShowerGeometry {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "zenith {}°, azimuth {}°, magnetic field {}, declination {}°",
            self.zenith.to_degrees(),
            self.azimuth.to_degrees(),
            self.magnetic_field,
            self.declination.to_degrees()
        )
    }
}
