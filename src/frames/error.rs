// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all frame-transformation errors.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FrameError {
    #[error("Cannot normalise the vector ({x}, {y}, {z}); it is zero or not finite, so its direction is undefined")]
    DegenerateVector { x: f64, y: f64, z: f64 },

    #[error(transparent)]
    DegenerateGeometry(#[from] DegenerateGeometry),

    #[error("Expected {input} to have {expected} elements, but got {got}")]
    InvalidFrameShape {
        input: &'static str,
        expected: usize,
        got: usize,
    },
}

/// The shower geometry doesn't admit a well-defined frame.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DegenerateGeometry {
    #[error("The shower axis (zenith {}°, azimuth {}°) is parallel to the magnetic field; the vxB axis is undefined", .zenith.to_degrees(), .azimuth.to_degrees())]
    ShowerAxisAlongField { zenith: f64, azimuth: f64 },

    #[error("The shower plane is vertical in the ground frame (M[2,2] = {m22}); a height in the shower plane is undefined")]
    VerticalShowerPlane { m22: f64 },
}
