// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The reference frames of an air shower and the transformations between
//! them.

pub mod basis;
mod error;
pub mod transformer;


pub use basis::{BasisPair, FrameBasis};
pub use error::{DegenerateGeometry, FrameError};
pub use transformer::FrameTransformer;

use serde::{Deserialize, Serialize};

/// The frames a [`FrameTransformer`] knows about. Every transformation goes
/// through the ground frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frame {
    /// Geographic ground coordinates.
    Ground,
    /// (e_r, e_theta, e_phi) for the shower direction.
    OnSky,
    /// Ground coordinates rotated from geographic to magnetic North.
    Magnetic,
    /// Ground coordinates with x along the shower azimuth.
    Azimuth,
    /// Shower plane with the shower axis along z.
    EarlyLate,
    /// (vxB, vxvxB, v).
    ShowerPlane,
}

impl Frame {
    pub const ALL: [Frame; 6] = [
        Frame::Ground,
        Frame::OnSky,
        Frame::Magnetic,
        Frame::Azimuth,
        Frame::EarlyLate,
        Frame::ShowerPlane,
    ];
}

impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self {
            Frame::Ground => "ground",
            Frame::OnSky => "on-sky",
            Frame::Magnetic => "magnetic",
            Frame::Azimuth => "azimuth",
            Frame::EarlyLate => "early-late",
            Frame::ShowerPlane => "vxB-vxvxB",
        };
        write!(f, "{s}")
    }
}
