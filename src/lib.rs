// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Coordinate transformations between the reference frames used in air-shower
radio detection.

Build one [`FrameTransformer`] per shower geometry, then use it to move
station positions and trace vectors between the ground, magnetic, azimuth,
on-sky, early-late and vxB-vxvxB frames.
 */

pub mod constants;
pub mod coord;
pub mod frames;
pub mod geometry;
pub mod math;

// Re-exports.
pub use constants::*;
pub use coord::*;
pub use frames::{DegenerateGeometry, Frame, FrameBasis, FrameError, FrameTransformer};
pub use geometry::{MagneticField, ShowerGeometry};
pub use math::{cartesian_to_spherical, spherical_to_cartesian, spherical_to_cartesian_many};
