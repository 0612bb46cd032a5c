// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Useful constants.

All constants *must* be double precision, and all angles are in radians
unless the name says otherwise.
 */

pub use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Inclination of the geomagnetic field at GRAND's Dunhuang site \[degrees\].
pub const DUNHUANG_INCLINATION_DEG: f64 = 61.60523;

/// Declination of the geomagnetic field at GRAND's Dunhuang site \[degrees\].
pub const DUNHUANG_DECLINATION_DEG: f64 = 0.12532;

/// Inclination of the geomagnetic field at GRAND's Dunhuang site \[radians\].
pub const DUNHUANG_INCLINATION_RAD: f64 = DUNHUANG_INCLINATION_DEG * PI / 180.0;

/// Declination of the geomagnetic field at GRAND's Dunhuang site \[radians\].
pub const DUNHUANG_DECLINATION_RAD: f64 = DUNHUANG_DECLINATION_DEG * PI / 180.0;

/// Norms (and matrix elements) smaller than this are treated as zero when
/// deciding whether a geometry is degenerate. For unit vectors this is the
/// sine of the smallest angle that is still considered non-parallel.
pub const DEGENERACY_TOLERANCE: f64 = 1e-10;
