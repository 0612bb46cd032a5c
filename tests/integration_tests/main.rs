// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Integration tests.
//!
//! Some help for laying out these tests was taken from:
//! https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html

mod shared_transformer;
mod star_shape;

use shower_frames::{spherical_to_cartesian, Xyz, FRAC_PI_2};

/// Station positions on a star-shaped grid in the vxB-vxvxB plane, like those
/// used for CoREAS simulations: `n_rings` rings between `r_min` and `r_max`
/// \[cm\] on eight arms.
fn star_shape_stations(r_min: f64, r_max: f64, n_rings: usize) -> Vec<Xyz> {
    let arms = (0..8).map(|i| (45.0 * i as f64).to_radians());
    let step = (r_max - r_min) / n_rings as f64;
    arms.flat_map(|arm| {
        let direction = spherical_to_cartesian(FRAC_PI_2, arm);
        (1..=n_rings).map(move |ring| direction * (r_min + step * ring as f64))
    })
    .collect()
}
