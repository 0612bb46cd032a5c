// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use approx::assert_abs_diff_eq;

use super::star_shape_stations;
use shower_frames::{Frame, MagneticField, ShowerGeometry, Xyz};

#[test]
fn star_shape_stations_land_on_ground() {
    let geometry = ShowerGeometry::new_degrees(65.0, 38.0);
    let transformer = geometry.transformer().unwrap();
    let core = Xyz::new(0.0, 0.0, 0.0);

    let stations = star_shape_stations(0.0, 50000.0, 20);
    assert_eq!(stations.len(), 160);
    let stations_2d: Vec<(f64, f64)> = stations.iter().map(|s| (s.x, s.y)).collect();

    let on_ground = transformer
        .from_shower_plane_2d_many(&stations_2d, Some(core))
        .unwrap();
    for (ground, station) in on_ground.iter().zip(stations.iter()) {
        assert_abs_diff_eq!(ground.z, 0.0, epsilon = 1e-6);

        // Back in the shower plane, the vxB and vxvxB coordinates are
        // unchanged.
        let vxb = transformer.to_shower_plane(*ground, Some(core));
        assert_abs_diff_eq!(vxb.x, station.x, epsilon = 1e-6);
        assert_abs_diff_eq!(vxb.y, station.y, epsilon = 1e-6);
    }

    // Without the height correction, the stations stay in the shower plane.
    let in_plane = transformer.from_shower_plane_many(&stations, Some(core));
    for p in in_plane {
        let vxb = transformer.convert(p, Frame::Ground, Frame::ShowerPlane);
        assert_abs_diff_eq!(vxb.z, 0.0, epsilon = 1e-6);
    }
}

#[test]
fn early_late_and_shower_plane_share_the_shower_axis() {
    let transformer = ShowerGeometry::new_degrees(40.0, 200.0)
        .with_magnetic_field(MagneticField::Vector(Xyz::new(0.2, 0.0, -0.4)))
        .with_declination(0.0)
        .transformer()
        .unwrap();

    let point_on_axis = transformer.shower_axis() * -1500.0;
    let shower_plane = transformer.to_shower_plane(point_on_axis, None);
    let early_late = transformer.to_early_late(point_on_axis, None);
    assert_abs_diff_eq!(shower_plane.x, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(shower_plane.y, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(shower_plane.z, -1500.0, epsilon = 1e-9);
    // The early-late z axis points back along the arrival direction.
    assert_abs_diff_eq!(early_late.x, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(early_late.y, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(early_late.z, 1500.0, epsilon = 1e-9);
}
