// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::thread;

use super::star_shape_stations;
use shower_frames::{FrameTransformer, MagneticField, DUNHUANG_DECLINATION_RAD};

#[test]
fn one_transformer_many_threads() {
    let transformer = FrameTransformer::new(
        0.9,
        1.7,
        MagneticField::inclination_degrees(55.0),
        DUNHUANG_DECLINATION_RAD,
    )
    .unwrap();
    let stations = star_shape_stations(100.0, 20000.0, 10);
    let expected = transformer.from_shower_plane_many(&stations, None);

    thread::scope(|s| {
        let handles: Vec<_> = stations
            .chunks(7)
            .map(|chunk| {
                let transformer = &transformer;
                s.spawn(move || {
                    chunk
                        .iter()
                        .map(|&p| transformer.from_shower_plane(p, None))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        let results: Vec<_> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        assert_eq!(results, expected);
    });
}
