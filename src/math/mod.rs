// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Some helper mathematics.

#[cfg(test)]
mod tests;

use crate::{constants::TAU, FrameError, Xyz};

/// Get the Cartesian unit vector pointing along (zenith, azimuth). Both angles
/// are in radians; any value is accepted.
///
/// # Examples
///
/// ```
/// use shower_frames::{spherical_to_cartesian, Xyz};
///
/// // Straight up, whatever the azimuth.
/// assert_eq!(spherical_to_cartesian(0.0, 1.0), Xyz::new(0.0, 0.0, 1.0));
/// ```
pub fn spherical_to_cartesian(zenith: f64, azimuth: f64) -> Xyz {
    let (s_zen, c_zen) = zenith.sin_cos();
    let (s_az, c_az) = azimuth.sin_cos();
    Xyz {
        x: s_zen * c_az,
        y: s_zen * s_az,
        z: c_zen,
    }
}

/// [`spherical_to_cartesian`] for parallel slices of angles. The output is in
/// the same order as the input.
pub fn spherical_to_cartesian_many(
    zeniths: &[f64],
    azimuths: &[f64],
) -> Result<Vec<Xyz>, FrameError> {
    if zeniths.len() != azimuths.len() {
        return Err(FrameError::InvalidFrameShape {
            input: "azimuths (one per zenith)",
            expected: zeniths.len(),
            got: azimuths.len(),
        });
    }
    Ok(zeniths
        .iter()
        .zip(azimuths)
        .map(|(&zen, &az)| spherical_to_cartesian(zen, az))
        .collect())
}

/// Get the (zenith, azimuth) of a vector \[radians\]. The azimuth is in
/// `[0, 2pi)`. The vector need not be normalised, but it can't have zero
/// length.
pub fn cartesian_to_spherical(v: Xyz) -> Result<(f64, f64), FrameError> {
    let v = v.normalise()?;
    let zenith = v.z.clamp(-1.0, 1.0).acos();
    let azimuth = v.y.atan2(v.x).rem_euclid(TAU);
    Ok((zenith, azimuth))
}
