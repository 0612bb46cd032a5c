// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Super module for all coordinate types.

pub mod euler;
pub mod matrix;
pub mod xyz;

// Re-exports.
pub use euler::EulerAngles;
pub use matrix::RotationMatrix;
pub use xyz::Xyz;
