// Copyright (c) 2024-2025 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The ellipsoid module contains types and functions for defining an ellipsoid
//! given its Semimajor axis (the equivalent of its radius) and either its
//! flattening ratio or its inverse flattening.

#![allow(clippy::suboptimal_flops)]

pub mod coefficients;
pub mod reference;

use crate::{Angle, Metres};

/// Calculate the Semiminor axis of an ellipsoid.
/// * `a` - the Semimajor axis of an ellipsoid.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use vincenty_geodesy::Metres;
/// use vincenty_geodesy::ellipsoid::calculate_minor_axis;
///
/// // The WGS 84 Semiminor axis measured in metres.
/// let b : Metres = Metres(6_356_752.314_245_179);
/// assert_eq!(b, calculate_minor_axis(Metres(6_378_137.0), 1.0 / 298.257_223_563));
/// ```
#[must_use]
pub fn calculate_minor_axis(a: Metres, f: f64) -> Metres {
    Metres(a.0 * (1.0 - f))
}

/// Calculate the square of the second Eccentricity of an ellipsoid,
/// (a² - b²) / b².
/// * `a` - the Semimajor axis of an ellipsoid.
/// * `b` - the Semiminor axis of an ellipsoid.
#[must_use]
pub fn calculate_sq_2nd_eccentricity(a: Metres, b: Metres) -> f64 {
    let b_2 = b.0 * b.0;
    (a.0 * a.0 - b_2) / b_2
}

/// Calculate the Semimajor axis of an ellipsoid raised to an elevation
/// above the reference ellipsoid.
/// * `a` - the Semimajor axis of the reference ellipsoid.
/// * `f` - the flattening ratio.
/// * `elevation` - the elevation above the reference ellipsoid.
/// * `latitude` - the latitude at which the elevation applies.
#[must_use]
pub fn calculate_elevated_axis(a: Metres, f: f64, elevation: Metres, latitude: Angle) -> Metres {
    Metres(a.0 + elevation.0 * (1.0 + f * libm::sin(latitude.radians())))
}

/// Function to convert a `geodetic` Latitude to a `parametric` (reduced)
/// Latitude on the auxiliary sphere.
/// * `lat` - the `geodetic` Latitude
/// * `one_minus_f` - one minus the flattening ratio.
#[must_use]
pub fn calculate_parametric_latitude(lat: angle_sc::Angle, one_minus_f: f64) -> angle_sc::Angle {
    angle_sc::Angle::from_y_x(one_minus_f * lat.sin().0, lat.cos().0)
}

/// Function to convert a `parametric` Latitude on the auxiliary sphere to a
/// `geodetic` Latitude.
/// * `lat` - the `parametric` Latitude
/// * `one_minus_f` - one minus the flattening ratio.
#[must_use]
pub fn calculate_geodetic_latitude(lat: angle_sc::Angle, one_minus_f: f64) -> angle_sc::Angle {
    angle_sc::Angle::from_y_x(lat.sin().0 / one_minus_f, lat.cos().0)
}
