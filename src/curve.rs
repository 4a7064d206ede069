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

//! The curve module contains the results of geodesic calculations:
//! `GeodeticCurve` and `GeodeticMeasurement`.

use crate::{Angle, Metres, Validate};
use core::f64::consts::TAU;
use core::fmt;

/// The length and azimuths of a geodesic between two coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeodeticCurve {
    /// The length of the geodesic on the ellipsoid.
    ellipsoidal_distance: Metres,
    /// The azimuth at the start of the geodesic, clockwise from North.
    azimuth: Angle,
    /// The azimuth at the end of the geodesic looking back towards its start,
    /// clockwise from North.
    reverse_azimuth: Angle,
}

impl GeodeticCurve {
    /// A `GeodeticCurve` with NaN values.
    pub const NAN: Self = Self::new(Metres(f64::NAN), Angle::NAN, Angle::NAN);

    /// Constructor.
    /// * `ellipsoidal_distance` - the length of the geodesic.
    /// * `azimuth` - the azimuth at the start of the geodesic.
    /// * `reverse_azimuth` - the azimuth at the end of the geodesic, looking back.
    #[must_use]
    pub const fn new(ellipsoidal_distance: Metres, azimuth: Angle, reverse_azimuth: Angle) -> Self {
        Self {
            ellipsoidal_distance,
            azimuth,
            reverse_azimuth,
        }
    }

    /// The length of the geodesic on the ellipsoid.
    #[must_use]
    pub const fn ellipsoidal_distance(&self) -> Metres {
        self.ellipsoidal_distance
    }

    /// The azimuth at the start of the geodesic.
    #[must_use]
    pub const fn azimuth(&self) -> Angle {
        self.azimuth
    }

    /// The azimuth at the end of the geodesic, looking back towards its start.
    #[must_use]
    pub const fn reverse_azimuth(&self) -> Angle {
        self.reverse_azimuth
    }
}

fn is_valid_azimuth(azimuth: Angle) -> bool {
    (0.0..TAU).contains(&azimuth.radians())
}

impl Validate for GeodeticCurve {
    /// Test whether a `GeodeticCurve` is valid.
    /// I.e. whether its distance is finite and not negative and its azimuths
    /// are in the range [0°, 360°).
    fn is_valid(&self) -> bool {
        let distance = self.ellipsoidal_distance.0;
        distance.is_finite()
            && 0.0 <= distance
            && is_valid_azimuth(self.azimuth)
            && is_valid_azimuth(self.reverse_azimuth)
    }
}

impl fmt::Display for GeodeticCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "s: {} m, a1: {}, a2: {}",
            self.ellipsoidal_distance.0, self.azimuth, self.reverse_azimuth
        )
    }
}

/// A `GeodeticCurve` between two positions at elevations above an ellipsoid.
#[derive(Clone, Copy, Debug)]
pub struct GeodeticMeasurement {
    /// The geodesic on the ellipsoid at the average elevation of the positions.
    average_curve: GeodeticCurve,
    /// The change in elevation from the start to the end position.
    elevation_change: Metres,
    /// The straight line distance between the positions.
    point_to_point_distance: Metres,
}

impl GeodeticMeasurement {
    /// Constructor.
    /// * `average_curve` - the geodesic at the average elevation.
    /// * `elevation_change` - the change in elevation.
    /// # Examples
    /// ```
    /// use vincenty_geodesy::{Angle, GeodeticCurve, GeodeticMeasurement, Metres};
    ///
    /// let curve = GeodeticCurve::new(Metres(4000.0), Angle::ZERO, Angle::HALF_TURN);
    /// let measurement = GeodeticMeasurement::new(curve, Metres(-3000.0));
    /// assert_eq!(Metres(5000.0), measurement.point_to_point_distance());
    /// ```
    #[must_use]
    pub fn new(average_curve: GeodeticCurve, elevation_change: Metres) -> Self {
        let distance = average_curve.ellipsoidal_distance.0;
        let height = elevation_change.0;
        Self {
            average_curve,
            elevation_change,
            point_to_point_distance: Metres(libm::sqrt(distance * distance + height * height)),
        }
    }

    /// The geodesic on the ellipsoid at the average elevation.
    #[must_use]
    pub const fn average_curve(&self) -> &GeodeticCurve {
        &self.average_curve
    }

    /// The change in elevation from the start to the end position.
    #[must_use]
    pub const fn elevation_change(&self) -> Metres {
        self.elevation_change
    }

    /// The straight line distance between the positions.
    #[must_use]
    pub const fn point_to_point_distance(&self) -> Metres {
        self.point_to_point_distance
    }

    /// The length of the geodesic at the average elevation.
    #[must_use]
    pub const fn ellipsoidal_distance(&self) -> Metres {
        self.average_curve.ellipsoidal_distance
    }

    /// The azimuth at the start of the average curve.
    #[must_use]
    pub const fn azimuth(&self) -> Angle {
        self.average_curve.azimuth
    }

    /// The azimuth at the end of the average curve, looking back towards its start.
    #[must_use]
    pub const fn reverse_azimuth(&self) -> Angle {
        self.average_curve.reverse_azimuth
    }
}

/// `GeodeticMeasurement`s are equal if their average curves and elevation
/// changes are equal.
impl PartialEq for GeodeticMeasurement {
    fn eq(&self, other: &Self) -> bool {
        self.average_curve == other.average_curve && self.elevation_change == other.elevation_change
    }
}

impl fmt::Display for GeodeticMeasurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, dh: {} m, p2p: {} m",
            self.average_curve, self.elevation_change.0, self.point_to_point_distance.0
        )
    }
}
