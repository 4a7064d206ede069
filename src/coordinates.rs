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

//! The coordinates module contains the `GlobalCoordinates` and
//! `GlobalPosition` types.
//!
//! `GlobalCoordinates` are canonicalised whenever they are constructed:
//! the latitude is folded into the range [-90°, 90°] by reflecting it across
//! a pole, which adds 180° to the longitude; the longitude is then folded
//! into the range (-180°, 180°].

use crate::{Angle, Degrees, LatLong, Metres, Validate};
use core::cmp::Ordering;
use core::f64::consts::{FRAC_PI_2, PI, TAU};
use core::fmt;

/// Fold a longitude in radians into the range (-π, π].
#[must_use]
fn canonicalise_longitude(lon: f64) -> f64 {
    if -PI < lon && lon <= PI {
        return lon;
    }

    let value = libm::fmod(lon + PI, TAU);
    let value = if value <= 0.0 { value + TAU } else { value } - PI;
    if value <= -PI {
        PI
    } else {
        value
    }
}

/// Canonicalise a latitude and longitude in radians.
///
/// returns the latitude in the range [-π/2, π/2] and the longitude in the
/// range (-π, π]. A non-finite latitude or longitude becomes NaN.
#[must_use]
pub fn canonicalise(lat: f64, lon: f64) -> (f64, f64) {
    if libm::fabs(lat) <= FRAC_PI_2 {
        return (lat, canonicalise_longitude(lon));
    }

    // wrap into [-π, π) then reflect across a pole
    let value = libm::fmod(lat + PI, TAU);
    let value = if value < 0.0 { value + TAU } else { value } - PI;
    if FRAC_PI_2 < value {
        (PI - value, canonicalise_longitude(lon + PI))
    } else if value < -FRAC_PI_2 {
        (-PI - value, canonicalise_longitude(lon + PI))
    } else {
        (value, canonicalise_longitude(lon))
    }
}

/// A latitude and longitude on the surface of an ellipsoid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlobalCoordinates {
    /// The latitude, in the range [-90°, 90°].
    latitude: Angle,
    /// The longitude, in the range (-180°, 180°].
    longitude: Angle,
}

impl GlobalCoordinates {
    /// Constructor, canonicalises `latitude` and `longitude`.
    /// * `latitude` - the latitude, positive North of the Equator.
    /// * `longitude` - the longitude, positive East of Greenwich.
    /// # Examples
    /// ```
    /// use vincenty_geodesy::{Angle, GlobalCoordinates};
    ///
    /// // over the North pole
    /// let coordinates = GlobalCoordinates::new(Angle::from_degrees(100.0), Angle::from_degrees(20.0));
    /// assert!((80.0 - coordinates.latitude().degrees()).abs() < 1e-12);
    /// assert!((-160.0 - coordinates.longitude().degrees()).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn new(latitude: Angle, longitude: Angle) -> Self {
        let (lat, lon) = canonicalise(latitude.radians(), longitude.radians());
        Self {
            latitude: Angle::from_radians(lat),
            longitude: Angle::from_radians(lon),
        }
    }

    /// Construct `GlobalCoordinates` from a latitude and longitude in degrees.
    #[must_use]
    pub fn from_degrees(latitude: f64, longitude: f64) -> Self {
        Self::new(Angle::from_degrees(latitude), Angle::from_degrees(longitude))
    }

    /// The latitude.
    #[must_use]
    pub const fn latitude(&self) -> Angle {
        self.latitude
    }

    /// The longitude.
    #[must_use]
    pub const fn longitude(&self) -> Angle {
        self.longitude
    }

    /// `GlobalCoordinates` with this longitude and a new `latitude`.
    #[must_use]
    pub fn with_latitude(&self, latitude: Angle) -> Self {
        Self::new(latitude, self.longitude)
    }

    /// `GlobalCoordinates` with this latitude and a new `longitude`.
    #[must_use]
    pub fn with_longitude(&self, longitude: Angle) -> Self {
        Self::new(self.latitude, longitude)
    }

    /// Whether the latitude or longitude is NaN.
    #[must_use]
    pub fn is_nan(&self) -> bool {
        self.latitude.is_nan() || self.longitude.is_nan()
    }

    /// A total ordering of `GlobalCoordinates`, by longitude then latitude.
    #[must_use]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.longitude
            .total_cmp(&other.longitude)
            .then_with(|| self.latitude.total_cmp(&other.latitude))
    }
}

/// `GlobalCoordinates` are ordered by longitude then latitude.
impl PartialOrd for GlobalCoordinates {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.longitude.partial_cmp(&other.longitude)? {
            Ordering::Equal => self.latitude.partial_cmp(&other.latitude),
            ordering => Some(ordering),
        }
    }
}

impl Validate for GlobalCoordinates {
    /// Test whether `GlobalCoordinates` are valid.
    /// I.e. whether they are not NaN.
    fn is_valid(&self) -> bool {
        !self.is_nan()
    }
}

impl From<&LatLong> for GlobalCoordinates {
    fn from(a: &LatLong) -> Self {
        Self::new(Angle::from(a.lat()), Angle::from(a.lon()))
    }
}

impl From<&GlobalCoordinates> for LatLong {
    fn from(a: &GlobalCoordinates) -> Self {
        Self::new(Degrees::from(a.latitude), Degrees::from(a.longitude))
    }
}

impl fmt::Display for GlobalCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

/// `GlobalCoordinates` at an elevation above an ellipsoid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlobalPosition {
    coordinates: GlobalCoordinates,
    /// The elevation above the ellipsoid.
    elevation: Metres,
}

impl GlobalPosition {
    /// Constructor.
    /// * `coordinates` - the coordinates of the position.
    /// * `elevation` - the elevation above the ellipsoid.
    #[must_use]
    pub const fn new(coordinates: GlobalCoordinates, elevation: Metres) -> Self {
        Self {
            coordinates,
            elevation,
        }
    }

    /// The coordinates of the position.
    #[must_use]
    pub const fn coordinates(&self) -> &GlobalCoordinates {
        &self.coordinates
    }

    /// The latitude of the position.
    #[must_use]
    pub const fn latitude(&self) -> Angle {
        self.coordinates.latitude
    }

    /// The longitude of the position.
    #[must_use]
    pub const fn longitude(&self) -> Angle {
        self.coordinates.longitude
    }

    /// The elevation above the ellipsoid.
    #[must_use]
    pub const fn elevation(&self) -> Metres {
        self.elevation
    }

    /// A `GlobalPosition` with this elevation and new `coordinates`.
    #[must_use]
    pub const fn with_coordinates(&self, coordinates: GlobalCoordinates) -> Self {
        Self::new(coordinates, self.elevation)
    }

    /// A `GlobalPosition` with these coordinates and a new `elevation`.
    #[must_use]
    pub const fn with_elevation(&self, elevation: Metres) -> Self {
        Self::new(self.coordinates, elevation)
    }

    /// A total ordering of `GlobalPosition`s, by coordinates then elevation.
    #[must_use]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.coordinates
            .total_cmp(&other.coordinates)
            .then_with(|| self.elevation.0.total_cmp(&other.elevation.0))
    }
}

/// A `GlobalPosition` on the surface of the ellipsoid.
impl From<GlobalCoordinates> for GlobalPosition {
    fn from(coordinates: GlobalCoordinates) -> Self {
        Self::new(coordinates, Metres(0.0))
    }
}

/// `GlobalPosition`s are ordered by longitude, latitude then elevation.
impl PartialOrd for GlobalPosition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.coordinates.partial_cmp(&other.coordinates)? {
            Ordering::Equal => self.elevation.0.partial_cmp(&other.elevation.0),
            ordering => Some(ordering),
        }
    }
}

impl Validate for GlobalPosition {
    /// Test whether a `GlobalPosition` is valid.
    /// I.e. whether its coordinates are valid and its elevation is finite.
    fn is_valid(&self) -> bool {
        self.coordinates.is_valid() && self.elevation.0.is_finite()
    }
}

impl fmt::Display for GlobalPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {} m", self.coordinates, self.elevation.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;

    fn assert_coordinates(lat: f64, lon: f64, coordinates: &GlobalCoordinates) {
        assert!(
            is_within_tolerance(lat, coordinates.latitude().degrees(), 1e-12),
            "latitude: {lat} {coordinates}"
        );
        assert!(
            is_within_tolerance(lon, coordinates.longitude().degrees(), 1e-12),
            "longitude: {lon} {coordinates}"
        );
    }

    #[test]
    fn test_global_coordinates_canonical() {
        let coordinates = GlobalCoordinates::from_degrees(45.0, 90.0);
        assert_eq!(Angle::from_degrees(45.0), coordinates.latitude());
        assert_eq!(Angle::from_degrees(90.0), coordinates.longitude());

        // the poles and antimeridian are unchanged
        let coordinates = GlobalCoordinates::from_degrees(90.0, 180.0);
        assert_eq!(Angle::from_degrees(90.0), coordinates.latitude());
        assert_eq!(Angle::from_degrees(180.0), coordinates.longitude());

        let coordinates = GlobalCoordinates::from_degrees(-90.0, -179.0);
        assert_eq!(Angle::from_degrees(-90.0), coordinates.latitude());
        assert_eq!(Angle::from_degrees(-179.0), coordinates.longitude());
    }

    #[test]
    fn test_global_coordinates_canonicalise_latitude() {
        assert_coordinates(80.0, -160.0, &GlobalCoordinates::from_degrees(100.0, 20.0));
        assert_coordinates(-80.0, -160.0, &GlobalCoordinates::from_degrees(-100.0, 20.0));
        assert_coordinates(-20.0, -160.0, &GlobalCoordinates::from_degrees(200.0, 20.0));
        assert_coordinates(-80.0, 20.0, &GlobalCoordinates::from_degrees(280.0, 20.0));
        assert_coordinates(20.0, -160.0, &GlobalCoordinates::from_degrees(-200.0, 20.0));
        assert_coordinates(10.0, 20.0, &GlobalCoordinates::from_degrees(370.0, 20.0));
        assert_coordinates(10.0, 20.0, &GlobalCoordinates::from_degrees(-710.0, 20.0));
    }

    #[test]
    fn test_global_coordinates_canonicalise_longitude() {
        assert_coordinates(10.0, -160.0, &GlobalCoordinates::from_degrees(10.0, 200.0));
        assert_coordinates(10.0, 160.0, &GlobalCoordinates::from_degrees(10.0, -200.0));
        assert_coordinates(10.0, 180.0, &GlobalCoordinates::from_degrees(10.0, -180.0));
        assert_coordinates(10.0, 0.0, &GlobalCoordinates::from_degrees(10.0, 360.0));
        assert_coordinates(10.0, 10.0, &GlobalCoordinates::from_degrees(10.0, 730.0));
        assert_coordinates(10.0, 180.0, &GlobalCoordinates::from_degrees(10.0, 540.0));
        assert_coordinates(10.0, 180.0, &GlobalCoordinates::from_degrees(10.0, -540.0));
    }

    #[test]
    fn test_global_coordinates_canonicalise_idempotent() {
        for lat in (-360..=360).step_by(15) {
            for lon in (-540..=540).step_by(15) {
                let coordinates = GlobalCoordinates::from_degrees(f64::from(lat), f64::from(lon));
                assert!(coordinates.is_valid());

                let lat = coordinates.latitude().radians();
                let lon = coordinates.longitude().radians();
                assert!((-FRAC_PI_2..=FRAC_PI_2).contains(&lat));
                assert!(-PI < lon && lon <= PI);

                let result = GlobalCoordinates::new(coordinates.latitude(), coordinates.longitude());
                assert_eq!(coordinates, result);
            }
        }
    }

    #[test]
    fn test_global_coordinates_non_finite() {
        let coordinates = GlobalCoordinates::from_degrees(f64::NAN, 0.0);
        assert!(coordinates.is_nan());
        assert!(!coordinates.is_valid());
        assert_ne!(coordinates, coordinates);

        let coordinates = GlobalCoordinates::from_degrees(0.0, f64::NAN);
        assert!(coordinates.longitude().is_nan());
        assert!(!coordinates.is_valid());

        let coordinates = GlobalCoordinates::from_degrees(f64::INFINITY, 0.0);
        assert!(coordinates.latitude().is_nan());
        assert!(!coordinates.is_valid());

        let coordinates = GlobalCoordinates::from_degrees(0.0, f64::NEG_INFINITY);
        assert_eq!(Angle::ZERO, coordinates.latitude());
        assert!(coordinates.longitude().is_nan());
    }

    #[test]
    fn test_global_coordinates_with() {
        let coordinates = GlobalCoordinates::from_degrees(10.0, 20.0);

        let result = coordinates.with_latitude(Angle::from_degrees(30.0));
        assert_coordinates(30.0, 20.0, &result);

        let result = coordinates.with_latitude(Angle::from_degrees(100.0));
        assert_coordinates(80.0, -160.0, &result);

        let result = coordinates.with_longitude(Angle::from_degrees(190.0));
        assert_coordinates(10.0, -170.0, &result);

        // unchanged
        assert_coordinates(10.0, 20.0, &coordinates);
    }

    #[test]
    fn test_global_coordinates_ordering() {
        let a = GlobalCoordinates::from_degrees(10.0, 20.0);
        let b = GlobalCoordinates::from_degrees(-10.0, 30.0);
        let c = GlobalCoordinates::from_degrees(20.0, 20.0);

        // longitude first
        assert!(a < b);
        assert!(c < b);
        // then latitude
        assert!(a < c);
        assert_eq!(Some(Ordering::Equal), a.partial_cmp(&a));

        assert_eq!(Ordering::Less, a.total_cmp(&b));
        assert_eq!(Ordering::Less, a.total_cmp(&c));
        assert_eq!(Ordering::Greater, b.total_cmp(&c));
        assert_eq!(Ordering::Equal, a.total_cmp(&a));

        let nan = GlobalCoordinates::from_degrees(f64::NAN, 20.0);
        assert!(a.partial_cmp(&nan).is_none());
    }

    #[test]
    fn test_global_coordinates_lat_long() {
        let lat_long = LatLong::new(Degrees(38.88922), Degrees(-77.04978));
        let coordinates = GlobalCoordinates::from(&lat_long);
        assert_coordinates(38.88922, -77.04978, &coordinates);

        let result = LatLong::from(&coordinates);
        assert!(is_within_tolerance(38.88922, result.lat().0, 1e-12));
        assert!(is_within_tolerance(-77.04978, result.lon().0, 1e-12));
    }

    #[test]
    fn test_global_coordinates_display() {
        let coordinates = GlobalCoordinates::from_degrees(90.0, -90.0);
        assert_eq!("90°, -90°", coordinates.to_string());
    }

    #[test]
    fn test_global_position() {
        let coordinates = GlobalCoordinates::from_degrees(38.840511, -105.0445896);
        let position = GlobalPosition::new(coordinates, Metres(4301.0));
        assert_eq!(&coordinates, position.coordinates());
        assert_eq!(coordinates.latitude(), position.latitude());
        assert_eq!(coordinates.longitude(), position.longitude());
        assert_eq!(Metres(4301.0), position.elevation());
        assert!(position.is_valid());

        let position = GlobalPosition::from(coordinates);
        assert_eq!(Metres(0.0), position.elevation());

        let result = position.with_elevation(Metres(100.0));
        assert_eq!(Metres(100.0), result.elevation());
        assert_eq!(&coordinates, result.coordinates());

        let other = GlobalCoordinates::from_degrees(37.826389, -122.4225);
        let result = result.with_coordinates(other);
        assert_eq!(&other, result.coordinates());
        assert_eq!(Metres(100.0), result.elevation());

        let invalid = position.with_elevation(Metres(f64::INFINITY));
        assert!(!invalid.is_valid());
    }

    #[test]
    fn test_global_position_ordering() {
        let coordinates = GlobalCoordinates::from_degrees(10.0, 20.0);
        let low = GlobalPosition::new(coordinates, Metres(0.0));
        let high = GlobalPosition::new(coordinates, Metres(100.0));
        let east = GlobalPosition::new(GlobalCoordinates::from_degrees(10.0, 21.0), Metres(0.0));

        assert!(low < high);
        assert!(high < east);
        assert_eq!(Ordering::Less, low.total_cmp(&high));
        assert_eq!(Ordering::Less, high.total_cmp(&east));
        assert_eq!(Ordering::Equal, low.total_cmp(&low));
        assert_ne!(low, high);
        assert_eq!(low, GlobalPosition::from(coordinates));
    }

    #[test]
    fn test_global_position_display() {
        let position = GlobalPosition::new(GlobalCoordinates::from_degrees(90.0, -90.0), Metres(10.5));
        assert_eq!("90°, -90°, 10.5 m", position.to_string());
    }
}
