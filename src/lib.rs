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

//! vincenty-geodesy
//!
//! [![License](https://img.shields.io/badge/License-MIT-blue)](https://opensource.org/license/mit/)
//!
//! A library for calculating geodesic distances, azimuths and destinations on
//! reference ellipsoids, such as
//! [WGS-84](https://www.icao.int/NACC/Documents/Meetings/2014/ECARAIM/REF08-Doc9674.pdf),
//! using [Vincenty's formulae](https://en.wikipedia.org/wiki/Vincenty%27s_formulae).
//!
//! ## Geodesic calculations
//!
//! The shortest path between two points on the surface of an ellipsoid is a
//! [geodesic](https://en.wikipedia.org/wiki/Geodesics_on_an_ellipsoid).
//! This library uses T Vincenty's
//! [iterative solutions](https://www.ngs.noaa.gov/PUBS_LIB/inverse.pdf)
//! to calculate:
//!
//! - the length and azimuths of the geodesic between two positions,
//!   the *inverse* solution;
//! - the position and final bearing reached by travelling a distance along
//!   a geodesic from a start position and bearing, the *direct* solution;
//! - the geodesic and point to point distance between two positions at
//!   different elevations above the ellipsoid.
//!
//! Vincenty's inverse solution may fail to converge for nearly antipodal
//! positions. In that case the azimuth at the start of the geodesic is found
//! by bisection on the longitude difference instead. Positions exactly 180°
//! apart in longitude take the meridional route through the nearer pole.
//!
//! ## Design
//!
//! `Angle`s are measured in radians and do not wrap, so 360° is not equal to 0°.
//! `GlobalCoordinates` are canonicalised on construction: latitudes
//! are folded into the range [-90°, 90°] by reflecting across a pole,
//! longitudes into the range (-180°, 180°].
//!
//! The `Ellipsoid` class represents an ellipsoid of revolution.
//! The statics `WGS84`, `GRS80`, `GRS67`, `ANS`, `WGS72`, `CLARKE_1858`,
//! `CLARKE_1880` and `SPHERE` represent commonly used reference ellipsoids.
//!
//! The `GeodeticCalculator` holds the convergence tolerance and maximum number
//! of iterations of the solutions.
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Degrees` and
//!   `Radians` and perform trigonometric calculations;
//! - [unit-sphere](https://crates.io/crates/unit-sphere) - to define `LatLong`;
//! - [icao_units](https://crates.io/crates/icao-units) - to define `Metres` and
//!   `NauticalMiles` and perform conversions between them;
//! - [log](https://crates.io/crates/log) - to report the convergence of the
//!   iterative solutions.
//!
//! ## Example
//!
//! ```
//! use vincenty_geodesy::*;
//!
//! let calculator = GeodeticCalculator::default();
//!
//! let lincoln_memorial = GlobalCoordinates::from_degrees(38.88922, -77.04978);
//! let eiffel_tower = GlobalCoordinates::from_degrees(48.85889, 2.29583);
//!
//! let curve = calculator.calculate_geodetic_curve(&WGS84, &lincoln_memorial, &eiffel_tower);
//! assert!((6_179_016.136 - curve.ellipsoidal_distance().0).abs() < 1e-3);
//! assert!((51.767_921_42 - curve.azimuth().degrees()).abs() < 1e-8);
//!
//! let distance_nm = NauticalMiles::from(curve.ellipsoidal_distance());
//! println!("Lincoln Memorial to Eiffel Tower: {:?}", distance_nm);
//! ```
//!
//! The library is declared [no_std](https://docs.rust-embedded.org/book/intro/no-std.html)
//! so it can be used in embedded applications.

#![cfg_attr(not(test), no_std)]

extern crate angle_sc;
extern crate icao_units;
extern crate unit_sphere;

pub mod angle;
pub mod coordinates;
pub mod curve;
pub mod ellipsoid;
pub mod error;
pub mod geodesic;

pub use angle::Angle;
pub use angle_sc::{Degrees, Radians, Validate};
pub use coordinates::{GlobalCoordinates, GlobalPosition};
pub use curve::{GeodeticCurve, GeodeticMeasurement};
pub use ellipsoid::reference::{
    ReferenceEllipsoid, ANS, CLARKE_1858, CLARKE_1880, GRS67, GRS80, SPHERE, WGS72, WGS84,
};
pub use error::Error;
pub use icao_units::non_si::NauticalMiles;
pub use icao_units::si::Metres;
pub use unit_sphere::LatLong;

use core::fmt;

/// The parameters of an `Ellipsoid`.
#[derive(Clone, Copy, Debug)]
pub struct Ellipsoid {
    /// The Semimajor axis of the ellipsoid.
    a: Metres,
    /// The flattening of the ellipsoid, a ratio.
    f: f64,
    /// The inverse flattening of the ellipsoid.
    inverse_f: f64,

    /// The Semiminor axis of the ellipsoid.
    b: Metres,
    /// One minus the flattening ratio.
    one_minus_f: f64,
    /// The square of the second Eccentricity of the ellipsoid.
    ep_2: f64,
}

impl Ellipsoid {
    fn new(a: Metres, f: f64, inverse_f: f64) -> Self {
        let b = ellipsoid::calculate_minor_axis(a, f);
        Self {
            a,
            f,
            inverse_f,
            b,
            one_minus_f: 1.0 - f,
            ep_2: ellipsoid::calculate_sq_2nd_eccentricity(a, b),
        }
    }

    /// Construct an `Ellipsoid` from its Semimajor axis and inverse flattening.
    /// * `a` - the Semimajor axis of the `Ellipsoid`.
    /// * `inverse_f` - the inverse flattening of the `Ellipsoid`.
    /// # Examples
    /// ```
    /// use vincenty_geodesy::{Ellipsoid, Metres};
    ///
    /// let ellipsoid = Ellipsoid::from_axis_and_inverse_flattening(Metres(6_378_137.0), 298.257_223_563);
    /// assert_eq!(Metres(6_356_752.314_245_179), ellipsoid.b());
    /// ```
    #[must_use]
    pub fn from_axis_and_inverse_flattening(a: Metres, inverse_f: f64) -> Self {
        Self::new(a, 1.0 / inverse_f, inverse_f)
    }

    /// Construct an `Ellipsoid` from its Semimajor axis and flattening.
    /// * `a` - the Semimajor axis of the `Ellipsoid`.
    /// * `f` - the flattening of the `Ellipsoid`, a ratio.
    #[must_use]
    pub fn from_axis_and_flattening(a: Metres, f: f64) -> Self {
        Self::new(a, f, 1.0 / f)
    }

    /// Construct an `Ellipsoid` from its Semimajor axis and inverse flattening,
    /// checking the parameters.
    /// # Errors
    /// `Error::InvalidSemimajorAxis` if `a` is not finite and positive,
    /// `Error::InvalidFlattening` if the flattening is not in the range [0, 1).
    pub fn try_from_axis_and_inverse_flattening(a: Metres, inverse_f: f64) -> Result<Self, Error> {
        validate_parameters(a, 1.0 / inverse_f)?;
        Ok(Self::from_axis_and_inverse_flattening(a, inverse_f))
    }

    /// Construct an `Ellipsoid` from its Semimajor axis and flattening,
    /// checking the parameters.
    /// # Errors
    /// `Error::InvalidSemimajorAxis` if `a` is not finite and positive,
    /// `Error::InvalidFlattening` if `f` is not in the range [0, 1).
    pub fn try_from_axis_and_flattening(a: Metres, f: f64) -> Result<Self, Error> {
        validate_parameters(a, f)?;
        Ok(Self::from_axis_and_flattening(a, f))
    }

    /// The Semimajor axis of the ellipsoid.
    #[must_use]
    pub const fn a(&self) -> Metres {
        self.a
    }

    /// The flattening of the ellipsoid, a ratio.
    #[must_use]
    pub const fn f(&self) -> f64 {
        self.f
    }

    /// The inverse flattening of the ellipsoid.
    #[must_use]
    pub const fn inverse_f(&self) -> f64 {
        self.inverse_f
    }

    /// The Semiminor axis of the ellipsoid.
    #[must_use]
    pub const fn b(&self) -> Metres {
        self.b
    }

    /// One minus the flattening ratio.
    #[must_use]
    pub const fn one_minus_f(&self) -> f64 {
        self.one_minus_f
    }

    /// The square of the second Eccentricity of the ellipsoid.
    #[must_use]
    pub const fn ep_2(&self) -> f64 {
        self.ep_2
    }

    /// An `Ellipsoid` with the same flattening as this one, with its axes
    /// raised to `elevation` at `latitude`.
    /// * `elevation` - the elevation above this `Ellipsoid`.
    /// * `latitude` - the latitude at which the elevation applies.
    #[must_use]
    pub fn at_elevation(&self, elevation: Metres, latitude: Angle) -> Self {
        let a = ellipsoid::calculate_elevated_axis(self.a, self.f, elevation, latitude);
        Self::new(a, self.f, self.inverse_f)
    }

    /// Convert a geodetic Latitude to a parametric Latitude on the
    /// auxiliary sphere.
    /// * `lat` - the geodetic Latitude
    #[must_use]
    pub fn calculate_parametric_latitude(&self, lat: angle_sc::Angle) -> angle_sc::Angle {
        ellipsoid::calculate_parametric_latitude(lat, self.one_minus_f)
    }

    /// Convert a parametric Latitude on the auxiliary sphere to a
    /// geodetic Latitude.
    /// * `beta` - the parametric Latitude
    #[must_use]
    pub fn calculate_geodetic_latitude(&self, beta: angle_sc::Angle) -> angle_sc::Angle {
        ellipsoid::calculate_geodetic_latitude(beta, self.one_minus_f)
    }
}

fn validate_parameters(a: Metres, f: f64) -> Result<(), Error> {
    if !(a.0.is_finite() && 0.0 < a.0) {
        return Err(Error::InvalidSemimajorAxis(a.0));
    }
    if !(0.0..1.0).contains(&f) {
        return Err(Error::InvalidFlattening(f));
    }
    Ok(())
}

/// `Ellipsoid`s are equal if their Semimajor axes and flattenings are equal.
impl PartialEq for Ellipsoid {
    fn eq(&self, other: &Self) -> bool {
        self.a == other.a && self.f == other.f
    }
}

impl Validate for Ellipsoid {
    /// Test whether an `Ellipsoid` is valid.
    /// I.e. whether its Semimajor axis is finite and positive and its
    /// flattening is in the range [0, 1).
    fn is_valid(&self) -> bool {
        validate_parameters(self.a, self.f).is_ok()
    }
}

impl fmt::Display for Ellipsoid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "a: {} m, b: {} m, f: {}, 1/f: {}",
            self.a.0, self.b.0, self.f, self.inverse_f
        )
    }
}

/// The calculator of geodesics on an `Ellipsoid`, see `geodesic`.
///
/// It holds the convergence tolerance and the maximum number of iterations
/// of Vincenty's iterative solutions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeodeticCalculator {
    /// The convergence tolerance in radians.
    tolerance: f64,
    /// The maximum number of iterations.
    max_iterations: u32,
}

impl Default for GeodeticCalculator {
    fn default() -> Self {
        Self::new(geodesic::TOLERANCE, geodesic::MAX_ITERATIONS)
    }
}

impl GeodeticCalculator {
    /// Constructor.
    /// * `tolerance` - the convergence tolerance of the iterative solutions.
    /// * `max_iterations` - the maximum number of iterations.
    #[must_use]
    pub const fn new(tolerance: Radians, max_iterations: u32) -> Self {
        Self {
            tolerance: tolerance.0,
            max_iterations,
        }
    }

    /// The convergence tolerance of the iterative solutions.
    #[must_use]
    pub const fn tolerance(&self) -> Radians {
        Radians(self.tolerance)
    }

    /// The maximum number of iterations of the iterative solutions.
    #[must_use]
    pub const fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Calculate the geodesic between two coordinates on an `Ellipsoid`,
    /// Vincenty's inverse solution.
    /// * `ellipsoid` - the `Ellipsoid`.
    /// * `start`, `end` - the start and end coordinates.
    ///
    /// returns the length and azimuths of the geodesic.
    #[must_use]
    pub fn calculate_geodetic_curve(
        &self,
        ellipsoid: &Ellipsoid,
        start: &GlobalCoordinates,
        end: &GlobalCoordinates,
    ) -> GeodeticCurve {
        geodesic::calculate_geodetic_curve(
            start,
            end,
            self.tolerance(),
            self.max_iterations,
            ellipsoid,
        )
    }

    /// Calculate the coordinates reached by travelling along a geodesic,
    /// Vincenty's direct solution.
    /// * `ellipsoid` - the `Ellipsoid`.
    /// * `start` - the start coordinates.
    /// * `start_bearing` - the azimuth of the geodesic at `start`.
    /// * `distance` - the distance to travel along the geodesic.
    ///
    /// returns the end coordinates and the azimuth of the geodesic there.
    /// # Examples
    /// ```
    /// use vincenty_geodesy::*;
    ///
    /// let calculator = GeodeticCalculator::default();
    /// let start = GlobalCoordinates::from_degrees(0.0, 0.0);
    /// let (end, end_bearing) = calculator.calculate_ending_global_coordinates(
    ///     &WGS84, &start, Angle::from_degrees(90.0), Metres(1_000_000.0));
    ///
    /// assert!(end.latitude().degrees().abs() < 1e-12);
    /// assert!((8.983_152_841 - end.longitude().degrees()).abs() < 1e-9);
    /// assert!((90.0 - end_bearing.degrees()).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn calculate_ending_global_coordinates(
        &self,
        ellipsoid: &Ellipsoid,
        start: &GlobalCoordinates,
        start_bearing: Angle,
        distance: Metres,
    ) -> (GlobalCoordinates, Angle) {
        geodesic::calculate_ending_global_coordinates(
            start,
            start_bearing,
            distance,
            self.tolerance(),
            self.max_iterations,
            ellipsoid,
        )
    }

    /// Calculate the geodesic between two positions at elevations above an
    /// `Ellipsoid`.
    /// * `ellipsoid` - the `Ellipsoid`.
    /// * `start`, `end` - the start and end positions.
    ///
    /// returns the geodesic on the average elevation ellipsoid and the
    /// elevation change between the positions.
    #[must_use]
    pub fn calculate_geodetic_measurement(
        &self,
        ellipsoid: &Ellipsoid,
        start: &GlobalPosition,
        end: &GlobalPosition,
    ) -> GeodeticMeasurement {
        geodesic::calculate_geodetic_measurement(
            start,
            end,
            self.tolerance(),
            self.max_iterations,
            ellipsoid,
        )
    }
}
