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

//! The angle module contains the `Angle` type: an angular measurement held
//! in radians.
//!
//! Unlike `angle_sc::Angle`, an `Angle` does not wrap: 360° is not equal
//! to 0°. Equality and ordering are performed on the raw radian value.

use angle_sc::{Degrees, Radians};
use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, Neg, Sub};

/// An angular measurement in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Angle {
    radians: f64,
}

impl Angle {
    /// A zero `Angle`.
    pub const ZERO: Self = Self::from_radians(0.0);

    /// A 180° `Angle`.
    pub const HALF_TURN: Self = Self::from_radians(core::f64::consts::PI);

    /// A NaN valued `Angle`.
    pub const NAN: Self = Self::from_radians(f64::NAN);

    /// Construct an `Angle` from a measurement in radians.
    #[must_use]
    pub const fn from_radians(radians: f64) -> Self {
        Self { radians }
    }

    /// Construct an `Angle` from a measurement in degrees.
    /// # Examples
    /// ```
    /// use vincenty_geodesy::Angle;
    ///
    /// let angle = Angle::from_degrees(180.0);
    /// assert_eq!(core::f64::consts::PI, angle.radians());
    /// ```
    #[must_use]
    pub fn from_degrees(degrees: f64) -> Self {
        Self::from_radians(degrees.to_radians())
    }

    /// Construct an `Angle` from degrees and minutes.
    /// The sign of `degrees` applies to the whole `Angle`.
    /// * `degrees` - whole degrees.
    /// * `minutes` - minutes of arc, 60 to a degree.
    #[must_use]
    pub fn from_degrees_minutes(degrees: i32, minutes: f64) -> Self {
        Self::from_degrees(signed_sum(degrees, minutes / 60.0))
    }

    /// Construct an `Angle` from degrees, minutes and seconds.
    /// The sign of `degrees` applies to the whole `Angle`.
    /// * `degrees` - whole degrees.
    /// * `minutes` - whole minutes of arc.
    /// * `seconds` - seconds of arc, 3600 to a degree.
    /// # Examples
    /// ```
    /// use vincenty_geodesy::Angle;
    ///
    /// let angle = Angle::from_degrees_minutes_seconds(-10, 30, 36.0);
    /// assert!((-10.51 - angle.degrees()).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn from_degrees_minutes_seconds(degrees: i32, minutes: i32, seconds: f64) -> Self {
        Self::from_degrees(signed_sum(
            degrees,
            f64::from(minutes) / 60.0 + seconds / 3600.0,
        ))
    }

    /// The `Angle` in radians.
    #[must_use]
    pub const fn radians(self) -> f64 {
        self.radians
    }

    /// The `Angle` in degrees.
    #[must_use]
    pub fn degrees(self) -> f64 {
        self.radians.to_degrees()
    }

    /// The absolute value of the `Angle`.
    #[must_use]
    pub fn abs(self) -> Self {
        Self::from_radians(libm::fabs(self.radians))
    }

    /// Whether the `Angle` is NaN.
    #[must_use]
    pub fn is_nan(self) -> bool {
        self.radians.is_nan()
    }

    /// A total ordering of `Angle`s, see `f64::total_cmp`.
    #[must_use]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.radians.total_cmp(&other.radians)
    }
}

/// Apply the sign of `degrees` to the sum of its magnitude and `fraction`.
fn signed_sum(degrees: i32, fraction: f64) -> f64 {
    let degrees = f64::from(degrees);
    if degrees < 0.0 {
        degrees - fraction
    } else {
        degrees + fraction
    }
}

impl Add for Angle {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::from_radians(self.radians + other.radians)
    }
}

impl Sub for Angle {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::from_radians(self.radians - other.radians)
    }
}

impl Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_radians(-self.radians)
    }
}

impl From<Degrees> for Angle {
    fn from(a: Degrees) -> Self {
        Self::from_degrees(a.0)
    }
}

impl From<Radians> for Angle {
    fn from(a: Radians) -> Self {
        Self::from_radians(a.0)
    }
}

impl From<Angle> for Degrees {
    fn from(a: Angle) -> Self {
        Self(a.degrees())
    }
}

impl From<Angle> for Radians {
    fn from(a: Angle) -> Self {
        Self(a.radians())
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}
