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

//! The reference module contains the defining parameters of commonly used
//! reference ellipsoids and a lazily constructed `Ellipsoid` for each of them.

use crate::{Ellipsoid, Error, Metres};
use core::fmt;
use core::str::FromStr;
use lazy_static::lazy_static;

lazy_static! {
    /// The World Geodetic System 1984 `Ellipsoid`.
    pub static ref WGS84: Ellipsoid = ReferenceEllipsoid::Wgs84.construct();
    /// The Geodetic Reference System 1980 `Ellipsoid`.
    pub static ref GRS80: Ellipsoid = ReferenceEllipsoid::Grs80.construct();
    /// The Geodetic Reference System 1967 `Ellipsoid`.
    pub static ref GRS67: Ellipsoid = ReferenceEllipsoid::Grs67.construct();
    /// The Australian National Spheroid.
    pub static ref ANS: Ellipsoid = ReferenceEllipsoid::Ans.construct();
    /// The World Geodetic System 1972 `Ellipsoid`.
    pub static ref WGS72: Ellipsoid = ReferenceEllipsoid::Wgs72.construct();
    /// The Clarke 1858 `Ellipsoid`.
    pub static ref CLARKE_1858: Ellipsoid = ReferenceEllipsoid::Clarke1858.construct();
    /// The Clarke 1880 `Ellipsoid`.
    pub static ref CLARKE_1880: Ellipsoid = ReferenceEllipsoid::Clarke1880.construct();
    /// A sphere with the mean radius of the Earth.
    pub static ref SPHERE: Ellipsoid = ReferenceEllipsoid::Sphere.construct();
}

/// The named reference ellipsoids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReferenceEllipsoid {
    /// The World Geodetic System 1984 ellipsoid.
    Wgs84,
    /// The Geodetic Reference System 1980 ellipsoid.
    Grs80,
    /// The Geodetic Reference System 1967 ellipsoid.
    Grs67,
    /// The Australian National Spheroid.
    Ans,
    /// The World Geodetic System 1972 ellipsoid.
    Wgs72,
    /// The Clarke 1858 ellipsoid.
    Clarke1858,
    /// The Clarke 1880 ellipsoid.
    Clarke1880,
    /// A sphere with the mean radius of the Earth.
    Sphere,
}

impl ReferenceEllipsoid {
    /// All of the reference ellipsoids.
    pub const ALL: [Self; 8] = [
        Self::Wgs84,
        Self::Grs80,
        Self::Grs67,
        Self::Ans,
        Self::Wgs72,
        Self::Clarke1858,
        Self::Clarke1880,
        Self::Sphere,
    ];

    /// The name of the reference ellipsoid.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wgs84 => "WGS84",
            Self::Grs80 => "GRS80",
            Self::Grs67 => "GRS67",
            Self::Ans => "ANS",
            Self::Wgs72 => "WGS72",
            Self::Clarke1858 => "Clarke1858",
            Self::Clarke1880 => "Clarke1880",
            Self::Sphere => "Sphere",
        }
    }

    /// The defining Semimajor axis of the reference ellipsoid.
    #[must_use]
    pub const fn semimajor_axis(self) -> Metres {
        match self {
            Self::Wgs84 | Self::Grs80 => Metres(6_378_137.0),
            Self::Grs67 | Self::Ans => Metres(6_378_160.0),
            Self::Wgs72 => Metres(6_378_135.0),
            Self::Clarke1858 => Metres(6_378_293.645),
            Self::Clarke1880 => Metres(6_378_249.145),
            Self::Sphere => Metres(6_371_000.0),
        }
    }

    /// The defining inverse flattening of the reference ellipsoid.
    /// It is infinite for the `Sphere`.
    #[must_use]
    pub const fn inverse_flattening(self) -> f64 {
        match self {
            Self::Wgs84 => 298.257_223_563,
            Self::Grs80 => 298.257_222_101,
            Self::Grs67 | Self::Ans => 298.25,
            Self::Wgs72 => 298.26,
            Self::Clarke1858 => 294.26,
            Self::Clarke1880 => 293.465,
            Self::Sphere => f64::INFINITY,
        }
    }

    /// The lazily constructed `Ellipsoid` of the reference ellipsoid.
    /// # Examples
    /// ```
    /// use vincenty_geodesy::{Metres, ReferenceEllipsoid};
    ///
    /// let ellipsoid = ReferenceEllipsoid::Wgs84.ellipsoid();
    /// assert_eq!(Metres(6_378_137.0), ellipsoid.a());
    /// ```
    #[must_use]
    pub fn ellipsoid(self) -> &'static Ellipsoid {
        match self {
            Self::Wgs84 => &*WGS84,
            Self::Grs80 => &*GRS80,
            Self::Grs67 => &*GRS67,
            Self::Ans => &*ANS,
            Self::Wgs72 => &*WGS72,
            Self::Clarke1858 => &*CLARKE_1858,
            Self::Clarke1880 => &*CLARKE_1880,
            Self::Sphere => &*SPHERE,
        }
    }

    fn construct(self) -> Ellipsoid {
        match self {
            Self::Sphere => Ellipsoid::from_axis_and_flattening(self.semimajor_axis(), 0.0),
            _ => Ellipsoid::from_axis_and_inverse_flattening(
                self.semimajor_axis(),
                self.inverse_flattening(),
            ),
        }
    }
}

impl FromStr for ReferenceEllipsoid {
    type Err = Error;

    /// Parse a reference ellipsoid name. Case is ignored, as are
    /// hyphens, underscores and spaces, e.g. "wgs-84" and "Clarke 1880".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|reference| {
                s.chars()
                    .filter(|c| !matches!(c, '-' | '_' | ' '))
                    .map(|c| c.to_ascii_uppercase())
                    .eq(reference.name().chars().map(|c| c.to_ascii_uppercase()))
            })
            .ok_or(Error::UnknownEllipsoid)
    }
}

impl fmt::Display for ReferenceEllipsoid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_ellipsoid_parameters() {
        assert_eq!(Metres(6_378_137.0), WGS84.a());
        assert_eq!(298.257_223_563, WGS84.inverse_f());
        assert_eq!(Metres(6_378_137.0), GRS80.a());
        assert_eq!(298.257_222_101, GRS80.inverse_f());
        assert_eq!(Metres(6_378_160.0), GRS67.a());
        assert_eq!(298.25, GRS67.inverse_f());
        assert_eq!(*GRS67, *ANS);
        assert_eq!(Metres(6_378_135.0), WGS72.a());
        assert_eq!(298.26, WGS72.inverse_f());
        assert_eq!(Metres(6_378_293.645), CLARKE_1858.a());
        assert_eq!(294.26, CLARKE_1858.inverse_f());
        assert_eq!(Metres(6_378_249.145), CLARKE_1880.a());
        assert_eq!(293.465, CLARKE_1880.inverse_f());

        assert_eq!(Metres(6_371_000.0), SPHERE.a());
        assert_eq!(SPHERE.a(), SPHERE.b());
        assert_eq!(0.0, SPHERE.f());
        assert!(SPHERE.inverse_f().is_infinite());
    }

    #[test]
    fn test_reference_ellipsoid_ellipsoid() {
        for reference in ReferenceEllipsoid::ALL {
            let ellipsoid = reference.ellipsoid();
            assert_eq!(reference.semimajor_axis(), ellipsoid.a());
            assert_eq!(reference.inverse_flattening(), ellipsoid.inverse_f());
        }

        // the statics are shared
        assert!(core::ptr::eq(
            ReferenceEllipsoid::Wgs84.ellipsoid(),
            ReferenceEllipsoid::Wgs84.ellipsoid()
        ));
    }

    #[test]
    fn test_reference_ellipsoid_from_str() {
        for reference in ReferenceEllipsoid::ALL {
            assert_eq!(Ok(reference), reference.name().parse());
            assert_eq!(Ok(reference), reference.to_string().parse());
        }

        assert_eq!(Ok(ReferenceEllipsoid::Wgs84), "wgs84".parse());
        assert_eq!(Ok(ReferenceEllipsoid::Wgs84), "WGS-84".parse());
        assert_eq!(Ok(ReferenceEllipsoid::Wgs72), "wgs_72".parse());
        assert_eq!(Ok(ReferenceEllipsoid::Clarke1880), "Clarke 1880".parse());
        assert_eq!(Ok(ReferenceEllipsoid::Sphere), "SPHERE".parse());

        assert_eq!(
            Err(Error::UnknownEllipsoid),
            "Airy1830".parse::<ReferenceEllipsoid>()
        );
        assert_eq!(Err(Error::UnknownEllipsoid), "".parse::<ReferenceEllipsoid>());
        assert_eq!(Err(Error::UnknownEllipsoid), "WGS8".parse::<ReferenceEllipsoid>());
    }

    #[test]
    fn test_reference_ellipsoid_display() {
        assert_eq!("WGS84", ReferenceEllipsoid::Wgs84.to_string());
        assert_eq!("Clarke1858", ReferenceEllipsoid::Clarke1858.to_string());
    }
}
