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

//! This module contains the series coefficients and functions used by
//! Vincenty's direct and inverse solutions on the surface of an ellipsoid.
//!
//! It uses the equations given by T Vincenty in
//! [Direct and Inverse Solutions of Geodesics on the Ellipsoid with application of nested equations](https://www.ngs.noaa.gov/PUBS_LIB/inverse.pdf),
//! Survey Review XXIII, No. 176, 1975.

#![allow(clippy::suboptimal_flops)]

/// The scale factor `A`.
/// Vincenty, Eq. 3.
/// * `u_2` - u², the square of the second eccentricity scaled by cos²α.
/// # Examples
/// ```
/// use angle_sc::is_within_tolerance;
/// use vincenty_geodesy::ellipsoid::coefficients::evaluate_a;
///
/// // evaluate_a for WGS 84 with cos²α = 0.5
/// let a = evaluate_a(0.003369748371138217);
/// assert!(is_within_tolerance(1.0008419055635631, a, 1e-15));
/// ```
#[must_use]
pub fn evaluate_a(u_2: f64) -> f64 {
    1.0 + u_2 / 16384.0 * (4096.0 + u_2 * (-768.0 + u_2 * (320.0 - 175.0 * u_2)))
}

/// The scale factor `B`.
/// Vincenty, Eq. 4.
/// * `u_2` - u², the square of the second eccentricity scaled by cos²α.
/// # Examples
/// ```
/// use angle_sc::is_within_tolerance;
/// use vincenty_geodesy::ellipsoid::coefficients::evaluate_b;
///
/// // evaluate_b for WGS 84 with cos²α = 0.5
/// let b = evaluate_b(0.003369748371138217);
/// assert!(is_within_tolerance(0.0008410204515406976, b, 1e-15));
/// ```
#[must_use]
pub fn evaluate_b(u_2: f64) -> f64 {
    u_2 / 1024.0 * (256.0 + u_2 * (-128.0 + u_2 * (74.0 - 47.0 * u_2)))
}

/// The longitude correction factor `C`.
/// Vincenty, Eq. 10.
/// * `f` - the flattening ratio.
/// * `cos2_alpha` - cos²α, where α is the azimuth of the geodesic at the Equator.
#[must_use]
pub fn evaluate_c(f: f64, cos2_alpha: f64) -> f64 {
    f / 16.0 * cos2_alpha * (4.0 + f * (4.0 - 3.0 * cos2_alpha))
}

/// Calculate cos(2σm), where σm is the arc length from the Equator to
/// the midpoint of the geodesic.
///
/// An equatorial geodesic has cos²α = 0, in which case the result is zero.
/// * `cos_sigma` - the cosine of the arc length on the auxiliary sphere.
/// * `sin_u1_sin_u2` - the product of the sines of the reduced latitudes.
/// * `cos2_alpha` - cos²α.
#[must_use]
pub fn calculate_cos_2sigma_m(cos_sigma: f64, sin_u1_sin_u2: f64, cos2_alpha: f64) -> f64 {
    if libm::fabs(cos2_alpha) < f64::EPSILON {
        0.0
    } else {
        cos_sigma - 2.0 * sin_u1_sin_u2 / cos2_alpha
    }
}

/// Calculate Δσ, the difference between the arc length on the auxiliary
/// sphere and the scaled geodesic length.
/// Vincenty, Eq. 6.
/// * `b` - the scale factor `B`.
/// * `sin_sigma`, `cos_sigma` - the sine and cosine of the arc length.
/// * `cos_2sigma_m` - cos(2σm).
#[must_use]
pub fn calculate_delta_sigma(b: f64, sin_sigma: f64, cos_sigma: f64, cos_2sigma_m: f64) -> f64 {
    let cos2_2sigma_m = cos_2sigma_m * cos_2sigma_m;
    b * sin_sigma
        * (cos_2sigma_m
            + b / 4.0
                * (cos_sigma * (-1.0 + 2.0 * cos2_2sigma_m)
                    - b / 6.0
                        * cos_2sigma_m
                        * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                        * (-3.0 + 4.0 * cos2_2sigma_m)))
}

/// Calculate the difference between the longitude on the auxiliary sphere, λ,
/// and the longitude on the ellipsoid, L.
/// Vincenty, Eq. 11.
/// * `f` - the flattening ratio.
/// * `c` - the longitude correction factor `C`.
/// * `sin_alpha` - the sine of the azimuth of the geodesic at the Equator.
/// * `sigma` - the arc length on the auxiliary sphere in radians.
/// * `sin_sigma`, `cos_sigma` - the sine and cosine of the arc length.
/// * `cos_2sigma_m` - cos(2σm).
#[must_use]
pub fn calculate_longitude_difference(
    f: f64,
    c: f64,
    sin_alpha: f64,
    sigma: f64,
    sin_sigma: f64,
    cos_sigma: f64,
    cos_2sigma_m: f64,
) -> f64 {
    (1.0 - c)
        * f
        * sin_alpha
        * (sigma
            + c * sin_sigma
                * (cos_2sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;

    const WGS84_F: f64 = 1.0 / 298.257_223_563;
    const WGS84_EP_2: f64 = 0.006_739_496_742_276_434;

    #[test]
    fn test_evaluate_a_and_b() {
        // A meridian has cos²α = 1
        let u_2 = WGS84_EP_2;
        let a = evaluate_a(u_2);
        let b = evaluate_b(u_2);
        assert!(1.0 < a);
        assert!(is_within_tolerance(1.0 + u_2 / 4.0, a, 1e-5));
        assert!(is_within_tolerance(u_2 / 4.0, b, 1e-5));

        // the Equator has cos²α = 0
        assert_eq!(1.0, evaluate_a(0.0));
        assert_eq!(0.0, evaluate_b(0.0));
    }

    #[test]
    fn test_evaluate_c() {
        assert_eq!(0.0, evaluate_c(WGS84_F, 0.0));
        assert_eq!(0.0, evaluate_c(0.0, 1.0));

        let c = evaluate_c(WGS84_F, 0.5);
        assert!(is_within_tolerance(0.000_419_979_562_730_438_5, c, 1e-15));
    }

    #[test]
    fn test_calculate_cos_2sigma_m() {
        // an equatorial line
        assert_eq!(0.0, calculate_cos_2sigma_m(0.5, 0.0, 0.0));
        assert_eq!(0.0, calculate_cos_2sigma_m(0.5, 0.0, f64::EPSILON / 2.0));

        assert_eq!(0.25, calculate_cos_2sigma_m(0.75, 0.25, 1.0));
        assert_eq!(-0.25, calculate_cos_2sigma_m(0.75, 0.25, 0.5));
    }

    #[test]
    fn test_calculate_delta_sigma() {
        // zero on a sphere
        assert_eq!(0.0, calculate_delta_sigma(0.0, 0.5, 0.5, 0.5));

        // zero at the start of a geodesic
        assert_eq!(0.0, calculate_delta_sigma(evaluate_b(WGS84_EP_2), 0.0, 1.0, 0.5));

        // dominated by the first term when B is small
        let b = evaluate_b(WGS84_EP_2);
        let result = calculate_delta_sigma(b, 1.0, 0.0, 1.0);
        assert!(is_within_tolerance(b, result, 1e-5));
    }

    #[test]
    fn test_calculate_longitude_difference() {
        // zero on a sphere
        assert_eq!(
            0.0,
            calculate_longitude_difference(0.0, 0.0, 1.0, 1.0, 0.5, 0.5, 0.5)
        );

        // zero along a meridian
        let c = evaluate_c(WGS84_F, 1.0);
        assert_eq!(
            0.0,
            calculate_longitude_difference(WGS84_F, c, 0.0, 1.0, 0.5, 0.5, 0.5)
        );

        // along the Equator: f * sigma
        let result = calculate_longitude_difference(WGS84_F, 0.0, 1.0, 1.0, 0.5, 0.5, 0.0);
        assert_eq!(WGS84_F, result);
    }
}
