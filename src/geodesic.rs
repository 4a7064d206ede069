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

//! The geodesic module contains functions for calculating the geodesic path
//! between two points on the surface of an ellipsoid using T Vincenty's
//! direct and inverse solutions.
//!
//! The inverse solution may not converge for nearly antipodal points.
//! In that case the start azimuth is found by bisection on the longitude
//! difference, see Karney's "Algorithms for geodesics" section 4.
//! Points that are exactly 180° apart in longitude, or at a pole, take the
//! meridional route through the nearer pole.

#![allow(clippy::float_cmp)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::suboptimal_flops)]

use crate::ellipsoid::coefficients::{
    calculate_cos_2sigma_m, calculate_delta_sigma, calculate_longitude_difference, evaluate_a,
    evaluate_b, evaluate_c,
};
use crate::{
    Angle, Ellipsoid, GeodeticCurve, GeodeticMeasurement, GlobalCoordinates, GlobalPosition,
    Metres,
};
use angle_sc::Radians;
use core::f64::consts::{PI, TAU};

/// The maximum number of iterations of the iterative solutions.
pub const MAX_ITERATIONS: u32 = 200;

/// The convergence tolerance of the iterative solutions, in Radians.
pub const TOLERANCE: Radians = Radians(1.0e-12);

/// Normalise an azimuth in radians into the range [0, 2π).
/// * `azimuth` - the azimuth in radians.
/// # Examples
/// ```
/// use vincenty_geodesy::geodesic::normalise_azimuth;
///
/// assert_eq!(270.0, normalise_azimuth(-core::f64::consts::FRAC_PI_2).degrees());
/// assert_eq!(0.0, normalise_azimuth(2.0 * core::f64::consts::PI).degrees());
/// ```
#[must_use]
pub fn normalise_azimuth(azimuth: f64) -> Angle {
    let value = libm::fmod(azimuth, TAU);
    let value = if value < 0.0 { value + TAU } else { value };
    Angle::from_radians(if TAU <= value { 0.0 } else { value })
}

/// Calculate the sine and cosine of the parametric (reduced) latitude.
fn calculate_sin_cos_beta(latitude: Angle, ellipsoid: &Ellipsoid) -> (f64, f64) {
    let beta =
        ellipsoid.calculate_parametric_latitude(angle_sc::Angle::from(Radians::from(latitude)));
    (beta.sin().0, beta.cos().0)
}

/// Calculate the length of a geodesic from its arc length on the
/// auxiliary sphere.
/// * `cos2_alpha` - cos²α, where α is the azimuth of the geodesic at the Equator.
/// * `sigma` - the arc length on the auxiliary sphere in radians.
/// * `sin_sigma`, `cos_sigma` - the sine and cosine of `sigma`.
/// * `cos_2sigma_m` - cos(2σm).
/// * `ellipsoid` - the `Ellipsoid`.
fn calculate_geodesic_length(
    cos2_alpha: f64,
    sigma: f64,
    sin_sigma: f64,
    cos_sigma: f64,
    cos_2sigma_m: f64,
    ellipsoid: &Ellipsoid,
) -> Metres {
    let u_2 = cos2_alpha * ellipsoid.ep_2();
    let a = evaluate_a(u_2);
    let b = evaluate_b(u_2);
    let delta_sigma = calculate_delta_sigma(b, sin_sigma, cos_sigma, cos_2sigma_m);
    Metres(ellipsoid.b().0 * a * (sigma - delta_sigma))
}

/// Calculate the meridional geodesic through the nearer pole between
/// two parametric latitudes.
/// It is the geodesic between coordinates 180° apart in longitude or from a
/// pole.
fn calculate_meridional_curve(
    sin_beta1: f64,
    cos_beta1: f64,
    sin_beta2: f64,
    cos_beta2: f64,
    ellipsoid: &Ellipsoid,
) -> GeodeticCurve {
    let beta1 = libm::atan2(sin_beta1, cos_beta1);
    let beta2 = libm::atan2(sin_beta2, cos_beta2);

    let via_north = PI - beta1 - beta2;
    let via_south = PI + beta1 + beta2;
    let (sigma, azimuth) = if via_north <= via_south {
        (via_north, Angle::ZERO)
    } else {
        (via_south, Angle::HALF_TURN)
    };

    let sin_sigma = libm::sin(sigma);
    let cos_sigma = libm::cos(sigma);
    let cos_2sigma_m = calculate_cos_2sigma_m(cos_sigma, sin_beta1 * sin_beta2, 1.0);
    let distance =
        calculate_geodesic_length(1.0, sigma, sin_sigma, cos_sigma, cos_2sigma_m, ellipsoid);
    GeodeticCurve::new(distance, azimuth, azimuth)
}

/// Calculate the azimuth on the auxiliary sphere at parametric latitude
/// beta2 of a geodesic with azimuth alpha1 at parametric latitude beta1.
/// The geodesic is heading North at beta2.
///
/// returns the sine and cosine of the end azimuth.
#[allow(clippy::similar_names)]
fn calculate_end_azimuth(
    (sin_beta1, cos_beta1): (f64, f64),
    (sin_beta2, cos_beta2): (f64, f64),
    sin_alpha1: f64,
    cos_alpha1: f64,
) -> (f64, f64) {
    let sin_alpha2 = if cos_beta2 == cos_beta1 {
        sin_alpha1
    } else {
        (sin_alpha1 * cos_beta1 / cos_beta2).clamp(-1.0, 1.0)
    };

    // Karney's method to calculate the cosine of the end azimuth
    let cos_alpha2 = if (cos_beta2 != cos_beta1) || (libm::fabs(sin_beta2) != -sin_beta1) {
        let temp1 = cos_alpha1 * cos_beta1;
        let temp2 = if cos_beta1 < libm::fabs(sin_beta1) {
            (cos_beta2 - cos_beta1) * (cos_beta1 + cos_beta2)
        } else {
            (sin_beta1 - sin_beta2) * (sin_beta1 + sin_beta2)
        };
        let temp3 = temp1 * temp1 + temp2;
        if 0.0 < temp3 {
            (libm::sqrt(temp3) / cos_beta2).clamp(-1.0, 1.0)
        } else {
            0.0
        }
    } else {
        libm::fabs(cos_alpha1)
    };

    (sin_alpha2, cos_alpha2)
}

/// A geodesic on the auxiliary sphere between two parametric latitudes.
struct AuxiliaryArc {
    /// The longitude difference on the ellipsoid.
    lambda12: f64,
    /// The arc length, in the range [0, π].
    sigma12: f64,
    sin_sigma12: f64,
    cos_sigma12: f64,
    cos_2sigma_m: f64,
    /// cos²α, where α is the azimuth of the geodesic at the Equator.
    cos2_alpha: f64,
    sin_alpha2: f64,
    cos_alpha2: f64,
}

/// Calculate the geodesic from parametric latitude beta1 with azimuth
/// alpha1 to where it next crosses parametric latitude beta2 heading North.
#[allow(clippy::similar_names)]
fn calculate_auxiliary_arc(
    alpha1: f64,
    beta1: (f64, f64),
    beta2: (f64, f64),
    ellipsoid: &Ellipsoid,
) -> AuxiliaryArc {
    let (sin_beta1, cos_beta1) = beta1;
    let (sin_beta2, cos_beta2) = beta2;
    let sin_alpha1 = libm::sin(alpha1);
    let cos_alpha1 = libm::cos(alpha1);

    // Clairaut's constant
    let sin_alpha = sin_alpha1 * cos_beta1;
    let cos2_alpha = 1.0 - sin_alpha * sin_alpha;
    let (sin_alpha2, cos_alpha2) =
        calculate_end_azimuth(beta1, beta2, sin_alpha1, cos_alpha1);

    // arc lengths and longitudes from the Northbound Equator crossing
    let cos_sigma1 = cos_alpha1 * cos_beta1;
    let cos_sigma2 = cos_alpha2 * cos_beta2;
    let sin_omega1 = sin_alpha * sin_beta1;
    let sin_omega2 = sin_alpha * sin_beta2;

    // clamp to the range [0, π]
    let sigma12 = libm::atan2(
        (cos_sigma1 * sin_beta2 - sin_beta1 * cos_sigma2).max(0.0),
        cos_sigma1 * cos_sigma2 + sin_beta1 * sin_beta2,
    );
    let omega12 = libm::atan2(
        (cos_sigma1 * sin_omega2 - sin_omega1 * cos_sigma2).max(0.0),
        cos_sigma1 * cos_sigma2 + sin_omega1 * sin_omega2,
    );

    // cos(σ1 + σ2)
    let norm = libm::hypot(sin_beta1, cos_sigma1) * libm::hypot(sin_beta2, cos_sigma2);
    let cos_2sigma_m = if 0.0 < norm {
        (cos_sigma1 * cos_sigma2 - sin_beta1 * sin_beta2) / norm
    } else {
        0.0
    };

    let sin_sigma12 = libm::sin(sigma12);
    let cos_sigma12 = libm::cos(sigma12);
    let f = ellipsoid.f();
    let c = evaluate_c(f, cos2_alpha);
    let lambda12 = omega12
        - calculate_longitude_difference(
            f,
            c,
            sin_alpha,
            sigma12,
            sin_sigma12,
            cos_sigma12,
            cos_2sigma_m,
        );

    AuxiliaryArc {
        lambda12,
        sigma12,
        sin_sigma12,
        cos_sigma12,
        cos_2sigma_m,
        cos2_alpha,
        sin_alpha2,
        cos_alpha2,
    }
}

/// Calculate a nearly antipodal geodesic, where Vincenty's iteration on the
/// longitude may not converge.
///
/// The points are arranged so that the start is the furthest from the
/// Equator and South of it, and the end is East of the start. Then the
/// longitude difference of the geodesic increases monotonically with the
/// start azimuth from 0 to π, so the start azimuth is found by bisection.
/// * `beta1`, `beta2` - the sines and cosines of the parametric latitudes.
/// * `delta_lon` - the longitude difference, in the range (-π, π).
/// * `ellipsoid` - the `Ellipsoid`.
#[allow(clippy::similar_names)]
fn calculate_antipodal_curve(
    beta1: (f64, f64),
    beta2: (f64, f64),
    delta_lon: f64,
    ellipsoid: &Ellipsoid,
) -> GeodeticCurve {
    // Enough to halve [0, π] down to the precision of an f64
    const MAX_BISECTIONS: u32 = 100;

    let lambda12 = libm::fabs(delta_lon);

    // Start at the latitude furthest from the Equator, or the Southern one
    let swap = libm::fabs(beta1.0) < libm::fabs(beta2.0)
        || (libm::fabs(beta1.0) == libm::fabs(beta2.0) && beta2.0 < beta1.0);
    let (mut beta1, mut beta2) = if swap { (beta2, beta1) } else { (beta1, beta2) };
    let swap_sign = if swap { -1.0 } else { 1.0 };
    let lon_sign = if delta_lon < 0.0 { -swap_sign } else { swap_sign };

    // Start South of the Equator
    let lat_sign = if 0.0 < beta1.0 { -1.0 } else { 1.0 };
    beta1.0 *= lat_sign;
    beta2.0 *= lat_sign;

    let mut lower = 0.0;
    let mut upper = PI;
    for _ in 0..MAX_BISECTIONS {
        let alpha1 = lower + 0.5 * (upper - lower);
        if alpha1 <= lower || upper <= alpha1 {
            break;
        }
        if calculate_auxiliary_arc(alpha1, beta1, beta2, ellipsoid).lambda12 < lambda12 {
            lower = alpha1;
        } else {
            upper = alpha1;
        }
    }

    let alpha1 = lower + 0.5 * (upper - lower);
    let arc = calculate_auxiliary_arc(alpha1, beta1, beta2, ellipsoid);
    let distance = calculate_geodesic_length(
        arc.cos2_alpha,
        arc.sigma12,
        arc.sin_sigma12,
        arc.cos_sigma12,
        arc.cos_2sigma_m,
        ellipsoid,
    );

    let (sin_alpha1, cos_alpha1) = (libm::sin(alpha1), libm::cos(alpha1));
    let (sin_alpha1, cos_alpha1, sin_alpha2, cos_alpha2) = if swap {
        (arc.sin_alpha2, arc.cos_alpha2, sin_alpha1, cos_alpha1)
    } else {
        (sin_alpha1, cos_alpha1, arc.sin_alpha2, arc.cos_alpha2)
    };
    let sin_sign = swap_sign * lon_sign;
    let cos_sign = swap_sign * lat_sign;

    let azimuth = normalise_azimuth(libm::atan2(sin_sign * sin_alpha1, cos_sign * cos_alpha1));
    let reverse_azimuth =
        normalise_azimuth(libm::atan2(sin_sign * sin_alpha2, cos_sign * cos_alpha2) + PI);
    GeodeticCurve::new(distance, azimuth, reverse_azimuth)
}

/// Calculate the geodesic between two coordinates on an ellipsoid,
/// Vincenty's inverse solution.
/// * `start`, `end` - the start and end coordinates.
/// * `tolerance` - the convergence tolerance of the longitude on the
///   auxiliary sphere.
/// * `max_iterations` - the maximum number of iterations.
/// * `ellipsoid` - the `Ellipsoid`.
///
/// returns the length of the geodesic and its azimuths at the start and at
/// the end looking back towards the start, both in the range [0°, 360°).
/// Coincident coordinates return a zero length, with azimuths of 0° and 180°.
/// NaN coordinates return `GeodeticCurve::NAN`.
///
/// If the solution has not converged after `max_iterations`, the start
/// azimuth is found by bisection instead. Coordinates 180° apart in
/// longitude, or at a pole, take the meridional route through the nearer
/// pole.
/// # Examples
/// ```
/// use vincenty_geodesy::*;
/// use vincenty_geodesy::geodesic::{calculate_geodetic_curve, MAX_ITERATIONS, TOLERANCE};
///
/// // nearly antipodal
/// let start = GlobalCoordinates::from_degrees(10.0, 80.6);
/// let end = GlobalCoordinates::from_degrees(-10.0, -100.0);
/// let curve = calculate_geodetic_curve(&start, &end, TOLERANCE, MAX_ITERATIONS, &WGS84);
///
/// assert!((19_970_718.422 - curve.ellipsoidal_distance().0).abs() < 1e-3);
/// assert!((90.000_487_75 - curve.azimuth().degrees()).abs() < 1e-8);
/// ```
#[must_use]
pub fn calculate_geodetic_curve(
    start: &GlobalCoordinates,
    end: &GlobalCoordinates,
    tolerance: Radians,
    max_iterations: u32,
    ellipsoid: &Ellipsoid,
) -> GeodeticCurve {
    if start.is_nan() || end.is_nan() {
        return GeodeticCurve::NAN;
    }

    let (sin_beta1, cos_beta1) = calculate_sin_cos_beta(start.latitude(), ellipsoid);
    let (sin_beta2, cos_beta2) = calculate_sin_cos_beta(end.latitude(), ellipsoid);
    let sin_beta1_sin_beta2 = sin_beta1 * sin_beta2;
    let cos_beta1_cos_beta2 = cos_beta1 * cos_beta2;
    let cos_beta1_sin_beta2 = cos_beta1 * sin_beta2;
    let sin_beta1_cos_beta2 = sin_beta1 * cos_beta2;

    let f = ellipsoid.f();
    let delta_lon = (end.longitude() - start.longitude()).radians();
    let mut lambda = delta_lon;
    for iteration in 1..=max_iterations {
        let sin_lambda = libm::sin(lambda);
        let cos_lambda = libm::cos(lambda);

        let y = cos_beta2 * sin_lambda;
        let x = cos_beta1_sin_beta2 - sin_beta1_cos_beta2 * cos_lambda;
        let sin_sigma = libm::sqrt(y * y + x * x);
        let cos_sigma = sin_beta1_sin_beta2 + cos_beta1_cos_beta2 * cos_lambda;
        if sin_sigma == 0.0 {
            if 0.0 < cos_sigma {
                return GeodeticCurve::new(Metres(0.0), Angle::ZERO, Angle::HALF_TURN);
            }
            // antipodal
            break;
        }

        let sigma = libm::atan2(sin_sigma, cos_sigma);
        let sin_alpha = cos_beta1_cos_beta2 * sin_lambda / sin_sigma;
        let cos2_alpha = 1.0 - sin_alpha * sin_alpha;
        let cos_2sigma_m = calculate_cos_2sigma_m(cos_sigma, sin_beta1_sin_beta2, cos2_alpha);
        let c = evaluate_c(f, cos2_alpha);

        let previous = lambda;
        lambda = delta_lon
            + calculate_longitude_difference(
                f,
                c,
                sin_alpha,
                sigma,
                sin_sigma,
                cos_sigma,
                cos_2sigma_m,
            );
        if libm::fabs(lambda - previous) < tolerance.0 {
            log::trace!("inverse solution converged after {iteration} iterations");

            let distance = calculate_geodesic_length(
                cos2_alpha,
                sigma,
                sin_sigma,
                cos_sigma,
                cos_2sigma_m,
                ellipsoid,
            );
            let azimuth = normalise_azimuth(libm::atan2(y, x));
            let reverse_azimuth = normalise_azimuth(
                libm::atan2(
                    cos_beta1 * sin_lambda,
                    cos_beta1_sin_beta2 * cos_lambda - sin_beta1_cos_beta2,
                ) + PI,
            );
            return GeodeticCurve::new(distance, azimuth, reverse_azimuth);
        }
    }

    // the longitude difference in the range (-π, π]
    let delta_lon = if PI < delta_lon {
        delta_lon - TAU
    } else if delta_lon <= -PI {
        delta_lon + TAU
    } else {
        delta_lon
    };
    if libm::fabs(delta_lon) == PI
        || cos_beta1 < f64::EPSILON
        || cos_beta2 < f64::EPSILON
    {
        log::warn!(
            "inverse solution did not converge from {start} to {end}, using the meridional route"
        );
        calculate_meridional_curve(sin_beta1, cos_beta1, sin_beta2, cos_beta2, ellipsoid)
    } else {
        log::debug!(
            "inverse solution did not converge from {start} to {end}, solving for the azimuth"
        );
        calculate_antipodal_curve(
            (sin_beta1, cos_beta1),
            (sin_beta2, cos_beta2),
            delta_lon,
            ellipsoid,
        )
    }
}

/// Calculate the coordinates reached by travelling along a geodesic on an
/// ellipsoid, Vincenty's direct solution.
/// * `start` - the start coordinates.
/// * `azimuth` - the azimuth of the geodesic at `start`.
/// * `distance` - the distance to travel along the geodesic.
/// * `tolerance` - the convergence tolerance of the arc length on the
///   auxiliary sphere.
/// * `max_iterations` - the maximum number of iterations.
/// * `ellipsoid` - the `Ellipsoid`.
///
/// returns the end coordinates and the azimuth of the geodesic there,
/// in the range [0°, 360°).
/// # Examples
/// ```
/// use vincenty_geodesy::*;
/// use vincenty_geodesy::geodesic::{calculate_ending_global_coordinates, MAX_ITERATIONS, TOLERANCE};
///
/// // over the North pole
/// let start = GlobalCoordinates::from_degrees(89.0, 10.0);
/// let (end, end_azimuth) = calculate_ending_global_coordinates(
///     &start, Angle::ZERO, Metres(300_000.0), TOLERANCE, MAX_ITERATIONS, &WGS84);
///
/// assert!((88.314_083_846 - end.latitude().degrees()).abs() < 1e-9);
/// assert!((-170.0 - end.longitude().degrees()).abs() < 1e-9);
/// assert!((180.0 - end_azimuth.degrees()).abs() < 1e-9);
/// ```
#[must_use]
pub fn calculate_ending_global_coordinates(
    start: &GlobalCoordinates,
    azimuth: Angle,
    distance: Metres,
    tolerance: Radians,
    max_iterations: u32,
    ellipsoid: &Ellipsoid,
) -> (GlobalCoordinates, Angle) {
    if start.is_nan() || azimuth.is_nan() || distance.0.is_nan() {
        return (GlobalCoordinates::new(Angle::NAN, Angle::NAN), Angle::NAN);
    }

    let (sin_beta1, cos_beta1) = calculate_sin_cos_beta(start.latitude(), ellipsoid);
    let sin_alpha1 = libm::sin(azimuth.radians());
    let cos_alpha1 = libm::cos(azimuth.radians());

    // the arc length from the Equator to the start
    let sigma1 = libm::atan2(sin_beta1, cos_beta1 * cos_alpha1);
    let sin_alpha = cos_beta1 * sin_alpha1;
    let cos2_alpha = 1.0 - sin_alpha * sin_alpha;
    let u_2 = cos2_alpha * ellipsoid.ep_2();
    let a = evaluate_a(u_2);
    let b = evaluate_b(u_2);

    let sigma0 = distance.0 / (ellipsoid.b().0 * a);
    let mut sigma = sigma0;
    for iteration in 1..=max_iterations {
        let cos_2sigma_m = libm::cos(2.0 * sigma1 + sigma);
        let delta_sigma =
            calculate_delta_sigma(b, libm::sin(sigma), libm::cos(sigma), cos_2sigma_m);

        let previous = sigma;
        sigma = sigma0 + delta_sigma;
        if libm::fabs(sigma - previous) < tolerance.0 {
            log::trace!("direct solution converged after {iteration} iterations");
            break;
        }
    }

    let sin_sigma = libm::sin(sigma);
    let cos_sigma = libm::cos(sigma);
    let cos_2sigma_m = libm::cos(2.0 * sigma1 + sigma);

    let x = sin_beta1 * sin_sigma - cos_beta1 * cos_sigma * cos_alpha1;
    let beta2 = angle_sc::Angle::from_y_x(
        sin_beta1 * cos_sigma + cos_beta1 * sin_sigma * cos_alpha1,
        libm::sqrt(sin_alpha * sin_alpha + x * x),
    );
    let latitude = Angle::from(Radians::from(
        ellipsoid.calculate_geodetic_latitude(beta2),
    ));

    let f = ellipsoid.f();
    let lambda = libm::atan2(
        sin_sigma * sin_alpha1,
        cos_beta1 * cos_sigma - sin_beta1 * sin_sigma * cos_alpha1,
    );
    let c = evaluate_c(f, cos2_alpha);
    let delta_lon = lambda
        - calculate_longitude_difference(
            f,
            c,
            sin_alpha,
            sigma,
            sin_sigma,
            cos_sigma,
            cos_2sigma_m,
        );

    (
        GlobalCoordinates::new(
            latitude,
            start.longitude() + Angle::from_radians(delta_lon),
        ),
        normalise_azimuth(libm::atan2(sin_alpha, -x)),
    )
}

/// Calculate the geodesic between two positions at elevations above an
/// ellipsoid.
///
/// The geodesic is calculated on an ellipsoid with the flattening of
/// `ellipsoid`, raised to the mean elevation of the positions at their mean
/// latitude, see `Ellipsoid::at_elevation`.
/// * `start`, `end` - the start and end positions.
/// * `tolerance` - the convergence tolerance.
/// * `max_iterations` - the maximum number of iterations.
/// * `ellipsoid` - the `Ellipsoid`.
///
/// returns the geodesic at the average elevation and the elevation change
/// from `start` to `end`.
#[must_use]
pub fn calculate_geodetic_measurement(
    start: &GlobalPosition,
    end: &GlobalPosition,
    tolerance: Radians,
    max_iterations: u32,
    ellipsoid: &Ellipsoid,
) -> GeodeticMeasurement {
    let mean_elevation = Metres(0.5 * (start.elevation().0 + end.elevation().0));
    let mean_latitude =
        Angle::from_radians(0.5 * (start.latitude().radians() + end.latitude().radians()));
    let average_ellipsoid = ellipsoid.at_elevation(mean_elevation, mean_latitude);

    let average_curve = calculate_geodetic_curve(
        start.coordinates(),
        end.coordinates(),
        tolerance,
        max_iterations,
        &average_ellipsoid,
    );
    GeodeticMeasurement::new(
        average_curve,
        Metres(end.elevation().0 - start.elevation().0),
    )
}
