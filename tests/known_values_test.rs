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

extern crate vincenty_geodesy;

use angle_sc::is_within_tolerance;
use csv::ReaderBuilder;
use std::path::Path;
use vincenty_geodesy::{GeodeticCalculator, GlobalCoordinates, Metres, Validate, WGS84};

/// A WGS 84 geodesic from tests/data/vincenty_examples.csv
struct Example {
    start: GlobalCoordinates,
    end: GlobalCoordinates,
    distance: Metres,
    azimuth: f64,
    reverse_azimuth: f64,
}

fn read_examples() -> Vec<Example> {
    let file_path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/vincenty_examples.csv");
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(file_path)
        .expect("Could not read file: vincenty_examples.csv");

    csv_reader
        .records()
        .map(|result| {
            let record = result.unwrap();
            let value = |i: usize| record[i].parse::<f64>().unwrap();
            Example {
                start: GlobalCoordinates::from_degrees(value(0), value(1)),
                end: GlobalCoordinates::from_degrees(value(2), value(3)),
                distance: Metres(value(4)),
                azimuth: value(5),
                reverse_azimuth: value(6),
            }
        })
        .collect()
}

/// The difference between two angles in degrees, in the range [-180, 180).
fn angle_difference(a: f64, b: f64) -> f64 {
    (a - b + 540.0).rem_euclid(360.0) - 180.0
}

#[test]
fn test_inverse_known_values() {
    let calculator = GeodeticCalculator::default();
    let examples = read_examples();
    assert!(!examples.is_empty());

    for (line_number, example) in examples.iter().enumerate() {
        let curve = calculator.calculate_geodetic_curve(&WGS84, &example.start, &example.end);
        assert!(curve.is_valid(), "line: {line_number} {curve}");

        assert!(
            is_within_tolerance(
                example.distance.0,
                curve.ellipsoidal_distance().0,
                1e-6
            ),
            "distance, line: {line_number} {curve}"
        );
        assert!(
            libm::fabs(angle_difference(example.azimuth, curve.azimuth().degrees())) < 1e-9,
            "azimuth, line: {line_number} {curve}"
        );
        assert!(
            libm::fabs(angle_difference(
                example.reverse_azimuth,
                curve.reverse_azimuth().degrees()
            )) < 1e-9,
            "reverse azimuth, line: {line_number} {curve}"
        );
    }
}

#[test]
fn test_inverse_symmetry() {
    let calculator = GeodeticCalculator::default();

    for (line_number, example) in read_examples().iter().enumerate() {
        let a_b = calculator.calculate_geodetic_curve(&WGS84, &example.start, &example.end);
        let b_a = calculator.calculate_geodetic_curve(&WGS84, &example.end, &example.start);

        assert!(
            is_within_tolerance(
                a_b.ellipsoidal_distance().0,
                b_a.ellipsoidal_distance().0,
                1e-6
            ),
            "distance, line: {line_number}"
        );

        assert!(
            libm::fabs(angle_difference(
                a_b.azimuth().degrees(),
                b_a.reverse_azimuth().degrees()
            )) < 1e-9,
            "azimuth, line: {line_number}"
        );
        assert!(
            libm::fabs(angle_difference(
                a_b.reverse_azimuth().degrees(),
                b_a.azimuth().degrees()
            )) < 1e-9,
            "reverse azimuth, line: {line_number}"
        );
    }
}

#[test]
fn test_direct_round_trip() {
    let calculator = GeodeticCalculator::default();

    for (line_number, example) in read_examples().iter().enumerate() {
        let curve = calculator.calculate_geodetic_curve(&WGS84, &example.start, &example.end);
        let (end, end_azimuth) = calculator.calculate_ending_global_coordinates(
            &WGS84,
            &example.start,
            curve.azimuth(),
            curve.ellipsoidal_distance(),
        );
        assert!(end.is_valid());

        assert!(
            is_within_tolerance(
                example.end.latitude().degrees(),
                end.latitude().degrees(),
                1e-7
            ),
            "latitude, line: {line_number} {end}"
        );
        assert!(
            libm::fabs(angle_difference(
                example.end.longitude().degrees(),
                end.longitude().degrees()
            )) < 1e-7,
            "longitude, line: {line_number} {end}"
        );
        assert!(
            libm::fabs(angle_difference(
                curve.reverse_azimuth().degrees() + 180.0,
                end_azimuth.degrees()
            )) < 1e-7,
            "end azimuth, line: {line_number} {end_azimuth}"
        );
    }
}
