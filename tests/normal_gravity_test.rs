// Copyright (c) 2026 Ken Barker

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

extern crate boule;

use angle_sc::{is_within_tolerance, Degrees};
use boule::{Metres, WGS84_ELLIPSOID};

const FILENAME: &str = "data/wgs84_normal_gravity.csv";

/// latitude in degrees, normal gravity on the ellipsoid in m/s²
type DataRecord = (f64, f64);

#[test]
fn test_wgs84_normal_gravity_reference_values() -> Result<(), Box<dyn std::error::Error>> {
    let mut rdr = csv::Reader::from_path(FILENAME)?;

    let mut count = 0;
    for result in rdr.deserialize::<DataRecord>() {
        let (latitude, expected) = result?;

        let gamma = WGS84_ELLIPSOID.normal_gravity(Degrees(latitude), Metres(0.0))?;
        assert!(
            is_within_tolerance(expected, gamma, 1.0e-9),
            "latitude: {latitude} expected: {expected} result: {gamma}"
        );

        let gamma_mgal = WGS84_ELLIPSOID.normal_gravity_mgal(Degrees(latitude), Metres(0.0))?;
        assert!(is_within_tolerance(expected * 1.0e5, gamma_mgal, 1.0e-4));

        count += 1;
    }
    assert_eq!(17, count);

    Ok(())
}

#[test]
fn test_wgs84_normal_gravity_array_matches_scalar() -> Result<(), Box<dyn std::error::Error>> {
    let mut rdr = csv::Reader::from_path(FILENAME)?;
    let lats = rdr
        .deserialize::<DataRecord>()
        .map(|record| record.map(|(latitude, _)| Degrees(latitude)))
        .collect::<Result<Vec<_>, _>>()?;

    let heights = [Metres(1000.0)];
    let gammas = WGS84_ELLIPSOID.normal_gravity_array(&lats, &heights)?;
    assert_eq!(lats.len(), gammas.len());
    for (lat, gamma) in lats.iter().zip(gammas) {
        assert_eq!(
            WGS84_ELLIPSOID.normal_gravity(*lat, Metres(1000.0))?,
            gamma
        );
    }

    Ok(())
}
