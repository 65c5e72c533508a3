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

// extern crate we're testing, same as any other code would do.
extern crate boule;

use angle_sc::{is_within_tolerance, Degrees};
use boule::ellipsoid::{calculate_sq_eccentricity, wgs84};
use boule::{
    Ellipsoid, Error, LatLong, Metres, Sphere, TriaxialEllipsoid, Validate, GRS80_ELLIPSOID,
    MARS_ELLIPSOID, MERCURY_SPHERE, MOON_SPHERE, VENUS_SPHERE, VESTA_ELLIPSOID, WGS84_ELLIPSOID,
};

#[test]
fn test_sq_eccentricity_is_in_range() {
    for i in 0..1000 {
        let f = f64::from(i) / 1000.0;
        let e_2 = calculate_sq_eccentricity(f);
        assert!((0.0..1.0).contains(&e_2), "f: {f} e_2: {e_2}");

        let ellipsoid = Ellipsoid::new("TEST", Metres(1.0), f).unwrap();
        assert_eq!(f * (2.0 - f), ellipsoid.e_2());
        assert!(ellipsoid.is_valid());
    }
}

#[test]
fn test_invalid_parameters() {
    assert_eq!(
        Err(Error::SemimajorAxis(0.0)),
        Ellipsoid::new("BAD", Metres(0.0), 0.1)
    );
    assert_eq!(
        Err(Error::SemimajorAxis(-6_378_137.0)),
        Ellipsoid::new("BAD", Metres(-6_378_137.0), 0.1)
    );
    assert_eq!(
        Err(Error::Flattening(1.0)),
        Ellipsoid::new("BAD", Metres(6_378_137.0), 1.0)
    );
    assert_eq!(
        Err(Error::Flattening(1.5)),
        Ellipsoid::new("BAD", Metres(6_378_137.0), 1.5)
    );
    assert_eq!(
        Err(Error::Flattening(-0.1)),
        Ellipsoid::new("BAD", Metres(6_378_137.0), -0.1)
    );
    assert!(Ellipsoid::new("BAD", Metres(f64::NAN), 0.1).is_err());
    assert!(Ellipsoid::new("BAD", Metres(1.0), f64::NAN).is_err());

    assert_eq!(
        Err(Error::Latitude(-90.1)),
        WGS84_ELLIPSOID.prime_vertical_radius(Degrees(-90.1))
    );
    assert!(WGS84_ELLIPSOID
        .normal_gravity(Degrees(f64::NAN), Metres(0.0))
        .is_err());
    assert_eq!(
        Err(Error::NonFinite {
            name: "height",
            value: f64::INFINITY
        }),
        WGS84_ELLIPSOID.normal_gravity(Degrees(0.0), Metres(f64::INFINITY))
    );
}

#[test]
fn test_prime_vertical_radius_at_the_equator() {
    let n = WGS84_ELLIPSOID.prime_vertical_radius(Degrees(0.0)).unwrap();
    assert_eq!(Metres(6_378_137.0), n);
    let e_2 = WGS84_ELLIPSOID.e_2();
    assert_eq!(WGS84_ELLIPSOID.a().0 / (1.0 - e_2 * 0.0).sqrt(), n.0);
}

#[test]
fn test_poles_are_finite() {
    for pole in [Degrees(90.0), Degrees(-90.0)] {
        let n = WGS84_ELLIPSOID.prime_vertical_radius(pole).unwrap();
        let m = WGS84_ELLIPSOID.meridional_radius(pole).unwrap();
        assert!(n.0.is_finite() && m.0.is_finite());
        assert!(is_within_tolerance(n.0, m.0, 1e-6));

        let gamma = WGS84_ELLIPSOID.normal_gravity(pole, Metres(0.0)).unwrap();
        assert!(is_within_tolerance(
            WGS84_ELLIPSOID.gravity_pole().unwrap(),
            gamma,
            1e-10
        ));
        let r = WGS84_ELLIPSOID.geocentric_radius(pole).unwrap();
        assert!(is_within_tolerance(WGS84_ELLIPSOID.b().0, r.0, 1e-6));
    }
}

#[test]
fn test_geodetic_geocentric_latitude_round_trip() {
    for ellipsoid in [&*WGS84_ELLIPSOID, &*MARS_ELLIPSOID] {
        for i in -180..181 {
            let latitude = 0.5 * f64::from(i);
            let psi = ellipsoid.geocentric_latitude(Degrees(latitude)).unwrap();
            let result = ellipsoid.geodetic_latitude(psi).unwrap();
            assert!(is_within_tolerance(latitude, result.0, 1e-12));
        }
    }
}

#[test]
fn test_geodetic_spherical_round_trip() {
    for i in -36..37 {
        let latitude = 2.5 * f64::from(i);
        let position = LatLong::new(Degrees(latitude), Degrees(-42.0));
        for height in [0.0, 10.0, 8848.0, 35_786_000.0] {
            let (spherical, radius) = WGS84_ELLIPSOID
                .geodetic_to_spherical(&position, Metres(height))
                .unwrap();
            assert_eq!(-42.0, spherical.lon().0);

            let (geodetic, result_height) = WGS84_ELLIPSOID
                .spherical_to_geodetic(&spherical, radius)
                .unwrap();
            assert_eq!(-42.0, geodetic.lon().0);
            assert!(is_within_tolerance(latitude, geodetic.lat().0, 1e-10));
            assert!(is_within_tolerance(height, result_height.0, 1e-6));
        }
    }

    let position = LatLong::new(Degrees(0.0), Degrees(0.0));
    assert_eq!(
        Err(Error::Radius(0.0)),
        WGS84_ELLIPSOID.spherical_to_geodetic(&position, Metres(0.0))
    );
}

#[test]
fn test_spherical_to_geodetic_near_the_centre() {
    for latitude in [0.0, 45.0, 90.0] {
        for radius in [1.0, 1000.0, 20_000.0] {
            let position = LatLong::new(Degrees(latitude), Degrees(10.0));
            let (geodetic, height) = WGS84_ELLIPSOID
                .spherical_to_geodetic(&position, Metres(radius))
                .unwrap();
            assert!(geodetic.lat().0.is_finite());
            assert!(height.0.is_finite());
            assert!(height.0 < 0.0);

            let (_, result_radius) = WGS84_ELLIPSOID
                .geodetic_to_spherical(&geodetic, height)
                .unwrap();
            assert!(is_within_tolerance(radius, result_radius.0, 1e-6));
        }
    }

    let position = LatLong::new(Degrees(90.0), Degrees(0.0));
    let (geodetic, height) = WGS84_ELLIPSOID
        .spherical_to_geodetic(&position, Metres(1000.0))
        .unwrap();
    assert_eq!(90.0, geodetic.lat().0);
    assert!(is_within_tolerance(
        1000.0 - WGS84_ELLIPSOID.b().0,
        height.0,
        1e-6
    ));
}

#[test]
fn test_wgs84_derived_quantities() {
    assert_eq!("WGS84", WGS84_ELLIPSOID.name());
    assert_eq!(
        Some("World Geodetic System 1984"),
        WGS84_ELLIPSOID.long_name()
    );
    assert_eq!(
        Metres(6_356_752.314_245_179),
        WGS84_ELLIPSOID.b()
    );
    assert!(is_within_tolerance(
        298.257_223_563,
        WGS84_ELLIPSOID.inverse_flattening(),
        1e-9
    ));
    assert!(is_within_tolerance(
        0.081_819_190_842_622,
        WGS84_ELLIPSOID.eccentricity(),
        1e-12
    ));
    assert!(is_within_tolerance(
        6_371_008.771_415_059,
        WGS84_ELLIPSOID.mean_radius().0,
        1e-6
    ));
    assert!(is_within_tolerance(
        6_371_000.790_009_154,
        WGS84_ELLIPSOID.volume_equivalent_radius().0,
        1e-6
    ));
    assert!(is_within_tolerance(
        6_371_007.180_918_474,
        WGS84_ELLIPSOID.area_equivalent_radius().0,
        1e-6
    ));
    // The Earth's mass and mean density
    assert!(is_within_tolerance(
        5.972e24,
        WGS84_ELLIPSOID.mass().unwrap(),
        1.0e21
    ));
    let density = WGS84_ELLIPSOID.mean_density().unwrap();
    assert!(5500.0 < density && density < 5520.0);
}

#[test]
fn test_wgs84_normal_gravity() {
    assert!(is_within_tolerance(
        9.780_325_335_9,
        WGS84_ELLIPSOID.gravity_equator().unwrap(),
        1e-9
    ));
    assert!(is_within_tolerance(
        9.832_184_937_8,
        WGS84_ELLIPSOID.gravity_pole().unwrap(),
        1e-9
    ));

    // Normal gravity increases towards the poles and decreases with height
    let mut previous = 0.0;
    for i in 0..91 {
        let lat = Degrees(f64::from(i));
        let gamma = WGS84_ELLIPSOID.normal_gravity(lat, Metres(0.0)).unwrap();
        assert!(previous < gamma);
        previous = gamma;

        let high = WGS84_ELLIPSOID.normal_gravity(lat, Metres(1000.0)).unwrap();
        assert!(high < gamma);

        // Symmetric about the equator
        let south = WGS84_ELLIPSOID
            .normal_gravity(Degrees(-f64::from(i)), Metres(0.0))
            .unwrap();
        assert!(is_within_tolerance(gamma, south, 1e-12));
    }

    // The free air gradient is about 0.3086 mGal/m
    let gamma = WGS84_ELLIPSOID.normal_gravity(Degrees(0.0), Metres(0.0)).unwrap();
    let high = WGS84_ELLIPSOID.normal_gravity(Degrees(0.0), Metres(1000.0)).unwrap();
    assert!(is_within_tolerance(0.3086, (gamma - high) * 1.0e5 / 1000.0, 1e-3));

    // Negative heights are evaluated
    let low = WGS84_ELLIPSOID.normal_gravity(Degrees(0.0), Metres(-100.0)).unwrap();
    assert!(gamma < low);
}

#[test]
fn test_wgs84_normal_gravity_potential() {
    let u0 = WGS84_ELLIPSOID.reference_normal_gravity_potential().unwrap();
    assert!(is_within_tolerance(62_636_851.714_6, u0, 1e-3));

    for i in -9..10 {
        let lat = Degrees(10.0 * f64::from(i));
        let u = WGS84_ELLIPSOID
            .normal_gravity_potential(lat, Metres(0.0))
            .unwrap();
        assert!(is_within_tolerance(u0, u, 1e-3));

        // The potential decreases with height at about the rate of gravity
        let high = WGS84_ELLIPSOID
            .normal_gravity_potential(lat, Metres(10.0))
            .unwrap();
        let gamma = WGS84_ELLIPSOID.normal_gravity(lat, Metres(5.0)).unwrap();
        assert!(is_within_tolerance(gamma, (u - high) / 10.0, 1e-4));
    }
}

#[test]
fn test_grs80() {
    assert_eq!("GRS80", GRS80_ELLIPSOID.name());
    assert!(is_within_tolerance(
        62_636_860.850,
        GRS80_ELLIPSOID.reference_normal_gravity_potential().unwrap(),
        0.01
    ));
    assert!(is_within_tolerance(
        9.780_326_771_5,
        GRS80_ELLIPSOID.gravity_equator().unwrap(),
        1e-8
    ));
    assert!(is_within_tolerance(
        9.832_186_368_5,
        GRS80_ELLIPSOID.gravity_pole().unwrap(),
        1e-8
    ));
}

#[test]
fn test_ellipsoid_without_gravity_parameters() {
    let ellipsoid = Ellipsoid::new("GEOMETRY", wgs84::A, wgs84::F).unwrap();
    assert_eq!(None, ellipsoid.gravity_parameters());
    assert_eq!(
        Err(Error::NoGravityParameters("GEOMETRY")),
        ellipsoid.normal_gravity(Degrees(0.0), Metres(0.0))
    );
    assert!(ellipsoid.mass().is_err());
    assert!(ellipsoid.gravity_equator().is_err());

    // The geometry does not need gravity parameters
    assert_eq!(
        WGS84_ELLIPSOID.prime_vertical_radius(Degrees(30.0)),
        ellipsoid.prime_vertical_radius(Degrees(30.0))
    );

    let ellipsoid = ellipsoid
        .with_gravity(wgs84::GM, wgs84::OMEGA)
        .unwrap()
        .with_long_name(wgs84::LONG_NAME)
        .with_reference(wgs84::REFERENCE);
    assert_eq!(
        WGS84_ELLIPSOID.normal_gravity(Degrees(30.0), Metres(100.0)),
        ellipsoid.normal_gravity(Degrees(30.0), Metres(100.0))
    );
    assert!(ellipsoid.with_gravity(f64::NAN, 0.0).is_err());
}

#[test]
fn test_realizations() {
    assert!(MARS_ELLIPSOID.is_valid());
    assert_eq!(
        Metres(3_377_678.0).0,
        (MARS_ELLIPSOID.b().0).round()
    );
    let mars_gamma = MARS_ELLIPSOID.normal_gravity(Degrees(0.0), Metres(0.0)).unwrap();
    assert!(3.6 < mars_gamma && mars_gamma < 3.8);

    for sphere in [&MOON_SPHERE, &VENUS_SPHERE, &MERCURY_SPHERE] {
        assert!(sphere.is_valid());
        assert!(sphere.long_name().is_some());
        assert!(sphere.reference().is_some());
        let gamma = sphere.normal_gravity(Degrees(45.0), Metres(0.0)).unwrap();
        assert!(1.0 < gamma && gamma < 9.0);
    }

    assert!(VESTA_ELLIPSOID.is_valid());
    assert!(VESTA_ELLIPSOID.reference().is_some());

    // The sphere and triaxial realizations are built at compile time
    const MOON: Sphere = Sphere::moon();
    const VESTA: TriaxialEllipsoid = TriaxialEllipsoid::vesta();
    assert_eq!(MOON, MOON_SPHERE);
    assert_eq!(VESTA, VESTA_ELLIPSOID);
}

#[test]
fn test_prime_vertical_radius_array() {
    let lats = [Degrees(0.0), Degrees(45.0), Degrees(90.0)];
    let radii = WGS84_ELLIPSOID.prime_vertical_radius_array(&lats).unwrap();
    assert_eq!(3, radii.len());
    for (lat, radius) in lats.iter().zip(&radii) {
        assert_eq!(
            WGS84_ELLIPSOID.prime_vertical_radius(*lat).unwrap(),
            *radius
        );
    }

    assert_eq!(
        Err(Error::Latitude(100.0)),
        WGS84_ELLIPSOID.prime_vertical_radius_array(&[Degrees(0.0), Degrees(100.0)])
    );
}
