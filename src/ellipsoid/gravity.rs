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

//! This module contains functions for calculating the normal gravity and
//! normal gravity potential of a rotating ellipsoid of revolution.
//!
//! It uses the closed form equations in ellipsoidal-harmonic coordinates
//! given by B. Hofmann-Wellenhof and H. Moritz, *Physical Geodesy*,
//! 2nd edition (2006), section 2.7, and X. Li and H.-J. Götze,
//! [Ellipsoid, geoid, gravity, geodesy, and geophysics](https://doi.org/10.1190/1.1487109),
//! Geophysics 66(6), 1660-1668 (2001).

#![allow(clippy::suboptimal_flops)]
#![allow(clippy::many_single_char_names)]

use crate::ellipsoid::calculate_prime_vertical_radius;
use crate::Metres;
use angle_sc::Angle;

/// The Newtonian constant of gravitation, CODATA 2018, in m³/(kg s²).
pub const G: f64 = 6.674_30e-11;

/// The number of milligals in one m/s².
pub const MGAL_PER_SI: f64 = 1.0e5;

/// The function `q(u)` of the ellipsoidal-harmonic expansion.
/// H&M Eq. 2-113.
/// * `u` - the Semiminor axis of the confocal ellipsoid.
/// * `big_e` - the linear Eccentricity.
#[must_use]
pub fn calculate_q(u: f64, big_e: f64) -> f64 {
    let ratio = u / big_e;
    0.5 * ((1.0 + 3.0 * ratio * ratio) * libm::atan(big_e / u) - 3.0 * ratio)
}

/// The function `q'(u)` of the ellipsoidal-harmonic expansion.
/// H&M Eq. 2-140.
/// * `u` - the Semiminor axis of the confocal ellipsoid.
/// * `big_e` - the linear Eccentricity.
#[must_use]
pub fn calculate_q_prime(u: f64, big_e: f64) -> f64 {
    let ratio = u / big_e;
    3.0 * (1.0 + ratio * ratio) * (1.0 - ratio * libm::atan(big_e / u)) - 1.0
}

/// Convert a `geodetic` position to ellipsoidal-harmonic coordinates.
/// * `a` - the Semimajor axis.
/// * `e_2` - the square of the Eccentricity.
/// * `big_e` - the linear Eccentricity.
/// * `lat` - the `geodetic` Latitude.
/// * `height` - the height above the ellipsoid.
///
/// returns the reduced Latitude `beta` and the Semiminor axis `u` of the
/// confocal ellipsoid through the point.
#[must_use]
pub fn calculate_ellipsoidal_harmonic(
    a: Metres,
    e_2: f64,
    big_e: Metres,
    lat: Angle,
    height: Metres,
) -> (Angle, Metres) {
    let n = calculate_prime_vertical_radius(a, e_2, lat).0;
    let rho = (n + height.0) * lat.cos().0;
    let z = (n * (1.0 - e_2) + height.0) * lat.sin().0;

    let big_e_2 = big_e.0 * big_e.0;
    let d = rho * rho + z * z - big_e_2;
    let u = libm::sqrt(0.5 * (d + libm::sqrt(d * d + 4.0 * big_e_2 * z * z)));

    let beta = Angle::from_y_x(z * libm::sqrt(u * u + big_e_2), u * rho);
    (beta, Metres(u))
}

/// The parameters of a rotating ellipsoid of revolution used by the
/// normal gravity calculations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GravityField {
    /// The Semimajor axis.
    pub a: f64,
    /// The Semiminor axis.
    pub b: f64,
    /// The linear Eccentricity.
    pub big_e: f64,
    /// The geocentric gravitational constant.
    pub gm: f64,
    /// The angular velocity.
    pub omega: f64,
}

impl GravityField {
    /// `q0`, the value of `q` on the ellipsoid.
    #[must_use]
    pub fn q0(&self) -> f64 {
        calculate_q(self.b, self.big_e)
    }

    /// `m`, the ratio of the centrifugal force at the equator to the
    /// gravitation. H&M Eq. 2-70.
    #[must_use]
    pub fn m(&self) -> f64 {
        self.omega * self.omega * self.a * self.a * self.b / self.gm
    }

    /// The normal gravity potential on the surface of the ellipsoid, `U0`.
    /// H&M Eq. 2-123.
    #[must_use]
    pub fn reference_potential(&self) -> f64 {
        let rotation = self.omega * self.omega * self.a * self.a / 3.0;
        if self.big_e > 0.0 {
            self.gm / self.big_e * libm::atan(self.big_e / self.b) + rotation
        } else {
            self.gm / self.a + rotation
        }
    }

    /// The normal gravity at the equator and the poles of the ellipsoid,
    /// H&M Eq. 2-141.
    ///
    /// returns the normal gravity at the equator and at the poles.
    #[must_use]
    pub fn equator_and_pole(&self) -> (f64, f64) {
        if self.big_e > 0.0 {
            let m = self.m();
            let ep = self.big_e / self.b;
            let ratio = ep * calculate_q_prime(self.b, self.big_e) / self.q0();
            (
                self.gm / (self.a * self.b) * (1.0 - m - m * ratio / 6.0),
                self.gm / (self.a * self.a) * (1.0 + m * ratio / 3.0),
            )
        } else {
            let gravitation = self.gm / (self.a * self.a);
            (gravitation - self.omega * self.omega * self.a, gravitation)
        }
    }

    /// The magnitude of normal gravity at ellipsoidal-harmonic coordinates.
    /// H&M Eqs. 2-148, 2-150 and 2-151.
    /// * `beta` - the reduced Latitude.
    /// * `u` - the Semiminor axis of the confocal ellipsoid, it must not be
    ///   less than `b`.
    #[must_use]
    pub fn normal_gravity(&self, beta: Angle, u: Metres) -> f64 {
        let u = u.0;
        let sin_beta = beta.sin().0;
        let cos_beta = beta.cos().0;
        let big_e_2 = self.big_e * self.big_e;
        let omega_2 = self.omega * self.omega;

        let u2_e2 = u * u + big_e_2;
        let sqrt_u2_e2 = libm::sqrt(u2_e2);
        let w = libm::sqrt((u * u + big_e_2 * sin_beta * sin_beta) / u2_e2);
        let q0 = self.q0();

        let gamma_u = -(self.gm / u2_e2
            + omega_2 * self.a * self.a * self.big_e / u2_e2 * calculate_q_prime(u, self.big_e)
                / q0
                * (0.5 * sin_beta * sin_beta - 1.0 / 6.0)
            - omega_2 * u * cos_beta * cos_beta)
            / w;
        let gamma_beta = (-omega_2 * self.a * self.a / sqrt_u2_e2 * calculate_q(u, self.big_e)
            / q0
            + omega_2 * sqrt_u2_e2)
            * sin_beta
            * cos_beta
            / w;

        libm::hypot(gamma_u, gamma_beta)
    }

    /// The normal gravity potential at ellipsoidal-harmonic coordinates.
    /// H&M Eq. 2-126.
    /// * `beta` - the reduced Latitude.
    /// * `u` - the Semiminor axis of the confocal ellipsoid.
    #[must_use]
    pub fn normal_gravity_potential(&self, beta: Angle, u: Metres) -> f64 {
        let u = u.0;
        let sin_beta = beta.sin().0;
        let cos_beta = beta.cos().0;
        let omega_2 = self.omega * self.omega;
        let u2_e2 = u * u + self.big_e * self.big_e;

        self.gm / self.big_e * libm::atan(self.big_e / u)
            + 0.5 * omega_2 * self.a * self.a * calculate_q(u, self.big_e) / self.q0()
                * (sin_beta * sin_beta - 1.0 / 3.0)
            + 0.5 * omega_2 * u2_e2 * cos_beta * cos_beta
    }
}

/// The magnitude of normal gravity of a rotating sphere: the gravitation of
/// the sphere combined with the centrifugal acceleration.
/// * `gm` - the geocentric gravitational constant.
/// * `omega` - the angular velocity.
/// * `lat` - the spherical Latitude.
/// * `radius` - the distance from the centre of the sphere.
#[must_use]
pub fn calculate_sphere_normal_gravity(gm: f64, omega: f64, lat: Angle, radius: Metres) -> f64 {
    let r = radius.0;
    let cos_lat = lat.cos().0;
    let centrifugal = omega * omega * r * cos_lat;
    let radial = gm / (r * r) - centrifugal * cos_lat;
    let tangential = centrifugal * lat.sin().0;
    libm::hypot(radial, tangential)
}

/// The normal gravity potential of a rotating sphere: the gravitational
/// potential combined with the centrifugal potential.
/// * `gm` - the geocentric gravitational constant.
/// * `omega` - the angular velocity.
/// * `lat` - the spherical Latitude.
/// * `radius` - the distance from the centre of the sphere.
#[must_use]
pub fn calculate_sphere_normal_gravity_potential(
    gm: f64,
    omega: f64,
    lat: Angle,
    radius: Metres,
) -> f64 {
    let r = radius.0;
    let cos_lat = lat.cos().0;
    gm / r + 0.5 * omega * omega * r * r * cos_lat * cos_lat
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ellipsoid::{
        calculate_linear_eccentricity, calculate_minor_axis, calculate_parametric_latitude,
        calculate_sq_eccentricity, wgs84,
    };
    use angle_sc::{is_within_tolerance, Degrees, Radians};

    fn wgs84_field() -> GravityField {
        let b = calculate_minor_axis(wgs84::A, wgs84::F);
        GravityField {
            a: wgs84::A.0,
            b: b.0,
            big_e: calculate_linear_eccentricity(wgs84::A, b).0,
            gm: wgs84::GM,
            omega: wgs84::OMEGA,
        }
    }

    #[test]
    fn test_calculate_q() {
        let field = wgs84_field();
        // q is small and positive, q' is small and positive on the ellipsoid
        let q0 = field.q0();
        assert!(0.0 < q0 && q0 < 1.0e-4);
        let q0_prime = calculate_q_prime(field.b, field.big_e);
        assert!(0.0 < q0_prime && q0_prime < 3.0e-3);

        // q decreases with distance from the ellipsoid
        assert!(calculate_q(2.0 * field.b, field.big_e) < q0);
    }

    #[test]
    fn test_calculate_ellipsoidal_harmonic_on_the_surface() {
        let field = wgs84_field();
        let e_2 = calculate_sq_eccentricity(wgs84::F);
        let one_minus_f = 1.0 - wgs84::F;

        for i in -90..91 {
            let lat = Angle::from(Degrees(i as f64));
            let (beta, u) = calculate_ellipsoidal_harmonic(
                wgs84::A,
                e_2,
                Metres(field.big_e),
                lat,
                Metres(0.0),
            );
            assert!(is_within_tolerance(field.b, u.0, 1e-6));

            // on the surface, the reduced latitude is the parametric latitude
            let parametric = calculate_parametric_latitude(lat, one_minus_f);
            assert!(is_within_tolerance(
                Radians::from(parametric).0,
                Radians::from(beta).0,
                1e-12
            ));
        }
    }

    #[test]
    fn test_equator_and_pole() {
        let field = wgs84_field();
        let (gamma_a, gamma_b) = field.equator_and_pole();
        assert!(is_within_tolerance(9.780_325_335_9, gamma_a, 1e-9));
        assert!(is_within_tolerance(9.832_184_937_8, gamma_b, 1e-9));

        let e_2 = calculate_sq_eccentricity(wgs84::F);
        for (latitude, expected) in [(0.0, gamma_a), (90.0, gamma_b), (-90.0, gamma_b)] {
            let (beta, u) = calculate_ellipsoidal_harmonic(
                wgs84::A,
                e_2,
                Metres(field.big_e),
                Angle::from(Degrees(latitude)),
                Metres(0.0),
            );
            assert!(is_within_tolerance(
                expected,
                field.normal_gravity(beta, u),
                1e-10
            ));
        }
    }

    #[test]
    fn test_normal_gravity_potential_on_the_surface() {
        let field = wgs84_field();
        let e_2 = calculate_sq_eccentricity(wgs84::F);
        let u0 = field.reference_potential();
        assert!(is_within_tolerance(62_636_851.714_6, u0, 1e-3));

        for i in -18..19 {
            let lat = Angle::from(Degrees(5.0 * i as f64));
            let (beta, u) = calculate_ellipsoidal_harmonic(
                wgs84::A,
                e_2,
                Metres(field.big_e),
                lat,
                Metres(0.0),
            );
            assert!(is_within_tolerance(
                u0,
                field.normal_gravity_potential(beta, u),
                1e-4
            ));
        }
    }

    #[test]
    fn test_sphere_normal_gravity() {
        let radius = Metres(wgs84::A.0);
        let pole = Angle::from(Degrees(90.0));
        assert!(is_within_tolerance(
            wgs84::GM / (radius.0 * radius.0),
            calculate_sphere_normal_gravity(wgs84::GM, wgs84::OMEGA, pole, radius),
            1e-12
        ));

        let equator = Angle::from(Degrees(0.0));
        assert!(is_within_tolerance(
            wgs84::GM / (radius.0 * radius.0) - wgs84::OMEGA * wgs84::OMEGA * radius.0,
            calculate_sphere_normal_gravity(wgs84::GM, wgs84::OMEGA, equator, radius),
            1e-12
        ));
        assert!(is_within_tolerance(
            wgs84::GM / radius.0 + 0.5 * wgs84::OMEGA * wgs84::OMEGA * radius.0 * radius.0,
            calculate_sphere_normal_gravity_potential(wgs84::GM, wgs84::OMEGA, equator, radius),
            1e-6
        ));
    }

    #[test]
    fn test_zero_eccentricity_field() {
        let field = GravityField {
            a: 1000.0,
            b: 1000.0,
            big_e: 0.0,
            gm: 1.0e6,
            omega: 0.0,
        };
        assert_eq!((1.0, 1.0), field.equator_and_pole());
        assert_eq!(1000.0, field.reference_potential());
    }
}
