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

//! The ellipsoid module contains types and functions for defining an ellipsoid
//! of revolution given its Semimajor axis (the equivalent of its radius) and
//! flattening ratio, together with the geometric formulas evaluated on it.

#![allow(clippy::suboptimal_flops)]

pub mod gravity;
pub mod grs80;
pub mod mars;
pub mod wgs84;

use crate::Metres;
use angle_sc::Angle;

/// Calculate the Semiminor axis of an ellipsoid.
/// * `a` - the Semimajor axis of an ellipsoid.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use boule::Metres;
/// use boule::ellipsoid::{calculate_minor_axis, wgs84};
///
/// // The WGS 84 Semiminor axis measured in metres.
/// let b : Metres = Metres(6_356_752.314_245_179);
/// assert_eq!(b, calculate_minor_axis(wgs84::A, wgs84::F));
/// ```
#[must_use]
pub fn calculate_minor_axis(a: Metres, f: f64) -> Metres {
    Metres(a.0 * (1.0 - f))
}

/// Calculate the square of the Eccentricity of an ellipsoid.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use boule::ellipsoid::{calculate_sq_eccentricity, wgs84};
///
/// // The WGS 84 sq_eccentricity.
/// assert_eq!(0.0066943799901413165, calculate_sq_eccentricity(wgs84::F));
/// ```
#[must_use]
pub fn calculate_sq_eccentricity(f: f64) -> f64 {
    f * (2.0 - f)
}

/// Calculate the square of the second Eccentricity of an ellipsoid.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use boule::ellipsoid::{calculate_sq_2nd_eccentricity, wgs84};
///
/// // The WGS 84 sq 2nd eccentricity.
/// assert_eq!(0.006739496742276434, calculate_sq_2nd_eccentricity(wgs84::F));
/// ```
#[must_use]
pub fn calculate_sq_2nd_eccentricity(f: f64) -> f64 {
    let one_minus_f = 1.0 - f;
    calculate_sq_eccentricity(f) / (one_minus_f * one_minus_f)
}

/// Calculate the linear Eccentricity of an ellipsoid, the distance between
/// its centre and either focus.
/// * `a` - the Semimajor axis.
/// * `b` - the Semiminor axis.
#[must_use]
pub fn calculate_linear_eccentricity(a: Metres, b: Metres) -> Metres {
    Metres(libm::sqrt((a.0 - b.0) * (a.0 + b.0)))
}

/// Function to convert a `geodetic` Latitude to a `parametric` Latitude on the
/// auxiliary sphere.
/// * `lat` - the `geodetic` Latitude
/// * `one_minus_f` - one minus the flattening ratio.
#[must_use]
pub fn calculate_parametric_latitude(lat: Angle, one_minus_f: f64) -> Angle {
    Angle::from_y_x(one_minus_f * lat.sin().0, lat.cos().0)
}

/// Function to convert a `parametric` Latitude on the auxiliary sphere to a
/// `geodetic` Latitude.
/// * `lat` - the `parametric` Latitude
/// * `one_minus_f` - one minus the flattening ratio.
#[must_use]
pub fn calculate_geodetic_latitude(lat: Angle, one_minus_f: f64) -> Angle {
    Angle::from_y_x(lat.sin().0 / one_minus_f, lat.cos().0)
}

/// Function to convert a `geodetic` Latitude to the `geocentric` Latitude of
/// the same point on the surface of the ellipsoid.
/// * `lat` - the `geodetic` Latitude
/// * `one_minus_f` - one minus the flattening ratio.
#[must_use]
pub fn calculate_geocentric_latitude(lat: Angle, one_minus_f: f64) -> Angle {
    Angle::from_y_x(one_minus_f * one_minus_f * lat.sin().0, lat.cos().0)
}

/// Function to convert a `geocentric` Latitude of a point on the surface of
/// the ellipsoid to its `geodetic` Latitude.
/// * `psi` - the `geocentric` Latitude
/// * `one_minus_f` - one minus the flattening ratio.
#[must_use]
pub fn calculate_geodetic_from_geocentric_latitude(psi: Angle, one_minus_f: f64) -> Angle {
    Angle::from_y_x(psi.sin().0 / (one_minus_f * one_minus_f), psi.cos().0)
}

/// Calculate the prime vertical radius of curvature, the radius of curvature
/// in the plane perpendicular to the meridian.
/// * `a` - the Semimajor axis.
/// * `e_2` - the square of the Eccentricity.
/// * `lat` - the `geodetic` Latitude.
#[must_use]
pub fn calculate_prime_vertical_radius(a: Metres, e_2: f64, lat: Angle) -> Metres {
    let sin_lat = lat.sin().0;
    Metres(a.0 / libm::sqrt(1.0 - e_2 * sin_lat * sin_lat))
}

/// Calculate the meridional radius of curvature.
/// * `a` - the Semimajor axis.
/// * `e_2` - the square of the Eccentricity.
/// * `lat` - the `geodetic` Latitude.
#[must_use]
pub fn calculate_meridional_radius(a: Metres, e_2: f64, lat: Angle) -> Metres {
    let sin_lat = lat.sin().0;
    let w2 = 1.0 - e_2 * sin_lat * sin_lat;
    Metres(a.0 * (1.0 - e_2) / (w2 * libm::sqrt(w2)))
}

/// Calculate the distance from the centre of the ellipsoid to its surface at
/// a `geodetic` Latitude.
/// * `a`, `b` - the Semimajor and Semiminor axes.
/// * `lat` - the `geodetic` Latitude.
#[must_use]
pub fn calculate_geocentric_radius(a: Metres, b: Metres, lat: Angle) -> Metres {
    let a_cos = a.0 * lat.cos().0;
    let b_sin = b.0 * lat.sin().0;
    Metres(libm::sqrt(
        (a.0 * a_cos * a.0 * a_cos + b.0 * b_sin * b.0 * b_sin)
            / (a_cos * a_cos + b_sin * b_sin),
    ))
}

/// Calculate the distance from the centre of the ellipsoid to its surface at
/// a `geocentric` spherical Latitude.
/// * `a`, `b` - the Semimajor and Semiminor axes.
/// * `psi` - the `geocentric` spherical Latitude.
#[must_use]
pub fn calculate_geocentric_radius_spherical(a: Metres, b: Metres, psi: Angle) -> Metres {
    let b_cos = b.0 * psi.cos().0;
    let a_sin = a.0 * psi.sin().0;
    Metres(a.0 * b.0 / libm::sqrt(b_cos * b_cos + a_sin * a_sin))
}

/// Calculate the surface area of an ellipsoid of revolution.
/// * `a` - the Semimajor axis.
/// * `e_2` - the square of the Eccentricity.
#[must_use]
pub fn calculate_area(a: Metres, e_2: f64) -> f64 {
    let factor = if e_2 > 0.0 {
        let e = libm::sqrt(e_2);
        1.0 + (1.0 - e_2) / e * libm::atanh(e)
    } else {
        2.0
    };
    2.0 * core::f64::consts::PI * a.0 * a.0 * factor
}

/// Convert a `geodetic` position to its `geocentric` spherical Latitude and
/// radius.
/// * `a` - the Semimajor axis.
/// * `e_2` - the square of the Eccentricity.
/// * `lat` - the `geodetic` Latitude.
/// * `height` - the height above the ellipsoid.
///
/// returns the `geocentric` spherical Latitude and the radius.
#[must_use]
pub fn calculate_spherical_from_geodetic(
    a: Metres,
    e_2: f64,
    lat: Angle,
    height: Metres,
) -> (Angle, Metres) {
    let n = calculate_prime_vertical_radius(a, e_2, lat).0;
    let xy = (n + height.0) * lat.cos().0;
    let z = (n * (1.0 - e_2) + height.0) * lat.sin().0;
    (Angle::from_y_x(z, xy), Metres(libm::hypot(xy, z)))
}

/// Convert a `geocentric` spherical position to its `geodetic` Latitude and
/// height above the ellipsoid.
///
/// Uses the closed form solution of H. Vermeille,
/// [An analytical method to transform geocentric into geodetic coordinates](https://doi.org/10.1007/s00190-010-0419-x),
/// Journal of Geodesy 85, 105-117 (2011), which is valid for all points,
/// including those inside the evolute of the ellipsoid.
/// * `a` - the Semimajor axis.
/// * `e_2` - the square of the Eccentricity.
/// * `psi` - the `geocentric` spherical Latitude.
/// * `radius` - the distance from the centre of the ellipsoid.
///
/// returns the `geodetic` Latitude and the height above the ellipsoid.
#[allow(clippy::similar_names)]
#[must_use]
pub fn calculate_geodetic_from_spherical(
    a: Metres,
    e_2: f64,
    psi: Angle,
    radius: Metres,
) -> (Angle, Metres) {
    let big_p = radius.0 * psi.cos().0;
    let big_z = radius.0 * psi.sin().0;
    // On the equatorial plane the equatorial normal passes through the point.
    if big_z == 0.0 {
        return (Angle::from_y_x(0.0, 1.0), Metres(radius.0 - a.0));
    }
    let e_4 = e_2 * e_2;

    let p = (big_p / a.0) * (big_p / a.0);
    let q = (1.0 - e_2) * (big_z / a.0) * (big_z / a.0);
    let r = (p + q - e_4) / 6.0;
    let r_3 = 8.0 * r * r * r;
    let e_2_sqrt_pq = e_2 * libm::sqrt(p * q);
    let evolute = r_3 + e_4 * p * q;

    let u = if evolute > 0.0 {
        let sqrt_evolute = libm::sqrt(evolute);
        let plus = sqrt_evolute + e_2_sqrt_pq;
        let minus = sqrt_evolute - e_2_sqrt_pq;
        r + 0.5 * libm::cbrt(plus * plus) + 0.5 * libm::cbrt(minus * minus)
    } else {
        // on or inside the evolute
        let angle = 2.0 / 3.0
            * libm::atan2(e_2_sqrt_pq, libm::sqrt(-evolute) + libm::sqrt(-r_3));
        -4.0 * r * libm::sin(angle) * libm::cos(core::f64::consts::FRAC_PI_6 + angle)
    };
    let v = libm::sqrt(u * u + e_4 * q);
    let w = e_2 * (u + v - q) / (2.0 * v);
    let k = (u + v) / (libm::sqrt(w * w + u + v) + w);
    let big_d = k * big_p / (k + e_2);

    let lat = Angle::from_y_x(big_z, big_d);
    (lat, Metres((k + e_2 - 1.0) / k * libm::hypot(big_d, big_z)))
}
