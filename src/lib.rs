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

//! boule
//!
//! [![crates.io](https://img.shields.io/crates/v/boule.svg)](https://crates.io/crates/boule)
//! [![docs.io](https://docs.rs/boule/badge.svg)](https://docs.rs/boule/)
//! [![License](https://img.shields.io/badge/License-MIT-blue)](https://opensource.org/license/mit/)
//!
//! A library of reference ellipsoids and the geodetic and geophysical
//! formulas evaluated on them: radii of curvature, coordinate conversions,
//! normal gravity and normal gravity potential.
//!
//! ## Reference ellipsoids
//!
//! A reference ellipsoid approximates the shape of a planet and, given its
//! geocentric gravitational constant and angular velocity, defines a
//! *normal* gravity field whose surface is an equipotential.
//! Normal gravity is the theoretical gravity of that field, the value that
//! gravity disturbances and anomalies are measured against.
//!
//! The library provides three models:
//!
//! - `Ellipsoid`: an oblate ellipsoid of revolution, defined by its
//!   Semimajor axis and flattening, e.g. WGS 84 and GRS 80;
//! - `Sphere`: a rotating sphere, e.g. the Moon, Venus and Mercury;
//! - `TriaxialEllipsoid`: an ellipsoid with three distinct semi-axes,
//!   e.g. Vesta. Only its geometry is provided.
//!
//! The models are immutable: they are validated on construction and every
//! query is a pure function of the model and its arguments.
//! The statics `WGS84_ELLIPSOID`, `GRS80_ELLIPSOID`, `MARS_ELLIPSOID`,
//! `MOON_SPHERE`, `VENUS_SPHERE`, `MERCURY_SPHERE` and `VESTA_ELLIPSOID`
//! are predefined realizations.
//!
//! ## Design
//!
//! Normal gravity is calculated with the closed form equations in
//! ellipsoidal-harmonic coordinates of Hofmann-Wellenhof and Moritz,
//! *Physical Geodesy* (2006), so it is valid at any height on or above the
//! ellipsoid, not just on its surface.
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Angle`,
//!   `Degrees` and `Radians` and perform trigonometric calculations;
//! - [unit-sphere](https://crates.io/crates/unit-sphere) - to define `LatLong`;
//! - [icao_units](https://crates.io/crates/icao-units) - to define `Metres`.
//!
//! Queries accept a single value; the `batch` module applies them to slices.
//!
//! ## Example
//!
//! ```
//! use boule::*;
//!
//! let gravity = WGS84_ELLIPSOID.normal_gravity(Degrees(45.0), Metres(0.0)).unwrap();
//! assert!((gravity - 9.806_197_769_373).abs() < 1.0e-9);
//!
//! let radius = WGS84_ELLIPSOID.prime_vertical_radius(Degrees(0.0)).unwrap();
//! assert_eq!(WGS84_ELLIPSOID.a(), radius);
//! ```
//!
//! The library is declared [no_std](https://docs.rust-embedded.org/book/intro/no-std.html)
//! so it can be used in embedded applications.

#![cfg_attr(not(test), no_std)]

extern crate alloc;
extern crate angle_sc;
extern crate icao_units;
extern crate unit_sphere;

pub mod batch;
pub mod ellipsoid;
pub mod error;
pub mod sphere;
pub mod triaxial;

pub use angle_sc::{Angle, Degrees, Radians, Validate};
pub use error::{check_finite, check_latitude, Error};
pub use icao_units::si::Metres;
pub use sphere::Sphere;
pub use triaxial::TriaxialEllipsoid;
pub use unit_sphere::LatLong;

use alloc::vec::Vec;
use ellipsoid::gravity::{self, GravityField};
use lazy_static::lazy_static;

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct ReadmeDoctests;

/// The flattening below which an `Ellipsoid` is better modelled as a `Sphere`.
pub const MIN_FLATTENING: f64 = 1.0e-7;

/// The gravity parameters of a rotating body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GravityParameters {
    /// The geocentric gravitational constant: the product of the mass of the
    /// body and the gravitational constant, in m³/s².
    pub geocentric_grav_const: f64,
    /// The angular velocity of the body, in rad/s.
    pub angular_velocity: f64,
}

impl GravityParameters {
    /// Constructor.
    /// * `gm` - the geocentric gravitational constant, in m³/s².
    /// * `omega` - the angular velocity, in rad/s.
    ///
    /// A negative `gm` is accepted with a warning.
    /// # Errors
    /// `Error::GravitationalConstant` if `gm` is zero or not finite.  
    /// `Error::NonFinite` if `omega` is not finite.
    pub fn new(gm: f64, omega: f64) -> Result<Self, Error> {
        if !(gm.is_finite() && gm != 0.0) {
            return Err(Error::GravitationalConstant(gm));
        }
        let angular_velocity = check_finite("angular velocity", omega)?;
        if gm < 0.0 {
            log::warn!("the geocentric gravitational constant is negative: '{gm}'");
        }
        Ok(Self {
            geocentric_grav_const: gm,
            angular_velocity,
        })
    }
}

/// The parameters of an `Ellipsoid` of revolution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    /// A short name for the ellipsoid, e.g. "WGS84".
    name: &'static str,
    /// A long name for the ellipsoid.
    long_name: Option<&'static str>,
    /// Citation for the parameter values.
    reference: Option<&'static str>,

    /// The Semimajor axis of the ellipsoid.
    a: Metres,
    /// The flattening of the ellipsoid, a ratio.
    f: f64,

    /// The Semiminor axis of the ellipsoid.
    b: Metres,
    /// One minus the flattening ratio.
    one_minus_f: f64,
    /// The square of the Eccentricity of the ellipsoid.
    e_2: f64,
    /// The square of the second Eccentricity of the ellipsoid.
    ep_2: f64,
    /// The linear Eccentricity of the ellipsoid.
    big_e: Metres,

    /// The gravity parameters, if any.
    gravity: Option<GravityParameters>,
}

impl Validate for Ellipsoid {
    /// Test whether an `Ellipsoid` is valid.
    /// Whether 0 < `a` and 0 <= `f` < 1.
    fn is_valid(&self) -> bool {
        self.a.0.is_finite() && 0.0 < self.a.0 && (0.0..1.0).contains(&self.f)
    }
}

impl Ellipsoid {
    /// Constructor.
    /// * `name` - a short name for the `Ellipsoid`.
    /// * `a` - the Semimajor axis of the `Ellipsoid`.
    /// * `f` - the flattening of the `Ellipsoid`, a ratio.
    ///
    /// # Errors
    /// `Error::SemimajorAxis` if `a` is not finite and positive.  
    /// `Error::Flattening` if `f` is not in the range [0, 1).
    ///
    /// # Examples
    /// ```
    /// use boule::{Ellipsoid, Error, Metres};
    ///
    /// assert!(Ellipsoid::new("EARTH", Metres(6_378_137.0), 1.0 / 298.257_223_563).is_ok());
    /// assert_eq!(Err(Error::SemimajorAxis(0.0)), Ellipsoid::new("BAD", Metres(0.0), 0.0));
    /// assert_eq!(Err(Error::Flattening(1.0)), Ellipsoid::new("BAD", Metres(1.0), 1.0));
    /// ```
    pub fn new(name: &'static str, a: Metres, f: f64) -> Result<Self, Error> {
        if !(a.0.is_finite() && 0.0 < a.0) {
            return Err(Error::SemimajorAxis(a.0));
        }
        if !(0.0..1.0).contains(&f) {
            return Err(Error::Flattening(f));
        }
        if 0.0 < f && f < MIN_FLATTENING {
            log::warn!(
                "flattening '{f}' of '{name}' is very close to zero, \
                 this may lead to inaccurate results: consider using a Sphere"
            );
        }
        Ok(Self::from_valid_parameters(name, a, f))
    }

    /// Construct an `Ellipsoid` from its Semimajor and Semiminor axes.
    /// * `name` - a short name for the `Ellipsoid`.
    /// * `a` - the Semimajor axis of the `Ellipsoid`.
    /// * `b` - the Semiminor axis of the `Ellipsoid`.
    ///
    /// # Errors
    /// `Error::SemimajorAxis` if `a` is not finite and positive.  
    /// `Error::Radius` if `b` is not finite and positive.  
    /// `Error::Flattening` if `b` is greater than `a`.
    ///
    /// # Examples
    /// ```
    /// use boule::{Ellipsoid, Metres};
    ///
    /// let mars = Ellipsoid::from_axes("MARS", Metres(3_395_428.0), Metres(3_377_678.0)).unwrap();
    /// assert!((mars.b().0 - 3_377_678.0).abs() < 1.0e-6);
    /// ```
    pub fn from_axes(name: &'static str, a: Metres, b: Metres) -> Result<Self, Error> {
        if !(b.0.is_finite() && 0.0 < b.0) {
            return Err(Error::Radius(b.0));
        }
        if !(a.0.is_finite() && 0.0 < a.0) {
            return Err(Error::SemimajorAxis(a.0));
        }
        Self::new(name, a, (a.0 - b.0) / a.0)
    }

    /// Construct an `Ellipsoid` from parameters known to be valid.
    fn from_valid_parameters(name: &'static str, a: Metres, f: f64) -> Self {
        let b = ellipsoid::calculate_minor_axis(a, f);
        Self {
            name,
            long_name: None,
            reference: None,
            a,
            f,
            b,
            one_minus_f: 1.0 - f,
            e_2: ellipsoid::calculate_sq_eccentricity(f),
            ep_2: ellipsoid::calculate_sq_2nd_eccentricity(f),
            big_e: ellipsoid::calculate_linear_eccentricity(a, b),
            gravity: None,
        }
    }

    /// Set the gravity parameters of the `Ellipsoid`.
    /// * `gm` - the geocentric gravitational constant, in m³/s².
    /// * `omega` - the angular velocity, in rad/s.
    ///
    /// # Errors
    /// `Error::GravitationalConstant` if `gm` is zero or not finite.  
    /// `Error::NonFinite` if `omega` is not finite.
    pub fn with_gravity(mut self, gm: f64, omega: f64) -> Result<Self, Error> {
        self.gravity = Some(GravityParameters::new(gm, omega)?);
        Ok(self)
    }

    /// Set the long name of the `Ellipsoid`.
    #[must_use]
    pub const fn with_long_name(mut self, long_name: &'static str) -> Self {
        self.long_name = Some(long_name);
        self
    }

    /// Set the citation for the parameter values of the `Ellipsoid`.
    #[must_use]
    pub const fn with_reference(mut self, reference: &'static str) -> Self {
        self.reference = Some(reference);
        self
    }

    /// Construct an `Ellipsoid` from known valid primary parameters.
    fn realization(
        name: &'static str,
        a: Metres,
        f: f64,
        gm: f64,
        omega: f64,
        long_name: &'static str,
        reference: &'static str,
    ) -> Self {
        let mut value = Self::from_valid_parameters(name, a, f)
            .with_long_name(long_name)
            .with_reference(reference);
        value.gravity = Some(GravityParameters {
            geocentric_grav_const: gm,
            angular_velocity: omega,
        });
        value
    }

    /// Construct an `Ellipsoid` with the WGS-84 parameters.
    #[must_use]
    pub fn wgs84() -> Self {
        use ellipsoid::wgs84;
        Self::realization(
            "WGS84",
            wgs84::A,
            wgs84::F,
            wgs84::GM,
            wgs84::OMEGA,
            wgs84::LONG_NAME,
            wgs84::REFERENCE,
        )
    }

    /// Construct an `Ellipsoid` with the GRS 80 parameters.
    #[must_use]
    pub fn grs80() -> Self {
        use ellipsoid::grs80;
        Self::realization(
            "GRS80",
            grs80::A,
            grs80::F,
            grs80::GM,
            grs80::OMEGA,
            grs80::LONG_NAME,
            grs80::REFERENCE,
        )
    }

    /// Construct an `Ellipsoid` with the Mars parameters.
    #[must_use]
    pub fn mars() -> Self {
        use ellipsoid::mars;
        Self::realization(
            "MARS",
            mars::A,
            mars::F,
            mars::GM,
            mars::OMEGA,
            mars::LONG_NAME,
            mars::REFERENCE,
        )
    }

    /// The short name of the ellipsoid.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The long name of the ellipsoid, if any.
    #[must_use]
    pub const fn long_name(&self) -> Option<&'static str> {
        self.long_name
    }

    /// The citation for the parameter values, if any.
    #[must_use]
    pub const fn reference(&self) -> Option<&'static str> {
        self.reference
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

    /// The inverse flattening, infinite for a sphere.
    #[must_use]
    pub fn inverse_flattening(&self) -> f64 {
        1.0 / self.f
    }

    /// The square of the Eccentricity of the ellipsoid.
    #[must_use]
    pub const fn e_2(&self) -> f64 {
        self.e_2
    }

    /// The square of the second Eccentricity of the ellipsoid.
    #[must_use]
    pub const fn ep_2(&self) -> f64 {
        self.ep_2
    }

    /// The first Eccentricity of the ellipsoid.
    #[must_use]
    pub fn eccentricity(&self) -> f64 {
        libm::sqrt(self.e_2)
    }

    /// The second Eccentricity of the ellipsoid.
    #[must_use]
    pub fn second_eccentricity(&self) -> f64 {
        libm::sqrt(self.ep_2)
    }

    /// The linear Eccentricity of the ellipsoid.
    #[must_use]
    pub const fn linear_eccentricity(&self) -> Metres {
        self.big_e
    }

    /// The gravity parameters of the ellipsoid, if any.
    #[must_use]
    pub const fn gravity_parameters(&self) -> Option<GravityParameters> {
        self.gravity
    }

    /// The arithmetic mean radius of the semi-axes: (2a + b) / 3.
    #[must_use]
    pub fn mean_radius(&self) -> Metres {
        Metres((2.0 * self.a.0 + self.b.0) / 3.0)
    }

    /// The surface area of the ellipsoid, in m².
    #[must_use]
    pub fn area(&self) -> f64 {
        ellipsoid::calculate_area(self.a, self.e_2)
    }

    /// The volume bounded by the ellipsoid, in m³.
    #[must_use]
    pub fn volume(&self) -> f64 {
        4.0 / 3.0 * core::f64::consts::PI * self.a.0 * self.a.0 * self.b.0
    }

    /// The radius of a sphere with the same surface area as the ellipsoid.
    #[must_use]
    pub fn area_equivalent_radius(&self) -> Metres {
        Metres(libm::sqrt(self.area() / (4.0 * core::f64::consts::PI)))
    }

    /// The radius of a sphere with the same volume as the ellipsoid.
    #[must_use]
    pub fn volume_equivalent_radius(&self) -> Metres {
        Metres(libm::cbrt(self.a.0 * self.a.0 * self.b.0))
    }

    /// The gravity field parameters of the ellipsoid.
    fn gravity_field(&self) -> Result<GravityField, Error> {
        let parameters = self.gravity.ok_or(Error::NoGravityParameters(self.name))?;
        Ok(GravityField {
            a: self.a.0,
            b: self.b.0,
            big_e: self.big_e.0,
            gm: parameters.geocentric_grav_const,
            omega: parameters.angular_velocity,
        })
    }

    /// The mass of the ellipsoid, in kg.
    /// # Errors
    /// `Error::NoGravityParameters` if the ellipsoid has no gravity parameters.
    pub fn mass(&self) -> Result<f64, Error> {
        Ok(self.gravity_field()?.gm / gravity::G)
    }

    /// The mean density of the ellipsoid, in kg/m³.
    /// # Errors
    /// `Error::NoGravityParameters` if the ellipsoid has no gravity parameters.
    pub fn mean_density(&self) -> Result<f64, Error> {
        Ok(self.mass()? / self.volume())
    }

    /// The normal gravity potential on the surface of the ellipsoid, `U0`,
    /// in m²/s².
    /// # Errors
    /// `Error::NoGravityParameters` if the ellipsoid has no gravity parameters.
    pub fn reference_normal_gravity_potential(&self) -> Result<f64, Error> {
        Ok(self.gravity_field()?.reference_potential())
    }

    /// The normal gravity at the equator on the surface of the ellipsoid,
    /// in m/s².
    /// # Errors
    /// `Error::NoGravityParameters` if the ellipsoid has no gravity parameters.
    pub fn gravity_equator(&self) -> Result<f64, Error> {
        Ok(self.gravity_field()?.equator_and_pole().0)
    }

    /// The normal gravity at the poles on the surface of the ellipsoid,
    /// in m/s².
    /// # Errors
    /// `Error::NoGravityParameters` if the ellipsoid has no gravity parameters.
    pub fn gravity_pole(&self) -> Result<f64, Error> {
        Ok(self.gravity_field()?.equator_and_pole().1)
    }

    /// The ratio of the centrifugal acceleration at the equator to the
    /// gravitation: m = ω²a²b/GM.
    /// # Errors
    /// `Error::NoGravityParameters` if the ellipsoid has no gravity parameters.
    ///
    /// # Examples
    /// ```
    /// use boule::WGS84_ELLIPSOID;
    ///
    /// let m = WGS84_ELLIPSOID.m().unwrap();
    /// assert!((m - 0.003_449_786_506_84).abs() < 1.0e-14);
    /// ```
    pub fn m(&self) -> Result<f64, Error> {
        Ok(self.gravity_field()?.m())
    }

    /// Convert a geodetic Latitude to a parametric Latitude on the
    /// auxiliary sphere.
    /// * `lat` - the geodetic Latitude
    #[must_use]
    pub fn calculate_parametric_latitude(&self, lat: Angle) -> Angle {
        ellipsoid::calculate_parametric_latitude(lat, self.one_minus_f)
    }

    /// Convert a parametric Latitude on the auxiliary sphere to a
    /// geodetic Latitude.
    /// * `beta` - the parametric Latitude
    #[must_use]
    pub fn calculate_geodetic_latitude(&self, beta: Angle) -> Angle {
        ellipsoid::calculate_geodetic_latitude(beta, self.one_minus_f)
    }

    /// The prime vertical radius of curvature at a geodetic Latitude.
    /// * `lat` - the geodetic Latitude.
    ///
    /// # Errors
    /// `Error::Latitude` if `lat` is not a valid latitude.
    ///
    /// # Examples
    /// ```
    /// use boule::{Degrees, WGS84_ELLIPSOID};
    ///
    /// let n = WGS84_ELLIPSOID.prime_vertical_radius(Degrees(0.0)).unwrap();
    /// assert_eq!(6_378_137.0, n.0);
    /// ```
    pub fn prime_vertical_radius(&self, lat: Degrees) -> Result<Metres, Error> {
        let lat = check_latitude(lat)?;
        Ok(ellipsoid::calculate_prime_vertical_radius(self.a, self.e_2, lat))
    }

    /// The meridional radius of curvature at a geodetic Latitude.
    /// * `lat` - the geodetic Latitude.
    ///
    /// # Errors
    /// `Error::Latitude` if `lat` is not a valid latitude.
    pub fn meridional_radius(&self, lat: Degrees) -> Result<Metres, Error> {
        let lat = check_latitude(lat)?;
        Ok(ellipsoid::calculate_meridional_radius(self.a, self.e_2, lat))
    }

    /// The distance from the centre of the ellipsoid to its surface at a
    /// geodetic Latitude.
    /// * `lat` - the geodetic Latitude.
    ///
    /// # Errors
    /// `Error::Latitude` if `lat` is not a valid latitude.
    pub fn geocentric_radius(&self, lat: Degrees) -> Result<Metres, Error> {
        let lat = check_latitude(lat)?;
        Ok(ellipsoid::calculate_geocentric_radius(self.a, self.b, lat))
    }

    /// The distance from the centre of the ellipsoid to its surface at a
    /// geocentric spherical Latitude.
    /// * `psi` - the geocentric spherical Latitude.
    ///
    /// # Errors
    /// `Error::Latitude` if `psi` is not a valid latitude.
    pub fn geocentric_radius_spherical(&self, psi: Degrees) -> Result<Metres, Error> {
        let psi = check_latitude(psi)?;
        Ok(ellipsoid::calculate_geocentric_radius_spherical(
            self.a, self.b, psi,
        ))
    }

    /// Convert the geodetic Latitude of a point on the surface of the
    /// ellipsoid to its geocentric Latitude.
    /// * `lat` - the geodetic Latitude.
    ///
    /// # Errors
    /// `Error::Latitude` if `lat` is not a valid latitude.
    pub fn geocentric_latitude(&self, lat: Degrees) -> Result<Degrees, Error> {
        let lat = check_latitude(lat)?;
        Ok(Degrees::from(ellipsoid::calculate_geocentric_latitude(
            lat,
            self.one_minus_f,
        )))
    }

    /// Convert the geocentric Latitude of a point on the surface of the
    /// ellipsoid to its geodetic Latitude.
    /// * `psi` - the geocentric Latitude.
    ///
    /// # Errors
    /// `Error::Latitude` if `psi` is not a valid latitude.
    pub fn geodetic_latitude(&self, psi: Degrees) -> Result<Degrees, Error> {
        let psi = check_latitude(psi)?;
        Ok(Degrees::from(
            ellipsoid::calculate_geodetic_from_geocentric_latitude(psi, self.one_minus_f),
        ))
    }

    /// Convert a geodetic position and height to geocentric spherical
    /// coordinates.
    /// * `position` - the geodetic position.
    /// * `height` - the height above the ellipsoid.
    ///
    /// returns the geocentric spherical position (the longitude is unchanged)
    /// and the radius.
    /// # Errors
    /// `Error::Latitude` if the latitude is not valid.  
    /// `Error::NonFinite` if the longitude or height is not finite.
    pub fn geodetic_to_spherical(
        &self,
        position: &LatLong,
        height: Metres,
    ) -> Result<(LatLong, Metres), Error> {
        let lat = check_latitude(position.lat())?;
        check_finite("longitude", position.lon().0)?;
        check_finite("height", height.0)?;
        let (psi, radius) =
            ellipsoid::calculate_spherical_from_geodetic(self.a, self.e_2, lat, height);
        Ok((LatLong::new(Degrees::from(psi), position.lon()), radius))
    }

    /// Convert a geocentric spherical position and radius to geodetic
    /// coordinates.
    /// * `position` - the geocentric spherical position.
    /// * `radius` - the distance from the centre of the ellipsoid.
    ///
    /// returns the geodetic position (the longitude is unchanged) and the
    /// height above the ellipsoid.
    /// # Errors
    /// `Error::Latitude` if the latitude is not valid.  
    /// `Error::NonFinite` if the longitude is not finite.  
    /// `Error::Radius` if the radius is not finite and positive.
    pub fn spherical_to_geodetic(
        &self,
        position: &LatLong,
        radius: Metres,
    ) -> Result<(LatLong, Metres), Error> {
        let psi = check_latitude(position.lat())?;
        check_finite("longitude", position.lon().0)?;
        if !(radius.0.is_finite() && 0.0 < radius.0) {
            return Err(Error::Radius(radius.0));
        }
        let (lat, height) =
            ellipsoid::calculate_geodetic_from_spherical(self.a, self.e_2, psi, radius);
        Ok((LatLong::new(Degrees::from(lat), position.lon()), height))
    }

    /// Convert a geodetic Latitude and height to ellipsoidal-harmonic
    /// coordinates.
    /// * `lat` - the geodetic Latitude.
    /// * `height` - the height above the ellipsoid.
    ///
    /// returns the reduced Latitude and the Semiminor axis of the confocal
    /// ellipsoid through the point.
    /// # Errors
    /// `Error::Latitude` if `lat` is not a valid latitude.  
    /// `Error::NonFinite` if the height is not finite.
    pub fn geodetic_to_ellipsoidal_harmonic(
        &self,
        lat: Degrees,
        height: Metres,
    ) -> Result<(Degrees, Metres), Error> {
        let lat = check_latitude(lat)?;
        check_finite("height", height.0)?;
        let (beta, u) =
            gravity::calculate_ellipsoidal_harmonic(self.a, self.e_2, self.big_e, lat, height);
        Ok((Degrees::from(beta), u))
    }

    /// Validate the arguments of a normal gravity query.
    fn gravity_query(&self, lat: Degrees, height: Metres) -> Result<(GravityField, Angle), Error> {
        let lat = check_latitude(lat)?;
        check_finite("height", height.0)?;
        let field = self.gravity_field()?;
        if height.0 < 0.0 {
            log::warn!(
                "height '{}' is below the surface of '{}': \
                 the normal gravity field is only valid on or above the ellipsoid",
                height.0,
                self.name
            );
        }
        Ok((field, lat))
    }

    /// The magnitude of normal gravity, in m/s², at a geodetic Latitude and
    /// height above the ellipsoid.
    /// * `lat` - the geodetic Latitude.
    /// * `height` - the height above the ellipsoid.
    ///
    /// A negative `height` is evaluated with a warning.
    /// # Errors
    /// `Error::Latitude` if `lat` is not a valid latitude.  
    /// `Error::NonFinite` if the height is not finite.  
    /// `Error::NoGravityParameters` if the ellipsoid has no gravity parameters.
    ///
    /// # Examples
    /// ```
    /// use boule::{Degrees, Metres, WGS84_ELLIPSOID};
    ///
    /// let gamma = WGS84_ELLIPSOID.normal_gravity(Degrees(90.0), Metres(0.0)).unwrap();
    /// assert!((gamma - 9.832_184_937_8).abs() < 1.0e-9);
    /// ```
    pub fn normal_gravity(&self, lat: Degrees, height: Metres) -> Result<f64, Error> {
        let (field, lat) = self.gravity_query(lat, height)?;
        if 0.0 < self.big_e.0 {
            let (beta, u) =
                gravity::calculate_ellipsoidal_harmonic(self.a, self.e_2, self.big_e, lat, height);
            Ok(field.normal_gravity(beta, u))
        } else {
            Ok(gravity::calculate_sphere_normal_gravity(
                field.gm,
                field.omega,
                lat,
                Metres(self.a.0 + height.0),
            ))
        }
    }

    /// The magnitude of normal gravity in mGal, see `normal_gravity`.
    /// # Errors
    /// As `normal_gravity`.
    pub fn normal_gravity_mgal(&self, lat: Degrees, height: Metres) -> Result<f64, Error> {
        Ok(self.normal_gravity(lat, height)? * gravity::MGAL_PER_SI)
    }

    /// The normal gravity potential, in m²/s², at a geodetic Latitude and
    /// height above the ellipsoid.
    /// * `lat` - the geodetic Latitude.
    /// * `height` - the height above the ellipsoid.
    ///
    /// # Errors
    /// As `normal_gravity`.
    pub fn normal_gravity_potential(&self, lat: Degrees, height: Metres) -> Result<f64, Error> {
        let (field, lat) = self.gravity_query(lat, height)?;
        if 0.0 < self.big_e.0 {
            let (beta, u) =
                gravity::calculate_ellipsoidal_harmonic(self.a, self.e_2, self.big_e, lat, height);
            Ok(field.normal_gravity_potential(beta, u))
        } else {
            Ok(gravity::calculate_sphere_normal_gravity_potential(
                field.gm,
                field.omega,
                lat,
                Metres(self.a.0 + height.0),
            ))
        }
    }

    /// The normal gravity, in m/s², at each pair of geodetic Latitude and
    /// height, see `batch::broadcast`.
    /// # Errors
    /// `Error::Shape` if the slices cannot be broadcast together, otherwise
    /// as `normal_gravity`.
    pub fn normal_gravity_array(
        &self,
        lats: &[Degrees],
        heights: &[Metres],
    ) -> Result<Vec<f64>, Error> {
        batch::broadcast(lats, heights, |lat, height| {
            self.normal_gravity(*lat, *height)
        })
    }

    /// The prime vertical radius of curvature at each geodetic Latitude.
    /// # Errors
    /// `Error::Latitude` if any latitude is not valid.
    pub fn prime_vertical_radius_array(&self, lats: &[Degrees]) -> Result<Vec<Metres>, Error> {
        use batch::Elementwise;
        lats.try_elementwise(|lat| self.prime_vertical_radius(*lat))
    }
}

lazy_static! {
    /// A static instance of the WGS-84 `Ellipsoid`.
    pub static ref WGS84_ELLIPSOID: Ellipsoid = Ellipsoid::wgs84();

    /// A static instance of the GRS 80 `Ellipsoid`.
    pub static ref GRS80_ELLIPSOID: Ellipsoid = Ellipsoid::grs80();

    /// A static instance of the Mars `Ellipsoid`.
    pub static ref MARS_ELLIPSOID: Ellipsoid = Ellipsoid::mars();
}

/// A static instance of the Moon `Sphere`.
pub static MOON_SPHERE: Sphere = Sphere::moon();

/// A static instance of the Venus `Sphere`.
pub static VENUS_SPHERE: Sphere = Sphere::venus();

/// A static instance of the Mercury `Sphere`.
pub static MERCURY_SPHERE: Sphere = Sphere::mercury();

/// A static instance of the Vesta `TriaxialEllipsoid`.
pub static VESTA_ELLIPSOID: TriaxialEllipsoid = TriaxialEllipsoid::vesta();
