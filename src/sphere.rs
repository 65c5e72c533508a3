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

//! The sphere module contains the `Sphere` type: a rotating sphere, the
//! reference model of bodies whose flattening is negligible.

pub mod mercury;
pub mod moon;
pub mod venus;

use crate::ellipsoid::gravity;
use crate::{batch, check_finite, check_latitude, Error, GravityParameters, Metres};
use alloc::vec::Vec;
use angle_sc::{Angle, Degrees, Validate};

/// A rotating sphere.
///
/// The normal gravity of a sphere is the gravitation of the sphere combined
/// with the centrifugal acceleration. Its surface is not an equipotential
/// surface of the normal gravity field unless the sphere is not rotating.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    /// A short name for the sphere, e.g. "MOON".
    name: &'static str,
    /// A long name for the sphere.
    long_name: Option<&'static str>,
    /// Citation for the parameter values.
    reference: Option<&'static str>,
    /// The radius of the sphere.
    radius: Metres,
    /// The gravity parameters.
    gravity: GravityParameters,
}

impl Validate for Sphere {
    /// Test whether a `Sphere` is valid.
    /// Whether 0 < `radius`.
    fn is_valid(&self) -> bool {
        self.radius.0.is_finite() && 0.0 < self.radius.0
    }
}

impl Sphere {
    /// Constructor.
    /// * `name` - a short name for the `Sphere`.
    /// * `radius` - the radius of the `Sphere`.
    /// * `gm` - the geocentric gravitational constant, in m³/s².
    /// * `omega` - the angular velocity, in rad/s.
    ///
    /// # Errors
    /// `Error::Radius` if `radius` is not finite and positive.  
    /// `Error::GravitationalConstant` if `gm` is zero or not finite.  
    /// `Error::NonFinite` if `omega` is not finite.
    pub fn new(name: &'static str, radius: Metres, gm: f64, omega: f64) -> Result<Self, Error> {
        if !(radius.0.is_finite() && 0.0 < radius.0) {
            return Err(Error::Radius(radius.0));
        }
        Ok(Self {
            name,
            long_name: None,
            reference: None,
            radius,
            gravity: GravityParameters::new(gm, omega)?,
        })
    }

    /// Set the long name of the `Sphere`.
    #[must_use]
    pub const fn with_long_name(mut self, long_name: &'static str) -> Self {
        self.long_name = Some(long_name);
        self
    }

    /// Set the citation for the parameter values of the `Sphere`.
    #[must_use]
    pub const fn with_reference(mut self, reference: &'static str) -> Self {
        self.reference = Some(reference);
        self
    }

    /// Construct a `Sphere` from known valid parameters.
    const fn realization(
        name: &'static str,
        radius: Metres,
        gm: f64,
        omega: f64,
        long_name: &'static str,
        reference: &'static str,
    ) -> Self {
        Self {
            name,
            long_name: Some(long_name),
            reference: Some(reference),
            radius,
            gravity: GravityParameters {
                geocentric_grav_const: gm,
                angular_velocity: omega,
            },
        }
    }

    /// Construct a `Sphere` with the Moon parameters.
    #[must_use]
    pub const fn moon() -> Self {
        Self::realization(
            "MOON",
            moon::RADIUS,
            moon::GM,
            moon::OMEGA,
            moon::LONG_NAME,
            moon::REFERENCE,
        )
    }

    /// Construct a `Sphere` with the Venus parameters.
    #[must_use]
    pub const fn venus() -> Self {
        Self::realization(
            "VENUS",
            venus::RADIUS,
            venus::GM,
            venus::OMEGA,
            venus::LONG_NAME,
            venus::REFERENCE,
        )
    }

    /// Construct a `Sphere` with the Mercury parameters.
    #[must_use]
    pub const fn mercury() -> Self {
        Self::realization(
            "MERCURY",
            mercury::RADIUS,
            mercury::GM,
            mercury::OMEGA,
            mercury::LONG_NAME,
            mercury::REFERENCE,
        )
    }

    /// The short name of the sphere.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The long name of the sphere, if any.
    #[must_use]
    pub const fn long_name(&self) -> Option<&'static str> {
        self.long_name
    }

    /// The citation for the parameter values, if any.
    #[must_use]
    pub const fn reference(&self) -> Option<&'static str> {
        self.reference
    }

    /// The radius of the sphere.
    #[must_use]
    pub const fn radius(&self) -> Metres {
        self.radius
    }

    /// The flattening of a sphere: zero.
    #[must_use]
    pub const fn flattening(&self) -> f64 {
        0.0
    }

    /// The gravity parameters of the sphere.
    #[must_use]
    pub const fn gravity_parameters(&self) -> GravityParameters {
        self.gravity
    }

    /// The surface area of the sphere, in m².
    #[must_use]
    pub fn area(&self) -> f64 {
        4.0 * core::f64::consts::PI * self.radius.0 * self.radius.0
    }

    /// The volume bounded by the sphere, in m³.
    #[must_use]
    pub fn volume(&self) -> f64 {
        4.0 / 3.0 * core::f64::consts::PI * self.radius.0 * self.radius.0 * self.radius.0
    }

    /// The mass of the sphere, in kg.
    #[must_use]
    pub fn mass(&self) -> f64 {
        self.gravity.geocentric_grav_const / gravity::G
    }

    /// The mean density of the sphere, in kg/m³.
    #[must_use]
    pub fn mean_density(&self) -> f64 {
        self.mass() / self.volume()
    }

    /// The distance from the centre of the sphere of a point at `height`.
    fn distance(&self, height: Metres) -> Result<Metres, Error> {
        check_finite("height", height.0)?;
        let r = self.radius.0 + height.0;
        if 0.0 < r {
            if height.0 < 0.0 {
                log::warn!(
                    "height '{}' is below the surface of '{}': \
                     the normal gravity field is only valid on or above the sphere",
                    height.0,
                    self.name
                );
            }
            Ok(Metres(r))
        } else {
            Err(Error::Radius(r))
        }
    }

    /// The normal gravitation of the sphere: the magnitude of the
    /// gravitational acceleration at `height`, in m/s².
    /// * `height` - the height above the sphere.
    ///
    /// # Errors
    /// `Error::NonFinite` if `height` is not finite.  
    /// `Error::Radius` if `height` is at or below the centre of the sphere.
    pub fn normal_gravitation(&self, height: Metres) -> Result<f64, Error> {
        let r = self.distance(height)?.0;
        Ok(self.gravity.geocentric_grav_const / (r * r))
    }

    /// The magnitude of normal gravity, in m/s², at a spherical Latitude and
    /// height above the sphere.
    /// * `lat` - the spherical Latitude.
    /// * `height` - the height above the sphere.
    ///
    /// # Errors
    /// `Error::Latitude` if `lat` is not a valid latitude, otherwise as
    /// `normal_gravitation`.
    ///
    /// # Examples
    /// ```
    /// use boule::{Degrees, Metres, MOON_SPHERE};
    ///
    /// let gamma = MOON_SPHERE.normal_gravity(Degrees(90.0), Metres(0.0)).unwrap();
    /// let gravitation = MOON_SPHERE.normal_gravitation(Metres(0.0)).unwrap();
    /// assert!((gamma - gravitation).abs() < 1.0e-12);
    /// ```
    pub fn normal_gravity(&self, lat: Degrees, height: Metres) -> Result<f64, Error> {
        let lat: Angle = check_latitude(lat)?;
        let r = self.distance(height)?;
        Ok(gravity::calculate_sphere_normal_gravity(
            self.gravity.geocentric_grav_const,
            self.gravity.angular_velocity,
            lat,
            r,
        ))
    }

    /// The magnitude of normal gravity in mGal, see `normal_gravity`.
    /// # Errors
    /// As `normal_gravity`.
    pub fn normal_gravity_mgal(&self, lat: Degrees, height: Metres) -> Result<f64, Error> {
        Ok(self.normal_gravity(lat, height)? * gravity::MGAL_PER_SI)
    }

    /// The normal gravitational potential of the sphere at `height`,
    /// in m²/s².
    /// # Errors
    /// As `normal_gravitation`.
    pub fn normal_gravitational_potential(&self, height: Metres) -> Result<f64, Error> {
        Ok(self.gravity.geocentric_grav_const / self.distance(height)?.0)
    }

    /// The normal gravity potential: the gravitational potential combined
    /// with the centrifugal potential, in m²/s².
    /// * `lat` - the spherical Latitude.
    /// * `height` - the height above the sphere.
    ///
    /// # Errors
    /// As `normal_gravity`.
    pub fn normal_gravity_potential(&self, lat: Degrees, height: Metres) -> Result<f64, Error> {
        let lat = check_latitude(lat)?;
        let r = self.distance(height)?;
        Ok(gravity::calculate_sphere_normal_gravity_potential(
            self.gravity.geocentric_grav_const,
            self.gravity.angular_velocity,
            lat,
            r,
        ))
    }

    /// The normal gravity, in m/s², at each pair of spherical Latitude and
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
}
