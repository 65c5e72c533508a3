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

//! The triaxial module contains the `TriaxialEllipsoid` type: a rotating
//! ellipsoid with three distinct semi-axes that spins around its largest
//! moment of inertia.
//!
//! Gravity calculations are not available for triaxial ellipsoids.

#![allow(clippy::suboptimal_flops)]

pub mod vesta;

use crate::{check_finite, check_latitude, Error, GravityParameters, LatLong, Metres};
use angle_sc::{Angle, Degrees, Validate};

/// A rotating triaxial ellipsoid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriaxialEllipsoid {
    /// A short name for the ellipsoid, e.g. "VESTA".
    name: &'static str,
    /// A long name for the ellipsoid.
    long_name: Option<&'static str>,
    /// Citation for the parameter values.
    reference: Option<&'static str>,
    /// The Semimajor (largest) axis.
    a: Metres,
    /// The Semimedium (middle) axis.
    b: Metres,
    /// The Semiminor (smallest) axis.
    c: Metres,
    /// The gravity parameters.
    gravity: GravityParameters,
}

impl Validate for TriaxialEllipsoid {
    /// Test whether a `TriaxialEllipsoid` is valid.
    /// Whether `a` >= `b` >= `c` > 0.
    fn is_valid(&self) -> bool {
        self.a.0.is_finite() && self.a.0 >= self.b.0 && self.b.0 >= self.c.0 && 0.0 < self.c.0
    }
}

impl TriaxialEllipsoid {
    /// Constructor.
    /// * `name` - a short name for the `TriaxialEllipsoid`.
    /// * `a`, `b`, `c` - the Semimajor, Semimedium and Semiminor axes.
    /// * `gm` - the geocentric gravitational constant, in m³/s².
    /// * `omega` - the angular velocity, in rad/s.
    ///
    /// A negative `gm` is accepted with a warning.
    /// # Errors
    /// `Error::SemimajorAxis`, `Error::Radius` if an axis is not finite and
    /// positive.  
    /// `Error::Axes` unless `a` >= `b` >= `c`.  
    /// `Error::GravitationalConstant` if `gm` is zero or not finite.  
    /// `Error::NonFinite` if `omega` is not finite.
    ///
    /// # Examples
    /// ```
    /// use boule::{Error, Metres, TriaxialEllipsoid};
    ///
    /// let result = TriaxialEllipsoid::new("BAD", Metres(2.0), Metres(3.0), Metres(1.0), 1.0, 0.0);
    /// assert_eq!(Err(Error::Axes { major: 2.0, medium: 3.0, minor: 1.0 }), result);
    /// ```
    pub fn new(
        name: &'static str,
        a: Metres,
        b: Metres,
        c: Metres,
        gm: f64,
        omega: f64,
    ) -> Result<Self, Error> {
        if !(a.0.is_finite() && 0.0 < a.0) {
            return Err(Error::SemimajorAxis(a.0));
        }
        for axis in [b, c] {
            if !(axis.0.is_finite() && 0.0 < axis.0) {
                return Err(Error::Radius(axis.0));
            }
        }
        if b.0 > a.0 || c.0 > b.0 {
            return Err(Error::Axes {
                major: a.0,
                medium: b.0,
                minor: c.0,
            });
        }
        Ok(Self {
            name,
            long_name: None,
            reference: None,
            a,
            b,
            c,
            gravity: GravityParameters::new(gm, omega)?,
        })
    }

    /// Set the long name of the `TriaxialEllipsoid`.
    #[must_use]
    pub const fn with_long_name(mut self, long_name: &'static str) -> Self {
        self.long_name = Some(long_name);
        self
    }

    /// Set the citation for the parameter values of the `TriaxialEllipsoid`.
    #[must_use]
    pub const fn with_reference(mut self, reference: &'static str) -> Self {
        self.reference = Some(reference);
        self
    }

    /// Construct a `TriaxialEllipsoid` with the Vesta parameters.
    #[must_use]
    pub const fn vesta() -> Self {
        Self {
            name: "VESTA",
            long_name: Some(vesta::LONG_NAME),
            reference: Some(vesta::REFERENCE),
            a: vesta::A,
            b: vesta::B,
            c: vesta::C,
            gravity: GravityParameters {
                geocentric_grav_const: vesta::GM,
                angular_velocity: vesta::OMEGA,
            },
        }
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

    /// The Semimajor axis.
    #[must_use]
    pub const fn a(&self) -> Metres {
        self.a
    }

    /// The Semimedium axis.
    #[must_use]
    pub const fn b(&self) -> Metres {
        self.b
    }

    /// The Semiminor axis.
    #[must_use]
    pub const fn c(&self) -> Metres {
        self.c
    }

    /// The gravity parameters of the ellipsoid.
    #[must_use]
    pub const fn gravity_parameters(&self) -> GravityParameters {
        self.gravity
    }

    /// The arithmetic mean radius of the semi-axes: (a + b + c) / 3.
    #[must_use]
    pub fn mean_radius(&self) -> Metres {
        Metres((self.a.0 + self.b.0 + self.c.0) / 3.0)
    }

    /// The volume bounded by the ellipsoid, in m³.
    #[must_use]
    pub fn volume(&self) -> f64 {
        4.0 / 3.0 * core::f64::consts::PI * self.a.0 * self.b.0 * self.c.0
    }

    /// The radius of a sphere with the same volume as the ellipsoid.
    #[must_use]
    pub fn volume_equivalent_radius(&self) -> Metres {
        Metres(libm::cbrt(self.a.0 * self.b.0 * self.c.0))
    }

    /// The flattening of the equator: (a - b) / a.
    #[must_use]
    pub fn equatorial_flattening(&self) -> f64 {
        (self.a.0 - self.b.0) / self.a.0
    }

    /// The flattening of the meridian containing the Semimajor axis:
    /// (a - c) / a.
    #[must_use]
    pub fn meridional_flattening(&self) -> f64 {
        (self.a.0 - self.c.0) / self.a.0
    }

    /// The distance from the centre of the ellipsoid to its surface.
    ///
    /// K. Pec and Z. Martinec, Expansion of geoid heights over a triaxial
    /// Earth's ellipsoid into a spherical harmonic series,
    /// Studia Geophysica et Geodaetica 27 (1983), Eq. 1, using latitude
    /// rather than co-latitude.
    /// * `position` - the geocentric spherical position.
    /// * `longitude_semimajor_axis` - the geocentric spherical longitude of
    ///   the meridian containing the Semimajor axis.
    ///
    /// # Errors
    /// `Error::Latitude` if the latitude is not valid.  
    /// `Error::NonFinite` if a longitude is not finite.
    pub fn geocentric_radius(
        &self,
        position: &LatLong,
        longitude_semimajor_axis: Degrees,
    ) -> Result<Metres, Error> {
        let lat = check_latitude(position.lat())?;
        let lon = check_finite("longitude", position.lon().0)?;
        let lon_a = check_finite("longitude of the semimajor axis", longitude_semimajor_axis.0)?;

        let cos_lat = lat.cos().0;
        let sin_lat = lat.sin().0;
        let cos_lon = Angle::from(Degrees(lon - lon_a)).cos().0;

        let f1 = self.meridional_flattening();
        let f2 = self.equatorial_flattening();
        let e1 = 2.0 * f1 - f1 * f1;
        let e2 = 2.0 * f2 - f2 * f2;

        let denominator = 1.0
            - e1 * cos_lat * cos_lat
            - e2 * sin_lat * sin_lat
            - (1.0 - f1) * (1.0 - f1) * e2 * cos_lat * cos_lat * cos_lon * cos_lon;
        Ok(Metres(
            self.a.0 * (1.0 - f1) * (1.0 - f2) / libm::sqrt(denominator),
        ))
    }
}
