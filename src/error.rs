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

//! The error module contains the `Error` type returned when a model is
//! constructed or queried with an invalid parameter.

use angle_sc::{Angle, Degrees};
use thiserror::Error;

/// An invalid parameter passed to a constructor or a query.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum Error {
    #[error("invalid semimajor axis '{0}': should be finite and greater than zero")]
    SemimajorAxis(f64),

    #[error("invalid flattening '{0}': should be finite, not negative and lower than 1")]
    Flattening(f64),

    #[error("invalid radius '{0}': should be finite and greater than zero")]
    Radius(f64),

    #[error(
        "invalid triaxial ellipsoid axes: major={major} medium={medium} minor={minor}, \
         should be major >= medium >= minor > 0"
    )]
    Axes { major: f64, medium: f64, minor: f64 },

    #[error("invalid latitude '{0}': should be finite and between -90 and 90 degrees")]
    Latitude(f64),

    #[error("invalid geocentric gravitational constant '{0}': should be finite and not zero")]
    GravitationalConstant(f64),

    #[error("invalid {name} '{value}': should be finite")]
    NonFinite { name: &'static str, value: f64 },

    #[error("'{0}' has no geocentric gravitational constant or angular velocity")]
    NoGravityParameters(&'static str),

    #[error("shape mismatch: {left} values cannot be broadcast against {right} values")]
    Shape { left: usize, right: usize },
}

/// Check that a value is finite.
/// * `name` - the name of the value, used in the error.
/// * `value` - the value to check.
///
/// # Errors
/// `Error::NonFinite` if `value` is infinite or `NaN`.
pub fn check_finite(name: &'static str, value: f64) -> Result<f64, Error> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFinite { name, value })
    }
}

/// Check that a latitude is finite and in the range -90° to 90° inclusive.
/// * `lat` - the latitude.
///
/// returns the latitude as an `Angle`.
/// # Errors
/// `Error::Latitude` if `lat` is outside the range or not finite.
/// # Examples
/// ```
/// use boule::{check_latitude, Degrees, Error};
///
/// assert!(check_latitude(Degrees(90.0)).is_ok());
/// assert_eq!(Err(Error::Latitude(90.5)), check_latitude(Degrees(90.5)));
/// ```
pub fn check_latitude(lat: Degrees) -> Result<Angle, Error> {
    if (-90.0..=90.0).contains(&lat.0) {
        Ok(Angle::from(lat))
    } else {
        Err(Error::Latitude(lat.0))
    }
}
