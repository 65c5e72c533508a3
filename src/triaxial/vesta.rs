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

//! The vesta module contains the parameters of the Vesta reference triaxial
//! ellipsoid.

use crate::Metres;

/// The Vesta Semimajor axis, in metres.
pub const A: Metres = Metres(286_300.0);

/// The Vesta Semimedium axis, in metres.
pub const B: Metres = Metres(278_600.0);

/// The Vesta Semiminor axis, in metres.
pub const C: Metres = Metres(223_200.0);

/// The geocentric gravitational constant of Vesta, in m³/s².
pub const GM: f64 = 1.729_094e10;

/// The angular velocity of Vesta, in rad/s.
pub const OMEGA: f64 = 326.710_509_583_67e-6;

/// The long name of the Vesta triaxial ellipsoid.
pub const LONG_NAME: &str = "Vesta Triaxial Ellipsoid";

/// The reference for the Vesta parameter values.
pub const REFERENCE: &str = "Karimi, R., Azmoudeh Ardalan, A., & Vasheghani Farahani, S. \
    (2017). The size, shape and orientation of the asteroid Vesta based on data from \
    the Dawn mission. Earth and Planetary Science Letters, 475, 71-82. \
    doi:10.1016/j.epsl.2017.07.033";
