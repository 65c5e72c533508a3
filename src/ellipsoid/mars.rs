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

//! The mars module contains the parameters of the Mars reference ellipsoid
//! of Ardalan et al. (2010).

use crate::Metres;

/// The Mars Semimajor axis measured in metres.
pub const A: Metres = Metres(3_395_428.0);

/// The Mars Semiminor axis measured in metres.
pub const B: Metres = Metres(3_377_678.0);

/// The Mars flattening, a ratio.
pub const F: f64 = (A.0 - B.0) / A.0;

/// The Mars geocentric gravitational constant, in m³/s².
pub const GM: f64 = 42_828.372e9;

/// The Mars angular velocity, in rad/s.
pub const OMEGA: f64 = 7.088_218_1e-5;

/// The long name of the Mars ellipsoid.
pub const LONG_NAME: &str = "Mars Ellipsoid";

/// The reference for the Mars parameter values.
pub const REFERENCE: &str = "Ardalan, A. A., Karimi, R., & Grafarend, E. W. (2010). A New \
    Reference Equipotential Surface, and Reference Ellipsoid for the Planet Mars. \
    Earth, Moon, and Planets, 106, 1-13. doi:10.1007/s11038-009-9342-7";
