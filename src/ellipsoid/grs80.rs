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

//! The grs80 module contains the primary parameters of the Geodetic
//! Reference System 1980, from H. Moritz,
//! [Geodetic Reference System 1980](https://doi.org/10.1007/s001900050278).

use crate::Metres;

/// The GRS 80 Semimajor axis measured in metres.
pub const A: Metres = Metres(6_378_137.0);

/// The GRS 80 flattening, a ratio.  
/// GRS 80 is defined by its dynamic form factor, this is the derived value.
pub const F: f64 = 1.0 / 298.257_222_101;

/// The GRS 80 geocentric gravitational constant, in m³/s².
pub const GM: f64 = 3.986_005e14;

/// The GRS 80 angular velocity of the Earth, in rad/s.
pub const OMEGA: f64 = 7.292_115e-5;

/// The long name of the GRS 80 ellipsoid.
pub const LONG_NAME: &str = "Geodetic Reference System (1980)";

/// The reference for the GRS 80 parameter values.
pub const REFERENCE: &str = "Hofmann-Wellenhof, B., & Moritz, H. (2006). Physical Geodesy \
    (2nd, corr. ed. 2006 edition ed.). Wien ; New York: Springer.";
