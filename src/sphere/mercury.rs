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

//! The mercury module contains the parameters of the Mercury reference sphere.

use crate::Metres;

/// The mean radius of Mercury, in metres.
pub const RADIUS: Metres = Metres(2_439_372.0);

/// The geocentric gravitational constant of Mercury, in m³/s².
pub const GM: f64 = 22.031_839_224e12;

/// The angular velocity of Mercury, in rad/s.
pub const OMEGA: f64 = 1.240_017_258_9e-6;

/// The long name of the Mercury sphere.
pub const LONG_NAME: &str = "Mercury Spheroid";

/// The reference for the Mercury parameter values.
pub const REFERENCE: &str = "Wieczorek, M. A. (2015). Gravity and Topography of the Terrestrial \
    Planets. In Treatise on Geophysics (pp. 153-193). Elsevier. \
    doi:10.1016/b978-0-444-53802-4.00169-x";
