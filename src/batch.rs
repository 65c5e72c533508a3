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

//! The batch module applies scalar queries to slices of inputs.
//!
//! Every query on a model takes a single value. The functions in this module
//! evaluate a query for each element of a slice and return a `Vec` with one
//! result per element, in order. The first error stops the evaluation.

use crate::Error;
use alloc::vec::Vec;

/// Elementwise evaluation of a fallible function over a slice.
pub trait Elementwise<T> {
    /// Apply `f` to each element.
    /// * `f` - the function to apply.
    ///
    /// returns the results, one per element.
    /// # Errors
    /// The first error returned by `f`.
    ///
    /// # Examples
    /// ```
    /// use boule::batch::Elementwise;
    /// use boule::{Degrees, WGS84_ELLIPSOID};
    ///
    /// let lats = [Degrees(0.0), Degrees(45.0), Degrees(90.0)];
    /// let radii = lats
    ///     .as_slice()
    ///     .try_elementwise(|lat| WGS84_ELLIPSOID.prime_vertical_radius(*lat))
    ///     .unwrap();
    /// assert_eq!(3, radii.len());
    /// assert_eq!(WGS84_ELLIPSOID.a(), radii[0]);
    /// ```
    fn try_elementwise<U, F>(&self, f: F) -> Result<Vec<U>, Error>
    where
        F: FnMut(&T) -> Result<U, Error>;
}

impl<T> Elementwise<T> for [T] {
    fn try_elementwise<U, F>(&self, f: F) -> Result<Vec<U>, Error>
    where
        F: FnMut(&T) -> Result<U, Error>,
    {
        self.iter().map(f).collect()
    }
}

/// Evaluate a fallible function over each pair of elements of two slices.
///
/// A slice with a single element is broadcast against the other slice,
/// otherwise the slices must have the same length.
/// * `left`, `right` - the arguments.
/// * `f` - the function to apply.
///
/// returns the results, one per pair.
/// # Errors
/// `Error::Shape` if the slices cannot be broadcast together, otherwise the
/// first error returned by `f`.
pub fn broadcast<A, B, U, F>(left: &[A], right: &[B], mut f: F) -> Result<Vec<U>, Error>
where
    F: FnMut(&A, &B) -> Result<U, Error>,
{
    match (left, right) {
        (_, [y]) => left.iter().map(|x| f(x, y)).collect(),
        ([x], _) => right.iter().map(|y| f(x, y)).collect(),
        _ if left.len() == right.len() => left.iter().zip(right).map(|(x, y)| f(x, y)).collect(),
        _ => Err(Error::Shape {
            left: left.len(),
            right: right.len(),
        }),
    }
}
