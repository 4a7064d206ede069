// Copyright (c) 2024-2025 Ken Barker

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

//! Errors returned by the fallible constructors of the crate.

use thiserror::Error;

/// An error constructing an `Ellipsoid`.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum Error {
    /// The name is not one of the `ReferenceEllipsoid`s.
    #[error("unknown reference ellipsoid")]
    UnknownEllipsoid,
    /// The Semimajor axis is not finite and positive.
    #[error("invalid semimajor axis: {0} metres")]
    InvalidSemimajorAxis(f64),
    /// The flattening is not in the range [0, 1).
    #[error("invalid flattening: {0}")]
    InvalidFlattening(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            "unknown reference ellipsoid",
            Error::UnknownEllipsoid.to_string()
        );
        assert_eq!(
            "invalid semimajor axis: -1 metres",
            Error::InvalidSemimajorAxis(-1.0).to_string()
        );
        assert_eq!(
            "invalid flattening: 1.5",
            Error::InvalidFlattening(1.5).to_string()
        );
    }
}
