// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use skein_core::error::CursorError;

/// Errors produced by [`Sampler`](crate::Sampler).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleError {
    /// The lower bound exceeds the upper bound, or a bound is not finite.
    InvalidRange,
    /// A choice was requested from an empty sequence.
    Empty,
    /// More items were requested than the sequence holds.
    SampleTooLarge { requested: usize, available: usize },
    /// Traversing the sequence failed.
    Sequence(CursorError),
}

impl std::fmt::Display for SampleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SampleError::InvalidRange => write!(f, "Invalid range: low must not exceed high"),
            SampleError::Empty => write!(f, "Cannot choose from an empty sequence"),
            SampleError::SampleTooLarge {
                requested,
                available,
            } => write!(
                f,
                "Sample larger than population: requested {} but only {} available",
                requested, available
            ),
            SampleError::Sequence(e) => write!(f, "Sequence error: {}", e),
        }
    }
}

impl std::error::Error for SampleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SampleError::Sequence(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CursorError> for SampleError {
    fn from(e: CursorError) -> Self {
        SampleError::Sequence(e)
    }
}
