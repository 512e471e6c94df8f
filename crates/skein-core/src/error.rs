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

//! Error type shared by the cursor and sequence layers.
//!
//! Every failure in the traversal layer is a caller-side contract violation
//! that is surfaced at the call that detects it. Nothing here is retried or
//! swallowed; absent inputs to aggregate queries are not errors at all and
//! never reach this type.

/// The error type for cursor and sequence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CursorError {
    /// `next` was called on a cursor that has no remaining items.
    Exhausted,
    /// An index outside `0..len` was requested.
    ///
    /// For cursor-backed lookups `len` is the number of items that were
    /// seen before the cursor ran dry.
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// The number of items available.
        len: usize,
    },
    /// A capacity hint below 1 was passed to a collecting operation.
    InvalidCapacity(usize),
    /// An absent cursor was passed to an operation that requires one.
    AbsentCursor,
    /// An item could not be converted into the requested element type.
    IncompatibleItem {
        /// The traversal position of the offending item.
        index: usize,
        /// The name of the requested element type.
        type_name: &'static str,
    },
    /// A single-use sequence was traversed a second time.
    SequenceConsumed,
}

impl std::fmt::Display for CursorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exhausted => write!(f, "Cursor has no remaining items"),
            Self::IndexOutOfBounds { index, len } => write!(
                f,
                "Index out of bounds: the len is {} but the index is {}",
                len, index
            ),
            Self::InvalidCapacity(capacity) => write!(
                f,
                "Estimated capacity must be greater than 0, got {}",
                capacity
            ),
            Self::AbsentCursor => write!(f, "Operation requires a cursor but none was given"),
            Self::IncompatibleItem { index, type_name } => write!(
                f,
                "Item at position {} cannot be stored as type {}",
                index, type_name
            ),
            Self::SequenceConsumed => {
                write!(f, "Single-use sequence has already been traversed")
            }
        }
    }
}

impl std::error::Error for CursorError {}
