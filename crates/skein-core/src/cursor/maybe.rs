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

//! # Optional Cursor Wrapper
//!
//! `MaybeCursor<C>` wraps an `Option<C>` and exposes the [`Cursor`]
//! interface. When the inner cursor is `None` it behaves exactly like an
//! exhausted cursor; when it is `Some(C)` it forwards every call.
//!
//! This is the single point where absent cursors are normalized. The free
//! functions in [`crate::cursor`] wrap their argument once and never branch
//! on presence again.
//!
//! ## Usage
//!
//! ```rust
//! use skein_core::cursor::{Cursor, IterCursor, MaybeCursor};
//!
//! let mut present = MaybeCursor::new(Some(IterCursor::new(vec![1, 2, 3])));
//! let mut absent: MaybeCursor<IterCursor<std::vec::IntoIter<i32>>> = MaybeCursor::new(None);
//!
//! assert_eq!(present.to_vec(), vec![1, 2, 3]);
//! assert_eq!(absent.to_vec(), Vec::<i32>::new());
//! ```

use super::Cursor;
use crate::error::CursorError;

/// A cursor that may or may not be present.
///
/// # Examples
///
/// ```rust
/// # use skein_core::cursor::{Cursor, IterCursor, MaybeCursor};
/// # use skein_core::error::CursorError;
/// let mut none: MaybeCursor<IterCursor<std::ops::Range<u8>>> = MaybeCursor::new(None);
///
/// assert!(none.is_absent());
/// assert!(!none.has_next());
/// assert_eq!(none.next(), Err(CursorError::Exhausted));
/// ```
#[derive(Debug, Clone)]
pub struct MaybeCursor<C> {
    inner: Option<C>,
}

impl<C> MaybeCursor<C> {
    /// Creates a new `MaybeCursor` from an optional cursor.
    #[inline]
    pub fn new(inner: Option<C>) -> Self {
        Self { inner }
    }

    /// Returns `true` if no cursor is wrapped.
    #[inline]
    pub fn is_absent(&self) -> bool {
        self.inner.is_none()
    }

    /// Consumes the wrapper and returns the inner cursor, if any.
    #[inline]
    pub fn into_inner(self) -> Option<C> {
        self.inner
    }
}

impl<C> Default for MaybeCursor<C> {
    #[inline]
    fn default() -> Self {
        Self::new(None)
    }
}

impl<C> From<Option<C>> for MaybeCursor<C> {
    #[inline]
    fn from(inner: Option<C>) -> Self {
        Self::new(inner)
    }
}

impl<C: Cursor> Cursor for MaybeCursor<C> {
    type Item = C::Item;

    #[inline]
    fn has_next(&mut self) -> bool {
        self.inner.as_mut().is_some_and(|c| c.has_next())
    }

    #[inline]
    fn next(&mut self) -> Result<Self::Item, CursorError> {
        self.inner.as_mut().ok_or(CursorError::Exhausted)?.next()
    }
}
