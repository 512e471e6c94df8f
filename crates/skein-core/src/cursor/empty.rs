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

use super::Cursor;
use crate::error::CursorError;

/// A cursor over no items.
///
/// [`has_next`](Cursor::has_next) is always `false` and
/// [`next`](Cursor::next) always fails with [`CursorError::Exhausted`].
/// This is the stand-in for "no data" across the crate.
///
/// # Examples
///
/// ```rust
/// # use skein_core::cursor::{Cursor, EmptyCursor};
/// let mut c = EmptyCursor::<String>::new();
/// assert!(!c.has_next());
/// assert_eq!(c.render(), "[]");
/// ```
pub struct EmptyCursor<T> {
    _marker: std::marker::PhantomData<fn() -> T>,
}

impl<T> EmptyCursor<T> {
    /// Creates a new `EmptyCursor`.
    #[inline(always)]
    pub const fn new() -> Self {
        Self {
            _marker: std::marker::PhantomData,
        }
    }
}

impl<T> Default for EmptyCursor<T> {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for EmptyCursor<T> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for EmptyCursor<T> {}

impl<T> std::fmt::Debug for EmptyCursor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EmptyCursor")
    }
}

impl<T> Cursor for EmptyCursor<T> {
    type Item = T;

    #[inline(always)]
    fn has_next(&mut self) -> bool {
        false
    }

    #[inline(always)]
    fn next(&mut self) -> Result<T, CursorError> {
        Err(CursorError::Exhausted)
    }
}
