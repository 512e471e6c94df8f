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
use std::iter::{Fuse, Peekable};

/// A one-shot cursor over any standard iterator.
///
/// The wrapped iterator is fused, so exhaustion is monotonic even for
/// iterators that would resume after returning `None`, and peekable, so
/// [`has_next`](Cursor::has_next) can answer without losing an item.
///
/// # Examples
///
/// ```rust
/// # use skein_core::cursor::{Cursor, IterCursor};
/// let mut c = IterCursor::new("to be or not".split_whitespace());
/// assert!(c.has_next());
/// assert_eq!(c.next(), Ok("to"));
/// assert_eq!(c.size(), 3);
/// ```
pub struct IterCursor<I>
where
    I: Iterator,
{
    inner: Peekable<Fuse<I>>,
}

impl<I> IterCursor<I>
where
    I: Iterator,
{
    /// Creates a new `IterCursor` from anything that can be iterated.
    #[inline]
    pub fn new<T>(iterable: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            inner: iterable.into_iter().fuse().peekable(),
        }
    }
}

impl<I> From<I> for IterCursor<I>
where
    I: Iterator,
{
    #[inline]
    fn from(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<I> std::fmt::Debug for IterCursor<I>
where
    I: Iterator,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IterCursor").finish_non_exhaustive()
    }
}

impl<I> Cursor for IterCursor<I>
where
    I: Iterator,
{
    type Item = I::Item;

    #[inline]
    fn has_next(&mut self) -> bool {
        self.inner.peek().is_some()
    }

    #[inline]
    fn next(&mut self) -> Result<Self::Item, CursorError> {
        self.inner.next().ok_or(CursorError::Exhausted)
    }
}
