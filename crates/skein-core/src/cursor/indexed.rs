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
use crate::{error::CursorError, sequence::RandomAccess};

/// A cursor that walks a [`RandomAccess`] container by position.
///
/// The container is borrowed immutably for the cursor's lifetime, so its
/// length cannot change underneath the traversal.
///
/// # Examples
///
/// ```rust
/// # use skein_core::cursor::{Cursor, IndexedCursor};
/// let data = [1, 2, 3];
/// let slice: &[i32] = &data;
/// let mut c = IndexedCursor::new(&slice);
/// assert_eq!(c.next(), Ok(&1));
/// assert_eq!(c.position(), 1);
/// assert_eq!(c.size(), 2);
/// ```
#[derive(Debug)]
pub struct IndexedCursor<'s, R>
where
    R: RandomAccess + ?Sized,
{
    source: &'s R,
    position: usize,
}

impl<'s, R> IndexedCursor<'s, R>
where
    R: RandomAccess + ?Sized,
{
    /// Creates a new `IndexedCursor` positioned before the first item.
    #[inline]
    pub fn new(source: &'s R) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    /// Returns the index of the item the next call to `next` will yield.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }
}

impl<R> Clone for IndexedCursor<'_, R>
where
    R: RandomAccess + ?Sized,
{
    #[inline]
    fn clone(&self) -> Self {
        Self {
            source: self.source,
            position: self.position,
        }
    }
}

impl<R> Cursor for IndexedCursor<'_, R>
where
    R: RandomAccess + ?Sized,
{
    type Item = R::Item;

    #[inline]
    fn has_next(&mut self) -> bool {
        self.position < self.source.len()
    }

    #[inline]
    fn next(&mut self) -> Result<Self::Item, CursorError> {
        let item = self
            .source
            .at(self.position)
            .ok_or(CursorError::Exhausted)?;
        self.position += 1;
        Ok(item)
    }

    fn get(&mut self, index: usize) -> Result<Self::Item, CursorError> {
        let remaining = self.source.len().saturating_sub(self.position);
        if index >= remaining {
            self.position = self.source.len();
            return Err(CursorError::IndexOutOfBounds {
                index,
                len: remaining,
            });
        }

        self.position += index;
        self.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    #[test]
    fn test_indexed_cursor_walks_in_order() {
        let v = vec!['x', 'y'];
        let list = &v;
        let mut c = IndexedCursor::new(&list);
        assert!(c.has_next());
        assert_eq!(c.next(), Ok(&'x'));
        assert_eq!(c.next(), Ok(&'y'));
        assert!(!c.has_next());
        assert_eq!(c.next(), Err(CursorError::Exhausted));
    }

    #[test]
    fn test_indexed_cursor_get_matches_generic_semantics() {
        let d: VecDeque<u32> = (0..5).collect();
        let deque = &d;
        let mut c = IndexedCursor::new(&deque);
        assert_eq!(c.get(1), Ok(&1));
        assert_eq!(c.get(1), Ok(&3));
        assert_eq!(c.position(), 4);
        assert_eq!(
            c.get(3),
            Err(CursorError::IndexOutOfBounds { index: 3, len: 1 })
        );
        assert!(!c.has_next());
    }

    #[test]
    fn test_indexed_cursor_clone_has_independent_position() {
        let data = [1, 2, 3];
        let slice: &[i32] = &data;
        let mut a = IndexedCursor::new(&slice);
        a.next().unwrap();
        let mut b = a.clone();
        assert_eq!(a.next(), Ok(&2));
        assert_eq!(b.render(), "[2, 3]");
        assert_eq!(a.render(), "[3]");
    }
}
