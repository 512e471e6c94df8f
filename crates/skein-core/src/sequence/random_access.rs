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

use std::collections::VecDeque;

/// A sized container with direct positional lookup.
///
/// Implemented for shared references to slices, vectors and deques, so a
/// [`Sequence`](super::Sequence) built from one borrows the caller's data
/// and yields references into it.
///
/// # Examples
///
/// ```rust
/// # use skein_core::sequence::RandomAccess;
/// let v = vec![10, 20];
/// let list = &v;
/// assert_eq!(list.at(1), Some(&20));
/// assert_eq!(list.at(2), None);
/// assert_eq!(RandomAccess::len(&list), 2);
/// ```
pub trait RandomAccess {
    /// The type of item returned by a lookup.
    type Item;

    /// Returns the number of items.
    fn len(&self) -> usize;

    /// Returns `true` if the container holds no items.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the item at `index`, or `None` if `index >= len()`.
    fn at(&self, index: usize) -> Option<Self::Item>;
}

impl<'a, T> RandomAccess for &'a [T] {
    type Item = &'a T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn at(&self, index: usize) -> Option<&'a T> {
        (*self).get(index)
    }
}

impl<'a, T> RandomAccess for &'a Vec<T> {
    type Item = &'a T;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn at(&self, index: usize) -> Option<&'a T> {
        (*self).as_slice().get(index)
    }
}

impl<'a, T> RandomAccess for &'a VecDeque<T> {
    type Item = &'a T;

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn at(&self, index: usize) -> Option<&'a T> {
        VecDeque::get(*self, index)
    }
}
