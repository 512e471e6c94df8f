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

//! # Cursors
//!
//! Single-pass, position-advancing traversal over a sequence of items.
//! A [`Cursor`] exposes exactly two primitives, [`Cursor::has_next`] and
//! [`Cursor::next`], and every other operation in this module is derived
//! from them. Exhaustion is monotonic: once `has_next` reports `false` it
//! never reports `true` again, and `next` on an exhausted cursor fails with
//! [`CursorError::Exhausted`].
//!
//! ## Draining operations
//!
//! Aggregate queries such as [`Cursor::size`], [`Cursor::to_vec`] and
//! [`Cursor::render`] consume the cursor. [`Cursor::get`] advances it past
//! the requested index. A cursor that has been queried is therefore not the
//! cursor it was before; use a [`Sequence`] when repeatable access is needed.
//!
//! ## Absent cursors
//!
//! The free functions in this module take `Option<C>` and treat `None`
//! exactly like an exhausted cursor: `size(None) == 0`, `is_empty(None)`,
//! `render(None) == "[]"`. Normalization happens once through
//! [`MaybeCursor`].
//!
//! ## Usage
//!
//! ```rust
//! use skein_core::cursor::{self, Cursor, IterCursor};
//!
//! let mut c = IterCursor::new(["a", "b", "c"]);
//! assert_eq!(c.get(1), Ok("b"));
//! assert_eq!(c.render(), "[c]");
//!
//! assert_eq!(cursor::size(None::<IterCursor<std::vec::IntoIter<u8>>>), 0);
//! ```

pub mod empty;
pub mod indexed;
pub mod iter;
pub mod maybe;

pub use empty::EmptyCursor;
pub use indexed::IndexedCursor;
pub use iter::IterCursor;
pub use maybe::MaybeCursor;

use crate::{error::CursorError, sequence::Sequence};
use std::{fmt::Display, iter::FusedIterator};

/// The capacity hint used when collecting a cursor without an explicit one.
pub const DEFAULT_CAPACITY: usize = 10;

/// A type-erased cursor.
pub type BoxCursor<'a, T> = Box<dyn Cursor<Item = T> + 'a>;

/// A single-pass view over a sequence of items.
///
/// Implementors provide [`has_next`](Cursor::has_next) and
/// [`next`](Cursor::next); the remaining methods are derived.
///
/// `has_next` takes `&mut self` so that cursors backed by plain iterators
/// can look one item ahead. It must not change what the next call to
/// `next` returns, and repeated calls must agree with each other.
pub trait Cursor {
    /// The type of items produced by this cursor.
    type Item;

    /// Returns `true` if at least one more item is available.
    fn has_next(&mut self) -> bool;

    /// Returns the next item and advances by one.
    ///
    /// Fails with [`CursorError::Exhausted`] if [`has_next`](Cursor::has_next)
    /// would return `false`.
    fn next(&mut self) -> Result<Self::Item, CursorError>;

    /// Adapts the remaining items of this cursor into a standard iterator.
    ///
    /// The iterator ends at the first failing [`next`](Cursor::next) and
    /// keeps that error; see [`Drain::error`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use skein_core::cursor::{Cursor, IterCursor};
    /// let mut c = IterCursor::new(1..=4);
    /// let evens: Vec<_> = c.drain().filter(|x| x % 2 == 0).collect();
    /// assert_eq!(evens, vec![2, 4]);
    /// assert!(!c.has_next());
    /// ```
    #[inline]
    fn drain(&mut self) -> Drain<'_, Self>
    where
        Self: Sized,
    {
        Drain {
            cursor: self,
            error: None,
        }
    }

    /// Drains the cursor and returns the number of items seen.
    ///
    /// Counting stops at the first failing `next`.
    #[inline]
    fn size(&mut self) -> usize
    where
        Self: Sized,
    {
        self.drain().count()
    }

    /// Returns `true` if no items remain.
    #[inline]
    fn is_empty(&mut self) -> bool {
        !self.has_next()
    }

    /// Drains the cursor into a vector pre-sized to `capacity`.
    ///
    /// The capacity is a hint only; more or fewer items are both fine.
    /// A capacity of zero is rejected before any item is consumed. A failing
    /// `next` during the drain is returned as the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use skein_core::cursor::{Cursor, IterCursor};
    /// # use skein_core::error::CursorError;
    /// let mut c = IterCursor::new(vec![1, 2, 3]);
    /// assert_eq!(c.to_vec_with_capacity(0), Err(CursorError::InvalidCapacity(0)));
    /// assert_eq!(c.to_vec_with_capacity(1), Ok(vec![1, 2, 3]));
    /// ```
    fn to_vec_with_capacity(&mut self, capacity: usize) -> Result<Vec<Self::Item>, CursorError>
    where
        Self: Sized,
    {
        if capacity < 1 {
            return Err(CursorError::InvalidCapacity(capacity));
        }

        let mut items = Vec::with_capacity(capacity);
        let mut drain = self.drain();
        items.extend(&mut drain);
        match drain.into_error() {
            Some(e) => Err(e),
            None => Ok(items),
        }
    }

    /// Drains the cursor into a vector using [`DEFAULT_CAPACITY`] as hint.
    ///
    /// Collection stops at the first failing `next`.
    fn to_vec(&mut self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        let mut items = Vec::with_capacity(DEFAULT_CAPACITY);
        items.extend(self.drain());
        items
    }

    /// Drains the cursor into a fixed-size boxed slice.
    #[inline]
    fn to_array(&mut self) -> Box<[Self::Item]>
    where
        Self: Sized,
    {
        self.to_vec().into_boxed_slice()
    }

    /// Drains the cursor into a fixed-size boxed slice of `U`.
    ///
    /// The cursor is drained completely before any conversion happens.
    /// Fails with [`CursorError::IncompatibleItem`] naming the first item
    /// that does not convert.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use skein_core::cursor::{Cursor, IterCursor};
    /// # use skein_core::error::CursorError;
    /// let mut ok = IterCursor::new(vec![1i32, 2, 3]);
    /// assert_eq!(ok.to_array_as::<u8>().unwrap().into_vec(), vec![1u8, 2, 3]);
    ///
    /// let mut bad = IterCursor::new(vec![1i32, -2, 3]);
    /// assert!(matches!(
    ///     bad.to_array_as::<u8>(),
    ///     Err(CursorError::IncompatibleItem { index: 1, .. })
    /// ));
    /// ```
    fn to_array_as<U>(&mut self) -> Result<Box<[U]>, CursorError>
    where
        Self: Sized,
        U: TryFrom<Self::Item>,
    {
        self.to_vec()
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                U::try_from(item).map_err(|_| CursorError::IncompatibleItem {
                    index,
                    type_name: std::any::type_name::<U>(),
                })
            })
            .collect()
    }

    /// Returns the item `index` positions ahead, discarding the ones before.
    ///
    /// This advances the cursor `index + 1` times, so calling it twice with
    /// the same index yields different items. If the cursor runs out first
    /// the error reports how many items were seen, and those items are gone.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use skein_core::cursor::{Cursor, IterCursor};
    /// let mut c = IterCursor::new(['a', 'b', 'c']);
    /// assert_eq!(c.get(0), Ok('a'));
    /// assert_eq!(c.get(0), Ok('b'));
    /// ```
    fn get(&mut self, index: usize) -> Result<Self::Item, CursorError> {
        let mut seen = 0;
        while self.has_next() {
            let item = self.next()?;
            if seen == index {
                return Ok(item);
            }
            seen += 1;
        }
        Err(CursorError::IndexOutOfBounds { index, len: seen })
    }

    /// Shorthand for [`get(0)`](Cursor::get).
    #[inline]
    fn first(&mut self) -> Result<Self::Item, CursorError> {
        self.get(0)
    }

    /// Drains the cursor into `"[a, b, c]"`; an empty cursor renders `"[]"`.
    fn render(&mut self) -> String
    where
        Self: Sized,
        Self::Item: Display,
    {
        let mut out = String::from("[");
        for (i, item) in self.drain().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&item.to_string());
        }
        out.push(']');
        out
    }
}

impl<C> Cursor for &mut C
where
    C: Cursor + ?Sized,
{
    type Item = C::Item;

    #[inline]
    fn has_next(&mut self) -> bool {
        (**self).has_next()
    }

    #[inline]
    fn next(&mut self) -> Result<Self::Item, CursorError> {
        (**self).next()
    }
}

impl<C> Cursor for Box<C>
where
    C: Cursor + ?Sized,
{
    type Item = C::Item;

    #[inline]
    fn has_next(&mut self) -> bool {
        (**self).has_next()
    }

    #[inline]
    fn next(&mut self) -> Result<Self::Item, CursorError> {
        (**self).next()
    }
}

/// A standard iterator over the remaining items of a cursor.
///
/// Created by [`Cursor::drain`].
#[derive(Debug)]
pub struct Drain<'c, C>
where
    C: ?Sized,
{
    cursor: &'c mut C,
    error: Option<CursorError>,
}

impl<C> Drain<'_, C>
where
    C: ?Sized,
{
    /// Returns the error that ended the drain early, if any.
    ///
    /// A cursor that reports `has_next` but then fails in `next` breaks
    /// its contract. The drain stops there and keeps the error.
    #[inline]
    pub fn error(&self) -> Option<&CursorError> {
        self.error.as_ref()
    }

    /// Consumes the drain and returns the error that ended it, if any.
    #[inline]
    pub fn into_error(self) -> Option<CursorError> {
        self.error
    }
}

impl<C> Iterator for Drain<'_, C>
where
    C: Cursor + ?Sized,
{
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.error.is_some() || !self.cursor.has_next() {
            return None;
        }
        match self.cursor.next() {
            Ok(item) => Some(item),
            Err(e) => {
                self.error = Some(e);
                None
            }
        }
    }
}

impl<C> FusedIterator for Drain<'_, C> where C: Cursor + ?Sized {}

/// Returns a cursor over no items.
#[inline]
pub fn empty<T>() -> EmptyCursor<T> {
    EmptyCursor::new()
}

/// Drains `cursor` and counts its items. An absent cursor counts as zero.
#[inline]
pub fn size<C>(cursor: Option<C>) -> usize
where
    C: Cursor,
{
    MaybeCursor::new(cursor).size()
}

/// Returns `true` if `cursor` is absent or has no remaining items.
#[inline]
pub fn is_empty<C>(cursor: Option<C>) -> bool
where
    C: Cursor,
{
    MaybeCursor::new(cursor).is_empty()
}

/// Drains `cursor` into a vector. An absent cursor yields an empty vector.
#[inline]
pub fn to_vec<C>(cursor: Option<C>) -> Vec<C::Item>
where
    C: Cursor,
{
    MaybeCursor::new(cursor).to_vec()
}

/// Drains `cursor` into a vector pre-sized to `capacity`.
///
/// Unlike the other free functions this one requires a cursor: `None`
/// fails with [`CursorError::AbsentCursor`]. A zero capacity fails with
/// [`CursorError::InvalidCapacity`] before anything is consumed.
pub fn to_vec_with_capacity<C>(
    cursor: Option<C>,
    capacity: usize,
) -> Result<Vec<C::Item>, CursorError>
where
    C: Cursor,
{
    let mut cursor = cursor.ok_or(CursorError::AbsentCursor)?;
    cursor.to_vec_with_capacity(capacity)
}

/// Drains `cursor` into `"[a, b, c]"`. An absent cursor renders `"[]"`.
#[inline]
pub fn render<C>(cursor: Option<C>) -> String
where
    C: Cursor,
    C::Item: Display,
{
    MaybeCursor::new(cursor).render()
}

/// Wraps `cursor` in a single-use [`Sequence`].
///
/// The returned sequence hands out `cursor` on its first traversal and
/// fails with [`CursorError::SequenceConsumed`] on every later one. An
/// absent cursor becomes [`Sequence::Empty`], which is repeatable.
///
/// # Examples
///
/// ```rust
/// # use skein_core::cursor::{self, IterCursor};
/// # use skein_core::error::CursorError;
/// let seq = cursor::as_sequence(Some(IterCursor::new(vec![1, 2])));
/// assert_eq!(seq.len(), Ok(2));
/// assert_eq!(seq.len(), Err(CursorError::SequenceConsumed));
/// ```
pub fn as_sequence<'a, C>(cursor: Option<C>) -> Sequence<'a, C::Item>
where
    C: Cursor + 'a,
{
    match cursor {
        Some(c) => Sequence::once(c),
        None => Sequence::Empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type VecCursor<T> = IterCursor<std::vec::IntoIter<T>>;

    fn abc() -> VecCursor<char> {
        IterCursor::new(vec!['a', 'b', 'c'])
    }

    #[test]
    fn test_exhaustion_is_monotonic() {
        let mut c = IterCursor::new(vec![1]);
        assert!(c.has_next());
        assert_eq!(c.next(), Ok(1));
        for _ in 0..5 {
            assert!(!c.has_next());
        }
    }

    #[test]
    fn test_next_on_exhausted_cursor_fails() {
        let mut c = IterCursor::new(Vec::<i32>::new());
        assert_eq!(c.next(), Err(CursorError::Exhausted));
        assert_eq!(c.next(), Err(CursorError::Exhausted));
    }

    #[test]
    fn test_has_next_does_not_advance() {
        let mut c = abc();
        assert!(c.has_next());
        assert!(c.has_next());
        assert_eq!(c.next(), Ok('a'));
    }

    #[test]
    fn test_empty_cursor_aggregates() {
        assert_eq!(size(Some(empty::<u32>())), 0);
        assert!(is_empty(Some(empty::<u32>())));
        assert_eq!(render(Some(empty::<u32>())), "[]");
        assert!(to_vec(Some(empty::<u32>())).is_empty());
    }

    #[test]
    fn test_absent_cursor_aggregates_match_empty() {
        assert_eq!(size(None::<VecCursor<u32>>), 0);
        assert!(is_empty(None::<VecCursor<u32>>));
        assert_eq!(render(None::<VecCursor<u32>>), "[]");
        assert_eq!(to_vec(None::<VecCursor<u32>>), Vec::<u32>::new());
    }

    #[test]
    fn test_size_drains_cursor() {
        let mut c = abc();
        assert_eq!(c.size(), 3);
        assert!(!c.has_next());
        assert_eq!(c.size(), 0);
    }

    #[test]
    fn test_free_size_through_mutable_reference_leaves_cursor_drained() {
        let mut c = abc();
        assert_eq!(size(Some(&mut c)), 3);
        assert!(c.is_empty());
    }

    #[test]
    fn test_get_is_destructive() {
        let mut c = abc();
        assert_eq!(c.get(0), Ok('a'));
        assert_eq!(c.get(0), Ok('b'));
        assert_eq!(c.first(), Ok('c'));
        assert_eq!(
            c.first(),
            Err(CursorError::IndexOutOfBounds { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_get_skips_to_index() {
        let mut c = abc();
        assert_eq!(c.get(2), Ok('c'));
        assert!(!c.has_next());
    }

    #[test]
    fn test_get_out_of_range_consumes_and_reports_seen() {
        let mut c = abc();
        assert_eq!(
            c.get(5),
            Err(CursorError::IndexOutOfBounds { index: 5, len: 3 })
        );
        assert!(!c.has_next());
    }

    #[test]
    fn test_to_vec_with_capacity_rejects_zero_before_traversal() {
        let mut c = abc();
        assert_eq!(
            c.to_vec_with_capacity(0),
            Err(CursorError::InvalidCapacity(0))
        );
        assert_eq!(c.size(), 3);
    }

    #[test]
    fn test_to_vec_with_capacity_hint_is_not_a_limit() {
        let mut small = IterCursor::new(0..100);
        assert_eq!(small.to_vec_with_capacity(1).map(|v| v.len()), Ok(100));

        let mut large = IterCursor::new(0..2);
        assert_eq!(large.to_vec_with_capacity(1000), Ok(vec![0, 1]));
    }

    #[test]
    fn test_free_to_vec_with_capacity_requires_cursor() {
        assert_eq!(
            to_vec_with_capacity(None::<VecCursor<u8>>, 4),
            Err(CursorError::AbsentCursor)
        );
        assert_eq!(
            to_vec_with_capacity(Some(abc()), 0),
            Err(CursorError::InvalidCapacity(0))
        );
        assert_eq!(to_vec_with_capacity(Some(abc()), 2), Ok(vec!['a', 'b', 'c']));
    }

    #[test]
    fn test_to_array_round_trip_preserves_order() {
        let list = abc().to_vec();
        let array = IterCursor::new(list.clone()).to_array();
        let back = IterCursor::new(array.into_vec()).to_vec();
        assert_eq!(back, list);
    }

    #[test]
    fn test_to_array_as_converts_each_item() {
        let mut c = IterCursor::new(vec![1u64, 2, 300]);
        assert_eq!(
            c.to_array_as::<u8>(),
            Err(CursorError::IncompatibleItem {
                index: 2,
                type_name: "u8"
            })
        );
        assert!(!c.has_next());

        let mut c = IterCursor::new(vec![1u8, 2]);
        assert_eq!(c.to_array_as::<u64>().map(|a| a.into_vec()), Ok(vec![1, 2]));
    }

    #[test]
    fn test_render_formats_items() {
        assert_eq!(IterCursor::new(vec![1, 2, 3]).render(), "[1, 2, 3]");
        assert_eq!(IterCursor::new(vec!["x"]).render(), "[x]");
    }

    #[test]
    fn test_render_drains() {
        let mut c = abc();
        c.next().unwrap();
        assert_eq!(c.render(), "[b, c]");
        assert_eq!(c.render(), "[]");
    }

    #[test]
    fn test_boxed_cursor_delegates() {
        let mut boxed: BoxCursor<'_, char> = Box::new(abc());
        assert!(boxed.has_next());
        assert_eq!(boxed.get(1), Ok('b'));
        assert_eq!(boxed.render(), "[c]");
    }

    #[test]
    fn test_drain_is_fused() {
        let mut c = abc();
        let mut it = c.drain();
        assert_eq!(it.by_ref().count(), 3);
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    /// Reports more items than it can deliver: `next` fails after `ok` items.
    struct Overpromising {
        ok: usize,
        served: usize,
    }

    impl Cursor for Overpromising {
        type Item = usize;

        fn has_next(&mut self) -> bool {
            true
        }

        fn next(&mut self) -> Result<usize, CursorError> {
            if self.served == self.ok {
                return Err(CursorError::Exhausted);
            }
            self.served += 1;
            Ok(self.served)
        }
    }

    #[test]
    fn test_drain_stops_at_first_failure_and_keeps_error() {
        let mut c = Overpromising { ok: 2, served: 0 };
        let mut it = c.drain();
        assert_eq!(it.by_ref().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(it.error(), Some(&CursorError::Exhausted));
        assert_eq!(it.next(), None);
        assert_eq!(it.into_error(), Some(CursorError::Exhausted));
    }

    #[test]
    fn test_failing_next_is_reported_by_checked_collection() {
        let mut c = Overpromising { ok: 2, served: 0 };
        assert_eq!(c.to_vec_with_capacity(4), Err(CursorError::Exhausted));

        let mut c = Overpromising { ok: 2, served: 0 };
        assert_eq!(c.get(5), Err(CursorError::Exhausted));

        let mut c = Overpromising { ok: 2, served: 0 };
        assert_eq!(c.size(), 2);
    }

    #[test]
    fn test_clean_drain_has_no_error() {
        let mut c = abc();
        let mut it = c.drain();
        assert_eq!(it.by_ref().count(), 3);
        assert!(it.error().is_none());
    }

    #[test]
    fn test_boxed_cursor_supports_draining_operations() {
        let mut boxed: BoxCursor<'_, char> = Box::new(abc());
        assert_eq!(boxed.to_vec_with_capacity(1), Ok(vec!['a', 'b', 'c']));

        let mut boxed: BoxCursor<'_, char> = Box::new(abc());
        assert_eq!(boxed.size(), 3);

        let mut boxed: BoxCursor<'_, u8> = Box::new(IterCursor::new(vec![1u8, 2]));
        assert_eq!(boxed.to_array().into_vec(), vec![1, 2]);
        assert!(boxed.drain().next().is_none());
    }

    #[test]
    fn test_as_sequence_absent_is_empty_sequence() {
        let seq = as_sequence(None::<VecCursor<u8>>);
        assert!(matches!(seq, Sequence::Empty));
        assert_eq!(seq.len(), Ok(0));
        assert_eq!(seq.len(), Ok(0));
    }

    #[test]
    fn test_as_sequence_is_single_use() {
        let seq = as_sequence(Some(abc()));
        assert_eq!(seq.render(), Ok("[a, b, c]".to_string()));
        assert_eq!(seq.render(), Err(CursorError::SequenceConsumed));
        assert_eq!(seq.get(0), Err(CursorError::SequenceConsumed));
    }
}
