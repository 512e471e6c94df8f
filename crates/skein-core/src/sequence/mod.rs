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

//! # Sequences
//!
//! A [`Sequence`] is a possibly repeatable view over items that can hand out
//! fresh [`Cursor`]s on demand. It is a closed set of variants:
//!
//! - [`Sequence::Empty`]: no items.
//! - [`Sequence::Indexed`]: a sized [`RandomAccess`] container. Size,
//!   emptiness and lookups are answered directly without creating a cursor.
//! - [`Sequence::Source`]: a cursor factory. Every query drains or advances
//!   a freshly created cursor.
//! - [`Sequence::Once`]: a single cursor wrapped as a sequence. The first
//!   traversal takes the cursor and every later one fails with
//!   [`CursorError::SequenceConsumed`].
//!
//! Queries never mutate the sequence or the data behind it. Calling
//! [`Sequence::len`], [`Sequence::get`] or [`Sequence::render`] repeatedly
//! gives the same answer, except on `Once`.
//!
//! The free functions accept `Option<&Sequence>` and treat `None` as
//! [`Sequence::Empty`].
//!
//! ## Usage
//!
//! ```rust
//! use skein_core::sequence::{self, Sequence};
//!
//! let data = vec![1, 2, 3];
//! let seq = Sequence::from_slice(&data);
//!
//! assert_eq!(seq.len(), Ok(3));
//! assert_eq!(seq.get(1), Ok(&2));
//! assert_eq!(seq.get(1), Ok(&2));
//! assert_eq!(seq.render().unwrap(), "[1, 2, 3]");
//!
//! assert_eq!(sequence::size::<i32>(None), Ok(0));
//! ```

pub mod random_access;

pub use random_access::RandomAccess;

use crate::{
    cursor::{self, BoxCursor, Cursor, IndexedCursor, IterCursor},
    error::CursorError,
};
use std::{cell::RefCell, fmt::Display};

/// A possibly repeatable view over items of type `T`.
///
/// See the [module documentation](self) for the variants.
pub enum Sequence<'a, T> {
    /// A sequence with no items.
    Empty,
    /// A sized container with direct lookup.
    Indexed(Box<dyn RandomAccess<Item = T> + 'a>),
    /// A factory producing a fresh cursor per traversal.
    Source(Box<dyn Fn() -> BoxCursor<'a, T> + 'a>),
    /// A single cursor that can be traversed once.
    Once(RefCell<Option<BoxCursor<'a, T>>>),
}

impl<'a, T> Sequence<'a, T> {
    /// Creates an empty sequence.
    #[inline]
    pub fn empty() -> Self {
        Self::Empty
    }

    /// Creates a sequence over a random-access container.
    #[inline]
    pub fn from_random_access<R>(container: R) -> Self
    where
        R: RandomAccess<Item = T> + 'a,
    {
        Self::Indexed(Box::new(container))
    }

    /// Creates a sequence that calls `factory` for every traversal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use skein_core::cursor::IterCursor;
    /// # use skein_core::sequence::Sequence;
    /// let seq = Sequence::from_fn(|| IterCursor::new(0..4));
    /// assert_eq!(seq.len(), Ok(4));
    /// assert_eq!(seq.get(3), Ok(3));
    /// assert_eq!(seq.get(3), Ok(3));
    /// ```
    pub fn from_fn<F, C>(factory: F) -> Self
    where
        F: Fn() -> C + 'a,
        C: Cursor<Item = T> + 'a,
    {
        Self::Source(Box::new(move || Box::new(factory()) as BoxCursor<'a, T>))
    }

    /// Creates a sequence that re-iterates `iterable` for every traversal.
    ///
    /// Use this for collections without positional lookup, for example a
    /// borrowed `LinkedList` or `BTreeSet`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use skein_core::sequence::Sequence;
    /// # use std::collections::LinkedList;
    /// let list: LinkedList<&str> = ["a", "b"].into_iter().collect();
    /// let seq = Sequence::from_iterable(&list);
    /// assert_eq!(seq.len(), Ok(2));
    /// assert_eq!(seq.first(), Ok(&"a"));
    /// ```
    pub fn from_iterable<I>(iterable: I) -> Self
    where
        I: IntoIterator<Item = T> + Clone + 'a,
    {
        Self::from_fn(move || IterCursor::new(iterable.clone()))
    }

    /// Wraps a cursor as a single-use sequence.
    #[inline]
    pub fn once<C>(cursor: C) -> Self
    where
        C: Cursor<Item = T> + 'a,
    {
        Self::Once(RefCell::new(Some(Box::new(cursor))))
    }

    /// Returns the number of items if it is known without traversal.
    #[inline]
    pub fn known_len(&self) -> Option<usize> {
        match self {
            Self::Empty => Some(0),
            Self::Indexed(container) => Some(container.len()),
            Self::Source(_) | Self::Once(_) => None,
        }
    }

    /// Returns `true` for sequences that support only one traversal.
    #[inline]
    pub fn is_single_use(&self) -> bool {
        matches!(self, Self::Once(_))
    }

    /// Returns `true` if this is a single-use sequence whose cursor has
    /// already been taken.
    #[inline]
    pub fn is_consumed(&self) -> bool {
        match self {
            Self::Once(slot) => slot.borrow().is_none(),
            _ => false,
        }
    }

    /// Returns a fresh cursor positioned before the first item.
    ///
    /// Fails with [`CursorError::SequenceConsumed`] on a single-use sequence
    /// that has already been traversed.
    pub fn cursor(&self) -> Result<BoxCursor<'_, T>, CursorError> {
        match self {
            Self::Empty => Ok(Box::new(cursor::empty())),
            Self::Indexed(container) => Ok(Box::new(IndexedCursor::new(&**container))),
            Self::Source(factory) => Ok(factory()),
            Self::Once(slot) => slot.borrow_mut().take().ok_or(CursorError::SequenceConsumed),
        }
    }

    /// Returns the number of items.
    ///
    /// Indexed sequences answer directly; others drain a fresh cursor.
    pub fn len(&self) -> Result<usize, CursorError> {
        match self.known_len() {
            Some(len) => Ok(len),
            None => Ok(self.cursor()?.size()),
        }
    }

    /// Returns `true` if the sequence has no items.
    ///
    /// A single-use sequence is inspected in place and stays traversable.
    pub fn is_empty(&self) -> Result<bool, CursorError> {
        match self {
            Self::Empty => Ok(true),
            Self::Indexed(container) => Ok(container.is_empty()),
            Self::Source(factory) => Ok(factory().is_empty()),
            Self::Once(slot) => slot
                .borrow_mut()
                .as_mut()
                .map(|cursor| cursor.is_empty())
                .ok_or(CursorError::SequenceConsumed),
        }
    }

    /// Collects the items into a vector in traversal order.
    pub fn to_vec(&self) -> Result<Vec<T>, CursorError> {
        match self {
            Self::Empty => Ok(Vec::new()),
            Self::Indexed(container) => Ok((0..container.len())
                .filter_map(|i| container.at(i))
                .collect()),
            _ => Ok(self.cursor()?.to_vec()),
        }
    }

    /// Returns the item at `index`.
    ///
    /// Indexed sequences look the item up directly. Other sequences advance
    /// a fresh cursor, which is discarded afterwards; the sequence itself is
    /// left untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use skein_core::sequence::Sequence;
    /// # use skein_core::error::CursorError;
    /// let data = ["a", "b"];
    /// let seq = Sequence::from_slice(&data);
    /// assert_eq!(seq.get(1), Ok(&"b"));
    /// assert_eq!(seq.get(2), Err(CursorError::IndexOutOfBounds { index: 2, len: 2 }));
    /// ```
    pub fn get(&self, index: usize) -> Result<T, CursorError> {
        match self {
            Self::Empty => Err(CursorError::IndexOutOfBounds { index, len: 0 }),
            Self::Indexed(container) => {
                container
                    .at(index)
                    .ok_or_else(|| CursorError::IndexOutOfBounds {
                        index,
                        len: container.len(),
                    })
            }
            _ => self.cursor()?.get(index),
        }
    }

    /// Shorthand for [`get(0)`](Sequence::get).
    #[inline]
    pub fn first(&self) -> Result<T, CursorError> {
        self.get(0)
    }

    /// Returns the items at each of `indices`, in the order given.
    ///
    /// Fails on the first index that is out of range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use skein_core::sequence::Sequence;
    /// let data = [10, 20, 30, 40];
    /// let seq = Sequence::from_slice(&data);
    /// assert_eq!(seq.get_all(&[3, 0, 3]), Ok(vec![&40, &10, &40]));
    /// ```
    pub fn get_all(&self, indices: &[usize]) -> Result<Vec<T>, CursorError> {
        indices.iter().map(|&index| self.get(index)).collect()
    }

    /// Renders the items as `"[a, b, c]"`; an empty sequence renders `"[]"`.
    pub fn render(&self) -> Result<String, CursorError>
    where
        T: Display,
    {
        Ok(self.cursor()?.render())
    }
}

impl<'a, T> Sequence<'a, &'a T> {
    /// Creates a sequence borrowing `slice`.
    #[inline]
    pub fn from_slice(slice: &'a [T]) -> Self {
        Self::from_random_access(slice)
    }
}

impl<T> Default for Sequence<'_, T> {
    #[inline]
    fn default() -> Self {
        Self::Empty
    }
}

impl<'a, T> From<&'a [T]> for Sequence<'a, &'a T> {
    #[inline]
    fn from(slice: &'a [T]) -> Self {
        Self::from_slice(slice)
    }
}

impl<'a, T> From<&'a Vec<T>> for Sequence<'a, &'a T> {
    #[inline]
    fn from(list: &'a Vec<T>) -> Self {
        Self::from_random_access(list)
    }
}

impl<T> std::fmt::Debug for Sequence<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "Sequence::Empty"),
            Self::Indexed(container) => f
                .debug_struct("Sequence::Indexed")
                .field("len", &container.len())
                .finish(),
            Self::Source(_) => write!(f, "Sequence::Source"),
            Self::Once(_) => f
                .debug_struct("Sequence::Once")
                .field("consumed", &self.is_consumed())
                .finish(),
        }
    }
}

/// Returns an empty sequence.
#[inline]
pub fn empty<'a, T>() -> Sequence<'a, T> {
    Sequence::Empty
}

/// Returns `sequence` itself, or an empty sequence when it is absent.
///
/// # Examples
///
/// ```rust
/// # use skein_core::sequence::{self, Sequence};
/// let data = [1, 2];
/// assert_eq!(sequence::empty_if_null(Some(Sequence::from_slice(&data))).len(), Ok(2));
/// assert!(matches!(sequence::empty_if_null::<u8>(None), Sequence::Empty));
/// ```
#[inline]
pub fn empty_if_null<'a, T>(sequence: Option<Sequence<'a, T>>) -> Sequence<'a, T> {
    sequence.unwrap_or_default()
}

/// Returns a fresh cursor over `sequence`, or an empty cursor when it is absent.
pub fn cursor_or_empty<'s, T>(
    sequence: Option<&'s Sequence<'_, T>>,
) -> Result<BoxCursor<'s, T>, CursorError> {
    match sequence {
        Some(sequence) => sequence.cursor(),
        None => Ok(Box::new(cursor::empty())),
    }
}

/// Returns the number of items. An absent sequence has none.
#[inline]
pub fn size<T>(sequence: Option<&Sequence<'_, T>>) -> Result<usize, CursorError> {
    let empty = Sequence::Empty;
    sequence.unwrap_or(&empty).len()
}

/// Returns `true` if `sequence` is absent or has no items.
#[inline]
pub fn is_empty<T>(sequence: Option<&Sequence<'_, T>>) -> Result<bool, CursorError> {
    let empty = Sequence::Empty;
    sequence.unwrap_or(&empty).is_empty()
}

/// Collects the items into a vector. An absent sequence yields an empty one.
#[inline]
pub fn to_vec<T>(sequence: Option<&Sequence<'_, T>>) -> Result<Vec<T>, CursorError> {
    let empty = Sequence::Empty;
    sequence.unwrap_or(&empty).to_vec()
}

/// Returns the item at `index`. Every index is out of range for an absent sequence.
#[inline]
pub fn get<T>(sequence: Option<&Sequence<'_, T>>, index: usize) -> Result<T, CursorError> {
    let empty = Sequence::Empty;
    sequence.unwrap_or(&empty).get(index)
}

/// Shorthand for [`get(sequence, 0)`](get).
#[inline]
pub fn first<T>(sequence: Option<&Sequence<'_, T>>) -> Result<T, CursorError> {
    get(sequence, 0)
}

/// Renders the items as `"[a, b, c]"`. An absent sequence renders `"[]"`.
#[inline]
pub fn render<T>(sequence: Option<&Sequence<'_, T>>) -> Result<String, CursorError>
where
    T: Display,
{
    let empty = Sequence::Empty;
    sequence.unwrap_or(&empty).render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        cell::Cell,
        collections::{BTreeSet, LinkedList, VecDeque},
    };

    #[test]
    fn test_empty_sequence_aggregates() {
        let seq: Sequence<'_, u8> = Sequence::empty();
        assert_eq!(seq.len(), Ok(0));
        assert_eq!(seq.is_empty(), Ok(true));
        assert_eq!(seq.to_vec(), Ok(vec![]));
        assert_eq!(seq.render(), Ok("[]".to_string()));
        assert_eq!(
            seq.first(),
            Err(CursorError::IndexOutOfBounds { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_absent_sequence_matches_empty() {
        assert_eq!(size::<u8>(None), Ok(0));
        assert_eq!(is_empty::<u8>(None), Ok(true));
        assert_eq!(to_vec::<u8>(None), Ok(vec![]));
        assert_eq!(render::<u8>(None), Ok("[]".to_string()));
        assert_eq!(
            get::<u8>(None, 0),
            Err(CursorError::IndexOutOfBounds { index: 0, len: 0 })
        );
        assert_eq!(cursor_or_empty::<u8>(None).map(|mut c| c.size()), Ok(0));
    }

    #[test]
    fn test_indexed_get_is_repeatable_and_bounded() {
        let data = vec![1, 2, 3];
        let seq = Sequence::from(&data);
        for _ in 0..3 {
            assert_eq!(seq.get(0), Ok(&1));
            assert_eq!(seq.get(2), Ok(&3));
        }
        assert_eq!(
            seq.get(3),
            Err(CursorError::IndexOutOfBounds { index: 3, len: 3 })
        );
        assert_eq!(
            seq.get(usize::MAX),
            Err(CursorError::IndexOutOfBounds {
                index: usize::MAX,
                len: 3
            })
        );
    }

    #[test]
    fn test_indexed_queries_do_not_create_cursors() {
        let data = [5, 6, 7];
        let seq = Sequence::from_slice(&data);
        assert_eq!(seq.known_len(), Some(3));
        assert_eq!(seq.len(), Ok(3));
        assert_eq!(seq.is_empty(), Ok(false));
        assert_eq!(seq.get(1), Ok(&6));
    }

    #[test]
    fn test_source_creates_one_cursor_per_query() {
        let created = Cell::new(0);
        let data = [1, 2, 3];
        let seq = Sequence::from_fn(|| {
            created.set(created.get() + 1);
            IterCursor::new(data.iter())
        });

        assert_eq!(seq.known_len(), None);
        assert_eq!(seq.len(), Ok(3));
        assert_eq!(seq.len(), Ok(3));
        assert_eq!(seq.get(1), Ok(&2));
        assert_eq!(seq.get(1), Ok(&2));
        assert_eq!(seq.is_empty(), Ok(false));
        assert_eq!(seq.render(), Ok("[1, 2, 3]".to_string()));
        assert_eq!(created.get(), 6);
    }

    #[test]
    fn test_source_get_out_of_range() {
        let list: LinkedList<i32> = (0..2).collect();
        let seq = Sequence::from_iterable(&list);
        assert_eq!(
            seq.get(2),
            Err(CursorError::IndexOutOfBounds { index: 2, len: 2 })
        );
        assert_eq!(seq.get(1), Ok(&1));
    }

    #[test]
    fn test_from_iterable_over_set_preserves_iteration_order() {
        let set: BTreeSet<&str> = ["pear", "apple", "fig"].into_iter().collect();
        let seq = Sequence::from_iterable(&set);
        assert_eq!(seq.to_vec(), Ok(vec![&"apple", &"fig", &"pear"]));
        assert_eq!(seq.render(), Ok("[apple, fig, pear]".to_string()));
    }

    #[test]
    fn test_deque_is_random_access() {
        let d: VecDeque<char> = "xyz".chars().collect();
        let seq = Sequence::from_random_access(&d);
        assert_eq!(seq.known_len(), Some(3));
        assert_eq!(seq.get(2), Ok(&'z'));
    }

    #[test]
    fn test_render_scenarios() {
        let data = [1, 2, 3];
        assert_eq!(
            Sequence::from_slice(&data).render(),
            Ok("[1, 2, 3]".to_string())
        );
        assert_eq!(empty::<i32>().render(), Ok("[]".to_string()));
    }

    #[test]
    fn test_to_vec_preserves_order_for_every_variant() {
        let data = [3, 1, 2];
        let indexed = Sequence::from_slice(&data);
        let source = Sequence::from_fn(|| IterCursor::new(data.iter()));
        let once = Sequence::once(IterCursor::new(data.iter()));

        assert_eq!(indexed.to_vec(), Ok(vec![&3, &1, &2]));
        assert_eq!(source.to_vec(), Ok(vec![&3, &1, &2]));
        assert_eq!(once.to_vec(), Ok(vec![&3, &1, &2]));
    }

    #[test]
    fn test_once_fails_loudly_on_second_traversal() {
        let seq = Sequence::once(IterCursor::new(vec![1, 2, 3]));
        assert!(seq.is_single_use());
        assert!(!seq.is_consumed());
        assert_eq!(seq.get(1), Ok(2));
        assert!(seq.is_consumed());
        assert_eq!(seq.get(1), Err(CursorError::SequenceConsumed));
        assert_eq!(seq.len(), Err(CursorError::SequenceConsumed));
        assert_eq!(seq.is_empty(), Err(CursorError::SequenceConsumed));
        assert!(seq.cursor().is_err());
    }

    #[test]
    fn test_once_is_empty_does_not_consume() {
        let seq = Sequence::once(IterCursor::new(vec!['a']));
        assert_eq!(seq.is_empty(), Ok(false));
        assert_eq!(seq.is_empty(), Ok(false));
        assert_eq!(seq.render(), Ok("[a]".to_string()));
    }

    #[test]
    fn test_get_all_in_given_order() {
        let list: LinkedList<u8> = (0..5).collect();
        let seq = Sequence::from_iterable(&list);
        assert_eq!(seq.get_all(&[4, 1]), Ok(vec![&4, &1]));
        assert_eq!(
            seq.get_all(&[1, 9]),
            Err(CursorError::IndexOutOfBounds { index: 9, len: 5 })
        );
        assert_eq!(seq.get_all(&[]), Ok(vec![]));
    }

    #[test]
    fn test_empty_if_null() {
        let data = [1, 2];
        let kept = empty_if_null(Some(Sequence::from_slice(&data)));
        assert!(matches!(kept, Sequence::Indexed(_)));
        assert_eq!(kept.get(1), Ok(&2));

        let replaced = empty_if_null::<i32>(None);
        assert!(matches!(replaced, Sequence::Empty));
        assert_eq!(replaced.len(), Ok(0));
    }

    #[test]
    fn test_empty_if_null_keeps_single_use_state() {
        let seq = Sequence::once(IterCursor::new(vec![1]));
        assert_eq!(seq.first(), Ok(1));
        let same = empty_if_null(Some(seq));
        assert!(same.is_consumed());
    }

    #[test]
    fn test_free_functions_delegate() {
        let data = ["a", "b"];
        let seq = Sequence::from_slice(&data);
        assert_eq!(size(Some(&seq)), Ok(2));
        assert_eq!(is_empty(Some(&seq)), Ok(false));
        assert_eq!(first(Some(&seq)), Ok(&"a"));
        assert_eq!(render(Some(&seq)), Ok("[a, b]".to_string()));
        assert_eq!(to_vec(Some(&seq)), Ok(vec![&"a", &"b"]));
        assert_eq!(cursor_or_empty(Some(&seq)).map(|mut c| c.size()), Ok(2));
    }

    #[test]
    fn test_debug_names_variant() {
        let data = [1];
        assert_eq!(format!("{:?}", Sequence::from_slice(&data)), "Sequence::Indexed { len: 1 }");
        assert_eq!(format!("{:?}", empty::<u8>()), "Sequence::Empty");
        let once = Sequence::once(cursor::empty::<u8>());
        assert_eq!(format!("{:?}", once), "Sequence::Once { consumed: false }");
    }
}
