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

//! # Skein Core
//!
//! Null-safe, lazy traversal over abstract sequences of items, together
//! with the small numeric and functional helpers the rest of the workspace
//! builds on.
//!
//! ## Modules
//!
//! - `cursor`: The single-pass [`Cursor`](cursor::Cursor) trait with its
//!   derived draining operations (`size`, `to_vec`, `get`, `render`), the
//!   concrete cursors `EmptyCursor`, `IterCursor`, `IndexedCursor` and
//!   `MaybeCursor`, and free functions that treat an absent cursor as empty.
//! - `sequence`: The repeatable [`Sequence`](sequence::Sequence) view with
//!   its closed set of variants (`Empty`, `Indexed`, `Source`, `Once`), the
//!   `RandomAccess` container trait, and null-safe free functions.
//! - `error`: [`CursorError`](error::CursorError), shared by cursors and
//!   sequences.
//! - `num`: Base two logarithms, power-of-two and integrality predicates,
//!   modular and checked exponentiation, and primality testing.
//! - `func`: Partial application of two- and three-argument functions.
//!
//! ## Absent Inputs
//!
//! Aggregate queries accept `Option<_>` and treat `None` as empty:
//! its size is zero, it renders as `"[]"` and every index is out of range.
//! Contract violations such as a bad index are reported as errors, never
//! clamped.

pub mod cursor;
pub mod error;
pub mod func;
pub mod num;
pub mod sequence;
