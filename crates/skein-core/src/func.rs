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

//! # Partial Application
//!
//! Helpers that fix leading arguments of a two- or three-argument function
//! and return a closure over the remaining ones. Bound arguments are cloned
//! on every call, so the returned closure is itself `Fn`.
//!
//! ## Usage
//!
//! ```rust
//! use skein_core::func;
//!
//! let add = |a: i32, b: i32| a + b;
//! let add_ten = func::partial(add, 10);
//! assert_eq!(add_ten(5), 15);
//!
//! let clamp = |lo: i32, hi: i32, x: i32| x.clamp(lo, hi);
//! let percent = func::partial_first_two(clamp, 0, 100);
//! assert_eq!(percent(140), 100);
//! ```

/// Fixes the first argument of a two-argument function.
#[inline]
pub fn partial<A, B, R, F>(f: F, a: A) -> impl Fn(B) -> R
where
    F: Fn(A, B) -> R,
    A: Clone,
{
    move |b| f(a.clone(), b)
}

/// Fixes the first argument of a three-argument function.
///
/// # Examples
///
/// ```rust
/// # use skein_core::func::partial_first;
/// let join = |sep: &str, a: &str, b: &str| format!("{a}{sep}{b}");
/// let dashed = partial_first(join, "-");
/// assert_eq!(dashed("x", "y"), "x-y");
/// ```
#[inline]
pub fn partial_first<A, B, C, R, F>(f: F, a: A) -> impl Fn(B, C) -> R
where
    F: Fn(A, B, C) -> R,
    A: Clone,
{
    move |b, c| f(a.clone(), b, c)
}

/// Fixes the first two arguments of a three-argument function.
#[inline]
pub fn partial_first_two<A, B, C, R, F>(f: F, a: A, b: B) -> impl Fn(C) -> R
where
    F: Fn(A, B, C) -> R,
    A: Clone,
    B: Clone,
{
    move |c| f(a.clone(), b.clone(), c)
}
