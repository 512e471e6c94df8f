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

//! # Numeric Helpers
//!
//! Integer-centric helpers built on [`num_traits::PrimInt`], so a single
//! generic function covers every primitive integer type.
//!
//! ## Submodules
//!
//! - `log`: Base two logarithms (`log2_floor`, `log2_ceil`, `bit_length`,
//!   `log2_f64`) and the related predicates `is_power_of_two` and
//!   `is_integral`.
//! - `arith`: Modular exponentiation with 128-bit intermediates, checked
//!   exponentiation, and primality testing by 6k ± 1 trial division.
//!
//! Functions with a restricted domain return [`NumError`] instead of
//! panicking.

pub mod arith;
pub mod log;

pub use arith::{checked_pow, is_prime, mod_pow};
pub use log::{bit_length, is_integral, is_power_of_two, log2_ceil, log2_f64, log2_floor};

/// Errors produced by the numeric helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumError {
    /// The argument must be strictly positive.
    NonPositive,
    /// A modulus of zero was supplied.
    ZeroModulus,
    /// The result does not fit in the target type.
    Overflow,
}

impl std::fmt::Display for NumError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumError::NonPositive => write!(f, "Argument must be strictly positive"),
            NumError::ZeroModulus => write!(f, "Modulus must be non-zero"),
            NumError::Overflow => write!(f, "Result overflows the target type"),
        }
    }
}

impl std::error::Error for NumError {}
