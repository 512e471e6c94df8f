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

use super::NumError;
use num_traits::PrimInt;

/// Computes `base^exp mod modulus` by square and multiply.
///
/// Intermediate products are held in `u128`, so every `u64` input is
/// supported without overflow.
///
/// # Errors
///
/// Returns [`NumError::ZeroModulus`] if `modulus` is zero.
///
/// # Examples
///
/// ```rust
/// # use skein_core::num::mod_pow;
/// assert_eq!(mod_pow(4, 13, 497), Ok(445));
/// assert_eq!(mod_pow(7, 0, 1), Ok(0));
/// ```
pub fn mod_pow(base: u64, exp: u64, modulus: u64) -> Result<u64, NumError> {
    if modulus == 0 {
        return Err(NumError::ZeroModulus);
    }

    let m = modulus as u128;
    let mut base = base as u128 % m;
    let mut exp = exp;
    let mut acc = 1u128 % m;

    while exp > 0 {
        if exp & 1 == 1 {
            acc = acc * base % m;
        }
        base = base * base % m;
        exp >>= 1;
    }

    // `acc < m <= u64::MAX`
    Ok(acc as u64)
}

/// Computes `base^exp`, failing with [`NumError::Overflow`] if the result
/// does not fit in `T`.
///
/// # Examples
///
/// ```rust
/// # use skein_core::num::{checked_pow, NumError};
/// assert_eq!(checked_pow(3u32, 4), Ok(81));
/// assert_eq!(checked_pow(2u8, 8), Err(NumError::Overflow));
/// ```
#[inline]
pub fn checked_pow<T: PrimInt>(base: T, exp: u32) -> Result<T, NumError> {
    num_traits::checked_pow(base, exp as usize).ok_or(NumError::Overflow)
}

/// Returns `true` if `n` is prime.
///
/// Values below two are not prime. Candidates are tested against `2`, `3`
/// and every `6k ± 1` up to `√n`.
///
/// # Examples
///
/// ```rust
/// # use skein_core::num::is_prime;
/// assert!(is_prime(7919u32));
/// assert!(!is_prime(7917u32));
/// assert!(!is_prime(-7i32));
/// ```
pub fn is_prime<T: PrimInt>(n: T) -> bool {
    let one = T::one();
    let two = one + one;
    let three = two + one;
    let six = three + three;

    if n < two {
        return false;
    }
    if n == two || n == three {
        return true;
    }
    if n % two == T::zero() || n % three == T::zero() {
        return false;
    }

    let mut k = six;
    // (k - 1)² <= n, written to avoid overflow in the square.
    while k - one <= n / (k - one) {
        if n % (k - one) == T::zero() || n % (k + one) == T::zero() {
            return false;
        }
        match k.checked_add(&six) {
            Some(next) => k = next,
            None => break,
        }
    }
    true
}
