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

#[inline(always)]
fn bit_width<T: PrimInt>() -> u32 {
    T::zero().count_zeros()
}

#[inline(always)]
fn require_positive<T: PrimInt>(x: T) -> Result<(), NumError> {
    if x <= T::zero() {
        return Err(NumError::NonPositive);
    }
    Ok(())
}

/// Returns `⌊log₂ x⌋` for a strictly positive `x`.
///
/// # Examples
///
/// ```rust
/// # use skein_core::num::{log2_floor, NumError};
/// assert_eq!(log2_floor(1u32), Ok(0));
/// assert_eq!(log2_floor(9i64), Ok(3));
/// assert_eq!(log2_floor(0u8), Err(NumError::NonPositive));
/// ```
#[inline]
pub fn log2_floor<T: PrimInt>(x: T) -> Result<u32, NumError> {
    require_positive(x)?;
    Ok(bit_width::<T>() - 1 - x.leading_zeros())
}

/// Returns `⌈log₂ x⌉` for a strictly positive `x`.
///
/// Exact powers of two have equal floor and ceiling.
///
/// # Examples
///
/// ```rust
/// # use skein_core::num::log2_ceil;
/// assert_eq!(log2_ceil(8u32), Ok(3));
/// assert_eq!(log2_ceil(9u32), Ok(4));
/// ```
#[inline]
pub fn log2_ceil<T: PrimInt>(x: T) -> Result<u32, NumError> {
    let floor = log2_floor(x)?;
    if x.count_ones() == 1 {
        Ok(floor)
    } else {
        Ok(floor + 1)
    }
}

/// Returns the number of bits needed to represent a strictly positive `x`.
///
/// # Examples
///
/// ```rust
/// # use skein_core::num::bit_length;
/// assert_eq!(bit_length(1u8), Ok(1));
/// assert_eq!(bit_length(8u8), Ok(4));
/// assert_eq!(bit_length(255u8), Ok(8));
/// ```
#[inline]
pub fn bit_length<T: PrimInt>(x: T) -> Result<u32, NumError> {
    Ok(log2_floor(x)? + 1)
}

/// Returns `log₂ x` for a strictly positive `x`. NaN is rejected.
#[inline]
pub fn log2_f64(x: f64) -> Result<f64, NumError> {
    if x > 0.0 {
        Ok(x.log2())
    } else {
        Err(NumError::NonPositive)
    }
}

/// Returns `true` if `x == 2ᵏ` for some `k ≥ 0`. Zero and negative values are not powers of two.
#[inline]
pub fn is_power_of_two<T: PrimInt>(x: T) -> bool {
    x > T::zero() && x.count_ones() == 1
}

/// Returns `true` if `x` is a finite float with no fractional part.
#[inline]
pub fn is_integral(x: f64) -> bool {
    x.is_finite() && x.fract() == 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log2_floor_across_types() {
        assert_eq!(log2_floor(1u8), Ok(0));
        assert_eq!(log2_floor(2u16), Ok(1));
        assert_eq!(log2_floor(1023u32), Ok(9));
        assert_eq!(log2_floor(1024u32), Ok(10));
        assert_eq!(log2_floor(i64::MAX), Ok(62));
        assert_eq!(log2_floor(u64::MAX), Ok(63));
        assert_eq!(log2_floor(1usize << 20), Ok(20));
    }

    #[test]
    fn test_log2_rejects_non_positive() {
        assert_eq!(log2_floor(0u32), Err(NumError::NonPositive));
        assert_eq!(log2_floor(-3i32), Err(NumError::NonPositive));
        assert_eq!(log2_ceil(i64::MIN), Err(NumError::NonPositive));
        assert_eq!(bit_length(0u64), Err(NumError::NonPositive));
        assert_eq!(log2_f64(0.0), Err(NumError::NonPositive));
        assert_eq!(log2_f64(-1.5), Err(NumError::NonPositive));
        assert_eq!(log2_f64(f64::NAN), Err(NumError::NonPositive));
    }

    #[test]
    fn test_log2_ceil_is_a_true_ceiling() {
        assert_eq!(log2_ceil(1u32), Ok(0));
        assert_eq!(log2_ceil(2u32), Ok(1));
        assert_eq!(log2_ceil(3u32), Ok(2));
        assert_eq!(log2_ceil(4u32), Ok(2));
        assert_eq!(log2_ceil(5u32), Ok(3));
        assert_eq!(log2_ceil(u64::MAX), Ok(64));
        assert_eq!(log2_ceil(1u64 << 63), Ok(63));
    }

    #[test]
    fn test_bit_length() {
        assert_eq!(bit_length(1i32), Ok(1));
        assert_eq!(bit_length(4i32), Ok(3));
        assert_eq!(bit_length(7i32), Ok(3));
        assert_eq!(bit_length(i32::MAX), Ok(31));
    }

    #[test]
    fn test_log2_f64() {
        assert_eq!(log2_f64(1.0), Ok(0.0));
        assert_eq!(log2_f64(8.0), Ok(3.0));
        let half = log2_f64(0.5).unwrap();
        assert!((half + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_is_power_of_two() {
        let powers: Vec<u32> = (0..40).filter(|&x| is_power_of_two(x)).collect();
        assert_eq!(powers, vec![1, 2, 4, 8, 16, 32]);
        assert!(!is_power_of_two(0i64));
        assert!(!is_power_of_two(-8i64));
        assert!(is_power_of_two(1u64 << 63));
        assert!(!is_power_of_two(i64::MIN));
    }

    #[test]
    fn test_is_integral() {
        assert!(is_integral(3.0));
        assert!(is_integral(-0.0));
        assert!(is_integral(-12.0));
        assert!(!is_integral(2.5));
        assert!(!is_integral(f64::INFINITY));
        assert!(!is_integral(f64::NAN));
    }
}
