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

//! Uniform draws and sampling without replacement.
//!
//! A [`Sampler`] owns its random number generator, so draws are
//! reproducible whenever the generator is seeded. Sized sequences are
//! accessed by position through [`Sequence::get`]; sequences without a
//! known length are collected once and then indexed.

use crate::error::SampleError;
use rand::{
    Rng, SeedableRng,
    distr::uniform::SampleUniform,
    rngs::StdRng,
    seq::index,
};
use skein_core::sequence::Sequence;
use std::cmp::Ordering;
use tracing::{debug, trace};

/// Draws random values and items using an owned generator.
#[derive(Debug, Clone)]
pub struct Sampler<R> {
    rng: R,
}

impl<R> Sampler<R>
where
    R: Rng,
{
    /// Creates a sampler drawing from `rng`.
    #[inline]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns a mutable reference to the underlying generator.
    #[inline]
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Consumes the sampler and returns its generator.
    #[inline]
    pub fn into_inner(self) -> R {
        self.rng
    }

    /// Returns a value in `[low, high]`, both bounds inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::InvalidRange`] if `low > high` or the bounds
    /// are not comparable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use skein_rand::Sampler;
    /// let mut sampler = Sampler::seeded(1);
    /// let roll = sampler.rand_int(1, 6).unwrap();
    /// assert!((1..=6).contains(&roll));
    /// assert_eq!(sampler.rand_int(4, 4), Ok(4));
    /// ```
    pub fn rand_int<T>(&mut self, low: T, high: T) -> Result<T, SampleError>
    where
        T: SampleUniform + PartialOrd,
    {
        match low.partial_cmp(&high) {
            Some(Ordering::Less | Ordering::Equal) => Ok(self.rng.random_range(low..=high)),
            _ => Err(SampleError::InvalidRange),
        }
    }

    /// Returns a float in `[0, 1)`.
    #[inline]
    pub fn random(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// Returns a float in `[low, high)`. Equal bounds return `low`.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::InvalidRange`] if `low > high` or either bound
    /// is not finite.
    pub fn uniform(&mut self, low: f64, high: f64) -> Result<f64, SampleError> {
        if !low.is_finite() || !high.is_finite() || low > high {
            return Err(SampleError::InvalidRange);
        }
        let x = low + (high - low) * self.random();
        // Rounding can land on `high` when the span is tiny.
        if x < high { Ok(x) } else { Ok(low) }
    }

    /// Returns a uniformly chosen item of `sequence`.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::Empty`] for an empty sequence and
    /// [`SampleError::Sequence`] if traversal fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use skein_core::sequence::Sequence;
    /// # use skein_rand::{Sampler, SampleError};
    /// let data = [10, 20, 30];
    /// let mut sampler = Sampler::seeded(9);
    /// let item = sampler.choice(&Sequence::from_slice(&data)).unwrap();
    /// assert!(data.contains(item));
    ///
    /// let empty: Sequence<'_, u8> = Sequence::empty();
    /// assert_eq!(sampler.choice(&empty), Err(SampleError::Empty));
    /// ```
    pub fn choice<T>(&mut self, sequence: &Sequence<'_, T>) -> Result<T, SampleError> {
        match sequence.known_len() {
            Some(0) => Err(SampleError::Empty),
            Some(len) => {
                let index = self.rng.random_range(0..len);
                trace!(len, index, "choice by position");
                Ok(sequence.get(index)?)
            }
            None => {
                let mut items = sequence.to_vec()?;
                if items.is_empty() {
                    return Err(SampleError::Empty);
                }
                let index = self.rng.random_range(0..items.len());
                trace!(len = items.len(), index, "choice from collected items");
                Ok(items.swap_remove(index))
            }
        }
    }

    /// Returns `n` items taken from distinct positions of `sequence`.
    ///
    /// The order of the result is random. Sampling all items yields a
    /// permutation; sampling none yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::SampleTooLarge`] if `n` exceeds the number of
    /// items, and [`SampleError::Sequence`] if traversal fails.
    pub fn sample<T>(&mut self, sequence: &Sequence<'_, T>, n: usize) -> Result<Vec<T>, SampleError> {
        match sequence.known_len() {
            Some(len) => {
                check_sample_size(n, len)?;
                trace!(len, n, "sampling by position");
                index::sample(&mut self.rng, len, n)
                    .into_iter()
                    .map(|i| sequence.get(i).map_err(SampleError::from))
                    .collect()
            }
            None => {
                let mut items: Vec<Option<T>> = sequence.to_vec()?.into_iter().map(Some).collect();
                check_sample_size(n, items.len())?;
                trace!(len = items.len(), n, "sampling from collected items");
                Ok(index::sample(&mut self.rng, items.len(), n)
                    .into_iter()
                    .filter_map(|i| items.get_mut(i).and_then(Option::take))
                    .collect())
            }
        }
    }
}

impl Sampler<StdRng> {
    /// Creates a reproducible sampler from `seed`.
    pub fn seeded(seed: u64) -> Self {
        debug!(seed, "creating seeded sampler");
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Creates a sampler seeded from the operating system.
    pub fn from_os_rng() -> Self {
        debug!("creating sampler from operating system entropy");
        Self::new(StdRng::from_os_rng())
    }
}

#[inline]
fn check_sample_size(requested: usize, available: usize) -> Result<(), SampleError> {
    if requested > available {
        return Err(SampleError::SampleTooLarge {
            requested,
            available,
        });
    }
    Ok(())
}
