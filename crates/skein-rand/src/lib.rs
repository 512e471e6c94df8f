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

//! # Skein Rand
//!
//! Random draws over [`skein_core::sequence::Sequence`] values.
//!
//! ## Modules
//!
//! - `sampler`: [`Sampler`], a generator-owning handle that draws bounded
//!   integers and floats, picks a uniform item from a sequence, and samples
//!   items at distinct positions without replacement.
//! - `error`: [`SampleError`], covering invalid ranges, empty inputs,
//!   oversized samples and failures of the underlying sequence.
//!
//! ## Usage
//!
//! ```rust
//! use skein_core::sequence::Sequence;
//! use skein_rand::Sampler;
//!
//! let data = ["red", "green", "blue", "cyan"];
//! let seq = Sequence::from_slice(&data);
//!
//! let mut sampler = Sampler::seeded(42);
//! let picked = sampler.sample(&seq, 2).unwrap();
//! assert_eq!(picked.len(), 2);
//! assert_ne!(picked[0], picked[1]);
//! ```

pub mod error;
pub mod sampler;

pub use error::SampleError;
pub use sampler::Sampler;
