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

//! # Skein FS
//!
//! Line and word oriented helpers for small text files.
//!
//! ## Modules
//!
//! - `read`: Whole-file readers that split content into lines
//!   ([`read_lines`]) or whitespace-delimited words ([`read_words`],
//!   [`count_words`], [`read`]). Each also has a `BufRead` counterpart for
//!   in-memory input.
//! - `write`: [`TextWriter`], a small builder that writes or appends text,
//!   plus the default-configured [`write()`](write::write),
//!   [`writeln()`](write::writeln) and [`truncate`].
//! - `error`: [`FsError`], which records the failed operation and path next
//!   to the underlying `std::io::Error`.
//!
//! Every file operation emits a `tracing` debug event. No subscriber is
//! installed here.
//!
//! ## Usage
//!
//! ```rust
//! # fn main() -> Result<(), skein_fs::FsError> {
//! # let dir = tempfile::tempdir().unwrap();
//! # let path = dir.path().join("notes.txt");
//! skein_fs::writeln(&path, "alpha beta")?;
//! skein_fs::TextWriter::new().append(true).writeln(&path, "gamma")?;
//!
//! assert_eq!(skein_fs::read_lines(&path)?, vec!["alpha beta", "gamma"]);
//! assert_eq!(skein_fs::count_words(&path)?, 3);
//! assert_eq!(skein_fs::read(&path)?, "alpha beta gamma ");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod read;
pub mod write;

pub use error::{FsError, FsOp};
pub use read::{count_words, read, read_lines, read_words};
pub use write::{TextWriter, truncate, write, writeln};
