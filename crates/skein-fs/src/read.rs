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

//! Whole-file readers.
//!
//! Words are maximal runs of non-whitespace characters. Lines are split on
//! `\n` with a trailing `\r` removed; a final newline does not produce an
//! empty last line.

use crate::error::{FsError, FsOp};
use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};
use tracing::debug;

fn open(path: &Path) -> Result<BufReader<File>, FsError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| FsError::new(FsOp::Open, path, e))
}

/// Reads every line from `rdr`.
pub fn lines_from_bufread<R: BufRead>(rdr: R) -> io::Result<Vec<String>> {
    rdr.lines().collect()
}

/// Reads every whitespace-delimited word from `rdr`.
pub fn words_from_bufread<R: BufRead>(rdr: R) -> io::Result<Vec<String>> {
    let mut words = Vec::new();
    for line in rdr.lines() {
        words.extend(line?.split_whitespace().map(str::to_owned));
    }
    Ok(words)
}

/// Counts the whitespace-delimited words in `rdr`.
pub fn count_words_from_bufread<R: BufRead>(rdr: R) -> io::Result<usize> {
    let mut count = 0;
    for line in rdr.lines() {
        count += line?.split_whitespace().count();
    }
    Ok(count)
}

/// Returns the lines of the file at `path`.
///
/// The result can be wrapped as a repeatable sequence with
/// `Sequence::from_slice`.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, FsError> {
    let path = path.as_ref();
    let lines = lines_from_bufread(open(path)?).map_err(|e| FsError::new(FsOp::Read, path, e))?;
    debug!(path = %path.display(), lines = lines.len(), "read lines");
    Ok(lines)
}

/// Returns the whitespace-delimited words of the file at `path`.
pub fn read_words<P: AsRef<Path>>(path: P) -> Result<Vec<String>, FsError> {
    let path = path.as_ref();
    let words = words_from_bufread(open(path)?).map_err(|e| FsError::new(FsOp::Read, path, e))?;
    debug!(path = %path.display(), words = words.len(), "read words");
    Ok(words)
}

/// Counts the whitespace-delimited words of the file at `path`.
pub fn count_words<P: AsRef<Path>>(path: P) -> Result<usize, FsError> {
    let path = path.as_ref();
    let count =
        count_words_from_bufread(open(path)?).map_err(|e| FsError::new(FsOp::Read, path, e))?;
    debug!(path = %path.display(), count, "counted words");
    Ok(count)
}

/// Returns the words of the file at `path`, each followed by a single space.
///
/// Line breaks and runs of whitespace collapse, so `"a  b\nc"` reads as
/// `"a b c "`. An empty file reads as `""`.
pub fn read<P: AsRef<Path>>(path: P) -> Result<String, FsError> {
    let words = read_words(path)?;
    let mut text = String::with_capacity(words.iter().map(|w| w.len() + 1).sum());
    for word in &words {
        text.push_str(word);
        text.push(' ');
    }
    Ok(text)
}
