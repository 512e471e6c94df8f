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

//! Text writers.
//!
//! [`TextWriter`] is configured once and reused. By default it replaces the
//! file contents; with [`append`](TextWriter::append) it adds to the end.
//! Missing files are created in both modes.

use crate::error::{FsError, FsOp};
use std::{
    fs::{File, OpenOptions},
    io::Write,
    path::Path,
};
use tracing::debug;

/// Writes text to files, either replacing or appending.
///
/// # Examples
///
/// ```rust
/// # fn main() -> Result<(), skein_fs::FsError> {
/// # let dir = tempfile::tempdir().unwrap();
/// # let path = dir.path().join("log.txt");
/// use skein_fs::TextWriter;
///
/// let log = TextWriter::new().append(true);
/// log.writeln(&path, "first")?;
/// log.writeln(&path, "second")?;
/// assert_eq!(skein_fs::read_lines(&path)?, vec!["first", "second"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextWriter {
    append: bool,
}

impl TextWriter {
    /// Creates a writer that replaces file contents.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures whether text is appended instead of replacing the file.
    #[inline]
    pub fn append(mut self, yes: bool) -> Self {
        self.append = yes;
        self
    }

    /// Returns `true` if this writer appends.
    #[inline]
    pub fn is_append(&self) -> bool {
        self.append
    }

    fn open(&self, path: &Path) -> Result<File, FsError> {
        OpenOptions::new()
            .write(true)
            .create(true)
            .append(self.append)
            .truncate(!self.append)
            .open(path)
            .map_err(|e| FsError::new(FsOp::Open, path, e))
    }

    /// Writes `text` to the file at `path` as is.
    pub fn write<P: AsRef<Path>>(&self, path: P, text: &str) -> Result<(), FsError> {
        let path = path.as_ref();
        let mut file = self.open(path)?;
        file.write_all(text.as_bytes())
            .map_err(|e| FsError::new(FsOp::Write, path, e))?;
        debug!(path = %path.display(), bytes = text.len(), append = self.append, "wrote text");
        Ok(())
    }

    /// Writes `text` followed by a newline to the file at `path`.
    pub fn writeln<P: AsRef<Path>>(&self, path: P, text: &str) -> Result<(), FsError> {
        let path = path.as_ref();
        let mut file = self.open(path)?;
        writeln!(file, "{}", text).map_err(|e| FsError::new(FsOp::Write, path, e))?;
        debug!(path = %path.display(), bytes = text.len() + 1, append = self.append, "wrote line");
        Ok(())
    }
}

/// Replaces the contents of the file at `path` with `text`.
#[inline]
pub fn write<P: AsRef<Path>>(path: P, text: &str) -> Result<(), FsError> {
    TextWriter::new().write(path, text)
}

/// Replaces the contents of the file at `path` with `text` and a newline.
#[inline]
pub fn writeln<P: AsRef<Path>>(path: P, text: &str) -> Result<(), FsError> {
    TextWriter::new().writeln(path, text)
}

/// Empties the file at `path`, creating it if it does not exist.
pub fn truncate<P: AsRef<Path>>(path: P) -> Result<(), FsError> {
    let path = path.as_ref();
    File::create(path).map_err(|e| FsError::new(FsOp::Truncate, path, e))?;
    debug!(path = %path.display(), "truncated");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_writer_replaces_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        write(&path, "first").unwrap();
        write(&path, "second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");

        writeln(&path, "third").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "third\n");
    }

    #[test]
    fn test_append_writer_keeps_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let w = TextWriter::new().append(true);
        assert!(w.is_append());
        assert!(!TextWriter::default().is_append());

        w.write(&path, "a").unwrap();
        w.write(&path, "b").unwrap();
        w.writeln(&path, "c").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "abc\n");
    }

    #[test]
    fn test_truncate_empties_and_creates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.txt");

        truncate(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");

        fs::write(&path, "data").unwrap();
        truncate(&path).unwrap();
        assert_eq!(fs::metadata(&path).unwrap().len(), 0);
    }

    #[test]
    fn test_write_into_missing_directory_fails_on_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no").join("such").join("file.txt");

        let e = write(&path, "x").unwrap_err();
        assert_eq!(e.op(), FsOp::Open);
        assert_eq!(e.kind(), std::io::ErrorKind::NotFound);

        let e = truncate(&path).unwrap_err();
        assert_eq!(e.op(), FsOp::Truncate);
    }
}
