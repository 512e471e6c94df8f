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

use std::path::{Path, PathBuf};

/// The file operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsOp {
    Open,
    Read,
    Write,
    Truncate,
}

impl std::fmt::Display for FsOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsOp::Open => write!(f, "open"),
            FsOp::Read => write!(f, "read"),
            FsOp::Write => write!(f, "write"),
            FsOp::Truncate => write!(f, "truncate"),
        }
    }
}

/// An I/O failure annotated with the operation and path involved.
#[derive(Debug)]
pub struct FsError {
    op: FsOp,
    path: PathBuf,
    source: std::io::Error,
}

impl FsError {
    pub(crate) fn new(op: FsOp, path: &Path, source: std::io::Error) -> Self {
        Self {
            op,
            path: path.to_path_buf(),
            source,
        }
    }

    /// Returns the operation that failed.
    #[inline]
    pub fn op(&self) -> FsOp {
        self.op
    }

    /// Returns the path the operation was applied to.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the kind of the underlying I/O error.
    #[inline]
    pub fn kind(&self) -> std::io::ErrorKind {
        self.source.kind()
    }

    /// Consumes the error and returns the underlying I/O error.
    #[inline]
    pub fn into_io_error(self) -> std::io::Error {
        self.source
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Failed to {} '{}': {}",
            self.op,
            self.path.display(),
            self.source
        )
    }
}

impl std::error::Error for FsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io;

    #[test]
    fn test_display_includes_op_and_path() {
        let e = FsError::new(
            FsOp::Open,
            Path::new("missing.txt"),
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        assert_eq!(e.to_string(), "Failed to open 'missing.txt': no such file");
        assert_eq!(e.op(), FsOp::Open);
        assert_eq!(e.path(), Path::new("missing.txt"));
        assert_eq!(e.kind(), io::ErrorKind::NotFound);
        assert!(e.source().is_some());
        assert_eq!(e.into_io_error().kind(), io::ErrorKind::NotFound);
    }
}
