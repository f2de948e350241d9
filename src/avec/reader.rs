//! Reader-based cursor implementation.
//!
//! _Requires Cargo feature `std`._

use std::io::{ErrorKind, Read};

use super::{Cursor, Error, Records};

extern crate std;

/// A cursor over a reader of a document.
///
/// The reader is owned by the cursor, and released when the cursor (or the
/// [`Records`] holding it) is dropped.
#[derive(Debug)]
pub struct ReaderCursor<R> {
    r: R,
    i: usize, // Counter of bytes read.
}

impl<R: Read> ReaderCursor<R> {
    pub fn new(r: R) -> Self {
        Self { r, i: 0 }
    }

    /// Release the underlying reader.
    pub fn into_inner(self) -> R {
        self.r
    }
}

impl<R: Read> Cursor for ReaderCursor<R> {
    fn position(&self) -> usize {
        self.i
    }

    /// Take an exact number of bytes from the reader, advancing the counter.
    fn take<const N: usize>(&mut self) -> Result<[u8; N], Error> {
        let mut buf = [0; N];
        let mut filled = 0;

        while filled < N {
            match self.r.read(&mut buf[filled..]) {
                Ok(0) => Err(Error::TruncatedInput {
                    offset: self.i,
                    expected: N,
                    available: filled,
                })?,
                Ok(n) => filled += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => {}
                Err(err) => Err(err)?,
            }
        }

        self.i += N;

        Ok(buf)
    }
}

/// Decode records from a reader of a document, using the built-in catalog.
///
/// This method is also re-exported as `cassette::avec::decode_reader`.
///
/// _Requires Cargo feature `std`._
pub fn decode<R: Read>(r: R) -> Records<'static, ReaderCursor<R>> {
    Records::new(ReaderCursor::new(r))
}
