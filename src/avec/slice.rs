//! Slice-based cursor implementation.

use super::{Cursor, Error, Records};

/// A cursor over an in-memory document.
#[derive(Debug, Clone)]
pub struct SliceCursor<'a> {
    r: &'a [u8],
    i: usize,
}

impl<'a> SliceCursor<'a> {
    pub fn new(r: &'a [u8]) -> Self {
        Self { r, i: 0 }
    }

    /// The bytes not yet taken.
    pub fn remaining(&self) -> &'a [u8] {
        self.r.get(self.i..).unwrap_or_default()
    }
}

impl Cursor for SliceCursor<'_> {
    fn position(&self) -> usize {
        self.i
    }

    /// Take an exact number of bytes from the slice, advancing the offset.
    fn take<const N: usize>(&mut self) -> Result<[u8; N], Error> {
        let s = self.i;

        let bytes = self.r.get(s..s + N).ok_or(Error::TruncatedInput {
            offset: s,
            expected: N,
            available: self.r.len().saturating_sub(s),
        })?;

        let mut buf = [0; N];
        buf.copy_from_slice(bytes);
        self.i += N;

        Ok(buf)
    }
}

/// Decode records from a slice of a document, using the built-in catalog.
///
/// This method is also re-exported as `cassette::avec::decode_slice`.
pub fn decode(r: &[u8]) -> Records<'static, SliceCursor<'_>> {
    Records::new(SliceCursor::new(r))
}
