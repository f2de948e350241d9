//! Convenience interfaces for common decoding patterns.
//!
//! The functions in this module decode documents from slices and readers into
//! a lazy sequence of [`Record`]s. Decoding pulls one record per call to
//! [`Iterator::next`], so callers may stop at any point without reading the
//! rest of the document.
//!
//! ```
//! for record in cassette::avec::decode_slice(&data) {
//!     if let Record::Data(data) = record? {
//!         println!("{:?}: {:?}", data.message_name, data.get(3));
//!     }
//! }
//! ```
//!
//! To decode from another byte source, implement [`Cursor`] and pass it to
//! [`decode_all`] or [`Records::with_catalog`]. To decode records one at a time
//! under your own control, call [`decode_next`] with a [`LocalDefinitions`]
//! table.

mod definitions;
mod error;
#[cfg(feature = "std")]
pub mod reader;
mod record;
pub mod slice;
mod stream;

pub use definitions::LocalDefinitions;
pub use error::Error;
#[cfg(feature = "std")]
pub use reader::{ReaderCursor, decode as decode_reader};
pub use record::{DataField, DataRecord, Record, decode_next};
pub use slice::{SliceCursor, decode as decode_slice};
pub use stream::{Records, decode_all};

/// A sequential source of document bytes.
pub trait Cursor {
    /// Offset of the next byte to be taken, from the start of the document.
    fn position(&self) -> usize;

    /// Take an exact number of bytes, advancing the cursor.
    ///
    /// Fails with [`Error::TruncatedInput`] if fewer bytes remain.
    fn take<const N: usize>(&mut self) -> Result<[u8; N], Error>;
}

impl<C: Cursor> Cursor for &mut C {
    fn position(&self) -> usize {
        (**self).position()
    }

    fn take<const N: usize>(&mut self) -> Result<[u8; N], Error> {
        (**self).take()
    }
}
