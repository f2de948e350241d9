use core::iter::FusedIterator;

use either::Either::Left;

use crate::{
    catalog::{Catalog, Profile},
    sans::{Decoder, header::Header},
};

use super::{Cursor, Error, LocalDefinitions, Record, decode_next};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    AwaitingHeader,
    Streaming { remaining: usize },
    Exhausted,
    Failed,
}

/// A lazy sequence of records decoded from a document.
///
/// The document header is read on the first call to [`Iterator::next`].
/// Records are then decoded one per call until the payload size declared in
/// the header is consumed exactly. The first error ends the sequence.
#[derive(Debug)]
pub struct Records<'c, R, C: ?Sized = Profile> {
    r: R,
    catalog: &'c C,
    definitions: LocalDefinitions,
    header: Option<Header>,
    state: State,
}

impl<R: Cursor> Records<'static, R> {
    /// Decode records from a cursor, using the built-in catalog.
    pub fn new(r: R) -> Self {
        Self::with_catalog(r, &Profile)
    }
}

impl<'c, R: Cursor, C: Catalog + ?Sized> Records<'c, R, C> {
    /// Decode records from a cursor, resolving names through `catalog`.
    pub fn with_catalog(r: R, catalog: &'c C) -> Self {
        Self {
            r,
            catalog,
            definitions: LocalDefinitions::new(),
            header: None,
            state: State::AwaitingHeader,
        }
    }

    /// The document header, once it has been read.
    pub fn header(&self) -> Option<&Header> {
        self.header.as_ref()
    }

    /// The definitions in effect at the current position.
    pub fn definitions(&self) -> &LocalDefinitions {
        &self.definitions
    }

    /// Payload bytes not yet consumed, once the header has been read.
    pub fn remaining(&self) -> Option<usize> {
        match self.state {
            State::AwaitingHeader | State::Failed => None,
            State::Streaming { remaining } => Some(remaining),
            State::Exhausted => Some(0),
        }
    }

    /// Release the underlying cursor.
    pub fn into_inner(self) -> R {
        self.r
    }

    fn read_header(&mut self) -> Result<Header, Error> {
        let (header, successor) = Decoder::advance(self.r.take()?)?;

        if let Left(state) = successor {
            state.advance(self.r.take()?);
        }

        log::debug!(
            "document header: protocol {}, profile {}, {} payload bytes",
            header.protocol_version,
            header.profile_version,
            header.payload_size,
        );

        Ok(header)
    }

    fn step(&mut self) -> Result<Option<Record<'c>>, Error> {
        if self.state == State::AwaitingHeader {
            let header = self.read_header()?;
            self.state = State::Streaming {
                remaining: header.payload_size as usize,
            };
            self.header = Some(header);
        }

        let State::Streaming { remaining } = self.state else {
            return Ok(None);
        };

        if remaining == 0 {
            log::debug!("payload exhausted at {}", self.r.position());
            self.state = State::Exhausted;
            return Ok(None);
        }

        let start = self.r.position();
        let record = decode_next(&mut self.r, &mut self.definitions, self.catalog)?;
        let consumed = self.r.position() - start;

        let remaining = remaining.checked_sub(consumed).ok_or_else(|| {
            let declared = self.header.map_or(0, |h| h.payload_size);
            Error::PayloadSizeMismatch {
                offset: start,
                declared,
                consumed: declared as usize - remaining + consumed,
            }
        })?;

        self.state = State::Streaming { remaining };

        Ok(Some(record))
    }
}

impl<'c, R: Cursor, C: Catalog + ?Sized> Iterator for Records<'c, R, C> {
    type Item = Result<Record<'c>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.step() {
            Ok(record) => record.map(Ok),
            Err(err) => {
                self.state = State::Failed;
                Some(Err(err))
            }
        }
    }
}

impl<R: Cursor, C: Catalog + ?Sized> FusedIterator for Records<'_, R, C> {}

/// Decode records from a cursor, using the built-in catalog.
pub fn decode_all<R: Cursor>(r: R) -> Records<'static, R> {
    Records::new(r)
}
