//! States processing document and record headers.

use either::Either::{self, Left, Right};
use tartan_bitfield::bitfield;
use thiserror::Error;
use zerocopy::FromBytes;

use super::{data::Data, definition::DefinitionHeader};

/// An error advancing over a document header.
#[derive(Debug, Error)]
pub enum DocumentHeaderError {
    /// Incorrect filetype marker.
    #[error("Incorrect file type marker ({0:?}).")]
    InvalidMagic([u8; 4]),
    /// Unknown header length.
    #[error("Unknown header length ({0}).")]
    UnknownHeaderLength(u8),
}

/// The fixed preamble of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub header_size: u8,
    pub protocol_version: u8,
    pub profile_version: u16,
    /// Number of record bytes following the header.
    pub payload_size: u32,
    pub data_type_tag: [u8; 4],
}

/// File type markers accepted in the last four header bytes.
const MARKERS: [&[u8; 4]; 3] = [b"FIT\0", b"FIT ", b".FIT"];

/// State token to decode a document header.
#[derive(Debug)]
pub struct DocumentHeader;

impl DocumentHeader {
    /// Transition to another state by decoding a document header.
    ///
    /// Returns the decoded header, and a successor state token.
    pub fn advance(
        r: [u8; 12],
    ) -> Result<(Header, Either<ExtendedDocumentHeader, RecordHeader>), DocumentHeaderError> {
        #[repr(C, packed)]
        #[derive(FromBytes)]
        struct FileHeader {
            header_size: u8,
            protocol_version: u8,
            profile_version: [u8; 2],
            payload_size: [u8; 4],
            data_type: [u8; 4],
        }

        let FileHeader {
            header_size,
            protocol_version,
            profile_version,
            payload_size,
            data_type,
        } = zerocopy::transmute!(r);

        if !MARKERS.iter().any(|m| **m == data_type) {
            Err(DocumentHeaderError::InvalidMagic(data_type))?;
        }

        let successor = match header_size {
            14 => Left(ExtendedDocumentHeader(())),
            12 => Right(RecordHeader(())),
            _ => Err(DocumentHeaderError::UnknownHeaderLength(header_size))?,
        };

        let header = Header {
            header_size,
            protocol_version,
            profile_version: u16::from_le_bytes(profile_version),
            payload_size: u32::from_le_bytes(payload_size),
            data_type_tag: data_type,
        };

        Ok((header, successor))
    }
}

/// State token to decode additional bytes of an extended document header.
#[derive(Debug)]
pub struct ExtendedDocumentHeader(pub(super) ());

impl ExtendedDocumentHeader {
    /// Transition to another state by decoding the additional bytes of an
    /// extended document header.
    ///
    /// The header check value is not validated. Returns the successor state
    /// token.
    pub fn advance(self, _r: [u8; 2]) -> RecordHeader {
        RecordHeader(())
    }
}

/// An error advancing over a record header.
#[derive(Debug, Error)]
pub enum RecordHeaderError {
    /// Found a compressed timestamp header (not supported).
    #[error("Found a compressed timestamp header.")]
    CompressedTimestamp,
}

/// State token to decode a record header.
#[derive(Debug)]
pub struct RecordHeader(pub(crate) ());

impl RecordHeader {
    /// Transition to another state by decoding a record header.
    ///
    /// Returns the local message type, and a successor state token. Bits 4 and
    /// 5 of the header are ignored.
    pub fn advance(
        self,
        r: [u8; 1],
    ) -> Result<(u8, Either<DefinitionHeader, Data>), RecordHeaderError> {
        let r = r[0];

        bitfield! {
            struct RecordHeader(u8) {
                [0..4] local_type: u8,
                [6] is_definition,
                [7] is_compressed,
            }
        }

        let header = RecordHeader(r);

        if header.is_compressed() {
            Err(RecordHeaderError::CompressedTimestamp)?;
        }

        let local_type = header.local_type();

        let successor = if header.is_definition() {
            Left(DefinitionHeader { local_type })
        } else {
            Right(Data(()))
        };

        Ok((local_type, successor))
    }
}
