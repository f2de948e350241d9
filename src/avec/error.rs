use thiserror::Error;

use crate::sans::{
    data::DataError,
    definition::DefinitionError,
    header::{DocumentHeaderError, RecordHeaderError},
};

#[cfg(feature = "std")]
extern crate std;

/// Errors occurring while decoding a document.
///
/// Offsets count bytes from the start of the document, including its header.
#[derive(Debug, Error)]
pub enum Error {
    /// The input ended before a complete header or record could be read.
    #[error("Unexpectedly reached the end of input at {offset} ({available} of {expected} bytes).")]
    TruncatedInput {
        offset: usize,
        expected: usize,
        available: usize,
    },
    /// Incorrect file type marker.
    #[error("Incorrect file type marker ({0:?}).")]
    InvalidMagic([u8; 4]),
    /// Unknown header length.
    #[error("Unknown header length ({0}).")]
    UnknownHeaderLength(u8),
    /// Found an unsupported compressed timestamp header.
    #[error("Found an unsupported compressed timestamp header at {offset}.")]
    CompressedTimestamp { offset: usize },
    /// A data record uses a local message type with no preceding definition.
    #[error("Data record at {offset} uses undefined local message type {local_type}.")]
    UndefinedLocalType { offset: usize, local_type: u8 },
    /// A definition record declares big-endian fields.
    #[error("Definition record at {offset} declares unsupported architecture {architecture}.")]
    UnsupportedArchitecture { offset: usize, architecture: u8 },
    /// A field width is not one, two, or four bytes.
    #[error("Field {field_number} at {offset} has an unsupported width ({byte_size} bytes).")]
    UnsupportedFieldWidth {
        offset: usize,
        field_number: u8,
        byte_size: u8,
    },
    /// Records extend beyond the payload size declared in the header.
    #[error(
        "Record at {offset} ends {consumed} bytes into the payload, beyond its declared size ({declared})."
    )]
    PayloadSizeMismatch {
        offset: usize,
        declared: u32,
        consumed: usize,
    },
    /// An error from the supplied reader.
    #[cfg(feature = "std")]
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<DocumentHeaderError> for Error {
    fn from(err: DocumentHeaderError) -> Self {
        match err {
            DocumentHeaderError::InvalidMagic(found) => Self::InvalidMagic(found),
            DocumentHeaderError::UnknownHeaderLength(size) => Self::UnknownHeaderLength(size),
        }
    }
}

impl Error {
    pub(crate) fn record_header(err: RecordHeaderError, offset: usize) -> Self {
        match err {
            RecordHeaderError::CompressedTimestamp => Self::CompressedTimestamp { offset },
        }
    }

    pub(crate) fn definition(err: DefinitionError, offset: usize) -> Self {
        match err {
            DefinitionError::UnsupportedArchitecture(architecture) => {
                Self::UnsupportedArchitecture {
                    offset,
                    architecture,
                }
            }
        }
    }

    pub(crate) fn data(err: DataError, offset: usize) -> Self {
        match err {
            DataError::UnsupportedFieldWidth {
                field_number,
                byte_size,
            } => Self::UnsupportedFieldWidth {
                offset,
                field_number,
                byte_size,
            },
        }
    }
}
