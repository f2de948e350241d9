//! States processing definition records.

use alloc::vec::Vec;

use either::Either::{self, Left, Right};
use thiserror::Error;
use zerocopy::FromBytes;

use crate::catalog::BaseType;

/// A field entry of a definition record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDefinition {
    pub field_number: u8,
    /// Number of bytes the field occupies in each data record.
    pub byte_size: u8,
    pub base_type: u8,
}

impl FieldDefinition {
    /// The declared base type, if it is a known one.
    pub fn base_type(&self) -> Option<BaseType> {
        BaseType::from_byte(self.base_type)
    }
}

/// The layout that data records of a local message type must follow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub local_type: u8,
    pub global_message_number: u16,
    /// Field entries, in the order their bytes appear in data records.
    pub fields: Vec<FieldDefinition>,
}

impl Definition {
    /// Number of bytes a data record following this definition occupies,
    /// excluding its record header.
    pub fn data_size(&self) -> usize {
        self.fields.iter().map(|f| f.byte_size as usize).sum()
    }
}

/// An error advancing over a definition record.
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// Found a big-endian definition (not supported).
    #[error("Found an unsupported architecture ({0}).")]
    UnsupportedArchitecture(u8),
}

/// State token to decode the fixed part of a definition record.
#[derive(Debug)]
pub struct DefinitionHeader {
    pub(super) local_type: u8,
}

#[repr(C, packed)]
#[derive(Debug, FromBytes)]
struct DefinitionMessage {
    _reserved: u8,
    architecture: u8,
    global_message: [u8; 2],
    fields_remaining: u8,
}

impl DefinitionHeader {
    /// Transition to another state by decoding the fixed part of a definition
    /// record.
    ///
    /// Returns a successor state token, or the completed definition if it
    /// declares no fields.
    pub fn advance(
        self,
        r: [u8; 5],
    ) -> Result<Either<DefinitionField, Definition>, DefinitionError> {
        let DefinitionMessage {
            architecture,
            global_message,
            fields_remaining,
            ..
        } = zerocopy::transmute!(r);

        if architecture != 0 {
            Err(DefinitionError::UnsupportedArchitecture(architecture))?;
        }

        let definition = Definition {
            local_type: self.local_type,
            global_message_number: u16::from_le_bytes(global_message),
            fields: Vec::with_capacity(fields_remaining as usize),
        };

        Ok(if fields_remaining != 0 {
            Left(DefinitionField {
                definition,
                fields_remaining,
            })
        } else {
            Right(definition)
        })
    }
}

/// State token to decode a definition field.
#[derive(Debug)]
pub struct DefinitionField {
    definition: Definition,
    fields_remaining: u8,
}

impl DefinitionField {
    /// Transition to another state by decoding a definition field.
    ///
    /// Returns a successor state token, or the completed definition after its
    /// last field.
    pub fn advance(mut self, r: [u8; 3]) -> Either<DefinitionField, Definition> {
        #[repr(C, packed)]
        #[derive(FromBytes)]
        struct FieldHeader {
            field: u8,
            size: u8,
            base_type: u8,
        }

        let FieldHeader {
            field,
            size,
            base_type,
        } = zerocopy::transmute!(r);

        self.definition.fields.push(FieldDefinition {
            field_number: field,
            byte_size: size,
            base_type,
        });

        self.fields_remaining -= 1;

        if self.fields_remaining != 0 {
            Left(self)
        } else {
            Right(self.definition)
        }
    }
}
