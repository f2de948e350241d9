//! States processing data records.

use core::marker::PhantomData;

use either::Either::{self, Left, Right};
use thiserror::Error;

use super::{
    definition::{Definition, FieldDefinition},
    header::RecordHeader,
};

/// An error advancing over a data record.
#[derive(Debug, Error)]
pub enum DataError {
    /// A field declares a width no supported base type has.
    #[error("Field {field_number} has an unsupported width ({byte_size} bytes).")]
    UnsupportedFieldWidth { field_number: u8, byte_size: u8 },
}

/// State token to begin decoding a data record.
#[derive(Debug)]
pub struct Data(pub(super) ());

impl Data {
    /// Transition to another state by selecting the definition of this data
    /// record's local message type.
    ///
    /// Returns a state token for the first field, or a record header if the
    /// definition declares no fields.
    pub fn advance(
        self,
        definition: &Definition,
    ) -> Result<Either<AnyField<'_>, RecordHeader>, DataError> {
        next_field(definition, 0)
    }
}

/// State token to decode a field `T` bytes wide.
#[derive(Debug)]
pub struct Field<'d, T> {
    definition: &'d Definition,
    index: usize,
    _phantom: PhantomData<T>,
}

impl<'d, T: FieldInner> Field<'d, T> {
    /// The definition entry of the field being decoded.
    pub fn definition(&self) -> &'d FieldDefinition {
        &self.definition.fields[self.index]
    }

    /// Transition to another state by decoding a field.
    ///
    /// Returns the field's definition entry, its value widened to a `u32`, and
    /// a successor state.
    pub fn advance(
        self,
        r: T::From,
    ) -> (
        &'d FieldDefinition,
        u32,
        Result<Either<AnyField<'d>, RecordHeader>, DataError>,
    ) {
        let value = T::from(r);
        let successor = next_field(self.definition, self.index + 1);

        (self.definition(), value, successor)
    }
}

fn next_field(
    definition: &Definition,
    index: usize,
) -> Result<Either<AnyField<'_>, RecordHeader>, DataError> {
    let Some(field) = definition.fields.get(index) else {
        return Ok(Right(RecordHeader(())));
    };

    fn new_field<T>(definition: &Definition, index: usize) -> Field<'_, T> {
        Field {
            definition,
            index,
            _phantom: PhantomData,
        }
    }

    let successor = match field.byte_size {
        1 => AnyField::U8(new_field(definition, index)),
        2 => AnyField::U16(new_field(definition, index)),
        4 => AnyField::U32(new_field(definition, index)),
        byte_size => Err(DataError::UnsupportedFieldWidth {
            field_number: field.field_number,
            byte_size,
        })?,
    };

    Ok(Left(successor))
}

pub trait FieldInner {
    /// The bytes storing a field of this width.
    type From;

    /// Convert little-endian bytes of this width to an unsigned value.
    fn from(r: Self::From) -> u32;
}

macro_rules! field_inner {
    ($t:ident, $into:ident, $(#[$attr:meta])*) => {
        $(#[$attr])*
        #[derive(Debug)]
        pub struct $t;

        impl FieldInner for $t {
            type From = [u8; size_of::<$into>()];

            fn from(r: Self::From) -> u32 {
                $into::from_le_bytes(r).into()
            }
        }
    };
}

field_inner!(U8, u8, /** One byte. */);
field_inner!(U16, u16, /** Two little-endian bytes. */);
field_inner!(U32, u32, /** Four little-endian bytes. */);

/// A `Field` state token for a supported width.
#[derive(Debug)]
pub enum AnyField<'d> {
    U8(Field<'d, U8>),
    U16(Field<'d, U16>),
    U32(Field<'d, U32>),
}
