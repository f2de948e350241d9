use alloc::vec::Vec;

use either::Either::{Left, Right};

use crate::{
    catalog::{BaseType, Catalog, semicircles_to_degrees},
    sans::{
        data::{AnyField, Data},
        definition::{Definition, DefinitionHeader},
        header::RecordHeader,
    },
};

use super::{Cursor, Error, LocalDefinitions};

/// A record decoded from a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record<'c> {
    /// A definition, as stored for its local message type.
    Definition(Definition),
    /// A data record, decoded with the definition for its local message type.
    Data(DataRecord<'c>),
}

/// The decoded fields of a data record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataRecord<'c> {
    pub local_type: u8,
    pub global_message_number: u16,
    pub message_name: Option<&'c str>,
    /// Fields in definition order.
    pub fields: Vec<DataField<'c>>,
}

impl DataRecord<'_> {
    /// The value of a field. If the definition repeats a field number, the
    /// last occurrence is returned.
    pub fn get(&self, field_number: u8) -> Option<u32> {
        self.fields
            .iter()
            .rev()
            .find(|f| f.field_number == field_number)
            .map(|f| f.value)
    }
}

/// A single decoded field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataField<'c> {
    pub field_number: u8,
    pub name: Option<&'c str>,
    /// The declared base type, if it is a known one.
    pub base_type: Option<BaseType>,
    /// The field bytes read as an unsigned little-endian integer.
    pub value: u32,
}

impl DataField<'_> {
    /// Whether the value is its base type's marker for holding no data.
    pub fn is_invalid(&self) -> bool {
        self.base_type
            .is_some_and(|t| u64::from(self.value) == t.invalid_value())
    }

    /// The value as a signed 32-bit angle in semicircles, converted to
    /// degrees.
    pub fn degrees(&self) -> f64 {
        semicircles_to_degrees(self.value as i32)
    }
}

/// Decode a single record, starting at its record header.
///
/// Definition records are stored in `definitions`, replacing any earlier
/// definition for their local message type. Data records are decoded with the
/// stored definition, and their names resolved through `catalog`.
pub fn decode_next<'c, C: Catalog + ?Sized>(
    r: &mut impl Cursor,
    definitions: &mut LocalDefinitions,
    catalog: &'c C,
) -> Result<Record<'c>, Error> {
    let offset = r.position();

    let (local_type, successor) = RecordHeader(())
        .advance(r.take()?)
        .map_err(|err| Error::record_header(err, offset))?;

    match successor {
        Left(state) => decode_definition(state, r, definitions).map(Record::Definition),
        Right(state) => {
            let definition = definitions
                .get(local_type)
                .ok_or(Error::UndefinedLocalType { offset, local_type })?;

            decode_data(state, r, definition, catalog).map(Record::Data)
        }
    }
}

fn decode_definition(
    state: DefinitionHeader,
    r: &mut impl Cursor,
    definitions: &mut LocalDefinitions,
) -> Result<Definition, Error> {
    let offset = r.position();

    let successor = state
        .advance(r.take()?)
        .map_err(|err| Error::definition(err, offset))?;

    let definition = match successor {
        Left(mut state) => loop {
            state = match state.advance(r.take()?) {
                Left(state) => state,
                Right(definition) => break definition,
            };
        },
        Right(definition) => definition,
    };

    log::debug!(
        "definition at {offset}: local type {} is global message {} with {} fields",
        definition.local_type,
        definition.global_message_number,
        definition.fields.len(),
    );

    if let Some(previous) = definitions.insert(definition.clone()) {
        log::debug!(
            "local type {} redefined (was global message {})",
            previous.local_type,
            previous.global_message_number,
        );
    }

    Ok(definition)
}

fn decode_data<'c, C: Catalog + ?Sized>(
    state: Data,
    r: &mut impl Cursor,
    definition: &Definition,
    catalog: &'c C,
) -> Result<DataRecord<'c>, Error> {
    let global = definition.global_message_number;
    let mut fields = Vec::with_capacity(definition.fields.len());

    let mut state = state
        .advance(definition)
        .map_err(|err| Error::data(err, r.position()))?;

    while let Left(field) = state {
        let (field, value, successor) = match field {
            AnyField::U8(s) => s.advance(r.take()?),
            AnyField::U16(s) => s.advance(r.take()?),
            AnyField::U32(s) => s.advance(r.take()?),
        };

        fields.push(DataField {
            field_number: field.field_number,
            name: catalog.field_name(global, field.field_number),
            base_type: field.base_type(),
            value,
        });

        state = successor.map_err(|err| Error::data(err, r.position()))?;
    }

    log::trace!(
        "data record: local type {} ({} fields of global message {global})",
        definition.local_type,
        fields.len(),
    );

    Ok(DataRecord {
        local_type: definition.local_type,
        global_message_number: global,
        message_name: catalog.message_name(global),
        fields,
    })
}
