//! Names for global messages and their fields, and the base type table.
//!
//! Names are advisory: decoding never depends on a lookup succeeding. The
//! built-in [`Profile`] covers a handful of common messages. To add or replace
//! names without touching the decoder, wrap a catalog in [`Extended`].
//!
//! ```
//! let catalog = Extended::new(Profile)
//!     .with_message(18, "Session")
//!     .with_field(18, 7, "Total Elapsed Time");
//!
//! let records = Records::with_catalog(SliceCursor::new(&data), &catalog);
//! ```

use alloc::{collections::BTreeMap, string::String};

use zerocopy::TryFromBytes;

/// Resolve human-readable names for global messages and their fields.
pub trait Catalog {
    /// The name of a global message, if one is known.
    fn message_name(&self, global: u16) -> Option<&str>;
    /// The name of a field of a global message, if one is known.
    fn field_name(&self, global: u16, field: u8) -> Option<&str>;
}

impl<C: Catalog + ?Sized> Catalog for &C {
    fn message_name(&self, global: u16) -> Option<&str> {
        (**self).message_name(global)
    }

    fn field_name(&self, global: u16, field: u8) -> Option<&str> {
        (**self).field_name(global, field)
    }
}

/// Built-in message and field names.
#[derive(Debug, Default, Clone, Copy)]
pub struct Profile;

impl Catalog for Profile {
    fn message_name(&self, global: u16) -> Option<&str> {
        Some(match global {
            0 => "File ID",
            1 => "Capabilities",
            2 => "Device Settings",
            20 => "Record",
            21 => "Event",
            23 => "Device Info",
            49 => "File Creator",
            _ => return None,
        })
    }

    fn field_name(&self, global: u16, field: u8) -> Option<&str> {
        Some(match (global, field) {
            (0, 0) => "Type",
            (0, 1) => "Manufacturer",
            (0, 2) => "Product",
            (0, 3) => "Serial Number",
            (0, 4) => "Time Created",
            (0, 5) => "Number",

            (20, 0) => "Latitude",
            (20, 1) => "Longitude",
            (20, 2) => "Altitude",
            (20, 3) => "Heart Rate",
            (20, 4) => "Cadence",
            (20, 5) => "Distance",
            (20, 6) => "Speed",
            (20, 7) => "Power",
            (20, 8) => "Compressed Speed/Distance",
            (20, 9) => "Grade",
            (20, 10) => "Resistance",
            (20, 11) => "Time from Course",
            (20, 12) => "Cycle Length",
            (20, 13) => "Temperature",

            (21, 0) => "Event",
            (21, 1) => "Event Type",
            (21, 2) => "Data16",
            (21, 3) => "Data",
            (21, 4) => "Event Group",

            (23, 0) => "Device Index",
            (23, 1) => "Device Type",
            (23, 2) => "Manufacturer",
            (23, 3) => "Serial Number",
            (23, 4) => "Product",
            (23, 5) => "Software Version",
            (23, 6) => "Hardware Version",
            (23, 7) => "Cumulative Operating Time",
            (23, 8) => "Unknown (8)",
            (23, 10) => "Battery Voltage",
            (23, 11) => "Battery Status",

            (49, 0) => "Software Version",
            (49, 1) => "Hardware Version",

            (20 | 21 | 23, 253) => "Timestamp",

            _ => return None,
        })
    }
}

/// A catalog layering caller-supplied names over another.
///
/// Names added here take precedence; lookups falling through are answered by
/// the base catalog.
#[derive(Debug, Default, Clone)]
pub struct Extended<C> {
    base: C,
    messages: BTreeMap<u16, String>,
    fields: BTreeMap<(u16, u8), String>,
}

impl<C: Catalog> Extended<C> {
    pub fn new(base: C) -> Self {
        Self {
            base,
            messages: BTreeMap::new(),
            fields: BTreeMap::new(),
        }
    }

    /// Name a global message.
    pub fn with_message(mut self, global: u16, name: impl Into<String>) -> Self {
        self.messages.insert(global, name.into());
        self
    }

    /// Name a field of a global message.
    pub fn with_field(mut self, global: u16, field: u8, name: impl Into<String>) -> Self {
        self.fields.insert((global, field), name.into());
        self
    }
}

impl<C: Catalog> Catalog for Extended<C> {
    fn message_name(&self, global: u16) -> Option<&str> {
        self.messages
            .get(&global)
            .map(String::as_str)
            .or_else(|| self.base.message_name(global))
    }

    fn field_name(&self, global: u16, field: u8) -> Option<&str> {
        self.fields
            .get(&(global, field))
            .map(String::as_str)
            .or_else(|| self.base.field_name(global, field))
    }
}

/// Convert an angle in semicircles to degrees.
///
/// Positions are stored as signed 32-bit semicircles, where 2^31 semicircles
/// make 180 degrees.
pub fn semicircles_to_degrees(v: i32) -> f64 {
    f64::from(v) * 180.0 / 2_147_483_648.0
}

/// The primitive encoding declared for a field.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromBytes)]
pub enum BaseType {
    Enum = 0x00,
    Sint8 = 0x01,
    Uint8 = 0x02,
    Sint16 = 0x83,
    Uint16 = 0x84,
    Sint32 = 0x85,
    Uint32 = 0x86,
    String = 0x07,
    Float32 = 0x88,
    Float64 = 0x89,
    Uint8z = 0x0A,
    Uint16z = 0x8B,
    Uint32z = 0x8C,
    Byte = 0x0D,
    Sint64 = 0x8E,
    Uint64 = 0x8F,
    Uint64z = 0x90,
}

impl BaseType {
    /// Look up a base type by its declared byte.
    pub fn from_byte(b: u8) -> Option<Self> {
        zerocopy::try_transmute!(b).ok()
    }

    /// Width of a single value in bytes.
    pub fn width(self) -> u8 {
        match self {
            Self::Enum | Self::Sint8 | Self::Uint8 | Self::String | Self::Uint8z | Self::Byte => 1,
            Self::Sint16 | Self::Uint16 | Self::Uint16z => 2,
            Self::Sint32 | Self::Uint32 | Self::Float32 | Self::Uint32z => 4,
            Self::Float64 | Self::Sint64 | Self::Uint64 | Self::Uint64z => 8,
        }
    }

    pub fn is_signed(self) -> bool {
        matches!(
            self,
            Self::Sint8 | Self::Sint16 | Self::Sint32 | Self::Sint64 | Self::Float32 | Self::Float64
        )
    }

    /// The raw value marking a field as holding no data.
    pub fn invalid_value(self) -> u64 {
        match self {
            Self::String | Self::Uint8z | Self::Uint16z | Self::Uint32z | Self::Uint64z => 0,
            Self::Sint8 => 0x7F,
            Self::Sint16 => 0x7FFF,
            Self::Sint32 => 0x7FFF_FFFF,
            Self::Sint64 => 0x7FFF_FFFF_FFFF_FFFF,
            _ => u64::MAX >> (64 - 8 * self.width() as u32),
        }
    }
}
