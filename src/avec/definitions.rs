use crate::sans::definition::Definition;

/// Store of the most recent definition for each local message type.
///
/// Each decode owns its own table; a definition for a local message type
/// replaces any earlier one for the same type.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LocalDefinitions([Option<Definition>; 16]);

impl LocalDefinitions {
    /// An empty table, with no local message type defined.
    pub fn new() -> Self {
        Self::default()
    }

    /// The definition in effect for a local message type. Only the low four
    /// bits of `local_type` are significant.
    pub fn get(&self, local_type: u8) -> Option<&Definition> {
        self.0[(local_type & 0x0F) as usize].as_ref()
    }

    /// Store a definition under its local message type, returning the
    /// definition it replaces.
    pub fn insert(&mut self, definition: Definition) -> Option<Definition> {
        let slot = &mut self.0[(definition.local_type & 0x0F) as usize];
        slot.replace(definition)
    }

    /// Definitions in effect, by ascending local message type.
    pub fn iter(&self) -> impl Iterator<Item = &Definition> {
        self.0.iter().flatten()
    }
}
