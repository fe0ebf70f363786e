//! Java item stack as held in a window slot.

/// Contents of a non-empty Java inventory slot.
///
/// Empty slots are represented as `None` by the inventory that owns them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaItemStack {
    /// Java numeric item ID.
    pub id: i32,
    pub amount: u8,
    /// Raw NBT, if the stack carries any.
    pub nbt: Option<Vec<u8>>,
}

impl JavaItemStack {
    pub fn new(id: i32, amount: u8) -> Self {
        Self {
            id,
            amount,
            nbt: None,
        }
    }
}
