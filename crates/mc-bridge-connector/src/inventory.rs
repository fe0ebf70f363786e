//! Java inventory views mirrored for a session.
//!
//! Slots use Java window numbering. For the player window: 0 crafting
//! output, 1-4 crafting grid, 5-8 armor, 9-35 main storage, 36-44 hotbar,
//! 45 offhand.

use std::ops::RangeInclusive;

use mc_bridge_proto::java::JavaItemStack;

/// Player window size (protocol 578).
pub const PLAYER_INVENTORY_SIZE: usize = 46;

/// Window slots of the hotbar. Hotbar position = slot - 36.
pub const HOTBAR_SLOTS: RangeInclusive<usize> = 36..=44;

/// Window slots of main storage.
pub const MAIN_SLOTS: RangeInclusive<usize> = 9..=35;

/// Offset between a hotbar window slot and its hotbar position.
pub const HOTBAR_OFFSET: usize = 36;

/// A Java window's slots. Empty slots are `None`.
#[derive(Debug, Clone)]
pub struct Inventory {
    window_id: u8,
    title: String,
    slots: Vec<Option<JavaItemStack>>,
}

impl Inventory {
    pub fn new(window_id: u8, title: impl Into<String>, size: usize) -> Self {
        Self {
            window_id,
            title: title.into(),
            slots: vec![None; size],
        }
    }

    /// The player's own window (ID 0).
    pub fn player() -> Self {
        Self::new(0, "Inventory", PLAYER_INVENTORY_SIZE)
    }

    pub fn window_id(&self) -> u8 {
        self.window_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn size(&self) -> usize {
        self.slots.len()
    }

    /// Contents of `slot`; out-of-range slots read as empty.
    pub fn item(&self, slot: usize) -> Option<&JavaItemStack> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    /// Returns `false` if `slot` is outside the window.
    pub fn set_item(&mut self, slot: usize, item: Option<JavaItemStack>) -> bool {
        match self.slots.get_mut(slot) {
            Some(s) => {
                *s = item;
                true
            }
            None => false,
        }
    }
}

/// The player window, the held hotbar slot and the currently open container.
#[derive(Debug, Clone)]
pub struct InventoryCache {
    player: Inventory,
    held_item_slot: u8,
    open: Option<Inventory>,
}

impl Default for InventoryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryCache {
    pub fn new() -> Self {
        Self {
            player: Inventory::player(),
            held_item_slot: 0,
            open: None,
        }
    }

    pub fn player(&self) -> &Inventory {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Inventory {
        &mut self.player
    }

    /// Currently selected hotbar position (0-8).
    pub fn held_item_slot(&self) -> u8 {
        self.held_item_slot
    }

    pub fn set_held_item_slot(&mut self, slot: u8) {
        debug_assert!(slot < 9);
        self.held_item_slot = slot;
    }

    pub fn open_inventory(&self) -> Option<&Inventory> {
        self.open.as_ref()
    }

    pub fn open_inventory_mut(&mut self) -> Option<&mut Inventory> {
        self.open.as_mut()
    }

    /// Record a container the client now has open, replacing any previous one.
    pub fn open(&mut self, inventory: Inventory) {
        self.open = Some(inventory);
    }

    pub fn close(&mut self) -> Option<Inventory> {
        self.open.take()
    }

    /// The view block picking searches: the open container, else the player.
    pub fn active(&self) -> &Inventory {
        self.open.as_ref().unwrap_or(&self.player)
    }
}
