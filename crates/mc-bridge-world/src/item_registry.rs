//! Java item registry: resolves the contents of a Java inventory slot to
//! its canonical identifier and Bedrock counterpart.

use std::collections::HashMap;

use serde::Deserialize;

use mc_bridge_proto::java::JavaItemStack;

use crate::error::WorldError;

/// Default item table (protocol 578).
const JAVA_ITEMS_JSON: &str = include_str!("../data/java_items.json");

#[derive(Deserialize)]
struct RawItemEntry {
    java_id: i32,
    bedrock_id: i32,
    #[serde(default)]
    bedrock_data: i32,
}

/// Mapping data for a single item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemEntry {
    /// Namespaced Java identifier, e.g. `"minecraft:stone"`.
    pub java_identifier: String,
    pub java_id: i32,
    pub bedrock_id: i32,
    pub bedrock_data: i32,
}

/// Registry of known Java items keyed by numeric ID.
pub struct ItemRegistry {
    by_id: HashMap<i32, ItemEntry>,
    by_identifier: HashMap<String, i32>,
}

impl Default for ItemRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemRegistry {
    /// Build from the embedded item table.
    pub fn new() -> Self {
        Self::from_json(JAVA_ITEMS_JSON).expect("invalid java_items.json")
    }

    pub fn from_json(json: &str) -> Result<Self, WorldError> {
        let raw: HashMap<String, RawItemEntry> = serde_json::from_str(json)?;
        let mut registry = Self {
            by_id: HashMap::with_capacity(raw.len()),
            by_identifier: HashMap::with_capacity(raw.len()),
        };
        for (name, entry) in raw {
            if let Some(existing) = registry.by_id.get(&entry.java_id) {
                return Err(WorldError::DuplicateItemId {
                    id: entry.java_id,
                    first: existing.java_identifier.clone(),
                    second: name,
                });
            }
            registry.insert(ItemEntry {
                java_identifier: name,
                java_id: entry.java_id,
                bedrock_id: entry.bedrock_id,
                bedrock_data: entry.bedrock_data,
            });
        }
        Ok(registry)
    }

    fn insert(&mut self, entry: ItemEntry) {
        self.by_identifier
            .insert(entry.java_identifier.clone(), entry.java_id);
        self.by_id.insert(entry.java_id, entry);
    }

    /// Resolve slot contents. `None` when the item ID is not registered.
    pub fn lookup(&self, stack: &JavaItemStack) -> Option<&ItemEntry> {
        self.by_id.get(&stack.id)
    }

    pub fn get_by_identifier(&self, identifier: &str) -> Option<&ItemEntry> {
        self.by_identifier
            .get(identifier)
            .and_then(|id| self.by_id.get(id))
    }

    /// Register an extra item (e.g. from a server mod). No-op if the ID or
    /// identifier is already known.
    pub fn register_item(&mut self, entry: ItemEntry) {
        if self.by_id.contains_key(&entry.java_id)
            || self.by_identifier.contains_key(&entry.java_identifier)
        {
            return;
        }
        self.insert(entry);
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
