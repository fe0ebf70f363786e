//! Java block state ⇄ Java block identifier mapping.
//!
//! Java identifiers carry the state properties in brackets, e.g.
//! `"minecraft:oak_log[axis=y]"`. The bare name before the bracket is the
//! identifier of the item that places the block.

use std::collections::HashMap;
use std::fmt;

use crate::error::WorldError;

/// Default Java block palette (protocol 578).
const JAVA_BLOCKS_JSON: &str = include_str!("../data/java_blocks.json");

/// A Java block state ID. `0` is air, which the chunk cache also reports
/// for positions it holds no data for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BlockState {
    pub id: u32,
}

impl BlockState {
    pub const AIR: Self = Self { id: 0 };

    pub fn new(id: u32) -> Self {
        Self { id }
    }

    pub fn is_air(&self) -> bool {
        self.id == 0
    }
}

impl fmt::Display for BlockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockState({})", self.id)
    }
}

/// Strip the state properties from a Java block identifier.
///
/// `"minecraft:oak_log[axis=y]"` → `"minecraft:oak_log"`.
pub fn item_identity_of(java_identifier: &str) -> &str {
    match java_identifier.find('[') {
        Some(idx) => &java_identifier[..idx],
        None => java_identifier,
    }
}

/// Bidirectional block state table.
#[derive(Debug, Clone)]
pub struct BlockTranslator {
    by_identifier: HashMap<String, BlockState>,
    by_state: HashMap<BlockState, String>,
}

impl Default for BlockTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockTranslator {
    /// Build from the embedded default palette.
    pub fn new() -> Self {
        Self::from_json(JAVA_BLOCKS_JSON).expect("invalid java_blocks.json")
    }

    /// Build from a JSON object mapping identifiers to state IDs.
    ///
    /// Every state ID must appear once so the reverse lookup is well defined.
    pub fn from_json(json: &str) -> Result<Self, WorldError> {
        let raw: HashMap<String, u32> = serde_json::from_str(json)?;

        let mut by_identifier = HashMap::with_capacity(raw.len());
        let mut by_state: HashMap<BlockState, String> = HashMap::with_capacity(raw.len());

        for (identifier, id) in raw {
            let state = BlockState::new(id);
            if let Some(existing) = by_state.get(&state) {
                let (first, second) = if *existing <= identifier {
                    (existing.clone(), identifier)
                } else {
                    (identifier, existing.clone())
                };
                return Err(WorldError::DuplicateBlockState {
                    state: id,
                    first,
                    second,
                });
            }
            by_state.insert(state, identifier.clone());
            by_identifier.insert(identifier, state);
        }

        Ok(Self {
            by_identifier,
            by_state,
        })
    }

    /// Full Java identifier (with properties) for a state.
    pub fn java_identifier(&self, state: BlockState) -> Option<&str> {
        self.by_state.get(&state).map(String::as_str)
    }

    /// State ID for a full Java identifier.
    pub fn java_state(&self, identifier: &str) -> Option<BlockState> {
        self.by_identifier.get(identifier).copied()
    }

    pub fn len(&self) -> usize {
        self.by_state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_state.is_empty()
    }
}
