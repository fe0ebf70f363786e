//! World-side lookups for the bridge: cached Java chunks and the
//! block/item identifier tables.

pub mod block_translator;
pub mod chunk;
pub mod error;
pub mod item_registry;
pub mod world_manager;

pub use block_translator::{item_identity_of, BlockState, BlockTranslator};
pub use error::WorldError;
pub use item_registry::{ItemEntry, ItemRegistry};
pub use world_manager::{ChunkCache, WorldManager};
