//! Block lookups against the bridge's view of the Java world.

use std::collections::HashMap;

use tracing::debug;

use mc_bridge_proto::types::{BlockPos, ChunkPos};

use crate::block_translator::BlockState;
use crate::chunk::ChunkColumn;

/// Source of block states for a session.
pub trait WorldManager {
    /// State at `pos`, or [`BlockState::AIR`] when nothing is known about it.
    fn block_at(&self, pos: BlockPos) -> BlockState;
}

/// Chunk columns received from the Java server.
///
/// When caching is disabled every lookup answers air, so callers cannot
/// distinguish "air" from "unknown".
pub struct ChunkCache {
    enabled: bool,
    chunks: HashMap<ChunkPos, ChunkColumn>,
}

impl ChunkCache {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            chunks: HashMap::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn cache_chunk(&mut self, pos: ChunkPos, column: ChunkColumn) {
        if !self.enabled {
            return;
        }
        self.chunks.insert(pos, column);
    }

    pub fn contains_chunk(&self, pos: ChunkPos) -> bool {
        self.chunks.contains_key(&pos)
    }

    pub fn remove_chunk(&mut self, pos: ChunkPos) {
        self.chunks.remove(&pos);
    }

    /// Apply a single block change. Ignored for chunks not in the cache.
    pub fn update_block(&mut self, pos: BlockPos, state: BlockState) {
        let Some(column) = self.chunks.get_mut(&pos.chunk_pos()) else {
            debug!("Block update at {pos} for uncached chunk");
            return;
        };
        column.set((pos.x & 15) as usize, pos.y, (pos.z & 15) as usize, state);
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}

impl WorldManager for ChunkCache {
    fn block_at(&self, pos: BlockPos) -> BlockState {
        if !self.enabled {
            return BlockState::AIR;
        }
        match self.chunks.get(&pos.chunk_pos()) {
            Some(column) => {
                column.get((pos.x & 15) as usize, pos.y, (pos.z & 15) as usize)
            }
            None => BlockState::AIR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache_with_stone_at(pos: BlockPos) -> ChunkCache {
        let mut cache = ChunkCache::new(true);
        cache.cache_chunk(pos.chunk_pos(), ChunkColumn::new());
        cache.update_block(pos, BlockState::new(1));
        cache
    }

    #[test]
    fn lookup_cached_block() {
        let pos = BlockPos::new(10, 64, 10);
        let cache = cache_with_stone_at(pos);
        assert_eq!(cache.block_at(pos), BlockState::new(1));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn negative_coordinates_map_into_chunk() {
        let pos = BlockPos::new(-1, 70, -17);
        let cache = cache_with_stone_at(pos);
        assert_eq!(cache.block_at(pos), BlockState::new(1));
        assert_eq!(cache.block_at(BlockPos::new(-2, 70, -17)), BlockState::AIR);
    }

    #[test]
    fn uncached_chunk_is_air() {
        let cache = ChunkCache::new(true);
        assert!(cache.block_at(BlockPos::new(100, 64, 100)).is_air());
    }

    #[test]
    fn disabled_cache_is_always_air() {
        let mut cache = ChunkCache::new(false);
        let pos = BlockPos::new(0, 64, 0);
        cache.cache_chunk(pos.chunk_pos(), ChunkColumn::new());
        cache.update_block(pos, BlockState::new(1));
        assert!(!cache.is_enabled());
        assert!(cache.is_empty());
        assert!(cache.block_at(pos).is_air());
    }

    #[test]
    fn removed_chunk_is_air() {
        let pos = BlockPos::new(5, 5, 5);
        let mut cache = cache_with_stone_at(pos);
        cache.remove_chunk(pos.chunk_pos());
        assert!(!cache.contains_chunk(pos.chunk_pos()));
        assert!(cache.block_at(pos).is_air());
    }
}
