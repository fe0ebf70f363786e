//! Entity ID allocation and bridge-spawned entity tracking.

use std::sync::atomic::{AtomicI64, Ordering};

use mc_bridge_proto::types::Vec3;

/// Monotonic source of Bedrock entity IDs for one session.
pub struct EntityIdAllocator {
    next: AtomicI64,
}

impl EntityIdAllocator {
    pub fn new(start: i64) -> Self {
        Self {
            next: AtomicI64::new(start),
        }
    }

    /// Allocate the next unique entity ID.
    pub fn allocate(&self) -> i64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }

    /// Next ID that will be allocated.
    pub fn current(&self) -> i64 {
        self.next.load(Ordering::Relaxed)
    }
}

/// The session's own player as the Bedrock client sees it.
#[derive(Debug, Clone)]
pub struct PlayerEntity {
    pub entity_id: i64,
    pub position: Vec3,
}

/// Entities known to the session that have no Java counterpart.
pub struct EntityCache {
    allocator: EntityIdAllocator,
    proxies: Vec<i64>,
}

impl Default for EntityCache {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityCache {
    pub fn new() -> Self {
        Self {
            allocator: EntityIdAllocator::new(1),
            proxies: Vec::new(),
        }
    }

    pub fn allocate_entity_id(&self) -> i64 {
        self.allocator.allocate()
    }

    /// Remember a proxy entity spawned on the client.
    pub fn track_proxy(&mut self, entity_id: i64) {
        self.proxies.push(entity_id);
    }

    pub fn proxies(&self) -> &[i64] {
        &self.proxies
    }

    /// Forget every tracked proxy, returning their IDs in spawn order.
    pub fn take_proxies(&mut self) -> Vec<i64> {
        std::mem::take(&mut self.proxies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocator_is_monotonic() {
        let alloc = EntityIdAllocator::new(10);
        assert_eq!(alloc.allocate(), 10);
        assert_eq!(alloc.allocate(), 11);
        assert_eq!(alloc.current(), 12);
    }

    #[test]
    fn proxies_taken_in_order() {
        let mut cache = EntityCache::new();
        let a = cache.allocate_entity_id();
        let b = cache.allocate_entity_id();
        assert_ne!(a, b);
        cache.track_proxy(a);
        cache.track_proxy(b);
        assert_eq!(cache.proxies(), &[a, b]);
        assert_eq!(cache.take_proxies(), vec![a, b]);
        assert!(cache.proxies().is_empty());
    }
}
