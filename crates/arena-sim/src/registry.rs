//! Live entity bookkeeping, one ordered list per entity kind.

use arena_core::enums::EntityKind;
use arena_core::types::{KindCounts, KindMap};

/// Handles of entities the director spawned and still considers alive.
#[derive(Debug, Clone)]
pub struct EntityRegistry<H> {
    lists: KindMap<Vec<H>>,
}

impl<H> Default for EntityRegistry<H> {
    fn default() -> Self {
        Self {
            lists: KindMap::from_fn(|_| Vec::new()),
        }
    }
}

impl<H: Copy + Eq> EntityRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, kind: EntityKind, handle: H) {
        debug_assert!(self.kind_of(handle).is_none(), "handle registered twice");
        self.lists[kind].push(handle);
    }

    /// Forget a handle. Returns the kind it was registered under.
    pub fn remove(&mut self, handle: H) -> Option<EntityKind> {
        for (kind, list) in self.lists.iter_mut() {
            if let Some(pos) = list.iter().position(|h| *h == handle) {
                list.remove(pos);
                return Some(kind);
            }
        }
        None
    }

    pub fn kind_of(&self, handle: H) -> Option<EntityKind> {
        self.lists
            .iter()
            .find(|(_, list)| list.contains(&handle))
            .map(|(kind, _)| kind)
    }

    /// Drop every handle for which `is_alive` is false. Returns how many went.
    pub fn prune(&mut self, mut is_alive: impl FnMut(H) -> bool) -> usize {
        let mut removed = 0;
        for (_, list) in self.lists.iter_mut() {
            let before = list.len();
            list.retain(|h| is_alive(*h));
            removed += before - list.len();
        }
        removed
    }

    pub fn handles(&self, kind: EntityKind) -> &[H] {
        &self.lists[kind]
    }

    pub fn live_counts(&self) -> KindCounts {
        KindCounts::from_fn(|kind| self.lists[kind].len() as u32)
    }

    pub fn len(&self) -> usize {
        self.lists.iter().map(|(_, list)| list.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        for (_, list) in self.lists.iter_mut() {
            list.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_remove() {
        let mut registry = EntityRegistry::new();
        registry.register(EntityKind::Obstacle, 1u32);
        registry.register(EntityKind::RoamingThreat, 2);
        registry.register(EntityKind::RoamingThreat, 3);

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.kind_of(3), Some(EntityKind::RoamingThreat));
        assert_eq!(registry.remove(2), Some(EntityKind::RoamingThreat));
        assert_eq!(registry.remove(2), None);
        assert_eq!(registry.handles(EntityKind::RoamingThreat), &[3]);
    }

    #[test]
    fn test_prune_keeps_order() {
        let mut registry = EntityRegistry::new();
        for h in 0..6u32 {
            registry.register(EntityKind::Prop, h);
        }
        let removed = registry.prune(|h| h % 2 == 0);
        assert_eq!(removed, 3);
        assert_eq!(registry.handles(EntityKind::Prop), &[0, 2, 4]);
    }

    #[test]
    fn test_live_counts_and_clear() {
        let mut registry = EntityRegistry::new();
        registry.register(EntityKind::StationaryThreat, 10u32);
        registry.register(EntityKind::RoamingThreat, 11);
        registry.register(EntityKind::RoamingThreat, 12);

        let counts = registry.live_counts();
        assert_eq!(counts[EntityKind::StationaryThreat], 1);
        assert_eq!(counts[EntityKind::RoamingThreat], 2);
        assert_eq!(counts.total(), 3);

        registry.clear();
        assert!(registry.is_empty());
    }
}
