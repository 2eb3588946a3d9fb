//! Headless entity host backed by a hecs world.
//!
//! Spawned entities carry their kind, container and world position.
//! A despawn request does not remove the entity right away: it gets a
//! `Dying` component and the cleanup system removes it a few ticks later.

use glam::Vec2;
use hecs::{Entity, World};
use serde::{Deserialize, Serialize};

use arena_core::enums::{Container, EntityKind};
use arena_core::types::WorldBounds;

use crate::host::EntityHost;

/// What the director asked to spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArenaEntity {
    pub kind: EntityKind,
    pub container: Container,
}

/// World-space position of a spawned entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldPosition(pub Vec2);

/// Despawn sequence in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dying {
    pub ticks_left: u32,
}

/// Entity host over a hecs world.
pub struct EcsHost {
    world: World,
    bounds: WorldBounds,
    despawn_delay_ticks: u32,
}

impl EcsHost {
    pub fn new(bounds: WorldBounds, despawn_delay_ticks: u32) -> Self {
        Self {
            world: World::new(),
            bounds,
            despawn_delay_ticks,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Destroy an entity immediately. Returns false if it was already gone.
    pub fn kill(&mut self, entity: Entity) -> bool {
        self.world.despawn(entity).is_ok()
    }

    /// Live entities of a kind that are not already dying, ordered by id.
    pub fn find(&self, kind: EntityKind) -> Vec<Entity> {
        let mut found: Vec<Entity> = self
            .world
            .query::<(&ArenaEntity, Option<&Dying>)>()
            .iter()
            .filter(|(_, (e, dying))| e.kind == kind && dying.is_none())
            .map(|(entity, _)| entity)
            .collect();
        found.sort_by_key(|e| e.id());
        found
    }

    /// Entities of a kind still in the world, dying or not.
    pub fn count(&self, kind: EntityKind) -> usize {
        self.world
            .query::<&ArenaEntity>()
            .iter()
            .filter(|(_, e)| e.kind == kind)
            .count()
    }

    pub fn position(&self, entity: Entity) -> Option<Vec2> {
        self.world.get::<&WorldPosition>(entity).ok().map(|p| p.0)
    }
}

impl EntityHost for EcsHost {
    type Handle = Entity;

    fn spawn_entity(&mut self, kind: EntityKind, position: Vec2, container: Container) -> Entity {
        self.world
            .spawn((ArenaEntity { kind, container }, WorldPosition(position)))
    }

    fn notify_despawn(&mut self, handle: Entity) {
        let dying = Dying {
            ticks_left: self.despawn_delay_ticks,
        };
        // Gone already: nothing to tell.
        let _ = self.world.insert_one(handle, dying);
    }

    fn is_alive(&self, handle: Entity) -> bool {
        self.world.contains(handle)
    }

    fn world_half_extents(&self) -> Vec2 {
        self.bounds.half_extents
    }

    fn tile_size(&self) -> Vec2 {
        self.bounds.tile_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_and_query() {
        let mut host = EcsHost::new(WorldBounds::default(), 2);
        let a = host.spawn_entity(EntityKind::Obstacle, Vec2::new(1.5, 2.5), Container::Navigation);
        let b = host.spawn_entity(EntityKind::RoamingThreat, Vec2::ZERO, Container::Root);

        assert!(host.is_alive(a));
        assert_eq!(host.position(a), Some(Vec2::new(1.5, 2.5)));
        assert_eq!(host.find(EntityKind::RoamingThreat), vec![b]);
        assert_eq!(host.count(EntityKind::Prop), 0);
        assert_eq!(host.world_bounds(), WorldBounds::default());
    }

    #[test]
    fn test_notify_marks_dying() {
        let mut host = EcsHost::new(WorldBounds::default(), 2);
        let a = host.spawn_entity(EntityKind::Prop, Vec2::ZERO, Container::Navigation);
        host.notify_despawn(a);

        assert!(host.is_alive(a));
        assert!(host.find(EntityKind::Prop).is_empty());
        assert_eq!(host.count(EntityKind::Prop), 1);
        assert_eq!(host.world().get::<&Dying>(a).unwrap().ticks_left, 2);
    }

    #[test]
    fn test_kill_and_notify_dead_handle() {
        let mut host = EcsHost::new(WorldBounds::default(), 2);
        let a = host.spawn_entity(EntityKind::StationaryThreat, Vec2::ZERO, Container::Navigation);
        assert!(host.kill(a));
        assert!(!host.kill(a));
        assert!(!host.is_alive(a));
        host.notify_despawn(a);
        assert_eq!(host.count(EntityKind::StationaryThreat), 0);
    }
}
