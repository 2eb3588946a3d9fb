//! Interface between the director and whatever instantiates entities.

use std::fmt::Debug;

use glam::Vec2;

use arena_core::enums::{Container, EntityKind};
use arena_core::types::WorldBounds;

/// The engine side of the arena: creates entities, relays despawn requests
/// and reports the visible world extents.
pub trait EntityHost {
    type Handle: Copy + Eq + Debug;

    /// Create an entity of `kind` at a world position, parented under `container`.
    fn spawn_entity(&mut self, kind: EntityKind, position: Vec2, container: Container) -> Self::Handle;

    /// Tell an entity to begin its own destruction. Fire-and-forget.
    fn notify_despawn(&mut self, handle: Self::Handle);

    /// Whether the entity still exists on the host side.
    fn is_alive(&self, handle: Self::Handle) -> bool;

    /// Half extents of the visible world, centered on the origin.
    fn world_half_extents(&self) -> Vec2;

    /// Size of one placed object.
    fn tile_size(&self) -> Vec2;

    fn world_bounds(&self) -> WorldBounds {
        WorldBounds::new(self.world_half_extents(), self.tile_size())
    }
}
