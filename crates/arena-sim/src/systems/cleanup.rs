//! Cleanup system: finishes despawn sequences.

use hecs::{Entity, World};

use crate::ecs_host::Dying;

/// Count down every `Dying` entity and despawn the ones that reached zero.
///
/// `despawned` is cleared first and left holding the removed entities so
/// the caller can report them.
pub fn run(world: &mut World, despawned: &mut Vec<Entity>) {
    despawned.clear();

    for (entity, dying) in world.query_mut::<&mut Dying>() {
        if dying.ticks_left == 0 {
            despawned.push(entity);
        } else {
            dying.ticks_left -= 1;
        }
    }

    for &entity in despawned.iter() {
        let _ = world.despawn(entity);
    }
}
