//! Cleanup system: despawns entities whose lifecycle has fully ended.
//!
//! NPCs go as soon as they are destroyed (their kill events and effects
//! were emitted earlier in the same tick). Projectiles linger until the
//! last trail puff has faded so smoke doesn't vanish mid-air.

use hecs::World;

use skystrike_core::components::{Npc, Projectile};

pub fn run(world: &mut World, despawn_buffer: &mut Vec<hecs::Entity>) {
    for (entity, npc) in world.query_mut::<&Npc>() {
        if npc.destroyed {
            despawn_buffer.push(entity);
        }
    }
    for (entity, proj) in world.query_mut::<&Projectile>() {
        if !proj.active && proj.trail.is_empty() {
            despawn_buffer.push(entity);
        }
    }
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
