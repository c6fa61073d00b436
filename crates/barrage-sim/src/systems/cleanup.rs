//! Cleanup system: despawns projectiles marked for removal and culls
//! anything that escaped the world boundary.
//!
//! Uses the engine's pre-allocated buffer to avoid per-tick allocation.

use hecs::{Entity, World};

use barrage_core::components::{Position, Projectile};
use barrage_core::constants::WORLD_RADIUS;

/// Despawn everything collected during this tick, then clear the buffer.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    // Out-of-bounds projectiles (a retarget should always pull them back,
    // so this is a backstop).
    let radius_sq = WORLD_RADIUS * WORLD_RADIUS;
    for (entity, (_projectile, pos)) in world.query_mut::<(&Projectile, &Position)>() {
        if pos.0.length_squared() > radius_sq {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        // Double removal (e.g. expired and out of bounds) is harmless.
        let _ = world.despawn(entity);
    }
}
