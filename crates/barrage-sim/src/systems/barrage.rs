//! Barrage scheduler: decides volley composition and staggers spawns.
//!
//! Scheduling is an explicit deferred-creation queue drained by the tick
//! loop itself: a projectile is logically created at a future tick, never
//! via ambient timers, which keeps the cascade deterministic under a seed.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use barrage_core::components::{Actor, Orientation, Position, Projectile, Station};
use barrage_core::config::Tuning;
use barrage_core::enums::Formation;
use barrage_core::events::SimEvent;
use barrage_core::types::SimTime;

use crate::world_setup;

/// A projectile creation deferred to a future tick.
#[derive(Debug, Clone)]
pub struct DeferredSpawn {
    /// Tick at which this projectile comes into existence.
    pub due_tick: u64,
    pub formation: Formation,
    pub group_index: u32,
    pub group_size: u32,
    /// Launch origin (the station position at scheduling time).
    pub origin: glam::DVec3,
}

/// Pending deferred creations owned by the engine.
#[derive(Debug, Clone, Default)]
pub struct BarrageState {
    pub pending: Vec<DeferredSpawn>,
}

impl BarrageState {
    /// Drop every pending creation (full-system reset).
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

/// Run the scheduler: trigger a new volley when the previous one has
/// fully emptied, then drain creations that are due this tick.
///
/// Every member of one volley shares the formation type and group size;
/// each gets a distinct group index and a staggered due tick for the
/// rapid-fire cascade.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    state: &mut BarrageState,
    tuning: &Tuning,
    time: &SimTime,
    events: &mut Vec<SimEvent>,
) {
    // Snapshot of the actor pose; no actor means nothing to shoot at.
    let (actor_pos, actor_forward) = {
        let mut query = world.query::<(&Actor, &Position, &Orientation)>();
        match query.iter().next() {
            Some((_, (_actor, pos, orient))) => (pos.0, orient.forward()),
            None => return,
        }
    };

    let station_pos = {
        let mut query = world.query::<(&Station, &Position)>();
        query
            .iter()
            .next()
            .map(|(_, (_station, pos))| pos.0)
            .unwrap_or_default()
    };

    let live = world.query_mut::<&Projectile>().into_iter().count();
    if live == 0 && state.pending.is_empty() {
        let count = rng
            .gen_range(tuning.barrage_count.min..=tuning.barrage_count.max)
            .round() as u32;
        let formation = Formation::ALL[rng.gen_range(0..Formation::ALL.len())];

        for i in 0..count {
            state.pending.push(DeferredSpawn {
                due_tick: time.tick + i as u64 * tuning.spawn_stagger_ticks,
                formation,
                group_index: i,
                group_size: count,
                origin: station_pos,
            });
        }

        events.push(SimEvent::BarrageLaunched { formation, count });
    }

    // Drain due creations.
    let mut due = Vec::new();
    state.pending.retain(|spawn| {
        if spawn.due_tick <= time.tick {
            due.push(spawn.clone());
            false
        } else {
            true
        }
    });

    for spawn in &due {
        world_setup::spawn_projectile(
            world,
            rng,
            tuning,
            spawn,
            actor_pos,
            actor_forward,
            time.elapsed_secs,
        );
    }
}
