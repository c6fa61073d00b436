//! Projectile motion controller: per-tick update of every live projectile.
//!
//! Order per projectile: expiry check, retarget decision, path-cursor
//! advance with proximity speed boost, spiral offset, orientation
//! steering, position integration along the current facing, hit test.
//! Steering and translation are deliberately decoupled: the projectile
//! moves along where it is pointing, not straight at the spiral target,
//! which is what produces the overshooting, curving flight.

use glam::DVec3;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use barrage_core::components::{
    Actor, Orientation, Position, Projectile, ProjectileState,
};
use barrage_core::config::Tuning;
use barrage_core::constants::*;
use barrage_core::events::SimEvent;
use barrage_core::types::SimTime;
use barrage_path::formation::SpiralParams;
use barrage_path::path::{build_multi_segment, build_strike_segment, FlightPath};

/// Run the projectile controller for one tick.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    tuning: &Tuning,
    time: &SimTime,
    events: &mut Vec<SimEvent>,
    despawn_buffer: &mut Vec<hecs::Entity>,
) {
    let dt = time.dt();
    let now = time.elapsed_secs;

    // Read-only snapshot of the actor pose for this tick.
    let (actor_pos, actor_forward) = {
        let mut query = world.query::<(&Actor, &Position, &Orientation)>();
        match query.iter().next() {
            Some((_, (_actor, pos, orient))) => (pos.0, orient.forward()),
            None => return,
        }
    };

    for (entity, (_projectile, pos, orient, state, path, spiral)) in world.query_mut::<(
        &Projectile,
        &mut Position,
        &mut Orientation,
        &mut ProjectileState,
        &mut FlightPath,
        &mut SpiralParams,
    )>() {
        // 1. Expiry: detonate by timeout, stop processing this tick.
        if now > state.expiry_secs {
            events.push(SimEvent::ProjectileExpired { position: pos.0 });
            despawn_buffer.push(entity);
            continue;
        }

        let dist_to_actor = pos.0.distance(actor_pos);

        // 2. Retarget decision: scheduled interval elapsed, path exhausted,
        //    or a close-range random refresh (keeps pursuit lively without
        //    deterministic flicker).
        let interval_elapsed = now - state.last_retarget_secs > state.retarget_after_secs;
        let close_roll =
            dist_to_actor < CLOSE_RETARGET_RANGE && rng.gen_bool(CLOSE_RETARGET_CHANCE);

        if interval_elapsed || path.target_reached || close_roll {
            let aim = intercept_point(
                rng,
                actor_pos,
                actor_forward,
                dist_to_actor,
                state.near_miss,
                tuning,
            );

            // Very close: one aggressive curved segment, bypassing the
            // multi-segment synthesizer.
            *path = if dist_to_actor < STRIKE_RANGE {
                build_strike_segment(rng, pos.0, aim)
            } else {
                build_multi_segment(rng, pos.0, aim)
            };
            spiral.reanchor(pos.0, aim);

            state.last_retarget_secs = now;
            state.retarget_after_secs =
                rng.gen_range(tuning.retarget_secs.min..tuning.retarget_secs.max);
            events.push(SimEvent::ProjectileRetargeted { position: pos.0 });
        }

        // 3. Advance the cursor by this tick's travel distance, boosted
        //    by proximity.
        let multiplier = speed_multiplier(dist_to_actor);
        let travel = state.speed * multiplier * dt;
        path.advance_distance(travel);

        // 4. Spiral offset on top of the base curve position.
        spiral.advance_phase(dt);
        let desired = path.position() + spiral.offset(tuning.max_spiral_radius);

        // 5. Steer toward the offset point; fall back to a short curve
        //    lookahead when the heading degenerates.
        let mut heading = desired - pos.0;
        if heading.length_squared() < 1e-9 {
            heading = path.lookahead(STEER_LOOKAHEAD_T) - pos.0;
        }
        orient.steer_toward(heading, PROJECTILE_STEER_BLEND);

        // 6. Integrate along the current facing. A displacement far beyond
        //    the nominal step is a numerical fault; drop it rather than
        //    teleport.
        let step = orient.forward() * travel;
        let max_step = state.speed * MAX_SPEED_MULTIPLIER * dt * MAX_DISPLACEMENT_FACTOR;
        if step.length() <= max_step {
            pos.0 += step;
        } else {
            log::warn!("discarding implausible projectile displacement {:.2}", step.length());
        }

        // 7. Hit test. Near-miss projectiles never detonate on proximity;
        //    they report a single flyby instead.
        let dist_after = pos.0.distance(actor_pos);
        if state.near_miss {
            if !state.near_miss_reported && dist_after < NEAR_MISS_FLYBY_RANGE {
                state.near_miss_reported = true;
                events.push(SimEvent::NearMissFlyby { position: pos.0 });
            }
        } else if dist_after < HIT_RADIUS {
            events.push(SimEvent::ProjectileHit { position: pos.0 });
            despawn_buffer.push(entity);
        }
    }
}

/// Overshoot intercept point ahead of the actor along its heading.
///
/// The overshoot distance is sampled from the proximity band the
/// projectile currently sits in (close < medium < far) so missiles
/// visibly fly past the target instead of parking on it. Near-miss
/// members additionally get the aim pushed off by a random offset of
/// fixed magnitude.
pub fn intercept_point(
    rng: &mut impl Rng,
    actor_pos: DVec3,
    actor_forward: DVec3,
    dist_to_actor: f64,
    near_miss: bool,
    tuning: &Tuning,
) -> DVec3 {
    let band = if dist_to_actor < tuning.overshoot_close_range {
        tuning.overshoot_close
    } else if dist_to_actor < tuning.overshoot_medium_range {
        tuning.overshoot_medium
    } else {
        tuning.overshoot_far
    };
    let overshoot = rng.gen_range(band.min..band.max);

    let forward = actor_forward.normalize_or_zero();
    let forward = if forward == DVec3::ZERO {
        DVec3::Z
    } else {
        forward
    };

    let mut aim = actor_pos + forward * overshoot;
    if near_miss {
        aim += crate::world_setup::random_unit(rng) * NEAR_MISS_OFFSET;
    }
    aim
}

/// Speed multiplier by distance to the actor: full boost when very
/// close, partial boost at medium range, capped at the hard maximum.
pub fn speed_multiplier(dist_to_actor: f64) -> f64 {
    let multiplier = if dist_to_actor < FULL_BOOST_RANGE {
        FULL_BOOST_MULTIPLIER
    } else if dist_to_actor < PARTIAL_BOOST_RANGE {
        PARTIAL_BOOST_MULTIPLIER
    } else {
        1.0
    };
    multiplier.min(MAX_SPEED_MULTIPLIER)
}
