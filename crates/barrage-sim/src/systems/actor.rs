//! Actor motion controller: per-tick update of the pursued entity.
//!
//! Two mutually exclusive modes, re-evaluated every tick: direct
//! user-input steering, or autonomous path-following with station
//! avoidance and periodic retargeting.

use glam::{DQuat, DVec3};
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use barrage_core::components::{
    Actor, ActorState, Obstacle, Orientation, Position, Station, UserControl,
};
use barrage_core::config::Tuning;
use barrage_core::constants::*;
use barrage_core::enums::NavPhase;
use barrage_core::events::SimEvent;
use barrage_core::types::{perpendicular_basis, SimTime};
use barrage_path::path::{build_departure_segment, FlightPath};

use crate::world_setup;

/// Run the actor controller for one tick.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    tuning: &Tuning,
    time: &SimTime,
    events: &mut Vec<SimEvent>,
) {
    let dt = time.dt();
    let now = time.elapsed_secs;

    // Obstacle snapshot (the station).
    let obstacle = {
        let mut query = world.query::<(&Station, &Position, &Obstacle)>();
        query
            .iter()
            .next()
            .map(|(_, (_station, pos, obs))| (pos.0, obs.avoidance_radius))
    };

    for (_entity, (_actor, pos, orient, state, control, path)) in world.query_mut::<(
        &Actor,
        &mut Position,
        &mut Orientation,
        &mut ActorState,
        &UserControl,
        &mut FlightPath,
    )>() {
        if control.enabled {
            steer_by_input(pos, orient, control, tuning, dt);
            continue;
        }

        // --- Autonomous mode ---

        let needs_retarget = state.nav == NavPhase::Idle
            || path.target_reached
            || now - state.last_retarget_secs > state.retarget_after_secs;

        if needs_retarget {
            let center = obstacle.map(|(c, _)| c).unwrap_or(DVec3::ZERO);
            let candidate = world_setup::random_shell_point(rng, center);
            let target = constrain_turn(pos.0, orient.forward(), candidate);

            // A single guaranteed segment, bypassing the multi-segment
            // synthesizer. Its initial tangent follows the current
            // heading, so the leg honors the turn constraint from its
            // very first tick.
            *path = build_departure_segment(rng, pos.0, orient.forward(), target);

            state.last_retarget_secs = now;
            state.retarget_after_secs =
                rng.gen_range(tuning.actor_retarget_secs.min..tuning.actor_retarget_secs.max);
            state.nav = NavPhase::Retargeting;
            events.push(SimEvent::ActorRetargeted { target });
        } else if state.nav == NavPhase::Retargeting {
            state.nav = NavPhase::Following;
        }

        // Blend the path tangent with station repulsion; the repulsion
        // term dominates when inside the avoidance radius.
        let tangent = path.tangent().normalize_or_zero();
        let tangent = if tangent == DVec3::ZERO {
            orient.forward()
        } else {
            tangent
        };

        let repulse = match obstacle {
            Some((center, radius)) => repulsion(pos.0, center, radius),
            None => DVec3::ZERO,
        };

        let direction = (tangent + repulse * REPULSION_WEIGHT).normalize_or_zero();
        let direction = if direction == DVec3::ZERO { tangent } else { direction };

        let travel = state.current_speed * dt;
        pos.0 += direction * travel;
        path.advance_distance(travel);
        orient.steer_toward(direction, ACTOR_STEER_BLEND);
    }
}

/// User-controlled steering: integrate yaw/pitch stick input as
/// incremental local-axis rotations, then translate along the new facing.
/// No path state is touched in this mode.
fn steer_by_input(
    pos: &mut Position,
    orient: &mut Orientation,
    control: &UserControl,
    tuning: &Tuning,
    dt: f64,
) {
    let yaw = control.yaw_input.clamp(-1.0, 1.0) * ACTOR_INPUT_RATE * dt;
    // Inverted sign for the intuitive stick feel: pushing forward dips
    // the nose.
    let pitch = -control.pitch_input.clamp(-1.0, 1.0) * ACTOR_INPUT_RATE * dt;

    let local_up = orient.0 * DVec3::Y;
    let local_right = orient.0 * DVec3::X;
    orient.0 = (DQuat::from_axis_angle(local_up, yaw)
        * DQuat::from_axis_angle(local_right, pitch)
        * orient.0)
        .normalize();

    pos.0 += orient.forward() * tuning.actor_speed * dt;
}

/// Repulsion away from the obstacle center: zero at the avoidance
/// boundary, maximum at the surface, scaling linearly with penetration
/// depth.
pub fn repulsion(pos: DVec3, center: DVec3, avoidance_radius: f64) -> DVec3 {
    let away = pos - center;
    let dist = away.length();
    if dist >= avoidance_radius {
        return DVec3::ZERO;
    }
    if dist < 1e-9 {
        // Dead center: any direction is out.
        return DVec3::X;
    }
    let strength = (avoidance_radius - dist) / avoidance_radius;
    away / dist * strength
}

/// Constrain a retarget candidate so the required turn never exceeds the
/// maximum angle: when it does, the candidate is rotated back toward the
/// current heading about the cross-product axis (an arbitrary
/// perpendicular axis when heading and candidate are anti-parallel).
pub fn constrain_turn(pos: DVec3, heading: DVec3, candidate: DVec3) -> DVec3 {
    let heading = heading.normalize_or_zero();
    if heading == DVec3::ZERO {
        return candidate;
    }

    let to_candidate = candidate - pos;
    let dist = to_candidate.length();
    let dir = to_candidate.normalize_or_zero();
    if dir == DVec3::ZERO {
        return candidate;
    }

    let angle = heading.dot(dir).clamp(-1.0, 1.0).acos();
    if angle <= ACTOR_MAX_TURN_ANGLE {
        return candidate;
    }

    let cross = heading.cross(dir);
    let axis = if cross.length_squared() < 1e-12 {
        perpendicular_basis(heading).0
    } else {
        cross.normalize()
    };

    let constrained = DQuat::from_axis_angle(axis, ACTOR_MAX_TURN_ANGLE) * heading;
    pos + constrained * dist
}
