//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the station, the actor, and barrage projectiles with
//! appropriate component bundles.

use glam::DVec3;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use barrage_core::components::*;
use barrage_core::config::Tuning;
use barrage_core::constants::*;
use barrage_core::enums::NavPhase;
use barrage_path::formation::derive_spiral_params;
use barrage_path::path::{build_multi_segment, BezierSegment, FlightPath};

use crate::systems::barrage::DeferredSpawn;
use crate::systems::projectile::intercept_point;

/// Set up the initial world: station and actor.
/// Projectiles are spawned by the barrage scheduler system.
pub fn setup_world(world: &mut World, rng: &mut ChaCha8Rng, tuning: &Tuning) {
    spawn_station(world);
    spawn_actor(world, rng, tuning);
}

/// Spawn the central station at the origin.
pub fn spawn_station(world: &mut World) -> hecs::Entity {
    world.spawn((
        Station,
        Position(DVec3::ZERO),
        Orientation::default(),
        Obstacle {
            avoidance_radius: STATION_AVOIDANCE_RADIUS,
        },
    ))
}

/// Spawn the actor on a shell around the station, facing tangentially.
///
/// The actor starts in the transient `Idle` nav phase with a degenerate
/// placeholder path; the actor system synthesizes the first real path
/// on its first tick.
pub fn spawn_actor(world: &mut World, rng: &mut ChaCha8Rng, tuning: &Tuning) -> hecs::Entity {
    let position = random_shell_point(rng, DVec3::ZERO);

    // Tangential initial heading so the first turn-constrained retarget
    // does not point straight at the station.
    let outward = position.normalize_or_zero();
    let facing = if outward == DVec3::ZERO {
        DVec3::X
    } else {
        outward.cross(DVec3::Z).normalize_or_zero()
    };
    let facing = if facing == DVec3::ZERO { DVec3::X } else { facing };

    world.spawn((
        Actor,
        Position(position),
        Orientation::facing(facing),
        ActorState {
            nav: NavPhase::Idle,
            current_speed: tuning.actor_speed,
            last_retarget_secs: 0.0,
            retarget_after_secs: 0.0,
        },
        UserControl::default(),
        FlightPath::new(
            position,
            position,
            vec![BezierSegment::linear(position, position)],
        ),
    ))
}

/// Random point on the target shell around `center`: randomized radius
/// band, uniform azimuth, randomized height.
pub fn random_shell_point(rng: &mut impl Rng, center: DVec3) -> DVec3 {
    let azimuth = rng.gen_range(0.0..std::f64::consts::TAU);
    let radius = rng.gen_range(ACTOR_TARGET_RADIUS_MIN..ACTOR_TARGET_RADIUS_MAX);
    let height = rng.gen_range(-ACTOR_TARGET_HEIGHT_BAND..ACTOR_TARGET_HEIGHT_BAND);
    center + DVec3::new(radius * azimuth.cos(), radius * azimuth.sin(), height)
}

/// Spawn one barrage projectile from a deferred-creation request.
///
/// Builds the initial multi-segment path toward an intercept point ahead
/// of the actor, derives the member's spiral parameters, and rolls the
/// fixed lifetime and near-miss intent. Near-miss members get their aim
/// point pushed off the actor by a random offset of fixed magnitude, so
/// the hit branch never needs to special-case them spatially.
pub fn spawn_projectile(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    tuning: &Tuning,
    spawn: &DeferredSpawn,
    actor_pos: DVec3,
    actor_forward: DVec3,
    now_secs: f64,
) -> hecs::Entity {
    let muzzle = random_unit(rng) * LAUNCH_OFFSET_RADIUS;
    let origin = spawn.origin + muzzle;

    let near_miss = rng.gen_bool(NEAR_MISS_FRACTION);
    let dist = origin.distance(actor_pos);
    let aim = intercept_point(rng, actor_pos, actor_forward, dist, near_miss, tuning);

    let path = build_multi_segment(rng, origin, aim);
    let spiral = derive_spiral_params(
        rng,
        spawn.formation,
        spawn.group_index,
        spawn.group_size,
        origin,
        aim,
        tuning,
    );

    let lifetime = rng.gen_range(tuning.lifetime_secs.min..tuning.lifetime_secs.max);
    let retarget_after = rng.gen_range(tuning.retarget_secs.min..tuning.retarget_secs.max);

    world.spawn((
        Projectile,
        Position(origin),
        Orientation::facing(aim - origin),
        path,
        spiral,
        FormationAssignment {
            formation: spawn.formation,
            group_index: spawn.group_index,
            group_size: spawn.group_size,
        },
        ProjectileState {
            speed: tuning.projectile_speed,
            spawn_secs: now_secs,
            expiry_secs: now_secs + lifetime,
            near_miss,
            near_miss_reported: false,
            last_retarget_secs: now_secs,
            retarget_after_secs: retarget_after,
        },
    ))
}

/// Uniformly distributed unit vector.
pub fn random_unit(rng: &mut impl Rng) -> DVec3 {
    // Rejection sampling over the unit cube.
    loop {
        let v = DVec3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        );
        let len_sq = v.length_squared();
        if len_sq > 1e-6 && len_sq <= 1.0 {
            return v / len_sq.sqrt();
        }
    }
}
