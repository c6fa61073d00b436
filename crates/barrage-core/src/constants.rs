//! Simulation constants and tuning defaults.
//!
//! Distances are in abstract scene units, durations in seconds.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- World ---

/// Hard outer boundary; entities beyond this range are culled.
pub const WORLD_RADIUS: f64 = 600.0;

/// Station obstacle-avoidance radius.
pub const STATION_AVOIDANCE_RADIUS: f64 = 40.0;

/// Muzzle offset: projectiles spawn on a small shell around the station.
pub const LAUNCH_OFFSET_RADIUS: f64 = 6.0;

// --- Path synthesis ---

/// Minimum / maximum segment count for a multi-segment path.
pub const PATH_MIN_SEGMENTS: usize = 2;
pub const PATH_MAX_SEGMENTS: usize = 4;

/// Interior control-point offset as a fraction of segment length.
pub const CURVE_OFFSET_MIN_FRAC: f64 = 0.25;
pub const CURVE_OFFSET_MAX_FRAC: f64 = 0.70;

/// Waypoint perpendicular perturbation as a fraction of total distance.
pub const WAYPOINT_OFFSET_MIN_FRAC: f64 = 0.20;
pub const WAYPOINT_OFFSET_MAX_FRAC: f64 = 0.50;

/// Sharper offsets for the single-segment close-range strike curve.
pub const STRIKE_OFFSET_MIN_FRAC: f64 = 0.50;
pub const STRIKE_OFFSET_MAX_FRAC: f64 = 0.90;

/// Fallback curve-parameter increment when the tangent is near zero.
pub const FALLBACK_T_STEP: f64 = 0.02;

/// Tangent magnitude below which the fallback increment applies.
pub const MIN_TANGENT_LENGTH: f64 = 1e-4;

// --- Formation spirals ---

/// Hard cap on spiral radius, regardless of formation-derived randomness.
pub const MAX_SPIRAL_RADIUS: f64 = 6.0;

/// Hard cap on spiral angular speed magnitude (rad/s).
pub const MAX_ANGULAR_SPEED: f64 = 4.0;

/// Spiral-swarm radius band.
pub const SWARM_RADIUS_MIN: f64 = 2.0;
pub const SWARM_RADIUS_MAX: f64 = 5.0;

/// Spiral-swarm angular speed band (rad/s).
pub const SWARM_SPEED_MIN: f64 = 1.5;
pub const SWARM_SPEED_MAX: f64 = 3.0;

/// Double-helix strand radius and angular speed.
pub const HELIX_RADIUS: f64 = 3.5;
pub const HELIX_SPEED: f64 = 2.5;

/// Cone formation outer radius (members ramp linearly from the axis).
pub const CONE_OUTER_RADIUS: f64 = 5.5;
pub const CONE_SPEED: f64 = 2.0;

/// Wave-pattern envelope radius and angular speed.
pub const WAVE_RADIUS: f64 = 4.5;
pub const WAVE_SPEED: f64 = 2.2;

/// Wave-pattern envelope frequency multiplier on phase.
pub const WAVE_ENVELOPE_FREQ: f64 = 3.0;

/// Fallback spiral for an unrecognized formation derivation.
pub const DEFAULT_SPIRAL_RADIUS: f64 = 3.0;
pub const DEFAULT_SPIRAL_SPEED: f64 = 2.0;

// --- Projectile motion ---

/// Base projectile speed (units/s).
pub const PROJECTILE_SPEED: f64 = 30.0;

/// Projectile lifetime band (seconds, rolled at spawn).
pub const PROJECTILE_LIFETIME_MIN_SECS: f64 = 8.0;
pub const PROJECTILE_LIFETIME_MAX_SECS: f64 = 14.0;

/// Randomized retarget interval band (seconds, re-rolled each retarget).
pub const RETARGET_MIN_SECS: f64 = 2.5;
pub const RETARGET_MAX_SECS: f64 = 5.0;

/// Range inside which the per-tick random retarget roll applies.
pub const CLOSE_RETARGET_RANGE: f64 = 50.0;

/// Per-tick probability of a close-range retarget.
pub const CLOSE_RETARGET_CHANCE: f64 = 0.10;

/// Range below which a single aggressive strike segment replaces the
/// multi-segment synthesizer.
pub const STRIKE_RANGE: f64 = 30.0;

/// Speed-boost thresholds: full boost inside the first, partial inside
/// the second.
pub const FULL_BOOST_RANGE: f64 = 30.0;
pub const PARTIAL_BOOST_RANGE: f64 = 60.0;

/// Speed multipliers by proximity, capped at the hard max.
pub const FULL_BOOST_MULTIPLIER: f64 = 2.0;
pub const PARTIAL_BOOST_MULTIPLIER: f64 = 1.5;
pub const MAX_SPEED_MULTIPLIER: f64 = 2.5;

/// Orientation slerp blend factor per tick (deliberately small: projectiles
/// cannot turn on a dime).
pub const PROJECTILE_STEER_BLEND: f64 = 0.15;

/// Lookahead along the curve used when the desired heading degenerates.
pub const STEER_LOOKAHEAD_T: f64 = 0.05;

/// Single-frame displacement above this multiple of the nominal step is
/// treated as a numerical fault and discarded.
pub const MAX_DISPLACEMENT_FACTOR: f64 = 5.0;

/// Proximity below which a projectile detonates on the actor.
pub const HIT_RADIUS: f64 = 2.0;

/// Range at which a near-miss projectile registers its single flyby event.
pub const NEAR_MISS_FLYBY_RANGE: f64 = 6.0;

/// Magnitude of the random aim offset applied to near-miss projectiles.
pub const NEAR_MISS_OFFSET: f64 = 12.0;

/// Fraction of a barrage flagged as intentional near-misses.
pub const NEAR_MISS_FRACTION: f64 = 0.30;

// --- Intercept overshoot ---

/// Proximity band edges for overshoot scaling.
pub const OVERSHOOT_CLOSE_RANGE: f64 = 50.0;
pub const OVERSHOOT_MEDIUM_RANGE: f64 = 120.0;

/// Overshoot distance bands (units ahead of the actor along its heading).
/// Deliberately exaggerated so missiles visibly fly past the target.
pub const OVERSHOOT_CLOSE_MIN: f64 = 60.0;
pub const OVERSHOOT_CLOSE_MAX: f64 = 100.0;
pub const OVERSHOOT_MEDIUM_MIN: f64 = 80.0;
pub const OVERSHOOT_MEDIUM_MAX: f64 = 140.0;
pub const OVERSHOOT_FAR_MIN: f64 = 100.0;
pub const OVERSHOOT_FAR_MAX: f64 = 180.0;

// --- Actor motion ---

/// Actor forward speed (units/s), both control modes.
pub const ACTOR_SPEED: f64 = 20.0;

/// Yaw/pitch input rate at full stick deflection (rad/s).
pub const ACTOR_INPUT_RATE: f64 = 1.8;

/// Autonomous retarget cooldown band (seconds).
pub const ACTOR_RETARGET_MIN_SECS: f64 = 6.0;
pub const ACTOR_RETARGET_MAX_SECS: f64 = 8.0;

/// Maximum instantaneous turn accepted when choosing a new target (rad).
pub const ACTOR_MAX_TURN_ANGLE: f64 = 25.0 * std::f64::consts::PI / 180.0;

/// Shell around the station on which autonomous targets are sampled.
pub const ACTOR_TARGET_RADIUS_MIN: f64 = 60.0;
pub const ACTOR_TARGET_RADIUS_MAX: f64 = 120.0;
pub const ACTOR_TARGET_HEIGHT_BAND: f64 = 40.0;

/// Weight of the obstacle-repulsion vector relative to the path tangent.
pub const REPULSION_WEIGHT: f64 = 2.0;

/// Orientation slerp blend factor per tick for the actor.
pub const ACTOR_STEER_BLEND: f64 = 0.20;

// --- Barrage scheduling ---

/// Projectile count band for one volley.
pub const BARRAGE_COUNT_MIN: u32 = 12;
pub const BARRAGE_COUNT_MAX: u32 = 24;

/// Ticks between consecutive projectile spawns in one volley
/// (~50 ms: a visible rapid-fire cascade rather than a simultaneous spawn).
pub const SPAWN_STAGGER_TICKS: u64 = 3;
