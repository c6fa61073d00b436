//! Tunable motion parameters.
//!
//! The overshoot bands and spiral caps are empirically tuned for visual
//! effect rather than derived, so they live in a config struct instead of
//! being baked into the systems. Defaults come from `constants`; the band
//! ordering close < medium < far is load-bearing and kept by the defaults.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// A closed numeric band `[min, max]` sampled uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub min: f64,
    pub max: f64,
}

impl Band {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Tunable parameters threaded through the motion systems.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Overshoot distance ahead of the actor, by proximity band.
    pub overshoot_close: Band,
    pub overshoot_medium: Band,
    pub overshoot_far: Band,
    /// Proximity edges separating the overshoot bands.
    pub overshoot_close_range: f64,
    pub overshoot_medium_range: f64,

    /// Hard caps on spiral offsets.
    pub max_spiral_radius: f64,
    pub max_angular_speed: f64,

    /// Projectile lifetime band (seconds).
    pub lifetime_secs: Band,
    /// Projectile scheduled-retarget interval band (seconds).
    pub retarget_secs: Band,
    /// Actor autonomous retarget cooldown band (seconds).
    pub actor_retarget_secs: Band,

    /// Projectile count band for one volley.
    pub barrage_count: Band,
    /// Ticks between consecutive spawns within a volley.
    pub spawn_stagger_ticks: u64,

    /// Base speeds (units/s).
    pub projectile_speed: f64,
    pub actor_speed: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            overshoot_close: Band::new(OVERSHOOT_CLOSE_MIN, OVERSHOOT_CLOSE_MAX),
            overshoot_medium: Band::new(OVERSHOOT_MEDIUM_MIN, OVERSHOOT_MEDIUM_MAX),
            overshoot_far: Band::new(OVERSHOOT_FAR_MIN, OVERSHOOT_FAR_MAX),
            overshoot_close_range: OVERSHOOT_CLOSE_RANGE,
            overshoot_medium_range: OVERSHOOT_MEDIUM_RANGE,
            max_spiral_radius: MAX_SPIRAL_RADIUS,
            max_angular_speed: MAX_ANGULAR_SPEED,
            lifetime_secs: Band::new(PROJECTILE_LIFETIME_MIN_SECS, PROJECTILE_LIFETIME_MAX_SECS),
            retarget_secs: Band::new(RETARGET_MIN_SECS, RETARGET_MAX_SECS),
            actor_retarget_secs: Band::new(ACTOR_RETARGET_MIN_SECS, ACTOR_RETARGET_MAX_SECS),
            barrage_count: Band::new(BARRAGE_COUNT_MIN as f64, BARRAGE_COUNT_MAX as f64),
            spawn_stagger_ticks: SPAWN_STAGGER_TICKS,
            projectile_speed: PROJECTILE_SPEED,
            actor_speed: ACTOR_SPEED,
        }
    }
}
