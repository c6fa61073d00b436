//! ECS components for hecs entities.
//!
//! Components are plain data structs with no simulation logic.
//! Motion logic lives in systems, not components.

use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

use crate::enums::{Formation, NavPhase};

/// World position (scene units).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub DVec3);

/// World orientation. Local +Z is the entity's forward direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Orientation(pub DQuat);

impl Default for Orientation {
    fn default() -> Self {
        Self(DQuat::IDENTITY)
    }
}

impl Orientation {
    /// Orientation whose forward axis points along `dir`.
    /// Identity for a degenerate direction.
    pub fn facing(dir: DVec3) -> Self {
        let dir = dir.normalize_or_zero();
        if dir == DVec3::ZERO {
            return Self::default();
        }
        Self(DQuat::from_rotation_arc(DVec3::Z, dir))
    }

    /// Current forward direction (unit length).
    pub fn forward(&self) -> DVec3 {
        self.0 * DVec3::Z
    }

    /// Smoothly steer toward `dir` by spherically interpolating a fixed
    /// blend fraction. A degenerate `dir` leaves the orientation unchanged.
    pub fn steer_toward(&mut self, dir: DVec3, blend: f64) {
        let dir = dir.normalize_or_zero();
        if dir == DVec3::ZERO {
            return;
        }
        let desired = DQuat::from_rotation_arc(DVec3::Z, dir);
        self.0 = self.0.slerp(desired, blend.clamp(0.0, 1.0)).normalize();
    }
}

/// Marks an entity as a barrage projectile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile;

/// Marks the pursued/evading entity. Exactly one instance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Actor;

/// Marks the central station entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Station;

/// Obstacle description attached to the station.
/// Read-only to the motion systems; supplies a repulsion term.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Obstacle {
    pub avoidance_radius: f64,
}

/// Per-projectile motion bookkeeping, mutated every tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileState {
    /// Base forward speed (units/s), before proximity boost.
    pub speed: f64,
    /// Sim time at spawn (seconds).
    pub spawn_secs: f64,
    /// Sim time past which the projectile detonates by timeout.
    /// Fixed at creation; no code path extends it.
    pub expiry_secs: f64,
    /// Intentional near-miss: the hit branch is suppressed and the aim
    /// point was offset away from the actor at creation.
    pub near_miss: bool,
    /// Whether the single flyby event has already been emitted.
    pub near_miss_reported: bool,
    /// Sim time of the last retarget (seconds).
    pub last_retarget_secs: f64,
    /// Randomized interval until the next scheduled retarget (seconds).
    pub retarget_after_secs: f64,
}

/// Formation membership, assigned at spawn and constant for the
/// projectile's life.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FormationAssignment {
    pub formation: Formation,
    pub group_index: u32,
    pub group_size: u32,
}

/// Per-actor autonomous navigation bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorState {
    pub nav: NavPhase,
    /// Current forward speed (units/s).
    pub current_speed: f64,
    /// Sim time of the last retarget (seconds).
    pub last_retarget_secs: f64,
    /// Randomized cooldown until the next retarget (seconds).
    pub retarget_after_secs: f64,
}

/// External steering input for the user-controlled actor mode.
/// Inputs are bounded stick deflections in [-1, 1], zero when idle.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct UserControl {
    pub enabled: bool,
    pub yaw_input: f64,
    pub pitch_input: f64,
}
