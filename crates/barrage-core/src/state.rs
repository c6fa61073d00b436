//! Simulation snapshot: the complete visible state produced each tick.
//!
//! Rendering, effects, and radar collaborators read positions and
//! orientations from here; nothing in this workspace draws.

use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

use crate::enums::{Formation, NavPhase, SimPhase};
use crate::events::SimEvent;
use crate::types::SimTime;

/// Complete state broadcast after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub time: SimTime,
    pub phase: SimPhase,
    pub actor: Option<ActorView>,
    pub station: Option<StationView>,
    pub projectiles: Vec<ProjectileView>,
    /// Events that occurred during this tick.
    pub events: Vec<SimEvent>,
}

/// Actor pose and navigation state for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorView {
    pub position: DVec3,
    pub orientation: DQuat,
    pub nav: NavPhase,
    pub user_controlled: bool,
}

/// Station pose for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationView {
    pub position: DVec3,
    pub avoidance_radius: f64,
}

/// Projectile pose for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: DVec3,
    pub orientation: DQuat,
    pub formation: Formation,
    pub near_miss: bool,
}
