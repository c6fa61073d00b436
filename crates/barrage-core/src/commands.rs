//! Commands sent from the host application to the simulation.
//!
//! Commands are queued and processed at the next tick boundary, so all
//! state mutation stays inside the tick.

use serde::{Deserialize, Serialize};

/// All possible host actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimCommand {
    /// Start the simulation (spawns the station and actor).
    Start,
    /// Pause the simulation.
    Pause,
    /// Resume from pause.
    Resume,
    /// Full reset: atomically clears all live entities and every pending
    /// deferred projectile creation, then returns to Idle.
    Reset,
    /// Set time scale (1.0 = normal).
    SetTimeScale { scale: f64 },
    /// Switch the actor between user-controlled and autonomous modes.
    SetUserControl { enabled: bool },
    /// Update steering input for the user-controlled mode.
    /// Values are clamped to [-1, 1].
    SteerInput { yaw: f64, pitch: f64 },
}
