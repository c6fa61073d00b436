//! Lifecycle events emitted by the simulation for rendering, effects,
//! and radar collaborators. The core never touches presentation state;
//! these events are its only outward channel.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::Formation;

/// Events produced during one tick, drained into the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A new volley has been scheduled.
    BarrageLaunched { formation: Formation, count: u32 },
    /// Projectile detonated on the actor.
    ProjectileHit { position: DVec3 },
    /// Projectile detonated by lifetime timeout.
    ProjectileExpired { position: DVec3 },
    /// A near-miss projectile passed its closest-approach window.
    NearMissFlyby { position: DVec3 },
    /// Projectile discarded its trajectory and synthesized a new one.
    ProjectileRetargeted { position: DVec3 },
    /// The autonomous actor picked a new destination.
    ActorRetargeted { target: DVec3 },
}
