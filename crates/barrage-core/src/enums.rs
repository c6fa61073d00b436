//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Barrage formation pattern, shared by every projectile in one volley.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Formation {
    /// Loose swarm of independent spirals.
    #[default]
    SpiralSwarm,
    /// Two counter-rotating interleaved strands.
    DoubleHelix,
    /// Members fan out linearly from the axis to the outer bound.
    Cone,
    /// Spiral radius modulated by a sinusoidal envelope across the group.
    WavePattern,
}

impl Formation {
    /// All formation variants, for uniform random selection.
    pub const ALL: [Formation; 4] = [
        Formation::SpiralSwarm,
        Formation::DoubleHelix,
        Formation::Cone,
        Formation::WavePattern,
    ];
}

/// Actor navigation phase.
///
/// `Idle` only exists transiently at construction before the first
/// target is generated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavPhase {
    #[default]
    Idle,
    /// Following the current path.
    Following,
    /// A new path was just synthesized this tick.
    Retargeting,
}

/// Top-level simulation phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimPhase {
    #[default]
    Idle,
    Running,
    Paused,
}
