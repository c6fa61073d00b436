//! Fundamental geometric and simulation types.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        1.0 / crate::constants::TICK_RATE as f64
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}

/// Two unit vectors spanning the plane perpendicular to `axis`.
///
/// When `axis` is near the Z pole the usual `cross(axis, Z)` construction
/// degenerates, so a fallback helper axis is used instead. Returns an
/// arbitrary but stable basis for a zero-length axis.
pub fn perpendicular_basis(axis: DVec3) -> (DVec3, DVec3) {
    let axis = axis.normalize_or_zero();
    if axis == DVec3::ZERO {
        return (DVec3::X, DVec3::Y);
    }

    let helper = if axis.z.abs() > 0.99 {
        DVec3::X
    } else {
        DVec3::Z
    };

    let e1 = axis.cross(helper).normalize();
    let e2 = axis.cross(e1).normalize();
    (e1, e2)
}
