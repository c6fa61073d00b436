//! Formation model: per-projectile spiral parameters.
//!
//! Each projectile in a volley carries a helical offset applied on top of
//! its base trajectory position. The formation type and the member's
//! index within the group determine radius, angular speed, and phase.
//! Derivation is pure apart from the injected random source.

use glam::DVec3;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

use barrage_core::config::Tuning;
use barrage_core::constants::*;
use barrage_core::enums::Formation;
use barrage_core::types::perpendicular_basis;

/// Helical offset parameters for one projectile.
///
/// `radius` and `|angular_speed|` are always within the configured maxima,
/// regardless of formation-derived randomness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpiralParams {
    pub radius: f64,
    /// Signed angular speed (rad/s); sign selects rotation direction.
    pub angular_speed: f64,
    /// Current spiral angle (rad), advanced each tick.
    pub phase: f64,
    /// Local direction of travel at trajectory-creation time,
    /// approximated as the straight start→target direction.
    pub axis: DVec3,
    /// Formation the parameters were derived from; selects the offset
    /// envelope shape.
    pub formation: Formation,
}

impl SpiralParams {
    /// Current offset vector from the base trajectory position.
    ///
    /// `radius·(cosφ·e1 + sinφ·e2)` on the perpendicular basis of the
    /// axis, with the wave envelope applied for `WavePattern`. The
    /// resulting length is hard-clamped to `max_radius`.
    pub fn offset(&self, max_radius: f64) -> DVec3 {
        let (e1, e2) = perpendicular_basis(self.axis);

        let radius = match self.formation {
            Formation::WavePattern => self.radius * (self.phase * WAVE_ENVELOPE_FREQ).sin(),
            _ => self.radius,
        };

        let offset = (e1 * self.phase.cos() + e2 * self.phase.sin()) * radius;
        offset.clamp_length_max(max_radius)
    }

    /// Advance the spiral angle by one tick.
    pub fn advance_phase(&mut self, dt: f64) {
        self.phase += self.angular_speed * dt;
    }

    /// Re-anchor the axis after a retarget; the remaining parameters
    /// keep their formation-derived values.
    pub fn reanchor(&mut self, start: DVec3, target: DVec3) {
        let axis = (target - start).normalize_or_zero();
        if axis != DVec3::ZERO {
            self.axis = axis;
        }
    }
}

/// Derive spiral parameters for one formation member.
///
/// The phase baseline `(group_index / group_size)·2π` distributes a
/// volley evenly in spiral angle at t=0; formation-specific formulas
/// then set radius and angular speed. Outputs are clamped to the
/// configured maxima.
pub fn derive_spiral_params(
    rng: &mut impl Rng,
    formation: Formation,
    group_index: u32,
    group_size: u32,
    start: DVec3,
    target: DVec3,
    tuning: &Tuning,
) -> SpiralParams {
    let group_size = group_size.max(1);
    let frac = group_index as f64 / group_size as f64;
    let base_phase = frac * TAU;

    let axis = (target - start).normalize_or_zero();
    let axis = if axis == DVec3::ZERO { DVec3::Z } else { axis };

    let (radius, angular_speed, phase) = match formation {
        Formation::SpiralSwarm => (
            rng.gen_range(SWARM_RADIUS_MIN..SWARM_RADIUS_MAX),
            rng.gen_range(SWARM_SPEED_MIN..SWARM_SPEED_MAX),
            base_phase,
        ),
        Formation::DoubleHelix => {
            // Parity splits the volley into two counter-rotating strands
            // offset half a turn from each other.
            let odd = group_index % 2 == 1;
            let sign = if odd { -1.0 } else { 1.0 };
            let phase = if odd { base_phase + PI } else { base_phase };
            (HELIX_RADIUS, HELIX_SPEED * sign, phase)
        }
        Formation::Cone => (CONE_OUTER_RADIUS * frac, CONE_SPEED, base_phase),
        Formation::WavePattern => (WAVE_RADIUS, WAVE_SPEED, base_phase),
    };

    SpiralParams {
        radius: radius.clamp(0.0, tuning.max_spiral_radius),
        angular_speed: angular_speed.clamp(-tuning.max_angular_speed, tuning.max_angular_speed),
        phase,
        axis,
        formation,
    }
}

/// Moderate fallback parameters for a member outside any formation
/// (defensive: spawn paths always assign one).
pub fn default_spiral_params(axis: DVec3, tuning: &Tuning) -> SpiralParams {
    SpiralParams {
        radius: DEFAULT_SPIRAL_RADIUS.min(tuning.max_spiral_radius),
        angular_speed: DEFAULT_SPIRAL_SPEED.min(tuning.max_angular_speed),
        phase: 0.0,
        axis: axis.normalize_or_zero(),
        formation: Formation::SpiralSwarm,
    }
}
