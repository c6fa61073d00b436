//! Cubic Bezier curve evaluation.
//!
//! Pure, deterministic functions underlying all path-following logic.
//! Callers are responsible for clamping `t` to [0, 1].

use glam::DVec3;

use barrage_core::constants::{FALLBACK_T_STEP, MIN_TANGENT_LENGTH};

/// Position on a cubic Bezier curve at parameter `t`.
///
/// Standard weighted sum: `(1-t)³p0 + 3(1-t)²t·p1 + 3(1-t)t²·p2 + t³p3`.
/// `t` is expected in [0, 1] but is not clamped here.
pub fn point_on_curve(t: f64, p0: DVec3, p1: DVec3, p2: DVec3, p3: DVec3) -> DVec3 {
    let u = 1.0 - t;
    let uu = u * u;
    let tt = t * t;
    p0 * (uu * u) + p1 * (3.0 * uu * t) + p2 * (3.0 * u * tt) + p3 * (tt * t)
}

/// Tangent (first derivative) of a cubic Bezier curve at parameter `t`.
///
/// The derivative is a quadratic Bezier over the control-point
/// differences, scaled by 3. Used both for orientation and for converting
/// a distance to travel into a parameter increment.
pub fn tangent_on_curve(t: f64, p0: DVec3, p1: DVec3, p2: DVec3, p3: DVec3) -> DVec3 {
    let u = 1.0 - t;
    (p1 - p0) * (3.0 * u * u) + (p2 - p1) * (6.0 * u * t) + (p3 - p2) * (3.0 * t * t)
}

/// Convert a desired travel distance into a curve-parameter increment
/// using the local tangent magnitude: `Δt ≈ distance / |B'(t)|`.
///
/// Near-zero tangents occur at path boundaries; a fixed fallback
/// increment keeps motion alive rather than stalling the cursor.
pub fn time_step_for_distance(distance: f64, tangent: DVec3) -> f64 {
    let len = tangent.length();
    if len < MIN_TANGENT_LENGTH {
        FALLBACK_T_STEP
    } else {
        distance / len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points() -> (DVec3, DVec3, DVec3, DVec3) {
        (
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(10.0, 25.0, -5.0),
            DVec3::new(40.0, -10.0, 15.0),
            DVec3::new(60.0, 0.0, 30.0),
        )
    }

    #[test]
    fn test_endpoints_exact() {
        let (p0, p1, p2, p3) = sample_points();
        assert!((point_on_curve(0.0, p0, p1, p2, p3) - p0).length() < 1e-12);
        assert!((point_on_curve(1.0, p0, p1, p2, p3) - p3).length() < 1e-12);
    }

    #[test]
    fn test_midpoint_inside_hull() {
        // Any point on the curve lies inside the control-point convex hull;
        // a cheap proxy is per-component bounds.
        let (p0, p1, p2, p3) = sample_points();
        let min = p0.min(p1).min(p2).min(p3);
        let max = p0.max(p1).max(p2).max(p3);
        for i in 1..10 {
            let t = i as f64 / 10.0;
            let p = point_on_curve(t, p0, p1, p2, p3);
            assert!(p.cmpge(min).all() && p.cmple(max).all());
        }
    }

    #[test]
    fn test_tangent_matches_finite_difference() {
        let (p0, p1, p2, p3) = sample_points();
        let h = 1e-6;
        for i in 1..10 {
            let t = i as f64 / 10.0;
            let analytic = tangent_on_curve(t, p0, p1, p2, p3);
            let numeric = (point_on_curve(t + h, p0, p1, p2, p3)
                - point_on_curve(t - h, p0, p1, p2, p3))
                / (2.0 * h);
            assert!(
                (analytic - numeric).length() < 1e-3,
                "analytic tangent should match central difference at t={t}"
            );
        }
    }

    #[test]
    fn test_time_step_inverse_of_tangent() {
        let tangent = DVec3::new(0.0, 30.0, 40.0); // length 50
        let dt = time_step_for_distance(5.0, tangent);
        assert!((dt - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_time_step_degenerate_tangent_fallback() {
        let dt = time_step_for_distance(5.0, DVec3::ZERO);
        assert_eq!(dt, barrage_core::constants::FALLBACK_T_STEP);
    }
}
