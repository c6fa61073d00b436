use glam::DVec3;

use crate::commands::SimCommand;
use crate::components::Orientation;
use crate::config::Tuning;
use crate::enums::*;
use crate::events::SimEvent;
use crate::state::SimSnapshot;
use crate::types::{perpendicular_basis, SimTime};

/// Verify all enums round-trip through serde_json.
#[test]
fn test_formation_serde() {
    for v in Formation::ALL {
        let json = serde_json::to_string(&v).unwrap();
        let back: Formation = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}

#[test]
fn test_nav_phase_serde() {
    let variants = vec![NavPhase::Idle, NavPhase::Following, NavPhase::Retargeting];
    for v in variants {
        let json = serde_json::to_string(&v).unwrap();
        let back: NavPhase = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}

#[test]
fn test_sim_event_serde_tagged() {
    let event = SimEvent::BarrageLaunched {
        formation: Formation::DoubleHelix,
        count: 16,
    };
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains("\"type\""), "events are externally tagged");
    let back: SimEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(event, back);
}

#[test]
fn test_sim_command_serde() {
    let cmd = SimCommand::SteerInput {
        yaw: 0.5,
        pitch: -0.25,
    };
    let json = serde_json::to_string(&cmd).unwrap();
    let _back: SimCommand = serde_json::from_str(&json).unwrap();
}

#[test]
fn test_snapshot_serde_default() {
    let snap = SimSnapshot::default();
    let json = serde_json::to_string(&snap).unwrap();
    let _back: SimSnapshot = serde_json::from_str(&json).unwrap();
}

#[test]
fn test_sim_time_advance() {
    let mut time = SimTime::default();
    for _ in 0..60 {
        time.advance();
    }
    assert_eq!(time.tick, 60);
    assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
}

#[test]
fn test_perpendicular_basis_orthogonal() {
    let axes = [
        DVec3::new(0.0, 0.0, 1.0), // pole: degenerate for cross(axis, Z)
        DVec3::new(0.0, 0.0, -1.0),
        DVec3::new(1.0, 0.0, 0.0),
        DVec3::new(0.3, -0.7, 0.2).normalize(),
    ];
    for axis in axes {
        let (e1, e2) = perpendicular_basis(axis);
        assert!(e1.dot(axis).abs() < 1e-9, "e1 perpendicular to axis");
        assert!(e2.dot(axis).abs() < 1e-9, "e2 perpendicular to axis");
        assert!(e1.dot(e2).abs() < 1e-9, "basis vectors orthogonal");
        assert!((e1.length() - 1.0).abs() < 1e-9);
        assert!((e2.length() - 1.0).abs() < 1e-9);
    }
}

#[test]
fn test_orientation_facing_forward() {
    let dir = DVec3::new(1.0, 2.0, -0.5).normalize();
    let orient = Orientation::facing(dir);
    assert!((orient.forward() - dir).length() < 1e-9);
}

#[test]
fn test_orientation_steer_converges() {
    let mut orient = Orientation::facing(DVec3::Z);
    let target = DVec3::X;
    for _ in 0..200 {
        orient.steer_toward(target, 0.15);
    }
    assert!(
        (orient.forward() - target).length() < 1e-3,
        "repeated slerp should converge on the target heading"
    );
}

#[test]
fn test_orientation_steer_is_gradual() {
    let mut orient = Orientation::facing(DVec3::Z);
    orient.steer_toward(DVec3::X, 0.15);
    let angle = orient.forward().dot(DVec3::Z).clamp(-1.0, 1.0).acos();
    assert!(
        angle < std::f64::consts::FRAC_PI_2 * 0.5,
        "one blend step must not snap onto the target heading"
    );
}

#[test]
fn test_tuning_band_ordering() {
    let t = Tuning::default();
    assert!(t.overshoot_close.min < t.overshoot_medium.min);
    assert!(t.overshoot_medium.min < t.overshoot_far.min);
    assert!(t.overshoot_close.max < t.overshoot_medium.max);
    assert!(t.overshoot_medium.max < t.overshoot_far.max);
    assert!(t.overshoot_close_range < t.overshoot_medium_range);
}
