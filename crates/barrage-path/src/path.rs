//! Windy Bezier path synthesis and the flight-path cursor.
//!
//! Paths are chains of cubic segments stitched through randomized
//! waypoints. A path is immutable once built; retargeting replaces the
//! whole path rather than mutating it. All randomness comes through the
//! injected `Rng` so synthesis is reproducible under a fixed seed.

use glam::DVec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use barrage_core::constants::*;
use barrage_core::types::perpendicular_basis;

use crate::curve;

/// One cubic Bezier segment: four control points, endpoints fixed,
/// interior points bent off-axis. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BezierSegment {
    pub points: [DVec3; 4],
}

impl BezierSegment {
    pub fn new(p0: DVec3, p1: DVec3, p2: DVec3, p3: DVec3) -> Self {
        Self {
            points: [p0, p1, p2, p3],
        }
    }

    /// Straight-line segment with interior points at the third marks.
    /// Used as the defensive fallback for malformed path data.
    pub fn linear(start: DVec3, end: DVec3) -> Self {
        Self::new(
            start,
            start.lerp(end, 1.0 / 3.0),
            start.lerp(end, 2.0 / 3.0),
            end,
        )
    }

    pub fn start(&self) -> DVec3 {
        self.points[0]
    }

    pub fn end(&self) -> DVec3 {
        self.points[3]
    }

    pub fn point_at(&self, t: f64) -> DVec3 {
        let [p0, p1, p2, p3] = self.points;
        curve::point_on_curve(t, p0, p1, p2, p3)
    }

    pub fn tangent_at(&self, t: f64) -> DVec3 {
        let [p0, p1, p2, p3] = self.points;
        curve::tangent_on_curve(t, p0, p1, p2, p3)
    }
}

/// Progress along a flight path: current segment index and curve
/// parameter within it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PathCursor {
    pub segment: usize,
    pub t: f64,
}

/// An ordered chain of Bezier segments approximating a longer path,
/// owned by exactly one moving entity.
///
/// Invariant: the cursor never exceeds the last segment with `t > 1`;
/// reaching the end sets `target_reached`, which the owning controller
/// consumes to trigger a retarget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightPath {
    pub segments: Vec<BezierSegment>,
    pub cursor: PathCursor,
    /// Final aim point (equals the last segment's end control point).
    pub target: DVec3,
    pub target_reached: bool,
}

impl FlightPath {
    /// Build a path from pre-synthesized segments.
    ///
    /// An empty segment list should never happen; it degrades to a
    /// straight-line fallback instead of panicking.
    pub fn new(start: DVec3, target: DVec3, segments: Vec<BezierSegment>) -> Self {
        let segments = if segments.is_empty() {
            log::warn!("flight path synthesized with no segments, using straight fallback");
            vec![BezierSegment::linear(start, target)]
        } else {
            segments
        };
        Self {
            segments,
            cursor: PathCursor::default(),
            target,
            target_reached: false,
        }
    }

    fn current(&self) -> &BezierSegment {
        let idx = self.cursor.segment.min(self.segments.len() - 1);
        &self.segments[idx]
    }

    /// Position on the curve at the current cursor.
    pub fn position(&self) -> DVec3 {
        self.current().point_at(self.cursor.t)
    }

    /// Tangent at the current cursor.
    pub fn tangent(&self) -> DVec3 {
        self.current().tangent_at(self.cursor.t)
    }

    /// Position slightly ahead of the cursor, for degenerate-heading
    /// fallbacks.
    pub fn lookahead(&self, dt_param: f64) -> DVec3 {
        self.current().point_at((self.cursor.t + dt_param).min(1.0))
    }

    /// Advance the cursor by a curve-parameter increment, rolling over
    /// into the next segment on overflow and setting `target_reached`
    /// at the end of the last segment.
    pub fn advance(&mut self, dt_param: f64) {
        self.cursor.t += dt_param.max(0.0);
        while self.cursor.t > 1.0 {
            if self.cursor.segment + 1 < self.segments.len() {
                self.cursor.t -= 1.0;
                self.cursor.segment += 1;
            } else {
                self.cursor.t = 1.0;
                self.target_reached = true;
            }
        }
    }

    /// Advance the cursor by a travel distance, converted to a parameter
    /// increment via the local tangent magnitude.
    pub fn advance_distance(&mut self, distance: f64) {
        let dt_param = curve::time_step_for_distance(distance, self.tangent());
        self.advance(dt_param);
    }
}

/// Pick a unit vector perpendicular to `dir`.
///
/// One of three construction strategies is chosen uniformly, then the
/// result is jittered per axis and renormalized, so consecutive calls
/// bend paths in visibly different planes.
fn random_perpendicular(rng: &mut impl Rng, dir: DVec3) -> DVec3 {
    let helper = match rng.gen_range(0..3u32) {
        0 => {
            if dir.z.abs() > 0.9 {
                DVec3::X
            } else {
                DVec3::Z
            }
        }
        1 => {
            if dir.y.abs() > 0.9 {
                DVec3::Z
            } else {
                DVec3::Y
            }
        }
        _ => DVec3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        ),
    };

    let mut perp = dir.cross(helper).normalize_or_zero();
    if perp == DVec3::ZERO {
        perp = perpendicular_basis(dir).0;
    }

    let jittered = (perp
        + DVec3::new(
            rng.gen_range(-0.4..0.4),
            rng.gen_range(-0.4..0.4),
            rng.gen_range(-0.4..0.4),
        ))
    .normalize_or_zero();
    if jittered == DVec3::ZERO {
        perp
    } else {
        jittered
    }
}

/// Synthesize one windy segment from `start` to `target`.
///
/// The interior control points sit at independently randomized fractions
/// along the chord, pushed off-axis by a curve offset proportional to the
/// chord length (fraction within `[offset_min_frac, offset_max_frac]`).
/// Endpoints are exact.
pub fn build_segment(
    rng: &mut impl Rng,
    start: DVec3,
    target: DVec3,
    offset_min_frac: f64,
    offset_max_frac: f64,
) -> BezierSegment {
    let delta = target - start;
    let dist = delta.length();
    let dir = delta.normalize_or_zero();
    if dir == DVec3::ZERO {
        // Coincident endpoints: nothing meaningful to bend.
        return BezierSegment::linear(start, target);
    }

    let perp = random_perpendicular(rng, dir);
    let offset_len = dist * rng.gen_range(offset_min_frac..offset_max_frac);

    let f1 = rng.gen_range(0.15..0.40);
    let f2 = rng.gen_range(0.60..0.85);

    // The second interior point bends with its own magnitude and may flip
    // to the far side of the chord for an S-shaped curve.
    let side: f64 = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
    let p1 = start + delta * f1 + perp * (offset_len * rng.gen_range(0.5..1.0));
    let p2 = start + delta * f2 + perp * (offset_len * rng.gen_range(0.5..1.0) * side);

    BezierSegment::new(start, p1, p2, target)
}

/// Synthesize a multi-segment windy path from `start` to `target`.
///
/// Chooses 2–4 segments, drops intermediate waypoints along the straight
/// chord perturbed perpendicular by 20–50% of the total distance, and
/// builds one windy segment per consecutive pair. Guarantees the first
/// segment starts at `start` exactly and the last ends at `target`
/// exactly.
pub fn build_multi_segment(rng: &mut impl Rng, start: DVec3, target: DVec3) -> FlightPath {
    let delta = target - start;
    let dist = delta.length();
    let dir = delta.normalize_or_zero();
    if dir == DVec3::ZERO {
        return FlightPath::new(start, target, vec![BezierSegment::linear(start, target)]);
    }

    let count = rng.gen_range(PATH_MIN_SEGMENTS..=PATH_MAX_SEGMENTS);

    let mut waypoints = Vec::with_capacity(count + 1);
    waypoints.push(start);
    for i in 1..count {
        let along = start + delta * (i as f64 / count as f64);
        let perp = random_perpendicular(rng, dir);
        let mag = dist * rng.gen_range(WAYPOINT_OFFSET_MIN_FRAC..WAYPOINT_OFFSET_MAX_FRAC);
        waypoints.push(along + perp * mag);
    }
    waypoints.push(target);

    let segments = waypoints
        .windows(2)
        .map(|pair| {
            build_segment(
                rng,
                pair[0],
                pair[1],
                CURVE_OFFSET_MIN_FRAC,
                CURVE_OFFSET_MAX_FRAC,
            )
        })
        .collect();

    FlightPath::new(start, target, segments)
}

/// Synthesize a single-segment path whose initial tangent is anchored
/// along `heading`: the first interior control point sits on the heading
/// ray, so the curve departs smoothly in the current direction of travel
/// and only the second interior point is bent off-axis. The turn toward
/// `target` is absorbed over the length of the curve instead of at its
/// start.
pub fn build_departure_segment(
    rng: &mut impl Rng,
    start: DVec3,
    heading: DVec3,
    target: DVec3,
) -> FlightPath {
    let delta = target - start;
    let dist = delta.length();
    let dir = delta.normalize_or_zero();
    let heading = heading.normalize_or_zero();
    if dir == DVec3::ZERO || heading == DVec3::ZERO {
        return FlightPath::new(start, target, vec![BezierSegment::linear(start, target)]);
    }

    let f1 = rng.gen_range(0.15..0.40);
    let p1 = start + heading * (dist * f1);

    let perp = random_perpendicular(rng, dir);
    let offset_len = dist * rng.gen_range(CURVE_OFFSET_MIN_FRAC..CURVE_OFFSET_MAX_FRAC);
    let f2 = rng.gen_range(0.60..0.85);
    let p2 = start + delta * f2 + perp * (offset_len * rng.gen_range(0.5..1.0));

    let segment = BezierSegment::new(start, p1, p2, target);
    FlightPath::new(start, target, vec![segment])
}

/// Synthesize the single-segment close-range strike path: one aggressive
/// curve with sharper perpendicular offsets, bypassing the multi-segment
/// synthesizer for emergency maneuvers.
pub fn build_strike_segment(rng: &mut impl Rng, start: DVec3, target: DVec3) -> FlightPath {
    let segment = build_segment(
        rng,
        start,
        target,
        STRIKE_OFFSET_MIN_FRAC,
        STRIKE_OFFSET_MAX_FRAC,
    );
    FlightPath::new(start, target, vec![segment])
}
