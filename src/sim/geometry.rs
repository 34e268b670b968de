//! Polygon geometry tests for collision detection
//!
//! Everything works on world-space vertex lists (`Hull::points`). Two
//! primitives: an even-odd ray crossing test for point-vs-polygon (bullets),
//! and a broad-phase + edge-pair test for polygon-vs-polygon (ship vs rocks).

use glam::Vec2;

/// Even-odd test: does `point` lie inside the polygon?
///
/// Casts a horizontal ray toward +x and counts crossings over every edge,
/// including the wrap-around edge from the last vertex back to the first.
/// Horizontal edges (`a.y == b.y`) count as crossed iff `point.x` is left of
/// the edge's right end - an accepted inexact edge case, kept for
/// compatibility with the original rule set.
pub fn point_in_polygon(point: Vec2, points: &[Vec2]) -> bool {
    let mut crossed = false;
    let mut ib = points.len().wrapping_sub(1);
    for ia in 0..points.len() {
        let a = points[ia];
        let b = points[ib];
        ib = ia;

        if b.y == point.y || a.y.max(b.y) <= point.y || a.y.min(b.y) >= point.y {
            continue;
        }
        if a.y == b.y {
            if point.x <= a.x.max(b.x) {
                crossed = !crossed;
            }
            continue;
        }
        let x_on_line = (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x;
        if point.x <= x_on_line {
            crossed = !crossed;
        }
    }
    crossed
}

/// Minimum denominator magnitude before two segments count as parallel
const PARALLEL_EPS: f32 = 1e-6;

/// Parametric segment intersection: does `a1->a2` cross `c1->c2`?
///
/// Solves for the parametric factors r (along a) and s (along c); both in
/// [0, 1] means the segments cross. Parallel and collinear pairs share a
/// zero denominator and report no intersection rather than dividing by it.
pub fn segments_intersect(a1: Vec2, a2: Vec2, c1: Vec2, c2: Vec2) -> bool {
    let denom = (a2.x - a1.x) * (c2.y - c1.y) - (a2.y - a1.y) * (c2.x - c1.x);
    if denom.abs() < PARALLEL_EPS {
        return false;
    }
    let r = ((a1.y - c1.y) * (c2.x - c1.x) - (a1.x - c1.x) * (c2.y - c1.y)) / denom;
    let s = ((a1.y - c1.y) * (a2.x - a1.x) - (a1.x - c1.x) * (a2.y - a1.y)) / denom;
    (0.0..=1.0).contains(&r) && (0.0..=1.0).contains(&s)
}

/// Polygon-vs-polygon overlap test.
///
/// Three stages, cheapest first:
/// 1. Bounding circles (`a_pos`/`a_radius` vs `b_pos`/`b_radius`) - far
///    apart pairs reject without touching a vertex.
/// 2. B's first vertex inside A - catches B partially or fully contained.
/// 3. All-pairs edge crossing, wrap-around edges included.
///
/// Either vertex list being empty (a hull not yet refreshed) is a miss.
pub fn polygons_intersect(
    a_points: &[Vec2],
    a_pos: Vec2,
    a_radius: f32,
    b_points: &[Vec2],
    b_pos: Vec2,
    b_radius: f32,
) -> bool {
    if a_points.is_empty() || b_points.is_empty() {
        return false;
    }
    if a_pos.distance(b_pos) > a_radius + b_radius {
        return false;
    }
    if point_in_polygon(b_points[0], a_points) {
        return true;
    }

    let mut ib = 0;
    for ia in (0..b_points.len()).rev() {
        let a = b_points[ia];
        let b = b_points[ib];
        ib = ia;
        let mut id = 0;
        for ic in (0..a_points.len()).rev() {
            let c = a_points[ic];
            let d = a_points[id];
            id = ic;
            if segments_intersect(a, b, c, d) {
                return true;
            }
        }
    }
    false
}
