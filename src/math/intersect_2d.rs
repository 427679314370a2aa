use super::{Point2, Vector2, TOLERANCE};

/// Bounded segment-segment intersection in 2D.
///
/// Returns `(intersection_point, t, u)` where `t` and `u` are in `[0, 1]`.
/// Parallel (including collinear) segments return `None`; see
/// [`segment_crossing_params`] for overlap handling.
#[must_use]
pub fn segment_segment_intersect_2d(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
) -> Option<(Point2, f64, f64)> {
    let da = a1 - a0;
    let db = b1 - b0;

    let cross = da.perp(&db);
    if cross.abs() < TOLERANCE * (da.norm() * db.norm()).max(1.0) {
        return None;
    }

    let d = b0 - a0;
    let t = d.perp(&db) / cross;
    let u = d.perp(&da) / cross;

    // Use a small epsilon to include endpoints.
    let eps = 1e-9;
    if t >= -eps && t <= 1.0 + eps && u >= -eps && u <= 1.0 + eps {
        let t_clamped = t.clamp(0.0, 1.0);
        Some((a0 + da * t_clamped, t_clamped, u.clamp(0.0, 1.0)))
    } else {
        None
    }
}

/// Parameters along segment `a` at which it meets segment `b`.
///
/// A proper crossing or touch yields one parameter. A collinear overlap yields
/// the parameters of `b`'s endpoints that fall on `a`, plus `a`'s own
/// endpoints when they lie inside `b`.
#[must_use]
pub fn segment_crossing_params(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> Vec<f64> {
    if let Some((_, t, _)) = segment_segment_intersect_2d(a0, a1, b0, b1) {
        return vec![t];
    }

    let da = a1 - a0;
    let len_sq = da.norm_squared();
    if len_sq < TOLERANCE * TOLERANCE || !collinear(a0, a1, b0) || !collinear(a0, a1, b1) {
        return Vec::new();
    }

    let eps = 1e-9;
    let project = |p: &Point2| (p - a0).dot(&da) / len_sq;
    let (tb0, tb1) = (project(b0), project(b1));
    let (lo, hi) = if tb0 <= tb1 { (tb0, tb1) } else { (tb1, tb0) };

    let mut params: Vec<f64> = [lo, hi]
        .into_iter()
        .filter(|t| *t >= -eps && *t <= 1.0 + eps)
        .map(|t| t.clamp(0.0, 1.0))
        .collect();
    if lo <= eps && hi >= -eps {
        params.push(0.0);
    }
    if lo <= 1.0 + eps && hi >= 1.0 - eps {
        params.push(1.0);
    }
    params
}

/// Returns `true` if the closed segments `a` and `b` share at least one point.
///
/// Touching endpoints and collinear overlaps count as intersections.
#[must_use]
pub fn segments_intersect(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> bool {
    let d1 = orient(b0, b1, a0);
    let d2 = orient(b0, b1, a1);
    let d3 = orient(a0, a1, b0);
    let d4 = orient(a0, a1, b1);

    let straddles = |x: f64, y: f64| (x > TOLERANCE && y < -TOLERANCE) || (x < -TOLERANCE && y > TOLERANCE);
    if straddles(d1, d2) && straddles(d3, d4) {
        return true;
    }

    (d1.abs() <= TOLERANCE && within_bounds(b0, b1, a0))
        || (d2.abs() <= TOLERANCE && within_bounds(b0, b1, a1))
        || (d3.abs() <= TOLERANCE && within_bounds(a0, a1, b0))
        || (d4.abs() <= TOLERANCE && within_bounds(a0, a1, b1))
}

/// Twice the signed area of triangle `(a, b, c)`, normalized by `|b - a|`.
///
/// This is the signed perpendicular distance of `c` from line `ab`.
fn orient(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    let ab: Vector2 = b - a;
    let len = ab.norm();
    if len < TOLERANCE {
        return nalgebra::distance(a, c);
    }
    ab.perp(&(c - a)) / len
}

fn collinear(a: &Point2, b: &Point2, c: &Point2) -> bool {
    orient(a, b, c).abs() <= 1e-9
}

/// Checks that `p` lies within the axis-aligned box spanned by `a` and `b`.
fn within_bounds(a: &Point2, b: &Point2, p: &Point2) -> bool {
    p.x >= a.x.min(b.x) - TOLERANCE
        && p.x <= a.x.max(b.x) + TOLERANCE
        && p.y >= a.y.min(b.y) - TOLERANCE
        && p.y <= a.y.max(b.y) + TOLERANCE
}
