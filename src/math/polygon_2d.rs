use super::distance_2d::point_to_segment_dist;
use super::{Point2, TOLERANCE};

/// Where a point lies relative to a closed ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingSide {
    Inside,
    Boundary,
    Outside,
}

/// Computes the signed area of a closed ring (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Classifies `p` against a closed ring given without a repeated closing vertex.
///
/// Points within `boundary_tol` of any ring edge are `Boundary`; the rest are
/// resolved with an even-odd ray cast.
#[must_use]
pub fn classify_point_in_ring(p: &Point2, ring: &[Point2], boundary_tol: f64) -> RingSide {
    let n = ring.len();
    if n < 3 {
        return RingSide::Outside;
    }

    let mut inside = false;
    for i in 0..n {
        let a = &ring[i];
        let b = &ring[(i + 1) % n];

        if point_to_segment_dist(p, a, b) <= boundary_tol {
            return RingSide::Boundary;
        }

        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if p.x < x_cross {
                inside = !inside;
            }
        }
    }

    if inside {
        RingSide::Inside
    } else {
        RingSide::Outside
    }
}

/// Drops consecutive duplicates and a repeated closing vertex from a ring.
#[must_use]
pub fn normalize_ring(points: &[Point2]) -> Vec<Point2> {
    let mut ring: Vec<Point2> = Vec::with_capacity(points.len());
    for &pt in points {
        if ring
            .last()
            .is_none_or(|last| nalgebra::distance(last, &pt) > TOLERANCE)
        {
            ring.push(pt);
        }
    }
    while ring.len() > 1
        && ring
            .first()
            .zip(ring.last())
            .is_some_and(|(first, last)| nalgebra::distance(first, last) <= TOLERANCE)
    {
        ring.pop();
    }
    ring
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn signed_area_ccw_square() {
        assert!((signed_area_2d(&square()) - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_cw_square() {
        let mut pts = square();
        pts.reverse();
        assert!((signed_area_2d(&pts) + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!((signed_area_2d(&[Point2::new(0.0, 0.0)])).abs() < TOLERANCE);
        assert!((signed_area_2d(&[])).abs() < TOLERANCE);
    }

    #[test]
    fn classify_inside_outside_boundary() {
        let ring = square();
        assert_eq!(
            classify_point_in_ring(&Point2::new(0.5, 0.5), &ring, 1e-9),
            RingSide::Inside
        );
        assert_eq!(
            classify_point_in_ring(&Point2::new(1.5, 0.5), &ring, 1e-9),
            RingSide::Outside
        );
        assert_eq!(
            classify_point_in_ring(&Point2::new(1.0, 0.5), &ring, 1e-9),
            RingSide::Boundary
        );
        assert_eq!(
            classify_point_in_ring(&Point2::new(0.0, 0.0), &ring, 1e-9),
            RingSide::Boundary
        );
    }

    #[test]
    fn classify_concave_notch() {
        // U-shape: the notch at (1.5, 2) is outside.
        let ring = vec![
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 0.0),
            Point2::new(3.0, 3.0),
            Point2::new(2.0, 3.0),
            Point2::new(2.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 3.0),
            Point2::new(0.0, 3.0),
        ];
        assert_eq!(
            classify_point_in_ring(&Point2::new(1.5, 2.0), &ring, 1e-9),
            RingSide::Outside
        );
        assert_eq!(
            classify_point_in_ring(&Point2::new(0.5, 2.0), &ring, 1e-9),
            RingSide::Inside
        );
    }

    #[test]
    fn normalize_ring_drops_closing_and_duplicate_vertices() {
        let mut pts = square();
        pts.insert(1, Point2::new(0.0, 0.0));
        pts.push(Point2::new(0.0, 0.0));
        let ring = normalize_ring(&pts);
        assert_eq!(ring.len(), 4);
    }
}
