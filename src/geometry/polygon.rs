use crate::error::{GeometryError, Result};
use crate::math::intersect_2d::segment_crossing_params;
use crate::math::polygon_2d::{classify_point_in_ring, normalize_ring, signed_area_2d, RingSide};
use crate::math::{Point2, TOLERANCE};

use super::{Polyline, Segment};

/// Distance within which a point counts as lying on a polygon boundary.
const BOUNDARY_TOL: f64 = 1e-9;

/// Parameter gap below which two clip parameters are merged.
const PARAM_EPS: f64 = 1e-12;

/// A planar polygon: one exterior ring plus zero or more holes.
///
/// Rings are stored without a repeated closing vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    exterior: Vec<Point2>,
    interiors: Vec<Vec<Point2>>,
}

impl Polygon {
    /// Creates a polygon from an exterior ring and holes.
    ///
    /// A repeated closing vertex and consecutive duplicates are dropped.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if any ring has fewer than 3
    /// distinct vertices or zero area.
    pub fn new(exterior: Vec<Point2>, interiors: Vec<Vec<Point2>>) -> Result<Self> {
        let exterior = validated_ring(&exterior, "exterior")?;
        let interiors = interiors
            .iter()
            .map(|ring| validated_ring(ring, "interior"))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            exterior,
            interiors,
        })
    }

    /// Creates a polygon without holes.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the ring is degenerate.
    pub fn from_exterior(exterior: Vec<Point2>) -> Result<Self> {
        Self::new(exterior, Vec::new())
    }

    /// Axis-aligned rectangle spanning `min` to `max`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the rectangle has zero area.
    pub fn rectangle(min: Point2, max: Point2) -> Result<Self> {
        Self::from_exterior(vec![
            min,
            Point2::new(max.x, min.y),
            max,
            Point2::new(min.x, max.y),
        ])
    }

    #[must_use]
    pub fn exterior(&self) -> &[Point2] {
        &self.exterior
    }

    #[must_use]
    pub fn interiors(&self) -> &[Vec<Point2>] {
        &self.interiors
    }

    /// Exterior followed by every hole.
    pub fn rings(&self) -> impl Iterator<Item = &[Point2]> {
        std::iter::once(self.exterior.as_slice()).chain(self.interiors.iter().map(Vec::as_slice))
    }

    /// Unsigned area with holes subtracted.
    #[must_use]
    pub fn area(&self) -> f64 {
        let holes: f64 = self.interiors.iter().map(|r| signed_area_2d(r).abs()).sum();
        signed_area_2d(&self.exterior).abs() - holes
    }

    /// Returns `true` if `p` lies inside the polygon or on its boundary.
    ///
    /// Points strictly inside a hole are outside; points on a hole's ring are
    /// on the boundary.
    #[must_use]
    pub fn contains_point(&self, p: &Point2) -> bool {
        if classify_point_in_ring(p, &self.exterior, BOUNDARY_TOL) == RingSide::Outside {
            return false;
        }
        self.interiors
            .iter()
            .all(|hole| classify_point_in_ring(p, hole, BOUNDARY_TOL) != RingSide::Inside)
    }

    /// Clips a segment to the polygon, returning the contained pieces in order
    /// from `segment.start` to `segment.end`.
    ///
    /// Pieces running along the boundary are kept. A segment entirely outside
    /// yields an empty vector.
    #[must_use]
    pub fn clip_segment(&self, segment: &Segment) -> Vec<Segment> {
        let mut params = vec![0.0, 1.0];
        for ring in self.rings() {
            let n = ring.len();
            for i in 0..n {
                params.extend(segment_crossing_params(
                    &segment.start,
                    &segment.end,
                    &ring[i],
                    &ring[(i + 1) % n],
                ));
            }
        }
        params.sort_by(f64::total_cmp);
        params.dedup_by(|a, b| (*a - *b).abs() < PARAM_EPS);

        let mut pieces: Vec<(f64, f64)> = Vec::new();
        for w in params.windows(2) {
            let (t0, t1) = (w[0], w[1]);
            if t1 - t0 < PARAM_EPS {
                continue;
            }
            let mid = segment.point_at_param(0.5 * (t0 + t1));
            if !self.contains_point(&mid) {
                continue;
            }
            match pieces.last_mut() {
                Some(last) if (last.1 - t0).abs() < PARAM_EPS => last.1 = t1,
                _ => pieces.push((t0, t1)),
            }
        }

        pieces
            .into_iter()
            .map(|(t0, t1)| Segment::new(segment.point_at_param(t0), segment.point_at_param(t1)))
            .collect()
    }

    /// Returns a copy whose ring edges are no longer than `max_step`.
    #[must_use]
    pub fn densified(&self, max_step: f64) -> Self {
        Self {
            exterior: densify_ring(&self.exterior, max_step),
            interiors: self
                .interiors
                .iter()
                .map(|r| densify_ring(r, max_step))
                .collect(),
        }
    }

    /// Applies `f` to every vertex, producing a new polygon.
    ///
    /// # Errors
    ///
    /// Propagates errors from `f`, and returns `GeometryError::Degenerate` if
    /// the mapped rings collapse.
    pub fn try_map_points<F>(&self, mut f: F) -> Result<Self>
    where
        F: FnMut(&Point2) -> Result<Point2>,
    {
        let exterior = self.exterior.iter().map(&mut f).collect::<Result<Vec<_>>>()?;
        let mut interiors = Vec::with_capacity(self.interiors.len());
        for ring in &self.interiors {
            interiors.push(ring.iter().map(&mut f).collect::<Result<Vec<_>>>()?);
        }
        Self::new(exterior, interiors)
    }
}

fn validated_ring(points: &[Point2], which: &str) -> Result<Vec<Point2>> {
    let ring = normalize_ring(points);
    if ring.len() < 3 {
        return Err(GeometryError::Degenerate(format!(
            "{which} ring needs at least 3 distinct vertices, got {}",
            ring.len()
        ))
        .into());
    }
    if signed_area_2d(&ring).abs() < TOLERANCE {
        return Err(GeometryError::Degenerate(format!("{which} ring has zero area")).into());
    }
    Ok(ring)
}

fn densify_ring(ring: &[Point2], max_step: f64) -> Vec<Point2> {
    let mut closed = ring.to_vec();
    closed.push(ring[0]);
    match Polyline::new(closed) {
        Ok(line) => {
            let mut points = line.densify(max_step).points().to_vec();
            points.pop();
            points
        }
        Err(_) => ring.to_vec(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn u_shape() -> Polygon {
        Polygon::from_exterior(vec![
            p(0.0, 0.0),
            p(30.0, 0.0),
            p(30.0, 30.0),
            p(20.0, 30.0),
            p(20.0, 10.0),
            p(10.0, 10.0),
            p(10.0, 30.0),
            p(0.0, 30.0),
        ])
        .unwrap()
    }

    #[test]
    fn rejects_degenerate_rings() {
        assert!(Polygon::from_exterior(vec![p(0.0, 0.0), p(1.0, 0.0)]).is_err());
        assert!(Polygon::from_exterior(vec![p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0)]).is_err());
    }

    #[test]
    fn closing_vertex_is_dropped() {
        let poly =
            Polygon::from_exterior(vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 0.0)])
                .unwrap();
        assert_eq!(poly.exterior().len(), 3);
    }

    #[test]
    fn area_subtracts_holes() {
        let poly = Polygon::new(
            vec![p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 10.0)],
            vec![vec![p(4.0, 4.0), p(6.0, 4.0), p(6.0, 6.0), p(4.0, 6.0)]],
        )
        .unwrap();
        assert_relative_eq!(poly.area(), 96.0, epsilon = 1e-12);
        assert!(!poly.contains_point(&p(5.0, 5.0)));
        assert!(poly.contains_point(&p(4.0, 5.0)));
        assert!(poly.contains_point(&p(1.0, 1.0)));
    }

    #[test]
    fn clip_shortens_crossing_segment() {
        let rect = Polygon::rectangle(p(0.0, -15.0), p(100.0, 15.0)).unwrap();
        let pieces = rect.clip_segment(&Segment::new(p(50.0, -20.0), p(50.0, 20.0)));
        assert_eq!(pieces.len(), 1);
        assert_relative_eq!(pieces[0].length(), 30.0, epsilon = 1e-9);
        assert_relative_eq!(pieces[0].start.y, -15.0, epsilon = 1e-9);
        assert_relative_eq!(pieces[0].end.y, 15.0, epsilon = 1e-9);
    }

    #[test]
    fn clip_keeps_segment_fully_inside() {
        let rect = Polygon::rectangle(p(0.0, -15.0), p(100.0, 15.0)).unwrap();
        let s = Segment::new(p(50.0, -10.0), p(50.0, 10.0));
        let pieces = rect.clip_segment(&s);
        assert_eq!(pieces, vec![s]);
    }

    #[test]
    fn clip_drops_segment_fully_outside() {
        let rect = Polygon::rectangle(p(0.0, -15.0), p(100.0, 15.0)).unwrap();
        let pieces = rect.clip_segment(&Segment::new(p(150.0, -10.0), p(150.0, 10.0)));
        assert!(pieces.is_empty());
    }

    #[test]
    fn clip_keeps_segment_on_boundary() {
        let rect = Polygon::rectangle(p(0.0, -15.0), p(100.0, 15.0)).unwrap();
        let pieces = rect.clip_segment(&Segment::new(p(0.0, -20.0), p(0.0, 20.0)));
        assert_eq!(pieces.len(), 1);
        assert_relative_eq!(pieces[0].length(), 30.0, epsilon = 1e-9);
    }

    #[test]
    fn clip_splits_across_concave_notch() {
        let pieces = u_shape().clip_segment(&Segment::new(p(-5.0, 20.0), p(35.0, 20.0)));
        assert_eq!(pieces.len(), 2);
        assert_relative_eq!(pieces[0].start.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(pieces[0].end.x, 10.0, epsilon = 1e-9);
        assert_relative_eq!(pieces[1].start.x, 20.0, epsilon = 1e-9);
        assert_relative_eq!(pieces[1].end.x, 30.0, epsilon = 1e-9);
    }

    #[test]
    fn densified_ring_keeps_shape() {
        let rect = Polygon::rectangle(p(0.0, 0.0), p(10.0, 2.0)).unwrap();
        let dense = rect.densified(1.0);
        assert_eq!(dense.exterior().len(), 24);
        assert_relative_eq!(dense.area(), rect.area(), epsilon = 1e-9);
    }
}
