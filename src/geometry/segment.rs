use crate::math::intersect_2d::segments_intersect;
use crate::math::{Point2, Vector2};

/// A straight two-point line segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point2,
    pub end: Point2,
}

impl Segment {
    /// Creates a segment from its endpoints.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(&self) -> f64 {
        nalgebra::distance(&self.start, &self.end)
    }

    /// Vector from `start` to `end`.
    #[must_use]
    pub fn delta(&self) -> Vector2 {
        self.end - self.start
    }

    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        nalgebra::center(&self.start, &self.end)
    }

    /// Point at parameter `t` where `0` is `start` and `1` is `end`.
    #[must_use]
    pub fn point_at_param(&self, t: f64) -> Point2 {
        self.start + self.delta() * t
    }

    /// Returns `true` if the two segments share any point, endpoints included.
    #[must_use]
    pub fn intersects(&self, other: &Segment) -> bool {
        self.bounds_overlap(other)
            && segments_intersect(&self.start, &self.end, &other.start, &other.end)
    }

    /// Axis-aligned bounding box as `(min, max)`.
    #[must_use]
    pub fn bounds(&self) -> (Point2, Point2) {
        (
            Point2::new(self.start.x.min(self.end.x), self.start.y.min(self.end.y)),
            Point2::new(self.start.x.max(self.end.x), self.start.y.max(self.end.y)),
        )
    }

    fn bounds_overlap(&self, other: &Segment) -> bool {
        let eps = 1e-9;
        let (a_min, a_max) = self.bounds();
        let (b_min, b_max) = other.bounds();
        a_min.x <= b_max.x + eps
            && b_min.x <= a_max.x + eps
            && a_min.y <= b_max.y + eps
            && b_min.y <= a_max.y + eps
    }
}
