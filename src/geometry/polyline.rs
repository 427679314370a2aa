use crate::error::{GeometryError, Result};
use crate::math::distance_2d::point_to_line_dist;
use crate::math::Point2;

use super::Segment;

/// An open polyline: one connected path through two or more points.
///
/// Arc length is derived from the points on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    points: Vec<Point2>,
}

impl Polyline {
    /// Creates a polyline.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if fewer than 2 points are given.
    pub fn new(points: Vec<Point2>) -> Result<Self> {
        if points.len() < 2 {
            return Err(GeometryError::Degenerate(format!(
                "polyline needs at least 2 points, got {}",
                points.len()
            ))
            .into());
        }
        Ok(Self { points })
    }

    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Iterates over consecutive point pairs.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.points.windows(2).map(|w| Segment::new(w[0], w[1]))
    }

    /// Total arc length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.segments().map(|s| s.length()).sum()
    }

    /// Returns the point at arc length `distance` from the start.
    ///
    /// `distance` is clamped to `[0, length]`; at or beyond the total length the
    /// last vertex is returned exactly.
    #[must_use]
    pub fn point_at(&self, distance: f64) -> Point2 {
        let first = self.points[0];
        let last = self.points[self.points.len() - 1];
        if distance <= 0.0 {
            return first;
        }

        let mut remaining = distance;
        for seg in self.segments() {
            let len = seg.length();
            if len <= 0.0 {
                continue;
            }
            if remaining < len {
                return seg.point_at_param(remaining / len);
            }
            remaining -= len;
        }
        last
    }

    /// Inserts evenly spaced vertices so no segment is longer than `max_step`.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn densify(&self, max_step: f64) -> Self {
        if max_step <= 0.0 {
            return self.clone();
        }
        let mut points = Vec::with_capacity(self.points.len());
        points.push(self.points[0]);
        for seg in self.segments() {
            let n = (seg.length() / max_step).ceil().max(1.0) as usize;
            for k in 1..=n {
                points.push(seg.point_at_param(k as f64 / n as f64));
            }
        }
        Self { points }
    }

    /// Simplifies with Ramer–Douglas–Peucker. Endpoints are always kept.
    ///
    /// A tolerance of `0.0` only removes exactly collinear vertices.
    #[must_use]
    pub fn simplify(&self, tolerance: f64) -> Self {
        let n = self.points.len();
        if n < 3 {
            return self.clone();
        }

        let mut kept = vec![false; n];
        kept[0] = true;
        kept[n - 1] = true;

        // Iterative stack instead of recursion: skeleton paths can be long.
        let mut stack = vec![(0, n - 1)];
        while let Some((start, end)) = stack.pop() {
            if end <= start + 1 {
                continue;
            }
            let (a, b) = (&self.points[start], &self.points[end]);
            let mut max_dist = -1.0;
            let mut max_idx = start;
            for i in (start + 1)..end {
                let d = point_to_line_dist(&self.points[i], a, b);
                if d > max_dist {
                    max_dist = d;
                    max_idx = i;
                }
            }
            if max_dist > tolerance {
                kept[max_idx] = true;
                stack.push((start, max_idx));
                stack.push((max_idx, end));
            }
        }

        let points = self
            .points
            .iter()
            .zip(&kept)
            .filter(|&(_, k)| *k)
            .map(|(&p, _)| p)
            .collect();
        Self { points }
    }
}
