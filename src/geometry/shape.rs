use crate::error::{GeometryError, Result};
use crate::math::Point2;

use super::{Polygon, Polyline};

/// A feature geometry of any supported kind.
///
/// Only the linear kinds are path-like; everything else is rejected where
/// paths are expected.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point2),
    LineString(Polyline),
    MultiLineString(Vec<Polyline>),
    Polygon(Polygon),
}

impl Geometry {
    /// Human-readable kind name.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Geometry::Point(_) => "Point",
            Geometry::LineString(_) => "LineString",
            Geometry::MultiLineString(_) => "MultiLineString",
            Geometry::Polygon(_) => "Polygon",
        }
    }

    /// The simple paths making up this geometry, in insertion order.
    ///
    /// A single polyline is one path; a collection yields each member.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::UnsupportedGeometryKind` for non-linear kinds.
    pub fn simple_paths(&self) -> Result<&[Polyline]> {
        match self {
            Geometry::LineString(line) => Ok(std::slice::from_ref(line)),
            Geometry::MultiLineString(lines) => Ok(lines),
            other => Err(GeometryError::UnsupportedGeometryKind { kind: other.kind() }.into()),
        }
    }
}

impl From<Polyline> for Geometry {
    fn from(line: Polyline) -> Self {
        Geometry::LineString(line)
    }
}

impl From<Vec<Polyline>> for Geometry {
    fn from(lines: Vec<Polyline>) -> Self {
        Geometry::MultiLineString(lines)
    }
}

impl From<Polygon> for Geometry {
    fn from(polygon: Polygon) -> Self {
        Geometry::Polygon(polygon)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::RoadWidthError;

    fn line(x0: f64, x1: f64) -> Polyline {
        Polyline::new(vec![Point2::new(x0, 0.0), Point2::new(x1, 0.0)]).unwrap()
    }

    #[test]
    fn linestring_is_one_path() {
        let g = Geometry::from(line(0.0, 1.0));
        assert_eq!(g.simple_paths().unwrap().len(), 1);
    }

    #[test]
    fn multilinestring_keeps_insertion_order() {
        let g = Geometry::from(vec![line(5.0, 6.0), line(0.0, 1.0)]);
        let paths = g.simple_paths().unwrap();
        assert_eq!(paths.len(), 2);
        assert!((paths[0].points()[0].x - 5.0).abs() < 1e-12);
    }

    #[test]
    fn point_is_rejected() {
        let err = Geometry::Point(Point2::new(0.0, 0.0)).simple_paths().unwrap_err();
        assert!(matches!(
            err,
            RoadWidthError::Geometry(GeometryError::UnsupportedGeometryKind { kind: "Point" })
        ));
    }
}
