pub mod polygon;
pub mod polyline;
pub mod segment;
pub mod shape;

pub use polygon::Polygon;
pub use polyline::Polyline;
pub use segment::Segment;
pub use shape::Geometry;
