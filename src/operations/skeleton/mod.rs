//! Centerline extraction from road-surface polygons.

mod chordal;
pub mod graph;

pub use chordal::ChordalAxis;
pub use graph::{NodeId, SkeletonGraph};

use crate::error::Result;
use crate::geometry::{Polygon, Polyline};

/// Produces an approximate medial axis for a set of polygons.
///
/// Implementations densify each boundary to at most `densify_distance`
/// before skeletonizing, and simplify the resulting paths with
/// `simplify_tolerance`. Paths from every input polygon are returned
/// together; their order carries no meaning.
pub trait Skeletonizer {
    /// Computes the centerline paths of `polygons`.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` for out-of-range parameters, or
    /// `OperationError::Failed` if a polygon cannot be skeletonized.
    fn centerline(
        &self,
        polygons: &[Polygon],
        densify_distance: f64,
        simplify_tolerance: f64,
    ) -> Result<Vec<Polyline>>;
}
