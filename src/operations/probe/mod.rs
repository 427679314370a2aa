//! Perpendicular width probes along a centerline.
//!
//! ```text
//! skeleton paths ─▶ ProbeGenerator ─▶ raw probes
//!                                       │
//!                  clip_probes(polygon) ◀┘
//!                          │
//!                  remove_conflicts ─▶ assign_ids ─▶ WidthSample set
//! ```

mod clip;
mod conflict;
mod generate;
mod resolve;

pub use clip::clip_probes;
pub use conflict::remove_conflicts;
pub use generate::{ProbeGenerator, MAX_SAMPLES_PER_PATH};
pub use resolve::{assign_ids, ProbeResolver};

use crate::error::Result;
use crate::geometry::{Geometry, Polygon, Segment};
use crate::math::Point2;

/// A probe segment cast across the road at one centerline sample.
///
/// Clipping produces a new, shorter probe; the sample `center` is kept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Probe {
    pub segment: Segment,
    /// The centerline sample the probe was cast from.
    pub center: Point2,
}

impl Probe {
    #[must_use]
    pub fn length(&self) -> f64 {
        self.segment.length()
    }
}

/// A surviving, clipped probe tagged with its identity and measured width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidthSample {
    /// Position in the final probe set, 0-based and contiguous.
    pub id: usize,
    pub segment: Segment,
    /// Euclidean length of `segment`.
    pub width: f64,
}

/// Casts probes of length `2 * probe_half_length` every `interval` along each
/// path of `paths`.
///
/// # Errors
///
/// Returns `GeometryError::UnsupportedGeometryKind` if a geometry is not
/// linear, or `OperationError::InvalidInput` for non-positive lengths.
pub fn generate_probes(
    paths: &[Geometry],
    probe_half_length: f64,
    interval: f64,
) -> Result<Vec<Probe>> {
    ProbeGenerator::new(probe_half_length, interval).execute(paths)
}

/// Clips `raw_probes` to `bounding_polygon`, drops every probe that touches
/// another, and numbers the survivors.
///
/// # Errors
///
/// Returns `OperationError::EmptyInput` if `raw_probes` is empty.
pub fn resolve(raw_probes: &[Probe], bounding_polygon: &Polygon) -> Result<Vec<WidthSample>> {
    ProbeResolver::new().execute(raw_probes, bounding_polygon)
}
