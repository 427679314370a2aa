use crate::geometry::{Polygon, Segment};
use crate::math::distance_2d::point_to_segment_dist;

use super::Probe;

/// Max distance between a probe's center and the clipped piece kept for it.
const CENTER_TOL: f64 = 1e-9;

/// Clips each probe to `polygon`.
///
/// Only probes lying entirely outside the polygon are dropped. When the
/// polygon cuts a probe into several pieces, the piece through the probe's
/// own sample point is kept, so a probe never spans a gap outside the road.
/// If no piece passes through the sample point (it sits just outside the
/// boundary, or in a notch), the piece nearest to it is kept instead; ties go
/// to the piece closer to the probe's start.
#[must_use]
pub fn clip_probes(probes: &[Probe], polygon: &Polygon) -> Vec<Probe> {
    let mut clipped = Vec::with_capacity(probes.len());
    let mut outside = 0_usize;
    let mut off_center = 0_usize;

    for probe in probes {
        let mut nearest: Option<(f64, Segment)> = None;
        for piece in polygon.clip_segment(&probe.segment) {
            let dist = point_to_segment_dist(&probe.center, &piece.start, &piece.end);
            if nearest.is_none_or(|(best, _)| dist < best) {
                nearest = Some((dist, piece));
            }
        }
        match nearest {
            Some((dist, segment)) => {
                if dist > CENTER_TOL {
                    off_center += 1;
                }
                clipped.push(Probe {
                    segment,
                    center: probe.center,
                });
            }
            None => outside += 1,
        }
    }

    tracing::debug!(
        kept = clipped.len(),
        dropped = outside,
        off_center,
        "clipped probes to polygon"
    );
    clipped
}
