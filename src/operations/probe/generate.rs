use std::f64::consts::FRAC_PI_2;

use crate::config::{require_positive, TerminalTangent, WidthConfig};
use crate::error::{OperationError, Result};
use crate::geometry::{Geometry, Polyline, Segment};
use crate::math::{Vector2, TOLERANCE};

use super::Probe;

/// Upper bound on samples along one path; denser requests are rejected.
pub const MAX_SAMPLES_PER_PATH: usize = 10_000_000;

/// Samples centerline paths at a fixed arc-length interval and casts a probe
/// perpendicular to the local direction at each sample.
///
/// # Algorithm
///
/// For a path of length `L`, `floor(L / interval) + 1` samples are taken at
/// `min(i * interval, L)`. The local direction at a sample points to the path
/// position one interval further on (clamped to `L`). The probe is centered on
/// the sample and spans `probe_half_length` to either side along the direction
/// rotated by +90°.
///
/// At the terminal point the look-ahead direction is zero; see
/// [`TerminalTangent`] for how that case is resolved.
#[derive(Debug, Clone, Copy)]
pub struct ProbeGenerator {
    probe_half_length: f64,
    interval: f64,
    terminal_tangent: TerminalTangent,
}

impl ProbeGenerator {
    /// Creates a generator using the default terminal-tangent policy.
    #[must_use]
    pub fn new(probe_half_length: f64, interval: f64) -> Self {
        Self {
            probe_half_length,
            interval,
            terminal_tangent: TerminalTangent::default(),
        }
    }

    #[must_use]
    pub fn from_config(config: &WidthConfig) -> Self {
        Self::new(config.probe_half_length, config.interval)
            .with_terminal_tangent(config.terminal_tangent)
    }

    #[must_use]
    pub fn with_terminal_tangent(mut self, policy: TerminalTangent) -> Self {
        self.terminal_tangent = policy;
        self
    }

    /// Generates probes for every simple path of every geometry, in input
    /// order.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::UnsupportedGeometryKind` if any geometry is not
    /// a polyline or polyline collection, or `OperationError::InvalidInput` if
    /// the half length or interval is not a positive finite number.
    pub fn execute(&self, geometries: &[Geometry]) -> Result<Vec<Probe>> {
        self.validate()?;
        let mut probes = Vec::new();
        for geometry in geometries {
            probes.extend(self.along_paths(geometry.simple_paths()?)?);
        }
        Ok(probes)
    }

    /// Generates probes for a slice of simple paths, in input order.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` for non-positive lengths, or
    /// when a path would need more than [`MAX_SAMPLES_PER_PATH`] samples.
    pub fn along_paths(&self, paths: &[Polyline]) -> Result<Vec<Probe>> {
        self.validate()?;
        let mut probes = Vec::new();
        for (index, path) in paths.iter().enumerate() {
            let before = probes.len();
            self.sample_path(path, &mut probes)?;
            tracing::debug!(
                path = index,
                length = path.length(),
                probes = probes.len() - before,
                "sampled centerline path"
            );
        }
        Ok(probes)
    }

    fn validate(&self) -> Result<()> {
        require_positive("probe_half_length", self.probe_half_length)?;
        require_positive("interval", self.interval)
    }

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn sample_path(&self, path: &Polyline, out: &mut Vec<Probe>) -> Result<()> {
        let length = path.length();
        let steps = (length / self.interval).floor();
        if !steps.is_finite() || steps >= MAX_SAMPLES_PER_PATH as f64 {
            return Err(OperationError::InvalidInput(format!(
                "path of length {length} at interval {} exceeds {MAX_SAMPLES_PER_PATH} samples",
                self.interval
            ))
            .into());
        }
        let count = (steps as usize).saturating_add(1);
        out.reserve(count);

        for i in 0..count {
            let position = (i as f64 * self.interval).min(length);
            let point = path.point_at(position);
            let next = path.point_at((position + self.interval).min(length));

            let mut direction: Vector2 = next - point;
            if direction.norm() <= TOLERANCE {
                direction = match self.terminal_tangent {
                    TerminalTangent::LookBehind => {
                        point - path.point_at((position - self.interval).max(0.0))
                    }
                    TerminalTangent::ZeroAngle => Vector2::zeros(),
                };
            }

            // atan2(0, 0) is 0, so a fully degenerate direction yields a
            // vertical probe.
            let perp_angle = direction.y.atan2(direction.x) + FRAC_PI_2;
            let offset = Vector2::new(perp_angle.cos(), perp_angle.sin()) * self.probe_half_length;

            out.push(Probe {
                segment: Segment::new(point + offset, point - offset),
                center: point,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::{abs_diff_eq, assert_relative_eq};

    use super::*;
    use crate::error::{GeometryError, OperationError, RoadWidthError};
    use crate::math::Point2;

    fn line(coords: &[(f64, f64)]) -> Polyline {
        Polyline::new(coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()).unwrap()
    }

    fn generate(path: Polyline, half: f64, interval: f64) -> Vec<Probe> {
        ProbeGenerator::new(half, interval)
            .execute(&[Geometry::from(path)])
            .unwrap()
    }

    #[test]
    fn sample_count_is_floor_plus_one() {
        for (length, interval, expected) in [
            (100.0, 20.0, 6),
            (99.0, 20.0, 5),
            (7.0, 2.5, 3),
            (10.0, 10.0, 2),
        ] {
            let probes = generate(line(&[(0.0, 0.0), (length, 0.0)]), 1.0, interval);
            assert_eq!(probes.len(), expected, "L={length} interval={interval}");
        }
    }

    #[test]
    fn samples_are_evenly_spaced_and_clamped() {
        let probes = generate(line(&[(0.0, 0.0), (30.0, 0.0), (30.0, 25.0)]), 1.0, 10.0);
        let centers: Vec<(f64, f64)> = probes.iter().map(|p| (p.center.x, p.center.y)).collect();
        let expected = [(0.0, 0.0), (10.0, 0.0), (20.0, 0.0), (30.0, 0.0), (30.0, 10.0), (30.0, 20.0)];
        assert_eq!(centers.len(), expected.len());
        for (c, e) in centers.iter().zip(expected) {
            assert!(abs_diff_eq!(c.0, e.0, epsilon = 1e-9) && abs_diff_eq!(c.1, e.1, epsilon = 1e-9));
        }
    }

    #[test]
    fn raw_probes_have_symmetric_length() {
        let probes = generate(line(&[(0.0, 0.0), (13.0, 7.0), (20.0, -4.0)]), 6.5, 3.0);
        for probe in &probes {
            assert_relative_eq!(probe.length(), 13.0, epsilon = 1e-9);
            assert_relative_eq!(probe.segment.midpoint().x, probe.center.x, epsilon = 1e-9);
            assert_relative_eq!(probe.segment.midpoint().y, probe.center.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn probes_are_perpendicular_to_local_direction() {
        let path = line(&[(0.0, 0.0), (40.0, 30.0)]);
        let probes = generate(path.clone(), 5.0, 10.0);
        let tangent = Vector2::new(0.8, 0.6);
        // The last probe sits on the terminal point; the rest look ahead.
        for probe in &probes[..probes.len() - 1] {
            let d = probe.segment.end - probe.segment.start;
            assert!(d.dot(&tangent).abs() < 1e-9, "dot={}", d.dot(&tangent));
        }
    }

    #[test]
    fn short_path_yields_single_probe_toward_endpoint() {
        // Length 5 with interval 20: one sample at 0, looking ahead to 5.
        let probes = generate(line(&[(0.0, 0.0), (5.0, 0.0)]), 2.0, 20.0);
        assert_eq!(probes.len(), 1);
        let seg = probes[0].segment;
        assert_relative_eq!(seg.start.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(seg.start.y, 2.0, epsilon = 1e-12);
        assert_relative_eq!(seg.end.y, -2.0, epsilon = 1e-12);
    }

    #[test]
    fn terminal_probe_looks_behind_by_default() {
        // Path heading along +y: terminal probe should be horizontal.
        let probes = generate(line(&[(0.0, 0.0), (0.0, 10.0)]), 1.0, 5.0);
        let last = probes.last().unwrap().segment;
        assert_relative_eq!(last.start.y, 10.0, epsilon = 1e-12);
        assert_relative_eq!(last.end.y, 10.0, epsilon = 1e-12);
        assert_relative_eq!((last.start.x - last.end.x).abs(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn terminal_probe_zero_angle_is_vertical() {
        let generator =
            ProbeGenerator::new(1.0, 5.0).with_terminal_tangent(TerminalTangent::ZeroAngle);
        let probes = generator
            .execute(&[Geometry::from(line(&[(0.0, 0.0), (0.0, 10.0)]))])
            .unwrap();
        let last = probes.last().unwrap().segment;
        assert_relative_eq!(last.start.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(last.end.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(last.start.y, 11.0, epsilon = 1e-12);
    }

    #[test]
    fn zero_length_path_falls_back_to_zero_angle() {
        let probes = generate(line(&[(3.0, 3.0), (3.0, 3.0)]), 1.0, 5.0);
        assert_eq!(probes.len(), 1);
        assert_relative_eq!(probes[0].segment.start.y, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn multiline_collection_is_concatenated_in_order() {
        let collection = Geometry::from(vec![
            line(&[(100.0, 0.0), (110.0, 0.0)]),
            line(&[(0.0, 0.0), (10.0, 0.0)]),
        ]);
        let probes = ProbeGenerator::new(1.0, 5.0).execute(&[collection]).unwrap();
        assert_eq!(probes.len(), 6);
        assert!(probes[..3].iter().all(|p| p.center.x >= 100.0));
        assert!(probes[3..].iter().all(|p| p.center.x <= 10.0));
    }

    #[test]
    fn point_geometry_is_unsupported() {
        let err = ProbeGenerator::new(1.0, 5.0)
            .execute(&[Geometry::Point(Point2::new(0.0, 0.0))])
            .unwrap_err();
        assert!(matches!(
            err,
            RoadWidthError::Geometry(GeometryError::UnsupportedGeometryKind { .. })
        ));
    }

    #[test]
    fn non_positive_interval_is_rejected() {
        let err = ProbeGenerator::new(1.0, 0.0)
            .execute(&[Geometry::from(line(&[(0.0, 0.0), (1.0, 0.0)]))])
            .unwrap_err();
        assert!(matches!(
            err,
            RoadWidthError::Operation(OperationError::InvalidInput(_))
        ));
    }

    #[test]
    fn oversampled_path_is_rejected() {
        let err = ProbeGenerator::new(1.0, 1e-300)
            .execute(&[Geometry::from(line(&[(0.0, 0.0), (1e300, 0.0)]))])
            .unwrap_err();
        assert!(matches!(
            err,
            RoadWidthError::Operation(OperationError::InvalidInput(_))
        ));
    }

    #[test]
    fn sample_cap_is_exclusive() {
        let at_cap = line(&[(0.0, 0.0), (1e7, 0.0)]);
        assert!(ProbeGenerator::new(1.0, 1.0)
            .execute(&[Geometry::from(at_cap)])
            .is_err());
    }
}
