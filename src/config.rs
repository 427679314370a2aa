use crate::error::{OperationError, Result};

/// How the tangent is chosen at a sample that sits on a path's last point.
///
/// Looking ahead from the terminal point gives a zero direction vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminalTangent {
    /// Use the direction arriving at the terminal point, from one interval back.
    #[default]
    LookBehind,
    /// Treat the tangent angle as `atan2(0, 0) = 0`, so the probe is vertical.
    ZeroAngle,
}

/// What the resolver does when it receives no raw probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyProbes {
    /// Fail with `OperationError::EmptyInput`.
    #[default]
    Reject,
    /// Return an empty probe set.
    Allow,
}

/// Parameters for centerline extraction and probe sampling.
///
/// Lengths are in planar units of the active coordinate reference system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidthConfig {
    /// Half the length of each raw probe.
    pub probe_half_length: f64,
    /// Arc-length spacing between samples along the centerline.
    pub interval: f64,
    /// Maximum boundary edge length fed to the skeletonizer.
    pub densify_distance: f64,
    /// Ramer–Douglas–Peucker tolerance applied to centerline paths.
    pub simplify_tolerance: f64,
    pub terminal_tangent: TerminalTangent,
    pub empty_probes: EmptyProbes,
}

impl Default for WidthConfig {
    fn default() -> Self {
        Self {
            probe_half_length: 10.0,
            interval: 5.0,
            densify_distance: 0.1,
            simplify_tolerance: 0.001,
            terminal_tangent: TerminalTangent::default(),
            empty_probes: EmptyProbes::default(),
        }
    }
}

impl WidthConfig {
    /// Checks that every length is finite and in range.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        require_positive("probe_half_length", self.probe_half_length)?;
        require_positive("interval", self.interval)?;
        require_positive("densify_distance", self.densify_distance)?;
        if !self.simplify_tolerance.is_finite() || self.simplify_tolerance < 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "simplify_tolerance must be finite and >= 0, got {}",
                self.simplify_tolerance
            ))
            .into());
        }
        Ok(())
    }
}

pub(crate) fn require_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(OperationError::InvalidInput(format!(
            "{name} must be finite and > 0, got {value}"
        ))
        .into())
    }
}
