use crate::config::{EmptyProbes, WidthConfig};
use crate::error::{OperationError, Result};
use crate::geometry::Polygon;

use super::{clip_probes, remove_conflicts, Probe, WidthSample};

/// Turns raw probes into the final, conflict-free width samples.
///
/// # Algorithm
///
/// 1. **Clip** every probe to the bounding polygon ([`clip_probes`])
/// 2. **Remove conflicts**: drop every probe touching another ([`remove_conflicts`])
/// 3. **Assign** contiguous ids and measured widths ([`assign_ids`])
#[derive(Debug, Clone, Copy, Default)]
pub struct ProbeResolver {
    empty_probes: EmptyProbes,
}

impl ProbeResolver {
    /// Creates a resolver that rejects empty input.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_config(config: &WidthConfig) -> Self {
        Self::new().with_empty_probes(config.empty_probes)
    }

    #[must_use]
    pub fn with_empty_probes(mut self, policy: EmptyProbes) -> Self {
        self.empty_probes = policy;
        self
    }

    /// Resolves raw probes against one bounding polygon.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::EmptyInput` if `raw_probes` is empty and the
    /// policy is [`EmptyProbes::Reject`].
    pub fn execute(&self, raw_probes: &[Probe], polygon: &Polygon) -> Result<Vec<WidthSample>> {
        self.check_input(raw_probes.len())?;
        let clipped = clip_probes(raw_probes, polygon);
        Ok(self.finish(&clipped))
    }

    /// Applies the empty-input policy to a raw probe count.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::EmptyInput` when `raw_count` is zero under
    /// [`EmptyProbes::Reject`].
    pub fn check_input(&self, raw_count: usize) -> Result<()> {
        if raw_count == 0 && self.empty_probes == EmptyProbes::Reject {
            return Err(OperationError::EmptyInput("no probes were generated".to_owned()).into());
        }
        Ok(())
    }

    /// Runs conflict removal and id assignment over already-clipped probes.
    #[must_use]
    pub fn finish(&self, clipped: &[Probe]) -> Vec<WidthSample> {
        let samples = assign_ids(&remove_conflicts(clipped));
        if samples.is_empty() && !clipped.is_empty() {
            tracing::warn!(clipped = clipped.len(), "every probe conflicted with another");
        }
        samples
    }
}

/// Numbers probes by position and records each one's length as its width.
#[must_use]
pub fn assign_ids(probes: &[Probe]) -> Vec<WidthSample> {
    probes
        .iter()
        .enumerate()
        .map(|(id, probe)| WidthSample {
            id,
            segment: probe.segment,
            width: probe.length(),
        })
        .collect()
}
