use std::fmt;

use super::probe::WidthSample;

/// Smallest, largest and average width of a sample set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidthRange {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

/// Summary of a final probe set, printable as a width listing.
#[derive(Debug, Clone, PartialEq)]
pub struct WidthProfile {
    widths: Vec<(usize, f64)>,
    range: Option<WidthRange>,
}

impl WidthProfile {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_samples(samples: &[WidthSample]) -> Self {
        let widths: Vec<(usize, f64)> = samples.iter().map(|s| (s.id, s.width)).collect();
        let range = if widths.is_empty() {
            None
        } else {
            let (min, max, sum) = widths.iter().fold(
                (f64::INFINITY, f64::NEG_INFINITY, 0.0),
                |(min, max, sum), &(_, w)| (min.min(w), max.max(w), sum + w),
            );
            Some(WidthRange {
                min,
                max,
                mean: sum / widths.len() as f64,
            })
        };
        Self { widths, range }
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.widths.len()
    }

    /// `None` when there are no samples.
    #[must_use]
    pub fn range(&self) -> Option<WidthRange> {
        self.range
    }

    /// `(id, width)` pairs in id order.
    #[must_use]
    pub fn widths(&self) -> &[(usize, f64)] {
        &self.widths
    }
}

impl fmt::Display for WidthProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (id, width) in &self.widths {
            writeln!(f, "{id}: {width:.3}")?;
        }
        match self.range {
            Some(r) => write!(
                f,
                "{} samples, width {:.3}..{:.3}, mean {:.3}",
                self.count(),
                r.min,
                r.max,
                r.mean
            ),
            None => write!(f, "0 samples"),
        }
    }
}
