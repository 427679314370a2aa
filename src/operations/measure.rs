use crate::config::WidthConfig;
use crate::error::Result;
use crate::geometry::{Polygon, Polyline};
use crate::layer::{Crs, Dissolve, Layer, Reproject, Smooth};

use super::probe::{clip_probes, ProbeGenerator, ProbeResolver, WidthSample};
use super::skeleton::Skeletonizer;

/// Prepared road surface, its centerlines and the final width samples.
#[derive(Debug, Clone, PartialEq)]
pub struct WidthOutput {
    /// Polygons after the optional dissolve, reprojection and smoothing
    /// stages; the surface the centerlines and samples were measured on.
    pub polygons: Layer<Polygon>,
    pub centerlines: Layer<Polyline>,
    pub samples: Layer<WidthSample>,
}

/// Measures road width across every polygon of a layer.
///
/// The input layer is first prepared by the optional stages, in order:
/// dissolve, reprojection, smoothing. Each stage builds a new layer; the
/// input is never modified.
///
/// Each prepared polygon is then skeletonized on its own and its probes are
/// clipped against that polygon only. Conflict removal and id assignment run
/// once over the probes of the whole layer, so probes from neighboring
/// polygons that touch are dropped too.
pub struct MeasureWidth<'a, S: Skeletonizer + ?Sized> {
    skeletonizer: &'a S,
    config: WidthConfig,
    dissolver: Option<&'a dyn Dissolve>,
    reprojection: Option<(Crs, &'a dyn Reproject)>,
    smoother: Option<&'a dyn Smooth>,
}

impl<'a, S: Skeletonizer + ?Sized> MeasureWidth<'a, S> {
    /// Creates a new `MeasureWidth` operation with no preparation stages.
    #[must_use]
    pub fn new(skeletonizer: &'a S, config: WidthConfig) -> Self {
        Self {
            skeletonizer,
            config,
            dissolver: None,
            reprojection: None,
            smoother: None,
        }
    }

    #[must_use]
    pub fn with_dissolve(mut self, dissolver: &'a dyn Dissolve) -> Self {
        self.dissolver = Some(dissolver);
        self
    }

    /// Reprojects the dissolved layer into `target` before smoothing.
    #[must_use]
    pub fn with_reprojection(mut self, target: Crs, reprojector: &'a dyn Reproject) -> Self {
        self.reprojection = Some((target, reprojector));
        self
    }

    #[must_use]
    pub fn with_smoothing(mut self, smoother: &'a dyn Smooth) -> Self {
        self.smoother = Some(smoother);
        self
    }

    /// Executes the operation. All outputs carry the prepared layer's CRS.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` for a bad configuration,
    /// `LayerError::UndefinedCrs` when reprojecting a layer without a CRS,
    /// `OperationError::EmptyInput` if no probes were generated and the
    /// configuration rejects empty input, and propagates collaborator errors.
    pub fn execute(&self, layer: &Layer<Polygon>) -> Result<WidthOutput> {
        self.config.validate()?;
        let surface = self.prepare(layer)?;

        let generator = ProbeGenerator::from_config(&self.config);
        let resolver = ProbeResolver::from_config(&self.config);

        let mut centerlines = Vec::new();
        let mut clipped = Vec::new();
        let mut raw_total = 0;

        for polygon in &surface.features {
            let paths = self.skeletonizer.centerline(
                std::slice::from_ref(polygon),
                self.config.densify_distance,
                self.config.simplify_tolerance,
            )?;
            let raw = generator.along_paths(&paths)?;
            raw_total += raw.len();
            clipped.extend(clip_probes(&raw, polygon));
            centerlines.extend(paths);
        }

        resolver.check_input(raw_total)?;
        let samples = resolver.finish(&clipped);

        tracing::info!(
            polygons = surface.len(),
            centerlines = centerlines.len(),
            raw_probes = raw_total,
            samples = samples.len(),
            "measured road width"
        );

        Ok(WidthOutput {
            centerlines: Layer::new(surface.crs, centerlines),
            samples: Layer::new(surface.crs, samples),
            polygons: surface,
        })
    }

    fn prepare(&self, layer: &Layer<Polygon>) -> Result<Layer<Polygon>> {
        let mut surface = match self.dissolver {
            Some(dissolver) => layer.dissolved(dissolver)?,
            None => layer.clone(),
        };
        if let Some((target, reprojector)) = self.reprojection {
            surface = surface.to_crs(target, reprojector)?;
        }
        if let Some(smoother) = self.smoother {
            surface = surface.smoothed(smoother)?;
        }
        Ok(surface)
    }
}
