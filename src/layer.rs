use std::fmt;

use crate::error::{LayerError, Result};
use crate::geometry::Polygon;
use crate::math::Point2;

/// Coordinate reference system, identified by EPSG code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Crs(pub u32);

impl Crs {
    /// WGS 84 geographic coordinates.
    pub const WGS84: Crs = Crs(4326);
    /// WGS 84 / UTM zone 51N, the default planar target.
    pub const UTM_51N: Crs = Crs(32651);

    #[must_use]
    pub fn epsg(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EPSG:{}", self.0)
    }
}

/// Converts points between reference systems.
///
/// Implementations wrap a projection library; none is bundled here.
pub trait Reproject {
    /// Converts `point` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns `LayerError::Reprojection` if the conversion is not possible.
    fn reproject(&self, point: &Point2, from: Crs, to: Crs) -> Result<Point2>;
}

/// Merges the polygons of a layer into as few polygons as their overlaps allow.
pub trait Dissolve {
    /// Unions `polygons` into a set of non-overlapping polygons.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::Failed` if the union cannot be computed.
    fn dissolve(&self, polygons: &[Polygon]) -> Result<Vec<Polygon>>;
}

/// Cleans up a road outline before skeletonizing, typically by buffering it
/// outward and back inward and then simplifying the rings.
pub trait Smooth {
    /// Smooths one polygon. Buffering may split or remove it, so any number
    /// of polygons can come back.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::Failed` if the outline cannot be rebuilt.
    fn smooth(&self, polygon: &Polygon) -> Result<Vec<Polygon>>;
}

/// A collection of features sharing one optional reference system.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer<T> {
    pub crs: Option<Crs>,
    pub features: Vec<T>,
}

impl<T> Layer<T> {
    #[must_use]
    pub fn new(crs: Option<Crs>, features: Vec<T>) -> Self {
        Self { crs, features }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Builds a new layer with the same CRS from transformed features.
    #[must_use]
    pub fn map<U, F>(&self, f: F) -> Layer<U>
    where
        F: FnMut(&T) -> U,
    {
        Layer {
            crs: self.crs,
            features: self.features.iter().map(f).collect(),
        }
    }

    /// Returns the layer's CRS.
    ///
    /// # Errors
    ///
    /// Returns `LayerError::UndefinedCrs` if none is set.
    pub fn require_crs(&self) -> Result<Crs> {
        self.crs.ok_or_else(|| LayerError::UndefinedCrs.into())
    }
}

impl Layer<Polygon> {
    /// Returns a copy of this layer expressed in `target`.
    ///
    /// Already being in `target` yields an unchanged copy without touching
    /// `reprojector`.
    ///
    /// # Errors
    ///
    /// Returns `LayerError::UndefinedCrs` if the layer has no CRS, and
    /// propagates reprojector and degenerate-ring errors.
    pub fn to_crs<R: Reproject + ?Sized>(&self, target: Crs, reprojector: &R) -> Result<Self> {
        let source = self.require_crs()?;
        if source == target {
            tracing::debug!(crs = %source, "layer already in target crs");
            return Ok(self.clone());
        }

        tracing::debug!(from = %source, to = %target, polygons = self.len(), "reprojecting layer");
        let features = self
            .features
            .iter()
            .map(|poly| poly.try_map_points(|p| reprojector.reproject(p, source, target)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Layer {
            crs: Some(target),
            features,
        })
    }

    /// Returns a new layer holding the dissolved polygons. The CRS is kept.
    ///
    /// # Errors
    ///
    /// Propagates errors from `dissolver`.
    pub fn dissolved<D: Dissolve + ?Sized>(&self, dissolver: &D) -> Result<Self> {
        let features = dissolver.dissolve(&self.features)?;
        tracing::debug!(before = self.len(), after = features.len(), "dissolved layer");
        Ok(Layer {
            crs: self.crs,
            features,
        })
    }

    /// Returns a new layer with every polygon smoothed. The CRS is kept.
    ///
    /// # Errors
    ///
    /// Propagates errors from `smoother`.
    pub fn smoothed<S: Smooth + ?Sized>(&self, smoother: &S) -> Result<Self> {
        let mut features = Vec::with_capacity(self.len());
        for polygon in &self.features {
            features.extend(smoother.smooth(polygon)?);
        }
        tracing::debug!(before = self.len(), after = features.len(), "smoothed layer");
        Ok(Layer {
            crs: self.crs,
            features,
        })
    }
}
