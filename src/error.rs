use thiserror::Error;

/// Top-level error type for road width extraction.
#[derive(Debug, Error)]
pub enum RoadWidthError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Layer(#[from] LayerError),
}

/// Errors related to input geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("unsupported geometry kind: {kind} (expected a polyline or polyline collection)")]
    UnsupportedGeometryKind { kind: &'static str },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to width extraction operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("empty input: {0}")]
    EmptyInput(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("operation failed: {0}")]
    Failed(String),
}

/// Errors related to feature layers and their reference systems.
#[derive(Debug, Error)]
pub enum LayerError {
    #[error("layer has no coordinate reference system defined")]
    UndefinedCrs,

    #[error("reprojection failed: {0}")]
    Reprojection(String),
}

/// Convenience type alias for results using [`RoadWidthError`].
pub type Result<T> = std::result::Result<T, RoadWidthError>;
