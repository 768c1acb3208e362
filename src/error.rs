use thiserror::Error;

/// Top-level error type for network simplification.
#[derive(Debug, Error)]
pub enum GeopruneError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors raised while building or inspecting segment geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate segment: {0}")]
    DegenerateSegment(String),

    #[error("non-finite coordinate ({x}, {y})")]
    NonFiniteCoordinate { x: f64, y: f64 },
}

/// Errors related to filtering operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience type alias for results using [`GeopruneError`].
pub type Result<T> = std::result::Result<T, GeopruneError>;
