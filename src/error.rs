use thiserror::Error;

/// Top-level error type for the roomplan solver.
#[derive(Debug, Error)]
pub enum RoomplanError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,
}

/// Fatal precondition violations in the room description.
///
/// These abort the whole solve before any placement attempt; inability to
/// place an individual item is *not* an error (see
/// [`Placement::Rejected`](crate::solver::Placement)).
#[derive(Debug, Error)]
pub enum InputError {
    #[error("room boundary needs at least 3 vertices, got {0}")]
    TooFewBoundaryPoints(usize),

    #[error("door segment has zero length")]
    ZeroLengthDoor,

    #[error("item '{name}' has non-positive dimensions {length} x {width}")]
    NonPositiveDimensions {
        name: String,
        length: f64,
        width: f64,
    },
}

/// Convenience type alias for results using [`RoomplanError`].
pub type Result<T> = std::result::Result<T, RoomplanError>;
