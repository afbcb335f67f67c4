//! Error types for the occultation model.

/// Result type for model computations
pub type ModelResult<T> = Result<T, ModelError>;

/// Error type for model computations.
///
/// Every public function validates its own preconditions and fails fast with
/// one of these variants instead of letting NaN or infinity propagate. None
/// of the failures are transient; they all indicate a caller input error.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// A required quantity is non-positive, NaN, or otherwise outside its
    /// documented domain.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The grazing geometry implies an unbounded partial-phase duration.
    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),

    /// The small-angle approximation no longer holds for the given radius
    /// and distance; almost always a unit mismatch in the caller.
    #[error("Unrealistic approximation: {0}")]
    UnrealisticApproximation(String),
}
