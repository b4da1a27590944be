use thiserror::Error;
use trajkit_storage::HolderError;

/// Errors that can occur when reading or evaluating trajectories.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TrajectoryError {
    /// Storage access failed
    #[error("Holder error: {0}")]
    Holder(#[from] HolderError),

    /// Composite metadata was built from a single child twice
    #[error("Composite metadata children must be distinct instances")]
    AliasedMetadata,

    /// A metadata coefficient cannot be represented in the evaluation scalar
    #[error("Cannot convert {0} to the evaluation scalar type")]
    ScalarConversion(f64),
}
