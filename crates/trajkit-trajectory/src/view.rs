use nalgebra::Vector3;
use trajkit_storage::{DataHolder, ParameterBlock};

use crate::{EvalFlags, Scalar, TrajectoryError, TrajectoryEvaluation};

/// A transient, read-only binding of one holder and one metadata value.
///
/// Views never own what they read: they borrow the holder and the metadata for `'a`,
/// so they cannot outlive the trajectory they were created from. Every call re-reads
/// the current parameter values.
pub trait TrajectoryView<'a, T: Scalar>: Sized {
    /// The metadata the view is bound with.
    type Meta;

    /// Binds a holder and its metadata.
    fn bind(holder: &'a dyn DataHolder<T>, meta: Self::Meta) -> Self;

    /// Evaluates the trajectory at time `t`.
    ///
    /// Flags the trajectory kind does not understand are ignored.
    fn evaluate(&self, t: T, flags: EvalFlags)
        -> Result<TrajectoryEvaluation<T>, TrajectoryError>;

    /// The parameter blocks in use, in registration order.
    fn parameter_blocks(&self) -> Result<Vec<ParameterBlock<T>>, TrajectoryError>;

    /// Position at time `t`.
    fn position(&self, t: T) -> Result<Vector3<T>, TrajectoryError> {
        Ok(self.evaluate(t, EvalFlags::POSITION)?.position)
    }
}
