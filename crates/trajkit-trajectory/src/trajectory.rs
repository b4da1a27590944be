use nalgebra::Vector3;
use trajkit_storage::{ParameterBlock, SharedHolder};

use crate::{
    estimator::ParameterSink, EvalFlags, TrajectoryError, TrajectoryEvaluation, TrajectoryView,
};

/// Owning unit combining a holder, metadata, and the view that reads them.
///
/// All read access goes through a freshly bound view.
pub trait Trajectory {
    /// Name identifying the trajectory kind.
    const CLASS_ID: &'static str;

    /// The view type reading this trajectory.
    type View<'a>: TrajectoryView<'a, f64>
    where
        Self: 'a;

    /// The holder of the trajectory parameters.
    fn holder(&self) -> &SharedHolder<f64>;

    /// Binds a view over the current holder and metadata.
    fn as_view(&self) -> Self::View<'_>;

    /// Evaluates the trajectory at time `t`.
    fn evaluate(
        &self,
        t: f64,
        flags: EvalFlags,
    ) -> Result<TrajectoryEvaluation<f64>, TrajectoryError> {
        self.as_view().evaluate(t, flags)
    }

    /// Position at time `t`.
    fn position(&self, t: f64) -> Result<Vector3<f64>, TrajectoryError> {
        self.as_view().position(t)
    }

    /// The parameter blocks in use, in registration order.
    fn parameter_blocks(&self) -> Result<Vec<ParameterBlock<f64>>, TrajectoryError> {
        self.as_view().parameter_blocks()
    }

    /// Registers the parameter blocks in use with an estimator.
    ///
    /// Returns the number of blocks handed to the estimator. The addresses stay valid
    /// for the lifetime of the trajectory.
    fn add_to_estimator<S>(&self, estimator: &mut S) -> Result<usize, TrajectoryError>
    where
        S: ParameterSink<f64> + ?Sized,
    {
        let blocks = self.parameter_blocks()?;
        for block in &blocks {
            estimator.add_parameter_block(block);
        }
        log::debug!(
            "{}: registered {} parameter blocks",
            Self::CLASS_ID,
            blocks.len()
        );
        Ok(blocks.len())
    }
}
