//! Constant trajectory built from a scaled sum of vectors.

use std::rc::Rc;

use nalgebra::Vector3;
use num_traits::FromPrimitive;
use serde::{Deserialize, Serialize};
use trajkit_storage::{DataHolder, ParameterBlock, SharedHolder, VectorHolder};

use crate::{
    EvalFlags, Scalar, Trajectory, TrajectoryError, TrajectoryEvaluation, TrajectoryView,
};

/// Metadata of a [`FooTrajectory`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooMeta {
    /// Number of vectors in use.
    pub n: usize,
    /// Scale applied to the sum of the vectors.
    pub foo: f64,
}

impl Default for FooMeta {
    fn default() -> Self {
        Self { n: 0, foo: 1.0 }
    }
}

/// View over a leaf holder of 3-vectors.
#[derive(Debug)]
pub struct FooView<'a, T: Scalar> {
    holder: &'a dyn DataHolder<T>,
    meta: &'a FooMeta,
}

impl<'a, T: Scalar> FooView<'a, T> {
    /// The scale coefficient in the working scalar type.
    pub fn foo(&self) -> Result<T, TrajectoryError> {
        <T as FromPrimitive>::from_f64(self.meta.foo)
            .ok_or(TrajectoryError::ScalarConversion(self.meta.foo))
    }

    /// The first `n` blocks read as 3-vectors.
    pub fn vectors(&self) -> Result<Vec<Vector3<T>>, TrajectoryError> {
        (0..self.meta.n)
            .map(|i| -> Result<Vector3<T>, TrajectoryError> {
                let block = self.holder.parameter(i)?;
                Ok(Vector3::from(block.read::<3>()?))
            })
            .collect()
    }
}

impl<'a, T: Scalar> TrajectoryView<'a, T> for FooView<'a, T> {
    type Meta = &'a FooMeta;

    fn bind(holder: &'a dyn DataHolder<T>, meta: &'a FooMeta) -> Self {
        Self { holder, meta }
    }

    fn evaluate(
        &self,
        _t: T,
        flags: EvalFlags,
    ) -> Result<TrajectoryEvaluation<T>, TrajectoryError> {
        let sum = self
            .vectors()?
            .into_iter()
            .fold(Vector3::zeros(), |acc, v| acc + v);

        // constant in time, so every derivative is zero
        let derivative = |flag: EvalFlags| flags.contains(flag).then(Vector3::zeros);
        Ok(TrajectoryEvaluation {
            position: sum * self.foo()?,
            velocity: derivative(EvalFlags::VELOCITY),
            acceleration: derivative(EvalFlags::ACCELERATION),
        })
    }

    fn parameter_blocks(&self) -> Result<Vec<ParameterBlock<T>>, TrajectoryError> {
        Ok(self.holder.blocks(0..self.meta.n)?)
    }
}

/// Leaf trajectory made of a list of 3-vectors.
#[derive(Debug)]
pub struct FooTrajectory {
    holder: SharedHolder<f64>,
    meta: FooMeta,
}

impl FooTrajectory {
    /// Creates an empty trajectory with default metadata.
    pub fn new() -> Self {
        Self::with_meta(FooMeta::default())
    }

    /// Creates an empty trajectory from configured metadata.
    ///
    /// The holder starts empty, so the live count of `meta` is reset to zero.
    pub fn with_meta(mut meta: FooMeta) -> Self {
        if meta.n != 0 {
            log::debug!("FooTrajectory: ignoring live count {} of empty holder", meta.n);
            meta.n = 0;
        }
        Self {
            holder: Rc::new(VectorHolder::new()),
            meta,
        }
    }

    /// The metadata of this trajectory.
    #[inline]
    pub fn meta(&self) -> &FooMeta {
        &self.meta
    }

    /// The scale coefficient.
    pub fn foo(&self) -> Result<f64, TrajectoryError> {
        self.as_view().foo()
    }

    /// Sets the scale coefficient.
    pub fn set_foo(&mut self, x: f64) {
        self.meta.foo = x;
    }

    /// Appends a vector and returns the index of its parameter block.
    pub fn add_vector(&mut self, v: &Vector3<f64>) -> Result<usize, TrajectoryError> {
        let index = self.holder.add_parameter(3)?;
        self.holder.parameter(index)?.write(v.as_slice())?;
        self.meta.n += 1;
        Ok(index)
    }

    /// The vectors in use.
    pub fn vectors(&self) -> Result<Vec<Vector3<f64>>, TrajectoryError> {
        self.as_view().vectors()
    }
}

impl Default for FooTrajectory {
    fn default() -> Self {
        Self::new()
    }
}

impl Trajectory for FooTrajectory {
    const CLASS_ID: &'static str = "Foo";

    type View<'a> = FooView<'a, f64>;

    fn holder(&self) -> &SharedHolder<f64> {
        &self.holder
    }

    fn as_view(&self) -> FooView<'_, f64> {
        FooView::bind(&*self.holder, &self.meta)
    }
}
