//! Composite trajectory evaluating to the sum of two leaf trajectories.

use std::{borrow::Cow, ops::Deref, rc::Rc};

use nalgebra::Vector3;
use trajkit_storage::{DataHolder, MultiHolder, ParameterBlock, SharedHolder};

use crate::{
    EvalFlags, FooMeta, FooTrajectory, FooView, Scalar, Trajectory, TrajectoryError,
    TrajectoryEvaluation, TrajectoryView,
};

/// Metadata of a [`SimpleMultiTrajectory`].
///
/// Refers to the metadata of both children instead of copying it, so changes to a
/// child are visible through the composite immediately. A default-constructed value
/// carries its own default children instead.
#[derive(Debug, Clone)]
pub struct SimpleMultiMeta<'a> {
    a: Cow<'a, FooMeta>,
    b: Cow<'a, FooMeta>,
}

impl<'a> SimpleMultiMeta<'a> {
    /// Refers to the metadata of two distinct children.
    ///
    /// # Errors
    ///
    /// Returns [`TrajectoryError::AliasedMetadata`] if `a` and `b` are the same instance.
    pub fn new(a: &'a FooMeta, b: &'a FooMeta) -> Result<Self, TrajectoryError> {
        if std::ptr::eq(a, b) {
            return Err(TrajectoryError::AliasedMetadata);
        }
        Ok(Self {
            a: Cow::Borrowed(a),
            b: Cow::Borrowed(b),
        })
    }

    /// Metadata of the first child.
    #[inline]
    pub fn a(&self) -> &FooMeta {
        &self.a
    }

    /// Metadata of the second child.
    #[inline]
    pub fn b(&self) -> &FooMeta {
        &self.b
    }
}

impl Default for SimpleMultiMeta<'_> {
    fn default() -> Self {
        Self {
            a: Cow::Owned(FooMeta::default()),
            b: Cow::Owned(FooMeta::default()),
        }
    }
}

/// View over a composite holder of two leaf children.
#[derive(Debug)]
pub struct SimpleMultiView<'a, T: Scalar> {
    holder: &'a dyn DataHolder<T>,
    meta: SimpleMultiMeta<'a>,
}

impl<T: Scalar> SimpleMultiView<'_, T> {
    /// Slices the holders of both children out of the composite.
    fn child_holders(&self) -> Result<[SharedHolder<T>; 2], TrajectoryError> {
        let (a, b) = (self.meta.a(), self.meta.b());
        Ok([self.holder.slice(0, a.n)?, self.holder.slice(a.n, b.n)?])
    }
}

impl<'a, T: Scalar> TrajectoryView<'a, T> for SimpleMultiView<'a, T> {
    type Meta = SimpleMultiMeta<'a>;

    fn bind(holder: &'a dyn DataHolder<T>, meta: SimpleMultiMeta<'a>) -> Self {
        Self { holder, meta }
    }

    fn evaluate(
        &self,
        t: T,
        flags: EvalFlags,
    ) -> Result<TrajectoryEvaluation<T>, TrajectoryError> {
        let [holder_a, holder_b] = self.child_holders()?;
        let view_a = FooView::bind(&*holder_a, self.meta.a());
        let view_b = FooView::bind(&*holder_b, self.meta.b());
        Ok(view_a.evaluate(t, flags)? + view_b.evaluate(t, flags)?)
    }

    fn parameter_blocks(&self) -> Result<Vec<ParameterBlock<T>>, TrajectoryError> {
        let [holder_a, holder_b] = self.child_holders()?;
        let mut blocks = FooView::bind(&*holder_a, self.meta.a()).parameter_blocks()?;
        blocks.extend(FooView::bind(&*holder_b, self.meta.b()).parameter_blocks()?);
        Ok(blocks)
    }
}

/// Trajectory whose position is the sum of two [`FooTrajectory`] children.
///
/// The composite owns its children and has no mutation entry point of its own: grow
/// or rescale a child through [`Self::foo_a_mut`] / [`Self::foo_b_mut`] and the
/// composite observes it. The set of children is fixed at construction.
#[derive(Debug)]
pub struct SimpleMultiTrajectory {
    foo_a: FooTrajectory,
    foo_b: FooTrajectory,
    holder: SharedHolder<f64>,
}

impl SimpleMultiTrajectory {
    /// Creates a composite of two empty children.
    pub fn new() -> Self {
        Self::from_children(FooTrajectory::new(), FooTrajectory::new())
    }

    /// Creates a composite taking ownership of two existing children.
    pub fn from_children(foo_a: FooTrajectory, foo_b: FooTrajectory) -> Self {
        let holder = MultiHolder::new([Rc::clone(foo_a.holder()), Rc::clone(foo_b.holder())]);
        Self {
            foo_a,
            foo_b,
            holder: Rc::new(holder),
        }
    }

    /// The first child.
    #[inline]
    pub fn foo_a(&self) -> &FooTrajectory {
        &self.foo_a
    }

    /// The second child.
    #[inline]
    pub fn foo_b(&self) -> &FooTrajectory {
        &self.foo_b
    }

    /// Mutation handle of the first child.
    ///
    /// The handle grows or rescales the child but cannot replace it:
    ///
    /// ```compile_fail
    /// use trajkit_trajectory::{FooTrajectory, SimpleMultiTrajectory};
    ///
    /// let mut multi = SimpleMultiTrajectory::new();
    /// std::mem::replace(multi.foo_a_mut(), FooTrajectory::new());
    /// ```
    #[inline]
    pub fn foo_a_mut(&mut self) -> ChildMut<'_> {
        ChildMut(&mut self.foo_a)
    }

    /// Mutation handle of the second child.
    #[inline]
    pub fn foo_b_mut(&mut self) -> ChildMut<'_> {
        ChildMut(&mut self.foo_b)
    }

    /// Metadata referring to both children.
    pub fn meta(&self) -> SimpleMultiMeta<'_> {
        SimpleMultiMeta {
            a: Cow::Borrowed(self.foo_a.meta()),
            b: Cow::Borrowed(self.foo_b.meta()),
        }
    }
}

/// Mutable handle to a child of a composite trajectory.
///
/// Forwards the mutations of [`FooTrajectory`] and dereferences to it for reads.
#[derive(Debug)]
pub struct ChildMut<'a>(&'a mut FooTrajectory);

impl ChildMut<'_> {
    /// Appends a vector to the child, see [`FooTrajectory::add_vector`].
    pub fn add_vector(&mut self, v: &Vector3<f64>) -> Result<usize, TrajectoryError> {
        self.0.add_vector(v)
    }

    /// Sets the scale coefficient of the child.
    pub fn set_foo(&mut self, x: f64) {
        self.0.set_foo(x);
    }
}

impl Deref for ChildMut<'_> {
    type Target = FooTrajectory;

    fn deref(&self) -> &FooTrajectory {
        self.0
    }
}

impl Default for SimpleMultiTrajectory {
    fn default() -> Self {
        Self::new()
    }
}

impl Trajectory for SimpleMultiTrajectory {
    const CLASS_ID: &'static str = "SimpleMulti";

    type View<'a> = SimpleMultiView<'a, f64>;

    fn holder(&self) -> &SharedHolder<f64> {
        &self.holder
    }

    fn as_view(&self) -> SimpleMultiView<'_, f64> {
        SimpleMultiView::bind(&*self.holder, self.meta())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use trajkit_storage::VectorHolder;

    fn leaf(foo: f64, vectors: &[Vector3<f64>]) -> Result<FooTrajectory, TrajectoryError> {
        let mut traj = FooTrajectory::new();
        traj.set_foo(foo);
        for v in vectors {
            traj.add_vector(v)?;
        }
        Ok(traj)
    }

    #[test]
    fn test_simple_multi_meta_default_owns_children() {
        let meta = SimpleMultiMeta::default();
        assert_eq!(meta.a(), &FooMeta::default());
        assert_eq!(meta.b(), &FooMeta::default());
        assert!(!std::ptr::eq(meta.a(), meta.b()));
    }

    #[test]
    fn test_simple_multi_meta_rejects_aliasing() {
        let a = FooMeta::default();
        let b = FooMeta::default();
        assert!(SimpleMultiMeta::new(&a, &b).is_ok());
        assert_eq!(
            SimpleMultiMeta::new(&a, &a).unwrap_err(),
            TrajectoryError::AliasedMetadata
        );
    }

    #[test]
    fn test_simple_multi_evaluate() -> Result<(), TrajectoryError> {
        let xy = [Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0)];
        let traj = SimpleMultiTrajectory::from_children(leaf(2.0, &xy)?, leaf(2.0, &xy)?);

        assert_eq!(traj.holder().size(), 4);
        assert_relative_eq!(traj.position(0.0)?, Vector3::new(4.0, 4.0, 0.0));
        Ok(())
    }

    #[test]
    fn test_simple_multi_empty() -> Result<(), TrajectoryError> {
        let traj = SimpleMultiTrajectory::new();
        assert_eq!(traj.holder().size(), 0);
        assert_eq!(traj.position(-3.0)?, Vector3::zeros());
        assert!(traj.parameter_blocks()?.is_empty());
        Ok(())
    }

    #[test]
    fn test_simple_multi_one_empty_child() -> Result<(), TrajectoryError> {
        let mut traj = SimpleMultiTrajectory::new();
        traj.foo_b_mut().set_foo(3.0);
        traj.foo_b_mut().add_vector(&Vector3::new(1.0, 2.0, 3.0))?;
        assert_relative_eq!(traj.position(0.0)?, Vector3::new(3.0, 6.0, 9.0));

        traj.foo_a_mut().add_vector(&Vector3::new(0.0, 0.0, 1.0))?;
        assert_relative_eq!(traj.position(0.0)?, Vector3::new(3.0, 6.0, 10.0));
        Ok(())
    }

    #[test]
    fn test_simple_multi_sees_child_updates() -> Result<(), TrajectoryError> {
        let mut traj = SimpleMultiTrajectory::new();
        traj.foo_a_mut().add_vector(&Vector3::new(1.0, 1.0, 1.0))?;
        traj.foo_b_mut().add_vector(&Vector3::new(2.0, 0.0, 0.0))?;
        assert_relative_eq!(traj.position(0.0)?, Vector3::new(3.0, 1.0, 1.0));

        traj.foo_a_mut().set_foo(-1.0);
        assert_eq!(traj.meta().a().foo, -1.0);
        assert_relative_eq!(traj.position(0.0)?, Vector3::new(1.0, -1.0, -1.0));
        Ok(())
    }

    #[test]
    fn test_simple_multi_derivatives() -> Result<(), TrajectoryError> {
        let traj = SimpleMultiTrajectory::new();
        let eval = traj.evaluate(0.0, EvalFlags::VELOCITY)?;
        assert_eq!(eval.velocity, Some(Vector3::zeros()));
        assert_eq!(eval.acceleration, None);
        Ok(())
    }

    #[test]
    fn test_simple_multi_parameter_blocks_in_child_order() -> Result<(), TrajectoryError> {
        let mut traj = SimpleMultiTrajectory::new();
        traj.foo_b_mut().add_vector(&Vector3::new(0.0, 0.0, 1.0))?;
        traj.foo_a_mut().add_vector(&Vector3::new(1.0, 0.0, 0.0))?;
        traj.foo_a_mut().add_vector(&Vector3::new(0.0, 1.0, 0.0))?;

        let blocks = traj.parameter_blocks()?;
        assert_eq!(blocks.len(), 3);
        assert!(blocks[0].ptr_eq(&traj.foo_a().holder().parameter(0)?));
        assert!(blocks[1].ptr_eq(&traj.foo_a().holder().parameter(1)?));
        assert!(blocks[2].ptr_eq(&traj.foo_b().holder().parameter(0)?));
        Ok(())
    }

    #[test]
    fn test_simple_multi_storage_follows_children() -> Result<(), TrajectoryError> {
        let mut traj = SimpleMultiTrajectory::new();
        traj.foo_b_mut().add_vector(&Vector3::new(0.0, 1.0, 0.0))?;
        traj.foo_b_mut().add_vector(&Vector3::new(0.0, 1.0, 0.0))?;

        let mut child = traj.foo_a_mut();
        child.add_vector(&Vector3::new(0.0, 0.0, 7.0))?;
        child.add_vector(&Vector3::new(0.0, 0.0, 7.0))?;
        assert_eq!(child.meta().n, 2);

        let children_size = traj.foo_a().holder().size() + traj.foo_b().holder().size();
        assert_eq!(traj.holder().size(), children_size);
        assert_eq!(traj.holder().size(), 4);

        let expected = traj.foo_a().position(0.0)? + traj.foo_b().position(0.0)?;
        assert_relative_eq!(traj.position(0.0)?, expected);
        assert_relative_eq!(traj.position(0.0)?, Vector3::new(0.0, 2.0, 14.0));
        assert_eq!(traj.parameter_blocks()?.len(), 4);
        Ok(())
    }

    #[test]
    fn test_simple_multi_view_over_owned_meta() -> Result<(), TrajectoryError> {
        let holder = MultiHolder::<f64, 2>::new([VectorHolder::shared(), VectorHolder::shared()]);
        let view = SimpleMultiView::<f64>::bind(&holder, SimpleMultiMeta::default());
        assert_eq!(view.position(2.0)?, Vector3::zeros());
        assert!(view.parameter_blocks()?.is_empty());
        Ok(())
    }

    #[test]
    fn test_simple_multi_view_over_borrowed_meta() -> Result<(), TrajectoryError> {
        let holder_a = VectorHolder::<f32>::shared();
        let holder_b = VectorHolder::<f32>::shared();
        holder_a.add_parameter(3)?;
        holder_a.parameter(0)?.write(&[1.0, 2.0, 3.0])?;
        holder_b.add_parameter(3)?;
        holder_b.parameter(0)?.write(&[0.5, 0.0, -1.0])?;
        let holder = MultiHolder::new([holder_a, holder_b]);

        let a = FooMeta { n: 1, foo: 2.0 };
        let b = FooMeta { n: 1, foo: -4.0 };
        let view = SimpleMultiView::<f32>::bind(&holder, SimpleMultiMeta::new(&a, &b)?);
        assert_relative_eq!(view.position(-5.0)?, Vector3::new(0.0f32, 4.0, 10.0));
        assert_eq!(view.parameter_blocks()?.len(), 2);
        Ok(())
    }
}
