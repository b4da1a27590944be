use nalgebra::RealField;
use num_traits::FromPrimitive;
use trajkit_storage::BlockScalar;

/// Scalar type views evaluate with.
///
/// Trajectories store `f64`, but views are generic so that the same evaluation code
/// runs over `f32` holders or any other real field an estimator provides.
pub trait Scalar: RealField + Copy + FromPrimitive + BlockScalar {}

impl<T: RealField + Copy + FromPrimitive + BlockScalar> Scalar for T {}
