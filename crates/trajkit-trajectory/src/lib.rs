#![deny(missing_docs)]
//! Trajectories over flat parameter storage.
//!
//! This crate provides:
//! - Views binding a holder and its metadata, generic over the evaluation scalar
//! - A leaf trajectory ([`FooTrajectory`]) and a composite of two leaves
//!   ([`SimpleMultiTrajectory`])
//! - The registration surface used by external estimators

/// error module containing the trajectory errors.
pub mod error;

/// estimator module containing the parameter registration surface.
pub mod estimator;

/// evaluation module containing the evaluation flags and results.
pub mod evaluation;

/// foo module containing the leaf trajectory.
pub mod foo;

/// scalar module containing the evaluation scalar trait.
pub mod scalar;

/// simple_multi module containing the composite trajectory.
pub mod simple_multi;

/// trajectory module containing the trajectory trait.
pub mod trajectory;

/// view module containing the view trait.
pub mod view;

pub use crate::error::TrajectoryError;
pub use crate::estimator::{ParameterRegistry, ParameterSink};
pub use crate::evaluation::{EvalFlags, TrajectoryEvaluation};
pub use crate::foo::{FooMeta, FooTrajectory, FooView};
pub use crate::scalar::Scalar;
pub use crate::simple_multi::{
    ChildMut, SimpleMultiMeta, SimpleMultiTrajectory, SimpleMultiView,
};
pub use crate::trajectory::Trajectory;
pub use crate::view::TrajectoryView;
