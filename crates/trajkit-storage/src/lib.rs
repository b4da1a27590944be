#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// parameter block module containing the shared scalar blocks.
pub mod block;

/// error module containing the holder errors.
pub mod error;

/// holder module containing the holder trait and the leaf holder.
pub mod holder;

/// multi module containing the composite holder.
pub mod multi;

pub use crate::block::{BlockScalar, ParameterBlock};
pub use crate::error::HolderError;
pub use crate::holder::{DataHolder, SharedHolder, VectorHolder};
pub use crate::multi::MultiHolder;
