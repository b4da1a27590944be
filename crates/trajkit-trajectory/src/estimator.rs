//! Registration surface towards an external estimator.
//!
//! An estimator receives the parameter blocks of a trajectory as shared handles. Each
//! handle exposes a stable address and a width, which is what a nonlinear least squares
//! solver needs to register the block and update it in place across iterations.

use std::collections::HashSet;

use trajkit_storage::{BlockScalar, ParameterBlock};

/// Consumer of parameter blocks, implemented by estimators.
pub trait ParameterSink<T: BlockScalar> {
    /// Registers one parameter block. Returns false if the block was already known.
    fn add_parameter_block(&mut self, block: &ParameterBlock<T>) -> bool;
}

/// A sink that records the registered blocks in order.
///
/// Blocks are kept alive by the registry, so their addresses remain valid for as long
/// as the registry exists. Registering the same block twice is a no-op.
#[derive(Debug)]
pub struct ParameterRegistry<T: BlockScalar> {
    blocks: Vec<ParameterBlock<T>>,
    addresses: HashSet<usize>,
}

impl<T: BlockScalar> ParameterRegistry<T> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            addresses: HashSet::new(),
        }
    }

    /// Number of distinct blocks registered.
    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns true if no block is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Returns true if `block` is registered.
    pub fn contains(&self, block: &ParameterBlock<T>) -> bool {
        self.addresses.contains(&(block.as_ptr() as usize))
    }

    /// The registered blocks in registration order.
    pub fn blocks(&self) -> &[ParameterBlock<T>] {
        &self.blocks
    }

    /// The `(address, width)` pairs in registration order.
    pub fn entries(&self) -> impl Iterator<Item = (*mut T, usize)> + '_ {
        self.blocks.iter().map(|b| (b.as_ptr(), b.width()))
    }

    /// Total number of scalars over all registered blocks.
    pub fn total_scalars(&self) -> usize {
        self.blocks.iter().map(ParameterBlock::width).sum()
    }
}

impl<T: BlockScalar> Default for ParameterRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: BlockScalar> ParameterSink<T> for ParameterRegistry<T> {
    fn add_parameter_block(&mut self, block: &ParameterBlock<T>) -> bool {
        if !self.addresses.insert(block.as_ptr() as usize) {
            return false;
        }
        self.blocks.push(block.clone());
        true
    }
}
