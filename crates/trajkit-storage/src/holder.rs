use std::{cell::RefCell, fmt, ops::Range, rc::Rc};

use crate::{BlockScalar, HolderError, ParameterBlock};

/// Shared ownership handle to a holder.
///
/// Composite holders and slices share their children through this handle, so a slice
/// keeps its child alive even after the composite that produced it is dropped.
pub type SharedHolder<T> = Rc<dyn DataHolder<T>>;

/// A flat, indexable sequence of parameter blocks.
pub trait DataHolder<T: BlockScalar>: fmt::Debug {
    /// Returns the parameter block at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`HolderError::IndexOutOfRange`] if `index >= self.size()`.
    fn parameter(&self, index: usize) -> Result<ParameterBlock<T>, HolderError>;

    /// Returns the holder backing the range `start..start + size`.
    ///
    /// Only whole children of a composite can be sliced out.
    fn slice(&self, start: usize, size: usize) -> Result<SharedHolder<T>, HolderError>;

    /// Appends a zeroed block of `width` scalars and returns its index.
    fn add_parameter(&self, width: usize) -> Result<usize, HolderError>;

    /// Number of parameter blocks.
    fn size(&self) -> usize;

    /// Returns true if the holder has no parameter blocks.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Collects the blocks in `range`, failing on the first index out of range.
    fn blocks(&self, range: Range<usize>) -> Result<Vec<ParameterBlock<T>>, HolderError> {
        range.map(|i| self.parameter(i)).collect()
    }
}

/// Leaf holder owning an append-only list of parameter blocks.
pub struct VectorHolder<T> {
    blocks: RefCell<Vec<ParameterBlock<T>>>,
}

impl<T: BlockScalar> VectorHolder<T> {
    /// Creates an empty holder.
    pub fn new() -> Self {
        Self {
            blocks: RefCell::new(Vec::new()),
        }
    }

    /// Creates an empty holder behind a shared handle.
    pub fn shared() -> SharedHolder<T> {
        Rc::new(Self::new())
    }
}

impl<T: BlockScalar> Default for VectorHolder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: BlockScalar> fmt::Debug for VectorHolder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VectorHolder")
            .field("blocks", &self.blocks.borrow())
            .finish()
    }
}

impl<T: BlockScalar> DataHolder<T> for VectorHolder<T> {
    fn parameter(&self, index: usize) -> Result<ParameterBlock<T>, HolderError> {
        let blocks = self.blocks.borrow();
        blocks
            .get(index)
            .cloned()
            .ok_or(HolderError::IndexOutOfRange {
                index,
                size: blocks.len(),
            })
    }

    fn slice(&self, _start: usize, _size: usize) -> Result<SharedHolder<T>, HolderError> {
        Err(HolderError::UnsupportedOperation {
            operation: "slice",
            holder: "VectorHolder",
        })
    }

    fn add_parameter(&self, width: usize) -> Result<usize, HolderError> {
        let block = ParameterBlock::zeros(width)?;
        let mut blocks = self.blocks.borrow_mut();
        blocks.push(block);
        let index = blocks.len() - 1;
        log::debug!("VectorHolder: added block {index} of width {width}");
        Ok(index)
    }

    fn size(&self) -> usize {
        self.blocks.borrow().len()
    }
}
