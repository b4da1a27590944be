use std::{fmt, rc::Rc};

use crate::{BlockScalar, DataHolder, HolderError, ParameterBlock, SharedHolder};

/// Composite holder concatenating exactly `N` child holders into one index space.
///
/// Index `i` belongs to the child whose cumulative range contains it. The children
/// are fixed at construction, and blocks are only ever added through a child.
pub struct MultiHolder<T, const N: usize> {
    holders: [SharedHolder<T>; N],
}

impl<T: BlockScalar, const N: usize> MultiHolder<T, N> {
    /// Creates a composite over the given children, in index order.
    pub fn new(holders: [SharedHolder<T>; N]) -> Self {
        log::debug!("MultiHolder: assembled {N} child holders");
        Self { holders }
    }

    /// Creates a composite from a runtime list of children.
    ///
    /// # Errors
    ///
    /// Returns [`HolderError::ArityMismatch`] if the list does not hold exactly `N`
    /// children. Nothing is constructed in that case.
    pub fn from_vec(holders: Vec<SharedHolder<T>>) -> Result<Self, HolderError> {
        let got = holders.len();
        let holders: [SharedHolder<T>; N] = holders
            .try_into()
            .map_err(|_| HolderError::ArityMismatch { expected: N, got })?;
        Ok(Self::new(holders))
    }

    /// The child holders in index order.
    #[inline]
    pub fn children(&self) -> &[SharedHolder<T>; N] {
        &self.holders
    }

    /// Cumulative offset of each child in the composite index space.
    pub fn offsets(&self) -> [usize; N] {
        let mut acc = 0;
        std::array::from_fn(|i| {
            let offset = acc;
            acc += self.holders[i].size();
            offset
        })
    }
}

impl<T: BlockScalar, const N: usize> fmt::Debug for MultiHolder<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiHolder")
            .field("holders", &self.holders)
            .finish()
    }
}

impl<T: BlockScalar, const N: usize> DataHolder<T> for MultiHolder<T, N> {
    fn parameter(&self, index: usize) -> Result<ParameterBlock<T>, HolderError> {
        let mut offset = 0;
        for holder in &self.holders {
            let n = holder.size();
            if index < offset + n {
                return holder.parameter(index - offset);
            }
            offset += n;
        }

        Err(HolderError::IndexOutOfRange {
            index,
            size: offset,
        })
    }

    fn slice(&self, start: usize, size: usize) -> Result<SharedHolder<T>, HolderError> {
        // several empty children may share an offset, prefer the one of matching size
        let mut candidate = None;
        let mut offset = 0;
        for holder in &self.holders {
            if offset > start {
                break;
            }
            let n = holder.size();
            if offset == start {
                if n == size {
                    return Ok(Rc::clone(holder));
                }
                candidate.get_or_insert_with(|| Rc::clone(holder));
            }
            offset += n;
        }

        candidate.ok_or(HolderError::MisalignedSlice { start, size })
    }

    fn add_parameter(&self, _width: usize) -> Result<usize, HolderError> {
        Err(HolderError::UnsupportedOperation {
            operation: "add_parameter",
            holder: "MultiHolder",
        })
    }

    fn size(&self) -> usize {
        self.holders.iter().map(|h| h.size()).sum()
    }
}
