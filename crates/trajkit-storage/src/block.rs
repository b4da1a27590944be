use std::{cell::Cell, fmt, rc::Rc};

use num_traits::Zero;

use crate::HolderError;

/// A trait for the scalar types that can be stored in a parameter block.
pub trait BlockScalar: Copy + Zero + fmt::Debug + 'static {}

impl<T: Copy + Zero + fmt::Debug + 'static> BlockScalar for T {}

/// A fixed-width block of scalars that an optimizer updates in place.
///
/// Cloning a block only increments a reference count. The scalars are never moved,
/// so the address returned by [`ParameterBlock::as_ptr`] stays valid for as long as
/// any handle to the block is alive.
///
/// The scalars live in [`Cell`]s: the estimator may write new values while views
/// hold shared handles, and views always observe the latest values.
#[derive(Clone)]
pub struct ParameterBlock<T> {
    data: Rc<[Cell<T>]>,
}

impl<T: BlockScalar> ParameterBlock<T> {
    /// Creates a new block of `width` scalars initialised to zero.
    ///
    /// # Errors
    ///
    /// Returns [`HolderError::InvalidBlockWidth`] if `width` is zero.
    pub fn zeros(width: usize) -> Result<Self, HolderError> {
        if width == 0 {
            return Err(HolderError::InvalidBlockWidth(width));
        }
        Ok(Self {
            data: (0..width).map(|_| Cell::new(T::zero())).collect(),
        })
    }

    /// Creates a new block holding a copy of `values`.
    pub fn from_slice(values: &[T]) -> Result<Self, HolderError> {
        let block = Self::zeros(values.len())?;
        block.write(values)?;
        Ok(block)
    }

    /// Number of scalars in the block.
    #[inline]
    pub fn width(&self) -> usize {
        self.data.len()
    }

    /// Returns the scalar at `i`, or `None` past the end of the block.
    #[inline]
    pub fn get(&self, i: usize) -> Option<T> {
        self.data.get(i).map(Cell::get)
    }

    /// Overwrites the scalar at `i`.
    pub fn set(&self, i: usize, value: T) -> Result<(), HolderError> {
        let cell = self.data.get(i).ok_or(HolderError::IndexOutOfRange {
            index: i,
            size: self.width(),
        })?;
        cell.set(value);
        Ok(())
    }

    /// Overwrites the whole block. `values` must have exactly [`Self::width`] scalars.
    pub fn write(&self, values: &[T]) -> Result<(), HolderError> {
        if values.len() != self.width() {
            return Err(HolderError::BlockWidthMismatch {
                expected: self.width(),
                got: values.len(),
            });
        }
        for (cell, value) in self.data.iter().zip(values) {
            cell.set(*value);
        }
        Ok(())
    }

    /// Reads the block as a fixed-size array of `W` scalars.
    pub fn read<const W: usize>(&self) -> Result<[T; W], HolderError> {
        if self.width() != W {
            return Err(HolderError::BlockWidthMismatch {
                expected: W,
                got: self.width(),
            });
        }
        Ok(std::array::from_fn(|i| self.data[i].get()))
    }

    /// Copies the current values into a vector.
    pub fn to_vec(&self) -> Vec<T> {
        self.data.iter().map(Cell::get).collect()
    }

    /// Returns the stable address of the first scalar of the block.
    ///
    /// The pointer is valid while any clone of this block is alive. Writes through it
    /// must not overlap with calls on the block itself.
    #[inline]
    pub fn as_ptr(&self) -> *mut T {
        // Cell<T> has the same in-memory representation as T.
        self.data.as_ptr() as *mut T
    }

    /// Returns true if both handles refer to the same block.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

impl<T: BlockScalar> fmt::Debug for ParameterBlock<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParameterBlock")
            .field("ptr", &self.as_ptr())
            .field("values", &self.to_vec())
            .finish()
    }
}
