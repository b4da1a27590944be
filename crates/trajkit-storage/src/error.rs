use thiserror::Error;

/// Errors raised by parameter holders and parameter blocks.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HolderError {
    /// The requested parameter index is not covered by the holder.
    #[error("Parameter index {index} out of range (size {size})")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The size of the holder at the time of the request.
        size: usize,
    },

    /// A slice was requested that does not start on a child boundary.
    #[error("Slice at {start} with size {size} does not align to a child boundary")]
    MisalignedSlice {
        /// The requested start index.
        start: usize,
        /// The requested slice size.
        size: usize,
    },

    /// A composite holder was initialized with the wrong number of children.
    #[error("Wrong number of child holders: expected {expected}, got {got}")]
    ArityMismatch {
        /// The fixed arity of the composite.
        expected: usize,
        /// The number of children supplied.
        got: usize,
    },

    /// The operation is not available on this kind of holder.
    #[error("{operation} is not supported by {holder}")]
    UnsupportedOperation {
        /// Name of the rejected operation.
        operation: &'static str,
        /// Name of the holder kind that rejected it.
        holder: &'static str,
    },

    /// Parameter blocks must hold at least one scalar.
    #[error("Invalid parameter block width {0}")]
    InvalidBlockWidth(usize),

    /// The number of scalars does not match the width of the block.
    #[error("Parameter block width mismatch: expected {expected}, got {got}")]
    BlockWidthMismatch {
        /// The expected width.
        expected: usize,
        /// The width found.
        got: usize,
    },
}
