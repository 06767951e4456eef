//! Errors shared by the containers in this crate.

use thiserror::Error;

/// Contract violations reported by the fallible container operations.
///
/// Every check happens before a container is touched so an `Err` always
/// leaves the container exactly as it was.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The operation needs at least one element but the container has none.
    #[error("container is empty")]
    EmptyContainer,

    /// The index falls outside the range the operation accepts.
    #[error("index out of range: {index} (len {len})")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Length of the container when the call was made.
        len: usize,
    },
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
