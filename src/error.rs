//! Errors reported to callers of the tree operations.
//!
//! Only bad input is reported through [`Error`]. A broken internal invariant (for
//! example a rotation asked to lift a node that is not a child of the given parent)
//! is a bug in this crate and panics instead, since carrying on with a corrupted tree
//! would silently lose elements.
//!
//! Not finding a value is not an error: `contains` answers `false` and `remove`
//! answers `false`/`None`.

use thiserror::Error;

/// Errors returned by tree operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A 1-based position fell outside the range the operation accepts.
    ///
    /// Lookups and removals accept `1..=len`; insertions accept `1..=len + 1`.
    #[error("position {position} is out of range for a sequence of length {len}")]
    OutOfRange {
        /// The rejected position.
        position: usize,
        /// The number of elements at the time of the call.
        len: usize,
    },

    /// The operation needs an element but the tree is empty.
    #[error("the tree is empty")]
    EmptyTree,
}

/// Result type used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;
