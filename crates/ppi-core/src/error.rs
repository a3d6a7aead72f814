// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Precondition failures at the public boundary of the enumeration.
use thiserror::Error;

/// Error returned by [`extend`](crate::extend()) and friends when the input
/// cannot be a complete identity set for the requested dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PpiError {
    /// Extension starts from dimension 2 (the seed `2 = 1 + 1`).
    #[error("dimension {n} is too small: extension starts at n = 2")]
    DimensionTooSmall {
        /// Requested dimension.
        n: usize,
    },
    /// The pending-raise bitmask cannot hold the pairs of this dimension.
    #[error("dimension {n} exceeds the supported maximum of {max}")]
    DimensionTooLarge {
        /// Requested dimension.
        n: usize,
        /// Largest dimension that can be extended.
        max: usize,
    },
    /// An input vector does not have the stated dimension.
    #[error("vector of dimension {found} in a set of dimension {expected}")]
    DimensionMismatch {
        /// Dimension the set was declared with.
        expected: usize,
        /// Dimension of the offending vector.
        found: usize,
    },
}
