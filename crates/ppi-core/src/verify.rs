// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Independent post-check of an enumerated identity set.
//!
//! Does not trust the bookkeeping of [`extend`](crate::extend()): every vector
//! is checked for balance and normalization, and for irreducibility against
//! an index built from the set itself.

use core::ops::ControlFlow;

use ppi_index::{DigitalTree, RangeSearch};
use thiserror::Error;

use crate::reduce::divisor_range;
use crate::vector::Vector;
use crate::vector_set::VectorSet;

/// First property violation found by [`verify`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// A vector of the wrong length.
    #[error("{vector:?} has dimension {}, expected {expected}", vector.dimension())]
    Dimension {
        /// Offending vector.
        vector: Vector,
        /// Dimension of the set.
        expected: usize,
    },
    /// Left and right sides partition different integers.
    #[error("{vector:?} is not a partition identity")]
    Unbalanced {
        /// Offending vector.
        vector: Vector,
    },
    /// Zero vector, or last non-zero entry negative.
    #[error("{vector:?} is not normalized")]
    NotNormalized {
        /// Offending vector.
        vector: Vector,
    },
    /// Another member of the set lies conformally below the vector.
    #[error("{vector:?} is reducible by {divisor:?}")]
    Reducible {
        /// Offending vector.
        vector: Vector,
        /// Member of the set that divides it.
        divisor: Vector,
    },
}

/// Checks that `set` consists of normalized, pairwise irreducible partition
/// identities of dimension `n`.
///
/// Vectors are visited in lexicographic order, so the reported violation is
/// deterministic.
pub fn verify(set: &VectorSet, n: usize) -> Result<(), Violation> {
    let vectors = set.sorted();
    for v in &vectors {
        if v.dimension() != n {
            return Err(Violation::Dimension {
                vector: v.clone(),
                expected: n,
            });
        }
        if !v.is_normalized() {
            return Err(Violation::NotNormalized { vector: v.clone() });
        }
        if !v.is_balanced() {
            return Err(Violation::Unbalanced { vector: v.clone() });
        }
    }
    if n == 0 {
        return Ok(());
    }

    let mut tree = DigitalTree::new(n);
    for v in &vectors {
        tree.insert(v);
    }
    let index = tree.finish();
    for z in &vectors {
        let Some(range) = divisor_range(z) else {
            continue;
        };
        let mut divisor = None;
        let _ = index.range_search(&range, |y| {
            if y == z {
                ControlFlow::Continue(())
            } else {
                divisor = Some(y);
                ControlFlow::Break(())
            }
        });
        if let Some(divisor) = divisor {
            return Err(Violation::Reducible {
                vector: z.clone(),
                divisor: divisor.clone(),
            });
        }
    }
    Ok(())
}
