// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Pending-raise bookkeeping ("source erasing").
//!
//! When extending from dimension `n` to `n + 1`, the new part `n + 1` can be
//! introduced by trading a pair of parts `(p + 1) + (n - p)` for it, for
//! pairs `p = 0 .. n / 2`. An [`Attribute`] records, per pair and per
//! [`Direction`], whether that raise still has to be tried on a vector. A
//! cleared bit means some other parent already produced the raise's target.

use crate::vector::Vector;

/// Sign of a raise: on the vector itself or on its negation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Raise the stored vector.
    Positive,
    /// Raise the negated vector.
    Negative,
}

/// Bitmask of pending raises, one bit per `(pair, direction)`.
///
/// Not part of a vector's identity: sets key on coordinates and keep the
/// attribute alongside.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Attribute(u64);

impl Attribute {
    /// Number of pairs representable per direction.
    pub const PAIRS: usize = 32;

    /// Computes the pending raises of `v` (dimension `n + 1`) for the step
    /// `n -> n + 1`.
    ///
    /// A pair is pending in the positive direction if either of its positions
    /// is positive in `v`, and (when `with_negative`) in the negative
    /// direction if either is negative.
    #[must_use]
    pub fn for_vector(v: &Vector, n: usize, with_negative: bool) -> Self {
        let mut attr = Self::default();
        for p in 0..n / 2 {
            let (a, b) = (v[p], v[n - 1 - p]);
            if a > 0 || b > 0 {
                attr.set(Direction::Positive, p);
            }
            if with_negative && (a < 0 || b < 0) {
                attr.set(Direction::Negative, p);
            }
        }
        attr
    }

    const fn bit(direction: Direction, pair: usize) -> u64 {
        match direction {
            Direction::Positive => 1 << pair,
            Direction::Negative => 1 << (pair + Self::PAIRS),
        }
    }

    /// Returns `true` if no raise is pending.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the raise on `pair` in `direction` is pending.
    #[must_use]
    pub fn has(self, direction: Direction, pair: usize) -> bool {
        self.0 & Self::bit(direction, pair) != 0
    }

    /// Marks the raise on `pair` in `direction` as pending.
    pub fn set(&mut self, direction: Direction, pair: usize) {
        self.0 |= Self::bit(direction, pair);
    }

    /// Erases the raise on `pair` in `direction`.
    pub fn clear(&mut self, direction: Direction, pair: usize) {
        self.0 &= !Self::bit(direction, pair);
    }
}
