// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Fixed-dimension integer vectors encoding candidate partition identities.
//!
//! Position `i` (0-based) stands for the part `i + 1`. Positive entries are
//! multiplicities on the left-hand side of the identity, negative entries on
//! the right-hand side. Coordinates are machine integers ([`Coord`]); the
//! entries reachable for dimensions the enumeration can finish in practice
//! are far below `i32` range, and no overflow check is made.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Index, IndexMut, Neg};

use ppi_index::{Coord, Point};

/// An integer vector compared, ordered and hashed purely by its coordinates.
///
/// Ordering is lexicographic over the coordinate tuple.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector(Box<[Coord]>);

impl Vector {
    /// The zero vector of the given dimension.
    #[must_use]
    pub fn zero(dimension: usize) -> Self {
        Self(vec![0; dimension].into_boxed_slice())
    }

    /// Number of coordinates.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.0.len()
    }

    /// Coordinates as a slice.
    #[must_use]
    pub fn coords(&self) -> &[Coord] {
        &self.0
    }

    /// The same vector with a zero coordinate appended.
    #[must_use]
    pub fn lifted(&self) -> Self {
        let mut coords = Vec::with_capacity(self.0.len() + 1);
        coords.extend_from_slice(&self.0);
        coords.push(0);
        Self(coords.into_boxed_slice())
    }

    /// Index of the last non-zero coordinate, or `None` for the zero vector.
    #[must_use]
    pub fn last_nonzero(&self) -> Option<usize> {
        self.0.iter().rposition(|&c| c != 0)
    }

    /// Returns `true` if the last non-zero coordinate is positive, the sign
    /// under which every identity is stored exactly once.
    #[must_use]
    pub fn is_normalized(&self) -> bool {
        self.last_nonzero().is_some_and(|p| self.0[p] > 0)
    }

    /// Returns `true` if the vector is a partition identity: the parts on the
    /// left add up to the same integer as the parts on the right.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.weighted_sum() == 0
    }

    fn weighted_sum(&self) -> i64 {
        self.0
            .iter()
            .enumerate()
            .map(|(i, &c)| (i as i64 + 1) * i64::from(c))
            .sum()
    }

    /// Largest `f >= 0` such that `f * y` stays conformally below `self`
    /// (same sign wherever `y` is non-zero and no larger in magnitude).
    ///
    /// Returns `0` if `y` does not fit the sign pattern of `self` at all and
    /// [`Coord::MAX`] for a zero `y`.
    #[must_use]
    pub fn hilbert_quotient(&self, y: &Self) -> Coord {
        debug_assert_eq!(self.dimension(), y.dimension());
        let mut factor = Coord::MAX;
        for (&z, &y) in self.0.iter().zip(y.0.iter()) {
            if y > 0 {
                if y > z {
                    return 0;
                }
                factor = factor.min(z / y);
            } else if y < 0 {
                if y < z {
                    return 0;
                }
                factor = factor.min(z / y);
            }
        }
        factor
    }
}

impl From<Vec<Coord>> for Vector {
    fn from(coords: Vec<Coord>) -> Self {
        Self(coords.into_boxed_slice())
    }
}

impl From<&[Coord]> for Vector {
    fn from(coords: &[Coord]) -> Self {
        Self(coords.into())
    }
}

impl<const N: usize> From<[Coord; N]> for Vector {
    fn from(coords: [Coord; N]) -> Self {
        Self(Box::new(coords))
    }
}

impl Index<usize> for Vector {
    type Output = Coord;

    fn index(&self, idx: usize) -> &Coord {
        &self.0[idx]
    }
}

impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, idx: usize) -> &mut Coord {
        &mut self.0[idx]
    }
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector(self.0.iter().map(|c| -c).collect())
    }
}

impl Neg for Vector {
    type Output = Self;

    fn neg(mut self) -> Self {
        for c in self.0.iter_mut() {
            *c = -*c;
        }
        self
    }
}

// Polynomial hash with base 5. Cheap and deterministic; the set only needs
// it to agree with `Eq`.
impl Hash for Vector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let h = self
            .0
            .iter()
            .fold(0i64, |h, &c| h.wrapping_mul(5).wrapping_add(i64::from(c)));
        state.write_i64(h);
    }
}

impl Point for Vector {
    fn dimension(&self) -> usize {
        self.0.len()
    }

    fn coord(&self, level: usize) -> Coord {
        self.0[level]
    }
}

impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.iter() {
            write!(f, "{c:>4}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]

    use super::*;

    #[test]
    fn equality_and_order_follow_coordinates() {
        let a = Vector::from([-2, 1, 0]);
        let b = Vector::from(vec![-2, 1, 0]);
        let c = Vector::from([-1, -1, 1]);
        assert_eq!(a, b);
        assert!(a < c);
        assert_eq!(Vector::from([-2, 1]).lifted(), a);
    }

    #[test]
    fn balance_is_weighted_by_part() {
        // 3 = 1 + 2
        assert!(Vector::from([-1, -1, 1]).is_balanced());
        // 1 + 1 != 2 + 2
        assert!(!Vector::from([2, -2]).is_balanced());
    }

    #[test]
    fn normalization_uses_last_nonzero() {
        assert!(Vector::from([-2, 1, 0]).is_normalized());
        assert!(!Vector::from([2, -1, 0]).is_normalized());
        assert!(!Vector::zero(3).is_normalized());
        assert_eq!(Vector::from([0, 3, 0]).last_nonzero(), Some(1));
    }

    #[test]
    fn hilbert_quotient_respects_sign_pattern() {
        let z = Vector::from([-4, 0, 2, 0]);
        assert_eq!(z.hilbert_quotient(&Vector::from([-2, 0, 1, 0])), 2);
        assert_eq!(z.hilbert_quotient(&Vector::from([-1, 0, 1, 0])), 2);
        assert_eq!(z.hilbert_quotient(&Vector::from([-1, 1, 0, 0])), 0);
        assert_eq!(z.hilbert_quotient(&Vector::from([2, 0, -1, 0])), 0);
        assert_eq!(z.hilbert_quotient(&Vector::zero(4)), Coord::MAX);
    }

    #[test]
    fn negation_and_display() {
        let v = Vector::from([-2, 1, 0]);
        assert_eq!(-&v, Vector::from([2, -1, 0]));
        assert_eq!(-v.clone(), Vector::from([2, -1, 0]));
        assert_eq!(v.to_string(), "  -2   1   0");
    }
}
