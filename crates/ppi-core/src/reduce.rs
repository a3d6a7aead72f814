// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Reducibility tests as orthogonal range-emptiness queries.
//!
//! A vector `z` is reducible if some other identity `y` fits conformally
//! below it: `y` is zero wherever `z` is, has the sign of `z` elsewhere, and
//! is no larger in magnitude. "Conformally below `z`" is an axis-aligned box,
//! so reducibility is one range query against the stored identities.

use core::ops::ControlFlow;

use ppi_index::{Coord, OrthogonalRange, RangeSearch};

use crate::vector::Vector;

/// The box of stored (normalized) identities that could divide `z`.
///
/// With `p` the last non-zero position of `z`:
/// - positions after `p` are pinned to `0`;
/// - positions before `p` span `[0, z[i]]` or `[z[i], 0]` by sign;
/// - position `p` spans `[1, z[p]]`.
///
/// Any conformal decomposition of `z` has a summand that is positive at
/// `p`, and that summand is stored in normalized form, so the positive side
/// alone suffices. Returns `None` for the zero vector.
#[must_use]
pub fn divisor_range(z: &Vector) -> Option<OrthogonalRange> {
    let p = z.last_nonzero()?;
    let mut range = OrthogonalRange::zero(z.dimension());
    for i in 0..p {
        let (lo, hi) = sign_bounds(z[i]);
        range.set(i, lo, hi);
    }
    range.set(p, 1, z[p]);
    Some(range)
}

/// Decides whether `z` is reducible with respect to the identities stored in
/// `index`. Stored copies of `z` itself are not counted as divisors.
///
/// `z` is expected to be normalized (last non-zero entry positive); the
/// zero vector is never reducible.
pub fn is_reducible<'a, S>(z: &Vector, index: &S) -> bool
where
    S: RangeSearch<'a, Vector>,
{
    let Some(range) = divisor_range(z) else {
        return false;
    };
    index
        .range_search(&range, |y| {
            if y == z {
                ControlFlow::Continue(())
            } else {
                ControlFlow::Break(())
            }
        })
        .is_break()
}

/// Search box for a freshly raised candidate `w` in dimension `n + 1`, where
/// `j < k` are the positions that were decremented.
///
/// The stored identities all have a zero last coordinate (they were lifted
/// from dimension `n`), so that coordinate is pinned to `0`. The other
/// positions are bounded conformally by `w`, and the position whose
/// magnitude grew (`k` if it went negative, otherwise `j`) is pinned to its
/// new value.
#[must_use]
pub fn raise_candidate_range(w: &Vector, j: usize, k: usize) -> OrthogonalRange {
    let top = w.dimension() - 1;
    let mut range = OrthogonalRange::zero(w.dimension());
    for i in 0..top {
        let (lo, hi) = sign_bounds(w[i]);
        range.set(i, lo, hi);
    }
    if w[k] < 0 {
        range.pin(k, w[k]);
    } else {
        range.pin(j, w[j]);
    }
    range
}

fn sign_bounds(c: Coord) -> (Coord, Coord) {
    if c >= 0 {
        (0, c)
    } else {
        (c, 0)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]

    use super::*;
    use ppi_index::DigitalTree;

    fn index_of(vs: &[Vector]) -> ppi_index::FrozenTree<'_, Vector> {
        let mut tree = DigitalTree::new(vs[0].dimension());
        for v in vs {
            tree.insert(v);
        }
        tree.finish()
    }

    #[test]
    fn divisor_box_pins_tail_and_excludes_zero_at_last_position() {
        let z = Vector::from([-2, 3, 2, 0]);
        let Some(range) = divisor_range(&z) else {
            panic!("non-zero vector has a divisor box");
        };
        assert_eq!(
            range,
            OrthogonalRange::new(vec![-2, 0, 1, 0], vec![0, 3, 2, 0])
        );
        assert!(divisor_range(&Vector::zero(3)).is_none());
    }

    #[test]
    fn reducible_when_a_smaller_identity_fits() {
        // 2 + 2 + 2 + 2 = 4 + 4 is 2 * (2 + 2 = 4).
        let known = vec![Vector::from([0, -2, 0, 1])];
        let index = index_of(&known);
        assert!(is_reducible(&Vector::from([0, -4, 0, 2]), &index));
        // 1 + 3 = 4 does not contain 2 + 2 = 4.
        assert!(!is_reducible(&Vector::from([-1, 0, -1, 1]), &index));
    }

    #[test]
    fn the_vector_itself_is_not_its_own_divisor() {
        let known = vec![Vector::from([-1, -1, 1]), Vector::from([-2, 1, 0])];
        let index = index_of(&known);
        assert!(!is_reducible(&known[0], &index));
        assert!(!is_reducible(&known[1], &index));
    }

    #[test]
    fn raise_box_pins_the_grown_position() {
        // w = (-3, 0, 1) raised from (-2, 1, 0) at j = 0, k = 1.
        let w = Vector::from([-3, 0, 1]);
        let range = raise_candidate_range(&w, 0, 1);
        assert_eq!(range, OrthogonalRange::new(vec![-3, 0, 0], vec![-3, 0, 0]));

        // w = (1, -2, 1): k went negative.
        let w = Vector::from([1, -2, 1]);
        let range = raise_candidate_range(&w, 0, 1);
        assert_eq!(range, OrthogonalRange::new(vec![0, -2, 0], vec![1, -2, 0]));
    }
}
