// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use crate::point::{Coord, Point};

/// Axis-aligned query box with inclusive bounds on every coordinate.
///
/// A box whose `min` exceeds its `max` on any level is empty and matches no
/// point; building one is allowed and simply yields empty queries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrthogonalRange {
    min: Vec<Coord>,
    max: Vec<Coord>,
}

impl OrthogonalRange {
    /// Constructs a box from its minimum and maximum corners.
    ///
    /// # Panics
    /// Panics if `min` and `max` have different lengths.
    #[must_use]
    pub fn new(min: Vec<Coord>, max: Vec<Coord>) -> Self {
        assert_eq!(min.len(), max.len(), "range corners differ in dimension");
        Self { min, max }
    }

    /// A box of the given dimension pinned to zero on every coordinate.
    #[must_use]
    pub fn zero(dimension: usize) -> Self {
        Self {
            min: vec![0; dimension],
            max: vec![0; dimension],
        }
    }

    /// A box covering every representable point of the given dimension.
    #[must_use]
    pub fn unbounded(dimension: usize) -> Self {
        Self {
            min: vec![Coord::MIN; dimension],
            max: vec![Coord::MAX; dimension],
        }
    }

    /// Number of coordinates.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.min.len()
    }

    /// Lower bound at `level`.
    #[must_use]
    pub fn min(&self, level: usize) -> Coord {
        self.min[level]
    }

    /// Upper bound at `level`.
    #[must_use]
    pub fn max(&self, level: usize) -> Coord {
        self.max[level]
    }

    /// Sets the inclusive bounds at `level`.
    pub fn set(&mut self, level: usize, min: Coord, max: Coord) {
        self.min[level] = min;
        self.max[level] = max;
    }

    /// Pins `level` to exactly `value`.
    pub fn pin(&mut self, level: usize, value: Coord) {
        self.set(level, value, value);
    }

    /// Returns `true` if some level has `min > max`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.iter().zip(&self.max).any(|(lo, hi)| lo > hi)
    }

    /// Mirror image through the origin: the box containing exactly the
    /// negations of the points this box contains.
    #[must_use]
    pub fn negated(&self) -> Self {
        Self {
            min: self.max.iter().map(|v| v.saturating_neg()).collect(),
            max: self.min.iter().map(|v| v.saturating_neg()).collect(),
        }
    }

    /// Returns `true` if every coordinate of `point` lies within bounds.
    #[must_use]
    pub fn contains<P: Point + ?Sized>(&self, point: &P) -> bool {
        point.dimension() == self.dimension() && self.contains_below(point, self.dimension())
    }

    /// Checks only levels `0..level`; the levels above were already matched
    /// on the way down the tree.
    pub(crate) fn contains_below<P: Point + ?Sized>(&self, point: &P, level: usize) -> bool {
        (0..level).all(|l| {
            let v = point.coord(l);
            self.min[l] <= v && v <= self.max[l]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        let r = OrthogonalRange::new(vec![0, -2], vec![3, 0]);
        assert!(r.contains(&[0, -2]));
        assert!(r.contains(&[3, 0]));
        assert!(!r.contains(&[4, 0]));
        assert!(!r.contains(&[0, 1]));
    }

    #[test]
    fn negated_mirrors_membership() {
        let r = OrthogonalRange::new(vec![1, -3], vec![2, 0]);
        let m = r.negated();
        assert_eq!(m, OrthogonalRange::new(vec![-2, 0], vec![-1, 3]));
        assert!(r.contains(&[2, -3]));
        assert!(m.contains(&[-2, 3]));
    }

    #[test]
    fn crossed_bounds_make_an_empty_box() {
        let mut r = OrthogonalRange::zero(2);
        assert!(!r.is_empty());
        r.set(1, 1, 0);
        assert!(r.is_empty());
        assert!(!r.contains(&[0, 0]));
    }
}
