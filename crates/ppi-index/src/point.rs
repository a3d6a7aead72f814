// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

/// Signed coordinate value stored at each level of a digital tree.
pub type Coord = i32;

/// A fixed-dimension integer point that can be stored in a [`DigitalTree`].
///
/// Levels are numbered `0..dimension()`; the tree branches on the highest
/// level first. Implementations must return the same values for the lifetime
/// of the borrow held by the tree.
///
/// [`DigitalTree`]: crate::DigitalTree
pub trait Point {
    /// Number of coordinates.
    fn dimension(&self) -> usize;
    /// Coordinate at `level` (`0 <= level < dimension()`).
    fn coord(&self, level: usize) -> Coord;
}

impl Point for [Coord] {
    fn dimension(&self) -> usize {
        self.len()
    }

    fn coord(&self, level: usize) -> Coord {
        self[level]
    }
}

impl Point for Vec<Coord> {
    fn dimension(&self) -> usize {
        self.len()
    }

    fn coord(&self, level: usize) -> Coord {
        self[level]
    }
}

impl<const N: usize> Point for [Coord; N] {
    fn dimension(&self) -> usize {
        N
    }

    fn coord(&self, level: usize) -> Coord {
        self[level]
    }
}
