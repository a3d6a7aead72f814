// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Digital trees over fixed-dimension integer points.

This crate provides:
- The [`Point`] trait: anything with a dimension and integer coordinates.
- Inclusive axis-aligned query boxes ([`OrthogonalRange`]).
- A compressed digital trie ([`DigitalTree`]) keyed from the most
  significant coordinate (`dimension - 1`) down to coordinate `0`, and its
  query-only frozen form ([`FrozenTree`]).

Design notes:
- The tree borrows its points (`&'a P`); whatever owns them must outlive the
  tree, which the borrow checker enforces.
- Build, then freeze: [`DigitalTree::finish`] consumes the building tree, so
  inserting into a frozen tree is not expressible.
- Deterministic: traversal order is the trie order (ascending coordinate
  values, most significant level first); no hashing, no RNG.
"]

/// Point trait and the coordinate type.
pub mod point;
/// Inclusive per-coordinate query boxes.
pub mod range;
/// The digital tree itself.
pub mod tree;

pub use point::{Coord, Point};
pub use range::OrthogonalRange;
pub use tree::{DigitalTree, FrozenTree, RangeSearch};
