// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Compressed digital trie with orthogonal range-emptiness queries.
//!
//! Every inner node branches on one coordinate ("level"), starting with the
//! most significant level `dimension - 1` at the root. An inner node only
//! allocates the contiguous span of coordinate values actually seen at that
//! position (`low ..= low + children.len() - 1`) and grows it on demand.
//!
//! Paths are compressed: a point is stored as a leaf as soon as no other
//! point shares its prefix, so a leaf sitting at level `L` has only been
//! compared on levels `> L`, plus its slot value at `L`. Queries check the
//! remaining levels `0..L` directly at the leaf.
//!
//! Freezing ([`DigitalTree::finish`]) precomputes, per inner node, the index
//! of the next occupied slot for every slot, so queries hop over empty runs
//! in O(1). Query results are identical before and after freezing.

use core::ops::ControlFlow;

use crate::point::{Coord, Point};
use crate::range::OrthogonalRange;

#[derive(Debug)]
enum Node<'a, P: ?Sized> {
    Leaf(&'a P),
    Inner(Inner<'a, P>),
}

#[derive(Debug)]
struct Inner<'a, P: ?Sized> {
    /// Coordinate value held by `children[0]`.
    low: Coord,
    children: Vec<Option<Node<'a, P>>>,
    /// `next[i]` is the smallest occupied index `>= i` (or `children.len()`).
    /// Empty while the tree is still being built.
    next: Box<[u32]>,
}

impl<'a, P: Point + ?Sized> Inner<'a, P> {
    fn spanning(low: Coord, high: Coord) -> Self {
        let width = (i64::from(high) - i64::from(low) + 1) as usize;
        Self {
            low,
            children: core::iter::repeat_with(|| None).take(width).collect(),
            next: Box::default(),
        }
    }

    /// Slot for `value`, widening the span to the left or right if needed.
    fn slot_mut(&mut self, value: Coord) -> &mut Option<Node<'a, P>> {
        if value < self.low {
            let grow = (i64::from(self.low) - i64::from(value)) as usize;
            self.children
                .splice(0..0, core::iter::repeat_with(|| None).take(grow));
            self.low = value;
        }
        let idx = (i64::from(value) - i64::from(self.low)) as usize;
        if idx >= self.children.len() {
            self.children.resize_with(idx + 1, || None);
        }
        &mut self.children[idx]
    }

    fn insert(&mut self, level: usize, point: &'a P) -> bool {
        let slot = self.slot_mut(point.coord(level));
        match slot {
            None => {
                *slot = Some(Node::Leaf(point));
                true
            }
            Some(Node::Inner(child)) => child.insert(level - 1, point),
            Some(Node::Leaf(resident)) => {
                let resident: &'a P = *resident;
                if agree_below(resident, point, level) {
                    return false;
                }
                *slot = Some(Node::Inner(Self::split(level - 1, resident, point)));
                true
            }
        }
    }

    /// Builds the chain of inner nodes on which `a` and `b` still agree and
    /// places both leaves at the first level where they differ.
    fn split(level: usize, a: &'a P, b: &'a P) -> Self {
        let (ca, cb) = (a.coord(level), b.coord(level));
        if ca == cb {
            let mut inner = Self::spanning(ca, ca);
            inner.children[0] = Some(Node::Inner(Self::split(level - 1, a, b)));
            inner
        } else {
            let mut inner = Self::spanning(ca.min(cb), ca.max(cb));
            *inner.slot_mut(ca) = Some(Node::Leaf(a));
            *inner.slot_mut(cb) = Some(Node::Leaf(b));
            inner
        }
    }

    fn freeze(&mut self) {
        let len = self.children.len();
        let mut next = vec![len as u32; len].into_boxed_slice();
        let mut upcoming = len as u32;
        for (i, child) in self.children.iter_mut().enumerate().rev() {
            if let Some(node) = child {
                if let Node::Inner(inner) = node {
                    inner.freeze();
                }
                upcoming = i as u32;
            }
            next[i] = upcoming;
        }
        self.next = next;
    }

    fn occupied_from(&self, idx: usize) -> usize {
        if idx >= self.children.len() {
            return self.children.len();
        }
        if self.next.is_empty() {
            self.children[idx..]
                .iter()
                .position(Option::is_some)
                .map_or(self.children.len(), |off| idx + off)
        } else {
            self.next[idx] as usize
        }
    }

    /// Child indices intersecting `[lo, hi]`, or `None` if there are none.
    fn window(&self, lo: Coord, hi: Coord) -> Option<(usize, usize)> {
        let len = self.children.len() as i64;
        let first = (i64::from(lo) - i64::from(self.low)).max(0);
        let last = (i64::from(hi) - i64::from(self.low)).min(len - 1);
        (first <= last).then_some((first as usize, last as usize))
    }

    fn search<F>(&self, level: usize, range: &OrthogonalRange, visit: &mut F) -> ControlFlow<()>
    where
        F: FnMut(&'a P) -> ControlFlow<()>,
    {
        let Some((first, last)) = self.window(range.min(level), range.max(level)) else {
            return ControlFlow::Continue(());
        };
        let mut idx = self.occupied_from(first);
        while idx <= last {
            match &self.children[idx] {
                Some(Node::Leaf(point)) => {
                    if range.contains_below(*point, level) {
                        visit(*point)?;
                    }
                }
                Some(Node::Inner(inner)) => inner.search(level - 1, range, visit)?,
                None => {}
            }
            idx = self.occupied_from(idx + 1);
        }
        ControlFlow::Continue(())
    }

    fn drain_into(self, out: &mut Vec<&'a P>) {
        for node in self.children.into_iter().flatten() {
            match node {
                Node::Leaf(point) => out.push(point),
                Node::Inner(inner) => inner.drain_into(out),
            }
        }
    }
}

fn agree_below<P: Point + ?Sized>(a: &P, b: &P, level: usize) -> bool {
    (0..level).all(|l| a.coord(l) == b.coord(l))
}

/// Orthogonal range queries over a set of borrowed points.
///
/// The visitor decides how far the search goes: returning
/// `ControlFlow::Break(())` aborts the whole traversal and the break is
/// propagated to the caller; `ControlFlow::Continue(())` keeps searching.
pub trait RangeSearch<'a, P: ?Sized + 'a> {
    /// Visits every stored point inside `range` until `visit` breaks.
    ///
    /// Returns `ControlFlow::Break(())` if the visitor stopped the search,
    /// `ControlFlow::Continue(())` if the box was exhausted.
    fn range_search<F>(&self, range: &OrthogonalRange, visit: F) -> ControlFlow<()>
    where
        F: FnMut(&'a P) -> ControlFlow<()>;

    /// Returns `true` if at least one stored point lies inside `range`.
    fn contains_any(&self, range: &OrthogonalRange) -> bool {
        self.range_search(range, |_| ControlFlow::Break(())).is_break()
    }
}

/// A digital tree in its building phase: accepts inserts and answers queries
/// by scanning child spans linearly.
///
/// Call [`finish`](Self::finish) once all points are in to obtain the faster,
/// query-only [`FrozenTree`].
#[derive(Debug)]
pub struct DigitalTree<'a, P: ?Sized> {
    dimension: usize,
    root: Inner<'a, P>,
    len: usize,
}

impl<'a, P: Point + ?Sized> DigitalTree<'a, P> {
    /// Creates an empty tree for points of the given dimension.
    ///
    /// # Panics
    /// Panics if `dimension` is zero.
    #[must_use]
    pub fn new(dimension: usize) -> Self {
        assert!(dimension > 0, "digital tree needs at least one level");
        Self {
            dimension,
            root: Inner::spanning(0, 0),
            len: 0,
        }
    }

    /// Number of coordinates per point.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of distinct points stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no point has been inserted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts `point`. Returns `false` if a point with the same coordinates
    /// is already stored (the tree keeps the resident one).
    ///
    /// # Panics
    /// Panics if the point's dimension differs from the tree's.
    pub fn insert(&mut self, point: &'a P) -> bool {
        assert_eq!(
            point.dimension(),
            self.dimension,
            "point dimension does not match tree"
        );
        let inserted = self.root.insert(self.dimension - 1, point);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Precomputes the skip tables and switches to the query-only form.
    #[must_use]
    pub fn finish(mut self) -> FrozenTree<'a, P> {
        self.root.freeze();
        FrozenTree {
            dimension: self.dimension,
            root: self.root,
            len: self.len,
        }
    }

    /// Tears the tree down, returning its points in trie order.
    #[must_use]
    pub fn into_points(self) -> Vec<&'a P> {
        let mut out = Vec::with_capacity(self.len);
        self.root.drain_into(&mut out);
        out
    }
}

/// A finished digital tree. Read-only; queries skip empty slots in O(1).
#[derive(Debug)]
pub struct FrozenTree<'a, P: ?Sized> {
    dimension: usize,
    root: Inner<'a, P>,
    len: usize,
}

impl<'a, P: Point + ?Sized> FrozenTree<'a, P> {
    /// Number of coordinates per point.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of distinct points stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Copies every stored point into `out` via a full-box query.
    pub fn collect_into<E: Extend<&'a P>>(&self, out: &mut E) {
        let full = OrthogonalRange::unbounded(self.dimension);
        let _ = self.range_search(&full, |point| {
            out.extend(Some(point));
            ControlFlow::Continue(())
        });
    }

    /// Tears the tree down, returning its points in trie order.
    #[must_use]
    pub fn into_points(self) -> Vec<&'a P> {
        let mut out = Vec::with_capacity(self.len);
        self.root.drain_into(&mut out);
        out
    }
}

impl<'a, P: Point + ?Sized + 'a> RangeSearch<'a, P> for DigitalTree<'a, P> {
    fn range_search<F>(&self, range: &OrthogonalRange, mut visit: F) -> ControlFlow<()>
    where
        F: FnMut(&'a P) -> ControlFlow<()>,
    {
        debug_assert_eq!(range.dimension(), self.dimension);
        self.root.search(self.dimension - 1, range, &mut visit)
    }
}

impl<'a, P: Point + ?Sized + 'a> RangeSearch<'a, P> for FrozenTree<'a, P> {
    fn range_search<F>(&self, range: &OrthogonalRange, mut visit: F) -> ControlFlow<()>
    where
        F: FnMut(&'a P) -> ControlFlow<()>,
    {
        debug_assert_eq!(range.dimension(), self.dimension);
        self.root.search(self.dimension - 1, range, &mut visit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points() -> Vec<[Coord; 3]> {
        vec![[1, 0, -2], [1, 1, -2], [0, -1, 3], [-4, 2, 3], [2, 0, -2]]
    }

    #[test]
    fn duplicates_are_rejected_and_not_counted() {
        let pts = points();
        let again = pts.clone();
        let mut tree = DigitalTree::new(3);
        for p in &pts {
            assert!(tree.insert(p));
        }
        for p in &again {
            assert!(!tree.insert(p));
        }
        assert_eq!(tree.len(), pts.len());
    }

    #[test]
    fn split_chain_keeps_both_leaves_reachable() {
        // Agree on levels 2 and 1, differ only at level 0.
        let a = [5, 7, 9];
        let b = [6, 7, 9];
        let mut tree = DigitalTree::new(3);
        assert!(tree.insert(&a));
        assert!(tree.insert(&b));
        assert!(tree.contains_any(&OrthogonalRange::new(vec![5, 7, 9], vec![5, 7, 9])));
        assert!(tree.contains_any(&OrthogonalRange::new(vec![6, 7, 9], vec![6, 7, 9])));
        assert!(!tree.contains_any(&OrthogonalRange::new(vec![7, 7, 9], vec![9, 7, 9])));
    }

    #[test]
    fn frozen_and_building_trees_answer_alike() {
        let pts = points();
        let mut tree = DigitalTree::new(3);
        for p in &pts {
            tree.insert(p);
        }
        let boxes = [
            OrthogonalRange::new(vec![0, 0, -2], vec![2, 1, -2]),
            OrthogonalRange::new(vec![-5, -5, 0], vec![5, 5, 2]),
            OrthogonalRange::new(vec![-4, 2, 3], vec![-4, 2, 3]),
            OrthogonalRange::new(vec![3, -9, -9], vec![9, 9, 9]),
        ];
        let before: Vec<bool> = boxes.iter().map(|b| tree.contains_any(b)).collect();
        let frozen = tree.finish();
        let after: Vec<bool> = boxes.iter().map(|b| frozen.contains_any(b)).collect();
        assert_eq!(before, after);
        assert_eq!(before, vec![true, false, true, false]);
    }

    #[test]
    fn visitor_break_stops_the_search() {
        let pts = points();
        let mut tree = DigitalTree::new(3);
        for p in &pts {
            tree.insert(p);
        }
        let frozen = tree.finish();
        let mut seen = 0;
        let flow = frozen.range_search(&OrthogonalRange::unbounded(3), |_| {
            seen += 1;
            if seen == 2 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        assert!(flow.is_break());
        assert_eq!(seen, 2);
    }

    #[test]
    fn building_tree_drains_without_freezing() {
        let pts = points();
        let mut tree = DigitalTree::new(3);
        for p in &pts {
            tree.insert(p);
        }
        assert!(!tree.insert(&pts[0]));
        let mut drained: Vec<[Coord; 3]> = tree.into_points().into_iter().copied().collect();
        assert_eq!(drained.len(), pts.len());
        drained.sort_unstable();
        let mut expected = pts.clone();
        expected.sort_unstable();
        assert_eq!(drained, expected);
    }

    #[test]
    fn drains_every_point_in_trie_order() {
        let pts = points();
        let mut tree = DigitalTree::new(3);
        for p in &pts {
            tree.insert(p);
        }
        let drained: Vec<[Coord; 3]> = tree.finish().into_points().into_iter().copied().collect();
        // Most significant level first, ascending.
        assert_eq!(
            drained,
            vec![[1, 0, -2], [2, 0, -2], [1, 1, -2], [0, -1, 3], [-4, 2, 3]]
        );
    }
}
