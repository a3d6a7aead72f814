// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! De-duplicating vector set used for generation bookkeeping.

use rustc_hash::FxHashMap;

use crate::attribute::Attribute;
use crate::vector::Vector;

/// A set of distinct vectors, each carrying a mutable [`Attribute`].
///
/// Identity is the coordinate tuple only; updating an attribute never moves
/// an entry. Iteration order of [`iter`](Self::iter) is unspecified; use
/// [`sorted`](Self::sorted) where a canonical order matters.
#[derive(Debug, Clone, Default)]
pub struct VectorSet {
    entries: FxHashMap<Vector, Attribute>,
}

impl VectorSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vectors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the set holds no vector.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts `v` with `attribute`. Returns `false`, leaving the resident
    /// entry untouched, if an equal vector is already present.
    pub fn insert(&mut self, v: Vector, attribute: Attribute) -> bool {
        match self.entries.entry(v) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(attribute);
                true
            }
        }
    }

    /// Returns `true` if an equal vector is present.
    #[must_use]
    pub fn contains(&self, v: &Vector) -> bool {
        self.entries.contains_key(v)
    }

    /// Attribute of `v`, if present.
    #[must_use]
    pub fn attribute(&self, v: &Vector) -> Option<Attribute> {
        self.entries.get(v).copied()
    }

    /// Mutable attribute of `v`, if present.
    pub fn attribute_mut(&mut self, v: &Vector) -> Option<&mut Attribute> {
        self.entries.get_mut(v)
    }

    /// Iterates the vectors in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Vector> {
        self.entries.keys()
    }

    /// Clones the vectors out in lexicographic order.
    #[must_use]
    pub fn sorted(&self) -> Vec<Vector> {
        let mut out: Vec<Vector> = self.entries.keys().cloned().collect();
        out.sort_unstable();
        out
    }

    /// Moves every entry of `other` into `self`; entries already present in
    /// `self` keep their attribute.
    pub fn merge(&mut self, other: Self) {
        if self.entries.is_empty() {
            *self = other;
            return;
        }
        self.entries.reserve(other.entries.len());
        for (v, attribute) in other.entries {
            self.insert(v, attribute);
        }
    }

    /// Consumes the set, returning its vectors in unspecified order.
    pub fn into_vectors(self) -> impl Iterator<Item = Vector> {
        self.entries.into_keys()
    }
}

impl PartialEq for VectorSet {
    /// Set equality on vectors; attributes are ignored.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|v| other.contains(v))
    }
}

impl Eq for VectorSet {}

impl FromIterator<Vector> for VectorSet {
    fn from_iter<I: IntoIterator<Item = Vector>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<Vector> for VectorSet {
    fn extend<I: IntoIterator<Item = Vector>>(&mut self, iter: I) {
        for v in iter {
            self.insert(v, Attribute::default());
        }
    }
}

/// Collects borrowed vectors, e.g. from [`ppi_index::FrozenTree::collect_into`].
impl<'a> Extend<&'a Vector> for VectorSet {
    fn extend<I: IntoIterator<Item = &'a Vector>>(&mut self, iter: I) {
        for v in iter {
            self.insert(v.clone(), Attribute::default());
        }
    }
}
