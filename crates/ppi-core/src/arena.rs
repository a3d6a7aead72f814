// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Per-dimension vector storage backing the spatial index.
//!
//! The digital tree stores borrowed vectors. A [`VectorArena`] owns them for
//! one extension step and is dropped (or cleared) wholesale afterwards. Any
//! index built from it borrows the arena, so clearing it while an index is
//! alive does not compile.

use ppi_index::DigitalTree;

use crate::vector::Vector;

/// Append-only owner of the vectors a digital tree points into.
#[derive(Debug, Default)]
pub struct VectorArena {
    vectors: Vec<Vector>,
}

impl VectorArena {
    /// Creates an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `v` and returns its slot.
    pub fn push(&mut self, v: Vector) -> usize {
        self.vectors.push(v);
        self.vectors.len() - 1
    }

    /// Number of stored vectors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Returns `true` if nothing has been pushed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Builds a digital tree over every stored vector.
    ///
    /// Returns `None` if the arena is empty or holds zero-dimensional
    /// vectors. Vectors must all share one dimension.
    #[must_use]
    pub fn index(&self) -> Option<DigitalTree<'_, Vector>> {
        let dimension = self.vectors.first()?.dimension();
        if dimension == 0 {
            return None;
        }
        let mut tree = DigitalTree::new(dimension);
        for v in &self.vectors {
            tree.insert(v);
        }
        Some(tree)
    }

    /// Releases every vector.
    pub fn clear(&mut self) {
        self.vectors = Vec::new();
    }
}

impl FromIterator<Vector> for VectorArena {
    fn from_iter<I: IntoIterator<Item = Vector>>(iter: I) -> Self {
        Self {
            vectors: iter.into_iter().collect(),
        }
    }
}
