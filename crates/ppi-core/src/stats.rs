// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Diagnostic counters for an extension step.
//!
//! Counters are returned by value from every step; summing the stats of
//! several steps (`+=`) gives run totals.

use core::ops::AddAssign;

/// Lookup outcomes when erasing the sources of a raise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EraseCounts {
    /// A candidate source was present in the previous level and got erased.
    pub hits: u64,
    /// A candidate source was not present.
    pub fails: u64,
}

impl AddAssign for EraseCounts {
    fn add_assign(&mut self, rhs: Self) {
        self.hits += rhs.hits;
        self.fails += rhs.fails;
    }
}

/// What one `n -> n + 1` step did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtendStats {
    /// Identities reported (each identity once, up to sign).
    pub reported: u64,
    /// Identities carried over from dimension `n`.
    pub lifted: u64,
    /// New identities of the form `n + 1 = a + b`.
    pub boundary: u64,
    /// Raising levels executed.
    pub levels: u64,
    /// Raise attempts.
    pub raises: u64,
    /// Raises that needed range queries to decide reducibility.
    pub reduce_ops: u64,
    /// Raises rejected as reducible.
    pub reducible: u64,
    /// Irreducible raises that had already been produced at this level.
    pub duplicates: u64,
    /// Source erasing after irreducible raises.
    pub erase_irreducible: EraseCounts,
    /// Source erasing after reducible raises.
    pub erase_reducible: EraseCounts,
}

impl AddAssign for ExtendStats {
    fn add_assign(&mut self, rhs: Self) {
        self.reported += rhs.reported;
        self.lifted += rhs.lifted;
        self.boundary += rhs.boundary;
        self.levels += rhs.levels;
        self.raises += rhs.raises;
        self.reduce_ops += rhs.reduce_ops;
        self.reducible += rhs.reducible;
        self.duplicates += rhs.duplicates;
        self.erase_irreducible += rhs.erase_irreducible;
        self.erase_reducible += rhs.erase_reducible;
    }
}
