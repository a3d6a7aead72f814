// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! One `n -> n + 1` extension step of the identity enumeration.
//!
//! Phases, in order:
//! 1. **Lift**: every identity of dimension `n` gets a zero appended. The
//!    lifted set is reported, indexed in a digital tree, and becomes the
//!    first "previous level".
//! 2. **Boundary**: the identities `n + 1 = a + b` are added to the next
//!    level.
//! 3. **Raise**: level by level, every pending pair `(j, k)` with
//!    `(j + 1) + (k + 1) = n + 1` of every vector of the previous level is
//!    traded for one more part `n + 1`. Level 0 also raises the negated
//!    lifted vectors; later levels only raise in the positive direction.
//!
//! A raise whose traded positions stay non-negative is irreducible by
//! construction. Otherwise the candidate is tested against the lifted
//! identities with two range queries (direct and mirrored); it survives if
//! both come back empty.
//!
//! Accepting a raise erases the pending bit of every other parent in the
//! previous level that would produce the same target ("source erasing").

use core::mem;

use ppi_index::{DigitalTree, FrozenTree, RangeSearch};
use tracing::{debug, info, info_span, trace};

use crate::arena::VectorArena;
use crate::attribute::{Attribute, Direction};
use crate::config::ExtendConfig;
use crate::error::PpiError;
use crate::reduce::raise_candidate_range;
use crate::stats::ExtendStats;
use crate::vector::Vector;
use crate::vector_set::VectorSet;

/// Dimension of the [`seed`] set.
pub const SEED_DIMENSION: usize = 2;

/// Largest `n` that [`extend`] accepts (limited by the pending-raise
/// bitmask, which holds [`Attribute::PAIRS`] pairs per direction).
pub const MAX_DIMENSION: usize = 2 * Attribute::PAIRS + 1;

/// The complete identity set for `n = 2`: `2 = 1 + 1`.
#[must_use]
pub fn seed() -> VectorSet {
    std::iter::once(Vector::from([-2, 1])).collect()
}

/// Result of one extension step.
#[derive(Debug, Clone)]
pub struct Extension {
    /// Every identity of dimension `n + 1`, once each up to sign.
    pub ppis: VectorSet,
    /// Counters describing the work done.
    pub stats: ExtendStats,
}

/// Extends the complete identity set of dimension `n` to dimension `n + 1`
/// with the default configuration.
pub fn extend(previous: VectorSet, n: usize) -> Result<Extension, PpiError> {
    extend_with(previous, n, &ExtendConfig::default(), |_| {})
}

/// Extends the complete identity set of dimension `n` to dimension `n + 1`,
/// calling `report` once for every identity of the result as it is found.
///
/// `previous` must be exactly the identity set for dimension `n` (each
/// identity once, normalized so its last non-zero entry is positive), as
/// produced by [`seed`] or a previous call.
pub fn extend_with<R>(
    previous: VectorSet,
    n: usize,
    config: &ExtendConfig,
    mut report: R,
) -> Result<Extension, PpiError>
where
    R: FnMut(&Vector),
{
    if n < SEED_DIMENSION {
        return Err(PpiError::DimensionTooSmall { n });
    }
    if n > MAX_DIMENSION {
        return Err(PpiError::DimensionTooLarge {
            n,
            max: MAX_DIMENSION,
        });
    }
    if let Some(bad) = previous.iter().find(|v| v.dimension() != n) {
        return Err(PpiError::DimensionMismatch {
            expected: n,
            found: bad.dimension(),
        });
    }
    let _span = info_span!("extend", n).entered();

    let mut lifted: Vec<Vector> = previous.into_vectors().map(|v| v.lifted()).collect();
    lifted.sort_unstable();
    info!(count = lifted.len(), "vectors copied from n = {n}");
    let mut pold = VectorSet::new();
    for v in &lifted {
        trace!(%v, "lifted");
        report(v);
        pold.insert(v.clone(), Attribute::for_vector(v, n, true));
    }
    let arena: VectorArena = lifted.into_iter().collect();

    info!("finishing index");
    let index = arena
        .index()
        .unwrap_or_else(|| DigitalTree::new(n + 1))
        .finish();

    let mut run = Extender::new(n, *config, &index, pold, report);
    run.stats.lifted = arena.len() as u64;
    run.stats.reported = run.stats.lifted;

    run.boundary();
    info!(count = run.stats.boundary, "vectors of type {} = a + b", n + 1);

    run.raise_level(true);
    run.advance();
    info!(count = run.pold.len(), "vectors of P1({})", n + 1);

    for t in 1..n {
        if run.pold.is_empty() {
            break;
        }
        run.raise_level(false);
        run.advance();
        info!(count = run.pold.len(), "vectors of P{}({})", t + 1, n + 1);
    }

    let (ppis, stats) = run.finish();
    info!(total = ppis.len(), "extension to n = {} complete", n + 1);
    Ok(Extension { ppis, stats })
}

/// Runs [`extend`] from the seed up to `target` and returns the identity set
/// of dimension `target`.
pub fn enumerate(target: usize) -> Result<VectorSet, PpiError> {
    if target < SEED_DIMENSION {
        return Err(PpiError::DimensionTooSmall { n: target });
    }
    let mut set = seed();
    for n in SEED_DIMENSION..target {
        set = extend(set, n)?.ppis;
    }
    Ok(set)
}

/// Working state of one extension step.
struct Extender<'t, 'i, R> {
    n: usize,
    config: ExtendConfig,
    /// Lifted identities of dimension `n`, for reducibility queries.
    index: &'i FrozenTree<'t, Vector>,
    /// Level being raised.
    pold: VectorSet,
    /// Level being produced.
    pnew: VectorSet,
    /// Finished levels.
    done: VectorSet,
    stats: ExtendStats,
    report: R,
}

impl<'t, 'i, R: FnMut(&Vector)> Extender<'t, 'i, R> {
    fn new(
        n: usize,
        config: ExtendConfig,
        index: &'i FrozenTree<'t, Vector>,
        pold: VectorSet,
        report: R,
    ) -> Self {
        Self {
            n,
            config,
            index,
            pold,
            pnew: VectorSet::new(),
            done: VectorSet::new(),
            stats: ExtendStats::default(),
            report,
        }
    }

    fn emit(&mut self, v: &Vector) {
        trace!(%v, "identity");
        self.stats.reported += 1;
        (self.report)(v);
    }

    /// `n + 1 = (p + 1) + (n - p)` for every unordered pair, including the
    /// doubled part when `n + 1` is even.
    fn boundary(&mut self) {
        let n = self.n;
        for p in 0..(n + 1) / 2 {
            let mut v = Vector::zero(n + 1);
            v[n] = 1;
            v[p] -= 1;
            v[n - 1 - p] -= 1;
            let attribute = Attribute::for_vector(&v, n, false);
            if !self.pnew.contains(&v) {
                self.emit(&v);
                self.pnew.insert(v, attribute);
                self.stats.boundary += 1;
            }
        }
    }

    fn raise_level(&mut self, with_negative: bool) {
        self.stats.levels += 1;
        // Hash order would make the report order, and which parent erases
        // which source, vary between runs. Walk a sorted snapshot of the keys
        // and read attributes live, since erasing mutates them mid-level.
        for v in self.pold.sorted() {
            // Pending bits of `v` may already have been erased by earlier
            // vectors of this level.
            let Some(attribute) = self.pold.attribute(&v) else {
                continue;
            };
            if attribute.is_empty() {
                continue;
            }
            trace!(%v, "raising");
            let negated = with_negative.then(|| -&v);
            for pair in 0..self.n / 2 {
                if attribute.has(Direction::Positive, pair) {
                    self.raise(&v, pair, with_negative);
                }
                if let Some(negated) = &negated {
                    if attribute.has(Direction::Negative, pair) {
                        self.raise(negated, pair, with_negative);
                    }
                }
            }
        }
    }

    fn raise(&mut self, v: &Vector, pair: usize, with_negative: bool) {
        let n = self.n;
        let (j, k) = (pair, n - 1 - pair);
        let mut w = v.clone();
        w[n] += 1;
        w[j] -= 1;
        w[k] -= 1;
        self.stats.raises += 1;

        if w[j] >= 0 && w[k] >= 0 {
            self.erase_sources(&w, true, with_negative);
            self.accept(w);
            return;
        }

        self.stats.reduce_ops += 1;
        let range = raise_candidate_range(&w, j, k);
        if self.index.contains_any(&range) || self.index.contains_any(&range.negated()) {
            debug!(%w, "reducible");
            self.stats.reducible += 1;
            self.erase_sources(&w, false, with_negative);
            return;
        }
        if self.pnew.contains(&w) {
            debug!(%w, "duplicate");
            self.stats.duplicates += 1;
            return;
        }
        self.erase_sources(&w, true, with_negative);
        self.accept(w);
    }

    fn accept(&mut self, w: Vector) {
        if self.pnew.contains(&w) {
            return;
        }
        let attribute = Attribute::for_vector(&w, self.n, false);
        self.emit(&w);
        self.pnew.insert(w, attribute);
    }

    /// Clears the pending bit on every vector of the previous level that
    /// raises to `w` through some pair.
    fn erase_sources(&mut self, w: &Vector, irreducible: bool, with_negative: bool) {
        if !self.config.erase_sources || !(irreducible || self.config.erase_reducible_sources) {
            return;
        }
        let n = self.n;
        let mut u = w.clone();
        u[n] -= 1;
        for pair in 0..n / 2 {
            let (a, b) = (pair, n - 1 - pair);
            if u[a] < 0 || u[b] < 0 {
                u[a] += 1;
                u[b] += 1;
                self.erase(&u, pair, Direction::Positive, irreducible);
                u[a] -= 1;
                u[b] -= 1;
            }
        }
        if with_negative {
            let mut u = -u;
            for pair in 0..n / 2 {
                let (a, b) = (pair, n - 1 - pair);
                if u[a] > 0 || u[b] > 0 {
                    u[a] -= 1;
                    u[b] -= 1;
                    self.erase(&u, pair, Direction::Negative, irreducible);
                    u[a] += 1;
                    u[b] += 1;
                }
            }
        }
    }

    fn erase(&mut self, source: &Vector, pair: usize, direction: Direction, irreducible: bool) {
        let counts = if irreducible {
            &mut self.stats.erase_irreducible
        } else {
            &mut self.stats.erase_reducible
        };
        match self.pold.attribute_mut(source) {
            Some(attribute) => {
                attribute.clear(direction, pair);
                counts.hits += 1;
            }
            None => counts.fails += 1,
        }
    }

    /// Retires the raised level and promotes the produced one.
    fn advance(&mut self) {
        let finished = mem::take(&mut self.pold);
        self.done.merge(finished);
        self.pold = mem::take(&mut self.pnew);
    }

    fn finish(mut self) -> (VectorSet, ExtendStats) {
        let last = mem::take(&mut self.pold);
        self.done.merge(last);
        (self.done, self.stats)
    }
}
