// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! ppi-core: enumeration of primitive partition identities.
//!
//! A partition identity of degree `n` is a vector `z` of length `n` with
//! `Σ (i + 1) · z[i] = 0`: the parts with positive multiplicity form one
//! partition, the negative ones another partition of the same integer. It is
//! primitive if no other identity lies conformally below it. The primitive
//! identities are computed dimension by dimension: [`extend`] turns the
//! complete set for `n` into the complete set for `n + 1`, starting from
//! [`seed`] (`2 = 1 + 1`).
//!
//! Every identity is stored once, in the sign whose last non-zero entry is
//! positive.
#![forbid(unsafe_code)]

/// Per-dimension vector storage for the index.
pub mod arena;
/// Pending-raise bitmasks.
pub mod attribute;
mod config;
mod error;
/// The `n -> n + 1` extension step.
pub mod extend;
mod format;
/// Reducibility as range queries.
pub mod reduce;
mod stats;
mod vector;
mod vector_set;
mod verify;

pub use arena::VectorArena;
pub use attribute::{Attribute, Direction};
pub use config::ExtendConfig;
pub use error::PpiError;
pub use extend::{
    enumerate, extend, extend_with, seed, Extension, MAX_DIMENSION, SEED_DIMENSION,
};
pub use format::format_identity;
pub use reduce::is_reducible;
pub use stats::{EraseCounts, ExtendStats};
pub use vector::Vector;
pub use vector_set::VectorSet;
pub use verify::{verify, Violation};

pub use ppi_index::Coord;
