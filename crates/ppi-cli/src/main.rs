// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `ppi`: enumerate primitive partition identities up to a dimension.
//!
//! Results go to stdout (one summary per dimension, optionally every identity
//! of the final dimension); logs go to stderr.

use std::io::{self, IsTerminal, Write};

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use ppi_core::{
    extend_with, format_identity, seed, verify, ExtendConfig, ExtendStats, VectorSet,
    MAX_DIMENSION, SEED_DIMENSION,
};
use serde::Serialize;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Enumerate primitive partition identities")]
struct Args {
    /// Final dimension to reach (largest part of the identities)
    #[arg(default_value_t = 5)]
    dimension: usize,
    /// Print every identity of the final dimension as it is found
    #[arg(long)]
    print: bool,
    /// Summary format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
    /// Include diagnostic counters in the summaries
    #[arg(long)]
    stats: bool,
    /// Independently re-check every dimension's result
    #[arg(long)]
    verify: bool,
    /// Try every pending raise instead of erasing redundant ones
    #[arg(long)]
    no_erase_sources: bool,
    /// Also erase the sources of raises found reducible
    #[arg(long)]
    erase_reducible_sources: bool,
    /// More log output (repeatable)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,
    /// Only warnings and errors on stderr
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// One line of output per dimension.
#[derive(Debug, Serialize)]
struct Summary {
    n: usize,
    count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<ExtendStats>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        match (self.quiet, self.verbose) {
            (true, _) => LevelFilter::WARN,
            (false, 0) => LevelFilter::INFO,
            (false, 1) => LevelFilter::DEBUG,
            (false, _) => LevelFilter::TRACE,
        }
    }

    fn config(&self) -> ExtendConfig {
        ExtendConfig::default()
            .with_erase_sources(!self.no_erase_sources)
            .with_erase_reducible_sources(self.erase_reducible_sources)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(args.log_level().into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();

    if args.dimension < SEED_DIMENSION || args.dimension > MAX_DIMENSION + 1 {
        bail!(
            "dimension must be between {SEED_DIMENSION} and {}, got {}",
            MAX_DIMENSION + 1,
            args.dimension
        );
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&args, &mut out)?;
    out.flush().context("flush stdout")?;
    Ok(())
}

fn run(args: &Args, out: &mut impl Write) -> Result<()> {
    let config = args.config();
    let mut set = seed();
    let mut total = ExtendStats::default();

    if args.dimension == SEED_DIMENSION && args.print {
        print_identities(out, &set)?;
    }
    finish_dimension(args, out, &set, SEED_DIMENSION, None)?;

    for n in SEED_DIMENSION..args.dimension {
        let last = n + 1 == args.dimension;
        let mut written: io::Result<()> = Ok(());
        let ext = extend_with(set, n, &config, |v| {
            if last && args.print && written.is_ok() {
                written = writeln!(out, "{v}\t{}", format_identity(v));
            }
        })
        .with_context(|| format!("extend to n = {}", n + 1))?;
        written.context("write identity")?;

        total += ext.stats;
        set = ext.ppis;
        finish_dimension(args, out, &set, n + 1, Some(ext.stats))?;
    }

    info!(
        raises = total.raises,
        reducible = total.reducible,
        duplicates = total.duplicates,
        "done"
    );
    Ok(())
}

fn finish_dimension(
    args: &Args,
    out: &mut impl Write,
    set: &VectorSet,
    n: usize,
    stats: Option<ExtendStats>,
) -> Result<()> {
    if args.verify {
        verify(set, n).with_context(|| format!("verification failed for n = {n}"))?;
        info!(n, "verified");
    }
    let summary = Summary {
        n,
        count: set.len(),
        stats: if args.stats { stats } else { None },
    };
    match args.format {
        Format::Text => {
            write!(out, "n = {}: {} PPIs", summary.n, summary.count)?;
            if let Some(s) = &summary.stats {
                write!(
                    out,
                    " (raises {}, range tests {}, reducible {}, duplicates {})",
                    s.raises, s.reduce_ops, s.reducible, s.duplicates
                )?;
            }
            writeln!(out)?;
        }
        Format::Json => {
            serde_json::to_writer(&mut *out, &summary).context("serialize summary")?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn print_identities(out: &mut impl Write, set: &VectorSet) -> Result<()> {
    for v in set.sorted() {
        writeln!(out, "{v}\t{}", format_identity(&v))?;
    }
    Ok(())
}
