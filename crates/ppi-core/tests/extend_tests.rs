// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
//! End-to-end tests for the extension step.

use ppi_core::{
    enumerate, extend, extend_with, format_identity, seed, verify, ExtendConfig, ExtendStats,
    Vector, VectorSet,
};

fn vectors(vs: &[&[i32]]) -> Vec<Vector> {
    let mut out: Vec<Vector> = vs.iter().map(|c| Vector::from(*c)).collect();
    out.sort();
    out
}

#[test]
fn golden_counts_up_to_seven() {
    let mut set = seed();
    let mut counts = Vec::new();
    for n in 2..7 {
        set = extend(set, n).expect("extend").ppis;
        counts.push(set.len());
    }
    assert_eq!(counts, vec![5, 15, 47, 102, 276]);
}

#[test]
fn n3_and_n4_sets_are_exact() {
    let n3 = enumerate(3).expect("n = 3");
    assert_eq!(
        n3.sorted(),
        vectors(&[
            &[-2, 1, 0],
            &[-1, -1, 1],
            &[-3, 0, 1],
            &[1, -2, 1],
            &[0, -3, 2],
        ])
    );

    let n4 = extend(n3, 3).expect("n = 4").ppis;
    assert_eq!(
        n4.sorted(),
        vectors(&[
            &[-4, 0, 0, 1],
            &[-3, 0, 1, 0],
            &[-2, -1, 0, 1],
            &[-2, 1, 0, 0],
            &[-1, -1, 1, 0],
            &[-1, 0, -1, 1],
            &[0, -3, 2, 0],
            &[0, -2, 0, 1],
            &[0, -1, -2, 2],
            &[0, 0, -4, 3],
            &[0, 1, -2, 1],
            &[1, -2, 1, 0],
            &[1, -1, -1, 1],
            &[1, 0, -3, 2],
            &[2, 0, -2, 1],
        ])
    );
}

#[test]
fn every_dimension_passes_verification() {
    let mut set = seed();
    assert_eq!(verify(&set, 2), Ok(()));
    for n in 2..6 {
        set = extend(set, n).expect("extend").ppis;
        assert_eq!(verify(&set, n + 1), Ok(()), "dimension {}", n + 1);
        assert!(set.iter().all(|v| v.is_normalized() && v.is_balanced()));
    }
}

#[test]
fn previous_identities_survive_lifted() {
    let n4 = enumerate(4).expect("n = 4");
    let n5 = extend(n4.clone(), 4).expect("n = 5").ppis;
    for v in n4.iter() {
        assert!(n5.contains(&v.lifted()), "{v:?} lost on lift");
    }
    assert_eq!(n5.iter().filter(|v| v[4] == 0).count(), n4.len());
}

#[test]
fn runs_are_deterministic() {
    let record = || {
        let mut seen = Vec::new();
        let mut set = seed();
        for n in 2..6 {
            set = extend_with(set, n, &ExtendConfig::default(), |v| seen.push(v.clone()))
                .expect("extend")
                .ppis;
        }
        (seen, set.sorted())
    };
    assert_eq!(record(), record());
}

#[test]
fn erase_switches_do_not_change_the_result() {
    let configs = [
        ExtendConfig::default(),
        ExtendConfig::default().with_erase_sources(false),
        ExtendConfig::default().with_erase_reducible_sources(true),
    ];
    let results: Vec<(VectorSet, ExtendStats)> = configs
        .iter()
        .map(|config| {
            let mut set = seed();
            let mut total = ExtendStats::default();
            for n in 2..7 {
                let ext = extend_with(set, n, config, |_| {}).expect("extend");
                total += ext.stats;
                set = ext.ppis;
            }
            (set, total)
        })
        .collect();

    assert_eq!(results[0].0, results[1].0);
    assert_eq!(results[0].0, results[2].0);
    // Without erasing, every pending raise is tried.
    assert!(results[1].1.raises > results[0].1.raises);
    assert_eq!(results[1].1.erase_irreducible.hits, 0);
    assert_eq!(results[0].1.erase_reducible.hits + results[0].1.erase_reducible.fails, 0);
}

#[test]
fn stats_describe_the_step() {
    let n5 = enumerate(5).expect("n = 5");
    let ext = extend(n5, 5).expect("n = 6");
    let stats = ext.stats;
    assert_eq!(stats.lifted, 47);
    assert_eq!(stats.boundary, 3);
    assert_eq!(stats.reported, 102);
    assert_eq!(stats.reported as usize, ext.ppis.len());
    assert!(stats.levels >= 1);
    assert!(stats.reduce_ops <= stats.raises);
    assert!(stats.reducible + stats.duplicates <= stats.reduce_ops);
}

#[test]
fn identities_render_as_partitions() {
    let n4 = enumerate(4).expect("n = 4");
    let mut lines: Vec<String> = n4.sorted().iter().map(format_identity).collect();
    lines.sort();
    assert!(lines.contains(&"4\t= 1 + 1 + 1 + 1".to_string()));
    assert!(lines.contains(&"1 + 4\t= 2 + 3".to_string()));
    assert!(lines.contains(&"4 + 4 + 4\t= 3 + 3 + 3 + 3".to_string()));
    assert_eq!(lines.len(), 15);
}
