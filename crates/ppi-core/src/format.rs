// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Human-readable rendering of identities.

use core::fmt::Write as _;

use crate::vector::Vector;

/// Renders `z` as `left\t= right`, each side listing its 1-based parts in
/// ascending order, repeated by multiplicity and joined with `" + "`.
///
/// `(1, -2, 1)` renders as `"1 + 3\t= 2 + 2"`.
#[must_use]
pub fn format_identity(z: &Vector) -> String {
    let mut out = String::new();
    write_side(&mut out, z, 1);
    out.push_str("\t= ");
    write_side(&mut out, z, -1);
    out
}

fn write_side(out: &mut String, z: &Vector, sign: i32) {
    let mut first = true;
    for (i, &c) in z.coords().iter().enumerate() {
        let multiplicity = c * sign;
        for _ in 0..multiplicity.max(0) {
            if !first {
                out.push_str(" + ");
            }
            first = false;
            // Writing into a String cannot fail.
            let _ = write!(out, "{}", i + 1);
        }
    }
}
