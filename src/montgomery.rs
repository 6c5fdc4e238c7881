// -*- mode: rust; -*-
//
// This file is part of curve255.
// See LICENSE for licensing information.

//! Montgomery ladder step primitives.
//!
//! A point `(u, v)` on the Montgomery curve
//!
//! ```text
//! v^2 = u * (u^2 + 486662*u + 1)
//! ```
//!
//! is represented here only by its u-coordinate, held as a projective
//! pair `(X : Z)` of field elements with `u = X/Z`.  One doubling and
//! one differential addition per scalar bit are all a ladder needs,
//! and neither requires `v`.
//!
//! This module holds no state and materializes no point type: the
//! scalar-multiplication driver that walks the scalar's bits owns the
//! `(X, Z)` pairs and interleaves calls to [`double`] and [`sum`]
//! while branching on those bits.  Both functions therefore take
//! their inputs by reference, never mutate them, and return fresh
//! pairs.

use crate::field::FieldElement;

/// Double the point `(x : z)`, returning `(x2 : z2)` with
/// `x2/z2 = u([2]P)`.
pub fn double(x: &FieldElement, z: &FieldElement) -> (FieldElement, FieldElement) {
    let m = (x + z).square();
    let n = (x - z).square();
    let o = &m - &n;
    let x2 = &n * &m;
    let z2 = &(&o.mul_small() + &m) * &o;
    (x2, z2)
}

/// Differential addition: given `(x : z) = P`, `(xp : zp) = Q`, and
/// the affine u-coordinate `x1` of `P - Q`, return `(x3 : z3)` with
/// `x3/z3 = u(P + Q)`.
///
/// Knowing `u(P - Q)` is what lets the formula recover the sum
/// without any v-coordinate; in a ladder over base point `B`,
/// adjacent states always differ by `B`, so `x1` is the base point's
/// u-coordinate.
pub fn sum(
    x: &FieldElement,
    z: &FieldElement,
    xp: &FieldElement,
    zp: &FieldElement,
    x1: &FieldElement,
) -> (FieldElement, FieldElement) {
    let p = &(x - z) * &(xp + zp);
    let q = &(x + z) * &(xp - zp);
    let x3 = (&p + &q).square();
    let z3 = &(&p - &q).square() * x1;
    (x3, z3)
}
