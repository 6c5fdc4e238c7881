// -*- mode: rust; -*-
//
// This file is part of curve255.
// See LICENSE for licensing information.

//! Field-element constants used across the crate and by callers.

use crate::field::FieldElement;

/// The additive identity of the field.
pub const ZERO: FieldElement = FieldElement([0; 16]);

/// The multiplicative identity of the field.
pub const ONE: FieldElement =
    FieldElement([1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);

/// The u-coordinate of the Curve25519 base point.
pub const BASE: FieldElement =
    FieldElement([9, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);

/// The field modulus \\(p = 2^{255} - 19\\) as raw limbs.
///
/// As a residue this is just zero; it is useful to callers working
/// with the raw 256-bit integer view of the limbs.
pub const PRIME: FieldElement = FieldElement([
    0xffff - 18,
    0xffff,
    0xffff,
    0xffff,
    0xffff,
    0xffff,
    0xffff,
    0xffff,
    0xffff,
    0xffff,
    0xffff,
    0xffff,
    0xffff,
    0xffff,
    0xffff,
    0x7fff,
]);
