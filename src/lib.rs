// -*- mode: rust; -*-
//
// This file is part of curve255.
// See LICENSE for licensing information.

//! Arithmetic core for Curve25519: the finite field \\(\mathbb{Z}/(2^{255}-19)\\)
//! on sixteen 16-bit limbs, the Montgomery ladder step primitives
//! (x-only doubling and differential addition), and a base-32 text
//! codec for 255-bit values.
//!
//! This crate deliberately stops at the arithmetic contract.  Scalar
//! multiplication drivers, key generation and clamping, signatures,
//! and wire encodings of keys all live in higher layers that consume
//! these primitives.  In particular, no randomness is managed here and
//! no point-validation policy is enforced; a caller that needs to
//! reject low-order or off-curve inputs must do so itself.
//!
//! Every operation is a pure function over value types: inputs are
//! never mutated (the documented exception is the in-place
//! [`field::FieldElement::reduce`]), results are freshly allocated on
//! the stack, and no state is shared, so the whole crate is safe to
//! use from concurrent tasks without synchronization.
//!
//! # Example
//!
//! Doubling the curve base point (u = 9) in projective (X:Z)
//! coordinates and recovering the affine u-coordinate:
//!
//! ```
//! use curve255::{constants, montgomery};
//!
//! let (x2, z2) = montgomery::double(&constants::BASE, &constants::ONE);
//! let u2 = &x2 * &z2.invert();
//! assert_ne!(u2, constants::BASE);
//! ```

#![no_std]
#![deny(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

pub mod base32;
pub mod constants;
pub mod field;
pub mod montgomery;
