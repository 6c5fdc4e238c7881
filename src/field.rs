// -*- mode: rust; -*-
//
// This file is part of curve255.
// See LICENSE for licensing information.

//! Field arithmetic modulo \\(p = 2^{255} - 19\\), using 16-bit limbs
//! with 64-bit intermediate products.
//!
//! A [`FieldElement`] holds sixteen little-endian 16-bit digits.  Two
//! representation regimes coexist:
//!
//! * *canonical form*: every limb is at most `0xffff` and the
//!   represented integer lies in `[0, p)`;
//! * *relaxed form*: the represented integer may exceed `p` (the top
//!   limb uses its high bit for the overflow), which is what the
//!   modular operators return between reduction passes.
//!
//! Relaxed values are interchangeable with canonical ones for all
//! arithmetic in this module; they are normalized whenever a value
//! leaves the crate through [`FieldElement::as_bytes`] or
//! [`FieldElement::to_limbs`].  The fully unreduced accumulator
//! produced by multiplication lives in the private [`Wide`] type,
//! whose only exit is a reduction, so a missing reduction pass cannot
//! be expressed.

use core::cmp::Ordering;
use core::fmt::Debug;
use core::ops::{Add, Mul, Sub};

use subtle::Choice;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// The curve constant \\((A - 2) / 4 = 121665\\) used by the Montgomery
/// doubling formula.
pub(crate) const SMALL_MULTIPLIER: i64 = 121665;

/// An element of the field \\(\mathbb{Z}/(2^{255}-19)\\).
///
/// The sixteen limbs are little-endian by significance: an element
/// t represents the integer `t[0] + 2^16 t[1] + ... + 2^240 t[15]`.
/// Limbs are stored as `u32` so that the raw (non-modular) adder and
/// the relaxed post-addition form have one bit of headroom; public
/// operations always return limbs at most `0xffff`.
#[derive(Copy, Clone)]
pub struct FieldElement(pub(crate) [u32; 16]);

impl Debug for FieldElement {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "FieldElement({:?})", &self.0[..])
    }
}

impl ConstantTimeEq for FieldElement {
    /// Test equality of the represented residues, in constant time,
    /// by comparing canonical encodings.
    fn ct_eq(&self, other: &FieldElement) -> Choice {
        self.as_bytes().ct_eq(&other.as_bytes())
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &FieldElement) -> bool {
        self.ct_eq(other).into()
    }
}
impl Eq for FieldElement {}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &FieldElement, b: &FieldElement, choice: Choice) -> FieldElement {
        let mut limbs = [0u32; 16];
        for i in 0..16 {
            limbs[i] = u32::conditional_select(&a.0[i], &b.0[i], choice);
        }
        FieldElement(limbs)
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for FieldElement {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl<'a, 'b> Add<&'b FieldElement> for &'a FieldElement {
    type Output = FieldElement;

    /// Field addition.
    ///
    /// The high bit of each operand's top limb stands for a multiple
    /// of \\(2^{255} \equiv 19 \pmod p\\); it is folded back times 19
    /// ahead of the ripple so the carry chain never leaves 16 bits
    /// per limb.  The result is in relaxed form.
    fn add(self, rhs: &'b FieldElement) -> FieldElement {
        let a = &self.0;
        let b = &rhs.0;
        let mut r = [0u32; 16];

        let mut v = ((a[15] >> 15) + (b[15] >> 15)) * 19 + a[0] + b[0];
        r[0] = v & 0xffff;
        for i in 1..15 {
            v = (v >> 16) + a[i] + b[i];
            r[i] = v & 0xffff;
        }
        r[15] = (v >> 16) + (a[15] & 0x7fff) + (b[15] & 0x7fff);

        FieldElement(r)
    }
}

impl<'a, 'b> Sub<&'b FieldElement> for &'a FieldElement {
    type Output = FieldElement;

    /// Field subtraction.
    ///
    /// Mirrors the adder with per-limb bias constants sized so every
    /// intermediate stays non-negative for canonical and relaxed
    /// inputs alike; the biases sum to a multiple of \\(p\\), so the
    /// residue is unchanged.
    fn sub(self, rhs: &'b FieldElement) -> FieldElement {
        let a = &self.0;
        let b = &rhs.0;
        let mut r = [0u32; 16];

        let mut v: i64 = 0x80000
            + ((a[15] >> 15) as i64 - (b[15] >> 15) as i64 - 1) * 19
            + a[0] as i64
            - b[0] as i64;
        r[0] = (v & 0xffff) as u32;
        for i in 1..15 {
            v = (v >> 16) + 0x7fff8 + a[i] as i64 - b[i] as i64;
            r[i] = (v & 0xffff) as u32;
        }
        r[15] = ((v >> 16) + 0x7ff8 + (a[15] & 0x7fff) as i64 - (b[15] & 0x7fff) as i64) as u32;

        FieldElement(r)
    }
}

impl<'a, 'b> Mul<&'b FieldElement> for &'a FieldElement {
    type Output = FieldElement;

    /// Field multiplication.
    ///
    /// Splits each operand into 8-limb halves and computes three
    /// half-width schoolbook products, combined with the Karatsuba
    /// identity
    /// `x*y = (B^2 + B)*x1*y1 + B*(x1 + x0)*(y1 + y0)
    ///        - B*(x1*y1 + x0*y0) + x0*y0`
    /// for `B = 2^128`; the band above \\(2^{256}\\) is folded back
    /// times 38 because \\(2^{256} \equiv 38 \pmod p\\).
    fn mul(self, rhs: &'b FieldElement) -> FieldElement {
        let a = &self.0;
        let b = &rhs.0;

        let x = mul8(&upper_half(a), &upper_half(b));
        let z = mul8(&lower_half(a), &lower_half(b));
        let y = mul8(&half_sums(a), &half_sums(b));

        karatsuba_fold(&x, &y, &z).reduce()
    }
}

impl FieldElement {
    /// Construct a field element from sixteen little-endian 16-bit
    /// limbs.  Any limb pattern is accepted; values at or above
    /// \\(p\\) are valid relaxed representations of their residue.
    pub const fn from_limbs(limbs: [u16; 16]) -> FieldElement {
        let mut r = [0u32; 16];
        let mut i = 0;
        while i < 16 {
            r[i] = limbs[i] as u32;
            i += 1;
        }
        FieldElement(r)
    }

    /// Return the canonical little-endian 16-bit limbs of this
    /// element's residue in `[0, p)`.
    pub fn to_limbs(&self) -> [u16; 16] {
        let c = self.canonical();
        let mut r = [0u16; 16];
        for i in 0..16 {
            r[i] = c.0[i] as u16;
        }
        r
    }

    /// Load a field element from the low 255 bits of a little-endian
    /// 256-bit input.
    ///
    /// # Warning
    ///
    /// This function does not check that the input is the canonical
    /// representative.  It masks the high bit, but it will happily
    /// decode \\(2^{255} - 18\\) to \\(1\\).  Callers that require a
    /// canonical encoding should re-encode with
    /// [`FieldElement::as_bytes`] and compare.
    pub fn from_bytes(bytes: &[u8; 32]) -> FieldElement {
        let mut r = [0u32; 16];
        for i in 0..16 {
            r[i] = bytes[2 * i] as u32 | ((bytes[2 * i + 1] as u32) << 8);
        }
        r[15] &= 0x7fff;
        FieldElement(r)
    }

    /// Serialize this field element to a little-endian 32-byte array.
    /// The encoding is canonical.
    pub fn as_bytes(&self) -> [u8; 32] {
        let c = self.canonical();
        let mut s = [0u8; 32];
        for i in 0..16 {
            s[2 * i] = c.0[i] as u8;
            s[2 * i + 1] = (c.0[i] >> 8) as u8;
        }
        s
    }

    /// Reduce this element in place to canonical limb range.
    ///
    /// The portion of the top limb at or above \\(2^{15}\\) represents
    /// multiples of \\(2^{255} \equiv 19 \pmod p\\); it is multiplied
    /// by 19, rippled back in from limb 0, and the top limb is left
    /// masked to 15 bits plus the final carry.  Reducing an
    /// already-reduced element is a no-op.
    ///
    /// This is the one in-place operation in the crate.
    pub fn reduce(&mut self) {
        let a = &mut self.0;
        let top = a[15];
        a[15] = top & 0x7fff;
        let mut v = (top >> 15) * 19;
        for i in 0..15 {
            v += a[i];
            a[i] = v & 0xffff;
            v >>= 16;
        }
        a[15] += v;
    }

    /// Return the square of this field element.
    ///
    /// Same engine as multiplication, with the half-products
    /// specialized to the symmetric case.
    pub fn square(&self) -> FieldElement {
        let a = &self.0;

        let x = sqr8(&upper_half(a));
        let z = sqr8(&lower_half(a));
        let y = sqr8(&half_sums(a));

        karatsuba_fold(&x, &y, &z).reduce()
    }

    /// Multiply by the curve constant 121665 = \\((A - 2)/4\\).
    ///
    /// A limb-wise multiply-accumulate with native 64-bit carries,
    /// followed by a reduction pass.
    pub fn mul_small(&self) -> FieldElement {
        let a = &self.0;
        let mut r = [0i64; 16];

        let mut v = a[0] as i64 * SMALL_MULTIPLIER;
        r[0] = v & 0xffff;
        for i in 1..15 {
            v = (v >> 16) + a[i] as i64 * SMALL_MULTIPLIER;
            r[i] = v & 0xffff;
        }
        r[15] = (v >> 16) + a[15] as i64 * SMALL_MULTIPLIER;

        Wide(r).reduce()
    }

    /// Return the multiplicative inverse of this field element,
    /// computed as \\(a^{p-2}\\) by Fermat's little theorem.
    ///
    /// The square-and-multiply chain below is fixed: the same 254
    /// squarings and 252 multiplications run for every input, so the
    /// sequence of field operations never depends on the value being
    /// inverted.  Do not replace it with a generic exponentiation
    /// loop that branches on exponent bits.
    ///
    /// Zero has no inverse; `invert` maps it to zero rather than
    /// faulting, and callers that care must check beforehand.
    pub fn invert(&self) -> FieldElement {
        let c = *self;
        let mut a = *self;

        // Each iteration takes the running exponent e to 2e + 1,
        // so the loop leaves a = c^(2^250 - 1).
        for _ in 0..249 {
            a = a.square();
            a = &a * &c;
        }
        // 2^252 - 3
        a = a.square();
        a = a.square();
        a = &a * &c;
        // 2^254 - 11
        a = a.square();
        a = a.square();
        a = &a * &c;
        // 2^255 - 21 = p - 2
        a = a.square();
        &a * &c
    }

    /// Three-way comparison of the raw 256-bit integers held in the
    /// limbs, most significant limb first.
    ///
    /// This compares representations, not residues: a relaxed
    /// encoding of a residue compares greater than its canonical
    /// encoding.  Every limb is visited regardless of where the first
    /// difference occurs, to avoid data-dependent early exit.
    pub fn compare(&self, other: &FieldElement) -> Ordering {
        let mut r: i64 = 0;
        for i in (0..16).rev() {
            let d = self.0[i] as i64 - other.0[i] as i64;
            r += d.signum() * (1 - r * r);
        }
        match r {
            -1 => Ordering::Less,
            0 => Ordering::Equal,
            _ => Ordering::Greater,
        }
    }

    /// Raw 256-bit ripple-carry addition, with no modular semantics.
    ///
    /// The top limb absorbs the carry out and may occupy 17 bits.
    pub fn add_raw(&self, rhs: &FieldElement) -> FieldElement {
        let a = &self.0;
        let b = &rhs.0;
        let mut r = [0u32; 16];

        let mut v = a[0] + b[0];
        r[0] = v & 0xffff;
        for i in 1..15 {
            v = (v >> 16) + a[i] + b[i];
            r[i] = v & 0xffff;
        }
        r[15] = (v >> 16) + a[15] + b[15];

        FieldElement(r)
    }

    /// Raw 256-bit ripple-borrow subtraction, with no modular
    /// semantics.
    ///
    /// Well-defined only when `self >= rhs` as raw integers (see
    /// [`FieldElement::compare`]); the caller is responsible for the
    /// ordering.
    pub fn sub_raw(&self, rhs: &FieldElement) -> FieldElement {
        debug_assert!(self.compare(rhs) != Ordering::Less);
        let a = &self.0;
        let b = &rhs.0;
        let mut r = [0u32; 16];

        let mut v: i64 = 0x80000 + a[0] as i64 - b[0] as i64;
        r[0] = (v & 0xffff) as u32;
        for i in 1..15 {
            v = (v >> 16) + 0x7fff8 + a[i] as i64 - b[i] as i64;
            r[i] = (v & 0xffff) as u32;
        }
        r[15] = ((v >> 16) - 8 + a[15] as i64 - b[15] as i64) as u32;

        FieldElement(r)
    }

    /// Read bit `index` (little-endian bit order over the limbs).
    pub fn bit(&self, index: usize) -> u8 {
        debug_assert!(index < 256);
        ((self.0[index >> 4] >> (index & 0xf)) & 1) as u8
    }

    /// Set bit `index` to `value` (0 or 1).
    ///
    /// The target bit is cleared before the new value is written, so
    /// no assumption is made about its prior state.
    pub fn set_bit(&mut self, index: usize, value: u8) {
        debug_assert!(index < 256);
        debug_assert!(value <= 1);
        let shift = index & 0xf;
        let limb = &mut self.0[index >> 4];
        *limb = (*limb & !(1 << shift)) | ((value as u32) << shift);
    }

    /// Return the canonical representative of this element's residue.
    ///
    /// Two reduction passes bring the value below \\(2^{255}\\); the
    /// remaining possible excess of exactly one \\(p\\) is removed
    /// with a branch-free conditional subtraction: the quotient bit
    /// is the bit-255 carry of `value + 19`, since
    /// `value >= p  <=>  value + 19 >= 2^255`.
    fn canonical(&self) -> FieldElement {
        let mut c = *self;
        c.reduce();
        c.reduce();
        let a = &mut c.0;

        let mut q = (a[0] + 19) >> 16;
        for i in 1..15 {
            q = (a[i] + q) >> 16;
        }
        q = (a[15] + q) >> 15;

        // value - p*q = value + 19*q - 2^255*q
        let mut v = 19 * q;
        for i in 0..15 {
            v += a[i];
            a[i] = v & 0xffff;
            v >>= 16;
        }
        a[15] = (a[15] + v) & 0x7fff;

        c
    }
}

/// A fully unreduced 16-limb accumulator, as produced by the
/// multiplication engine before its reduction pass.
///
/// Limbs 0 through 14 hold masked 16-bit digits; limb 15 carries the
/// accumulated overflow and may be tens of bits wide.  The only way
/// out of this type is [`Wide::reduce`].
struct Wide([i64; 16]);

impl Wide {
    /// Fold the portion of the top limb at or above \\(2^{15}\\) back
    /// in times 19 and ripple the carries, producing a relaxed
    /// [`FieldElement`].
    fn reduce(self) -> FieldElement {
        let a = self.0;
        let mut r = [0u32; 16];

        let top = a[15] & 0x7fff;
        let mut v = (a[15] >> 15) * 19;
        for i in 0..15 {
            v += a[i];
            r[i] = (v & 0xffff) as u32;
            v >>= 16;
        }
        r[15] = (top + v) as u32;

        FieldElement(r)
    }
}

#[inline(always)]
fn lower_half(a: &[u32; 16]) -> [i64; 8] {
    [
        a[0] as i64,
        a[1] as i64,
        a[2] as i64,
        a[3] as i64,
        a[4] as i64,
        a[5] as i64,
        a[6] as i64,
        a[7] as i64,
    ]
}

#[inline(always)]
fn upper_half(a: &[u32; 16]) -> [i64; 8] {
    [
        a[8] as i64,
        a[9] as i64,
        a[10] as i64,
        a[11] as i64,
        a[12] as i64,
        a[13] as i64,
        a[14] as i64,
        a[15] as i64,
    ]
}

#[inline(always)]
fn half_sums(a: &[u32; 16]) -> [i64; 8] {
    [
        (a[0] + a[8]) as i64,
        (a[1] + a[9]) as i64,
        (a[2] + a[10]) as i64,
        (a[3] + a[11]) as i64,
        (a[4] + a[12]) as i64,
        (a[5] + a[13]) as i64,
        (a[6] + a[14]) as i64,
        (a[7] + a[15]) as i64,
    ]
}

/// 8x8-limb schoolbook product.
///
/// Inputs may carry one bit of excess (half-sum limbs are 17 bits
/// wide), so each coefficient is a sum of at most eight 34-bit
/// products and stays far below the i64 range.  Limbs 0..14 of the
/// result are masked to 16 bits; limb 15 keeps the carry out.
#[rustfmt::skip] // keep one coefficient per line
fn mul8(a: &[i64; 8], b: &[i64; 8]) -> [i64; 16] {
    let mut r = [0i64; 16];
    let mut v: i64;

    v = a[0] * b[0];
    r[0] = v & 0xffff;
    v = (v >> 16) + a[0] * b[1] + a[1] * b[0];
    r[1] = v & 0xffff;
    v = (v >> 16) + a[0] * b[2] + a[1] * b[1] + a[2] * b[0];
    r[2] = v & 0xffff;
    v = (v >> 16) + a[0] * b[3] + a[1] * b[2] + a[2] * b[1] + a[3] * b[0];
    r[3] = v & 0xffff;
    v = (v >> 16) + a[0] * b[4] + a[1] * b[3] + a[2] * b[2] + a[3] * b[1] + a[4] * b[0];
    r[4] = v & 0xffff;
    v = (v >> 16) + a[0] * b[5] + a[1] * b[4] + a[2] * b[3] + a[3] * b[2] + a[4] * b[1] + a[5] * b[0];
    r[5] = v & 0xffff;
    v = (v >> 16) + a[0] * b[6] + a[1] * b[5] + a[2] * b[4] + a[3] * b[3] + a[4] * b[2] + a[5] * b[1] + a[6] * b[0];
    r[6] = v & 0xffff;
    v = (v >> 16) + a[0] * b[7] + a[1] * b[6] + a[2] * b[5] + a[3] * b[4] + a[4] * b[3] + a[5] * b[2] + a[6] * b[1] + a[7] * b[0];
    r[7] = v & 0xffff;
    v = (v >> 16) + a[1] * b[7] + a[2] * b[6] + a[3] * b[5] + a[4] * b[4] + a[5] * b[3] + a[6] * b[2] + a[7] * b[1];
    r[8] = v & 0xffff;
    v = (v >> 16) + a[2] * b[7] + a[3] * b[6] + a[4] * b[5] + a[5] * b[4] + a[6] * b[3] + a[7] * b[2];
    r[9] = v & 0xffff;
    v = (v >> 16) + a[3] * b[7] + a[4] * b[6] + a[5] * b[5] + a[6] * b[4] + a[7] * b[3];
    r[10] = v & 0xffff;
    v = (v >> 16) + a[4] * b[7] + a[5] * b[6] + a[6] * b[5] + a[7] * b[4];
    r[11] = v & 0xffff;
    v = (v >> 16) + a[5] * b[7] + a[6] * b[6] + a[7] * b[5];
    r[12] = v & 0xffff;
    v = (v >> 16) + a[6] * b[7] + a[7] * b[6];
    r[13] = v & 0xffff;
    v = (v >> 16) + a[7] * b[7];
    r[14] = v & 0xffff;
    r[15] = v >> 16;

    r
}

/// 8-limb schoolbook square; `mul8` with the cross terms doubled.
#[rustfmt::skip] // keep one coefficient per line
fn sqr8(a: &[i64; 8]) -> [i64; 16] {
    let mut r = [0i64; 16];
    let mut v: i64;

    v = a[0] * a[0];
    r[0] = v & 0xffff;
    v = (v >> 16) + 2 * a[0] * a[1];
    r[1] = v & 0xffff;
    v = (v >> 16) + 2 * a[0] * a[2] + a[1] * a[1];
    r[2] = v & 0xffff;
    v = (v >> 16) + 2 * a[0] * a[3] + 2 * a[1] * a[2];
    r[3] = v & 0xffff;
    v = (v >> 16) + 2 * a[0] * a[4] + 2 * a[1] * a[3] + a[2] * a[2];
    r[4] = v & 0xffff;
    v = (v >> 16) + 2 * a[0] * a[5] + 2 * a[1] * a[4] + 2 * a[2] * a[3];
    r[5] = v & 0xffff;
    v = (v >> 16) + 2 * a[0] * a[6] + 2 * a[1] * a[5] + 2 * a[2] * a[4] + a[3] * a[3];
    r[6] = v & 0xffff;
    v = (v >> 16) + 2 * a[0] * a[7] + 2 * a[1] * a[6] + 2 * a[2] * a[5] + 2 * a[3] * a[4];
    r[7] = v & 0xffff;
    v = (v >> 16) + 2 * a[1] * a[7] + 2 * a[2] * a[6] + 2 * a[3] * a[5] + a[4] * a[4];
    r[8] = v & 0xffff;
    v = (v >> 16) + 2 * a[2] * a[7] + 2 * a[3] * a[6] + 2 * a[4] * a[5];
    r[9] = v & 0xffff;
    v = (v >> 16) + 2 * a[3] * a[7] + 2 * a[4] * a[6] + a[5] * a[5];
    r[10] = v & 0xffff;
    v = (v >> 16) + 2 * a[4] * a[7] + 2 * a[5] * a[6];
    r[11] = v & 0xffff;
    v = (v >> 16) + 2 * a[5] * a[7] + a[6] * a[6];
    r[12] = v & 0xffff;
    v = (v >> 16) + 2 * a[6] * a[7];
    r[13] = v & 0xffff;
    v = (v >> 16) + a[7] * a[7];
    r[14] = v & 0xffff;
    r[15] = v >> 16;

    r
}

/// Combine the three half-width products `x = hi*hi`, `z = lo*lo`,
/// `y = (hi+lo)*(hi+lo)` into a single unreduced field element.
///
/// The cross band `y - x - z` sits at \\(2^{128}\\); the part of `x`
/// at or above \\(2^{256}\\) folds back times 38.  The per-limb bias
/// constants keep every intermediate non-negative (the cross-band
/// limb differences can dip to `-2 * 0xffff`) and sum to a multiple
/// of \\(p\\).
fn karatsuba_fold(x: &[i64; 16], y: &[i64; 16], z: &[i64; 16]) -> Wide {
    let mut r = [0i64; 16];

    let mut v = 0x800000 + z[0] + (y[8] - x[8] - z[8] + x[0] - 0x80) * 38;
    r[0] = v & 0xffff;
    for i in 1..8 {
        v = 0x7fff80 + (v >> 16) + z[i] + (y[i + 8] - x[i + 8] - z[i + 8] + x[i]) * 38;
        r[i] = v & 0xffff;
    }
    for i in 8..15 {
        v = 0x7fff80 + (v >> 16) + z[i] + y[i - 8] - x[i - 8] - z[i - 8] + x[i] * 38;
        r[i] = v & 0xffff;
    }
    r[15] = 0x7fff80 + (v >> 16) + z[15] + y[7] - x[7] - z[7] + x[15] * 38;

    Wide(r)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::constants::{BASE, ONE, PRIME, ZERO};

    /// a = 7^97 mod p
    ///   = 2661010676085382156031142308005202675864798981226930323217\
    ///     8566585424581889934
    static A_BYTES: [u8; 32] = [
        0x8e, 0x0f, 0xa6, 0x92, 0x03, 0xdd, 0x5a, 0xd6,
        0xa6, 0x41, 0xe1, 0xe7, 0xf0, 0xa0, 0xcb, 0x01,
        0xa1, 0x6b, 0xbd, 0x08, 0x34, 0xcc, 0xd4, 0x5c,
        0xfd, 0x9a, 0x96, 0xad, 0x64, 0xc9, 0xd4, 0x3a,
    ];

    /// Byte representation of a^2
    static ASQ_BYTES: [u8; 32] = [
        0xc8, 0xe8, 0x64, 0x6f, 0xc9, 0x3c, 0x68, 0x3c,
        0xa8, 0xaf, 0x33, 0xc2, 0xe3, 0x30, 0xdb, 0x14,
        0x0f, 0x88, 0x00, 0x0a, 0x73, 0xd5, 0x91, 0xd2,
        0xc1, 0x0b, 0xbf, 0x6c, 0x52, 0x28, 0x6b, 0x50,
    ];

    /// Byte representation of 1/a
    static AINV_BYTES: [u8; 32] = [
        0x23, 0xbb, 0x3f, 0xb2, 0xc6, 0x0b, 0xfd, 0x2d,
        0xb3, 0x00, 0xc6, 0xdf, 0x0e, 0x10, 0xdf, 0x0b,
        0xf5, 0x01, 0x1b, 0xb5, 0x07, 0xe1, 0x1d, 0x9b,
        0x07, 0xcc, 0xa8, 0xd8, 0xce, 0xf0, 0x42, 0x68,
    ];

    /// Byte representation of a * 121665
    static A_MUL_SMALL_BYTES: [u8; 32] = [
        0x4b, 0xa3, 0x16, 0x5b, 0x02, 0xbf, 0x27, 0x05,
        0x17, 0x3b, 0x02, 0xd5, 0x69, 0xdb, 0x52, 0x48,
        0x36, 0x12, 0xcc, 0xae, 0x6d, 0x65, 0xec, 0x68,
        0x93, 0x75, 0xd1, 0x84, 0xa6, 0xf0, 0xb4, 0x41,
    ];

    fn a() -> FieldElement {
        FieldElement::from_bytes(&A_BYTES)
    }

    #[test]
    fn from_bytes_round_trips() {
        assert_eq!(a().as_bytes(), A_BYTES);
    }

    #[test]
    fn addition_commutes_and_has_identity() {
        let a = a();
        let b = BASE;
        assert_eq!(&a + &b, &b + &a);
        assert_eq!(&a + &ZERO, a);
        assert_eq!(&ZERO + &ZERO, ZERO);
    }

    #[test]
    fn addition_associates() {
        let a = a();
        let b = a.square();
        let c = BASE;
        assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
    }

    #[test]
    fn subtraction_inverts_addition() {
        let a = a();
        let b = a.invert();
        assert_eq!(&(&a + &b) - &b, a);
        assert_eq!(&a - &a, ZERO);
    }

    #[test]
    fn a_mul_a_vs_known() {
        let a = a();
        assert_eq!((&a * &a).as_bytes(), ASQ_BYTES);
    }

    #[test]
    fn square_matches_multiply() {
        let a = a();
        assert_eq!(a.square(), &a * &a);
        assert_eq!(a.square().as_bytes(), ASQ_BYTES);
    }

    #[test]
    fn multiplication_identities() {
        let a = a();
        assert_eq!(&a * &ONE, a);
        assert_eq!(&a * &ZERO, ZERO);
    }

    #[test]
    fn a_invert_vs_known() {
        let a = a();
        let ainv = a.invert();
        assert_eq!(ainv.as_bytes(), AINV_BYTES);
        assert_eq!(&a * &ainv, ONE);
    }

    #[test]
    fn invert_zero_is_zero() {
        assert_eq!(ZERO.invert(), ZERO);
    }

    #[test]
    fn mul_small_vs_known_and_vs_full_multiply() {
        let a = a();
        assert_eq!(a.mul_small().as_bytes(), A_MUL_SMALL_BYTES);

        // 121665 = 0x1db41
        let small = FieldElement::from_limbs([
            0xdb41, 0x1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        ]);
        assert_eq!(a.mul_small(), &a * &small);
    }

    #[test]
    fn reduce_is_idempotent() {
        // a + p is a relaxed encoding of a's residue.
        let mut x = a().add_raw(&PRIME);
        x.reduce();
        let once = x.0;
        x.reduce();
        assert_eq!(x.0, once);
        assert_eq!(x, a());
    }

    #[test]
    fn reduced_value_is_below_prime() {
        let all_ones = FieldElement::from_limbs([0xffff; 16]);
        let canonical = FieldElement::from_limbs(all_ones.to_limbs());
        assert_eq!(canonical.compare(&PRIME), core::cmp::Ordering::Less);
    }

    #[test]
    fn to_limbs_canonicalizes() {
        // p + 1 reduces to 1.
        let p_plus_one = PRIME.add_raw(&ONE);
        assert_eq!(p_plus_one.to_limbs(), ONE.to_limbs());
        assert_eq!(p_plus_one, ONE);
    }

    #[test]
    fn compare_orders_raw_integers() {
        use core::cmp::Ordering;
        let a = a();
        assert_eq!(ZERO.compare(&ONE), Ordering::Less);
        assert_eq!(BASE.compare(&ONE), Ordering::Greater);
        assert_eq!(a.compare(&a), Ordering::Equal);
        assert_eq!(PRIME.compare(&BASE), Ordering::Greater);
        // Raw view: p compares greater than 0 even though both
        // represent the zero residue.
        assert_eq!(PRIME.compare(&ZERO), Ordering::Greater);
    }

    #[test]
    fn raw_add_sub_round_trip() {
        use core::cmp::Ordering;
        let a = a();
        let sum = a.add_raw(&BASE);
        assert_eq!(sum.sub_raw(&BASE).compare(&a), Ordering::Equal);
    }

    #[test]
    fn bit_accessors() {
        // 9 = 0b1001
        assert_eq!(BASE.bit(0), 1);
        assert_eq!(BASE.bit(1), 0);
        assert_eq!(BASE.bit(3), 1);
        assert_eq!(BASE.bit(255), 0);

        let mut x = ZERO;
        x.set_bit(5, 1);
        // Setting an already-set bit must be harmless.
        x.set_bit(5, 1);
        assert_eq!(x, FieldElement::from_limbs([32, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]));
        x.set_bit(5, 0);
        assert_eq!(x, ZERO);
    }

    #[test]
    fn conditional_select() {
        use subtle::ConditionallySelectable;
        let x = FieldElement::conditional_select(&ZERO, &BASE, subtle::Choice::from(0));
        assert_eq!(x, ZERO);
        let y = FieldElement::conditional_select(&ZERO, &BASE, subtle::Choice::from(1));
        assert_eq!(y, BASE);
    }

    #[test]
    fn relaxed_and_canonical_forms_compare_equal() {
        // p + 9 and 9 are the same residue.
        assert_eq!(PRIME.add_raw(&BASE), BASE);
    }
}
