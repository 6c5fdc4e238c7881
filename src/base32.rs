// -*- mode: rust; -*-
//
// This file is part of curve255.
// See LICENSE for licensing information.

//! Base-32 text codec for 255-bit values.
//!
//! The 255 meaningful bits of a field element are processed five at a
//! time, least-significant group first, and each group is mapped to
//! one character of the alphabet `a-z 2-7`.  The most significant
//! group comes first in the encoded text, so encodings sort like the
//! integers they represent.
//!
//! The codec works on the bit view of the limbs and carries no field
//! semantics: it neither reduces its input nor interprets it modulo
//! \\(p\\).  Encode a canonical element (see
//! [`FieldElement::to_limbs`](crate::field::FieldElement::to_limbs))
//! if a canonical string is required.

use core::fmt;

use crate::constants;
use crate::field::FieldElement;

/// Length in characters of an encoded field element: 51 five-bit
/// groups covering bits 0 through 254.
pub const ENCODED_LEN: usize = 51;

const ALPHABET: &[u8; 32] = b"abcdefghijklmnopqrstuvwxyz234567";

/// Reasons a base-32 string can fail to decode.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DecodeError {
    /// A byte of the input is outside the `a-z 2-7` alphabet.
    InvalidCharacter(u8),
    /// The input is longer than [`ENCODED_LEN`] characters.
    InputTooLong(usize),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            DecodeError::InvalidCharacter(byte) => {
                write!(f, "Invalid base-32 character {:#04x}", byte)
            }
            DecodeError::InputTooLong(len) => {
                write!(f, "Input of {} characters exceeds {}", len, ENCODED_LEN)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DecodeError {}

/// Encode the low 255 bits of `n` as [`ENCODED_LEN`] ASCII bytes.
pub fn encode(n: &FieldElement) -> [u8; ENCODED_LEN] {
    let mut out = [0u8; ENCODED_LEN];
    for i in 0..ENCODED_LEN {
        let c = 5 * i;
        let group = n.bit(c)
            | (n.bit(c + 1) << 1)
            | (n.bit(c + 2) << 2)
            | (n.bit(c + 3) << 3)
            | (n.bit(c + 4) << 4);
        out[ENCODED_LEN - 1 - i] = ALPHABET[group as usize];
    }
    out
}

/// Decode a base-32 string produced by [`encode`].
///
/// Characters are consumed from the least-significant (rightmost)
/// end, so strings shorter than [`ENCODED_LEN`] decode to the
/// corresponding low-order value.
pub fn decode(text: &str) -> Result<FieldElement, DecodeError> {
    let bytes = text.as_bytes();
    if bytes.len() > ENCODED_LEN {
        return Err(DecodeError::InputTooLong(bytes.len()));
    }

    let mut r = constants::ZERO;
    for (i, &byte) in bytes.iter().rev().enumerate() {
        let value = match byte {
            b'a'..=b'z' => byte - b'a',
            b'2'..=b'7' => byte - b'2' + 26,
            _ => return Err(DecodeError::InvalidCharacter(byte)),
        };
        let c = 5 * i;
        for k in 0..5 {
            r.set_bit(c + k, (value >> k) & 1);
        }
    }
    Ok(r)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::constants::{BASE, ZERO};

    /// a = 7^97 mod p, as in the field tests.
    static A_BYTES: [u8; 32] = [
        0x8e, 0x0f, 0xa6, 0x92, 0x03, 0xdd, 0x5a, 0xd6,
        0xa6, 0x41, 0xe1, 0xe7, 0xf0, 0xa0, 0xcb, 0x01,
        0xa1, 0x6b, 0xbd, 0x08, 0x34, 0xcc, 0xd4, 0x5c,
        0xfd, 0x9a, 0x96, 0xad, 0x64, 0xc9, 0xd4, 0x3a,
    ];

    static A_BASE32: &[u8; ENCODED_LEN] =
        b"owuzfsk3fu27vonjtbubc6wxiibzoqpbz7bigtnmww5aojkmd4o";

    #[test]
    fn encode_zero_is_all_a() {
        assert_eq!(encode(&ZERO), [b'a'; ENCODED_LEN]);
    }

    #[test]
    fn encode_base_point() {
        // 9 = 0b01001 -> 'j' in the lowest group.
        let mut expected = [b'a'; ENCODED_LEN];
        expected[ENCODED_LEN - 1] = b'j';
        assert_eq!(encode(&BASE), expected);
    }

    #[test]
    fn encode_vs_known() {
        let a = FieldElement::from_bytes(&A_BYTES);
        assert_eq!(&encode(&a), A_BASE32);
    }

    #[test]
    fn round_trip() {
        let a = FieldElement::from_bytes(&A_BYTES);
        let text = encode(&a);
        let decoded = decode(core::str::from_utf8(&text).unwrap()).unwrap();
        assert_eq!(decoded, a);
        assert_eq!(decoded.compare(&a), core::cmp::Ordering::Equal);
    }

    #[test]
    fn short_input_decodes_low_order_value() {
        assert_eq!(decode("j").unwrap(), BASE);
        assert_eq!(decode("").unwrap(), ZERO);
    }

    #[test]
    fn rejects_characters_outside_alphabet() {
        assert_eq!(decode("abc!").unwrap_err(), DecodeError::InvalidCharacter(b'!'));
        // '0' and '1' are deliberately absent from the alphabet.
        assert_eq!(decode("0").unwrap_err(), DecodeError::InvalidCharacter(b'0'));
        assert_eq!(decode("1").unwrap_err(), DecodeError::InvalidCharacter(b'1'));
    }

    #[test]
    fn rejects_over_length_input() {
        let text = "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"; // 52 * 'a'
        assert_eq!(decode(text).unwrap_err(), DecodeError::InputTooLong(52));
    }
}
