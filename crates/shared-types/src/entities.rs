//! # Core Value Types
//!
//! ## Clusters
//!
//! - **Chain**: [`Hash256`], [`BlockHeight`], [`Amount`]
//! - **Virtual Machine**: [`H160`], [`H256`], [`U256`] (big-endian words)
//! - **Literals**: `const` hex decoding for pinned values

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use sha2::{Digest, Sha256};

use crate::errors::HexError;

// Re-export the 256/160-bit primitives used for VM words and PoW targets
pub use primitive_types::{H160, H256, U256};

// =============================================================================
// CLUSTER A: THE CHAIN
// =============================================================================

/// Height of a block in the chain.
pub type BlockHeight = u32;

/// Monetary amount in base units.
pub type Amount = i64;

/// Base units per coin.
pub const COIN: Amount = 100_000_000;

/// A 256-bit hash in serialized (little-endian) byte order.
///
/// The display form is byte-reversed, the convention used for block and
/// transaction ids. `Hash256::from_display_hex("00004efa…")` therefore yields
/// bytes `[.., 0x4e, 0x00, 0x00]`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Hash256(pub [u8; 32]);

impl Hash256 {
    /// The all-zero hash (null previous-block reference).
    pub const ZERO: Self = Self([0u8; 32]);

    /// Creates a hash from serialized bytes.
    #[must_use]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Decodes a display-order hex literal (64 digits, no prefix).
    ///
    /// Panics in `const` evaluation if the literal is malformed.
    #[must_use]
    pub const fn from_display_hex(s: &str) -> Self {
        let raw: [u8; 32] = decode_hex_array(s);
        let mut out = [0u8; 32];
        let mut i = 0;
        while i < 32 {
            out[i] = raw[31 - i];
            i += 1;
        }
        Self(out)
    }

    /// Decodes a hex literal whose bytes are already in serialized order.
    #[must_use]
    pub const fn from_byte_hex(s: &str) -> Self {
        Self(decode_hex_array(s))
    }

    /// Returns the serialized bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns true if every byte is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Interprets the hash as a little-endian 256-bit integer, the form
    /// compared against proof-of-work targets.
    #[must_use]
    pub fn to_arith(&self) -> U256 {
        U256::from_little_endian(&self.0)
    }

    /// Display-order hex string.
    #[must_use]
    pub fn to_display_hex(&self) -> String {
        let mut reversed = self.0;
        reversed.reverse();
        hex::encode(reversed)
    }
}

impl fmt::Debug for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash256({})", self.to_display_hex())
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_hex())
    }
}

impl FromStr for Hash256 {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        if digits.len() != 64 {
            return Err(HexError::InvalidLength {
                expected: 64,
                actual: digits.len(),
            });
        }
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(digits, &mut bytes)?;
        bytes.reverse();
        Ok(Self(bytes))
    }
}

impl Serialize for Hash256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_display_hex())
    }
}

impl From<[u8; 32]> for Hash256 {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

/// Double SHA-256, the block and transaction id hash.
#[must_use]
pub fn sha256d(data: &[u8]) -> Hash256 {
    let first = Sha256::digest(data);
    Hash256(Sha256::digest(first).into())
}

// =============================================================================
// CLUSTER B: LITERALS
// =============================================================================

/// Decodes `N` bytes from a hex literal of exactly `2 * N` digits.
///
/// Intended for `const` items; a malformed literal fails compilation.
#[must_use]
pub const fn decode_hex_array<const N: usize>(s: &str) -> [u8; N] {
    let digits = s.as_bytes();
    assert!(digits.len() == 2 * N, "hex literal has the wrong length");
    let mut out = [0u8; N];
    let mut i = 0;
    while i < N {
        out[i] = (hex_nibble(digits[2 * i]) << 4) | hex_nibble(digits[2 * i + 1]);
        i += 1;
    }
    out
}

const fn hex_nibble(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => panic!("invalid hex digit in literal"),
    }
}

/// Builds a VM address from a 40-digit hex literal.
#[must_use]
pub const fn h160_from_hex(s: &str) -> H160 {
    H160(decode_hex_array(s))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const GENESIS: Hash256 =
        Hash256::from_display_hex("00004efa50a2acae549b94d8cf62dd14d40ba395ee20e5b1594771aa5243121b");

    #[test]
    fn test_display_hex_reverses_bytes() {
        assert_eq!(GENESIS.0[31], 0x00);
        assert_eq!(GENESIS.0[29], 0x4e);
        assert_eq!(GENESIS.0[0], 0x1b);
        assert_eq!(
            GENESIS.to_string(),
            "00004efa50a2acae549b94d8cf62dd14d40ba395ee20e5b1594771aa5243121b"
        );
    }

    #[test]
    fn test_byte_hex_keeps_order() {
        let h = Hash256::from_byte_hex(
            "e965ffd002cd6ad0e2dc402b8044de833e06b23127ea8c3d80aec91410771495",
        );
        assert_eq!(h.0[0], 0xe9);
        assert_eq!(h.0[31], 0x95);
    }

    #[test]
    fn test_from_str_matches_const_decoding() {
        let parsed: Hash256 = "0x00004efa50a2acae549b94d8cf62dd14d40ba395ee20e5b1594771aa5243121b"
            .parse()
            .unwrap();
        assert_eq!(parsed, GENESIS);
    }

    #[test]
    fn test_from_str_rejects_bad_input() {
        assert!(matches!(
            "abcd".parse::<Hash256>(),
            Err(HexError::InvalidLength { expected: 64, actual: 4 })
        ));
        let bad = "zz".repeat(32);
        assert!(matches!(bad.parse::<Hash256>(), Err(HexError::InvalidDigits(_))));
    }

    #[test]
    fn test_arith_form_has_leading_zero_bits() {
        // Display starts with 0000, so the top 16 bits of the integer are zero.
        assert!(GENESIS.to_arith() <= (U256::MAX >> 16));
    }

    #[test]
    fn test_sha256d_known_vector() {
        // sha256d("") = 5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456
        let h = sha256d(b"");
        assert_eq!(
            hex::encode(h.0),
            "5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456"
        );
    }

    #[test]
    fn test_h160_literal() {
        let a = h160_from_hex("0000000000000000000000000000000000000080");
        assert_eq!(a.0[19], 0x80);
        assert!(a.0[..19].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_hash_serializes_as_display_hex() {
        let json = serde_json::to_string(&GENESIS).unwrap();
        assert_eq!(
            json,
            "\"00004efa50a2acae549b94d8cf62dd14d40ba395ee20e5b1594771aa5243121b\""
        );
    }
}
