//! Bounds of the single-value parameter families.

use primitive_types::U256;
use serde::Serialize;

/// Allowed range and fallback of a `u64` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct U64Bounds {
    pub min: u64,
    pub max: u64,
    pub default: u64,
}

impl U64Bounds {
    /// The stored word if it lies in `[min, max]`.
    pub fn check(&self, word: U256) -> Option<u64> {
        if word > U256::from(u64::MAX) {
            return None;
        }
        let value = word.as_u64();
        (self.min..=self.max).contains(&value).then_some(value)
    }
}

pub const BLOCK_SIZE_BOUNDS: U64Bounds = U64Bounds {
    min: 500_000,
    max: 32_000_000,
    default: 2_000_000,
};

pub const MIN_GAS_PRICE_BOUNDS: U64Bounds = U64Bounds {
    min: 1,
    max: 10_000,
    default: 1,
};

pub const BLOCK_GAS_LIMIT_BOUNDS: U64Bounds = U64Bounds {
    min: 1_000_000,
    max: 1_000_000_000,
    default: 1_000_000_000,
};
