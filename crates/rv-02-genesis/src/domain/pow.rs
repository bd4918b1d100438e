//! Compact difficulty targets.

use shared_types::{Hash256, U256};

use crate::errors::{GenesisError, Result};

/// Expands compact `bits` into a 256-bit target.
pub fn compact_to_target(bits: u32) -> Result<U256> {
    let exponent = bits >> 24;
    let mantissa = bits & 0x007f_ffff;
    let negative = mantissa != 0 && bits & 0x0080_0000 != 0;
    let overflow = mantissa != 0
        && (exponent > 34 || (mantissa > 0xff && exponent > 33) || (mantissa > 0xffff && exponent > 32));
    if negative || overflow {
        return Err(GenesisError::InvalidTarget(bits));
    }

    let target = if exponent <= 3 {
        U256::from(mantissa >> (8 * (3 - exponent)))
    } else {
        U256::from(mantissa) << (8 * (exponent - 3)) as usize
    };
    if target.is_zero() {
        return Err(GenesisError::InvalidTarget(bits));
    }
    Ok(target)
}

/// Whether `hash`, read as a little-endian integer, is at or below the target.
pub fn meets_target(hash: &Hash256, bits: u32) -> Result<bool> {
    Ok(hash.to_arith() <= compact_to_target(bits)?)
}
