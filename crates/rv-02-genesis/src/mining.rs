//! Nonce search for minting a new genesis block.
//!
//! Only compiled for tests or with the `genesis-mining` feature; a running
//! node always uses the pinned nonce.

use tracing::{debug, info};

use crate::builder::{GenesisBuilder, GenesisInputs};
use crate::domain::{compact_to_target, GenesisBlock};
use crate::errors::{GenesisError, Result};

/// Returns the first block, trying nonces upward from `start_nonce`, whose
/// hash meets the compact target in `inputs.bits`.
pub fn mine(inputs: &GenesisInputs, start_nonce: u32) -> Result<GenesisBlock> {
    let target = compact_to_target(inputs.bits)?;
    let mut block = GenesisBuilder::new(inputs.clone()).with_nonce(start_nonce).build();

    loop {
        if block.hash().to_arith() <= target {
            info!(nonce = block.header.nonce, hash = %block.hash(), "Found genesis nonce");
            return Ok(block);
        }
        if block.header.nonce % 1_000_000 == 0 {
            debug!(nonce = block.header.nonce, "Searching genesis nonce");
        }
        block.header.nonce = block
            .header
            .nonce
            .checked_add(1)
            .ok_or(GenesisError::NonceSpaceExhausted { bits: inputs.bits })?;
    }
}
