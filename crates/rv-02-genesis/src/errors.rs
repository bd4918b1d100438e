//! # Error Types

use rv_01_network_params::{ConfigError, NetworkId};
use shared_types::Hash256;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GenesisError>;

/// Which pinned genesis value failed to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinnedValue {
    BlockHash,
    MerkleRoot,
}

impl std::fmt::Display for PinnedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PinnedValue::BlockHash => f.write_str("block hash"),
            PinnedValue::MerkleRoot => f.write_str("merkle root"),
        }
    }
}

/// Genesis construction errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenesisError {
    /// The rebuilt genesis block disagrees with the pinned value. The node
    /// must not start.
    #[error("{network} genesis {value} mismatch: expected {expected}, computed {actual}")]
    ConsensusFatalMismatch {
        network: NetworkId,
        value: PinnedValue,
        expected: Hash256,
        actual: Hash256,
    },

    /// The rebuilt genesis hash is above the target its header claims.
    #[error("{network} genesis {hash} does not meet target bits {bits:#010x}")]
    InsufficientWork {
        network: NetworkId,
        hash: Hash256,
        bits: u32,
    },

    /// Every nonce was tried without meeting the target.
    #[error("No nonce satisfies target bits {bits:#010x}")]
    NonceSpaceExhausted { bits: u32 },

    /// Compact target encodes a negative, zero or overflowing value.
    #[error("Invalid compact target {0:#010x}")]
    InvalidTarget(u32),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
