//! # rv-02-genesis
//!
//! Deterministic construction of each network's genesis block.
//!
//! The builder assembles the coinbase and header from a
//! [`NetworkProfile`](rv_01_network_params::NetworkProfile), then the block
//! hash and merkle root are compared with the values pinned in the profile.
//! A mismatch is [`GenesisError::ConsensusFatalMismatch`] and the node must
//! refuse to start. A pinned hash above its own target is
//! [`GenesisError::InsufficientWork`].
//!
//! ## Usage
//!
//! ```rust
//! use rv_01_network_params::{NetworkId, OverrideArgs};
//! use rv_02_genesis::ChainParams;
//!
//! let params = ChainParams::select(NetworkId::Regtest, &OverrideArgs::default()).unwrap();
//! println!("genesis {}", params.genesis_hash());
//! ```
//!
//! ## Features
//!
//! - `genesis-mining`: exposes [`mining::mine`], the nonce search used to
//!   mint a new genesis block.

pub mod builder;
pub mod chain_params;
pub mod domain;
pub mod errors;
#[cfg(any(test, feature = "genesis-mining"))]
pub mod mining;

pub use builder::{
    build_verified, verify, GenesisBuilder, GenesisInputs, EMPTY_UTXO_ROOT, GENESIS_MESSAGE,
    GENESIS_REWARD_PUBKEY, GENESIS_STATE_ROOT,
};
pub use chain_params::ChainParams;
pub use domain::{BlockHeader, Encodable, GenesisBlock, GenesisSummary, Script, Transaction};
pub use errors::{GenesisError, PinnedValue, Result};
