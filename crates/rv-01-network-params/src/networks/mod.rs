//! Per-network profile builders.
//!
//! Each module exposes one `builder` function returning a
//! [`NetworkProfileBuilder`](crate::NetworkProfileBuilder) populated with that
//! network's compiled-in parameters.

pub mod main;
pub mod regtest;
pub mod signet;
pub mod test;

use shared_types::{h160_from_hex, Hash256, H160};

use crate::domain::{
    Base58Prefixes, DeploymentStart, DeploymentTimeout, DeploymentWindow,
};

/// Merkle root of the genesis coinbase, shared by every network.
pub const GENESIS_MERKLE_ROOT: Hash256 =
    Hash256::from_display_hex("84ed8aac078bac024905ad72822603d5ef283a4ad4ef92b2d17ffd49e7a32fc4");

/// Delegations contract for offline staking.
pub const DELEGATIONS_ADDRESS: H160 = h160_from_hex("0000000000000000000000000000000000000086");

pub(crate) const TESTBIT: u8 = 28;
pub(crate) const TAPROOT_BIT: u8 = 2;

/// Dummy deployment window of the public networks (calendar year 2008).
pub(crate) const PUBLIC_TESTDUMMY: DeploymentWindow = DeploymentWindow::new(
    TESTBIT,
    DeploymentStart::At(1_199_145_601),
    DeploymentTimeout::At(1_230_767_999),
);

pub(crate) const TEST_PREFIXES: Base58Prefixes = Base58Prefixes {
    pubkey_address: 120,
    script_address: 110,
    secret_key: 239,
    ext_public_key: [0x04, 0x35, 0x87, 0xCF],
    ext_secret_key: [0x04, 0x35, 0x83, 0x94],
};
