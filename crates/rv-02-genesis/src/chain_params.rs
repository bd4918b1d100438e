//! # Chain Parameters
//!
//! The frozen profile of the selected network together with its verified
//! genesis block. Constructed once at startup and passed to consumers.

use std::sync::Arc;

use rv_01_network_params::{create, NetworkId, NetworkProfile, OverrideArgs};
use shared_types::Hash256;

use crate::builder::build_verified;
use crate::domain::GenesisBlock;
use crate::errors::Result;

#[derive(Debug, Clone)]
pub struct ChainParams {
    profile: Arc<NetworkProfile>,
    genesis: Arc<GenesisBlock>,
}

impl ChainParams {
    /// Verifies the genesis block of an already built profile.
    pub fn new(profile: NetworkProfile) -> Result<Self> {
        let genesis = build_verified(&profile)?;
        Ok(Self {
            profile: Arc::new(profile),
            genesis: Arc::new(genesis),
        })
    }

    /// Builds the profile of `network` with overrides and verifies its genesis.
    pub fn select(network: NetworkId, args: &OverrideArgs) -> Result<Self> {
        Self::new(create(network, args)?)
    }

    pub fn network(&self) -> NetworkId {
        self.profile.id()
    }

    pub fn profile(&self) -> &Arc<NetworkProfile> {
        &self.profile
    }

    pub fn genesis(&self) -> &GenesisBlock {
        &self.genesis
    }

    pub fn genesis_hash(&self) -> Hash256 {
        self.genesis.hash()
    }
}
