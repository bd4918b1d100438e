//! # Network Profile
//!
//! The immutable parameter value of one network. Profiles are assembled by a
//! [`NetworkProfileBuilder`], which is the only place rules can be changed,
//! and are read-only once [`NetworkProfileBuilder::build`] returns.

use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::sync::Arc;

use serde::{Serialize, Serializer};
use shared_types::{Amount, BlockHeight, Hash256, H160};
use tracing::debug;

use super::consensus::ConsensusRules;
use super::deployment::{DeploymentId, DeploymentWindow};
use super::network::NetworkId;
use super::vm_forks::VmForkSchedule;
use crate::errors::Result;

// =============================================================================
// VALUE OBJECTS
// =============================================================================

/// Base58 version prefixes for addresses and extended keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Base58Prefixes {
    pub pubkey_address: u8,
    pub script_address: u8,
    pub secret_key: u8,
    pub ext_public_key: [u8; 4],
    pub ext_secret_key: [u8; 4],
}

/// Genesis header inputs and the values the built block must hash to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenesisSpec {
    pub time: u32,
    pub nonce: u32,
    pub bits: u32,
    pub version: i32,
    pub reward: Amount,
    pub expected_hash: Hash256,
    pub expected_merkle_root: Hash256,
}

/// Transaction statistics used to estimate sync progress.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ChainTxData {
    /// Unix time of the last known transaction count.
    pub time: i64,
    pub tx_count: u64,
    /// Estimated transactions per second after `time`.
    pub tx_rate: f64,
}

// =============================================================================
// PROFILE
// =============================================================================

/// Complete parameter set of one network.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkProfile {
    pub(crate) id: NetworkId,
    pub(crate) consensus: ConsensusRules,
    pub(crate) genesis: GenesisSpec,
    pub(crate) message_start: [u8; 4],
    pub(crate) default_port: u16,
    pub(crate) prune_after_height: u64,
    pub(crate) assumed_blockchain_size: u64,
    pub(crate) assumed_chain_state_size: u64,
    pub(crate) dns_seeds: Vec<String>,
    pub(crate) fixed_seeds: Vec<SocketAddr>,
    pub(crate) base58_prefixes: Base58Prefixes,
    pub(crate) bech32_hrp: String,
    pub(crate) checkpoints: BTreeMap<BlockHeight, Hash256>,
    pub(crate) chain_tx_data: ChainTxData,
    pub(crate) default_consistency_checks: bool,
    pub(crate) require_standard: bool,
    pub(crate) mine_blocks_on_demand: bool,
    pub(crate) is_test_chain: bool,
    pub(crate) is_mockable_chain: bool,
    #[serde(serialize_with = "serialize_opt_hex")]
    pub(crate) signet_challenge: Option<Vec<u8>>,
}

fn serialize_opt_hex<S: Serializer>(
    bytes: &Option<Vec<u8>>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match bytes {
        Some(b) => serializer.serialize_some(&hex::encode(b)),
        None => serializer.serialize_none(),
    }
}

impl NetworkProfile {
    pub fn id(&self) -> NetworkId {
        self.id
    }

    pub fn consensus(&self) -> &ConsensusRules {
        &self.consensus
    }

    pub fn genesis(&self) -> &GenesisSpec {
        &self.genesis
    }

    /// Four bytes prefixed to every P2P message.
    pub fn message_start(&self) -> [u8; 4] {
        self.message_start
    }

    pub fn default_port(&self) -> u16 {
        self.default_port
    }

    pub fn prune_after_height(&self) -> u64 {
        self.prune_after_height
    }

    /// Approximate block data size in GB.
    pub fn assumed_blockchain_size(&self) -> u64 {
        self.assumed_blockchain_size
    }

    /// Approximate chain state size in GB.
    pub fn assumed_chain_state_size(&self) -> u64 {
        self.assumed_chain_state_size
    }

    pub fn dns_seeds(&self) -> &[String] {
        &self.dns_seeds
    }

    pub fn fixed_seeds(&self) -> &[SocketAddr] {
        &self.fixed_seeds
    }

    pub fn base58_prefixes(&self) -> &Base58Prefixes {
        &self.base58_prefixes
    }

    pub fn bech32_hrp(&self) -> &str {
        &self.bech32_hrp
    }

    pub fn checkpoints(&self) -> &BTreeMap<BlockHeight, Hash256> {
        &self.checkpoints
    }

    pub fn chain_tx_data(&self) -> &ChainTxData {
        &self.chain_tx_data
    }

    pub fn default_consistency_checks(&self) -> bool {
        self.default_consistency_checks
    }

    pub fn require_standard(&self) -> bool {
        self.require_standard
    }

    pub fn mine_blocks_on_demand(&self) -> bool {
        self.mine_blocks_on_demand
    }

    pub fn is_test_chain(&self) -> bool {
        self.is_test_chain
    }

    /// Whether the node clock may be mocked.
    pub fn is_mockable_chain(&self) -> bool {
        self.is_mockable_chain
    }

    pub fn signet_challenge(&self) -> Option<&[u8]> {
        self.signet_challenge.as_deref()
    }

    /// VM fork schedule with this network's QIP7, QIP6 and Muir Glacier heights.
    pub fn vm_fork_schedule(&self) -> VmForkSchedule {
        VmForkSchedule::from_rules(&self.consensus)
    }
}

// =============================================================================
// BUILDER
// =============================================================================

/// Mutable profile under construction.
///
/// Setters here mirror the adjustments the unit-test harness and operator
/// overrides make. None of them are reachable after [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct NetworkProfileBuilder {
    profile: NetworkProfile,
}

impl NetworkProfileBuilder {
    pub(crate) fn new(profile: NetworkProfile) -> Self {
        Self { profile }
    }

    /// Read access to the profile being built.
    pub fn profile(&self) -> &NetworkProfile {
        &self.profile
    }

    pub fn update_op_sender_height(&mut self, height: i32) -> &mut Self {
        self.profile.consensus.qip5_height = height;
        self
    }

    pub fn update_btc_ecrecover_height(&mut self, height: i32) -> &mut Self {
        self.profile.consensus.qip6_height = height;
        self
    }

    pub fn update_constantinople_height(&mut self, height: i32) -> &mut Self {
        self.profile.consensus.qip7_height = height;
        self
    }

    /// Moves QIP9 to `height` and restores the production difficulty and
    /// MPoS settings that go with it.
    pub fn update_difficulty_change_height(&mut self, height: i32) -> &mut Self {
        let c = &mut self.profile.consensus;
        c.subsidy_halving_interval = 985_500;
        c.subsidy_halving_interval_v2 = c.blocktime_downscale_factor as i32 * 985_500;
        c.pos_limit = shared_types::U256::MAX >> 32;
        c.qip9_pos_limit = shared_types::U256::MAX >> 51;
        c.rbt_pos_limit = shared_types::U256::MAX >> 50;
        c.qip9_height = height;
        c.pow_allow_min_difficulty_blocks = false;
        c.pow_no_retargeting = true;
        c.pos_no_retargeting = false;
        c.last_pow_block = 5000;
        c.mpos_reward_recipients = 10;
        c.first_mpos_block = c.last_pow_block + c.mpos_reward_recipients + c.coinbase_maturity;
        c.last_mpos_block = 0;
        self
    }

    pub fn update_offline_staking_height(&mut self, height: i32) -> &mut Self {
        self.profile.consensus.offline_stake_height = height;
        self
    }

    pub fn update_delegations_address(&mut self, address: H160) -> &mut Self {
        self.profile.consensus.delegations_address = address;
        self
    }

    pub fn update_last_mpos_height(&mut self, height: i32) -> &mut Self {
        self.profile.consensus.last_mpos_block = height;
        self
    }

    pub fn update_reduce_blocktime_height(&mut self, height: i32) -> &mut Self {
        self.profile.consensus.reduce_blocktime_height = height;
        self
    }

    pub fn update_pow_allow_min_difficulty_blocks(&mut self, value: bool) -> &mut Self {
        self.profile.consensus.pow_allow_min_difficulty_blocks = value;
        self
    }

    pub fn update_pow_no_retargeting(&mut self, value: bool) -> &mut Self {
        self.profile.consensus.pow_no_retargeting = value;
        self
    }

    pub fn update_pos_no_retargeting(&mut self, value: bool) -> &mut Self {
        self.profile.consensus.pos_no_retargeting = value;
        self
    }

    pub fn update_muir_glacier_height(&mut self, height: i32) -> &mut Self {
        self.profile.consensus.muir_glacier_height = height;
        self
    }

    pub(crate) fn set_segwit_height(&mut self, height: i32) -> &mut Self {
        self.profile.consensus.segwit_height = height;
        self
    }

    pub(crate) fn set_deployment(&mut self, id: DeploymentId, window: DeploymentWindow) -> &mut Self {
        *self.profile.consensus.deployments.get_mut(id) = window;
        self
    }

    pub(crate) fn set_dns_seeds(&mut self, seeds: Vec<String>) -> &mut Self {
        self.profile.dns_seeds = seeds;
        self
    }

    pub(crate) fn set_prune_after_height(&mut self, height: u64) -> &mut Self {
        self.profile.prune_after_height = height;
        self
    }

    /// Validates the assembled rules and freezes the profile.
    pub fn build(self) -> Result<NetworkProfile> {
        self.profile.consensus.deployments.validate()?;
        debug!(
            network = %self.profile.id,
            checkpoints = self.profile.checkpoints.len(),
            "Network profile frozen"
        );
        Ok(self.profile)
    }

    /// Builds and wraps the profile for sharing across threads.
    pub fn build_shared(self) -> Result<Arc<NetworkProfile>> {
        self.build().map(Arc::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::networks;
    use shared_types::U256;

    #[test]
    fn test_builder_setters_touch_only_their_field() {
        let mut builder = networks::regtest::builder();
        let before = builder.profile().consensus().clone();
        builder
            .update_op_sender_height(11)
            .update_btc_ecrecover_height(12)
            .update_constantinople_height(13)
            .update_muir_glacier_height(14);
        let after = builder.profile().consensus();
        assert_eq!(after.qip5_height, 11);
        assert_eq!(after.qip6_height, 12);
        assert_eq!(after.qip7_height, 13);
        assert_eq!(after.muir_glacier_height, 14);
        assert_eq!(after.qip9_height, before.qip9_height);
        assert_eq!(after.pow_limit, before.pow_limit);
    }

    #[test]
    fn test_difficulty_change_bundle() {
        let mut builder = networks::regtest::builder();
        builder.update_difficulty_change_height(3000);
        let c = builder.profile().consensus();
        assert_eq!(c.qip9_height, 3000);
        assert_eq!(c.pos_limit, U256::MAX >> 32);
        assert_eq!(c.qip9_pos_limit, U256::MAX >> 51);
        assert_eq!(c.rbt_pos_limit, U256::MAX >> 50);
        assert!(!c.pow_allow_min_difficulty_blocks);
        assert!(!c.pos_no_retargeting);
        assert_eq!(c.last_pow_block, 5000);
        assert_eq!(c.first_mpos_block, 5000 + 10 + 500);
        assert_eq!(c.last_mpos_block, 0);
        assert_eq!(c.subsidy_halving_interval_v2, 4 * 985_500);
    }

    #[test]
    fn test_retarget_toggles() {
        let mut builder = networks::regtest::builder();
        builder
            .update_pow_allow_min_difficulty_blocks(false)
            .update_pow_no_retargeting(false)
            .update_pos_no_retargeting(false)
            .update_last_mpos_height(77)
            .update_offline_staking_height(5)
            .update_reduce_blocktime_height(9);
        let profile = builder.build().unwrap();
        let c = profile.consensus();
        assert!(!c.pow_allow_min_difficulty_blocks);
        assert!(!c.pow_no_retargeting);
        assert!(!c.pos_no_retargeting);
        assert_eq!(c.last_mpos_block, 77);
        assert_eq!(c.offline_stake_height, 5);
        assert_eq!(c.reduce_blocktime_height, 9);
    }

    #[test]
    fn test_delegations_address_update() {
        let mut builder = networks::main::builder();
        let addr = shared_types::h160_from_hex("00000000000000000000000000000000000000aa");
        builder.update_delegations_address(addr);
        assert_eq!(builder.build().unwrap().consensus().delegations_address, addr);
    }

    #[test]
    fn test_profile_serializes_to_json() {
        let profile = networks::main::builder().build().unwrap();
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["id"], "main");
        assert_eq!(json["bech32_hrp"], "rv");
        assert_eq!(json["default_port"], 6999);
        assert!(json["signet_challenge"].is_null());
    }
}
