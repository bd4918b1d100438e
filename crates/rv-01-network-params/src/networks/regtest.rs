//! Local regression test network and its unit-test variant.

use std::collections::BTreeMap;

use shared_types::{Hash256, COIN, U256};

use super::{DELEGATIONS_ADDRESS, GENESIS_MERKLE_ROOT, TAPROOT_BIT, TESTBIT, TEST_PREFIXES};
use crate::domain::{
    ChainTxData, ConsensusRules, DeploymentStart, DeploymentTimeout, DeploymentWindow,
    Deployments, GenesisSpec, NetworkId, NetworkProfile, NetworkProfileBuilder,
};

pub const GENESIS_HASH: Hash256 =
    Hash256::from_display_hex("73726045b7cdc291f00bbfaf46254c810c86ebf65e3d532b4a5dca5acd40f8ad");

const BIP34_HASH: Hash256 =
    Hash256::from_display_hex("665ed5b402ac0b44efc37d8926332994363e8a7278b7ee9a58fb972efadae943");

/// Prune-after height with `-fastprune`.
pub const FAST_PRUNE_AFTER_HEIGHT: u64 = 100;

pub fn builder() -> NetworkProfileBuilder {
    NetworkProfileBuilder::new(profile(NetworkId::Regtest))
}

/// Regtest adjusted so the 500-block maturity fits the unit-test harness.
pub fn unittest_builder() -> NetworkProfileBuilder {
    let mut profile = profile(NetworkId::Unittest);
    let c = &mut profile.consensus;
    let downscale = c.blocktime_downscale_factor as i32;

    c.bip16_exception = Hash256::ZERO;
    // Far in the future so version 1 blocks are not rejected.
    c.bip34_height = 100_000_000;
    c.bip34_hash = Hash256::ZERO;
    c.bip65_height = downscale * 500 + 851;
    c.bip66_height = downscale * 500 + 751;
    c.qip6_height = downscale * 500 + 500;
    c.qip7_height = 0;

    c.subsidy_halving_interval = 750;
    c.subsidy_halving_interval_v2 = downscale * 750;
    c.rule_change_activation_threshold = downscale as u32 * 558;
    c.miner_confirmation_window = downscale as u32 * 744;

    c.checkpoint_span = c.coinbase_maturity * 2;
    c.rbt_checkpoint_span = c.rbt_coinbase_maturity * 2;

    NetworkProfileBuilder::new(profile)
}

fn profile(id: NetworkId) -> NetworkProfile {
    let downscale = 4;
    let coinbase_maturity = 500;

    let consensus = ConsensusRules {
        subsidy_halving_interval: 985_500,
        subsidy_halving_interval_v2: downscale * 985_500,
        bip16_exception: BIP34_HASH,
        bip34_height: 0,
        bip34_hash: BIP34_HASH,
        bip65_height: 0,
        bip66_height: 0,
        csv_height: 432,
        segwit_height: 0,
        min_bip9_warning_height: 0,
        qip5_height: 0,
        qip6_height: 0,
        qip7_height: 0,
        qip9_height: 0,
        offline_stake_height: 1,
        reduce_blocktime_height: 0,
        muir_glacier_height: 0,
        rule_change_activation_threshold: 108,
        miner_confirmation_window: 144,
        deployments: Deployments::new(
            DeploymentWindow::new(TESTBIT, DeploymentStart::At(0), DeploymentTimeout::NoTimeout),
            DeploymentWindow::always_active(TAPROOT_BIT),
        ),
        pow_limit: U256::MAX >> 1,
        pos_limit: U256::MAX >> 1,
        qip9_pos_limit: U256::MAX >> 1,
        rbt_pos_limit: U256::MAX >> 1,
        pow_target_timespan: 16 * 60,
        pow_target_timespan_v2: 4000,
        rbt_pow_target_timespan: 1000,
        pow_target_spacing: 2 * 64,
        rbt_pow_target_spacing: 32,
        pow_allow_min_difficulty_blocks: true,
        pow_no_retargeting: true,
        pos_no_retargeting: true,
        minimum_chain_work: U256::zero(),
        default_assume_valid: Hash256::ZERO,
        blocktime_downscale_factor: downscale as u32,
        coinbase_maturity,
        rbt_coinbase_maturity: downscale * 500,
        last_pow_block: 0x7fff_ffff,
        last_big_reward: 5000,
        mpos_reward_recipients: 10,
        first_mpos_block: 5000,
        last_mpos_block: 0,
        fix_utxo_cache_hf_height: 0,
        enable_header_signature_height: 0,
        checkpoint_span: coinbase_maturity,
        rbt_checkpoint_span: downscale * 500,
        delegations_address: DELEGATIONS_ADDRESS,
        stake_timestamp_mask: 15,
        rbt_stake_timestamp_mask: 3,
    };

    NetworkProfile {
        id,
        consensus,
        genesis: GenesisSpec {
            time: 1_616_158_383,
            nonce: 2,
            bits: 0x207f_ffff,
            version: 1,
            reward: 50 * COIN,
            expected_hash: GENESIS_HASH,
            expected_merkle_root: GENESIS_MERKLE_ROOT,
        },
        message_start: [0xfd, 0xdd, 0xc6, 0xe1],
        default_port: 23888,
        prune_after_height: 1000,
        assumed_blockchain_size: 0,
        assumed_chain_state_size: 0,
        dns_seeds: Vec::new(),
        fixed_seeds: Vec::new(),
        base58_prefixes: TEST_PREFIXES,
        bech32_hrp: "qcrt".to_string(),
        checkpoints: BTreeMap::from([(0, GENESIS_HASH)]),
        chain_tx_data: ChainTxData::default(),
        default_consistency_checks: true,
        require_standard: true,
        mine_blocks_on_demand: true,
        is_test_chain: true,
        is_mockable_chain: true,
        signet_challenge: None,
    }
}
