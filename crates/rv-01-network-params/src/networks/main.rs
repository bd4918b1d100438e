//! Production network.

use std::collections::BTreeMap;

use shared_types::{Hash256, COIN, U256};

use super::{DELEGATIONS_ADDRESS, GENESIS_MERKLE_ROOT, PUBLIC_TESTDUMMY, TAPROOT_BIT};
use crate::domain::{
    Base58Prefixes, ChainTxData, ConsensusRules, DeploymentWindow, Deployments, GenesisSpec,
    NetworkId, NetworkProfile, NetworkProfileBuilder,
};

pub const GENESIS_HASH: Hash256 =
    Hash256::from_display_hex("00004efa50a2acae549b94d8cf62dd14d40ba395ee20e5b1594771aa5243121b");

/// Last proof-of-work block.
const LAST_POW_CHECKPOINT: Hash256 =
    Hash256::from_display_hex("0000c3fd3fd92aea047a9f62f771325a8c031039591f371f871fd81d4101134e");

pub fn builder() -> NetworkProfileBuilder {
    let downscale = 2;
    let coinbase_maturity = 500;
    let last_pow_block = 2500;
    let mpos_reward_recipients = 1;
    let first_mpos_block = last_pow_block + mpos_reward_recipients + coinbase_maturity;

    let consensus = ConsensusRules {
        subsidy_halving_interval: 985_500,
        subsidy_halving_interval_v2: downscale * 985_500,
        bip16_exception: Hash256::ZERO,
        bip34_height: 0,
        bip34_hash: Hash256::ZERO,
        bip65_height: 0,
        bip66_height: 0,
        csv_height: 1,
        segwit_height: 0,
        min_bip9_warning_height: 2016,
        qip5_height: 0,
        qip6_height: 0,
        qip7_height: 0,
        qip9_height: 0,
        offline_stake_height: 680_000,
        reduce_blocktime_height: 47_000,
        muir_glacier_height: 47_000,
        rule_change_activation_threshold: 1916,
        miner_confirmation_window: 2016,
        deployments: Deployments::new(PUBLIC_TESTDUMMY, DeploymentWindow::never_active(TAPROOT_BIT)),
        pow_limit: U256::MAX >> 16,
        pos_limit: U256::MAX >> 32,
        qip9_pos_limit: U256::MAX >> 51,
        rbt_pos_limit: U256::MAX >> 50,
        pow_target_timespan: 8 * 60,
        pow_target_timespan_v2: 4000,
        rbt_pow_target_timespan: 1000,
        pow_target_spacing: 64,
        rbt_pow_target_spacing: 32,
        pow_allow_min_difficulty_blocks: false,
        pow_no_retargeting: true,
        pos_no_retargeting: false,
        minimum_chain_work: U256::from(0x0010_0000_89c3_0dc3_u64),
        default_assume_valid: LAST_POW_CHECKPOINT,
        blocktime_downscale_factor: downscale as u32,
        coinbase_maturity,
        rbt_coinbase_maturity: downscale * 500,
        last_pow_block,
        last_big_reward: 2500,
        mpos_reward_recipients,
        first_mpos_block,
        last_mpos_block: first_mpos_block,
        fix_utxo_cache_hf_height: 0,
        enable_header_signature_height: 3000,
        checkpoint_span: coinbase_maturity,
        rbt_checkpoint_span: downscale * 500,
        delegations_address: DELEGATIONS_ADDRESS,
        stake_timestamp_mask: 15,
        rbt_stake_timestamp_mask: 3,
    };

    NetworkProfileBuilder::new(NetworkProfile {
        id: NetworkId::Main,
        consensus,
        genesis: GenesisSpec {
            time: 1_616_158_385,
            nonce: 171_713,
            bits: 0x1f00_ffff,
            version: 1,
            reward: 50 * COIN,
            expected_hash: GENESIS_HASH,
            expected_merkle_root: GENESIS_MERKLE_ROOT,
        },
        message_start: [0x52, 0x45, 0x56, 0x4f],
        default_port: 6999,
        prune_after_height: 100_000,
        assumed_blockchain_size: 8,
        assumed_chain_state_size: 1,
        dns_seeds: [
            "seed.revo.network",
            "seed1.revo.network",
            "seed2.revo.network",
            "seed3.revo.network",
            "seed4.revo.network",
        ]
        .map(String::from)
        .to_vec(),
        fixed_seeds: Vec::new(),
        base58_prefixes: Base58Prefixes {
            pubkey_address: 60,
            script_address: 50,
            secret_key: 128,
            ext_public_key: [0x04, 0x88, 0xB2, 0x1E],
            ext_secret_key: [0x04, 0x88, 0xAD, 0xE4],
        },
        bech32_hrp: "rv".to_string(),
        checkpoints: BTreeMap::from([(0, GENESIS_HASH), (2500, LAST_POW_CHECKPOINT)]),
        chain_tx_data: ChainTxData {
            time: 1_616_188_211,
            tx_count: 2501,
            tx_rate: 0.0333333333333,
        },
        default_consistency_checks: false,
        require_standard: true,
        mine_blocks_on_demand: false,
        is_test_chain: false,
        is_mockable_chain: false,
        signet_challenge: None,
    })
}
