//! Signed-block test network.
//!
//! Blocks must satisfy a challenge script. The message start is derived from
//! that script, so nodes using a custom challenge form their own network.
//!
//! Revo has no historical signet. The default port 33888, the `tq` HRP, the
//! genesis time and nonce, the default challenge and the message start it
//! yields were all chosen for this crate. None of them are inherited
//! consensus values, and the genesis pin was mined from these inputs.

use std::collections::BTreeMap;

use shared_types::{decode_hex_array, encode_var_bytes, sha256d, Hash256, COIN, U256};

use super::{
    DELEGATIONS_ADDRESS, GENESIS_MERKLE_ROOT, PUBLIC_TESTDUMMY, TAPROOT_BIT, TEST_PREFIXES,
};
use crate::domain::{
    ChainTxData, ConsensusRules, DeploymentWindow, Deployments, GenesisSpec, NetworkId,
    NetworkProfile, NetworkProfileBuilder,
};

pub const GENESIS_HASH: Hash256 =
    Hash256::from_display_hex("00002bf3e5763079ec2029ad9f3bc4c89394226e0e130a81ed836d3793d0662d");

/// 1-of-2 multisig challenge of the public signet.
pub const DEFAULT_CHALLENGE: [u8; 71] = decode_hex_array(
    "512103ad5e0edad18cb1f0fc0d28a3d4f1f3e445640337489abb10404f2d1e086be430\
     210359ef5021964fe22d6f8e05b2463c9540ce96883fe3b278760f048f5189f2e6c452ae",
);

/// First four bytes of `sha256d(compact_size(len) || challenge)`.
pub fn message_start(challenge: &[u8]) -> [u8; 4] {
    let mut data = Vec::with_capacity(challenge.len() + 9);
    encode_var_bytes(challenge, &mut data);
    let hash = sha256d(&data);
    let mut magic = [0u8; 4];
    magic.copy_from_slice(&hash.as_bytes()[..4]);
    magic
}

pub fn builder() -> NetworkProfileBuilder {
    builder_with_challenge(DEFAULT_CHALLENGE.to_vec())
}

pub fn builder_with_challenge(challenge: Vec<u8>) -> NetworkProfileBuilder {
    let downscale = 4;
    let coinbase_maturity = 500;
    let last_pow_block = 5000;
    let mpos_reward_recipients = 10;

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
        min_bip9_warning_height: 0,
        qip5_height: 0,
        qip6_height: 0,
        qip7_height: 0,
        qip9_height: 0,
        offline_stake_height: 1,
        reduce_blocktime_height: 0,
        muir_glacier_height: 0,
        rule_change_activation_threshold: 1512,
        miner_confirmation_window: 2016,
        deployments: Deployments::new(PUBLIC_TESTDUMMY, DeploymentWindow::always_active(TAPROOT_BIT)),
        pow_limit: U256::MAX >> 16,
        pos_limit: U256::MAX >> 16,
        qip9_pos_limit: U256::MAX >> 51,
        rbt_pos_limit: U256::MAX >> 50,
        pow_target_timespan: 16 * 60,
        pow_target_timespan_v2: 4000,
        rbt_pow_target_timespan: 1000,
        pow_target_spacing: 2 * 64,
        rbt_pow_target_spacing: 32,
        pow_allow_min_difficulty_blocks: false,
        pow_no_retargeting: true,
        pos_no_retargeting: false,
        minimum_chain_work: U256::zero(),
        default_assume_valid: Hash256::ZERO,
        blocktime_downscale_factor: downscale as u32,
        coinbase_maturity,
        rbt_coinbase_maturity: downscale * 500,
        last_pow_block,
        last_big_reward: 5000,
        mpos_reward_recipients,
        first_mpos_block: last_pow_block + mpos_reward_recipients + coinbase_maturity,
        last_mpos_block: 0,
        fix_utxo_cache_hf_height: 0,
        enable_header_signature_height: 0,
        checkpoint_span: coinbase_maturity,
        rbt_checkpoint_span: downscale * 500,
        delegations_address: DELEGATIONS_ADDRESS,
        stake_timestamp_mask: 15,
        rbt_stake_timestamp_mask: 3,
    };

    NetworkProfileBuilder::new(NetworkProfile {
        id: NetworkId::Signet,
        consensus,
        genesis: GenesisSpec {
            time: 1_616_158_386,
            nonce: 130_551,
            bits: 0x1f00_ffff,
            version: 1,
            reward: 50 * COIN,
            expected_hash: GENESIS_HASH,
            expected_merkle_root: GENESIS_MERKLE_ROOT,
        },
        message_start: message_start(&challenge),
        default_port: 33888,
        prune_after_height: 1000,
        assumed_blockchain_size: 1,
        assumed_chain_state_size: 0,
        dns_seeds: Vec::new(),
        fixed_seeds: Vec::new(),
        base58_prefixes: TEST_PREFIXES,
        bech32_hrp: "tq".to_string(),
        checkpoints: BTreeMap::from([(0, GENESIS_HASH)]),
        chain_tx_data: ChainTxData::default(),
        default_consistency_checks: false,
        require_standard: true,
        mine_blocks_on_demand: false,
        is_test_chain: true,
        is_mockable_chain: false,
        signet_challenge: Some(challenge),
    })
}
