//! Public test network.

use std::collections::BTreeMap;

use shared_types::{Hash256, COIN, U256};

use super::{
    DELEGATIONS_ADDRESS, GENESIS_MERKLE_ROOT, PUBLIC_TESTDUMMY, TAPROOT_BIT, TEST_PREFIXES,
};
use crate::domain::{
    ChainTxData, ConsensusRules, DeploymentWindow, Deployments, GenesisSpec, NetworkId,
    NetworkProfile, NetworkProfileBuilder,
};

pub const GENESIS_HASH: Hash256 =
    Hash256::from_display_hex("0000fa0422c2a5e45d00346b9071d7c2a300b73c10cfde9d1213adc1970c42cb");

const BIP34_HASH: Hash256 =
    Hash256::from_display_hex("0000e803ee215c0684ca0d2f9220594d3f828617972aad66feb2ba51f5e14222");

const ASSUME_VALID: Hash256 =
    Hash256::from_display_hex("89b010b5333fa9d22c7fcf157c7eeaee1ccfe80c435390243b3d782a1fc1eff7");

pub fn builder() -> NetworkProfileBuilder {
    let downscale = 4;
    let coinbase_maturity = 500;
    let last_pow_block = 5000;
    let mpos_reward_recipients = 10;

    let consensus = ConsensusRules {
        subsidy_halving_interval: 985_500,
        subsidy_halving_interval_v2: downscale * 985_500,
        bip16_exception: BIP34_HASH,
        bip34_height: 0,
        bip34_hash: BIP34_HASH,
        bip65_height: 0,
        bip66_height: 0,
        csv_height: 6048,
        segwit_height: 6048,
        min_bip9_warning_height: 8064,
        qip5_height: 446_320,
        qip6_height: 446_320,
        qip7_height: 446_320,
        qip9_height: 446_320,
        offline_stake_height: 625_000,
        reduce_blocktime_height: 806_600,
        muir_glacier_height: 806_600,
        rule_change_activation_threshold: 1512,
        miner_confirmation_window: 2016,
        deployments: Deployments::new(PUBLIC_TESTDUMMY, DeploymentWindow::never_active(TAPROOT_BIT)),
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
        minimum_chain_work: U256::from(0x78_1160_1953_4647_7981_u128),
        default_assume_valid: ASSUME_VALID,
        blocktime_downscale_factor: downscale as u32,
        coinbase_maturity,
        rbt_coinbase_maturity: downscale * 500,
        last_pow_block,
        last_big_reward: 5000,
        mpos_reward_recipients,
        first_mpos_block: last_pow_block + mpos_reward_recipients + coinbase_maturity,
        last_mpos_block: 624_999,
        fix_utxo_cache_hf_height: 84_500,
        enable_header_signature_height: 391_993,
        checkpoint_span: coinbase_maturity,
        rbt_checkpoint_span: downscale * 500,
        delegations_address: DELEGATIONS_ADDRESS,
        stake_timestamp_mask: 15,
        rbt_stake_timestamp_mask: 3,
    };

    NetworkProfileBuilder::new(NetworkProfile {
        id: NetworkId::Test,
        consensus,
        genesis: GenesisSpec {
            time: 1_616_158_384,
            nonce: 53_150,
            bits: 0x1f00_ffff,
            version: 1,
            reward: 50 * COIN,
            expected_hash: GENESIS_HASH,
            expected_merkle_root: GENESIS_MERKLE_ROOT,
        },
        message_start: [0x0d, 0x22, 0x15, 0x06],
        default_port: 13888,
        prune_after_height: 1000,
        assumed_blockchain_size: 4,
        assumed_chain_state_size: 1,
        dns_seeds: vec!["revo4.dynu.net".to_string()],
        fixed_seeds: Vec::new(),
        base58_prefixes: TEST_PREFIXES,
        bech32_hrp: "tq".to_string(),
        checkpoints: BTreeMap::from([(0, GENESIS_HASH)]),
        chain_tx_data: ChainTxData {
            time: 1_602_363_600,
            tx_count: 1_505_398,
            tx_rate: 0.016913121136215,
        },
        default_consistency_checks: false,
        require_standard: false,
        mine_blocks_on_demand: false,
        is_test_chain: true,
        is_mockable_chain: false,
        signet_challenge: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_testnet_identity() {
        let profile = builder().build().unwrap();
        assert_eq!(profile.message_start(), [0x0d, 0x22, 0x15, 0x06]);
        assert_eq!(profile.default_port(), 13888);
        assert_eq!(profile.bech32_hrp(), "tq");
        assert_eq!(profile.base58_prefixes().secret_key, 239);
        assert!(!profile.require_standard());
    }

    #[test]
    fn test_testnet_mpos_window() {
        let c = builder().build().unwrap().consensus().clone();
        assert_eq!(c.first_mpos_block, 5510);
        assert_eq!(c.last_mpos_block, 624_999);
        assert_eq!(c.bip16_exception, c.bip34_hash);
    }

    #[test]
    fn test_minimum_chain_work_literal() {
        let c = builder().build().unwrap().consensus().clone();
        let literal = U256::from_str_radix("781160195346477981", 16).unwrap();
        assert_eq!(c.minimum_chain_work, literal);
    }
}
